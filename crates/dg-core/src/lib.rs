pub mod color;
pub mod constants;
pub mod debounce;
pub mod entity;
pub mod frame;
pub mod lang;
pub mod lifecycle;
pub mod render;
pub mod scene;
pub mod update;

pub use color::*;
pub use constants::*;
pub use debounce::Debouncer;
pub use entity::*;
pub use frame::advance_frame;
pub use lang::{Lang, LangError};
pub use lifecycle::*;
pub use render::*;
pub use scene::*;
