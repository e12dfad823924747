#![cfg(target_arch = "wasm32")]
use dg_core::Lang;
use wasm_bindgen::prelude::*;

mod config;
mod constants;
mod dom;
mod error;
mod events;
mod frame;
mod lang;
mod painter;
mod ui;

pub use config::MountOptions;
pub use error::MountError;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("dg-web starting");

    let Some((window, document)) = dom::window_document() else {
        log::warn!("no window/document; nothing to do");
        return Ok(());
    };

    lang::init(&window, &document);
    ui::wire_mobile_menu(&document);
    if let Err(e) = ui::wire_reveal_on_scroll(&document) {
        log::warn!("reveal-on-scroll fallback: {:?}", e);
    }

    if let Err(e) = frame::mount(&MountOptions::default()) {
        match e.downcast_ref::<MountError>() {
            Some(m) if m.is_absent_markup() => log::info!("section animation inactive: {}", m),
            _ => log::warn!("section animation not started: {:?}", e),
        }
    }
    Ok(())
}

/// Saved language preference (`"es"` / `"en"`), or `null` when none is stored.
#[wasm_bindgen(js_name = getPreference)]
pub fn get_preference() -> JsValue {
    match dg_core::lang::saved_preference(lang::stored_preference().as_deref()) {
        Some(code) => JsValue::from_str(code),
        None => JsValue::NULL,
    }
}

/// Persist a language preference; unknown values are ignored.
#[wasm_bindgen(js_name = setPreference)]
pub fn set_preference(value: &str) {
    match value.parse::<Lang>() {
        Ok(l) => lang::set_preference(l),
        Err(e) => log::warn!("{}", e),
    }
}
