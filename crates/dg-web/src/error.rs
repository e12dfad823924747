/// Reasons the section animation does not attach. None of them are fatal;
/// the page simply renders without the animation.
#[derive(Debug, thiserror::Error)]
pub enum MountError {
    #[error("no window")]
    NoWindow,
    #[error("no document")]
    NoDocument,
    #[error("missing #{0}")]
    MissingElement(String),
    #[error("#{0} is not a <canvas>")]
    NotCanvas(String),
    #[error("2d context unavailable")]
    NoContext,
}

impl MountError {
    /// Absent markup means the page does not use the feature.
    pub fn is_absent_markup(&self) -> bool {
        matches!(self, MountError::MissingElement(_))
    }
}

pub fn js_err(e: wasm_bindgen::JsValue) -> anyhow::Error {
    anyhow::anyhow!(format!("{:?}", e))
}
