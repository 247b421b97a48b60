use thiserror::Error;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsValue;

/// Failures while wiring the page. None of these reach the visitor; a
/// feature that hits one simply stays inert.
#[derive(Debug, Error)]
pub enum SiteError {
    #[error("no window in this context")]
    NoWindow,
    #[error("no document on window")]
    NoDocument,
    #[error("missing element {0}")]
    MissingElement(&'static str),
    #[error("js: {0}")]
    Js(String),
}

pub type SiteResult<T> = Result<T, SiteError>;

#[cfg(target_arch = "wasm32")]
pub(crate) fn js_err(error: JsValue) -> String {
    if let Some(value) = error.as_string() {
        return value;
    }
    if let Ok(json) = js_sys::JSON::stringify(&error) {
        if let Some(value) = json.as_string() {
            return value;
        }
    }
    "js error".to_string()
}

#[cfg(target_arch = "wasm32")]
impl From<JsValue> for SiteError {
    fn from(error: JsValue) -> Self {
        SiteError::Js(js_err(error))
    }
}

#[cfg(target_arch = "wasm32")]
impl From<SiteError> for JsValue {
    fn from(error: SiteError) -> Self {
        JsValue::from_str(&error.to_string())
    }
}
