//! Required-field check on the quote request form.

use std::rc::Rc;

use js_sys::Reflect;
use log::debug;
use wasm_bindgen::JsValue;
use web_sys::{Document, Element};

use super::{alert, all_in, as_html, first, listen};
use crate::config::SiteConfig;
use crate::config::selectors::*;
use crate::error::SiteResult;

pub const MISSING_FIELDS_MESSAGE: &str = "Please fill in all required fields.";

pub fn mount(document: &Document, _config: &Rc<SiteConfig>) -> SiteResult<()> {
    let Some(form) = first(document, QUOTE_FORM) else {
        debug!("no quote form on page");
        return Ok(());
    };
    let target = form.clone();
    listen(&form, "submit", move |event| {
        if let Some(field) = first_empty_required(&target) {
            event.prevent_default();
            if let Some(html) = as_html(&field) {
                let _ = html.focus();
            }
            alert(MISSING_FIELDS_MESSAGE);
        }
    });
    Ok(())
}

/// First `[required]` control whose trimmed value is empty.
pub fn first_empty_required(form: &Element) -> Option<Element> {
    all_in(form, REQUIRED_FIELD)
        .into_iter()
        .find(|field| field_value(field).trim().is_empty())
}

// Inputs, selects and textareas all expose `value`.
fn field_value(field: &Element) -> String {
    Reflect::get(field, &JsValue::from_str("value"))
        .ok()
        .and_then(|value| value.as_string())
        .unwrap_or_default()
}
