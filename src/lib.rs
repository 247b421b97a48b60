//! Client-side behavior for the GarageForge site: project galleries, the
//! quote estimator, the signup form and the small navigation helpers.
//!
//! Everything outside `dom` is plain Rust and tested natively; `dom` binds it
//! to the page and only exists on `wasm32`.

pub mod catalog;
pub mod config;
pub mod error;
pub mod quote;
pub mod selection;
pub mod signup;
pub mod upload;

#[cfg(target_arch = "wasm32")]
pub mod dom;

// ── Web entry‑point ──
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    // Redirect `log` macros & panic messages to the browser console
    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    console_log::init_with_level(level).ok();
    console_error_panic_hook::set_once();

    dom::mount_page()?;
    Ok(())
}
