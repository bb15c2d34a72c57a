//! Client-side interactivity for a static portfolio page.
//!
//! This crate is compiled to WebAssembly and loaded by the page after its
//! markup. It reveals sections and project cards as they scroll into view,
//! smooth-scrolls in-page navigation, persists a light/dark theme, highlights
//! the nav link for the section being read, and tilts cards under the
//! pointer.
//!
//! ```js
//! import init, { start } from "./pkg/folio_interactions.js";
//! await init();
//! start();
//! ```
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`controller`] | Wires each behavior to the DOM |
//! | [`dom`] | `web-sys` helpers, listeners, and `localStorage` store |
//! | [`theme`] | Theme state, initial resolution, and the persistence seam |
//! | [`nav`] | Active-section selection and nav link state |
//! | [`reveal`] | One-way reveal ledger and card stagger |
//! | [`tilt`] | Pointer-to-rotation math for cards |
//! | [`config`] | Selectors, class names, and tuning knobs |
//! | [`consts`] | Shared numeric constants |
//! | [`error`] | Boundary error type |

pub mod config;
pub mod consts;
pub mod controller;
pub mod dom;
pub mod error;
pub mod nav;
pub mod reveal;
pub mod theme;
pub mod tilt;

use std::cell::Cell;

use wasm_bindgen::prelude::*;

use crate::config::PageConfig;
use crate::error::PageError;

thread_local! {
    static STARTED: Cell<bool> = const { Cell::new(false) };
}

/// Start the page controller with the default configuration.
#[wasm_bindgen]
pub fn start() {
    if let Err(err) = boot(PageConfig::default()) {
        log::error!("page controller failed to start: {err}");
    }
}

/// Start the page controller with a JSON configuration object.
///
/// Keys that are left out keep their defaults.
///
/// # Errors
///
/// Returns the parse error if `config` is not a valid configuration.
#[wasm_bindgen]
pub fn start_with_config(config: &str) -> Result<(), JsValue> {
    let config = PageConfig::from_json(config)?;
    boot(config)?;
    Ok(())
}

/// Set up logging, then install the controller once the document is parsed.
fn boot(config: PageConfig) -> Result<(), PageError> {
    if STARTED.with(|started| started.replace(true)) {
        log::warn!("page controller already started");
        return Ok(());
    }

    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(config.log_level.into()) {
        log::debug!("console logger not installed: {err}");
    }

    let window = dom::window()?;
    let document = dom::document(&window)?;
    if document.ready_state() != "loading" {
        return controller::install(config);
    }

    let mut pending = Some(config);
    dom::listen_once(&document, "DOMContentLoaded", move |_event| match pending.take() {
        Some(config) => {
            if let Err(err) = controller::install(config) {
                log::error!("page controller failed to start: {err}");
            }
            Ok(())
        }
        None => Ok(()),
    })
}
