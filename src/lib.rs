#![cfg_attr(target_arch = "wasm32", allow(dead_code))]

//! Five animated-gradient techniques behind one hash-routed page.
//!
//! Everything outside `wasm` is platform independent and tested on the
//! host; the browser side only supplies surfaces, the frame scheduler and
//! window events.

pub mod blobs;
pub mod canvas;
pub mod clock;
pub mod config;
pub mod cursor;
pub mod drift;
pub mod driver;
pub mod error;
pub mod geometry;
pub mod input;
pub mod keyframes;
pub mod linear;
pub mod mount;
pub mod palette;
pub mod plane;
pub mod random;
pub mod resource;
pub mod routes;
pub mod scene;
pub mod shaders;
pub mod uniforms;

// Only compile wasm-specific code when targeting wasm32.

#[cfg(target_arch = "wasm32")]
pub mod wasm {
    use wasm_bindgen::prelude::*;

    use crate::config::ShowcaseConfig;

    mod events;
    mod render;
    mod scheduler;
    mod shell;
    mod surfaces;

    pub use events::{window_viewport, WindowEvents};
    pub use render::{GlPlane, GlShapes, GlSurface};
    pub use scheduler::{drive, RafScheduler};
    pub use surfaces::{Canvas2d, DomBlobs, DomCircles, DomStyle};

    const CONFIG_ID: &str = "showcase-config";

    /// Unvalidated settings from the page, so clamping can be logged once
    /// the logger exists.
    fn page_config(document: &web_sys::Document) -> Result<ShowcaseConfig, String> {
        match document.get_element_by_id(CONFIG_ID).and_then(|el| el.text_content()) {
            Some(text) => serde_json::from_str(&text).map_err(|err| err.to_string()),
            None => Ok(ShowcaseConfig::default()),
        }
    }

    #[wasm_bindgen(start)]
    pub fn main() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();

        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;
        let parsed = page_config(&document);
        let level = parsed.as_ref().map(|c| c.log_level()).unwrap_or(log::Level::Info);
        console_log::init_with_level(level).ok();

        let config = match parsed {
            Ok(config) => config.validated(),
            Err(err) => {
                log::warn!("#{} unreadable ({}); using defaults", CONFIG_ID, err);
                ShowcaseConfig::default()
            }
        };
        log::info!("gradient showcase starting");

        shell::boot(window, config)?;
        Ok(())
    }
}
