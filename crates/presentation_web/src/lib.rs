//! Browser front end of the Naturnat site
//!
//! Binds the accordion menu, the contact form and the weather cards of the
//! static page to the application services. The DOM-facing modules only
//! build for `wasm32`; configuration and the refresh gate are plain Rust and
//! are tested natively.

pub mod config;
pub mod gate;

#[cfg(target_arch = "wasm32")]
mod console;
#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
mod events;
#[cfg(target_arch = "wasm32")]
mod interval;
#[cfg(target_arch = "wasm32")]
mod views;

#[cfg(all(test, target_arch = "wasm32"))]
wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

#[cfg(target_arch = "wasm32")]
pub use entry::{shutdown, start};

#[cfg(target_arch = "wasm32")]
mod entry {
    use std::cell::RefCell;

    use gloo_events::EventListener;
    use infrastructure::{SiteConfig, init_logging};
    use tracing::{error, info, warn};
    use wasm_bindgen::prelude::*;

    use crate::{config, console::ConsoleMakeWriter, dom, events::Site};

    thread_local! {
        static SITE: RefCell<Option<Site>> = const { RefCell::new(None) };
    }

    /// WASM entry point – called automatically when the module is instantiated.
    #[wasm_bindgen(start)]
    pub fn start() -> Result<(), JsValue> {
        // Improve panic messages in the browser console
        console_error_panic_hook::set_once();

        let (site_config, load_error) = match config::site_config() {
            Ok(site_config) => (site_config, None),
            Err(e) => {
                let mut fallback = SiteConfig::default();
                fallback.logging = fallback.logging.plain();
                (fallback, Some(e))
            },
        };

        if let Err(e) = init_logging(&site_config.logging, ConsoleMakeWriter) {
            web_sys::console::warn_1(&e.to_string().into());
        }
        if let Some(e) = load_error {
            warn!("Failed to load site config, using defaults: {e}");
        }

        let document = dom::document().map_err(|e| JsValue::from_str(&e.to_string()))?;
        if document.ready_state() == "loading" {
            EventListener::once(&document, "DOMContentLoaded", move |_| {
                mount(&site_config);
            })
            .forget();
        } else {
            mount(&site_config);
        }
        Ok(())
    }

    /// Stop the weather refresh and drop every page listener
    #[wasm_bindgen]
    pub fn shutdown() {
        if SITE.with(|site| site.borrow_mut().take()).is_some() {
            info!("Site client stopped");
        }
    }

    fn mount(site_config: &SiteConfig) {
        match Site::mount(site_config) {
            Ok(site) => {
                SITE.with(|slot| *slot.borrow_mut() = Some(site));
                info!(version = env!("CARGO_PKG_VERSION"), "Site client started");
            },
            Err(e) => error!("Failed to start site client: {e:#}"),
        }
    }
}
