//! Single-page portfolio site compiled to WebAssembly.
//!
//! The state machines (page transitions, splash sequence, gallery viewer,
//! glitch scheduler) are plain Rust and build on every target; the browser
//! glue under `wasm` is only compiled for `wasm32`.

pub mod app;
pub mod constants;
pub mod content;
pub mod error;
pub mod gallery;
pub mod glitch;
pub mod hero;
pub mod loading;
pub mod page;
pub mod rng;
pub mod scroll_lock;
pub mod strip;
pub mod timer;
pub mod transition;

pub use app::Portfolio;
pub use error::{PortfolioError, Result};
pub use page::PageId;

// Only compile wasm-specific code when targeting wasm32.

#[cfg(target_arch = "wasm32")]
mod wasm {
    use std::cell::RefCell;
    use std::rc::Rc;

    use wasm_bindgen::prelude::*;
    use web_sys::HtmlElement;

    use crate::constants::MOUNT_POINT;
    use crate::content::Content;
    use crate::error::PortfolioError;
    use crate::rng::XorShift;
    use crate::scroll_lock::{ScrollHost, ScrollLock};
    use crate::Portfolio;

    mod dom;
    mod events;
    mod render;

    pub use dom::apply_fallback;

    /// `overflow` of the document body.
    struct BodyOverflow(HtmlElement);

    impl ScrollHost for BodyOverflow {
        fn overflow(&self) -> String {
            self.0.style().get_property_value("overflow").unwrap_or_default()
        }

        fn set_overflow(&mut self, value: &str) {
            if let Err(e) = self.0.style().set_property("overflow", value) {
                log::error!("failed to set body overflow: {e:?}");
            }
        }
    }

    /// `?seed=<u64>` pins the random source, e.g. for screenshots.
    fn seed_from_query(window: &web_sys::Window) -> Option<u64> {
        let search = window.location().search().ok()?;
        search
            .trim_start_matches('?')
            .split('&')
            .find_map(|pair| pair.strip_prefix("seed="))
            .and_then(|v| v.parse().ok())
    }

    fn missing(what: &str) -> PortfolioError {
        PortfolioError::Dom(format!("{what} not found"))
    }

    /// Render the site under the element with id `root_id` and start it.
    pub fn mount(root_id: &str) -> crate::Result<()> {
        let window = web_sys::window().ok_or_else(|| missing("window"))?;
        let document = window.document().ok_or_else(|| missing("document"))?;
        let body = document.body().ok_or_else(|| missing("body"))?;
        let root = document
            .get_element_by_id(root_id)
            .ok_or_else(|| missing(&format!("mount point #{root_id}")))?;

        let content = Content::embedded()?;
        let seed = seed_from_query(&window).unwrap_or(js_sys::Date::now() as u64);
        log::info!(
            "portfolio starting: {} projects, seed {seed}",
            content.projects.len()
        );

        let app = Portfolio::mount(
            content,
            Box::new(XorShift::new(seed)),
            ScrollLock::new(BodyOverflow(body)),
            events::now_ms(&window),
        );
        let view = dom::build(&document, &root, &app)?;
        let strip = view.strip.clone();

        let app = Rc::new(RefCell::new(app));
        events::register(&window, &document, &strip, app.clone())?;
        render::start(app, Rc::new(RefCell::new(view)))?;
        Ok(())
    }

    #[wasm_bindgen(start)]
    pub fn main() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        if let Err(e) = console_log::init_with_level(log::Level::Info) {
            web_sys::console::warn_1(&format!("logger init failed: {e}").into());
        }

        mount(MOUNT_POINT).map_err(|e| {
            log::error!("{e}");
            e.into()
        })
    }
}

#[cfg(target_arch = "wasm32")]
pub use wasm::{apply_fallback, mount};
