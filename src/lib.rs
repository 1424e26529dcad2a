//! Portfolio front-end: an endless image carousel on the home page and a
//! displaced hero image on each project page, with faded transitions between
//! them.
//!
//! Everything under [`core`] is plain Rust and runs on any target; the DOM,
//! input and WebGPU glue is only built for `wasm32`.

pub mod core;

#[cfg(target_arch = "wasm32")]
mod constants;
#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
mod events;
#[cfg(target_arch = "wasm32")]
mod frame;
#[cfg(target_arch = "wasm32")]
mod hero;
#[cfg(target_arch = "wasm32")]
mod render;
#[cfg(target_arch = "wasm32")]
mod slider;

#[cfg(target_arch = "wasm32")]
pub use app::start;

#[cfg(target_arch = "wasm32")]
mod app {
    use crate::constants::{selectors, DEFAULT_LOG_LEVEL};
    use crate::core::{TransitionSequencer, View};
    use crate::{dom, frame};
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use wasm_bindgen_futures::spawn_local;
    use web_sys as web;

    /// `?log=debug` style override, falling back to the default level.
    fn log_level(window: Option<&web::Window>) -> log::Level {
        window
            .and_then(|w| w.location().search().ok())
            .and_then(|search| web::UrlSearchParams::new_with_str(&search).ok())
            .and_then(|params| params.get("log"))
            .and_then(|level| level.parse().ok())
            .or_else(|| DEFAULT_LOG_LEVEL.parse().ok())
            .unwrap_or(log::Level::Info)
    }

    #[wasm_bindgen(start)]
    pub fn start() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log_level(web::window().as_ref())).ok();
        log::info!("folio-web starting");

        spawn_local(async move {
            if let Err(e) = init().await {
                log::error!("init error: {:?}", e);
            }
        });
        Ok(())
    }

    async fn init() -> anyhow::Result<()> {
        let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| anyhow::anyhow!("no document"))?;
        let path = window
            .location()
            .pathname()
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        let view = View::from_path(&path);
        log::info!("[transition] page view {:?}", view);

        let queued_view = Rc::new(RefCell::new(None));
        let active = frame::mount_view(&window, &document, view, &queued_view).await;
        let stage = dom::query_html(&document, selectors::STAGE);

        let frame_ctx = Rc::new(RefCell::new(frame::FrameContext::new(
            window,
            TransitionSequencer::new(view),
            active,
            queued_view,
            stage,
        )));
        frame_ctx.borrow_mut().enter();
        frame::start_loop(frame_ctx);
        Ok(())
    }
}
