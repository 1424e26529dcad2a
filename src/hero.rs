//! Project page: the hero image redrawn through the displacement shader.

use crate::constants::{
    selectors, HERO_DISPLACEMENT_SCALE, HERO_DRIFT_PER_SEC, IMAGE_LOAD_TIMEOUT_MS,
};
use crate::core::Viewport;
use crate::dom;
use crate::events::{self, ListenerSet, QueuedView};
use crate::render::{Displacement, GpuState, Sprite, TextureId};
use glam::Vec2;
use std::time::Duration;
use wasm_bindgen::JsCast;
use web_sys as web;

struct Overlay {
    canvas: web::HtmlCanvasElement,
    gpu: Option<GpuState>,
    texture: TextureId,
}

pub struct HeroView {
    image: Option<web::HtmlImageElement>,
    content: Option<web::HtmlElement>,
    overlay: Option<Overlay>,
    pixel_ratio: f32,
    drift: Vec2,
    listeners: ListenerSet,
}

impl HeroView {
    /// Never fails: a missing or broken hero image just leaves the plain page.
    pub async fn mount(
        window: &web::Window,
        document: &web::Document,
        pixel_ratio: f32,
        queued_view: QueuedView,
    ) -> Self {
        let mut listeners = ListenerSet::new();
        events::wire_escape_home(&queued_view, &mut listeners);
        listeners.set_enabled(false);

        let image = dom::query(document, selectors::PROJECT_HERO_IMAGE)
            .and_then(|el| el.dyn_into::<web::HtmlImageElement>().ok());
        let mut view = Self {
            image: image.clone(),
            content: dom::query_html(document, selectors::PROJECT_CONTENT),
            overlay: None,
            pixel_ratio,
            drift: Vec2::ZERO,
            listeners,
        };
        let Some(image) = image else {
            log::info!("[hero] no hero image on this page");
            return view;
        };
        match build_overlay(window, document, &image, pixel_ratio).await {
            Ok(overlay) => {
                dom::set_opacity(&image, 0.0);
                view.overlay = Some(overlay);
            }
            Err(e) => log::warn!("[hero] effect disabled: {:#}", e),
        }
        view
    }

    pub fn set_input_enabled(&mut self, enabled: bool) {
        self.listeners.set_enabled(enabled);
    }

    pub fn set_visible(&mut self, visible: bool) {
        let value = if visible { "visible" } else { "hidden" };
        if let Some(content) = &self.content {
            dom::set_style(content, "visibility", value);
        }
        if let Some(o) = &self.overlay {
            dom::set_style(&o.canvas, "visibility", value);
        }
    }

    pub fn init_tracker(&mut self) {
        self.drift = Vec2::ZERO;
    }

    pub fn resize(&mut self, pixel_ratio: f32) {
        self.pixel_ratio = pixel_ratio;
        if let Some(o) = &self.overlay {
            dom::sync_canvas_backing_size(&o.canvas, pixel_ratio);
        }
    }

    pub fn release_gpu(&mut self) {
        if let Some(o) = self.overlay.as_mut() {
            if o.gpu.take().is_some() {
                log::info!("[gpu] hero context released");
            }
        }
    }

    pub fn frame(&mut self, dt: Duration, opacity: f32) {
        if let Some(content) = &self.content {
            dom::set_opacity(content, opacity);
        }
        let Some(o) = self.overlay.as_mut() else {
            return;
        };
        dom::set_opacity(&o.canvas, opacity);
        let Some(gpu) = o.gpu.as_mut() else {
            return;
        };
        let dt_sec = dt.as_secs_f32();
        self.drift += Vec2::from_array(HERO_DRIFT_PER_SEC) * dt_sec;

        let rect = o.canvas.get_bounding_client_rect();
        let viewport = Viewport::new(rect.width() as f32, rect.height() as f32, self.pixel_ratio);
        let sprite = Sprite {
            texture: o.texture,
            center: viewport.center(),
            size: viewport.size(),
            alpha: 1.0,
        };
        let displacement = Displacement {
            scale: Vec2::from_array(HERO_DISPLACEMENT_SCALE),
            drift: self.drift,
        };
        gpu.resize_if_needed(o.canvas.width(), o.canvas.height());
        match gpu.render(dt_sec, &viewport, &[sprite], displacement) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => gpu.reconfigure(),
            Err(e) => log::error!("render error: {:?}", e),
        }
    }
}

impl Drop for HeroView {
    fn drop(&mut self) {
        self.listeners.clear();
        if let Some(o) = self.overlay.take() {
            o.canvas.remove();
        }
        if let Some(image) = &self.image {
            dom::set_style(image, "opacity", "");
        }
    }
}

async fn build_overlay(
    window: &web::Window,
    document: &web::Document,
    image: &web::HtmlImageElement,
    pixel_ratio: f32,
) -> anyhow::Result<Overlay> {
    dom::await_image(window, image, IMAGE_LOAD_TIMEOUT_MS).await?;
    let parent = image
        .parent_element()
        .and_then(|p| p.dyn_into::<web::HtmlElement>().ok())
        .ok_or_else(|| anyhow::anyhow!("hero image has no parent"))?;
    let canvas = dom::create_canvas(document)?;
    dom::set_style(&parent, "position", "relative");
    for (property, value) in [
        ("position", "absolute"),
        ("inset", "0"),
        ("width", "100%"),
        ("height", "100%"),
        ("pointer-events", "none"),
    ] {
        dom::set_style(&canvas, property, value);
    }
    parent
        .append_child(&canvas)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    dom::sync_canvas_backing_size(&canvas, pixel_ratio);

    let uploaded = async {
        let mut gpu = GpuState::new(&canvas).await?;
        let texture = gpu.load_image(image)?;
        anyhow::Ok((gpu, texture))
    }
    .await;
    match uploaded {
        Ok((gpu, texture)) => Ok(Overlay {
            canvas,
            gpu: Some(gpu),
            texture,
        }),
        Err(e) => {
            canvas.remove();
            Err(e)
        }
    }
}
