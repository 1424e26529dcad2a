//! Home view: the carousel canvas plus the project list and info panel.

use crate::constants::{
    selectors, DISPLACEMENT_INTENSITY, DISPLACEMENT_MAX_PX, IMAGE_LOAD_TIMEOUT_MS,
};
use crate::core::highlight::render_instructions;
use crate::core::{Carousel, CarouselFrame, Environment, HighlightState, PROJECTS};
use crate::dom::{self, ClassTargets};
use crate::events::{self, InputWiring, ListenerSet, QueuedView};
use crate::render::{Displacement, GpuState, Sprite, TextureId};
use glam::Vec2;
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;
use wasm_bindgen::JsCast;
use web_sys as web;

struct InfoPanel {
    title: Option<web::Element>,
    details: Option<web::Element>,
    description: Option<web::Element>,
    progress_line: Option<web::HtmlElement>,
}

pub struct SliderView {
    env: Environment,
    carousel: Rc<RefCell<Carousel>>,
    canvas: web::HtmlCanvasElement,
    gpu: Option<GpuState>,
    /// Texture per carousel slot.
    textures: Vec<TextureId>,
    slides: Vec<web::HtmlElement>,
    classes: ClassTargets,
    info: InfoPanel,
    listeners: ListenerSet,
}

impl SliderView {
    /// Build the carousel from the page's `.js-slide__img` images.
    pub async fn mount(
        window: &web::Window,
        document: &web::Document,
        env: Environment,
        queued_view: QueuedView,
    ) -> anyhow::Result<Self> {
        let slider = dom::query_html(document, selectors::SLIDER);
        let config = dom::read_slider_config(slider.as_ref(), env.device);
        let drag_area = dom::query_html(document, selectors::DRAG_AREA)
            .or_else(|| slider.clone())
            .or_else(|| document.body())
            .ok_or_else(|| anyhow::anyhow!("missing {}", selectors::DRAG_AREA))?;

        let host = dom::query(document, selectors::CANVAS_HOST)
            .ok_or_else(|| anyhow::anyhow!("missing {}", selectors::CANVAS_HOST))?;
        let canvas = dom::create_canvas(document)?;
        dom::set_style(&canvas, "width", "100%");
        dom::set_style(&canvas, "height", "100%");
        dom::set_style(&canvas, "display", "block");
        host.append_child(&canvas)
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        dom::sync_canvas_backing_size(&canvas, env.viewport.pixel_ratio);

        let mut gpu = match GpuState::new(&canvas).await {
            Ok(g) => g,
            Err(e) => {
                canvas.remove();
                return Err(e);
            }
        };

        let mut textures = Vec::new();
        let mut projects = Vec::new();
        for (index, el) in dom::query_all(document, selectors::SLIDE_IMG)
            .into_iter()
            .enumerate()
        {
            let Ok(img) = el.dyn_into::<web::HtmlImageElement>() else {
                continue;
            };
            let project = img
                .get_attribute("data-project")
                .and_then(|v| v.parse::<usize>().ok())
                .unwrap_or(index);
            if project >= PROJECTS.len() {
                log::warn!("[slider] image {} has no project, skipped", index);
                continue;
            }
            let loaded = match dom::await_image(window, &img, IMAGE_LOAD_TIMEOUT_MS).await {
                Ok(()) => gpu.load_image(&img),
                Err(e) => Err(e),
            };
            match loaded {
                Ok(id) => {
                    textures.push(id);
                    projects.push(project);
                }
                Err(e) => log::warn!("[slider] tile {} omitted: {:#}", index, e),
            }
        }
        log::info!("[slider] {} tiles ready", projects.len());

        let carousel = match Carousel::new(config, env, projects) {
            Ok(c) => Rc::new(RefCell::new(c)),
            Err(e) => {
                canvas.remove();
                return Err(e.into());
            }
        };

        let slides: Vec<web::HtmlElement> = dom::query_all(document, selectors::SLIDE)
            .into_iter()
            .filter_map(|el| el.dyn_into::<web::HtmlElement>().ok())
            .collect();
        for slide in &slides {
            dom::set_style(slide, "visibility", "hidden");
        }

        let classes = ClassTargets::find(document);
        let mut listeners = ListenerSet::new();
        events::wire_input_handlers(
            &InputWiring {
                drag_area,
                carousel: carousel.clone(),
                queued_view: queued_view.clone(),
                scroll_locked: Rc::new(Cell::new(false)),
            },
            &mut listeners,
        );
        events::wire_carousel_keys(&carousel, &mut listeners);
        events::wire_project_items(&classes.items, &carousel, &queued_view, &mut listeners);
        listeners.set_enabled(false);

        Ok(Self {
            env,
            carousel,
            canvas,
            gpu: Some(gpu),
            textures,
            slides,
            classes,
            info: InfoPanel {
                title: dom::query(document, selectors::PROJECT_TITLE),
                details: dom::query(document, selectors::PROJECT_DETAILS),
                description: dom::query(document, selectors::PROJECT_DESCRIPTION),
                progress_line: dom::query_html(document, selectors::PROGRESS_LINE),
            },
            listeners,
        })
    }

    pub fn set_input_enabled(&mut self, enabled: bool) {
        self.listeners.set_enabled(enabled);
        self.carousel.borrow_mut().set_input_enabled(enabled);
    }

    pub fn set_visible(&mut self, visible: bool) {
        let value = if visible { "visible" } else { "hidden" };
        let pointer = if visible { "auto" } else { "none" };
        dom::set_style(&self.canvas, "visibility", value);
        dom::set_style(&self.canvas, "pointer-events", pointer);
        if !visible {
            self.classes
                .apply(&render_instructions(&HighlightState::default(), self.classes.items.len()));
        }
    }

    /// Fresh scroll state and a full class sync.
    pub fn init_tracker(&mut self) {
        self.carousel.borrow_mut().reset();
        self.classes
            .apply(&render_instructions(&HighlightState::default(), self.classes.items.len()));
    }

    pub fn resize(&mut self, env: Environment) {
        self.env = env;
        dom::sync_canvas_backing_size(&self.canvas, env.viewport.pixel_ratio);
        self.carousel.borrow_mut().resize(env);
    }

    pub fn release_gpu(&mut self) {
        if self.gpu.take().is_some() {
            log::info!("[gpu] carousel context released");
        }
    }

    pub fn frame(&mut self, dt: Duration, now: Instant, opacity: f32) {
        let frame = self.carousel.borrow_mut().frame(dt, now);
        self.apply_dom(&frame);
        dom::set_opacity(&self.canvas, opacity);

        let Some(gpu) = self.gpu.as_mut() else {
            return;
        };
        let sprites: Vec<Sprite> = frame
            .tiles
            .iter()
            .filter(|t| t.visible)
            .filter_map(|t| {
                let texture = *self.textures.get(t.slot)?;
                Some(Sprite {
                    texture,
                    center: t.center,
                    size: Vec2::splat(t.size * t.scale),
                    alpha: 1.0,
                })
            })
            .collect();
        let axis = self.carousel.borrow().config().axis;
        let amount = (DISPLACEMENT_INTENSITY * frame.step.direction.sign() * frame.step.velocity)
            .clamp(-DISPLACEMENT_MAX_PX, DISPLACEMENT_MAX_PX);
        let displacement = Displacement {
            scale: axis.compose(amount, 0.0),
            drift: Vec2::ZERO,
        };

        gpu.resize_if_needed(self.canvas.width(), self.canvas.height());
        match gpu.render(dt.as_secs_f32(), &self.env.viewport, &sprites, displacement) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => gpu.reconfigure(),
            Err(e) => log::error!("render error: {:?}", e),
        }
    }

    fn apply_dom(&self, frame: &CarouselFrame) {
        self.classes.apply(&frame.classes);
        if let Some(info) = frame.info {
            dom::set_text(self.info.title.as_ref(), info.title);
            dom::set_text(self.info.details.as_ref(), info.details);
        }
        if let Some(text) = frame.description {
            dom::set_text(self.info.description.as_ref(), text);
        }
        if let Some(line) = &self.info.progress_line {
            dom::set_style(line, "transform", &format!("scaleX({:.4})", frame.progress));
        }
        if let Some(project) = frame.slide_settled {
            log::debug!("[slider] settled on project {}", project);
        }
    }
}

impl Drop for SliderView {
    fn drop(&mut self) {
        self.listeners.clear();
        for slide in &self.slides {
            dom::set_style(slide, "visibility", "");
        }
        self.canvas.remove();
    }
}
