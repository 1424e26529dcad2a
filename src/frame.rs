use crate::constants::MAX_FRAME_DT_SEC;
use crate::core::{TransitionAction, TransitionSequencer, View};
use crate::dom;
use crate::events::{ListenerSet, QueuedView};
use crate::hero::HeroView;
use crate::slider::SliderView;
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Whichever view this page mounted.
pub enum ActiveView {
    Slider(SliderView),
    Hero(HeroView),
    /// Setup failed; transitions still run, nothing is drawn.
    Empty,
}

impl ActiveView {
    fn set_input_enabled(&mut self, enabled: bool) {
        match self {
            ActiveView::Slider(s) => s.set_input_enabled(enabled),
            ActiveView::Hero(h) => h.set_input_enabled(enabled),
            ActiveView::Empty => {}
        }
    }

    fn set_visible(&mut self, visible: bool) {
        match self {
            ActiveView::Slider(s) => s.set_visible(visible),
            ActiveView::Hero(h) => h.set_visible(visible),
            ActiveView::Empty => {}
        }
    }

    fn init_tracker(&mut self) {
        match self {
            ActiveView::Slider(s) => s.init_tracker(),
            ActiveView::Hero(h) => h.init_tracker(),
            ActiveView::Empty => {}
        }
    }

    fn release_gpu(&mut self) {
        match self {
            ActiveView::Slider(s) => s.release_gpu(),
            ActiveView::Hero(h) => h.release_gpu(),
            ActiveView::Empty => {}
        }
    }
}

pub struct FrameContext {
    pub sequencer: TransitionSequencer,
    pub view: ActiveView,
    pub queued_view: QueuedView,
    pub stage: Option<web::HtmlElement>,
    pub window: web::Window,
    pub resized: Rc<Cell<bool>>,
    pub running: bool,
    pub last_instant: Instant,
    pub listeners: ListenerSet,
}

impl FrameContext {
    pub fn new(
        window: web::Window,
        sequencer: TransitionSequencer,
        view: ActiveView,
        queued_view: QueuedView,
        stage: Option<web::HtmlElement>,
    ) -> Self {
        let resized = Rc::new(Cell::new(false));
        let mut listeners = ListenerSet::new();
        let flag = resized.clone();
        listeners.add(&window.clone().into(), "resize", true, move |_ev: web::Event| {
            flag.set(true);
        });
        Self {
            sequencer,
            view,
            queued_view,
            stage,
            window,
            resized,
            running: true,
            last_instant: Instant::now(),
            listeners,
        }
    }

    /// Bring the mounted view up.
    pub fn enter(&mut self) {
        let actions = self.sequencer.enter();
        self.run_actions(actions);
    }

    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt = (now - self.last_instant).min(Duration::from_secs_f32(MAX_FRAME_DT_SEC));
        self.last_instant = now;

        if self.resized.replace(false) {
            self.handle_resize();
        }

        let queued = self.queued_view.borrow_mut().take();
        if let Some(next) = queued {
            match self.sequencer.request(next) {
                Ok(actions) => {
                    log::info!("[transition] {:?} -> {:?}", self.sequencer.view(), next);
                    self.run_actions(actions);
                }
                Err(e) => log::debug!("[transition] ignored: {}", e),
            }
        }

        let tf = self.sequencer.advance(dt);
        if let Some(stage) = &self.stage {
            dom::set_opacity(stage, tf.opacity);
        }
        match &mut self.view {
            ActiveView::Slider(s) => s.frame(dt, now, tf.opacity),
            ActiveView::Hero(h) => h.frame(dt, tf.opacity),
            ActiveView::Empty => {}
        }
        self.run_actions(tf.actions);
    }

    fn handle_resize(&mut self) {
        let env = dom::read_environment(&self.window);
        match &mut self.view {
            ActiveView::Slider(s) => s.resize(env),
            ActiveView::Hero(h) => h.resize(env.viewport.pixel_ratio),
            ActiveView::Empty => {}
        }
    }

    /// Execute transition actions in order; failures are logged and skipped.
    fn run_actions(&mut self, actions: Vec<TransitionAction>) {
        for action in actions {
            log::debug!("[transition] {:?}", action);
            match action {
                TransitionAction::DisableInput(_) => self.view.set_input_enabled(false),
                TransitionAction::EnableInput(_) => self.view.set_input_enabled(true),
                TransitionAction::HideVisuals(_) => self.view.set_visible(false),
                TransitionAction::ShowVisuals(_) => self.view.set_visible(true),
                TransitionAction::InitTracker(_) => self.view.init_tracker(),
                TransitionAction::ReleaseRenderContext(_) => self.view.release_gpu(),
                TransitionAction::Navigate(url) => {
                    self.running = false;
                    self.listeners.clear();
                    if let Err(e) = self.window.location().set_href(&url) {
                        log::error!("[transition] navigation to {} failed: {:?}", url, e);
                    }
                }
            }
        }
    }
}

/// Drive `frame_ctx` with requestAnimationFrame until it stops running.
pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        let running = {
            let mut ctx = frame_ctx_tick.borrow_mut();
            ctx.frame();
            ctx.running
        };
        if running {
            request_frame(&tick_clone);
        }
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    let Some(w) = web::window() else {
        return;
    };
    if let Some(cb) = tick.borrow().as_ref() {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}

/// The view that belongs to the current page, or [`ActiveView::Empty`] when
/// its setup failed.
pub async fn mount_view(
    window: &web::Window,
    document: &web::Document,
    view: View,
    queued_view: &QueuedView,
) -> ActiveView {
    let env = dom::read_environment(window);
    log::info!(
        "[slider] {:?} {}x{} @{}",
        env.device,
        env.viewport.width,
        env.viewport.height,
        env.viewport.pixel_ratio
    );
    match view {
        View::Home => match SliderView::mount(window, document, env, queued_view.clone()).await {
            Ok(s) => ActiveView::Slider(s),
            Err(e) => {
                log::error!("[slider] setup failed: {:#}", e);
                ActiveView::Empty
            }
        },
        View::Project(_) => ActiveView::Hero(
            HeroView::mount(window, document, env.viewport.pixel_ratio, queued_view.clone()).await,
        ),
    }
}
