//! The home-page carousel: one parametrized controller for every device.
//!
//! `Carousel` ties the pieces together. Input handlers call into it between
//! frames; once per animation frame [`Carousel::frame`] eases the scroll
//! offset, lays the tiles out and reports what the page should update.

use super::config::{ConfigError, Environment, SliderConfig};
use super::constants::{HOVER_SCALE, SLIDE_DURATION_SEC, TILE_SCALE_EASE};
use super::highlight::{self, ClassChanges, HighlightState, HoverEvent, HoverIntent};
use super::layout::TileLayout;
use super::projects::{self, ProjectDescriptor, OVERVIEW, PROJECTS};
use super::smoothing::{ease_toward, FrameStep, ScrollState};
use super::tracker::{Gesture, InputTracker, KeyCommand, MoveOutcome};
use super::tween::{Easing, Tween};
use glam::Vec2;
use instant::Instant;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum CarouselError {
    #[error("carousel has no tiles")]
    Empty,
    #[error("tile {slot} points at unknown project {project}")]
    UnknownProject { slot: usize, project: usize },
    #[error("no tile shows project {0}")]
    NoTileForProject(usize),
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Something the page should act on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CarouselEvent {
    Open(usize),
}

/// Where hover came from; only the project list steers the carousel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HoverSource {
    List,
    Canvas,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TileFrame {
    pub slot: usize,
    pub project: usize,
    /// Tile centre in viewport CSS pixels.
    pub center: Vec2,
    pub size: f32,
    pub scale: f32,
    pub visible: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct CarouselFrame {
    pub step: FrameStep,
    pub tiles: Vec<TileFrame>,
    pub focused: Option<usize>,
    pub progress: f32,
    pub classes: ClassChanges,
    /// Title/details to show; only set when the focused project changed.
    pub info: Option<&'static ProjectDescriptor>,
    /// Description text to reveal this frame.
    pub description: Option<&'static str>,
    /// Project a slide tween finished on this frame.
    pub slide_settled: Option<usize>,
}

#[derive(Clone, Debug)]
pub struct Carousel {
    config: SliderConfig,
    env: Environment,
    layout: TileLayout,
    scroll: ScrollState,
    tracker: InputTracker,
    projects: Vec<usize>,
    scales: Vec<f32>,
    hover: HoverIntent,
    hover_source: HoverSource,
    slide: Option<(usize, Tween)>,
    highlight: HighlightState,
    last_focused: Option<Option<usize>>,
    input_enabled: bool,
}

impl Carousel {
    /// `projects[slot]` is the project shown by tile `slot`.
    pub fn new(
        config: SliderConfig,
        env: Environment,
        projects: Vec<usize>,
    ) -> Result<Self, CarouselError> {
        config.validate()?;
        if projects.is_empty() {
            return Err(CarouselError::Empty);
        }
        if let Some((slot, &project)) = projects
            .iter()
            .enumerate()
            .find(|&(_, &p)| p >= PROJECTS.len())
        {
            return Err(CarouselError::UnknownProject { slot, project });
        }
        let layout = TileLayout::from_config(&config, &env, projects.len());
        let tracker = InputTracker::new(&config);
        let scales = vec![1.0; projects.len()];
        Ok(Self {
            config,
            env,
            layout,
            scroll: ScrollState::default(),
            tracker,
            projects,
            scales,
            hover: HoverIntent::default(),
            hover_source: HoverSource::List,
            slide: None,
            highlight: HighlightState::default(),
            last_focused: None,
            input_enabled: true,
        })
    }

    pub fn config(&self) -> &SliderConfig {
        &self.config
    }

    pub fn layout(&self) -> &TileLayout {
        &self.layout
    }

    pub fn scroll(&self) -> &ScrollState {
        &self.scroll
    }

    pub fn is_sliding(&self) -> bool {
        self.slide.is_some()
    }

    pub fn input_enabled(&self) -> bool {
        self.input_enabled
    }

    /// Swap in a new environment snapshot, keeping the same tile in focus.
    pub fn resize(&mut self, env: Environment) {
        let old_pitch = self.layout.pitch();
        self.env = env;
        self.layout = TileLayout::from_config(&self.config, &env, self.projects.len());
        self.tracker.cancel(&mut self.scroll);
        if old_pitch > 0.0 {
            let k = self.layout.pitch() / old_pitch;
            self.scroll.current *= k;
            let target = self.scroll.target * k;
            self.tracker.settle_at(&mut self.scroll, target);
        }
        self.slide = None;
    }

    /// Back to a fresh page view: offset zero, nothing hovered or sliding.
    pub fn reset(&mut self) {
        self.tracker.cancel(&mut self.scroll);
        self.scroll.reset(0.0);
        self.tracker.settle_at(&mut self.scroll, 0.0);
        self.slide = None;
        self.hover.leave();
        self.highlight = HighlightState::default();
        self.last_focused = None;
        self.scales.iter_mut().for_each(|s| *s = 1.0);
    }

    pub fn set_input_enabled(&mut self, enabled: bool) {
        self.input_enabled = enabled;
        if !enabled {
            self.tracker.cancel(&mut self.scroll);
            self.hover.leave();
        }
    }

    pub fn slot_for_project(&self, project: usize) -> Option<usize> {
        self.projects.iter().position(|&p| p == project)
    }

    /// Offset that centres `project`, taking the short way round.
    pub fn offset_for_project(&self, project: usize) -> Result<f32, CarouselError> {
        let slot = self
            .slot_for_project(project)
            .ok_or(CarouselError::NoTileForProject(project))?;
        Ok(self.layout.offset_for_slot(slot, self.scroll.target))
    }

    /// Tween the target so `project` ends up centred. Replaces a running slide.
    pub fn slide_to(&mut self, project: usize) -> Result<(), CarouselError> {
        let to = self.offset_for_project(project)?;
        let duration = Duration::from_secs_f32(SLIDE_DURATION_SEC);
        self.slide = Some((
            project,
            Tween::started(self.scroll.target, to, duration, Easing::Power2Out),
        ));
        Ok(())
    }

    /// Returns `false` when the press was refused (input off or sliding).
    pub fn pointer_down(&mut self, pos: Vec2, time_ms: f64) -> bool {
        if !self.input_enabled || self.slide.is_some() {
            return false;
        }
        self.tracker.pointer_down(&mut self.scroll, pos, time_ms);
        true
    }

    pub fn pointer_move(&mut self, pos: Vec2, now: Instant) -> MoveOutcome {
        if self.tracker.is_pressed() {
            return self.tracker.pointer_move(&mut self.scroll, pos);
        }
        if self.input_enabled {
            let hit = self.tile_at(pos).map(|slot| self.projects[slot]);
            match hit {
                Some(project) => self.set_hover(HoverSource::Canvas, Some(project), now),
                None if self.hover_source == HoverSource::Canvas => {
                    self.set_hover(HoverSource::Canvas, None, now)
                }
                None => {}
            }
        }
        MoveOutcome::Idle
    }

    pub fn pointer_up(&mut self, pos: Vec2, time_ms: f64) -> Option<CarouselEvent> {
        let gesture = self.tracker.pointer_up(&mut self.scroll, pos, time_ms)?;
        if gesture != Gesture::Click {
            return None;
        }
        let slot = self.tile_at(pos)?;
        Some(CarouselEvent::Open(self.projects[slot]))
    }

    pub fn pointer_cancel(&mut self) {
        self.tracker.cancel(&mut self.scroll);
    }

    /// Pointer left the canvas entirely.
    pub fn pointer_leave(&mut self, now: Instant) {
        if self.hover_source == HoverSource::Canvas {
            self.set_hover(HoverSource::Canvas, None, now);
        }
    }

    pub fn wheel(&mut self, delta: Vec2) -> bool {
        if !self.input_enabled || self.tracker.is_pressed() {
            return false;
        }
        self.slide = None;
        self.tracker.wheel(&mut self.scroll, delta)
    }

    /// Ignored while a press owns the target.
    pub fn key(&mut self, cmd: KeyCommand) -> bool {
        if !self.input_enabled || self.tracker.is_pressed() {
            return false;
        }
        self.slide = None;
        let pitch = self.layout.pitch();
        match cmd {
            KeyCommand::Next => self.tracker.nudge(&mut self.scroll, -pitch),
            KeyCommand::Previous => self.tracker.nudge(&mut self.scroll, pitch),
            KeyCommand::First | KeyCommand::Last => {
                let slot = if cmd == KeyCommand::First {
                    0
                } else {
                    self.projects.len() - 1
                };
                let to = self.layout.offset_for_slot(slot, self.scroll.target);
                self.tracker.settle_at(&mut self.scroll, to);
            }
        }
        true
    }

    /// Hover from the project list (`Some`) or its end (`None`).
    pub fn set_hover(&mut self, source: HoverSource, project: Option<usize>, now: Instant) {
        match project {
            Some(p) => {
                self.hover_source = source;
                self.hover.enter(p, now);
            }
            None => self.hover.leave(),
        }
    }

    /// A project list item was clicked.
    pub fn click_item(&mut self, project: usize) -> Option<CarouselEvent> {
        if !self.input_enabled || project >= PROJECTS.len() {
            return None;
        }
        self.slide = None;
        if let Ok(to) = self.offset_for_project(project) {
            self.tracker.cancel(&mut self.scroll);
            self.tracker.settle_at(&mut self.scroll, to);
        }
        Some(CarouselEvent::Open(project))
    }

    /// Slot of the tile under a viewport point.
    pub fn tile_at(&self, pos: Vec2) -> Option<usize> {
        let axis = self.config.axis;
        let across = axis.across(pos) - axis.across(self.env.viewport.center());
        if across.abs() > self.layout.tile_size / 2.0 {
            return None;
        }
        self.layout.hit_test(self.scroll.current, axis.along(pos))
    }

    pub fn frame(&mut self, dt: Duration, now: Instant) -> CarouselFrame {
        let mut slide_settled = None;
        if let Some((project, tween)) = self.slide.as_mut() {
            let tick = tween.advance(dt);
            let project = *project;
            self.tracker.settle_at(&mut self.scroll, tick.value);
            if tick.completed {
                self.slide = None;
                slide_settled = Some(project);
            }
        }

        let mut description = None;
        match self.hover.poll(now) {
            Some(HoverEvent::Focus(p))
                if self.hover_source == HoverSource::List && !self.tracker.is_pressed() =>
            {
                if let Err(e) = self.slide_to(p) {
                    log::warn!("[slider] hover focus skipped: {}", e);
                }
            }
            Some(HoverEvent::Reveal(p)) => {
                description = projects::project(p).map(|d| d.description);
            }
            _ => {}
        }

        let step = self.scroll.step(self.config.ease);

        let axis = self.config.axis;
        let across = axis.across(self.env.viewport.center());
        let hovered = self.hover.hovered();
        let mut tiles = Vec::with_capacity(self.projects.len());
        for placement in self.layout.placements(self.scroll.current) {
            let project = self.projects[placement.slot];
            let target_scale = if hovered == Some(project) {
                HOVER_SCALE
            } else {
                1.0
            };
            let scale = &mut self.scales[placement.slot];
            *scale = ease_toward(*scale, target_scale, TILE_SCALE_EASE);
            tiles.push(TileFrame {
                slot: placement.slot,
                project,
                center: axis.compose(placement.position, across),
                size: self.layout.tile_size,
                scale: *scale,
                visible: placement.visible,
            });
        }

        let focused = self
            .layout
            .focused_slot(self.scroll.current)
            .map(|s| self.projects[s]);
        let info = if self.last_focused != Some(focused) {
            self.last_focused = Some(focused);
            Some(focused.and_then(projects::project).unwrap_or(&OVERVIEW))
        } else {
            None
        };

        let next = HighlightState {
            hovered,
            selected: focused,
            description_visible: self.hover.is_revealed(),
        };
        let classes = highlight::diff(&self.highlight, &next);
        self.highlight = next;

        CarouselFrame {
            step,
            tiles,
            focused,
            progress: self.layout.progress(self.scroll.current),
            classes,
            info,
            description,
            slide_settled,
        }
    }
}
