//! Navigation between the home carousel and project detail pages.
//!
//! The sequencer never touches the DOM. It hands out [`TransitionAction`]s in
//! the order they must run and the web layer executes them best-effort.

use super::constants::FADE_DURATION_SEC;
use super::projects::PROJECTS;
use super::tween::{Easing, Tween};
use std::time::Duration;
use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum View {
    Home,
    /// Zero-based project index.
    Project(usize),
}

impl View {
    /// Page URL for this view, relative to the site root.
    pub fn url(self) -> String {
        match self {
            View::Home => "index.html".to_string(),
            View::Project(i) => format!("project-{}.html", i + 1),
        }
    }

    /// Recover the view from a location path such as `/work/project-3.html`.
    pub fn from_path(path: &str) -> Self {
        let file = path.rsplit('/').next().unwrap_or_default();
        file.strip_prefix("project-")
            .and_then(|rest| rest.strip_suffix(".html"))
            .and_then(|n| n.parse::<usize>().ok())
            .filter(|n| (1..=PROJECTS.len()).contains(n))
            .map(|n| View::Project(n - 1))
            .unwrap_or(View::Home)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TransitionAction {
    DisableInput(View),
    HideVisuals(View),
    ReleaseRenderContext(View),
    Navigate(String),
    ShowVisuals(View),
    InitTracker(View),
    EnableInput(View),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TransitionError {
    #[error("already showing {0:?}")]
    AlreadyThere(View),
    #[error("a transition is already running")]
    Busy,
    #[error("no project with index {0}")]
    UnknownProject(usize),
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum Phase {
    Idle,
    Entering(Tween),
    Leaving { to: View, fade: Tween },
    Departed,
}

/// Output of one sequencer frame.
#[derive(Clone, Debug, PartialEq)]
pub struct TransitionFrame {
    /// Opacity to apply to the page stage.
    pub opacity: f32,
    pub actions: Vec<TransitionAction>,
}

#[derive(Clone, Debug)]
pub struct TransitionSequencer {
    view: View,
    phase: Phase,
    fade: Duration,
}

impl TransitionSequencer {
    pub fn new(view: View) -> Self {
        Self::with_fade(view, Duration::from_secs_f32(FADE_DURATION_SEC))
    }

    pub fn with_fade(view: View, fade: Duration) -> Self {
        Self {
            view,
            phase: Phase::Idle,
            fade,
        }
    }

    pub fn view(&self) -> View {
        self.view
    }

    pub fn is_idle(&self) -> bool {
        matches!(self.phase, Phase::Idle)
    }

    /// Whether the current view should react to input.
    pub fn accepts_input(&self) -> bool {
        matches!(self.phase, Phase::Idle | Phase::Entering(_))
    }

    /// `enter(view)`: bring up the page's own view and fade it in.
    pub fn enter(&mut self) -> Vec<TransitionAction> {
        self.phase = Phase::Entering(Tween::started(0.0, 1.0, self.fade, Easing::Power2Out));
        vec![
            TransitionAction::ShowVisuals(self.view),
            TransitionAction::InitTracker(self.view),
            TransitionAction::EnableInput(self.view),
        ]
    }

    /// `leave(current)` toward `next`. The navigation itself is emitted by
    /// [`advance`](Self::advance) once the fade-out settles.
    pub fn request(&mut self, next: View) -> Result<Vec<TransitionAction>, TransitionError> {
        if let View::Project(i) = next {
            if i >= PROJECTS.len() {
                return Err(TransitionError::UnknownProject(i));
            }
        }
        if matches!(self.phase, Phase::Leaving { .. } | Phase::Departed) {
            return Err(TransitionError::Busy);
        }
        if next == self.view {
            return Err(TransitionError::AlreadyThere(next));
        }
        let from = match self.phase {
            Phase::Entering(t) => t.value(),
            _ => 1.0,
        };
        self.phase = Phase::Leaving {
            to: next,
            fade: Tween::started(from, 0.0, self.fade, Easing::Power2Out),
        };
        Ok(vec![
            TransitionAction::DisableInput(self.view),
            TransitionAction::HideVisuals(self.view),
        ])
    }

    pub fn advance(&mut self, dt: Duration) -> TransitionFrame {
        match &mut self.phase {
            Phase::Idle => TransitionFrame {
                opacity: 1.0,
                actions: Vec::new(),
            },
            Phase::Departed => TransitionFrame {
                opacity: 0.0,
                actions: Vec::new(),
            },
            Phase::Entering(fade) => {
                let tick = fade.advance(dt);
                if tick.completed {
                    self.phase = Phase::Idle;
                }
                TransitionFrame {
                    opacity: tick.value,
                    actions: Vec::new(),
                }
            }
            Phase::Leaving { to, fade } => {
                let tick = fade.advance(dt);
                let mut actions = Vec::new();
                if tick.completed {
                    let from = self.view;
                    let to = *to;
                    actions.push(TransitionAction::ReleaseRenderContext(from));
                    actions.push(TransitionAction::Navigate(to.url()));
                    self.view = to;
                    self.phase = Phase::Departed;
                }
                TransitionFrame {
                    opacity: tick.value,
                    actions,
                }
            }
        }
    }
}
