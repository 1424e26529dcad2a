//! Pointer, wheel and key input folded into a scroll target.

use super::config::{Axis, GestureThresholds, SliderConfig};
use super::smoothing::ScrollState;
use glam::Vec2;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Gesture {
    Click,
    Drag,
}

/// Classify a completed press from its total displacement and duration.
pub fn classify_gesture(displacement: Vec2, duration_ms: f64, t: &GestureThresholds) -> Gesture {
    if displacement.length() < t.click_max_distance && duration_ms < t.click_max_duration_ms {
        Gesture::Click
    } else {
        Gesture::Drag
    }
}

/// What the host should do with a move event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    /// No press in progress.
    Idle,
    /// Press in progress but not yet past the axis-lock slop.
    Pending,
    /// Carousel axis owns the gesture; the host should prevent default.
    Tracking,
    /// Cross axis owns the gesture; leave it to the page.
    Released,
}

impl MoveOutcome {
    #[inline]
    pub fn should_prevent_default(self) -> bool {
        self == MoveOutcome::Tracking
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum AxisLock {
    Carousel,
    Cross,
}

#[derive(Clone, Copy, Debug)]
struct Press {
    started_ms: f64,
    lock: Option<AxisLock>,
}

/// Keyboard commands understood by the carousel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyCommand {
    Next,
    Previous,
    First,
    Last,
}

impl KeyCommand {
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowRight" | "ArrowDown" => Some(KeyCommand::Next),
            "ArrowLeft" | "ArrowUp" => Some(KeyCommand::Previous),
            "Home" => Some(KeyCommand::First),
            "End" => Some(KeyCommand::Last),
            _ => None,
        }
    }
}

/// Turns raw input into `ScrollState::target` updates.
///
/// Drags are relative to `baseline`, the offset frozen at the last release,
/// so the target never jumps when a new drag starts.
#[derive(Clone, Debug)]
pub struct InputTracker {
    axis: Axis,
    speed: f32,
    wheel_step: f32,
    thresholds: GestureThresholds,
    baseline: f32,
    press: Option<Press>,
}

impl InputTracker {
    pub fn new(config: &SliderConfig) -> Self {
        Self {
            axis: config.axis,
            speed: config.speed,
            wheel_step: config.wheel_step,
            thresholds: config.gestures,
            baseline: 0.0,
            press: None,
        }
    }

    pub fn baseline(&self) -> f32 {
        self.baseline
    }

    pub fn is_pressed(&self) -> bool {
        self.press.is_some()
    }

    pub fn pointer_down(&mut self, state: &mut ScrollState, pos: Vec2, time_ms: f64) {
        state.drag_origin = pos;
        state.is_dragging = true;
        self.baseline = state.target;
        self.press = Some(Press {
            started_ms: time_ms,
            lock: None,
        });
    }

    pub fn pointer_move(&mut self, state: &mut ScrollState, pos: Vec2) -> MoveOutcome {
        let Some(press) = self.press.as_mut() else {
            return MoveOutcome::Idle;
        };
        let delta = pos - state.drag_origin;
        let along = self.axis.along(delta);
        let across = self.axis.across(delta);

        if press.lock.is_none() {
            if delta.length() < self.thresholds.axis_lock_slop {
                return MoveOutcome::Pending;
            }
            press.lock = Some(if along.abs() >= across.abs() {
                AxisLock::Carousel
            } else {
                AxisLock::Cross
            });
        }

        match press.lock {
            Some(AxisLock::Carousel) => {
                state.target = self.baseline + along * self.speed;
                MoveOutcome::Tracking
            }
            _ => {
                // the page scrolls instead; stop treating this as a drag
                state.is_dragging = false;
                MoveOutcome::Released
            }
        }
    }

    /// Finish the press, freezing the target as the new baseline.
    pub fn pointer_up(&mut self, state: &mut ScrollState, pos: Vec2, time_ms: f64) -> Option<Gesture> {
        let press = self.press.take()?;
        state.is_dragging = false;
        self.baseline = state.target;
        let duration = (time_ms - press.started_ms).max(0.0);
        Some(classify_gesture(
            pos - state.drag_origin,
            duration,
            &self.thresholds,
        ))
    }

    /// Abandon the press (pointer cancel, input disabled) without a gesture.
    pub fn cancel(&mut self, state: &mut ScrollState) {
        if self.press.take().is_some() {
            state.is_dragging = false;
            self.baseline = state.target;
        }
    }

    /// Apply one wheel event. Returns `true` when the carousel consumed it.
    pub fn wheel(&mut self, state: &mut ScrollState, delta: Vec2) -> bool {
        let d = if delta.x.abs() > delta.y.abs() {
            delta.x
        } else {
            delta.y
        };
        if d == 0.0 || !d.is_finite() {
            return false;
        }
        // scrolling down/right advances, which moves the strip backward
        state.target -= d.signum() * self.wheel_step;
        self.baseline = state.target;
        true
    }

    /// Shift the target by `amount` and make it the new baseline.
    pub fn nudge(&mut self, state: &mut ScrollState, amount: f32) {
        self.settle_at(state, state.target + amount);
    }

    /// Set the target outright (keyboard, hover, slide tween).
    pub fn settle_at(&mut self, state: &mut ScrollState, target: f32) {
        state.target = target;
        self.baseline = target;
    }
}
