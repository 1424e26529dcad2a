//! Exponential smoothing of the scroll offset.
//!
//! Every frame `current` closes a fixed fraction (`ease`) of the distance to
//! `target`. There is no clamping and no settling condition; the integrator
//! simply runs for as long as the view is alive.

use glam::Vec2;

/// One exponential-decay step toward `target`.
#[inline]
pub fn ease_toward(current: f32, target: f32, ease: f32) -> f32 {
    current + (target - current) * ease
}

/// Sign of the most recent non-zero per-frame movement.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Direction {
    #[default]
    Forward,
    Backward,
}

impl Direction {
    #[inline]
    pub fn sign(self) -> f32 {
        match self {
            Direction::Forward => 1.0,
            Direction::Backward => -1.0,
        }
    }
}

/// What a single integrator step did.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FrameStep {
    /// `current` after minus `current` before.
    pub delta: f32,
    /// Magnitude of `delta`, used to drive the displacement effect.
    pub velocity: f32,
    pub direction: Direction,
}

/// Scroll offset model owned by the active carousel.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollState {
    pub target: f32,
    pub current: f32,
    pub direction: Direction,
    pub drag_origin: Vec2,
    pub is_dragging: bool,
}

impl ScrollState {
    pub fn new(offset: f32) -> Self {
        Self {
            target: offset,
            current: offset,
            ..Default::default()
        }
    }

    /// Advance `current` one frame toward `target`.
    ///
    /// Direction only flips on non-zero movement, so a settled carousel keeps
    /// reporting the way it last travelled.
    pub fn step(&mut self, ease: f32) -> FrameStep {
        let previous = self.current;
        self.current = ease_toward(self.current, self.target, ease);
        let delta = self.current - previous;
        if delta > 0.0 {
            self.direction = Direction::Forward;
        } else if delta < 0.0 {
            self.direction = Direction::Backward;
        }
        FrameStep {
            delta,
            velocity: delta.abs(),
            direction: self.direction,
        }
    }

    /// Remaining distance to the target.
    #[inline]
    pub fn remaining(&self) -> f32 {
        self.target - self.current
    }

    /// Snap both values to `offset` and drop any drag.
    pub fn reset(&mut self, offset: f32) {
        *self = Self::new(offset);
    }
}
