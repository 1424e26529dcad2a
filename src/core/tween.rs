//! Fixed-duration tweens as a small explicit state machine.
//!
//! A tween starts `Idle`, becomes `Animating` on [`Tween::start`], and turns
//! `Settled` on the frame its clock passes the duration. That frame, and only
//! that frame, reports `completed`.

use std::time::Duration;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Easing {
    Linear,
    #[default]
    Power2Out,
    Power2InOut,
}

impl Easing {
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::Power2Out => 1.0 - (1.0 - t) * (1.0 - t),
            Easing::Power2InOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
                }
            }
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TweenPhase {
    #[default]
    Idle,
    Animating,
    Settled,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TweenTick {
    pub value: f32,
    pub completed: bool,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tween {
    from: f32,
    to: f32,
    duration: Duration,
    elapsed: Duration,
    easing: Easing,
    phase: TweenPhase,
}

impl Tween {
    pub fn new(from: f32, to: f32, duration: Duration, easing: Easing) -> Self {
        Self {
            from,
            to,
            duration,
            elapsed: Duration::ZERO,
            easing,
            phase: TweenPhase::Idle,
        }
    }

    /// Convenience for `new` followed by `start`.
    pub fn started(from: f32, to: f32, duration: Duration, easing: Easing) -> Self {
        let mut tween = Self::new(from, to, duration, easing);
        tween.start();
        tween
    }

    pub fn start(&mut self) {
        self.elapsed = Duration::ZERO;
        self.phase = TweenPhase::Animating;
    }

    pub fn phase(&self) -> TweenPhase {
        self.phase
    }

    pub fn target(&self) -> f32 {
        self.to
    }

    pub fn is_animating(&self) -> bool {
        self.phase == TweenPhase::Animating
    }

    pub fn value(&self) -> f32 {
        match self.phase {
            TweenPhase::Idle => self.from,
            TweenPhase::Settled => self.to,
            TweenPhase::Animating => {
                let t = if self.duration.is_zero() {
                    1.0
                } else {
                    self.elapsed.as_secs_f32() / self.duration.as_secs_f32()
                };
                self.from + (self.to - self.from) * self.easing.apply(t)
            }
        }
    }

    /// Move the clock forward by `dt`.
    pub fn advance(&mut self, dt: Duration) -> TweenTick {
        if self.phase != TweenPhase::Animating {
            return TweenTick {
                value: self.value(),
                completed: false,
            };
        }
        self.elapsed += dt;
        let completed = self.elapsed >= self.duration;
        if completed {
            self.phase = TweenPhase::Settled;
        }
        TweenTick {
            value: self.value(),
            completed,
        }
    }
}
