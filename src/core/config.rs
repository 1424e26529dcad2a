//! Environment snapshot and carousel configuration.
//!
//! Nothing here is global: the web layer reads an [`Environment`] from the
//! window at startup, hands copies to whoever needs them, and replaces the
//! snapshot wholesale on resize.

use super::constants::*;
use glam::Vec2;
use thiserror::Error;

const MOBILE_UA_MARKERS: [&str; 7] = [
    "android",
    "webos",
    "iphone",
    "ipad",
    "ipod",
    "blackberry",
    "windows phone",
];

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DeviceClass {
    #[default]
    Desktop,
    Mobile,
}

impl DeviceClass {
    /// Classify from the user agent string and the `(pointer: coarse)` media query.
    pub fn detect(user_agent: &str, coarse_pointer: bool) -> Self {
        let ua = user_agent.to_ascii_lowercase();
        if coarse_pointer || MOBILE_UA_MARKERS.iter().any(|m| ua.contains(m)) {
            DeviceClass::Mobile
        } else {
            DeviceClass::Desktop
        }
    }

    pub fn is_mobile(self) -> bool {
        self == DeviceClass::Mobile
    }
}

/// Viewport size in CSS pixels plus the (clamped) device pixel ratio.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
    pub pixel_ratio: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32, pixel_ratio: f32) -> Self {
        let pixel_ratio = if pixel_ratio.is_finite() {
            pixel_ratio.clamp(1.0, MAX_PIXEL_RATIO)
        } else {
            1.0
        };
        Self {
            width: width.max(0.0),
            height: height.max(0.0),
            pixel_ratio,
        }
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    pub fn center(&self) -> Vec2 {
        self.size() * 0.5
    }

    /// Backing-store size for a full-viewport canvas.
    pub fn physical_size(&self) -> (u32, u32) {
        let w = (self.width * self.pixel_ratio).round() as u32;
        let h = (self.height * self.pixel_ratio).round() as u32;
        (w.max(1), h.max(1))
    }

    /// Extent along the given axis.
    pub fn extent(&self, axis: Axis) -> f32 {
        axis.along(self.size())
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(1280.0, 720.0, 1.0)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Environment {
    pub viewport: Viewport,
    pub device: DeviceClass,
}

impl Environment {
    pub fn new(viewport: Viewport, device: DeviceClass) -> Self {
        Self { viewport, device }
    }

    /// A new snapshot with the viewport replaced; device class is sticky.
    pub fn with_viewport(self, viewport: Viewport) -> Self {
        Self { viewport, ..self }
    }
}

/// Axis along which the carousel scrolls.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Axis {
    #[default]
    Horizontal,
    Vertical,
}

impl Axis {
    #[inline]
    pub fn along(self, v: Vec2) -> f32 {
        match self {
            Axis::Horizontal => v.x,
            Axis::Vertical => v.y,
        }
    }

    #[inline]
    pub fn across(self, v: Vec2) -> f32 {
        match self {
            Axis::Horizontal => v.y,
            Axis::Vertical => v.x,
        }
    }

    /// Build a point from a coordinate along this axis and one across it.
    #[inline]
    pub fn compose(self, along: f32, across: f32) -> Vec2 {
        match self {
            Axis::Horizontal => Vec2::new(along, across),
            Axis::Vertical => Vec2::new(across, along),
        }
    }
}

impl std::str::FromStr for Axis {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "x" | "horizontal" => Ok(Axis::Horizontal),
            "y" | "vertical" => Ok(Axis::Vertical),
            other => Err(ConfigError::InvalidValue {
                key: "axis".into(),
                value: other.into(),
            }),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GestureThresholds {
    pub click_max_distance: f32,
    pub click_max_duration_ms: f64,
    pub axis_lock_slop: f32,
}

impl Default for GestureThresholds {
    fn default() -> Self {
        Self {
            click_max_distance: CLICK_MAX_DISTANCE_PX,
            click_max_duration_ms: CLICK_MAX_DURATION_MS,
            axis_lock_slop: AXIS_LOCK_SLOP_PX,
        }
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("unknown config key `{0}`")]
    UnknownKey(String),
    #[error("invalid value `{value}` for `{key}`")]
    InvalidValue { key: String, value: String },
    #[error("ease must lie in (0, 1), got {0}")]
    EaseOutOfRange(f32),
    #[error("`{key}` must be positive, got {value}")]
    NotPositive { key: &'static str, value: f32 },
}

/// Keys accepted by [`SliderConfig::apply_override`].
pub const OVERRIDE_KEYS: [&str; 6] = ["axis", "speed", "ease", "spacing", "tileSize", "wheelStep"];

/// Per-view carousel parameters.
#[derive(Clone, Debug, PartialEq)]
pub struct SliderConfig {
    pub axis: Axis,
    pub speed: f32,
    pub ease: f32,
    pub spacing: f32,
    pub tile_size_vw: f32,
    pub wheel_step: f32,
    pub gestures: GestureThresholds,
}

impl SliderConfig {
    pub fn for_device(device: DeviceClass) -> Self {
        match device {
            DeviceClass::Desktop => Self {
                axis: Axis::Horizontal,
                speed: SPEED_DESKTOP,
                ease: EASE_DESKTOP,
                spacing: TILE_SPACING_PX,
                tile_size_vw: TILE_SIZE_VW_DESKTOP,
                wheel_step: WHEEL_STEP_PX * WHEEL_SCALE_DESKTOP,
                gestures: GestureThresholds::default(),
            },
            DeviceClass::Mobile => Self {
                axis: Axis::Horizontal,
                speed: SPEED_MOBILE,
                ease: EASE_MOBILE,
                spacing: TILE_SPACING_PX,
                tile_size_vw: TILE_SIZE_VW_MOBILE,
                wheel_step: WHEEL_STEP_PX * WHEEL_SCALE_MOBILE,
                gestures: GestureThresholds::default(),
            },
        }
    }

    /// Apply one string override, e.g. from a `data-ease="0.1"` attribute.
    /// Keys use the camelCase form the DOM dataset exposes. On error the
    /// config is left untouched.
    pub fn apply_override(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let number = || {
            value
                .trim()
                .parse::<f32>()
                .ok()
                .filter(|v| v.is_finite())
                .ok_or_else(|| ConfigError::InvalidValue {
                    key: key.into(),
                    value: value.into(),
                })
        };
        let mut next = self.clone();
        match key {
            "axis" => next.axis = value.parse()?,
            "speed" => next.speed = number()?,
            "ease" => next.ease = number()?,
            "spacing" => next.spacing = number()?,
            "tileSize" => next.tile_size_vw = number()?,
            "wheelStep" => next.wheel_step = number()?,
            _ => return Err(ConfigError::UnknownKey(key.into())),
        }
        next.validate()?;
        *self = next;
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.ease > 0.0 && self.ease < 1.0) {
            return Err(ConfigError::EaseOutOfRange(self.ease));
        }
        for (key, value) in [
            ("speed", self.speed),
            ("tileSize", self.tile_size_vw),
            ("wheelStep", self.wheel_step),
        ] {
            if value <= 0.0 {
                return Err(ConfigError::NotPositive { key, value });
            }
        }
        if self.spacing < 0.0 {
            return Err(ConfigError::NotPositive {
                key: "spacing",
                value: self.spacing,
            });
        }
        Ok(())
    }

    /// Tile edge length in CSS pixels for the given viewport.
    pub fn tile_size(&self, viewport: &Viewport) -> f32 {
        viewport.width * self.tile_size_vw / 100.0
    }
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self::for_device(DeviceClass::Desktop)
    }
}
