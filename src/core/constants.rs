// Canonical carousel tuning shared by every view. Desktop and mobile differ
// only in the values picked here, never in code paths.

// Drag speed: pixels of offset per pixel of pointer travel
pub const SPEED_DESKTOP: f32 = 1.5;
pub const SPEED_MOBILE: f32 = 1.2;

// Fraction of the remaining distance closed per frame
pub const EASE_DESKTOP: f32 = 0.06;
pub const EASE_MOBILE: f32 = 0.08;

// Layout
pub const TILE_SPACING_PX: f32 = 50.0;
pub const TILE_SIZE_VW_DESKTOP: f32 = 18.0; // tile edge as % of viewport width
pub const TILE_SIZE_VW_MOBILE: f32 = 45.0;

// Wheel: offset per notch, scaled down on touch devices
pub const WHEEL_STEP_PX: f32 = 120.0;
pub const WHEEL_SCALE_DESKTOP: f32 = 1.0;
pub const WHEEL_SCALE_MOBILE: f32 = 0.5;

// Gesture classification
pub const CLICK_MAX_DISTANCE_PX: f32 = 8.0;
pub const CLICK_MAX_DURATION_MS: f64 = 500.0;
pub const AXIS_LOCK_SLOP_PX: f32 = 6.0; // travel before a drag commits to an axis

// Hover intent
pub const HOVER_DELAY_MS: u64 = 300;
pub const FADE_DELAY_MS: u64 = 100;
pub const HOVER_SCALE: f32 = 1.1;
pub const TILE_SCALE_EASE: f32 = 0.12;

// Tween durations (seconds)
pub const SLIDE_DURATION_SEC: f32 = 1.0;
pub const FADE_DURATION_SEC: f32 = 0.5;

// Environment
pub const MAX_PIXEL_RATIO: f32 = 2.0;
