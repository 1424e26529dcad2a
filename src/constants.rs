// Rendering and page-wiring constants for the web frontend.
// No crate imports here: host tests `include!` this file.

// Page background (#f1f1f1), linear-ish floats for the clear colour
pub const CLEAR_RGB: [f64; 3] = [0.945, 0.945, 0.945];

// Carousel displacement: pixels of shift per pixel of per-frame travel
pub const DISPLACEMENT_INTENSITY: f32 = 8.0;
pub const DISPLACEMENT_MAX_PX: f32 = 120.0;

// Hero effect on project pages
pub const HERO_DISPLACEMENT_SCALE: [f32; 2] = [30.0, 60.0];
pub const HERO_DRIFT_PER_SEC: [f32; 2] = [120.0, 60.0]; // 2px/1px per frame at 60 fps

// Largest frame delta fed into tweens; longer gaps (tab switch) are clipped
pub const MAX_FRAME_DT_SEC: f32 = 0.1;

// Image loading
pub const IMAGE_LOAD_TIMEOUT_MS: i32 = 5000;

pub const DEFAULT_LOG_LEVEL: &str = "info";

pub mod selectors {
    pub const SLIDER: &str = ".js-slider";
    pub const DRAG_AREA: &str = ".js-drag-area";
    pub const SLIDE: &str = ".js-slide";
    pub const SLIDE_IMG: &str = ".js-slide__img";
    pub const CANVAS_HOST: &str = ".dom-gl";
    pub const STAGE: &str = ".js-page";
    pub const PROJECT_ITEM: &str = ".project-item";
    pub const PROJECT_TITLE: &str = ".project-title";
    pub const PROJECT_DETAILS: &str = ".project-details";
    pub const PROJECT_DESCRIPTION: &str = ".project-description";
    pub const PROJECT_CONTENT: &str = ".project-content";
    pub const PROJECT_HERO_IMAGE: &str = ".project-hero-image";
    pub const PROGRESS_LINE: &str = ".progress__line";
}
