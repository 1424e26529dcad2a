pub mod carousel;
pub mod config;
pub mod constants;
pub mod highlight;
pub mod layout;
pub mod projects;
pub mod smoothing;
pub mod tracker;
pub mod transition;
pub mod tween;

pub use carousel::*;
pub use config::*;
pub use highlight::{ClassChanges, ClassName, ClassOp, ClassTarget, HighlightState, HoverIntent};
pub use layout::*;
pub use projects::*;
pub use smoothing::*;
pub use tracker::*;
pub use transition::*;
pub use tween::*;

// Shaders bundled as string constants
pub static TILES_WGSL: &str = include_str!("../../shaders/tiles.wgsl");
