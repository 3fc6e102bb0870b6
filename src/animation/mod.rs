pub mod camera;
pub mod easing;

pub use camera::{CameraAnimator, CameraFrame};
pub use easing::{EasingType, Interpolatable};
