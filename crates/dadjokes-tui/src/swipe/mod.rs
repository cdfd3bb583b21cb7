//! Swipe animation system.
//!
//! - `easing` - pure curve functions (cubic glide, underdamped spring)
//! - `timing` - time calculation utilities (progress, interpolation)
//! - `animation` - the scalar animation controller combining both

pub mod animation;
pub mod easing;
pub mod timing;

pub use animation::{Curve, SliderAnimator};
