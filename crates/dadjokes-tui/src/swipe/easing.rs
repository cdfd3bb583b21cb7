//! Easing curves for the swipe and settle animations.
//!
//! `ease_out_cubic` drives the commit glide; `damped_spring` reproduces the
//! underdamped bounce used for cancel snap-back and the post-advance settle.

const SPRING_DAMPING_RATIO: f64 = 0.5;
const SPRING_ANGULAR_FREQUENCY: f64 = 12.0;

/// Cubic ease-out: f(t) = 1 - (1-t)³
#[inline]
pub fn ease_out_cubic(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    let inv = 1.0 - t;
    1.0 - inv * inv * inv
}

/// Normalized displacement of an underdamped spring released at 1 with zero
/// velocity: starts at 1, rings past 0, and settles to 0 by t = 1.
///
/// Standard step response remainder of a second-order system with damping
/// ratio 0.5.
pub fn damped_spring(t: f64) -> f64 {
    if t <= 0.0 {
        return 1.0;
    }
    if t >= 1.0 {
        return 0.0;
    }
    let beta = SPRING_DAMPING_RATIO * SPRING_ANGULAR_FREQUENCY;
    let omega_d =
        SPRING_ANGULAR_FREQUENCY * (1.0 - SPRING_DAMPING_RATIO * SPRING_DAMPING_RATIO).sqrt();
    (-beta * t).exp() * ((omega_d * t).cos() + beta / omega_d * (omega_d * t).sin())
}
