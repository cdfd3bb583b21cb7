//! Scalar animation controller for swipe progress and settle offsets.
//!
//! Call `animate_to()` to begin a transition, then `update()` each frame to
//! get the current interpolated value.

use std::time::{Duration, Instant};

use super::easing::{damped_spring, ease_out_cubic};
use super::timing::{is_complete, lerp, progress};

/// Curve shaping a transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Curve {
    /// Monotonic glide, used for the commit to full progress
    EaseOutCubic,
    /// Underdamped bounce, used for snap-back and settle
    Spring,
}

impl Curve {
    /// Eased fraction of the distance covered at elapsed fraction `t`.
    /// The spring curve overshoots past 1 before settling.
    #[inline]
    fn apply(&self, t: f64) -> f64 {
        match self {
            Curve::EaseOutCubic => ease_out_cubic(t),
            Curve::Spring => 1.0 - damped_spring(t),
        }
    }
}

#[derive(Debug, Clone)]
struct ActiveTransition {
    start: Instant,
    from: f64,
    to: f64,
    duration: Duration,
    curve: Curve,
}

/// Animates one scalar value between targets
#[derive(Debug, Clone)]
pub struct SliderAnimator {
    transition: Option<ActiveTransition>,
    current: f64,
}

impl SliderAnimator {
    pub fn new(initial: f64) -> Self {
        Self {
            transition: None,
            current: initial,
        }
    }

    #[inline]
    pub fn current(&self) -> f64 {
        self.current
    }

    #[inline]
    pub fn is_animating(&self) -> bool {
        self.transition.is_some()
    }

    /// Whether the frame loop should run at the animation rate
    #[inline]
    pub fn needs_update(&self) -> bool {
        self.transition.is_some()
    }

    /// Jump immediately to a value, cancelling any transition
    pub fn set(&mut self, value: f64) {
        self.transition = None;
        self.current = value;
    }

    /// Start a transition from the current value toward a target.
    /// A zero duration completes on the next `update()`.
    pub fn animate_to(&mut self, target: f64, duration: Duration, curve: Curve) {
        if (target - self.current).abs() < f64::EPSILON {
            self.transition = None;
            self.current = target;
            return;
        }
        self.transition = Some(ActiveTransition {
            start: Instant::now(),
            from: self.current,
            to: target,
            duration,
            curve,
        });
    }

    /// Advance the transition and return the current interpolated value
    pub fn update(&mut self) -> f64 {
        if let Some(ref anim) = self.transition {
            if is_complete(anim.start, anim.duration) {
                self.current = anim.to;
                self.transition = None;
            } else {
                let t = progress(anim.start, anim.duration);
                self.current = lerp(anim.from, anim.to, anim.curve.apply(t));
            }
        }
        self.current
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_jumps_without_transition() {
        let mut animator = SliderAnimator::new(0.0);
        animator.set(0.5);
        assert!((animator.current() - 0.5).abs() < 1e-9);
        assert!(!animator.is_animating());
    }

    #[test]
    fn test_animate_to_starts_transition() {
        let mut animator = SliderAnimator::new(0.0);
        animator.animate_to(1.0, Duration::from_millis(100), Curve::EaseOutCubic);
        assert!(animator.is_animating());
    }

    #[test]
    fn test_animate_to_same_target_is_noop() {
        let mut animator = SliderAnimator::new(1.0);
        animator.animate_to(1.0, Duration::from_millis(100), Curve::EaseOutCubic);
        assert!(!animator.is_animating());
    }

    #[test]
    fn test_zero_duration_completes_on_update() {
        let mut animator = SliderAnimator::new(0.0);
        animator.animate_to(1.0, Duration::ZERO, Curve::Spring);
        assert!((animator.update() - 1.0).abs() < 1e-9);
        assert!(!animator.is_animating());
    }
}
