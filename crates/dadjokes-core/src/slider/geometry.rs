//! Pure geometry functions for the swipe wave.
//!
//! Maps a normalized swipe progress to the visual parameters of a wave shape
//! anchored at one screen edge. All lengths are in the logical unit space of
//! [`Screen`]; the presentation layer maps logical units to terminal cells.

use crate::config::WaveConfig;

use super::state::Side;

/// End of the linear band for the horizontal and vertical radii
const LINEAR_BAND_END: f64 = 0.4;

// Damped oscillation constants for the horizontal radius overshoot
const OSC_MASS: f64 = 9.8;
const OSC_DAMPING: f64 = 40.0;
const OSC_STIFFNESS: f64 = 50.0;

/// Logical screen dimensions
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Screen {
    pub width: f64,
    pub height: f64,
}

impl Screen {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Three-way-clamp linear interpolation.
///
/// Returns exactly `from` when `fraction <= min`, exactly `to` when
/// `fraction >= max`, and the linear blend in between. Every geometry
/// function below is built on this helper.
#[inline]
pub fn interpolate(from: f64, to: f64, fraction: f64, min: f64, max: f64) -> f64 {
    if fraction <= min {
        from
    } else if fraction >= max {
        to
    } else {
        from + (to - from) * (fraction - min) / (max - min)
    }
}

/// Horizontal resting position of the wave edge.
///
/// Grows from the minimum ledge to the full screen width over progress
/// [0.2, 0.8]; mirrored for the right side.
pub fn ledge_x(progress: f64, side: Side, screen: Screen, wave: &WaveConfig) -> f64 {
    let ledge = interpolate(wave.min_ledge, screen.width, progress, 0.2, 0.8);
    match side {
        Side::Left => ledge,
        Side::Right => screen.width - ledge,
    }
}

/// Horizontal radius of the wave bulge.
///
/// Linear up to progress 0.4, then a damped-cosine decay toward the target.
/// The decay band is non-monotonic and may dip below zero; callers that
/// paint the shape clamp at render time.
pub fn horizontal_radius(progress: f64, screen: Screen, wave: &WaveConfig) -> f64 {
    let target = screen.width * 0.8;
    if progress <= LINEAR_BAND_END {
        return interpolate(
            wave.min_horizontal_radius,
            target,
            progress,
            0.0,
            LINEAR_BAND_END,
        );
    }
    if progress >= 1.0 {
        return target;
    }
    let t = (progress - LINEAR_BAND_END) / (1.0 - LINEAR_BAND_END);
    let beta = OSC_DAMPING / (2.0 * OSC_MASS);
    let omega = ((OSC_STIFFNESS / OSC_MASS).powi(2) - beta.powi(2)).sqrt();
    target * (-beta * t).exp() * (omega * t).cos()
}

/// Vertical radius of the wave bulge, linear over progress [0, 0.4].
pub fn vertical_radius(progress: f64, screen: Screen, wave: &WaveConfig) -> f64 {
    interpolate(
        wave.min_vertical_radius,
        screen.height * 0.9,
        progress,
        0.0,
        LINEAR_BAND_END,
    )
}

/// Center of the swipe button, riding the wave edge.
pub fn button_offset(
    progress: f64,
    side: Side,
    center_y: f64,
    screen: Screen,
    wave: &WaveConfig,
) -> (f64, f64) {
    let inset = wave.button_radius + wave.button_margin;
    let x = ledge_x(progress, side, screen, wave)
        + side.orientation() * (horizontal_radius(progress, screen, wave) - inset);
    (x, center_y)
}

/// Button opacity, fading out over the first 20% of progress.
#[inline]
pub fn button_opacity(progress: f64) -> f64 {
    (1.0 - progress * 5.0).max(0.0)
}

/// Snapshot of all derived geometry for one slider, ready for rendering.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WaveGeometry {
    pub side: Side,
    pub ledge_x: f64,
    pub horizontal_radius: f64,
    pub vertical_radius: f64,
    pub center_y: f64,
    pub button_x: f64,
    pub button_y: f64,
    pub button_opacity: f64,
}

impl WaveGeometry {
    pub fn compute(
        progress: f64,
        side: Side,
        center_y: f64,
        screen: Screen,
        wave: &WaveConfig,
    ) -> Self {
        let (button_x, button_y) = button_offset(progress, side, center_y, screen, wave);
        Self {
            side,
            ledge_x: ledge_x(progress, side, screen, wave),
            horizontal_radius: horizontal_radius(progress, screen, wave),
            vertical_radius: vertical_radius(progress, screen, wave),
            center_y,
            button_x,
            button_y,
            button_opacity: button_opacity(progress),
        }
    }
}
