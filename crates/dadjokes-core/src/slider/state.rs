//! Immutable slider state and the swipe gesture lifecycle.

use crate::config::{SwipeConfig, WaveConfig};

use super::geometry::{Screen, WaveGeometry};

/// Which screen edge a slider is anchored to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// Sign multiplier for side-mirrored math: +1 for left, -1 for right.
    ///
    /// A rightward finger motion advances the left slider; the right slider
    /// is mirrored.
    #[inline]
    pub fn orientation(&self) -> f64 {
        match self {
            Side::Left => 1.0,
            Side::Right => -1.0,
        }
    }
}

/// Raw drag input from the presentation layer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragInput {
    /// Horizontal translation since the drag began, in logical units
    pub translation_x: f64,
    /// Current pointer y position, in logical units
    pub location_y: f64,
}

/// One slider's animation state. Immutable; every transition produces a new
/// value. `progress` is always clamped to [0, 1] and `side` is fixed for the
/// state's lifetime.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderState {
    pub side: Side,
    pub center_y: f64,
    pub progress: f64,
}

impl SliderState {
    /// Resting state at the side's home position
    pub fn resting(side: Side, screen: Screen, wave: &WaveConfig) -> Self {
        let center_y = match side {
            Side::Left => wave.rest_y,
            Side::Right => screen.height - wave.rest_y,
        };
        Self {
            side,
            center_y,
            progress: 0.0,
        }
    }

    /// Back to zero progress, keeping the current wave center
    pub fn initial(&self) -> Self {
        Self {
            progress: 0.0,
            ..*self
        }
    }

    /// Full progress, keeping the current wave center
    pub fn committed(&self) -> Self {
        Self {
            progress: 1.0,
            ..*self
        }
    }

    /// Same state at an arbitrary (clamped) progress; used by the
    /// presentation layer while an animation drives progress.
    pub fn with_progress(&self, progress: f64) -> Self {
        Self {
            progress: progress.clamp(0.0, 1.0),
            ..*self
        }
    }

    /// Apply a drag update: the side-aware translation scaled by the swipe
    /// velocity becomes the new progress, and the wave center tracks the
    /// pointer.
    pub fn drag(&self, input: DragInput, screen: Screen, swipe: &SwipeConfig) -> Self {
        let dx = self.side.orientation() * input.translation_x;
        let progress = (dx * swipe.velocity / screen.width).clamp(0.0, 1.0);
        Self {
            side: self.side,
            center_y: input.location_y,
            progress,
        }
    }

    /// Whether releasing this drag snaps back instead of committing.
    ///
    /// Recomputes the drag from the raw input rather than reusing the stored
    /// progress; kept that way to match the observed behavior.
    pub fn is_cancelled(&self, input: DragInput, screen: Screen, swipe: &SwipeConfig) -> bool {
        self.drag(input, screen, swipe).progress < swipe.cancel_threshold
    }

    /// Derived rendering geometry for this state
    pub fn geometry(&self, screen: Screen, wave: &WaveConfig) -> WaveGeometry {
        WaveGeometry::compute(self.progress, self.side, self.center_y, screen, wave)
    }
}

/// Lifecycle of one edge's swipe gesture
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GesturePhase {
    Idle,
    Dragging,
    Committed,
    Cancelled,
}

/// One edge's gesture: the current slider state plus where it is in the
/// idle → dragging → committed/cancelled lifecycle.
#[derive(Debug, Clone, Copy)]
pub struct Gesture {
    state: SliderState,
    phase: GesturePhase,
}

impl Gesture {
    pub fn new(side: Side, screen: Screen, wave: &WaveConfig) -> Self {
        Self {
            state: SliderState::resting(side, screen, wave),
            phase: GesturePhase::Idle,
        }
    }

    #[inline]
    pub fn state(&self) -> SliderState {
        self.state
    }

    #[inline]
    pub fn phase(&self) -> GesturePhase {
        self.phase
    }

    #[inline]
    pub fn side(&self) -> Side {
        self.state.side
    }

    /// Drag update: enters (or stays in) the dragging phase
    pub fn drag(&mut self, input: DragInput, screen: Screen, swipe: &SwipeConfig) {
        self.state = self.state.drag(input, screen, swipe);
        self.phase = GesturePhase::Dragging;
    }

    /// Drag release: classifies the gesture and returns the resulting phase
    pub fn release(&mut self, input: DragInput, screen: Screen, swipe: &SwipeConfig) -> GesturePhase {
        self.phase = if self.state.is_cancelled(input, screen, swipe) {
            GesturePhase::Cancelled
        } else {
            self.state = self.state.committed();
            GesturePhase::Committed
        };
        self.phase
    }

    /// Tap path: commit without a drag
    pub fn commit(&mut self) {
        self.state = self.state.committed();
        self.phase = GesturePhase::Committed;
    }

    /// Back to idle at zero progress
    pub fn reset(&mut self) {
        self.state = self.state.initial();
        self.phase = GesturePhase::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCREEN: Screen = Screen::new(400.0, 800.0);

    fn swipe() -> SwipeConfig {
        SwipeConfig::default()
    }

    fn wave() -> WaveConfig {
        WaveConfig::default()
    }

    #[test]
    fn test_resting_centers() {
        let left = SliderState::resting(Side::Left, SCREEN, &wave());
        let right = SliderState::resting(Side::Right, SCREEN, &wave());
        assert_eq!(left.center_y, 200.0);
        assert_eq!(right.center_y, 600.0);
        assert_eq!(left.progress, 0.0);
    }

    #[test]
    fn test_drag_scales_translation_by_velocity() {
        // Width 400, delta +200, velocity 0.45 -> progress 0.225
        let state = SliderState::resting(Side::Left, SCREEN, &wave());
        let input = DragInput {
            translation_x: 200.0,
            location_y: 300.0,
        };
        let dragged = state.drag(input, SCREEN, &swipe());
        assert!((dragged.progress - 0.225).abs() < 1e-9);
        assert_eq!(dragged.center_y, 300.0);
        assert!(!state.is_cancelled(input, SCREEN, &swipe()));
    }

    #[test]
    fn test_drag_is_side_mirrored() {
        let right = SliderState::resting(Side::Right, SCREEN, &wave());
        let leftward = DragInput {
            translation_x: -200.0,
            location_y: 500.0,
        };
        assert!((right.drag(leftward, SCREEN, &swipe()).progress - 0.225).abs() < 1e-9);

        // Motion away from the center makes no progress
        let rightward = DragInput {
            translation_x: 200.0,
            location_y: 500.0,
        };
        assert_eq!(right.drag(rightward, SCREEN, &swipe()).progress, 0.0);
    }

    #[test]
    fn test_drag_progress_clamped_to_unit_range() {
        let state = SliderState::resting(Side::Left, SCREEN, &wave());
        let huge = DragInput {
            translation_x: 5000.0,
            location_y: 100.0,
        };
        assert_eq!(state.drag(huge, SCREEN, &swipe()).progress, 1.0);
    }

    #[test]
    fn test_cancellation_threshold() {
        let state = SliderState::resting(Side::Left, SCREEN, &wave());
        // Translations chosen to land exactly on progress 0.10 and 0.20
        let below = DragInput {
            translation_x: 0.10 * SCREEN.width / 0.45,
            location_y: 200.0,
        };
        let above = DragInput {
            translation_x: 0.20 * SCREEN.width / 0.45,
            location_y: 200.0,
        };
        assert!(state.is_cancelled(below, SCREEN, &swipe()));
        assert!(!state.is_cancelled(above, SCREEN, &swipe()));
    }

    #[test]
    fn test_gesture_lifecycle_commit() {
        let mut gesture = Gesture::new(Side::Left, SCREEN, &wave());
        assert_eq!(gesture.phase(), GesturePhase::Idle);

        let input = DragInput {
            translation_x: 200.0,
            location_y: 250.0,
        };
        gesture.drag(input, SCREEN, &swipe());
        assert_eq!(gesture.phase(), GesturePhase::Dragging);

        assert_eq!(
            gesture.release(input, SCREEN, &swipe()),
            GesturePhase::Committed
        );
        assert_eq!(gesture.state().progress, 1.0);

        gesture.reset();
        assert_eq!(gesture.phase(), GesturePhase::Idle);
        assert_eq!(gesture.state().progress, 0.0);
    }

    #[test]
    fn test_gesture_lifecycle_cancel() {
        let mut gesture = Gesture::new(Side::Left, SCREEN, &wave());
        let input = DragInput {
            translation_x: 40.0,
            location_y: 250.0,
        };
        gesture.drag(input, SCREEN, &swipe());
        assert_eq!(
            gesture.release(input, SCREEN, &swipe()),
            GesturePhase::Cancelled
        );
    }
}
