use std::sync::Arc;
use std::time::{Duration, Instant};

use dadjokes_core::joke::{step_index, JokeDeck};
use dadjokes_core::slider::{DragInput, Gesture, GesturePhase, Screen, Side, SliderState};
use dadjokes_core::AppConfig;

use crate::input::Action;
use crate::swipe::{Curve, SliderAnimator};
use crate::theme::Palette;

/// Logical viewport the wave constants are tuned for. Terminal cells are
/// mapped onto this space for both input and rendering.
pub const LOGICAL_WIDTH: f64 = 390.0;
pub const LOGICAL_HEIGHT: f64 = 844.0;

/// One edge's slider: the gesture lifecycle plus the animator that drives
/// displayed progress during commit and snap-back.
struct SliderPanel {
    gesture: Gesture,
    animator: SliderAnimator,
}

impl SliderPanel {
    fn new(side: Side, screen: Screen, config: &AppConfig) -> Self {
        Self {
            gesture: Gesture::new(side, screen, &config.wave),
            animator: SliderAnimator::new(0.0),
        }
    }

    /// State used for rendering. The animator's value is the displayed
    /// progress at all times; drags keep it in sync via `set()`.
    fn display_state(&self) -> SliderState {
        self.gesture.state().with_progress(self.animator.current())
    }

    fn update(&mut self) {
        self.animator.update();
        if self.gesture.phase() == GesturePhase::Cancelled && !self.animator.is_animating() {
            self.gesture.reset();
        }
    }

    fn commit_settled(&self) -> bool {
        self.gesture.phase() == GesturePhase::Committed
            && !self.animator.is_animating()
            && self.animator.current() >= 1.0
    }

    fn reset(&mut self) {
        self.gesture.reset();
        self.animator.set(0.0);
    }
}

#[derive(Clone, Copy)]
struct ActiveDrag {
    side: Side,
    origin_x: f64,
}

#[derive(Clone, Copy)]
struct PendingAdvance {
    side: Side,
    deadline: Instant,
}

/// Single-screen application state
pub struct App {
    pub config: Arc<AppConfig>,
    pub palette: Palette,
    pub deck: JokeDeck,
    pub color_index: usize,
    /// Which slider renders on top (the one last touched)
    pub top_side: Side,
    pub should_quit: bool,
    screen: Screen,
    terminal_size: (u16, u16),
    left: SliderPanel,
    right: SliderPanel,
    active_drag: Option<ActiveDrag>,
    pending_advance: Option<PendingAdvance>,
    settle: SliderAnimator,
}

impl App {
    pub fn new(config: Arc<AppConfig>, palette: Palette, deck: JokeDeck) -> Self {
        let screen = Screen::new(LOGICAL_WIDTH, LOGICAL_HEIGHT);
        Self {
            palette,
            deck,
            color_index: 0,
            top_side: Side::Right,
            should_quit: false,
            screen,
            terminal_size: (0, 0),
            left: SliderPanel::new(Side::Left, screen, &config),
            right: SliderPanel::new(Side::Right, screen, &config),
            active_drag: None,
            pending_advance: None,
            settle: SliderAnimator::new(0.0),
            config,
        }
    }

    #[inline]
    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// Display state of one edge's slider
    pub fn slider(&self, side: Side) -> SliderState {
        self.panel(side).display_state()
    }

    /// Whole-screen horizontal offset of the settle replay
    #[inline]
    pub fn settle_offset(&self) -> f64 {
        self.settle.current()
    }

    /// Color a side's wave would reveal when committed
    pub fn next_color_index(&self, side: Side) -> usize {
        step_index(self.color_index, self.palette.len(), side)
    }

    /// Whether the frame loop should run at the animation rate
    pub fn needs_update(&self) -> bool {
        self.left.animator.needs_update()
            || self.right.animator.needs_update()
            || self.settle.needs_update()
            || self.pending_advance.is_some()
    }

    pub fn on_resize(&mut self, width: u16, height: u16) {
        self.terminal_size = (width, height);
    }

    /// Map a terminal cell to the logical viewport
    pub fn logical_point(&self, column: u16, row: u16) -> (f64, f64) {
        let (cols, rows) = self.terminal_size;
        let x = if cols == 0 {
            0.0
        } else {
            column as f64 * self.screen.width / cols as f64
        };
        let y = if rows == 0 {
            0.0
        } else {
            row as f64 * self.screen.height / rows as f64
        };
        (x, y)
    }

    pub fn on_action(&mut self, action: Action) {
        match action {
            Action::Quit => self.should_quit = true,
            Action::SwipePrev => self.tap(Side::Left),
            Action::SwipeNext => self.tap(Side::Right),
            Action::None => {}
        }
    }

    /// Tap path: commit a side immediately, without a drag
    pub fn tap(&mut self, side: Side) {
        if self.pending_advance.is_some() {
            return;
        }
        self.top_side = side;
        self.panel_mut(side).gesture.commit();
        self.start_commit_glide(side);
    }

    /// A drag began at a logical point; the nearer screen edge owns it
    pub fn drag_began(&mut self, x: f64, y: f64) {
        if self.pending_advance.is_some() {
            return;
        }
        let side = if x < self.screen.width / 2.0 {
            Side::Left
        } else {
            Side::Right
        };
        self.top_side = side;
        self.active_drag = Some(ActiveDrag { side, origin_x: x });
        self.drag_moved(x, y);
    }

    pub fn drag_moved(&mut self, x: f64, y: f64) {
        let Some(drag) = self.active_drag else {
            return;
        };
        let side = drag.side;
        let input = DragInput {
            translation_x: x - drag.origin_x,
            location_y: y,
        };
        let screen = self.screen;
        let swipe = self.config.swipe.clone();
        let panel = self.panel_mut(side);
        panel.gesture.drag(input, screen, &swipe);
        panel.animator.set(panel.gesture.state().progress);
    }

    pub fn drag_ended(&mut self, x: f64, y: f64) {
        let Some(drag) = self.active_drag.take() else {
            return;
        };
        let side = drag.side;
        let input = DragInput {
            translation_x: x - drag.origin_x,
            location_y: y,
        };
        let screen = self.screen;
        let swipe = self.config.swipe.clone();
        match self.panel_mut(side).gesture.release(input, screen, &swipe) {
            GesturePhase::Cancelled => {
                let duration = Duration::from_millis(swipe.settle_duration_ms);
                self.panel_mut(side)
                    .animator
                    .animate_to(0.0, duration, Curve::Spring);
            }
            _ => self.start_commit_glide(side),
        }
    }

    /// Advance animations and fire the delayed deck advance
    pub fn tick(&mut self) {
        self.left.update();
        self.right.update();
        self.settle.update();

        if self.pending_advance.is_none() {
            for side in [Side::Left, Side::Right] {
                if self.panel(side).commit_settled() {
                    self.pending_advance = Some(PendingAdvance {
                        side,
                        deadline: Instant::now()
                            + Duration::from_millis(self.config.swipe.commit_delay_ms),
                    });
                    break;
                }
            }
        }

        if let Some(pending) = self.pending_advance {
            if Instant::now() >= pending.deadline {
                self.advance(pending.side);
            }
        }
    }

    fn start_commit_glide(&mut self, side: Side) {
        let duration = Duration::from_millis(self.config.swipe.commit_duration_ms);
        self.panel_mut(side)
            .animator
            .animate_to(1.0, duration, Curve::EaseOutCubic);
    }

    /// The committed swipe lands: step the joke and color, reset both
    /// sliders, and replay the settle offset animation.
    fn advance(&mut self, side: Side) {
        self.pending_advance = None;
        self.deck.advance(side);
        self.color_index = step_index(self.color_index, self.palette.len(), side);
        self.left.reset();
        self.right.reset();

        self.settle.set(self.config.swipe.settle_offset);
        self.settle.animate_to(
            0.0,
            Duration::from_millis(self.config.swipe.settle_duration_ms),
            Curve::Spring,
        );
    }

    fn panel(&self, side: Side) -> &SliderPanel {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }

    fn panel_mut(&mut self, side: Side) -> &mut SliderPanel {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dadjokes_core::Joke;

    fn instant_config() -> Arc<AppConfig> {
        // Zero durations make every transition complete on the next tick
        let mut config = AppConfig::default();
        config.swipe.commit_duration_ms = 0;
        config.swipe.commit_delay_ms = 0;
        config.swipe.settle_duration_ms = 0;
        Arc::new(config)
    }

    fn app_with_jokes(n: usize) -> App {
        let jokes = (0..n)
            .map(|i| Joke {
                id: i.to_string(),
                category: "general".to_string(),
                setup: format!("setup {i}"),
                punchline: format!("punchline {i}"),
            })
            .collect();
        let palette = Palette::from_config(&AppConfig::default().ui.colors);
        App::new(instant_config(), palette, JokeDeck::new(jokes))
    }

    #[test]
    fn test_tap_commits_and_advances() {
        let mut app = app_with_jokes(3);
        app.tap(Side::Right);
        app.tick();
        app.tick();
        assert_eq!(app.deck.position(), 1);
        assert_eq!(app.color_index, 1);
        // Both sliders are back at rest
        assert_eq!(app.slider(Side::Left).progress, 0.0);
        assert_eq!(app.slider(Side::Right).progress, 0.0);
    }

    #[test]
    fn test_left_tap_wraps_backward() {
        let mut app = app_with_jokes(3);
        app.tap(Side::Left);
        app.tick();
        app.tick();
        assert_eq!(app.deck.position(), 2);
        assert_eq!(app.color_index, 2);
    }

    #[test]
    fn test_cancelled_drag_snaps_back_without_advancing() {
        let mut app = app_with_jokes(3);
        app.on_resize(100, 40);
        app.drag_began(10.0, 400.0);
        app.drag_moved(40.0, 400.0); // small drag, below the threshold
        app.drag_ended(40.0, 400.0);
        app.tick();
        app.tick();
        assert_eq!(app.deck.position(), 0);
        assert_eq!(app.slider(Side::Left).progress, 0.0);
    }

    #[test]
    fn test_committed_drag_advances() {
        let mut app = app_with_jokes(3);
        app.on_resize(100, 40);
        app.drag_began(10.0, 400.0);
        app.drag_moved(300.0, 420.0);
        app.drag_ended(300.0, 420.0);
        app.tick();
        app.tick();
        assert_eq!(app.deck.position(), 1);
    }

    #[test]
    fn test_drag_tracks_pointer_height() {
        let mut app = app_with_jokes(3);
        app.on_resize(100, 40);
        app.drag_began(10.0, 400.0);
        app.drag_moved(200.0, 520.0);
        assert_eq!(app.slider(Side::Left).center_y, 520.0);
        assert!(app.slider(Side::Left).progress > 0.0);
        app.drag_ended(200.0, 520.0);
    }

    #[test]
    fn test_empty_deck_survives_swipes() {
        let mut app = app_with_jokes(0);
        app.tap(Side::Right);
        app.tick();
        app.tick();
        assert!(app.deck.current().is_none());
        // Color still cycles
        assert_eq!(app.color_index, 1);
    }
}
