use ratatui::{layout::Rect, style::Color, Frame};

use dadjokes_core::slider::{Side, WaveGeometry};

use crate::app::App;

/// Opacity below which the swipe button stops rendering at full strength
const DIM_OPACITY: f64 = 0.5;

/// Paints one edge's wave and its swipe button.
///
/// The wave is sampled per terminal row as an elliptical bulge around the
/// slider's center, mapped from the logical viewport onto the area. The
/// horizontal radius may be negative in the overshoot band; it is clamped
/// at paint time only.
pub struct WaveWidget;

impl WaveWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App, side: Side) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let screen = app.screen();
        let state = app.slider(side);
        let geometry = state.geometry(screen, &app.config.wave);
        let color = app.palette.color(app.next_color_index(side));

        // The settle replay shifts each slider outward from its own edge
        let shift_x = -side.orientation() * app.settle_offset();

        let scale_x = area.width as f64 / screen.width;
        let scale_y = area.height as f64 / screen.height;

        let radius = geometry.horizontal_radius.max(0.0);
        let buf = frame.buffer_mut();

        for row in 0..area.height {
            let y = (row as f64 + 0.5) / scale_y;
            let dy = (y - geometry.center_y) / geometry.vertical_radius;
            let bulge = if dy.abs() < 1.0 {
                radius * (1.0 - dy * dy).sqrt()
            } else {
                0.0
            };
            let edge = geometry.ledge_x + side.orientation() * bulge + shift_x;
            let edge_col = (edge * scale_x).round().clamp(0.0, area.width as f64) as u16;

            let (start, end) = match side {
                Side::Left => (0, edge_col),
                Side::Right => (edge_col, area.width),
            };
            for col in start..end {
                buf[(area.x + col, area.y + row)].set_char(' ').set_bg(color);
            }
        }

        Self::render_button(frame, area, geometry, side, shift_x, scale_x, scale_y);
    }

    fn render_button(
        frame: &mut Frame,
        area: Rect,
        geometry: WaveGeometry,
        side: Side,
        shift_x: f64,
        scale_x: f64,
        scale_y: f64,
    ) {
        if geometry.button_opacity <= 0.0 {
            return;
        }
        let col = ((geometry.button_x + shift_x) * scale_x).round();
        let row = (geometry.button_y * scale_y).round();
        if col < 0.0 || row < 0.0 || col >= area.width as f64 || row >= area.height as f64 {
            return;
        }

        let chevron = match side {
            Side::Left => '❯',
            Side::Right => '❮',
        };
        let cell = &mut frame.buffer_mut()[(area.x + col as u16, area.y + row as u16)];
        cell.set_char(chevron);
        cell.set_fg(if geometry.button_opacity < DIM_OPACITY {
            Color::DarkGray
        } else {
            Color::White
        });
    }
}
