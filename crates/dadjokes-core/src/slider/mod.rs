mod geometry;
mod state;

pub use geometry::{
    button_offset, button_opacity, horizontal_radius, interpolate, ledge_x, vertical_radius,
    Screen, WaveGeometry,
};
pub use state::{DragInput, Gesture, GesturePhase, Side, SliderState};
