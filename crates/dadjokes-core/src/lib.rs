pub mod config;
pub mod error;
pub mod joke;
pub mod slider;

pub use config::{AppConfig, SwipeConfig, WaveConfig};
pub use error::{Error, Result};
pub use joke::{Joke, JokeDeck, JokeFetcher};
pub use slider::{DragInput, Gesture, GesturePhase, Screen, Side, SliderState};
