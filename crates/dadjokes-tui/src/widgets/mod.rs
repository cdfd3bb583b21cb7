mod joke_card;
mod status_bar;
mod wave;

pub use joke_card::JokeCardWidget;
pub use status_bar::StatusBarWidget;
pub use wave::WaveWidget;
