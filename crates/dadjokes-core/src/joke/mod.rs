mod deck;
mod fetcher;
mod models;

pub use deck::{step_index, JokeDeck};
pub use fetcher::JokeFetcher;
pub use models::Joke;
