use rand::seq::SliceRandom;
use rand::Rng;

use crate::slider::Side;

use super::models::Joke;

/// Step an index one position in the side's direction with wraparound.
///
/// Left moves backward (`0 -> len-1`), right moves forward (`len-1 -> 0`).
/// `len` must be nonzero.
#[inline]
pub fn step_index(index: usize, len: usize, side: Side) -> usize {
    match side {
        Side::Left => {
            if index == 0 {
                len - 1
            } else {
                index - 1
            }
        }
        Side::Right => {
            if index == len - 1 {
                0
            } else {
                index + 1
            }
        }
    }
}

/// The session's in-memory joke sequence with a current position.
///
/// An empty deck is a representable fallback state: `current()` returns
/// `None` and `advance()` is a no-op, so a failed or malformed fetch can
/// never index out of bounds.
#[derive(Debug, Clone, Default)]
pub struct JokeDeck {
    jokes: Vec<Joke>,
    index: usize,
}

impl JokeDeck {
    pub fn new(jokes: Vec<Joke>) -> Self {
        Self { jokes, index: 0 }
    }

    /// Shuffle the deck in place and reset the position
    pub fn shuffle<R: Rng>(&mut self, rng: &mut R) {
        self.jokes.shuffle(rng);
        self.index = 0;
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.jokes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.jokes.is_empty()
    }

    #[inline]
    pub fn position(&self) -> usize {
        self.index
    }

    pub fn current(&self) -> Option<&Joke> {
        self.jokes.get(self.index)
    }

    /// Move one joke in the side's direction with wraparound
    pub fn advance(&mut self, side: Side) {
        if self.jokes.is_empty() {
            return;
        }
        self.index = step_index(self.index, self.jokes.len(), side);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn joke(id: &str) -> Joke {
        Joke {
            id: id.to_string(),
            category: "general".to_string(),
            setup: format!("setup {id}"),
            punchline: format!("punchline {id}"),
        }
    }

    fn deck_of(n: usize) -> JokeDeck {
        JokeDeck::new((0..n).map(|i| joke(&i.to_string())).collect())
    }

    #[test]
    fn test_left_decrement_wraps_to_last() {
        assert_eq!(step_index(0, 3, Side::Left), 2);
        assert_eq!(step_index(2, 3, Side::Left), 1);
    }

    #[test]
    fn test_right_increment_wraps_to_first() {
        assert_eq!(step_index(2, 3, Side::Right), 0);
        assert_eq!(step_index(0, 3, Side::Right), 1);
    }

    #[test]
    fn test_advance_cycles_full_deck() {
        let mut deck = deck_of(3);
        deck.advance(Side::Right);
        deck.advance(Side::Right);
        deck.advance(Side::Right);
        assert_eq!(deck.position(), 0);

        deck.advance(Side::Left);
        assert_eq!(deck.position(), 2);
    }

    #[test]
    fn test_empty_deck_is_safe() {
        let mut deck = JokeDeck::default();
        assert!(deck.current().is_none());
        deck.advance(Side::Left);
        deck.advance(Side::Right);
        assert!(deck.current().is_none());
    }

    #[test]
    fn test_shuffle_keeps_all_jokes() {
        let mut deck = deck_of(10);
        let mut rng = rand::thread_rng();
        deck.shuffle(&mut rng);
        assert_eq!(deck.len(), 10);
        assert_eq!(deck.position(), 0);
        assert!(deck.current().is_some());
    }
}
