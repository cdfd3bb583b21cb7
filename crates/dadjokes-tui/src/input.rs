use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Input action that can be performed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    /// Tap the left wave: previous joke
    SwipePrev,
    /// Tap the right wave: next joke
    SwipeNext,
    None,
}

/// Handle a key event and return the corresponding action
pub fn handle_key_event(key: KeyEvent) -> Action {
    match (key.code, key.modifiers) {
        (KeyCode::Char('q'), KeyModifiers::NONE) => Action::Quit,
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => Action::Quit,
        (KeyCode::Esc, KeyModifiers::NONE) => Action::Quit,

        (KeyCode::Left, KeyModifiers::NONE) => Action::SwipePrev,
        (KeyCode::Char('h'), KeyModifiers::NONE) => Action::SwipePrev,
        (KeyCode::Right, KeyModifiers::NONE) => Action::SwipeNext,
        (KeyCode::Char('l'), KeyModifiers::NONE) => Action::SwipeNext,

        _ => Action::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_arrow_keys_swipe() {
        assert_eq!(handle_key_event(key(KeyCode::Left)), Action::SwipePrev);
        assert_eq!(handle_key_event(key(KeyCode::Right)), Action::SwipeNext);
    }

    #[test]
    fn test_quit_keys() {
        assert_eq!(handle_key_event(key(KeyCode::Char('q'))), Action::Quit);
        assert_eq!(
            handle_key_event(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Action::Quit
        );
    }

    #[test]
    fn test_unmapped_key_is_none() {
        assert_eq!(handle_key_event(key(KeyCode::Char('x'))), Action::None);
    }
}
