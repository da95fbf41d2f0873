//! Input event types and key binding matching.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Simplified key representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Char(char),
    Enter,
    Escape,
    Backspace,
    Delete,
    Tab,
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    Other,
}

impl From<KeyCode> for Key {
    fn from(code: KeyCode) -> Self {
        match code {
            KeyCode::Char(c) => Key::Char(c),
            KeyCode::Enter => Key::Enter,
            KeyCode::Esc => Key::Escape,
            KeyCode::Backspace => Key::Backspace,
            KeyCode::Delete => Key::Delete,
            KeyCode::Tab => Key::Tab,
            KeyCode::Up => Key::Up,
            KeyCode::Down => Key::Down,
            KeyCode::Left => Key::Left,
            KeyCode::Right => Key::Right,
            KeyCode::Home => Key::Home,
            KeyCode::End => Key::End,
            _ => Key::Other,
        }
    }
}

/// Key modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Modifiers {
    pub ctrl: bool,
    pub alt: bool,
    pub shift: bool,
}

impl From<KeyModifiers> for Modifiers {
    fn from(mods: KeyModifiers) -> Self {
        Self {
            ctrl: mods.contains(KeyModifiers::CONTROL),
            alt: mods.contains(KeyModifiers::ALT),
            shift: mods.contains(KeyModifiers::SHIFT),
        }
    }
}

/// A processed input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputEvent {
    pub key: Key,
    pub modifiers: Modifiers,
}

impl From<KeyEvent> for InputEvent {
    fn from(event: KeyEvent) -> Self {
        Self {
            key: Key::from(event.code),
            modifiers: Modifiers::from(event.modifiers),
        }
    }
}

impl InputEvent {
    /// Create a new input event.
    pub fn new(key: Key, modifiers: Modifiers) -> Self {
        Self { key, modifiers }
    }

    /// Check if this matches a key binding string (e.g., "Ctrl+x", "Enter").
    ///
    /// Shift is only compared when the binding names it, since terminals
    /// report shifted punctuation such as `?` inconsistently.
    pub fn matches(&self, binding: &str) -> bool {
        let mut expected_ctrl = false;
        let mut expected_alt = false;
        let mut expected_shift = false;
        let mut expected_key = "";

        for part in binding.split('+') {
            match part.to_lowercase().as_str() {
                "ctrl" => expected_ctrl = true,
                "alt" => expected_alt = true,
                "shift" => expected_shift = true,
                _ => expected_key = part,
            }
        }

        if self.modifiers.ctrl != expected_ctrl || self.modifiers.alt != expected_alt {
            return false;
        }
        if expected_shift && !self.modifiers.shift {
            return false;
        }

        match expected_key.to_lowercase().as_str() {
            "enter" => self.key == Key::Enter,
            "esc" | "escape" => self.key == Key::Escape,
            "backspace" => self.key == Key::Backspace,
            "delete" | "del" => self.key == Key::Delete,
            "tab" => self.key == Key::Tab,
            "up" => self.key == Key::Up,
            "down" => self.key == Key::Down,
            "left" => self.key == Key::Left,
            "right" => self.key == Key::Right,
            "home" => self.key == Key::Home,
            "end" => self.key == Key::End,
            s if s.chars().count() == 1 => s.chars().next().is_some_and(|c| {
                self.key == Key::Char(c) || self.key == Key::Char(c.to_ascii_uppercase())
            }),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode, mods: KeyModifiers) -> InputEvent {
        InputEvent::from(KeyEvent::new(code, mods))
    }

    #[test]
    fn test_plain_char_binding() {
        assert!(key(KeyCode::Char('y'), KeyModifiers::NONE).matches("y"));
        assert!(key(KeyCode::Char('Y'), KeyModifiers::SHIFT).matches("y"));
        assert!(!key(KeyCode::Char('n'), KeyModifiers::NONE).matches("y"));
    }

    #[test]
    fn test_ctrl_binding() {
        assert!(key(KeyCode::Char('x'), KeyModifiers::CONTROL).matches("Ctrl+x"));
        assert!(!key(KeyCode::Char('x'), KeyModifiers::NONE).matches("Ctrl+x"));
        assert!(!key(KeyCode::Char('x'), KeyModifiers::CONTROL).matches("x"));
    }

    #[test]
    fn test_shifted_punctuation() {
        assert!(key(KeyCode::Char('?'), KeyModifiers::SHIFT).matches("?"));
        assert!(key(KeyCode::Char('?'), KeyModifiers::NONE).matches("?"));
    }

    #[test]
    fn test_named_keys() {
        assert!(key(KeyCode::Enter, KeyModifiers::NONE).matches("Enter"));
        assert!(key(KeyCode::Esc, KeyModifiers::NONE).matches("esc"));
        assert!(key(KeyCode::Tab, KeyModifiers::NONE).matches("Tab"));
        assert!(!key(KeyCode::F(5), KeyModifiers::NONE).matches("Enter"));
    }
}
