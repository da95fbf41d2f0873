//! Event handler for processing input events.

use crate::config::KeyBindings;
use crate::error::Result;
use crate::state::{Action, Side, Store};
use crossterm::event::{
    self, Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, MouseEvent, MouseEventKind,
};
use std::time::Duration;

use super::InputEvent;

/// Handles input events and produces actions.
pub struct EventHandler {
    /// Key bindings.
    keybindings: KeyBindings,
    /// Poll timeout; a timeout yields a tick.
    tick_rate: Duration,
    /// Store reference for state-aware handling.
    store_snapshot: Option<StoreSnapshot>,
}

/// Snapshot of relevant store state for event handling.
#[derive(Debug, Clone, Default)]
struct StoreSnapshot {
    show_help: bool,
    drawer_open: bool,
    selected_question_id: Option<u32>,
    selected_selection_id: Option<u32>,
}

impl EventHandler {
    /// Create a new event handler.
    pub fn new(keybindings: KeyBindings, tick_rate: Duration) -> Self {
        Self {
            keybindings,
            tick_rate,
            store_snapshot: None,
        }
    }

    /// Update the store snapshot for state-aware event handling.
    pub fn update_store_snapshot(&mut self, store: &Store) {
        self.store_snapshot = Some(StoreSnapshot {
            show_help: store.app.show_help,
            drawer_open: store.coupon.drawer_open,
            selected_question_id: store.catalog.selected_question().map(|q| q.id),
            selected_selection_id: store.coupon.selected_selection().map(|s| s.question_id),
        });
    }

    /// Get the next action from user input, or a tick when none arrives in time.
    pub async fn next(&mut self) -> Result<Option<Action>> {
        if !event::poll(self.tick_rate)? {
            return Ok(Some(Action::Tick));
        }

        let action = match event::read()? {
            CrosstermEvent::Key(key) => self.handle_key(key),
            CrosstermEvent::Mouse(mouse) => self.handle_mouse(mouse),
            // Terminal will automatically redraw
            _ => None,
        };
        Ok(action)
    }

    /// Handle a key event and return an optional action.
    fn handle_key(&self, key: KeyEvent) -> Option<Action> {
        if key.kind != KeyEventKind::Press {
            return None;
        }

        let snapshot = self.store_snapshot.as_ref()?;
        let input = InputEvent::from(key);

        if input.matches(&self.keybindings.quit) {
            return Some(Action::Quit);
        }

        if snapshot.show_help {
            return (input.matches(&self.keybindings.help) || key.code == KeyCode::Esc)
                .then_some(Action::ToggleHelp);
        }

        if input.matches(&self.keybindings.help) {
            return Some(Action::ToggleHelp);
        }
        if input.matches(&self.keybindings.toggle_coupon) {
            return Some(Action::ToggleCoupon);
        }
        if input.matches(&self.keybindings.toggle_boost) {
            return Some(Action::ToggleBoost);
        }

        if input.matches(&self.keybindings.up) || key.code == KeyCode::Up {
            return Some(Action::ScrollUp);
        }
        if input.matches(&self.keybindings.down) || key.code == KeyCode::Down {
            return Some(Action::ScrollDown);
        }
        if key.code == KeyCode::Home {
            return Some(Action::GoToTop);
        }
        if key.code == KeyCode::End {
            return Some(Action::GoToBottom);
        }

        if snapshot.drawer_open {
            self.handle_drawer(key, snapshot)
        } else {
            self.handle_questions(key, snapshot)
        }
    }

    /// Keys on the question list: taps and swipes become votes.
    fn handle_questions(&self, key: KeyEvent, snapshot: &StoreSnapshot) -> Option<Action> {
        let input = InputEvent::from(key);

        if input.matches(&self.keybindings.next_category) {
            return Some(Action::NextCategory);
        }
        if key.code == KeyCode::Esc {
            return Some(Action::DismissNotification);
        }

        let side = if input.matches(&self.keybindings.vote_yes) || key.code == KeyCode::Right {
            Side::Yes
        } else if input.matches(&self.keybindings.vote_no) || key.code == KeyCode::Left {
            Side::No
        } else {
            return None;
        };

        snapshot
            .selected_question_id
            .map(|question_id| Action::Vote { question_id, side })
    }

    /// Keys inside the coupon drawer.
    fn handle_drawer(&self, key: KeyEvent, snapshot: &StoreSnapshot) -> Option<Action> {
        let input = InputEvent::from(key);

        if key.code == KeyCode::Esc {
            return Some(Action::CloseCoupon);
        }
        if input.matches(&self.keybindings.clear_coupon) {
            return Some(Action::ClearCoupon);
        }
        if input.matches(&self.keybindings.remove_selection) || key.code == KeyCode::Delete {
            return snapshot.selected_selection_id.map(Action::RemoveSelection);
        }
        if input.matches(&self.keybindings.submit) {
            return Some(Action::SubmitCoupon);
        }

        None
    }

    /// Handle a mouse event and return an optional action.
    fn handle_mouse(&self, mouse: MouseEvent) -> Option<Action> {
        match mouse.kind {
            MouseEventKind::ScrollUp => Some(Action::ScrollUp),
            MouseEventKind::ScrollDown => Some(Action::ScrollDown),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::builtin_questions;
    use crate::config::Config;
    use crossterm::event::KeyModifiers;
    use tokio::sync::mpsc;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn setup() -> (EventHandler, Store) {
        let (tx, _rx) = mpsc::unbounded_channel();
        let store = Store::new(tx, builtin_questions(), &Config::default());
        let mut handler = EventHandler::new(KeyBindings::default(), Duration::from_millis(250));
        handler.update_store_snapshot(&store);
        (handler, store)
    }

    #[test]
    fn test_no_snapshot_yields_nothing() {
        let handler = EventHandler::new(KeyBindings::default(), Duration::from_millis(250));
        assert!(handler.handle_key(press(KeyCode::Char('y'))).is_none());
    }

    #[test]
    fn test_tap_and_swipe_vote_on_highlighted_question() {
        let (handler, _store) = setup();

        assert!(matches!(
            handler.handle_key(press(KeyCode::Char('y'))),
            Some(Action::Vote {
                question_id: 1,
                side: Side::Yes
            })
        ));
        assert!(matches!(
            handler.handle_key(press(KeyCode::Left)),
            Some(Action::Vote {
                question_id: 1,
                side: Side::No
            })
        ));
    }

    #[test]
    fn test_escape_on_questions_dismisses_notification() {
        let (handler, _store) = setup();
        assert!(matches!(
            handler.handle_key(press(KeyCode::Esc)),
            Some(Action::DismissNotification)
        ));
    }

    #[test]
    fn test_drawer_keys() {
        let (mut handler, mut store) = setup();
        store.reduce(Action::Vote {
            question_id: 3,
            side: Side::No,
        });
        handler.update_store_snapshot(&store);

        assert!(matches!(
            handler.handle_key(press(KeyCode::Char('x'))),
            Some(Action::RemoveSelection(3))
        ));
        assert!(matches!(
            handler.handle_key(KeyEvent::new(KeyCode::Char('x'), KeyModifiers::CONTROL)),
            Some(Action::ClearCoupon)
        ));
        assert!(matches!(
            handler.handle_key(press(KeyCode::Enter)),
            Some(Action::SubmitCoupon)
        ));
        assert!(matches!(
            handler.handle_key(press(KeyCode::Esc)),
            Some(Action::CloseCoupon)
        ));
        // Votes are not taken while the drawer has focus.
        assert!(handler.handle_key(press(KeyCode::Char('y'))).is_none());
    }

    #[test]
    fn test_help_overlay_swallows_keys() {
        let (mut handler, mut store) = setup();
        store.reduce(Action::ToggleHelp);
        handler.update_store_snapshot(&store);

        assert!(handler.handle_key(press(KeyCode::Char('y'))).is_none());
        assert!(matches!(
            handler.handle_key(press(KeyCode::Esc)),
            Some(Action::ToggleHelp)
        ));
        assert!(matches!(
            handler.handle_key(press(KeyCode::Char('q'))),
            Some(Action::Quit)
        ));
    }
}
