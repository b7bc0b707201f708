//! Input processing for the terminal client.
//!
//! This module owns the keyboard-to-command mapping so the rest of the
//! application can remain agnostic about concrete key bindings or the
//! specifics of `crossterm` events.

use crossterm::event::{KeyCode, KeyEvent};
use warren_core::Command;

use crate::state::Mode;

/// High-level outcome of processing a keyboard event.
#[derive(Debug, PartialEq, Eq)]
pub enum KeyAction {
    /// Exit the application.
    Quit,
    /// Hand the decoded command to the simulation.
    Submit(Command),
    /// Open the carried-items list.
    OpenInventory,
    /// Pick up from the stack underfoot, opening the menu when it is deep.
    OpenPickUp,
    /// Open the drop menu.
    OpenDrop,
    /// Enter look mode with a free cursor.
    OpenLook,
    /// Show the key reference.
    OpenHelp,
    /// Toggle or choose the item menu entry for this letter index.
    Toggle(usize),
    /// Move the look cursor.
    MoveCursor(i32, i32),
    /// Commit the current menu selection.
    Confirm,
    /// Leave the current mode.
    Cancel,
    /// No meaningful command was produced.
    None,
}

/// Translates `KeyEvent`s into [`KeyAction`]s for the active mode.
pub struct InputHandler;

impl InputHandler {
    /// Converts a raw key event into a higher-level command.
    pub fn handle_key(&self, key: KeyEvent, mode: &Mode) -> KeyAction {
        match mode {
            Mode::Walk => self.handle_walk(key),
            Mode::Look { .. } => self.handle_look(key),
            Mode::PickUp { .. } => self.handle_menu(key, true),
            Mode::Drop => self.handle_menu(key, false),
            Mode::Inventory => match key.code {
                KeyCode::Esc | KeyCode::Enter | KeyCode::Char('i') => KeyAction::Cancel,
                _ => KeyAction::None,
            },
            // The key reference closes on anything.
            Mode::Help => KeyAction::Cancel,
        }
    }

    fn handle_walk(&self, key: KeyEvent) -> KeyAction {
        if let Some((dx, dy)) = movement_delta(key) {
            return KeyAction::Submit(Command::Move { dx, dy, dz: 0 });
        }
        match key.code {
            KeyCode::Char('>') => KeyAction::Submit(Command::Move {
                dx: 0,
                dy: 0,
                dz: 1,
            }),
            KeyCode::Char('<') => KeyAction::Submit(Command::Move {
                dx: 0,
                dy: 0,
                dz: -1,
            }),
            KeyCode::Char(',') => KeyAction::OpenPickUp,
            KeyCode::Char('d') => KeyAction::OpenDrop,
            KeyCode::Char('i') => KeyAction::OpenInventory,
            KeyCode::Char(';') => KeyAction::OpenLook,
            KeyCode::Char('?') => KeyAction::OpenHelp,
            KeyCode::Char('q') => KeyAction::Quit,
            _ => KeyAction::None,
        }
    }

    fn handle_look(&self, key: KeyEvent) -> KeyAction {
        if let Some((dx, dy)) = movement_delta(key) {
            return KeyAction::MoveCursor(dx, dy);
        }
        match key.code {
            KeyCode::Esc | KeyCode::Char(';') => KeyAction::Cancel,
            _ => KeyAction::None,
        }
    }

    fn handle_menu(&self, key: KeyEvent, multi_select: bool) -> KeyAction {
        match key.code {
            KeyCode::Char(raw) if raw.is_ascii_alphabetic() => {
                let letter = raw.to_ascii_lowercase();
                KeyAction::Toggle(letter as usize - 'a' as usize)
            }
            KeyCode::Enter if multi_select => KeyAction::Confirm,
            KeyCode::Enter | KeyCode::Esc => KeyAction::Cancel,
            _ => KeyAction::None,
        }
    }
}

/// Eight-way movement bindings: arrows, `hjkl`, and `yubn` diagonals.
fn movement_delta(key: KeyEvent) -> Option<(i32, i32)> {
    let delta = match key.code {
        KeyCode::Left | KeyCode::Char('h') => (-1, 0),
        KeyCode::Right | KeyCode::Char('l') => (1, 0),
        KeyCode::Up | KeyCode::Char('k') => (0, -1),
        KeyCode::Down | KeyCode::Char('j') => (0, 1),
        KeyCode::Char('y') => (-1, -1),
        KeyCode::Char('u') => (1, -1),
        KeyCode::Char('b') => (-1, 1),
        KeyCode::Char('n') => (1, 1),
        _ => return None,
    };
    Some(delta)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::empty(),
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    #[test]
    fn maps_movement_keys() {
        let handler = InputHandler;
        assert_eq!(
            handler.handle_key(key(KeyCode::Char('h')), &Mode::Walk),
            KeyAction::Submit(Command::Move {
                dx: -1,
                dy: 0,
                dz: 0
            })
        );
        assert_eq!(
            handler.handle_key(key(KeyCode::Char('n')), &Mode::Walk),
            KeyAction::Submit(Command::Move { dx: 1, dy: 1, dz: 0 })
        );
        assert_eq!(
            handler.handle_key(key(KeyCode::Up), &Mode::Walk),
            KeyAction::Submit(Command::Move {
                dx: 0,
                dy: -1,
                dz: 0
            })
        );
    }

    #[test]
    fn maps_stairs_to_depth_changes() {
        let handler = InputHandler;
        assert_eq!(
            handler.handle_key(key(KeyCode::Char('>')), &Mode::Walk),
            KeyAction::Submit(Command::Move { dx: 0, dy: 0, dz: 1 })
        );
        assert_eq!(
            handler.handle_key(key(KeyCode::Char('<')), &Mode::Walk),
            KeyAction::Submit(Command::Move {
                dx: 0,
                dy: 0,
                dz: -1
            })
        );
    }

    #[test]
    fn letters_address_menu_slots() {
        let handler = InputHandler;
        let mode = Mode::PickUp {
            selected: vec![false; 3],
        };
        assert_eq!(
            handler.handle_key(key(KeyCode::Char('c')), &mode),
            KeyAction::Toggle(2)
        );
        assert_eq!(
            handler.handle_key(key(KeyCode::Char('A')), &mode),
            KeyAction::Toggle(0)
        );
        assert_eq!(
            handler.handle_key(key(KeyCode::Enter), &mode),
            KeyAction::Confirm
        );
    }

    #[test]
    fn drop_menu_resolves_on_the_letter() {
        let handler = InputHandler;
        assert_eq!(
            handler.handle_key(key(KeyCode::Char('b')), &Mode::Drop),
            KeyAction::Toggle(1)
        );
        assert_eq!(
            handler.handle_key(key(KeyCode::Enter), &Mode::Drop),
            KeyAction::Cancel
        );
    }

    #[test]
    fn look_mode_moves_the_cursor_instead_of_the_player() {
        let handler = InputHandler;
        let mode = Mode::Look {
            cursor: warren_core::Position::new(0, 0, 0),
        };
        assert_eq!(
            handler.handle_key(key(KeyCode::Char('j')), &mode),
            KeyAction::MoveCursor(0, 1)
        );
        assert_eq!(
            handler.handle_key(key(KeyCode::Esc), &mode),
            KeyAction::Cancel
        );
    }

    #[test]
    fn any_key_leaves_the_help_screen() {
        let handler = InputHandler;
        assert_eq!(
            handler.handle_key(key(KeyCode::Char('x')), &Mode::Help),
            KeyAction::Cancel
        );
    }

    #[test]
    fn ignores_unknown_keys() {
        let handler = InputHandler;
        assert_eq!(
            handler.handle_key(key(KeyCode::Char('z')), &Mode::Walk),
            KeyAction::None
        );
    }
}
