//! Application state: which screen is up and which input mode is active.

use warren_core::Position;

/// Top-level screen the client is showing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Screen {
    /// Title screen shown before the first descent.
    Start,
    /// The game proper.
    Play,
    /// Shown once the player has acknowledged their death.
    Lose,
}

/// Input mode within the play screen.
///
/// Walk and Look render the normal game layout; the item menus and the key
/// reference replace it wholesale.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Mode {
    /// Normal movement and interaction.
    Walk,
    /// Read-only list of carried items.
    Inventory,
    /// Multi-select over the item stack underfoot. One flag per stack
    /// index, toggled by letter.
    PickUp { selected: Vec<bool> },
    /// Pick one carried item to drop; a letter resolves immediately.
    Drop,
    /// Free cursor that captions whatever it rests on.
    Look { cursor: Position },
    /// Key reference.
    Help,
}

impl Mode {
    /// Modes that replace the game layout instead of drawing over it.
    pub fn is_fullscreen(&self) -> bool {
        matches!(
            self,
            Mode::Inventory | Mode::PickUp { .. } | Mode::Drop | Mode::Help
        )
    }
}

/// Mutable UI state threaded through input handling and rendering.
#[derive(Clone, Debug)]
pub struct AppState {
    pub screen: Screen,
    pub mode: Mode,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            screen: Screen::Start,
            mode: Mode::Walk,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
