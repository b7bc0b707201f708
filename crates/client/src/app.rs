//! Session loop tying the simulation, input, and the terminal UI together.
//!
//! The loop is synchronous: draw, block on one key event, apply it. The
//! simulation only advances inside [`App::dispatch`], when a command
//! actually spends the suspended player's turn.

use std::collections::VecDeque;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::layout::Size;
use tracing::info;
use warren_content::ScenarioConfig;
use warren_core::{Command, CommandOutcome, Frame as WorldFrame, World, view};

use crate::{
    input::{InputHandler, KeyAction},
    presentation::{
        terminal::Tui,
        ui::{self, RenderContext},
        widgets::{
            footer::FOOTER_HEIGHT, messages::MESSAGE_PANEL_HEIGHT,
            player_stats::STATS_PANEL_HEIGHT,
        },
    },
    state::{AppState, Mode, Screen},
};

const MESSAGE_LOG_CAPACITY: usize = 100;

/// Rolling log of everything said to the player this session.
pub struct MessageLog {
    entries: VecDeque<String>,
    capacity: usize,
}

impl MessageLog {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn push(&mut self, message: impl Into<String>) {
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(message.into());
    }

    /// Up to `count` most recent messages, newest first.
    pub fn recent(&self, count: usize) -> impl Iterator<Item = &str> {
        self.entries.iter().rev().take(count).map(String::as_str)
    }
}

pub struct App {
    world: World,
    state: AppState,
    input: InputHandler,
    log: MessageLog,
    snapshot: Option<WorldFrame>,
}

impl App {
    /// Builds a fresh session from a seed and runs it to the player's first
    /// turn. The app starts on the title screen.
    pub fn new(seed: u64) -> Result<Self> {
        let mut world = warren_content::new_game(seed, &ScenarioConfig::default());
        world.run()?;
        Ok(Self {
            world,
            state: AppState::new(),
            input: InputHandler,
            log: MessageLog::new(MESSAGE_LOG_CAPACITY),
            snapshot: None,
        })
    }

    /// Drive the session until the player quits.
    pub fn run(mut self, terminal: &mut Tui) -> Result<()> {
        loop {
            self.draw(terminal)?;
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if self.handle_key(key)? {
                        return Ok(());
                    }
                }
                // Resizes redraw on the next pass.
                _ => {}
            }
        }
    }

    fn draw(&mut self, terminal: &mut Tui) -> Result<()> {
        if self.state.screen == Screen::Play {
            let (width, height) = viewport(terminal.size()?);
            if let Some(snapshot) = view::frame(&mut self.world, width, height) {
                for message in snapshot.messages() {
                    self.log.push(message.clone());
                }
                self.snapshot = Some(snapshot);
            }
        }

        let ctx = RenderContext {
            world: &self.world,
            snapshot: self.snapshot.as_ref(),
            state: &self.state,
            log: &self.log,
        };
        terminal.draw(|frame| ui::render(frame, &ctx))?;
        Ok(())
    }

    /// Apply one key press. Returns true when the app should exit.
    fn handle_key(&mut self, key: KeyEvent) -> Result<bool> {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Ok(true);
        }

        match self.state.screen {
            Screen::Start => match key.code {
                KeyCode::Enter => self.begin(),
                KeyCode::Char('q') | KeyCode::Esc => return Ok(true),
                _ => {}
            },
            Screen::Lose => match key.code {
                KeyCode::Enter => self.restart()?,
                KeyCode::Char('q') | KeyCode::Esc => return Ok(true),
                _ => {}
            },
            Screen::Play => return self.handle_play_key(key),
        }
        Ok(false)
    }

    fn handle_play_key(&mut self, key: KeyEvent) -> Result<bool> {
        // A dead player only acknowledges the end or quits.
        if self.world.is_game_over() && self.state.mode == Mode::Walk {
            match key.code {
                KeyCode::Enter => self.state.screen = Screen::Lose,
                KeyCode::Char('q') => return Ok(true),
                _ => {}
            }
            return Ok(false);
        }

        match self.input.handle_key(key, &self.state.mode) {
            KeyAction::Quit => return Ok(true),
            KeyAction::Submit(command) => self.dispatch(command)?,
            KeyAction::OpenPickUp => self.open_pick_up()?,
            KeyAction::OpenDrop => {
                if self.is_carrying() {
                    self.state.mode = Mode::Drop;
                } else {
                    self.log.push("You are not carrying anything.");
                }
            }
            KeyAction::OpenInventory => {
                if self.is_carrying() {
                    self.state.mode = Mode::Inventory;
                } else {
                    self.log.push("You are not carrying anything.");
                }
            }
            KeyAction::OpenLook => {
                if let Some(snapshot) = &self.snapshot {
                    self.state.mode = Mode::Look {
                        cursor: snapshot.position(),
                    };
                }
            }
            KeyAction::OpenHelp => self.state.mode = Mode::Help,
            KeyAction::Toggle(index) => self.toggle_menu_entry(index)?,
            KeyAction::MoveCursor(dx, dy) => self.move_look_cursor(dx, dy),
            KeyAction::Confirm => self.confirm_pick_up()?,
            KeyAction::Cancel => self.state.mode = Mode::Walk,
            KeyAction::None => {}
        }
        Ok(false)
    }

    /// Execute a command for the suspended player and, when it spends the
    /// turn, free-run the simulation to the next player turn.
    fn dispatch(&mut self, command: Command) -> Result<()> {
        if let CommandOutcome::TurnSpent = self.world.execute(command)? {
            self.world.run()?;
        }
        Ok(())
    }

    /// The comma key: grab a lone item outright, open the menu over a
    /// stack. An empty cell goes through the simulation anyway so the
    /// player hears the usual refusal.
    fn open_pick_up(&mut self) -> Result<()> {
        let Some(snapshot) = &self.snapshot else {
            return Ok(());
        };
        let count = self.world.map().items_at(snapshot.position()).len();
        match count {
            0 => self.dispatch(Command::PickUp {
                indices: Vec::new(),
            })?,
            1 => self.dispatch(Command::PickUp { indices: vec![0] })?,
            _ => {
                self.state.mode = Mode::PickUp {
                    selected: vec![false; count],
                }
            }
        }
        Ok(())
    }

    fn confirm_pick_up(&mut self) -> Result<()> {
        let Mode::PickUp { selected } = std::mem::replace(&mut self.state.mode, Mode::Walk) else {
            return Ok(());
        };
        let indices: Vec<usize> = selected
            .iter()
            .enumerate()
            .filter_map(|(index, &picked)| picked.then_some(index))
            .collect();
        if !indices.is_empty() {
            self.dispatch(Command::PickUp { indices })?;
        }
        Ok(())
    }

    fn toggle_menu_entry(&mut self, index: usize) -> Result<()> {
        if let Mode::PickUp { selected } = &mut self.state.mode {
            if let Some(flag) = selected.get_mut(index) {
                *flag = !*flag;
            }
            return Ok(());
        }
        if self.state.mode == Mode::Drop {
            let occupied = self
                .world
                .player()
                .and_then(|player| self.world.map().entity(player).inventory())
                .and_then(|inventory| inventory.get(index))
                .is_some();
            if occupied {
                self.state.mode = Mode::Walk;
                self.dispatch(Command::Drop { slot: index })?;
            }
        }
        Ok(())
    }

    /// Walk the look cursor, keeping it inside the drawn camera rectangle.
    fn move_look_cursor(&mut self, dx: i32, dy: i32) {
        let Some(snapshot) = &self.snapshot else {
            return;
        };
        let origin = snapshot.origin();
        let max_x = origin.x + snapshot.width() as i32 - 1;
        let max_y = origin.y + snapshot.height() as i32 - 1;
        if let Mode::Look { cursor } = &mut self.state.mode {
            cursor.x = (cursor.x + dx).clamp(origin.x, max_x);
            cursor.y = (cursor.y + dy).clamp(origin.y, max_y);
        }
    }

    fn is_carrying(&self) -> bool {
        self.world
            .player()
            .and_then(|player| self.world.map().entity(player).inventory())
            .is_some_and(|inventory| !inventory.is_empty())
    }

    fn begin(&mut self) {
        self.state.screen = Screen::Play;
        self.log.push("Welcome to the warren.");
        self.log.push("Press [?] for the key list.");
    }

    /// Start over with a fresh seed after a death.
    fn restart(&mut self) -> Result<()> {
        let seed = rand::random();
        info!(seed, "starting a new descent");
        *self = App::new(seed)?;
        self.begin();
        Ok(())
    }
}

/// Camera size for the map panel given the whole terminal: everything left
/// after the fixed-height panels and the map block's own borders.
fn viewport(size: Size) -> (u32, u32) {
    let reserved = MESSAGE_PANEL_HEIGHT + STATS_PANEL_HEIGHT + FOOTER_HEIGHT + 2;
    let width = size.width.saturating_sub(2).max(1);
    let height = size.height.saturating_sub(reserved).max(1);
    (u32::from(width), u32::from(height))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn the_log_drops_its_oldest_entries_at_capacity() {
        let mut log = MessageLog::new(3);
        for n in 0..5 {
            log.push(format!("line {n}"));
        }
        let recent: Vec<&str> = log.recent(10).collect();
        assert_eq!(recent, vec!["line 4", "line 3", "line 2"]);
    }

    #[test]
    fn the_viewport_fills_what_the_panels_leave() {
        assert_eq!(
            viewport(Size {
                width: 80,
                height: 24
            }),
            (78, 11)
        );
    }

    #[test]
    fn the_viewport_never_collapses_to_zero() {
        assert_eq!(
            viewport(Size {
                width: 2,
                height: 4
            }),
            (1, 1)
        );
    }
}
