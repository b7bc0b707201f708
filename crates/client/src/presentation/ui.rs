//! Render entry point composing the widget set for the current screen.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    widgets::{Block, Borders, Paragraph},
};
use warren_core::{Frame as WorldFrame, Position, World, view};

use crate::{
    app::MessageLog,
    presentation::widgets::{
        self,
        item_menu::ItemEntry,
        messages::MESSAGE_PANEL_HEIGHT,
        player_stats::STATS_PANEL_HEIGHT,
    },
    state::{AppState, Mode, Screen},
};

/// Everything the renderer reads. Built fresh per draw; never mutated.
pub struct RenderContext<'a> {
    pub world: &'a World,
    pub snapshot: Option<&'a WorldFrame>,
    pub state: &'a AppState,
    pub log: &'a MessageLog,
}

/// Render the UI for the current screen and mode.
pub fn render(frame: &mut Frame, ctx: &RenderContext) {
    match ctx.state.screen {
        Screen::Start => widgets::start_screen::render(frame, frame.area()),
        Screen::Lose => widgets::lose_screen::render(frame, frame.area(), player_depth(ctx.world)),
        Screen::Play => render_play(frame, ctx),
    }
}

fn render_play(frame: &mut Frame, ctx: &RenderContext) {
    if ctx.state.mode.is_fullscreen() {
        render_fullscreen_mode(frame, ctx);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),                        // Map
            Constraint::Length(MESSAGE_PANEL_HEIGHT),  // Messages or look caption
            Constraint::Length(STATS_PANEL_HEIGHT),    // Player stats
            Constraint::Length(widgets::footer::FOOTER_HEIGHT), // Key hints
        ])
        .split(frame.area());

    let Some(snapshot) = ctx.snapshot else {
        return;
    };

    let cursor = match &ctx.state.mode {
        Mode::Look { cursor } => Some(*cursor),
        _ => None,
    };
    widgets::map::render(frame, chunks[0], snapshot, cursor);

    match cursor {
        Some(position) => render_look_panel(frame, chunks[1], ctx.world, snapshot, position),
        None => {
            let visible = MESSAGE_PANEL_HEIGHT.saturating_sub(2) as usize;
            let recent: Vec<&str> = ctx.log.recent(visible).collect();
            widgets::messages::render(frame, chunks[1], &recent);
        }
    }

    widgets::player_stats::render(frame, chunks[2], snapshot, ctx.world.clock());
    widgets::footer::render(frame, chunks[3], &ctx.state.mode);
}

/// Render full-screen modes that replace the game view entirely.
fn render_fullscreen_mode(frame: &mut Frame, ctx: &RenderContext) {
    match &ctx.state.mode {
        Mode::Inventory => widgets::item_menu::render(
            frame,
            frame.area(),
            "Inventory",
            &carried_entries(ctx.world),
            "[Esc] Close",
        ),
        Mode::Drop => widgets::item_menu::render(
            frame,
            frame.area(),
            "Choose the item you wish to drop",
            &carried_entries(ctx.world),
            "[a-z] Drop | [Esc] Cancel",
        ),
        Mode::PickUp { selected } => widgets::item_menu::render(
            frame,
            frame.area(),
            "Choose the items you wish to pick up",
            &floor_entries(ctx, selected),
            "[a-z] Toggle | [Enter] Confirm | [Esc] Cancel",
        ),
        Mode::Help => widgets::help::render(frame, frame.area()),
        Mode::Walk | Mode::Look { .. } => {}
    }
}

/// Caption panel shown in place of the message log while looking around.
fn render_look_panel(
    frame: &mut Frame,
    area: Rect,
    world: &World,
    snapshot: &WorldFrame,
    cursor: Position,
) {
    let caption = view::describe(world.map(), snapshot.field_of_view(), cursor);
    let paragraph =
        Paragraph::new(caption).block(Block::default().borders(Borders::ALL).title(" Look "));
    frame.render_widget(paragraph, area);
}

/// Menu rows for the player's carried items, lettered by slot.
fn carried_entries(world: &World) -> Vec<ItemEntry> {
    let Some(player) = world.player() else {
        return Vec::new();
    };
    let Some(inventory) = world.map().entity(player).inventory() else {
        return Vec::new();
    };
    inventory
        .carried()
        .take(26)
        .map(|(slot, item)| ItemEntry {
            letter: (b'a' + slot as u8) as char,
            marker: '-',
            text: item.name().to_string(),
        })
        .collect()
}

/// Menu rows for the stack underfoot, lettered by stack index.
fn floor_entries(ctx: &RenderContext, selected: &[bool]) -> Vec<ItemEntry> {
    let Some(snapshot) = ctx.snapshot else {
        return Vec::new();
    };
    ctx.world
        .map()
        .items_at(snapshot.position())
        .iter()
        .enumerate()
        .take(26)
        .map(|(index, item)| ItemEntry {
            letter: (b'a' + index as u8) as char,
            marker: if selected.get(index).copied().unwrap_or(false) {
                '+'
            } else {
                '-'
            },
            text: item.name().to_string(),
        })
        .collect()
}

fn player_depth(world: &World) -> i32 {
    world
        .player()
        .map(|player| world.map().entity(player).position().depth)
        .unwrap_or(0)
}
