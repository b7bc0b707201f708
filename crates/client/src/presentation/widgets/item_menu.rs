//! Item list screen shared by the inventory, pick up, and drop modes.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};

/// One row of an item menu: a letter, a selection marker, and the name.
pub struct ItemEntry {
    pub letter: char,
    pub marker: char,
    pub text: String,
}

/// Render a full-screen item list.
///
/// Rows read `a - rock`, with `+` as the marker on selected rows in
/// multi-select menus. `hint` is the key line shown along the bottom.
pub fn render(frame: &mut Frame, area: Rect, title: &str, entries: &[ItemEntry], hint: &str) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Item rows
            Constraint::Length(1), // Key hints
        ])
        .split(area);

    let items: Vec<ListItem> = entries
        .iter()
        .map(|entry| {
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{} ", entry.letter),
                    Style::default().fg(Color::Yellow),
                ),
                Span::styled(format!("{} ", entry.marker), Style::default().fg(Color::Gray)),
                Span::raw(entry.text.clone()),
            ]))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!(" {title} ")),
    );
    frame.render_widget(list, chunks[0]);

    let footer = Paragraph::new(hint).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(footer, chunks[1]);
}
