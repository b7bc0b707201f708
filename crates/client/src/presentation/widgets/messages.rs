//! Messages widget displaying recent game events.

use ratatui::{
    Frame,
    layout::Rect,
    widgets::{Block, Borders, List, ListDirection, ListItem},
};

/// Height of the message panel in lines, borders included.
pub const MESSAGE_PANEL_HEIGHT: u16 = 7;

/// Render the message log panel.
///
/// `messages` is expected newest first; the list grows bottom-to-top so the
/// latest line always sits just above the stats row.
pub fn render(frame: &mut Frame, area: Rect, messages: &[&str]) {
    let items: Vec<ListItem> = messages
        .iter()
        .map(|text| ListItem::new(text.to_string()))
        .collect();

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(" Messages "))
        .direction(ListDirection::BottomToTop);

    frame.render_widget(list, area);
}
