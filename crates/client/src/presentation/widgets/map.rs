//! Map widget drawing one camera snapshot of the cave.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use warren_core::{CellAppearance, Frame as WorldFrame, Position};

use crate::presentation::theme;

/// Render the map panel from a world snapshot.
///
/// Unseen cells stay blank, remembered cells come through dimmed, visible
/// cells carry their full glyph. The look cursor, when present, inverts its
/// cell so it reads against any background.
pub fn render(frame: &mut Frame, area: Rect, snapshot: &WorldFrame, cursor: Option<Position>) {
    let mut rows = Vec::with_capacity(snapshot.height() as usize);

    for y in 0..snapshot.height() {
        let mut spans = Vec::with_capacity(snapshot.width() as usize);
        for x in 0..snapshot.width() {
            let (symbol, mut style) = match snapshot.cell(x, y) {
                CellAppearance::Unseen => (' ', Style::default()),
                CellAppearance::Remembered(glyph) | CellAppearance::Visible(glyph) => {
                    (glyph.symbol, theme::glyph_style(glyph))
                }
            };

            let position = snapshot.origin().step(x as i32, y as i32);
            if cursor == Some(position) {
                style = Style::default()
                    .fg(Color::Black)
                    .bg(Color::Yellow)
                    .add_modifier(Modifier::BOLD);
            }

            spans.push(Span::styled(symbol.to_string(), style));
        }
        rows.push(Line::from(spans));
    }

    let paragraph = Paragraph::new(rows).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!(" Depth {} ", snapshot.depth() + 1)),
    );

    frame.render_widget(paragraph, area);
}
