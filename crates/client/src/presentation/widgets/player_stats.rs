//! Player stats widget: health, depth, position, and the turn clock.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use warren_core::{Frame as WorldFrame, Tick};

use crate::presentation::theme;

/// Height of the stats panel in lines, borders included.
pub const STATS_PANEL_HEIGHT: u16 = 3;

pub fn render(frame: &mut Frame, area: Rect, snapshot: &WorldFrame, clock: Tick) {
    let hp_style = theme::health_style(snapshot.hp(), snapshot.max_hp());
    let position = snapshot.position();

    let line = Line::from(vec![
        Span::styled("Health: ", Style::default().fg(Color::White)),
        Span::styled(
            format!("{}/{}", snapshot.hp().max(0), snapshot.max_hp()),
            hp_style,
        ),
        Span::raw("  "),
        Span::styled("Depth: ", Style::default().fg(Color::White)),
        Span::raw(format!("{}", snapshot.depth() + 1)),
        Span::raw("  "),
        Span::styled("Position: ", Style::default().fg(Color::White)),
        Span::raw(format!("({}, {})", position.x, position.y)),
        Span::raw("  "),
        Span::styled("Turn: ", Style::default().fg(Color::White)),
        Span::raw(clock.to_string()),
    ]);

    let paragraph = Paragraph::new(vec![line])
        .block(Block::default().borders(Borders::ALL).title(" Player "));

    frame.render_widget(paragraph, area);
}
