//! Full-screen key reference.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

pub fn render(frame: &mut Frame, area: Rect) {
    let key = Style::default().fg(Color::Yellow);

    let lines = vec![
        Line::from(""),
        Line::from(vec![
            Span::styled("Arrows, hjkl, yubn", key),
            Span::raw("  move; walk into a wall to dig"),
        ]),
        Line::from(vec![Span::styled(">", key), Span::raw("  take the stairs down")]),
        Line::from(vec![Span::styled("<", key), Span::raw("  take the stairs up")]),
        Line::from(vec![
            Span::styled(",", key),
            Span::raw("  pick up what is underfoot"),
        ]),
        Line::from(vec![Span::styled("d", key), Span::raw("  drop an item")]),
        Line::from(vec![Span::styled("i", key), Span::raw("  inspect your pack")]),
        Line::from(vec![Span::styled(";", key), Span::raw("  look around")]),
        Line::from(vec![Span::styled("?", key), Span::raw("  this screen")]),
        Line::from(vec![Span::styled("q", key), Span::raw("  quit")]),
        Line::from(""),
        Line::from(Span::styled(
            "--- press any key to continue ---",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title(" Help "));

    frame.render_widget(paragraph, area);
}
