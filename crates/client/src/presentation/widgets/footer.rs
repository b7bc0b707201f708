//! Footer widget displaying context-sensitive key bindings.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    widgets::Paragraph,
};

use crate::state::Mode;

/// Height of the footer hint line.
pub const FOOTER_HEIGHT: u16 = 1;

/// Render the one-line key hint for the current mode.
pub fn render(frame: &mut Frame, area: Rect, mode: &Mode) {
    let hints = match mode {
        Mode::Walk => {
            "[Arrows/hjkl/yubn] Move | [>] Down | [<] Up | [,] Pick up | [i] Pack | [d] Drop | [;] Look | [?] Help | [q] Quit"
        }
        Mode::Look { .. } => "[Arrows/hjkl/yubn] Move cursor | [Esc/;] Back",
        _ => "[Esc] Back",
    };

    let paragraph = Paragraph::new(hints).style(Style::default().fg(Color::DarkGray));

    frame.render_widget(paragraph, area);
}
