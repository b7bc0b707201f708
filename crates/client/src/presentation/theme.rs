//! Mapping from simulation palette entries onto terminal colors.
//!
//! The simulation describes cells as [`Glyph`]s over a small named palette;
//! everything terminal-specific about how those come out lives here.

use ratatui::style::{Color, Style};
use warren_core::{Color as PaletteColor, Glyph};

/// Resolves a palette entry to a concrete terminal color.
///
/// The named entries that have no ANSI counterpart get their RGB values;
/// terminals without truecolor support approximate them.
pub fn terminal_color(color: PaletteColor) -> Color {
    match color {
        PaletteColor::White => Color::White,
        PaletteColor::Black => Color::Black,
        PaletteColor::Gray => Color::Gray,
        PaletteColor::DarkGray => Color::DarkGray,
        PaletteColor::Goldenrod => Color::Rgb(218, 165, 32),
        PaletteColor::Chartreuse => Color::Rgb(127, 255, 0),
        PaletteColor::Chocolate => Color::Rgb(210, 105, 30),
        PaletteColor::Blue => Color::Blue,
        PaletteColor::Red => Color::Red,
        PaletteColor::Rgb(r, g, b) => Color::Rgb(r, g, b),
    }
}

/// Style for one map cell.
pub fn glyph_style(glyph: Glyph) -> Style {
    Style::default()
        .fg(terminal_color(glyph.foreground))
        .bg(terminal_color(glyph.background))
}

/// Color ramp for the health readout.
pub fn health_style(current: i32, maximum: i32) -> Style {
    if maximum <= 0 {
        return Style::default().fg(Color::Gray);
    }

    let percent = (current.max(0) * 100) / maximum;
    let color = match percent {
        75..=100 => Color::Green,
        50..=74 => Color::Yellow,
        25..=49 => Color::LightRed,
        _ => Color::Red,
    };

    Style::default().fg(color)
}
