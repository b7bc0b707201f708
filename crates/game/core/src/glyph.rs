//! Visual identity for tiles, items, and entities.

/// Display color, as a named palette entry or a raw RGB triple.
///
/// The named entries cover everything the reference content uses; `Rgb` is
/// the escape hatch for content that wants something else. Mapping onto an
/// actual terminal palette is the client's business.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Color {
    White,
    Black,
    Gray,
    DarkGray,
    Goldenrod,
    Chartreuse,
    Chocolate,
    Blue,
    Red,
    Rgb(u8, u8, u8),
}

/// A single display cell: symbol plus foreground and background color.
///
/// Glyphs are plain values. Nothing in the simulation ever mutates one; a
/// different look means a different glyph.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Glyph {
    pub symbol: char,
    pub foreground: Color,
    pub background: Color,
}

impl Glyph {
    pub const fn new(symbol: char, foreground: Color, background: Color) -> Self {
        Self {
            symbol,
            foreground,
            background,
        }
    }

    /// The common case: a colored symbol on black.
    pub const fn on_black(symbol: char, foreground: Color) -> Self {
        Self::new(symbol, foreground, Color::Black)
    }

    /// Same glyph with another foreground.
    pub const fn with_foreground(self, foreground: Color) -> Self {
        Self::new(self.symbol, foreground, self.background)
    }
}

impl Default for Glyph {
    fn default() -> Self {
        Self::on_black(' ', Color::White)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn on_black_fills_background() {
        let g = Glyph::on_black('@', Color::White);
        assert_eq!(g.symbol, '@');
        assert_eq!(g.background, Color::Black);
    }

    #[test]
    fn with_foreground_keeps_symbol_and_background() {
        let g = Glyph::on_black('#', Color::Goldenrod).with_foreground(Color::DarkGray);
        assert_eq!(g.symbol, '#');
        assert_eq!(g.foreground, Color::DarkGray);
        assert_eq!(g.background, Color::Black);
    }
}
