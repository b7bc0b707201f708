//! Item definitions.

use warren_core::{Color, Glyph, Item};

pub fn rock() -> Item {
    Item::new("rock", Glyph::on_black('*', Color::Gray), "A fist-sized rock")
}

pub fn mushroom() -> Item {
    Item::new(
        "mushroom",
        Glyph::on_black(',', Color::Chartreuse),
        "A pale cave mushroom",
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn items_carry_glyph_and_description() {
        assert_eq!(rock().glyph().symbol, '*');
        assert_eq!(mushroom().describe_a(), "a mushroom");
    }
}
