//! Name-keyed lookups over the built-in definitions.

use warren_core::{EntityTemplate, Item};

use crate::{actors, items};

/// Creature template by name, or `None` for names this catalog lacks.
pub fn template(name: &str) -> Option<EntityTemplate> {
    match name {
        "player" => Some(actors::player()),
        "fungus" => Some(actors::fungus()),
        "timberwolf" => Some(actors::timberwolf()),
        "dire timberwolf" => Some(actors::dire_timberwolf()),
        _ => None,
    }
}

/// Item by name, or `None` for names this catalog lacks.
pub fn item(name: &str) -> Option<Item> {
    match name {
        "rock" => Some(items::rock()),
        "mushroom" => Some(items::mushroom()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_names_resolve() {
        assert_eq!(template("fungus").map(|t| t.max_hp), Some(3));
        assert_eq!(template("dire timberwolf").map(|t| t.glyph.symbol), Some('T'));
        assert_eq!(item("rock").map(|i| i.name().to_owned()), Some("rock".into()));
    }

    #[test]
    fn unknown_names_do_not() {
        assert!(template("grue").is_none());
        assert!(item("lantern").is_none());
    }
}
