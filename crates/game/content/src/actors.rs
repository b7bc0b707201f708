//! Creature templates.

use warren_core::{Capability, Color, EntityTemplate};

/// The player character.
pub fn player() -> EntityTemplate {
    EntityTemplate::builder("player")
        .glyph('@', Color::White)
        .max_hp(40)
        .attack_value(70)
        .defense_value(0)
        .sight_radius(6)
        .inventory_slots(22)
        .capabilities(&[
            Capability::PlayerControl,
            Capability::Attacker,
            Capability::Destructible,
            Capability::Sight,
            Capability::MessageRecipient,
            Capability::InventoryHolder,
        ])
        .build()
}

/// Sessile spreader. Harmless, but left alone it papers the cave.
pub fn fungus() -> EntityTemplate {
    EntityTemplate::builder("fungus")
        .glyph('F', Color::Chartreuse)
        .max_hp(3)
        .growths(5)
        .capabilities(&[Capability::FungusGrowth, Capability::Destructible])
        .build()
}

/// Fast roaming melee threat.
pub fn timberwolf() -> EntityTemplate {
    EntityTemplate::builder("timberwolf")
        .glyph('t', Color::Chocolate)
        .max_hp(5)
        .attack_value(50)
        .speed(150)
        .capabilities(&[
            Capability::Wander,
            Capability::Attacker,
            Capability::Destructible,
        ])
        .build()
}

/// The timberwolf's bigger cousin.
pub fn dire_timberwolf() -> EntityTemplate {
    EntityTemplate::builder("dire timberwolf")
        .glyph('T', Color::Chocolate)
        .max_hp(7)
        .attack_value(60)
        .speed(150)
        .capabilities(&[
            Capability::Wander,
            Capability::Attacker,
            Capability::Destructible,
        ])
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use warren_core::{DungeonMap, Group, MapDimensions, Position, TileKind};

    fn open_map() -> DungeonMap {
        let dimensions = MapDimensions::new(8, 8, 1);
        DungeonMap::new(dimensions, vec![TileKind::Floor; dimensions.cell_count()])
    }

    #[test]
    fn player_fights_sees_and_carries() {
        let mut map = open_map();
        let id = map.spawn(&player(), Position::new(1, 1, 0));
        let hero = map.entity(id);
        assert_eq!(hero.max_hp(), 40);
        assert_eq!(hero.attack_value(), 70);
        assert_eq!(hero.sight_radius(), 6);
        assert!(hero.in_group(Group::Actor));
        assert!(hero.in_group(Group::Attacker));
        assert_eq!(hero.inventory().map(|i| i.slot_count()), Some(22));
        assert_eq!(map.player(), Some(id));
    }

    #[test]
    fn fungus_is_a_scheduled_actor_but_no_attacker() {
        let mut map = open_map();
        let id = map.spawn(&fungus(), Position::new(2, 2, 0));
        let shroom = map.entity(id);
        assert!(shroom.in_group(Group::Actor));
        assert!(!shroom.in_group(Group::Attacker));
        assert_eq!(shroom.max_hp(), 3);
        assert!(map.is_scheduled(id));
    }

    #[test]
    fn wolves_outpace_the_player() {
        assert!(timberwolf().speed > player().speed);
        assert_eq!(timberwolf().speed, dire_timberwolf().speed);
        assert!(dire_timberwolf().max_hp > timberwolf().max_hp);
    }
}
