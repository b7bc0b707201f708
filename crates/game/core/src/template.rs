//! Entity construction templates.

use crate::capability::Capability;
use crate::config::GameConfig;
use crate::glyph::{Color, Glyph};

/// Construction-time description of an entity.
///
/// A template bundles every field any capability might want. When an entity
/// is assembled, each attached capability's `init` hook reads the fields it
/// cares about and ignores the rest, so one template serves arbitrary
/// capability mixes and unrelated capabilities never coordinate.
///
/// Entities keep a copy of their template, which is what lets a spreading
/// fungus clone itself without knowing anything about content definitions.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EntityTemplate {
    pub name: String,
    pub glyph: Glyph,
    pub max_hp: i32,
    pub attack_value: i32,
    pub defense_value: i32,
    pub armor_durability: i32,
    pub armor_reduction: i32,
    pub sight_radius: u32,
    pub inventory_slots: usize,
    pub speed: u32,
    pub growths: u32,
    pub capabilities: Vec<Capability>,
}

impl EntityTemplate {
    /// Create a builder preloaded with the standard defaults.
    pub fn builder(name: impl Into<String>) -> EntityTemplateBuilder {
        EntityTemplateBuilder::new(name.into())
    }
}

/// Builder for constructing entity templates.
pub struct EntityTemplateBuilder {
    template: EntityTemplate,
}

impl EntityTemplateBuilder {
    fn new(name: String) -> Self {
        Self {
            template: EntityTemplate {
                name,
                glyph: Glyph::on_black('?', Color::White),
                max_hp: GameConfig::DEFAULT_MAX_HP,
                attack_value: GameConfig::DEFAULT_ATTACK_VALUE,
                defense_value: GameConfig::DEFAULT_DEFENSE_VALUE,
                armor_durability: 0,
                armor_reduction: 0,
                sight_radius: GameConfig::DEFAULT_SIGHT_RADIUS,
                inventory_slots: GameConfig::DEFAULT_INVENTORY_SLOTS,
                speed: GameConfig::DEFAULT_SPEED,
                growths: GameConfig::FUNGUS_GROWTHS,
                capabilities: Vec::new(),
            },
        }
    }

    /// Set the display glyph (on a black background)
    pub fn glyph(mut self, symbol: char, foreground: Color) -> Self {
        self.template.glyph = Glyph::on_black(symbol, foreground);
        self
    }

    /// Set maximum (and starting) hit points
    pub fn max_hp(mut self, max_hp: i32) -> Self {
        self.template.max_hp = max_hp;
        self
    }

    /// Set the attack stat
    pub fn attack_value(mut self, attack_value: i32) -> Self {
        self.template.attack_value = attack_value;
        self
    }

    /// Set the defense stat
    pub fn defense_value(mut self, defense_value: i32) -> Self {
        self.template.defense_value = defense_value;
        self
    }

    /// Set armor durability and per-hit reduction
    pub fn armor(mut self, durability: i32, reduction: i32) -> Self {
        self.template.armor_durability = durability;
        self.template.armor_reduction = reduction;
        self
    }

    /// Set the sight radius
    pub fn sight_radius(mut self, sight_radius: u32) -> Self {
        self.template.sight_radius = sight_radius;
        self
    }

    /// Set the inventory slot count
    pub fn inventory_slots(mut self, inventory_slots: usize) -> Self {
        self.template.inventory_slots = inventory_slots;
        self
    }

    /// Set the scheduling speed
    pub fn speed(mut self, speed: u32) -> Self {
        self.template.speed = speed;
        self
    }

    /// Set the remaining growth budget
    pub fn growths(mut self, growths: u32) -> Self {
        self.template.growths = growths;
        self
    }

    /// Set the capability list, in attachment order
    pub fn capabilities(mut self, capabilities: &[Capability]) -> Self {
        self.template.capabilities = capabilities.to_vec();
        self
    }

    pub fn build(self) -> EntityTemplate {
        self.template
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_applies_defaults() {
        let template = EntityTemplate::builder("thing").build();
        assert_eq!(template.name, "thing");
        assert_eq!(template.max_hp, GameConfig::DEFAULT_MAX_HP);
        assert_eq!(template.speed, GameConfig::DEFAULT_SPEED);
        assert!(template.capabilities.is_empty());
    }

    #[test]
    fn builder_overrides_stick() {
        let template = EntityTemplate::builder("brute")
            .glyph('B', Color::Red)
            .max_hp(12)
            .attack_value(60)
            .speed(150)
            .capabilities(&[Capability::Wander, Capability::Destructible])
            .build();
        assert_eq!(template.glyph.symbol, 'B');
        assert_eq!(template.max_hp, 12);
        assert_eq!(template.speed, 150);
        assert_eq!(
            template.capabilities,
            vec![Capability::Wander, Capability::Destructible]
        );
    }
}
