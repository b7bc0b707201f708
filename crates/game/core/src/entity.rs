//! Entities and their per-capability state.

use crate::capability::{Capability, CapabilitySet, Group, GroupSet};
use crate::glyph::Glyph;
use crate::inventory::Inventory;
use crate::item::indefinite_article;
use crate::message::Mailbox;
use crate::template::EntityTemplate;
use crate::types::{EntityId, Position};

/// Hit points and defense: the `Destructible` capability state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Vitals {
    pub hp: i32,
    pub max_hp: i32,
    pub defense_value: i32,
    // Read by armor-bearing content; damage resolution does not consult
    // them yet.
    pub armor_durability: i32,
    pub armor_reduction: i32,
}

impl Vitals {
    pub(crate) fn from_template(template: &EntityTemplate) -> Self {
        Self {
            hp: template.max_hp,
            max_hp: template.max_hp,
            defense_value: template.defense_value,
            armor_durability: template.armor_durability,
            armor_reduction: template.armor_reduction,
        }
    }
}

/// The `Attacker` capability state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Offense {
    pub attack_value: i32,
}

/// The `Sight` capability state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SightRange {
    pub radius: u32,
}

/// The `FungusGrowth` capability state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Growth {
    pub remaining: u32,
}

/// A positioned, capability-composed inhabitant of the map.
///
/// Everything an entity is comes from its template: the capability list
/// decides which state blocks below are populated (by the capabilities' own
/// `init` hooks, run in attachment order) and which operations dispatch.
/// State blocks for capabilities that were never attached stay `None`.
#[derive(Clone, Debug)]
pub struct Entity {
    id: EntityId,
    position: Position,
    template: EntityTemplate,
    attached: Vec<Capability>,
    capabilities: CapabilitySet,
    groups: GroupSet,
    pub(crate) vitals: Option<Vitals>,
    pub(crate) offense: Option<Offense>,
    pub(crate) sight: Option<SightRange>,
    pub(crate) growth: Option<Growth>,
    pub(crate) mailbox: Option<Mailbox>,
    pub(crate) inventory: Option<Inventory>,
}

impl Entity {
    /// Assembles an entity from a template.
    ///
    /// Membership sets are computed once here; afterwards each attached
    /// capability's `init` hook runs, in attachment order, to populate its
    /// state block from the template.
    pub(crate) fn from_template(
        id: EntityId,
        position: Position,
        template: &EntityTemplate,
    ) -> Self {
        let attached = template.capabilities.clone();
        let mut capabilities = CapabilitySet::empty();
        let mut groups = GroupSet::empty();
        for capability in &attached {
            capabilities |= capability.flag();
            if let Some(group) = capability.def().group {
                groups |= group.flag();
            }
        }
        let mut entity = Self {
            id,
            position,
            template: template.clone(),
            attached,
            capabilities,
            groups,
            vitals: None,
            offense: None,
            sight: None,
            growth: None,
            mailbox: None,
            inventory: None,
        };
        for i in 0..entity.attached.len() {
            let capability = entity.attached[i];
            if let Some(init) = capability.def().init {
                init(&mut entity, template);
            }
        }
        entity
    }

    pub fn id(&self) -> EntityId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.template.name
    }

    pub fn glyph(&self) -> Glyph {
        self.template.glyph
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub(crate) fn set_position(&mut self, position: Position) {
        self.position = position;
    }

    /// The template this entity was built from. Cloning an entity means
    /// spawning this template again.
    pub fn template(&self) -> &EntityTemplate {
        &self.template
    }

    /// Attached capabilities, in attachment order.
    pub fn attached(&self) -> &[Capability] {
        &self.attached
    }

    pub fn has_capability(&self, capability: Capability) -> bool {
        self.capabilities.contains(capability.flag())
    }

    pub fn in_group(&self, group: Group) -> bool {
        self.groups.contains(group.flag())
    }

    pub fn speed(&self) -> u32 {
        self.template.speed
    }

    /// Current hit points; 0 for entities without `Destructible`.
    pub fn hp(&self) -> i32 {
        self.vitals.as_ref().map_or(0, |v| v.hp)
    }

    pub fn max_hp(&self) -> i32 {
        self.vitals.as_ref().map_or(0, |v| v.max_hp)
    }

    pub fn defense_value(&self) -> i32 {
        self.vitals.as_ref().map_or(0, |v| v.defense_value)
    }

    /// Attack stat; 0 for entities without `Attacker`.
    pub fn attack_value(&self) -> i32 {
        self.offense.as_ref().map_or(0, |o| o.attack_value)
    }

    /// Sight radius; 0 for entities without `Sight`.
    pub fn sight_radius(&self) -> u32 {
        self.sight.as_ref().map_or(0, |s| s.radius)
    }

    pub fn is_alive(&self) -> bool {
        self.vitals.as_ref().is_some_and(|v| v.hp > 0)
    }

    /// Carried items, when this entity holds an inventory.
    pub fn inventory(&self) -> Option<&Inventory> {
        self.inventory.as_ref()
    }

    /// Queued messages, when this entity is a recipient.
    pub fn messages(&self) -> &[String] {
        self.mailbox.as_ref().map_or(&[], Mailbox::messages)
    }

    /// Short description with an indefinite article: "a fungus".
    pub fn describe_a(&self) -> String {
        format!("{} {}", indefinite_article(self.name()), self.name())
    }
}
