//! Capability definitions and operation dispatch.
//!
//! A capability is a named unit of behavior. Entities are assembled from an
//! ordered capability list: each capability contributes private state through
//! its `init` hook at construction time and may implement any of the shared
//! operations (`act`, `attack`, `take_damage`). There is no inheritance
//! anywhere; an entity is exactly the sum of what it attached.
//!
//! Dispatch scans the attachment list in reverse, so when several attached
//! capabilities implement the same operation the most recently attached one
//! wins. Dispatching an operation that no attached capability implements is a
//! programming error and panics.

use bitflags::bitflags;

use crate::behavior;
use crate::combat;
use crate::entity::{Entity, Growth, Offense, SightRange, Vitals};
use crate::inventory::Inventory;
use crate::message::Mailbox;
use crate::template::EntityTemplate;
use crate::types::EntityId;
use crate::world::World;

/// Identifier for a capability definition.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Capability {
    /// Scheduled turns suspend the world for external input.
    PlayerControl,
    /// Scheduled turns take one random step.
    Wander,
    /// Scheduled turns occasionally clone the entity onto adjacent floor.
    FungusGrowth,
    /// Can initiate melee attacks.
    Attacker,
    /// Has hit points and can be destroyed.
    Destructible,
    /// Has a field of view.
    Sight,
    /// Receives gameplay messages.
    MessageRecipient,
    /// Carries items in fixed slots.
    InventoryHolder,
}

/// Coarse membership groups shared by several capabilities.
///
/// Groups answer "is this thing one of those" questions without enumerating
/// capabilities: the scheduler cares about [`Group::Actor`], the action
/// resolver about [`Group::Attacker`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum Group {
    /// Takes scheduled turns.
    Actor,
    /// May initiate attacks.
    Attacker,
    /// Has vision.
    Sight,
}

bitflags! {
    /// O(1) membership set over [`Capability`], built once at construction.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    pub struct CapabilitySet: u16 {
        const PLAYER_CONTROL    = 1 << 0;
        const WANDER            = 1 << 1;
        const FUNGUS_GROWTH     = 1 << 2;
        const ATTACKER          = 1 << 3;
        const DESTRUCTIBLE      = 1 << 4;
        const SIGHT             = 1 << 5;
        const MESSAGE_RECIPIENT = 1 << 6;
        const INVENTORY_HOLDER  = 1 << 7;
    }
}

bitflags! {
    /// O(1) membership set over [`Group`].
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    pub struct GroupSet: u8 {
        const ACTOR    = 1 << 0;
        const ATTACKER = 1 << 1;
        const SIGHT    = 1 << 2;
    }
}

impl Capability {
    pub const fn flag(self) -> CapabilitySet {
        match self {
            Capability::PlayerControl => CapabilitySet::PLAYER_CONTROL,
            Capability::Wander => CapabilitySet::WANDER,
            Capability::FungusGrowth => CapabilitySet::FUNGUS_GROWTH,
            Capability::Attacker => CapabilitySet::ATTACKER,
            Capability::Destructible => CapabilitySet::DESTRUCTIBLE,
            Capability::Sight => CapabilitySet::SIGHT,
            Capability::MessageRecipient => CapabilitySet::MESSAGE_RECIPIENT,
            Capability::InventoryHolder => CapabilitySet::INVENTORY_HOLDER,
        }
    }

    /// Shared behavior descriptor for this capability.
    pub fn def(self) -> &'static CapabilityDef {
        match self {
            Capability::PlayerControl => &PLAYER_CONTROL,
            Capability::Wander => &WANDER,
            Capability::FungusGrowth => &FUNGUS_GROWTH,
            Capability::Attacker => &ATTACKER,
            Capability::Destructible => &DESTRUCTIBLE,
            Capability::Sight => &SIGHT,
            Capability::MessageRecipient => &MESSAGE_RECIPIENT,
            Capability::InventoryHolder => &INVENTORY_HOLDER,
        }
    }
}

impl Group {
    pub const fn flag(self) -> GroupSet {
        match self {
            Group::Actor => GroupSet::ACTOR,
            Group::Attacker => GroupSet::ATTACKER,
            Group::Sight => GroupSet::SIGHT,
        }
    }
}

/// Outcome of an `act` dispatch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActSignal {
    /// The turn finished; the scheduler reinserts the entity.
    Completed,
    /// The actor needs external input; the scheduler suspends without
    /// reinserting it.
    AwaitInput,
}

/// Construction hook: derive per-entity state from the template.
pub type InitFn = fn(&mut Entity, &EntityTemplate);
/// Scheduled-turn operation.
pub type ActFn = fn(&mut World, EntityId) -> ActSignal;
/// Melee initiation: attacker, then target.
pub type AttackFn = fn(&mut World, EntityId, EntityId);
/// Damage intake: target, attacker, amount.
pub type TakeDamageFn = fn(&mut World, EntityId, EntityId, i32);

/// Stateless descriptor of one capability's shared behavior.
///
/// Per-entity state lives on the entity itself; the descriptor only carries
/// the operation implementations (each optional) and group membership.
pub struct CapabilityDef {
    pub group: Option<Group>,
    pub init: Option<InitFn>,
    pub act: Option<ActFn>,
    pub attack: Option<AttackFn>,
    pub take_damage: Option<TakeDamageFn>,
}

impl CapabilityDef {
    const fn empty() -> Self {
        Self {
            group: None,
            init: None,
            act: None,
            attack: None,
            take_damage: None,
        }
    }
}

static PLAYER_CONTROL: CapabilityDef = CapabilityDef {
    group: Some(Group::Actor),
    act: Some(behavior::player_act),
    ..CapabilityDef::empty()
};

static WANDER: CapabilityDef = CapabilityDef {
    group: Some(Group::Actor),
    act: Some(behavior::wander_act),
    ..CapabilityDef::empty()
};

static FUNGUS_GROWTH: CapabilityDef = CapabilityDef {
    group: Some(Group::Actor),
    init: Some(init_growth),
    act: Some(behavior::fungus_act),
    ..CapabilityDef::empty()
};

static ATTACKER: CapabilityDef = CapabilityDef {
    group: Some(Group::Attacker),
    init: Some(init_offense),
    attack: Some(combat::attacker_attack),
    ..CapabilityDef::empty()
};

static DESTRUCTIBLE: CapabilityDef = CapabilityDef {
    init: Some(init_vitals),
    take_damage: Some(combat::destructible_take_damage),
    ..CapabilityDef::empty()
};

static SIGHT: CapabilityDef = CapabilityDef {
    group: Some(Group::Sight),
    init: Some(init_sight),
    ..CapabilityDef::empty()
};

static MESSAGE_RECIPIENT: CapabilityDef = CapabilityDef {
    init: Some(init_mailbox),
    ..CapabilityDef::empty()
};

static INVENTORY_HOLDER: CapabilityDef = CapabilityDef {
    init: Some(init_inventory),
    ..CapabilityDef::empty()
};

fn init_vitals(entity: &mut Entity, template: &EntityTemplate) {
    entity.vitals = Some(Vitals::from_template(template));
}

fn init_offense(entity: &mut Entity, template: &EntityTemplate) {
    entity.offense = Some(Offense {
        attack_value: template.attack_value,
    });
}

fn init_sight(entity: &mut Entity, template: &EntityTemplate) {
    entity.sight = Some(SightRange {
        radius: template.sight_radius,
    });
}

fn init_growth(entity: &mut Entity, template: &EntityTemplate) {
    entity.growth = Some(Growth {
        remaining: template.growths,
    });
}

fn init_mailbox(entity: &mut Entity, _template: &EntityTemplate) {
    entity.mailbox = Some(Mailbox::default());
}

fn init_inventory(entity: &mut Entity, template: &EntityTemplate) {
    entity.inventory = Some(Inventory::with_slots(template.inventory_slots));
}

/// Dispatches the `act` operation on an entity.
pub(crate) fn dispatch_act(world: &mut World, entity: EntityId) -> ActSignal {
    let act = {
        let e = world.map().entity(entity);
        e.attached()
            .iter()
            .rev()
            .find_map(|capability| capability.def().act)
            .unwrap_or_else(|| panic!("{} ({}) has no capability providing act", e.name(), entity))
    };
    act(world, entity)
}

/// Dispatches the `attack` operation on the attacker.
pub(crate) fn dispatch_attack(world: &mut World, attacker: EntityId, target: EntityId) {
    let attack = {
        let e = world.map().entity(attacker);
        e.attached()
            .iter()
            .rev()
            .find_map(|capability| capability.def().attack)
            .unwrap_or_else(|| {
                panic!("{} ({}) has no capability providing attack", e.name(), attacker)
            })
    };
    attack(world, attacker, target)
}

/// Dispatches the `take_damage` operation on the target.
pub(crate) fn dispatch_take_damage(
    world: &mut World,
    target: EntityId,
    attacker: EntityId,
    amount: i32,
) {
    let take_damage = {
        let e = world.map().entity(target);
        e.attached()
            .iter()
            .rev()
            .find_map(|capability| capability.def().take_damage)
            .unwrap_or_else(|| {
                panic!(
                    "{} ({}) has no capability providing take_damage",
                    e.name(),
                    target
                )
            })
    };
    take_damage(world, target, attacker, amount)
}
