//! Melee combat resolution.
//!
//! Combat is a hit-chance roll followed by flat damage. Attack and defense
//! stats move the chance to land a blow; damage itself never scales. Death
//! resolution forks on who died: the player flags the session over and stays
//! on the map, anything else is removed outright.

use tracing::debug;

use crate::capability::{self, Capability};
use crate::config::GameConfig;
use crate::types::EntityId;
use crate::world::World;

/// Percent chance for an attack to land, clamped into
/// `[HIT_CHANCE_MIN, HIT_CHANCE_MAX]`.
pub fn hit_chance(attack_value: i32, defense_value: i32) -> i32 {
    (attack_value - defense_value).clamp(GameConfig::HIT_CHANCE_MIN, GameConfig::HIT_CHANCE_MAX)
}

/// The `Attacker` attack operation: draws a roll from the world's rng and
/// resolves. Targets without `Destructible` shrug the attack off entirely.
pub(crate) fn attacker_attack(world: &mut World, attacker: EntityId, target: EntityId) {
    if !world
        .map()
        .entity(target)
        .has_capability(Capability::Destructible)
    {
        return;
    }
    let roll = world.rng_mut().percentage();
    resolve_attack(world, attacker, target, roll);
}

/// Applies one attack given an externally drawn percentage roll.
///
/// Split out from [`attacker_attack`] so that replays and tests can feed a
/// known roll instead of consuming the world's rng stream.
pub fn resolve_attack(world: &mut World, attacker: EntityId, target: EntityId, roll: i32) {
    let attack_value = world.map().entity(attacker).attack_value();
    let defense_value = world.map().entity(target).defense_value();
    let chance = hit_chance(attack_value, defense_value);
    let attacker_name = world.map().entity(attacker).name().to_owned();
    let target_name = world.map().entity(target).name().to_owned();

    if roll <= chance {
        let damage = GameConfig::MELEE_DAMAGE;
        debug!(target: "core::combat", %attacker, %target, roll, chance, damage, "hit");
        world.send_message(
            attacker,
            format!("You strike the {target_name} for {damage} damage!"),
        );
        world.send_message(
            target,
            format!("The {attacker_name} strikes you for {damage} damage!"),
        );
        capability::dispatch_take_damage(world, target, attacker, damage);
    } else {
        debug!(target: "core::combat", %attacker, %target, roll, chance, "miss");
        world.send_message(attacker, format!("You miss the {target_name}."));
        world.send_message(target, format!("The {attacker_name} misses you."));
    }
}

/// The `Destructible` damage intake operation.
pub(crate) fn destructible_take_damage(
    world: &mut World,
    target: EntityId,
    attacker: EntityId,
    amount: i32,
) {
    let hp = {
        let vitals = world
            .map_mut()
            .entity_mut(target)
            .vitals
            .as_mut()
            .expect("destructible entity without vitals");
        vitals.hp -= amount;
        vitals.hp
    };
    if hp <= 0 {
        let target_name = world.map().entity(target).name().to_owned();
        world.send_message(attacker, format!("You destroy the {target_name}!"));
        world.send_message(target, "You die!");
        die(world, target);
    }
}

/// Death resolution. The player persists on the map with the session flagged
/// over; every other entity leaves the map and the turn queue.
fn die(world: &mut World, target: EntityId) {
    if world
        .map()
        .entity(target)
        .has_capability(Capability::PlayerControl)
    {
        world.set_game_over();
        world.send_message(target, "You have died... Press [ENTER] to continue.");
        debug!(target: "core::combat", %target, "player died");
    } else {
        debug!(target: "core::combat", %target, "entity destroyed");
        world.map_mut().remove_entity(target);
    }
}
