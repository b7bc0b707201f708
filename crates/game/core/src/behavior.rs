//! Acting behaviors for the scheduled capabilities.
//!
//! These are the `act` implementations the capability registry points at.
//! Each receives the whole world plus the acting entity's id and returns
//! whether the turn completed or the world should suspend for input.

use tracing::trace;

use crate::action;
use crate::capability::ActSignal;
use crate::config::GameConfig;
use crate::types::{DIRS_8, EntityId};
use crate::world::World;

/// `PlayerControl`: every scheduled turn suspends the world so the driving
/// client can translate input into a command.
pub(crate) fn player_act(world: &mut World, entity: EntityId) -> ActSignal {
    if !world.is_game_over() && world.map().entity(entity).hp() <= 0 {
        // Reached only if something zeroes hp without going through damage
        // intake; death during combat flags the session itself.
        world.set_game_over();
        world.send_message(entity, "You have died... Press [ENTER] to continue.");
    }
    ActSignal::AwaitInput
}

/// `Wander`: one uniformly random 8-directional step per turn. Whatever the
/// step runs into (a fight, a wall, open floor) the turn completes.
pub(crate) fn wander_act(world: &mut World, entity: EntityId) -> ActSignal {
    let (dx, dy) = {
        let index = world.rng_mut().next_u32() as usize % DIRS_8.len();
        DIRS_8[index]
    };
    let target = world.map().entity(entity).position().step(dx, dy);
    let outcome = action::resolve_move(world, entity, target);
    trace!(target: "core::turns", %entity, ?outcome, "wander step");
    ActSignal::Completed
}

/// `FungusGrowth`: a small chance per turn to clone the entity onto an
/// adjacent empty floor cell, while the growth budget lasts.
pub(crate) fn fungus_act(world: &mut World, entity: EntityId) -> ActSignal {
    let remaining = world
        .map()
        .entity(entity)
        .growth
        .as_ref()
        .map_or(0, |g| g.remaining);
    if remaining == 0 {
        return ActSignal::Completed;
    }
    if !world.rng_mut().chance(GameConfig::FUNGUS_GROWTH_CHANCE) {
        return ActSignal::Completed;
    }

    let dx = world.rng_mut().range(-1, 1);
    let dy = world.rng_mut().range(-1, 1);
    if dx == 0 && dy == 0 {
        // Its own cell: the growth fizzles this turn.
        return ActSignal::Completed;
    }
    let target = world.map().entity(entity).position().step(dx, dy);
    if !world.map().is_empty_floor(target) {
        return ActSignal::Completed;
    }

    let template = world.map().entity(entity).template().clone();
    let spawned = world.map_mut().spawn(&template, target);
    if let Some(growth) = world.map_mut().entity_mut(entity).growth.as_mut() {
        growth.remaining -= 1;
    }
    world.send_message_nearby(
        target,
        GameConfig::FUNGUS_SPREAD_RADIUS,
        "The fungus is spreading!",
    );
    trace!(target: "core::turns", %entity, %spawned, "fungus spread");
    ActSignal::Completed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capability::Capability;
    use crate::map::{DungeonMap, MapDimensions};
    use crate::template::EntityTemplate;
    use crate::tile::TileKind;
    use crate::types::Position;

    fn open_world(seed: u64) -> World {
        let dimensions = MapDimensions::new(12, 12, 1);
        let tiles = vec![TileKind::Floor; dimensions.cell_count()];
        World::new(DungeonMap::new(dimensions, tiles), seed)
    }

    fn fungus() -> EntityTemplate {
        EntityTemplate::builder("fungus")
            .max_hp(3)
            .capabilities(&[Capability::FungusGrowth, Capability::Destructible])
            .build()
    }

    #[test]
    fn player_act_always_suspends() {
        let mut world = open_world(1);
        let player = world.map_mut().spawn(
            &EntityTemplate::builder("player")
                .max_hp(10)
                .capabilities(&[Capability::PlayerControl, Capability::Destructible])
                .build(),
            Position::new(5, 5, 0),
        );
        assert_eq!(player_act(&mut world, player), ActSignal::AwaitInput);
        assert!(!world.is_game_over());
    }

    #[test]
    fn wander_stays_within_one_step() {
        let mut world = open_world(2);
        let start = Position::new(5, 5, 0);
        let walker = world.map_mut().spawn(
            &EntityTemplate::builder("walker")
                .capabilities(&[Capability::Wander])
                .build(),
            start,
        );
        for _ in 0..50 {
            let before = world.map().entity(walker).position();
            assert_eq!(wander_act(&mut world, walker), ActSignal::Completed);
            let after = world.map().entity(walker).position();
            assert!((after.x - before.x).abs() <= 1);
            assert!((after.y - before.y).abs() <= 1);
            assert_eq!(after.depth, 0);
        }
    }

    #[test]
    fn fungus_spread_clones_the_template_and_spends_budget() {
        let mut world = open_world(3);
        let origin = Position::new(5, 5, 0);
        let elder = world.map_mut().spawn(&fungus(), origin);
        // Drive turns until the 2% gate opens; the budget caps total clones.
        for _ in 0..4000 {
            fungus_act(&mut world, elder);
        }
        assert_eq!(
            world.map().entity(elder).growth.as_ref().map(|g| g.remaining),
            Some(0)
        );
        let clones = world.map().entity_count() - 1;
        assert_eq!(clones, 5);
        for entity in world.map().entities() {
            assert_eq!(entity.name(), "fungus");
            let p = entity.position();
            assert!((p.x - origin.x).abs() <= 1 && (p.y - origin.y).abs() <= 1
                || entity.id() == elder);
        }
    }

    #[test]
    fn dormant_fungus_never_spreads() {
        let mut world = open_world(4);
        let elder = world.map_mut().spawn(
            &EntityTemplate::builder("fungus")
                .growths(0)
                .capabilities(&[Capability::FungusGrowth])
                .build(),
            Position::new(5, 5, 0),
        );
        for _ in 0..500 {
            assert_eq!(fungus_act(&mut world, elder), ActSignal::Completed);
        }
        assert_eq!(world.map().entity_count(), 1);
    }
}
