//! Action resolution: one entry point turns "I try to enter that cell" into
//! movement, stairs, combat, or digging.

use tracing::debug;

use crate::capability::{self, Group};
use crate::tile::TileKind;
use crate::types::{EntityId, Position};
use crate::world::World;

/// What became of an attempted move.
///
/// Expected failures are outcomes, not errors: bumping a wall is a normal
/// part of play. Only outcomes that consume the turn advance the actor's
/// schedule.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Stepped into the cell.
    Moved,
    /// Climbed to a shallower depth.
    Ascended,
    /// Climbed to a deeper depth.
    Descended,
    /// Initiated melee against the occupant.
    Attacked,
    /// Dug the obstruction into floor; the actor stays put this turn.
    Dug,
    /// Tried to change depth without the matching staircase, or onto an
    /// occupied landing.
    WrongStairs,
    /// The cell is occupied and this actor cannot fight. Fails without
    /// comment.
    OccupantBlocked,
    /// Terrain that can be neither entered nor dug.
    Blocked,
}

impl MoveOutcome {
    /// True when the attempt costs the actor its turn.
    pub fn consumes_turn(self) -> bool {
        matches!(
            self,
            Self::Moved | Self::Ascended | Self::Descended | Self::Attacked | Self::Dug
        )
    }
}

/// Resolves an actor's attempt to enter `target`.
///
/// Checks run in a fixed priority: depth transition first, then the cell's
/// occupant, then walkable terrain, then diggable terrain. Every check
/// happens before any mutation, so a failed attempt changes nothing.
pub fn resolve_move(world: &mut World, actor: EntityId, target: Position) -> MoveOutcome {
    let from = world.map().entity(actor).position();

    if target.depth != from.depth {
        return resolve_depth_change(world, actor, from, target);
    }

    // The actor occupies its own cell; a move in place resolves as terrain.
    let occupant = world.map().entity_id_at(target).filter(|&o| o != actor);
    if let Some(occupant) = occupant {
        if world.map().entity(actor).in_group(Group::Attacker) {
            capability::dispatch_attack(world, actor, occupant);
            return MoveOutcome::Attacked;
        }
        return MoveOutcome::OccupantBlocked;
    }

    let tile = world.map().tile(target);
    if tile.walkable {
        world.map_mut().move_entity(actor, target);
        MoveOutcome::Moved
    } else if tile.diggable {
        world.map_mut().dig(target);
        debug!(target: "core::map", %actor, %target, "dug through");
        MoveOutcome::Dug
    } else {
        MoveOutcome::Blocked
    }
}

fn resolve_depth_change(
    world: &mut World,
    actor: EntityId,
    from: Position,
    target: Position,
) -> MoveOutcome {
    let ascending = target.depth < from.depth;
    // The staircase is checked on the actor's current level; generated maps
    // pair stairs vertically, so the landing carries the counterpart.
    let stair = world.map().tile_kind(target.at_depth(from.depth));
    let wanted = if ascending {
        TileKind::StairsUp
    } else {
        TileKind::StairsDown
    };
    if stair != wanted {
        let message = if ascending {
            "You can't go up here!"
        } else {
            "You can't go down here!"
        };
        world.send_message(actor, message);
        return MoveOutcome::WrongStairs;
    }
    if world.map().entity_id_at(target).is_some() {
        let message = if ascending {
            "Something blocks the way up!"
        } else {
            "Something blocks the way down!"
        };
        world.send_message(actor, message);
        return MoveOutcome::WrongStairs;
    }

    world.map_mut().move_entity(actor, target);
    let level = target.depth + 1;
    if ascending {
        world.send_message(actor, format!("You ascend to level {level}!"));
        debug!(target: "core::turns", %actor, %target, "ascended");
        MoveOutcome::Ascended
    } else {
        world.send_message(actor, format!("You descend to level {level}!"));
        debug!(target: "core::turns", %actor, %target, "descended");
        MoveOutcome::Descended
    }
}
