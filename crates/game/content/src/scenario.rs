//! Standard game setup: build the caves, then seed them with creatures and
//! loot.

use tracing::debug;

use warren_core::{EntityId, GameRng, World};

use crate::builder::CaveBuilder;
use crate::{actors, items};

/// Knobs for [`new_game`] and [`populate`].
#[derive(Clone, Debug)]
pub struct ScenarioConfig {
    pub map_width: u32,
    pub map_height: u32,
    pub map_depth: u32,
    pub fungi_per_depth: u32,
    pub wolves_per_depth: u32,
    pub items_per_depth: u32,
    /// Percent chance that any given wolf spawns as a dire timberwolf.
    pub dire_wolf_chance: i32,
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self {
            map_width: 80,
            map_height: 24,
            map_depth: 5,
            fungi_per_depth: 8,
            wolves_per_depth: 4,
            items_per_depth: 6,
            dire_wolf_chance: 20,
        }
    }
}

/// Builds a fresh world from one seed: caves, player, creatures, items.
///
/// The seed fixes everything; two worlds from the same seed and config are
/// identical, including the order entities will act in.
pub fn new_game(seed: u64, config: &ScenarioConfig) -> World {
    let mut rng = GameRng::new(seed);
    let map = CaveBuilder::new(config.map_width, config.map_height, config.map_depth)
        .build(&mut rng);
    // Seed the session stream from the tail of the build stream, so one
    // input seed covers both without the two replaying each other.
    let world_seed = (rng.next_u32() as u64) << 32 | rng.next_u32() as u64;
    let mut world = World::new(map, world_seed);
    populate(&mut world, config);
    world
}

/// Drops the player onto depth 0 and scatters creatures and items across
/// every depth, each on its own random empty floor cell. Returns the
/// player's id.
pub fn populate(world: &mut World, config: &ScenarioConfig) -> EntityId {
    let depth_count = world.map().dimensions().depth as i32;
    let player = world.spawn_at_random(&actors::player(), 0);

    for depth in 0..depth_count {
        for _ in 0..config.fungi_per_depth {
            world.spawn_at_random(&actors::fungus(), depth);
        }
        for _ in 0..config.wolves_per_depth {
            let wolf = if world.rng_mut().chance(config.dire_wolf_chance) {
                actors::dire_timberwolf()
            } else {
                actors::timberwolf()
            };
            world.spawn_at_random(&wolf, depth);
        }
        for _ in 0..config.items_per_depth {
            let item = if world.rng_mut().chance(50) {
                items::rock()
            } else {
                items::mushroom()
            };
            world.place_item_at_random(item, depth);
        }
    }
    debug!(target: "content::scenario", %player, depth_count, "scenario populated");
    player
}
