//! The simulation context: map, random stream, and the run/suspend loop.
//!
//! [`World`] owns everything a turn needs to resolve. [`World::run`] drains
//! scheduled turns until an entity suspends for input; the driving client
//! then feeds a [`Command`] through [`World::execute`], which resumes the
//! loop if the command consumed the actor's turn.

use tracing::{debug, trace};

use crate::action;
use crate::capability::{self, ActSignal};
use crate::error::TurnError;
use crate::item::Item;
use crate::map::DungeonMap;
use crate::rng::GameRng;
use crate::scheduler::Tick;
use crate::template::EntityTemplate;
use crate::types::{EntityId, Position};

/// Whether the simulation is free to advance turns or parked on an actor.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RunState {
    /// Turns advance whenever [`World::run`] is called.
    #[default]
    Running,
    /// An actor suspended mid-turn; only [`World::execute`] makes progress.
    Locked,
}

/// A player intent, translated from input by the client.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Step, attack, dig, or take stairs depending on what the target holds.
    Move { dx: i32, dy: i32, dz: i32 },
    /// Pick up the floor items at the given stack indices.
    PickUp { indices: Vec<usize> },
    /// Drop the item in the given inventory slot.
    Drop { slot: usize },
}

/// Whether an executed command used up the suspended actor's turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CommandOutcome {
    /// The turn resolved; the simulation was unlocked and rescheduled.
    TurnSpent,
    /// Nothing happened (blocked move, empty pickup); the actor may retry.
    NoTurn,
}

pub struct World {
    map: DungeonMap,
    rng: GameRng,
    run_state: RunState,
    awaiting: Option<EntityId>,
    game_over: bool,
}

impl World {
    pub fn new(map: DungeonMap, seed: u64) -> Self {
        Self {
            map,
            rng: GameRng::new(seed),
            run_state: RunState::default(),
            awaiting: None,
            game_over: false,
        }
    }

    pub fn map(&self) -> &DungeonMap {
        &self.map
    }

    pub fn map_mut(&mut self) -> &mut DungeonMap {
        &mut self.map
    }

    /// The world's random stream. Content setup and behaviors draw from
    /// this one stream, so a seed fixes the whole session.
    pub fn rng_mut(&mut self) -> &mut GameRng {
        &mut self.rng
    }

    pub fn run_state(&self) -> RunState {
        self.run_state
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    /// Flag the session as lost. The dead entity stays on the map.
    pub(crate) fn set_game_over(&mut self) {
        if !self.game_over {
            self.game_over = true;
            debug!(target: "core::turns", clock = %self.map.clock(), "game over");
        }
    }

    pub fn player(&self) -> Option<EntityId> {
        self.map.player()
    }

    /// Elapsed simulation time.
    pub fn clock(&self) -> Tick {
        self.map.clock()
    }

    /// Advance turns until an actor suspends for input.
    ///
    /// Returns `Ok(())` once suspended. Calling while already suspended is
    /// an error, as is running a world with nothing scheduled.
    pub fn run(&mut self) -> Result<(), TurnError> {
        if self.run_state == RunState::Locked {
            return Err(TurnError::Locked);
        }
        loop {
            let Some(entity) = self.map.next_turn() else {
                return Err(TurnError::NoActiveEntities);
            };
            trace!(target: "core::turns", %entity, clock = %self.map.clock(), "turn start");
            match capability::dispatch_act(self, entity) {
                ActSignal::Completed => self.map.complete_turn(entity),
                ActSignal::AwaitInput => {
                    self.run_state = RunState::Locked;
                    self.awaiting = Some(entity);
                    return Ok(());
                }
            }
        }
    }

    /// Resolve a command on behalf of the suspended actor.
    ///
    /// Commands that consume the turn (a completed move, a pickup that got
    /// at least one item) unlock the world; [`World::run`] then continues
    /// from the next scheduled turn. Commands that fizzle leave the world
    /// suspended on the same actor.
    pub fn execute(&mut self, command: Command) -> Result<CommandOutcome, TurnError> {
        let Some(actor) = self.awaiting else {
            return Err(TurnError::NotSuspended);
        };
        let consumed = match command {
            Command::Move { dx, dy, dz } => {
                let from = self.map.entity(actor).position();
                let target = Position::new(from.x + dx, from.y + dy, from.depth + dz);
                action::resolve_move(self, actor, target).consumes_turn()
            }
            Command::PickUp { indices } => self.pick_up(actor, &indices),
            Command::Drop { slot } => self.drop_item(actor, slot),
        };
        if consumed {
            self.unlock();
            Ok(CommandOutcome::TurnSpent)
        } else {
            Ok(CommandOutcome::NoTurn)
        }
    }

    /// Finish the suspended actor's turn and resume free running.
    fn unlock(&mut self) {
        if let Some(entity) = self.awaiting.take() {
            self.map.complete_turn(entity);
        }
        self.run_state = RunState::Running;
    }

    /// Spawn a template onto a random empty floor cell of the given depth.
    pub fn spawn_at_random(&mut self, template: &EntityTemplate, depth: i32) -> EntityId {
        let position = self.map.random_floor_position(&mut self.rng, depth);
        self.map.spawn(template, position)
    }

    /// Drop an item onto a random empty floor cell of the given depth.
    pub fn place_item_at_random(&mut self, item: Item, depth: i32) -> Position {
        let position = self.map.random_floor_position(&mut self.rng, depth);
        self.map.add_item(position, item);
        position
    }
}
