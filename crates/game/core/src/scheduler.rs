//! Speed-ordered turn scheduling.
//!
//! Every acting entity carries a position on a shared timeline. Completing a
//! turn reinserts the actor at `now + cost`, where cost is inversely
//! proportional to speed; fast entities therefore come up proportionally more
//! often without any per-entity bookkeeping beyond the queue itself.

use core::fmt;
use core::ops::Add;
use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::collections::HashMap;

use crate::config::GameConfig;
use crate::types::EntityId;

/// Discrete instant on the scheduling timeline.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Self = Self(0);
}

impl Add<u64> for Tick {
    type Output = Tick;

    fn add(self, rhs: u64) -> Tick {
        Tick(self.0 + rhs)
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Timeline cost of one turn for an entity of the given speed.
///
/// An entity at [`GameConfig::REFERENCE_SPEED`] pays exactly
/// [`GameConfig::BASE_TURN_COST`]; doubling the speed halves the cost.
pub fn turn_cost(speed: u32) -> u64 {
    let speed = speed.max(1) as u64;
    GameConfig::BASE_TURN_COST * GameConfig::REFERENCE_SPEED as u64 / speed
}

/// One pending turn. Field order matters: the derived ordering compares
/// `ready_at` first and breaks ties by insertion sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
struct ScheduledTurn {
    ready_at: Tick,
    seq: u64,
    entity: EntityId,
}

/// Reinsertion-based turn queue.
///
/// Entities that tie on `ready_at` pop in the order they were scheduled.
/// Removal is lazy: `remove` only invalidates the live entry, and `pop`
/// discards stale heap entries as it encounters them.
#[derive(Debug, Default)]
pub struct TurnQueue {
    heap: BinaryHeap<Reverse<ScheduledTurn>>,
    live: HashMap<EntityId, u64>,
    clock: Tick,
    next_seq: u64,
}

impl TurnQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current timeline instant: the `ready_at` of the most recent pop.
    pub fn clock(&self) -> Tick {
        self.clock
    }

    /// Whether the entity has a pending turn.
    pub fn contains(&self, entity: EntityId) -> bool {
        self.live.contains_key(&entity)
    }

    /// Number of entities with pending turns.
    pub fn len(&self) -> usize {
        self.live.len()
    }

    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }

    /// Schedules the entity's next turn at `clock + turn_cost(speed)`.
    ///
    /// Scheduling an entity that already has a pending turn replaces that
    /// turn; the two never coexist.
    pub fn schedule(&mut self, entity: EntityId, speed: u32) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.live.insert(entity, seq);
        self.heap.push(Reverse(ScheduledTurn {
            ready_at: self.clock + turn_cost(speed),
            seq,
            entity,
        }));
    }

    /// Drops the entity's pending turn. The rest of the queue is untouched.
    pub fn remove(&mut self, entity: EntityId) {
        self.live.remove(&entity);
    }

    /// Pops the next entity due to act, advancing the clock to its time.
    ///
    /// The popped entity is no longer pending; the caller reschedules it
    /// once its turn completes.
    pub fn pop(&mut self) -> Option<EntityId> {
        while let Some(Reverse(turn)) = self.heap.pop() {
            match self.live.get(&turn.entity) {
                Some(&seq) if seq == turn.seq => {
                    self.live.remove(&turn.entity);
                    self.clock = turn.ready_at;
                    return Some(turn.entity);
                }
                // Stale entry left behind by remove or reschedule.
                _ => continue,
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const A: EntityId = EntityId(0);
    const B: EntityId = EntityId(1);
    const C: EntityId = EntityId(2);

    #[test]
    fn cost_is_inverse_to_speed() {
        assert_eq!(turn_cost(GameConfig::REFERENCE_SPEED), GameConfig::BASE_TURN_COST);
        assert_eq!(turn_cost(200), 500);
        assert_eq!(turn_cost(50), 2000);
        // Zero speed is clamped instead of dividing by zero.
        assert_eq!(turn_cost(0), turn_cost(1));
    }

    #[test]
    fn pops_earliest_first() {
        let mut queue = TurnQueue::new();
        queue.schedule(A, 100);
        queue.schedule(B, 200);
        assert_eq!(queue.pop(), Some(B));
        assert_eq!(queue.clock(), Tick(500));
        assert_eq!(queue.pop(), Some(A));
        assert_eq!(queue.clock(), Tick(1000));
    }

    #[test]
    fn ties_break_in_insertion_order() {
        let mut queue = TurnQueue::new();
        queue.schedule(B, 100);
        queue.schedule(A, 100);
        queue.schedule(C, 100);
        assert_eq!(queue.pop(), Some(B));
        assert_eq!(queue.pop(), Some(A));
        assert_eq!(queue.pop(), Some(C));
        assert_eq!(queue.pop(), None);
    }

    #[test]
    fn double_speed_acts_twice_as_often() {
        let mut queue = TurnQueue::new();
        queue.schedule(A, 200);
        queue.schedule(B, 100);
        let mut turns_a = 0;
        let mut turns_b = 0;
        for _ in 0..30 {
            let entity = queue.pop().unwrap();
            if entity == A {
                turns_a += 1;
                queue.schedule(A, 200);
            } else {
                turns_b += 1;
                queue.schedule(B, 100);
            }
        }
        assert_eq!(turns_a, 20);
        assert_eq!(turns_b, 10);
    }

    #[test]
    fn removed_entity_never_pops() {
        let mut queue = TurnQueue::new();
        queue.schedule(A, 100);
        queue.schedule(B, 100);
        queue.remove(A);
        assert!(!queue.contains(A));
        assert_eq!(queue.pop(), Some(B));
        assert_eq!(queue.pop(), None);
    }

    #[test]
    fn reschedule_replaces_pending_turn() {
        let mut queue = TurnQueue::new();
        queue.schedule(A, 100);
        queue.schedule(A, 200);
        assert_eq!(queue.len(), 1);
        assert_eq!(queue.pop(), Some(A));
        // The replacement turn, not the original, set the pop time.
        assert_eq!(queue.clock(), Tick(500));
        assert_eq!(queue.pop(), None);
    }

    #[test]
    fn popped_entity_is_not_pending_until_rescheduled() {
        let mut queue = TurnQueue::new();
        queue.schedule(A, 100);
        assert_eq!(queue.pop(), Some(A));
        assert!(!queue.contains(A));
        assert!(queue.is_empty());
        queue.schedule(A, 100);
        assert!(queue.contains(A));
    }

    #[test]
    fn clock_advances_monotonically() {
        let mut queue = TurnQueue::new();
        queue.schedule(A, 100);
        queue.schedule(B, 70);
        let mut last = Tick::ZERO;
        for _ in 0..20 {
            let entity = queue.pop().unwrap();
            assert!(queue.clock() >= last);
            last = queue.clock();
            queue.schedule(entity, if entity == A { 100 } else { 70 });
        }
    }
}
