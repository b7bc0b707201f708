//! Errors surfaced by the turn-driving API.
//!
//! Only genuinely exceptional conditions become errors. Expected action
//! failures (bumping a wall, a full inventory) are ordinary outcomes reported
//! through [`MoveOutcome`](crate::action::MoveOutcome) and entity messaging,
//! and invariant violations are panics rather than recoverable errors.

/// Failure modes of [`World::run`](crate::world::World::run) and
/// [`World::execute`](crate::world::World::execute).
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TurnError {
    /// The queue is empty: nothing is scheduled to act, so the simulation
    /// cannot advance.
    #[error("no entities are currently scheduled to act")]
    NoActiveEntities,

    /// `run` was called again while an actor is suspended for input.
    #[error("the simulation is suspended awaiting player input")]
    Locked,

    /// A player command arrived while no actor was suspended.
    #[error("no actor is awaiting input")]
    NotSuspended,
}
