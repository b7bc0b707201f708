//! Built-in game content: creature and item definitions, cave generation,
//! and scenario population.
//!
//! Everything here produces plain `warren-core` values. The core never
//! depends on this crate; a client picks a scenario, builds a map, and
//! hands both to the simulation.

pub mod actors;
pub mod builder;
pub mod catalog;
pub mod items;
pub mod scenario;

pub use builder::CaveBuilder;
pub use scenario::{ScenarioConfig, new_game, populate};
