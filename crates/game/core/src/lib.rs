//! Turn-based cave-crawl simulation core.
//!
//! `warren-core` owns the rules: capability-composed entities on a layered
//! tile grid, a speed-ordered turn scheduler, and the run/suspend loop that
//! parks the simulation whenever the player must choose. It performs no I/O
//! and never draws; clients feed [`Command`]s in through [`World::execute`]
//! and read frames back out through [`view`]. Entity definitions live in
//! supporting crates and arrive as [`EntityTemplate`] values.
pub mod action;
mod behavior;
pub mod capability;
pub mod combat;
pub mod config;
pub mod entity;
pub mod error;
pub mod fov;
pub mod glyph;
pub mod inventory;
pub mod item;
pub mod map;
pub mod message;
pub mod rng;
pub mod scheduler;
pub mod template;
pub mod tile;
pub mod types;
pub mod view;
pub mod world;

pub use action::MoveOutcome;
pub use capability::{ActSignal, Capability, CapabilityDef, CapabilitySet, Group, GroupSet};
pub use config::GameConfig;
pub use entity::{Entity, Growth, Offense, SightRange, Vitals};
pub use error::TurnError;
pub use fov::FieldOfView;
pub use glyph::{Color, Glyph};
pub use inventory::Inventory;
pub use item::Item;
pub use map::{DungeonMap, MapDimensions};
pub use message::Mailbox;
pub use rng::GameRng;
pub use scheduler::{Tick, TurnQueue};
pub use template::{EntityTemplate, EntityTemplateBuilder};
pub use tile::{Tile, TileKind};
pub use types::{DIRS_8, EntityId, Position};
pub use view::{CellAppearance, Frame};
pub use world::{Command, CommandOutcome, RunState, World};
