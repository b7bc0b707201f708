//! Widget modules for UI rendering.
//!
//! Each widget is a pure function over read-side data: it takes a frame, an
//! area, and whatever slice of state it draws, and never mutates anything.

pub mod footer;
pub mod help;
pub mod item_menu;
pub mod lose_screen;
pub mod map;
pub mod messages;
pub mod player_stats;
pub mod start_screen;
