//! Shared identifier and coordinate types.

use core::fmt;

/// Unique identifier for an entity.
///
/// Ids are handed out by the map that owns the entity and are never reused
/// within a session, so a stale id simply stops resolving instead of aliasing
/// a newcomer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EntityId(pub u32);

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Discrete grid coordinate: column, row, and depth level.
///
/// Depth 0 is the topmost level; larger depths are further down. Coordinates
/// are signed so that neighbor arithmetic near the map edge cannot wrap; the
/// map treats anything outside its bounds as the null tile.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub x: i32,
    pub y: i32,
    pub depth: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32, depth: i32) -> Self {
        Self { x, y, depth }
    }

    /// Offset by one step on the same depth.
    #[inline]
    pub const fn step(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx, self.y + dy, self.depth)
    }

    /// Same column and row on another depth.
    #[inline]
    pub const fn at_depth(self, depth: i32) -> Self {
        Self::new(self.x, self.y, depth)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, d{})", self.x, self.y, self.depth)
    }
}

/// The eight neighbor offsets, clockwise from north.
pub const DIRS_8: [(i32, i32); 8] = [
    (0, -1),
    (1, -1),
    (1, 0),
    (1, 1),
    (0, 1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
];
