//! Terrain tiles.

use crate::glyph::{Color, Glyph};

/// Addressable terrain classes stored in the map grid.
///
/// The grid stores kinds, not tile structs; the immutable per-kind data
/// lives in shared [`Tile`] descriptors.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum TileKind {
    /// Sentinel for "no tile here": out of bounds, or never carved.
    #[default]
    Null,
    Floor,
    Wall,
    StairsUp,
    StairsDown,
    Water,
}

/// Immutable description of one terrain class.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tile {
    pub kind: TileKind,
    pub glyph: Glyph,
    /// Entities may stand on this tile.
    pub walkable: bool,
    /// Digging converts this tile to floor.
    pub diggable: bool,
    /// The tile stops sight lines.
    pub blocks_light: bool,
    pub description: &'static str,
}

impl Tile {
    /// Out-of-bounds sentinel. Impassable, opaque, and blank; lookups beyond
    /// the grid resolve to this instead of failing.
    pub const NULL: Tile = Tile {
        kind: TileKind::Null,
        glyph: Glyph::on_black(' ', Color::White),
        walkable: false,
        diggable: false,
        blocks_light: true,
        description: "",
    };

    pub const FLOOR: Tile = Tile {
        kind: TileKind::Floor,
        glyph: Glyph::on_black('.', Color::White),
        walkable: true,
        diggable: false,
        blocks_light: false,
        description: "The floor",
    };

    pub const WALL: Tile = Tile {
        kind: TileKind::Wall,
        glyph: Glyph::on_black('#', Color::Goldenrod),
        walkable: false,
        diggable: true,
        blocks_light: true,
        description: "A cave wall",
    };

    pub const STAIRS_UP: Tile = Tile {
        kind: TileKind::StairsUp,
        glyph: Glyph::on_black('<', Color::White),
        walkable: true,
        diggable: false,
        blocks_light: false,
        description: "A staircase leading upwards",
    };

    pub const STAIRS_DOWN: Tile = Tile {
        kind: TileKind::StairsDown,
        glyph: Glyph::on_black('>', Color::White),
        walkable: true,
        diggable: false,
        blocks_light: false,
        description: "A staircase leading downwards",
    };

    pub const WATER: Tile = Tile {
        kind: TileKind::Water,
        glyph: Glyph::on_black('~', Color::Blue),
        walkable: false,
        diggable: false,
        blocks_light: false,
        description: "Murky water",
    };
}

impl TileKind {
    /// Shared descriptor for this terrain class.
    pub fn tile(self) -> &'static Tile {
        match self {
            TileKind::Null => &Tile::NULL,
            TileKind::Floor => &Tile::FLOOR,
            TileKind::Wall => &Tile::WALL,
            TileKind::StairsUp => &Tile::STAIRS_UP,
            TileKind::StairsDown => &Tile::STAIRS_DOWN,
            TileKind::Water => &Tile::WATER,
        }
    }

    #[inline]
    pub fn is_walkable(self) -> bool {
        self.tile().walkable
    }

    #[inline]
    pub fn is_diggable(self) -> bool {
        self.tile().diggable
    }

    #[inline]
    pub fn blocks_light(self) -> bool {
        self.tile().blocks_light
    }
}
