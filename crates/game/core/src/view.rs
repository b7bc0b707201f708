//! Read-side projection of the world for rendering clients.
//!
//! The simulation never draws; it answers two questions. What does a cell
//! look like from the player's point of view ([`appearance`], [`Frame`]),
//! and what would an examine cursor say about it ([`describe`])?

use crate::fov::FieldOfView;
use crate::glyph::{Color, Glyph};
use crate::map::DungeonMap;
use crate::tile::Tile;
use crate::types::Position;
use crate::world::World;

/// How one cell presents to the player.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CellAppearance {
    /// Never seen; renders as nothing.
    Unseen,
    /// Explored earlier but outside the current field of view. Carries the
    /// terrain glyph dimmed to dark gray; occupants and items are not
    /// remembered.
    Remembered(Glyph),
    /// In view right now. Entity over topmost item over terrain.
    Visible(Glyph),
}

/// Resolves what to draw at `position` given the player's field of view.
pub fn appearance(map: &DungeonMap, fov: &FieldOfView, position: Position) -> CellAppearance {
    if !map.is_explored(position) {
        return CellAppearance::Unseen;
    }
    if !fov.contains(position.x, position.y) {
        let dimmed = map.tile(position).glyph.with_foreground(Color::DarkGray);
        return CellAppearance::Remembered(dimmed);
    }
    let mut glyph = map.tile(position).glyph;
    if let Some(item) = map.items_at(position).last() {
        glyph = item.glyph();
    }
    if let Some(entity) = map.entity_at(position) {
        glyph = entity.glyph();
    }
    CellAppearance::Visible(glyph)
}

/// Examine caption for `position`, formatted `symbol - description`.
///
/// Visible cells describe the topmost item if any, else the occupant, else
/// the terrain. Explored-but-unseen cells describe the terrain from memory.
/// Unexplored cells fall back to the blank null-tile caption.
pub fn describe(map: &DungeonMap, fov: &FieldOfView, position: Position) -> String {
    if !map.is_explored(position) {
        return format!("{} - {}", Tile::NULL.glyph.symbol, Tile::NULL.description);
    }
    if fov.contains(position.x, position.y) {
        if let Some(item) = map.items_at(position).last() {
            return format!("{} - {}", item.glyph().symbol, capitalized(item.describe_a()));
        }
        if let Some(entity) = map.entity_at(position) {
            return format!(
                "{} - {}",
                entity.glyph().symbol,
                capitalized(entity.describe_a())
            );
        }
    }
    let tile = map.tile(position);
    format!("{} - {}", tile.glyph.symbol, tile.description)
}

fn capitalized(mut text: String) -> String {
    if let Some(first) = text.get_mut(0..1) {
        first.make_ascii_uppercase();
    }
    text
}

/// One rendered snapshot: a camera rectangle of cell appearances around the
/// player, plus the player facts a HUD needs.
///
/// Building a frame advances observation state. Visible cells become
/// explored and the player's pending messages are drained into the frame,
/// so each message appears in exactly one frame.
#[derive(Clone, Debug)]
pub struct Frame {
    origin: Position,
    width: u32,
    height: u32,
    cells: Vec<CellAppearance>,
    fov: FieldOfView,
    hp: i32,
    max_hp: i32,
    position: Position,
    messages: Vec<String>,
}

impl Frame {
    /// Map position of the camera's top-left cell.
    pub fn origin(&self) -> Position {
        self.origin
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Appearance at camera-local coordinates.
    pub fn cell(&self, x: u32, y: u32) -> CellAppearance {
        assert!(x < self.width && y < self.height, "cell outside the frame");
        self.cells[(y * self.width + x) as usize]
    }

    /// The field of view this frame was drawn from, for examine captions.
    pub fn field_of_view(&self) -> &FieldOfView {
        &self.fov
    }

    pub fn hp(&self) -> i32 {
        self.hp
    }

    pub fn max_hp(&self) -> i32 {
        self.max_hp
    }

    /// Player position, depth included.
    pub fn position(&self) -> Position {
        self.position
    }

    pub fn depth(&self) -> i32 {
        self.position.depth
    }

    /// Messages delivered to the player since the previous frame.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }
}

/// Projects the world into a frame for a `viewport_width x viewport_height`
/// camera centered on the player, clamped to the map edges.
///
/// Returns `None` when no player-controlled entity is on the map.
pub fn frame(world: &mut World, viewport_width: u32, viewport_height: u32) -> Option<Frame> {
    let player = world.player()?;
    let (position, radius, hp, max_hp) = {
        let entity = world.map().entity(player);
        (
            entity.position(),
            entity.sight_radius(),
            entity.hp(),
            entity.max_hp(),
        )
    };
    let fov = world.map_mut().observe(position, radius);
    let messages = world.drain_messages(player);

    let map = world.map();
    let dimensions = map.dimensions();
    let origin_x = camera_origin(position.x, viewport_width, dimensions.width);
    let origin_y = camera_origin(position.y, viewport_height, dimensions.height);
    let origin = Position::new(origin_x, origin_y, position.depth);

    let mut cells = Vec::with_capacity((viewport_width * viewport_height) as usize);
    for y in 0..viewport_height as i32 {
        for x in 0..viewport_width as i32 {
            cells.push(appearance(map, &fov, origin.step(x, y)));
        }
    }
    Some(Frame {
        origin,
        width: viewport_width,
        height: viewport_height,
        cells,
        fov,
        hp,
        max_hp,
        position,
        messages,
    })
}

/// Top-left camera coordinate on one axis: centered on the player, pushed
/// back inside the map when the viewport would hang over an edge.
fn camera_origin(center: i32, viewport: u32, map_extent: u32) -> i32 {
    let max = (map_extent as i32 - viewport as i32).max(0);
    (center - viewport as i32 / 2).clamp(0, max)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capability::Capability;
    use crate::item::Item;
    use crate::map::{DungeonMap, MapDimensions};
    use crate::template::EntityTemplate;
    use crate::tile::TileKind;

    fn open_map(width: u32, height: u32) -> DungeonMap {
        let dimensions = MapDimensions::new(width, height, 1);
        DungeonMap::new(dimensions, vec![TileKind::Floor; dimensions.cell_count()])
    }

    fn rock() -> Item {
        Item::new("rock", Glyph::on_black('*', Color::Gray), "A fist-sized rock")
    }

    fn fungus() -> EntityTemplate {
        EntityTemplate::builder("fungus")
            .glyph('F', Color::Chartreuse)
            .max_hp(3)
            .capabilities(&[Capability::Destructible])
            .build()
    }

    #[test]
    fn appearance_prefers_entity_over_item_over_tile() {
        let mut map = open_map(9, 9);
        let center = Position::new(4, 4, 0);
        let stacked = Position::new(5, 4, 0);
        let bare = Position::new(3, 4, 0);
        map.add_item(stacked, rock());
        map.spawn(&fungus(), stacked);
        let fov = map.observe(center, 3);

        match appearance(&map, &fov, stacked) {
            CellAppearance::Visible(glyph) => assert_eq!(glyph.symbol, 'F'),
            other => panic!("expected visible entity, got {other:?}"),
        }
        match appearance(&map, &fov, bare) {
            CellAppearance::Visible(glyph) => assert_eq!(glyph.symbol, '.'),
            other => panic!("expected visible floor, got {other:?}"),
        }
    }

    #[test]
    fn item_shows_once_the_entity_is_gone() {
        let mut map = open_map(9, 9);
        let stacked = Position::new(5, 4, 0);
        map.add_item(stacked, rock());
        let fov = map.observe(Position::new(4, 4, 0), 3);
        match appearance(&map, &fov, stacked) {
            CellAppearance::Visible(glyph) => assert_eq!(glyph.symbol, '*'),
            other => panic!("expected visible item, got {other:?}"),
        }
    }

    #[test]
    fn remembered_cells_dim_to_dark_gray_terrain() {
        let mut map = open_map(30, 9);
        let here = Position::new(4, 4, 0);
        let far = Position::new(25, 4, 0);
        map.add_item(here, rock());
        map.observe(here, 3);

        // Looking from far away: the old cell is explored but out of view.
        let fov = map.field_of_view(far, 3);
        match appearance(&map, &fov, here) {
            CellAppearance::Remembered(glyph) => {
                assert_eq!(glyph.symbol, '.', "items are not remembered");
                assert_eq!(glyph.foreground, Color::DarkGray);
            }
            other => panic!("expected remembered cell, got {other:?}"),
        }
        assert_eq!(
            appearance(&map, &fov, Position::new(20, 4, 0)),
            CellAppearance::Unseen
        );
    }

    #[test]
    fn describe_prefers_items_then_entities_then_terrain() {
        let mut map = open_map(9, 9);
        let center = Position::new(4, 4, 0);
        let stacked = Position::new(5, 4, 0);
        map.add_item(stacked, rock());
        map.spawn(&fungus(), stacked);
        map.spawn(&fungus(), Position::new(3, 4, 0));
        let fov = map.observe(center, 3);

        assert_eq!(describe(&map, &fov, stacked), "* - A rock");
        assert_eq!(describe(&map, &fov, Position::new(3, 4, 0)), "F - A fungus");
        assert_eq!(describe(&map, &fov, center), ". - The floor");
        assert_eq!(describe(&map, &fov, Position::new(8, 8, 0)), "  - ");
    }

    #[test]
    fn frame_camera_clamps_to_map_edges() {
        let mut world = World::new(open_map(20, 20), 1);
        world.map_mut().spawn(
            &EntityTemplate::builder("player")
                .glyph('@', Color::White)
                .max_hp(10)
                .sight_radius(4)
                .capabilities(&[
                    Capability::PlayerControl,
                    Capability::Sight,
                    Capability::MessageRecipient,
                ])
                .build(),
            Position::new(1, 18, 0),
        );
        let frame = frame(&mut world, 10, 10).unwrap();
        // x clamps low, y clamps high.
        assert_eq!(frame.origin(), Position::new(0, 10, 0));
        assert_eq!(frame.width(), 10);
        let local = frame.cell(1, 8);
        assert!(matches!(local, CellAppearance::Visible(g) if g.symbol == '@'));
    }

    #[test]
    fn frame_drains_player_messages_once() {
        let mut world = World::new(open_map(9, 9), 2);
        let player = world.map_mut().spawn(
            &EntityTemplate::builder("player")
                .max_hp(10)
                .capabilities(&[Capability::PlayerControl, Capability::MessageRecipient])
                .build(),
            Position::new(4, 4, 0),
        );
        world.send_message(player, "It is pitch black.");
        let first = frame(&mut world, 9, 9).unwrap();
        assert_eq!(first.messages(), ["It is pitch black."]);
        let second = frame(&mut world, 9, 9).unwrap();
        assert!(second.messages().is_empty());
    }
}
