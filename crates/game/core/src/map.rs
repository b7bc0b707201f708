//! The shared spatial world: tile grid, occupants, item stacks, exploration,
//! and the turn queue.
//!
//! Everything position-indexed lives here so the invariants have one owner:
//! at most one entity per cell, item stacks keep arrival order and disappear
//! when emptied, explored flags only ever turn on, and only Actor-group
//! entities sit in the turn queue. Placement violations are bugs in the
//! calling code and panic rather than limp along with a corrupt index.

use std::collections::HashMap;

use tracing::trace;

use crate::capability::{Capability, Group};
use crate::entity::Entity;
use crate::fov::{self, FieldOfView};
use crate::item::Item;
use crate::rng::GameRng;
use crate::scheduler::{Tick, TurnQueue};
use crate::template::EntityTemplate;
use crate::tile::{Tile, TileKind};
use crate::types::{EntityId, Position};

/// Fixed grid dimensions: `depth` levels of `width x height` cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MapDimensions {
    pub width: u32,
    pub height: u32,
    pub depth: u32,
}

impl MapDimensions {
    pub const fn new(width: u32, height: u32, depth: u32) -> Self {
        Self {
            width,
            height,
            depth,
        }
    }

    pub fn contains(&self, position: Position) -> bool {
        position.x >= 0
            && position.y >= 0
            && position.depth >= 0
            && position.x < self.width as i32
            && position.y < self.height as i32
            && position.depth < self.depth as i32
    }

    /// Total cell count across all levels.
    pub const fn cell_count(&self) -> usize {
        self.width as usize * self.height as usize * self.depth as usize
    }

    /// Flat index in `[depth][x][y]` order, or `None` out of bounds.
    fn index(&self, position: Position) -> Option<usize> {
        if !self.contains(position) {
            return None;
        }
        let w = self.width as usize;
        let h = self.height as usize;
        Some((position.depth as usize * w + position.x as usize) * h + position.y as usize)
    }
}

/// The map: terrain plus everything standing or lying on it.
#[derive(Debug)]
pub struct DungeonMap {
    dimensions: MapDimensions,
    tiles: Vec<TileKind>,
    explored: Vec<bool>,
    entities: HashMap<EntityId, Entity>,
    by_position: HashMap<Position, EntityId>,
    items: HashMap<Position, Vec<Item>>,
    queue: TurnQueue,
    player: Option<EntityId>,
    next_entity_id: u32,
}

impl DungeonMap {
    /// Creates a map over a prebuilt tile grid.
    ///
    /// `tiles` is indexed `[depth][x][y]` and must cover the dimensions
    /// exactly.
    pub fn new(dimensions: MapDimensions, tiles: Vec<TileKind>) -> Self {
        assert_eq!(
            tiles.len(),
            dimensions.cell_count(),
            "tile grid does not match map dimensions"
        );
        let cells = tiles.len();
        Self {
            dimensions,
            tiles,
            explored: vec![false; cells],
            entities: HashMap::new(),
            by_position: HashMap::new(),
            items: HashMap::new(),
            queue: TurnQueue::new(),
            player: None,
            next_entity_id: 0,
        }
    }

    pub fn dimensions(&self) -> MapDimensions {
        self.dimensions
    }

    // ========================================================================
    // Tiles
    // ========================================================================

    /// Tile descriptor at `position`; the null tile for anything out of
    /// bounds, so callers can probe neighbors without bounds checks.
    pub fn tile(&self, position: Position) -> &'static Tile {
        self.tile_kind(position).tile()
    }

    pub fn tile_kind(&self, position: Position) -> TileKind {
        match self.dimensions.index(position) {
            Some(i) => self.tiles[i],
            None => TileKind::Null,
        }
    }

    /// Digs out a diggable cell, leaving floor. Any other cell is untouched.
    pub fn dig(&mut self, position: Position) {
        if let Some(i) = self.dimensions.index(position) {
            if self.tiles[i].is_diggable() {
                self.tiles[i] = TileKind::Floor;
                trace!(target: "core::map", %position, "tile dug out");
            }
        }
    }

    /// True when the cell is bare floor with nobody standing on it.
    pub fn is_empty_floor(&self, position: Position) -> bool {
        self.tile_kind(position) == TileKind::Floor && self.entity_id_at(position).is_none()
    }

    /// Rejection-samples a random empty floor cell on the given depth.
    ///
    /// Loops until it finds one; levels are generated with ample floor, so
    /// in practice this terminates almost immediately.
    pub fn random_floor_position(&self, rng: &mut GameRng, depth: i32) -> Position {
        loop {
            let x = rng.range(0, self.dimensions.width as i32 - 1);
            let y = rng.range(0, self.dimensions.height as i32 - 1);
            let position = Position::new(x, y, depth);
            if self.is_empty_floor(position) {
                return position;
            }
        }
    }

    // ========================================================================
    // Exploration
    // ========================================================================

    /// Marks a cell explored. Exploration is monotone: there is no way to
    /// unmark. Out-of-bounds and null cells are ignored.
    pub fn mark_explored(&mut self, position: Position) {
        if let Some(i) = self.dimensions.index(position) {
            if self.tiles[i] != TileKind::Null {
                self.explored[i] = true;
            }
        }
    }

    pub fn is_explored(&self, position: Position) -> bool {
        self.dimensions
            .index(position)
            .is_some_and(|i| self.explored[i])
    }

    // ========================================================================
    // Entities
    // ========================================================================

    /// Entity by id.
    ///
    /// Panics when the id is not on this map: ids are handed out by the map,
    /// and holding one for an entity that was removed is a caller bug.
    pub fn entity(&self, id: EntityId) -> &Entity {
        self.entities
            .get(&id)
            .unwrap_or_else(|| panic!("no such entity on this map: {id}"))
    }

    pub(crate) fn entity_mut(&mut self, id: EntityId) -> &mut Entity {
        self.entities
            .get_mut(&id)
            .unwrap_or_else(|| panic!("no such entity on this map: {id}"))
    }

    pub fn contains(&self, id: EntityId) -> bool {
        self.entities.contains_key(&id)
    }

    /// The entity standing on the cell, if any.
    pub fn entity_at(&self, position: Position) -> Option<&Entity> {
        self.entity_id_at(position).map(|id| self.entity(id))
    }

    pub fn entity_id_at(&self, position: Position) -> Option<EntityId> {
        self.by_position.get(&position).copied()
    }

    /// The player-controlled entity, while one is on the map.
    pub fn player(&self) -> Option<EntityId> {
        self.player
    }

    pub fn entities(&self) -> impl Iterator<Item = &Entity> {
        self.entities.values()
    }

    pub fn entity_count(&self) -> usize {
        self.entities.len()
    }

    /// Ids of every entity inside the axis-aligned square of `radius` around
    /// `center`, on the center's depth.
    pub fn entities_within_radius(&self, center: Position, radius: i32) -> Vec<EntityId> {
        self.entities
            .values()
            .filter(|entity| {
                let p = entity.position();
                p.depth == center.depth
                    && (p.x - center.x).abs() <= radius
                    && (p.y - center.y).abs() <= radius
            })
            .map(Entity::id)
            .collect()
    }

    /// Creates an entity from a template and registers it at `position`:
    /// occupancy index, turn queue (for Actor-group entities), and the
    /// player reference all get wired here.
    pub fn spawn(&mut self, template: &EntityTemplate, position: Position) -> EntityId {
        let id = EntityId(self.next_entity_id);
        self.next_entity_id += 1;
        let entity = Entity::from_template(id, position, template);

        self.place(id, position, None);
        if entity.in_group(Group::Actor) {
            self.queue.schedule(id, entity.speed());
        }
        if entity.has_capability(Capability::PlayerControl) {
            assert!(
                self.player.is_none(),
                "map already has a player-controlled entity"
            );
            self.player = Some(id);
        }
        trace!(target: "core::map", %id, %position, name = entity.name(), "entity spawned");
        self.entities.insert(id, entity);
        id
    }

    /// Moves an entity, maintaining the occupancy index.
    pub(crate) fn move_entity(&mut self, id: EntityId, to: Position) {
        let from = self.entity(id).position();
        self.place(id, to, Some(from));
        self.entity_mut(id).set_position(to);
    }

    /// Unregisters an entity: occupancy index, turn queue, player reference.
    /// Returns the entity, or `None` when the id was already gone.
    pub fn remove_entity(&mut self, id: EntityId) -> Option<Entity> {
        let entity = self.entities.remove(&id)?;
        if self.by_position.get(&entity.position()) == Some(&id) {
            self.by_position.remove(&entity.position());
        }
        self.queue.remove(id);
        if self.player == Some(id) {
            self.player = None;
        }
        trace!(target: "core::map", %id, "entity removed");
        Some(entity)
    }

    /// Occupancy-index maintenance. Placement out of bounds or onto an
    /// occupied cell corrupts the world and is fatal.
    fn place(&mut self, id: EntityId, new: Position, old: Option<Position>) {
        if let Some(old) = old {
            if self.by_position.get(&old) == Some(&id) {
                self.by_position.remove(&old);
            }
        }
        assert!(
            self.dimensions.contains(new),
            "entity {id} placed out of bounds at {new}"
        );
        if let Some(occupant) = self.by_position.get(&new) {
            panic!("entity {id} placed onto {new}, already occupied by {occupant}");
        }
        self.by_position.insert(new, id);
    }

    // ========================================================================
    // Turn order
    // ========================================================================

    /// Pops the next scheduled actor, advancing the timeline to its turn.
    pub(crate) fn next_turn(&mut self) -> Option<EntityId> {
        self.queue.pop()
    }

    /// Reinserts an actor after its turn, unless it left the map meanwhile.
    pub(crate) fn complete_turn(&mut self, id: EntityId) {
        if let Some(entity) = self.entities.get(&id) {
            self.queue.schedule(id, entity.speed());
        }
    }

    pub fn clock(&self) -> Tick {
        self.queue.clock()
    }

    /// Whether the entity currently has a pending turn.
    pub fn is_scheduled(&self, id: EntityId) -> bool {
        self.queue.contains(id)
    }

    pub fn scheduled_count(&self) -> usize {
        self.queue.len()
    }

    // ========================================================================
    // Items
    // ========================================================================

    /// Items stacked on the cell, oldest first. Empty for bare cells.
    pub fn items_at(&self, position: Position) -> &[Item] {
        self.items.get(&position).map_or(&[], Vec::as_slice)
    }

    pub fn has_items(&self, position: Position) -> bool {
        self.items.contains_key(&position)
    }

    /// Appends an item to the cell's stack.
    pub fn add_item(&mut self, position: Position, item: Item) {
        self.items.entry(position).or_default().push(item);
    }

    /// Replaces the cell's stack. An empty replacement deletes the entry
    /// outright; no cell ever holds an empty stack.
    pub fn set_items_at(&mut self, position: Position, items: Vec<Item>) {
        if items.is_empty() {
            self.items.remove(&position);
        } else {
            self.items.insert(position, items);
        }
    }

    /// Removes and returns the cell's whole stack.
    pub(crate) fn take_items(&mut self, position: Position) -> Vec<Item> {
        self.items.remove(&position).unwrap_or_default()
    }

    // ========================================================================
    // Visibility
    // ========================================================================

    /// Field of view from `center`, leaving explored state untouched.
    pub fn field_of_view(&self, center: Position, radius: u32) -> FieldOfView {
        fov::compute(center, radius, |position| self.tile(position).blocks_light)
    }

    /// Field of view from `center`, marking every visible cell explored.
    pub fn observe(&mut self, center: Position, radius: u32) -> FieldOfView {
        let fov = self.field_of_view(center, radius);
        for (x, y) in fov.iter() {
            self.mark_explored(Position::new(x, y, center.depth));
        }
        fov
    }
}
