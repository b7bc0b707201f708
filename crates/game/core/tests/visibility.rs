//! Sight and exploration through the public API: shadow casting against
//! terrain, and the one-way explored flags that feed the remembered view.

use warren_core::{DungeonMap, MapDimensions, Position, TileKind};

fn flat_index(dimensions: MapDimensions, x: i32, y: i32) -> usize {
    (x as usize) * dimensions.height as usize + y as usize
}

/// Single 15x9 level, all floor except explicitly placed walls.
fn walled_map(walls: &[(i32, i32)]) -> DungeonMap {
    let dimensions = MapDimensions::new(15, 9, 1);
    let mut tiles = vec![TileKind::Floor; dimensions.cell_count()];
    for &(x, y) in walls {
        tiles[flat_index(dimensions, x, y)] = TileKind::Wall;
    }
    DungeonMap::new(dimensions, tiles)
}

fn explored_cells(map: &DungeonMap) -> Vec<Position> {
    let dimensions = map.dimensions();
    let mut cells = Vec::new();
    for x in 0..dimensions.width as i32 {
        for y in 0..dimensions.height as i32 {
            let position = Position::new(x, y, 0);
            if map.is_explored(position) {
                cells.push(position);
            }
        }
    }
    cells
}

#[test]
fn observing_marks_exactly_the_visible_cells_explored() {
    let mut map = walled_map(&[]);
    let origin = Position::new(7, 4, 0);
    let fov = map.observe(origin, 3);

    let explored = explored_cells(&map);
    assert_eq!(explored.len(), fov.len());
    for position in &explored {
        assert!(fov.contains(position.x, position.y));
    }
}

#[test]
fn exploration_only_grows() {
    let mut map = walled_map(&[]);
    map.observe(Position::new(3, 4, 0), 2);
    let before = explored_cells(&map);

    // A later observation elsewhere keeps everything already explored.
    map.observe(Position::new(11, 4, 0), 2);
    let after = explored_cells(&map);
    for position in &before {
        assert!(after.contains(position), "{position} was forgotten");
    }
    assert!(after.len() > before.len());
}

#[test]
fn walls_hide_what_lies_behind_them() {
    let mut map = walled_map(&[(9, 4)]);
    let origin = Position::new(7, 4, 0);
    let fov = map.observe(origin, 4);

    // The wall itself is visible; the cells in its shadow are not.
    assert!(fov.contains(9, 4));
    assert!(!fov.contains(10, 4));
    assert!(!fov.contains(11, 4));
    assert!(!map.is_explored(Position::new(10, 4, 0)));
}

#[test]
fn digging_a_wall_opens_the_sight_line() {
    let mut map = walled_map(&[(9, 4)]);
    let origin = Position::new(7, 4, 0);
    assert!(!map.field_of_view(origin, 4).contains(10, 4));

    map.dig(Position::new(9, 4, 0));
    assert_eq!(map.tile_kind(Position::new(9, 4, 0)), TileKind::Floor);
    assert!(map.field_of_view(origin, 4).contains(10, 4));
}

#[test]
fn cells_beyond_the_grid_are_never_explored() {
    let mut map = walled_map(&[]);
    // Observing from a corner pushes scan rows past the edge.
    map.observe(Position::new(0, 0, 0), 4);
    assert!(!map.is_explored(Position::new(-1, 0, 0)));
    assert!(!map.is_explored(Position::new(0, -1, 0)));
    assert!(map.is_explored(Position::new(0, 0, 0)));
}
