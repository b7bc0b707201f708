//! Cellular-automata cave generation.
//!
//! Each level starts as noise and is smoothed into caverns; only the
//! largest connected region survives, so every walkable cell of a level is
//! reachable from every other. Adjacent levels are then joined by a
//! staircase pair sharing one `(x, y)` cell, stairs-down above and
//! stairs-up below.

use std::collections::VecDeque;

use tracing::debug;

use warren_core::{DungeonMap, GameRng, MapDimensions, TileKind};

/// Generates multi-level cave maps.
///
/// The same builder and seed always produce the same map.
pub struct CaveBuilder {
    dimensions: MapDimensions,
    fill_percent: i32,
    smoothing_passes: u32,
}

impl CaveBuilder {
    pub fn new(width: u32, height: u32, depth: u32) -> Self {
        assert!(width >= 8 && height >= 8, "cave levels need room to form");
        assert!(depth >= 1, "a map needs at least one level");
        Self {
            dimensions: MapDimensions::new(width, height, depth),
            fill_percent: 50,
            smoothing_passes: 3,
        }
    }

    /// Set the chance (in percent) that a cell starts as open floor.
    pub fn fill_percent(mut self, fill_percent: i32) -> Self {
        self.fill_percent = fill_percent;
        self
    }

    /// Set how many smoothing passes to run over the initial noise.
    pub fn smoothing_passes(mut self, smoothing_passes: u32) -> Self {
        self.smoothing_passes = smoothing_passes;
        self
    }

    pub fn dimensions(&self) -> MapDimensions {
        self.dimensions
    }

    /// Generates the full map from the given random stream.
    pub fn build(&self, rng: &mut GameRng) -> DungeonMap {
        let w = self.dimensions.width as usize;
        let h = self.dimensions.height as usize;
        let area = w * h;

        let mut tiles = Vec::with_capacity(self.dimensions.cell_count());
        for depth in 0..self.dimensions.depth {
            let level = self.generate_level(rng);
            let floor = level.iter().filter(|&&open| open).count();
            debug!(target: "content::builder", depth, floor, area, "level generated");
            tiles.extend(
                level
                    .iter()
                    .map(|&open| if open { TileKind::Floor } else { TileKind::Wall }),
            );
        }
        self.place_stairs(&mut tiles, rng);
        DungeonMap::new(self.dimensions, tiles)
    }

    /// One level: noise, smoothing, a solid border, then connectivity
    /// pruning. `true` cells are open floor, indexed `x * height + y`.
    fn generate_level(&self, rng: &mut GameRng) -> Vec<bool> {
        let w = self.dimensions.width as usize;
        let h = self.dimensions.height as usize;

        let mut level: Vec<bool> = (0..w * h).map(|_| rng.chance(self.fill_percent)).collect();
        for _ in 0..self.smoothing_passes {
            level = smoothed(&level, w, h);
        }
        for x in 0..w {
            level[x * h] = false;
            level[x * h + h - 1] = false;
        }
        for y in 0..h {
            level[y] = false;
            level[(w - 1) * h + y] = false;
        }
        keep_largest_region(&mut level, w, h);
        level
    }

    /// Joins every adjacent level pair with one staircase pair on a cell
    /// that is open floor on both levels.
    fn place_stairs(&self, tiles: &mut [TileKind], rng: &mut GameRng) {
        if self.dimensions.depth < 2 {
            return;
        }
        let w = self.dimensions.width as usize;
        let h = self.dimensions.height as usize;
        let area = w * h;

        for depth in 0..self.dimensions.depth as usize - 1 {
            let upper = depth * area;
            let lower = (depth + 1) * area;
            let candidates: Vec<usize> = (0..area)
                .filter(|&i| {
                    tiles[upper + i] == TileKind::Floor && tiles[lower + i] == TileKind::Floor
                })
                .collect();
            let local = match rng.pick(&candidates).copied() {
                Some(local) => local,
                None => carve_landing(tiles, upper, lower, w, h, rng),
            };
            tiles[upper + local] = TileKind::StairsDown;
            tiles[lower + local] = TileKind::StairsUp;
            debug!(
                target: "content::builder",
                depth,
                x = local / h,
                y = local % h,
                "stairs placed"
            );
        }
    }
}

/// One automaton step. A cell opens with five or more open neighbors and
/// stays open with four; edges beyond the grid count as closed.
fn smoothed(level: &[bool], w: usize, h: usize) -> Vec<bool> {
    let mut next = vec![false; level.len()];
    for x in 0..w as i32 {
        for y in 0..h as i32 {
            let mut open = 0;
            for dx in -1..=1 {
                for dy in -1..=1 {
                    if dx == 0 && dy == 0 {
                        continue;
                    }
                    let nx = x + dx;
                    let ny = y + dy;
                    if nx < 0 || ny < 0 || nx >= w as i32 || ny >= h as i32 {
                        continue;
                    }
                    if level[nx as usize * h + ny as usize] {
                        open += 1;
                    }
                }
            }
            let i = x as usize * h + y as usize;
            next[i] = if level[i] { open >= 4 } else { open >= 5 };
        }
    }
    next
}

/// Walls off every open region except the largest, leaving one connected
/// cavern. A level that smoothed to solid rock gets a small room instead.
fn keep_largest_region(level: &mut [bool], w: usize, h: usize) {
    let mut label = vec![0usize; level.len()];
    let mut next_label = 1;
    let mut best_label = 0;
    let mut best_size = 0;

    for start in 0..level.len() {
        if !level[start] || label[start] != 0 {
            continue;
        }
        let region = next_label;
        next_label += 1;
        label[start] = region;
        let mut size = 0;
        let mut queue = VecDeque::from([start]);
        while let Some(i) = queue.pop_front() {
            size += 1;
            let x = (i / h) as i32;
            let y = (i % h) as i32;
            for (dx, dy) in [(-1, 0), (1, 0), (0, -1), (0, 1)] {
                let nx = x + dx;
                let ny = y + dy;
                if nx < 0 || ny < 0 || nx >= w as i32 || ny >= h as i32 {
                    continue;
                }
                let j = nx as usize * h + ny as usize;
                if level[j] && label[j] == 0 {
                    label[j] = region;
                    queue.push_back(j);
                }
            }
        }
        if size > best_size {
            best_size = size;
            best_label = region;
        }
    }

    if best_size == 0 {
        carve_center_room(level, w, h);
        return;
    }
    for i in 0..level.len() {
        level[i] = label[i] == best_label;
    }
}

/// 3x3 fallback room in the middle of a level with no open cells.
fn carve_center_room(level: &mut [bool], w: usize, h: usize) {
    let cx = w / 2;
    let cy = h / 2;
    for x in cx - 1..=cx + 1 {
        for y in cy - 1..=cy + 1 {
            level[x * h + y] = true;
        }
    }
}

/// Fallback when two adjacent levels share no open cell: pick a floor cell
/// on the upper level, open the cell below it, and tunnel an L-shaped
/// corridor to the lower level's cavern. Returns the shared local index.
fn carve_landing(
    tiles: &mut [TileKind],
    upper: usize,
    lower: usize,
    w: usize,
    h: usize,
    rng: &mut GameRng,
) -> usize {
    let area = w * h;
    let floors: Vec<usize> = (0..area)
        .filter(|&i| tiles[upper + i] == TileKind::Floor)
        .collect();
    let local = rng
        .pick(&floors)
        .copied()
        .expect("a pruned level always keeps at least one floor cell");
    tiles[lower + local] = TileKind::Floor;

    let target = (0..area)
        .filter(|&i| i != local && tiles[lower + i] == TileKind::Floor)
        .min_by_key(|&i| {
            let dx = (i / h) as i32 - (local / h) as i32;
            let dy = (i % h) as i32 - (local % h) as i32;
            dx.abs() + dy.abs()
        });
    if let Some(target) = target {
        let mut x = (local / h) as i32;
        let mut y = (local % h) as i32;
        let tx = (target / h) as i32;
        let ty = (target % h) as i32;
        while x != tx {
            x += (tx - x).signum();
            tiles[lower + x as usize * h + y as usize] = TileKind::Floor;
        }
        while y != ty {
            y += (ty - y).signum();
            tiles[lower + x as usize * h + y as usize] = TileKind::Floor;
        }
    }
    local
}

#[cfg(test)]
mod tests {
    use super::*;
    use warren_core::Position;

    fn build(seed: u64) -> DungeonMap {
        let mut rng = GameRng::new(seed);
        CaveBuilder::new(40, 20, 3).build(&mut rng)
    }

    fn is_walkable(map: &DungeonMap, position: Position) -> bool {
        map.tile_kind(position).is_walkable()
    }

    #[test]
    fn the_border_is_solid_wall() {
        let map = build(7);
        let dims = map.dimensions();
        for depth in 0..dims.depth as i32 {
            for x in 0..dims.width as i32 {
                assert_eq!(map.tile_kind(Position::new(x, 0, depth)), TileKind::Wall);
                assert_eq!(
                    map.tile_kind(Position::new(x, dims.height as i32 - 1, depth)),
                    TileKind::Wall
                );
            }
            for y in 0..dims.height as i32 {
                assert_eq!(map.tile_kind(Position::new(0, y, depth)), TileKind::Wall);
                assert_eq!(
                    map.tile_kind(Position::new(dims.width as i32 - 1, y, depth)),
                    TileKind::Wall
                );
            }
        }
    }

    #[test]
    fn stairs_come_in_vertical_pairs() {
        let map = build(8);
        let dims = map.dimensions();
        for depth in 0..dims.depth as i32 {
            let mut down = 0;
            let mut up = 0;
            for x in 0..dims.width as i32 {
                for y in 0..dims.height as i32 {
                    match map.tile_kind(Position::new(x, y, depth)) {
                        TileKind::StairsDown => {
                            down += 1;
                            assert_eq!(
                                map.tile_kind(Position::new(x, y, depth + 1)),
                                TileKind::StairsUp,
                                "no landing under the stairs at ({x}, {y}, {depth})"
                            );
                        }
                        TileKind::StairsUp => up += 1,
                        _ => {}
                    }
                }
            }
            // One way down from every level but the last, one way up
            // everywhere but the first.
            assert_eq!(down, if depth < dims.depth as i32 - 1 { 1 } else { 0 });
            assert_eq!(up, if depth > 0 { 1 } else { 0 });
        }
    }

    #[test]
    fn every_level_is_one_connected_cavern() {
        let map = build(9);
        let dims = map.dimensions();
        for depth in 0..dims.depth as i32 {
            let mut walkable = Vec::new();
            for x in 0..dims.width as i32 {
                for y in 0..dims.height as i32 {
                    let position = Position::new(x, y, depth);
                    if is_walkable(&map, position) {
                        walkable.push(position);
                    }
                }
            }
            assert!(walkable.len() >= 9, "level {depth} is nearly solid rock");

            // Flood from the first walkable cell; everything must be reached.
            let mut seen = std::collections::HashSet::new();
            let mut queue = VecDeque::from([walkable[0]]);
            seen.insert(walkable[0]);
            while let Some(position) = queue.pop_front() {
                for (dx, dy) in [(-1, 0), (1, 0), (0, -1), (0, 1)] {
                    let next = position.step(dx, dy);
                    if is_walkable(&map, next) && seen.insert(next) {
                        queue.push_back(next);
                    }
                }
            }
            assert_eq!(seen.len(), walkable.len(), "level {depth} is split");
        }
    }

    #[test]
    fn the_same_seed_builds_the_same_caves() {
        let first = build(10);
        let second = build(10);
        let dims = first.dimensions();
        for depth in 0..dims.depth as i32 {
            for x in 0..dims.width as i32 {
                for y in 0..dims.height as i32 {
                    let position = Position::new(x, y, depth);
                    assert_eq!(first.tile_kind(position), second.tile_kind(position));
                }
            }
        }
    }
}
