//! Recursive shadow-casting field of view.
//!
//! The plane around the origin is split into eight octants, each scanned row
//! by row outward. An opaque cell casts a shadow over the slope range it
//! covers; the scan recurses to handle the visible strip before the shadow
//! and continues after it. Opaque cells themselves are visible (walls can be
//! seen, not seen through), and the origin is always visible.

use std::collections::HashMap;

use crate::types::Position;

/// The set of cells visible from one origin.
///
/// Cells carry a visibility weight in `(0, 1]` that falls off linearly with
/// distance. Current consumers only test presence; the weight is kept for
/// clients that want distance shading.
#[derive(Clone, Debug, Default)]
pub struct FieldOfView {
    visible: HashMap<(i32, i32), f32>,
}

impl FieldOfView {
    pub fn contains(&self, x: i32, y: i32) -> bool {
        self.visible.contains_key(&(x, y))
    }

    /// Visibility weight of a cell; 0.0 when not visible.
    pub fn weight(&self, x: i32, y: i32) -> f32 {
        self.visible.get(&(x, y)).copied().unwrap_or(0.0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        self.visible.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.visible.len()
    }

    pub fn is_empty(&self) -> bool {
        self.visible.is_empty()
    }

    fn insert(&mut self, x: i32, y: i32, weight: f32) {
        self.visible.insert((x, y), weight);
    }
}

/// Octant transforms `[xx, xy, yx, yy]` mapping scan-space offsets onto the
/// grid. Adjacent octants share their diagonal edge; the overlap is harmless
/// because insertion is idempotent.
const OCTANTS: [[i32; 4]; 8] = [
    [1, 0, 0, 1],
    [0, 1, 1, 0],
    [0, -1, 1, 0],
    [-1, 0, 0, 1],
    [-1, 0, 0, -1],
    [0, -1, -1, 0],
    [0, 1, -1, 0],
    [1, 0, 0, -1],
];

/// Computes visibility from `origin` out to `radius` (Euclidean, inclusive).
///
/// `blocks_light` decides opacity; it is consulted for scan cells only, so
/// out-of-bounds positions must answer rather than fail (the map's null tile
/// answers "opaque").
pub fn compute(
    origin: Position,
    radius: u32,
    blocks_light: impl Fn(Position) -> bool,
) -> FieldOfView {
    let mut fov = FieldOfView::default();
    fov.insert(origin.x, origin.y, 1.0);
    for octant in OCTANTS {
        cast_row(&mut fov, origin, radius, &blocks_light, 1, 1.0, 0.0, octant);
    }
    fov
}

#[allow(clippy::too_many_arguments)]
fn cast_row<F: Fn(Position) -> bool>(
    fov: &mut FieldOfView,
    origin: Position,
    radius: u32,
    blocks_light: &F,
    row: i32,
    mut start_slope: f64,
    end_slope: f64,
    octant: [i32; 4],
) {
    if start_slope < end_slope {
        return;
    }
    let [xx, xy, yx, yy] = octant;
    let radius_sq = (radius * radius) as i32;
    let mut blocked = false;
    let mut new_start = start_slope;
    let mut j = row;
    while j <= radius as i32 && !blocked {
        let dy = -j;
        for dx in -j..=0 {
            let left_slope = (dx as f64 - 0.5) / (dy as f64 + 0.5);
            let right_slope = (dx as f64 + 0.5) / (dy as f64 - 0.5);
            if start_slope < right_slope {
                continue;
            }
            if end_slope > left_slope {
                break;
            }

            let x = origin.x + dx * xx + dy * xy;
            let y = origin.y + dx * yx + dy * yy;
            let cell = Position::new(x, y, origin.depth);
            let dist_sq = dx * dx + dy * dy;
            if dist_sq <= radius_sq {
                let weight = 1.0 - (dist_sq as f32).sqrt() / (radius as f32 + 1.0);
                fov.insert(x, y, weight);
            }

            if blocked {
                if blocks_light(cell) {
                    new_start = right_slope;
                } else {
                    blocked = false;
                    start_slope = new_start;
                }
            } else if blocks_light(cell) && j < radius as i32 {
                // Shadow begins here: resolve the strip before it, then
                // continue this row past the shadow.
                blocked = true;
                cast_row(
                    fov,
                    origin,
                    radius,
                    blocks_light,
                    j + 1,
                    start_slope,
                    left_slope,
                    octant,
                );
                new_start = right_slope;
            }
        }
        j += 1;
    }
}
