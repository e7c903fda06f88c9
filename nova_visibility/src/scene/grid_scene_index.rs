/// GridSceneIndex — uniform-grid spatial index for frustum culling.
///
/// Space is divided into cubic cells of a fixed size. Each renderable is
/// registered in every cell its world AABB overlaps, so queries must
/// deduplicate. Cells are stored sparsely in a hash map — only occupied
/// cells exist.
///
/// Suited to scenes with roughly uniform object density. A cell size on
/// the order of the typical object diameter keeps the per-cell lists
/// short without exploding the cell count.

use super::bounds::AABB;
use super::renderable::RenderableKey;
use super::scene_index::SceneIndex;
use crate::camera::{Frustum, FrustumTest};
use crate::engine_err;
use crate::error::Result;
use glam::Vec3;
use rustc_hash::{FxHashMap, FxHashSet};

/// Integer coordinates of a grid cell.
type CellCoord = (i32, i32, i32);

/// Uniform grid spatial index.
///
/// Renderables are indexed by the cells their world-space AABB overlaps.
/// `query_frustum` classifies each occupied cell against the frustum and
/// only tests individual AABBs in partially-overlapping cells.
pub struct GridSceneIndex {
    /// Edge length of a cubic cell
    cell_size: f32,
    /// Occupied cells and the renderables overlapping them
    cells: FxHashMap<CellCoord, Vec<RenderableKey>>,
    /// Reverse lookup: key → (world AABB, covered cell range).
    /// Needed for O(cells-covered) remove without a full scan.
    locations: FxHashMap<RenderableKey, (AABB, CellCoord, CellCoord)>,
}

impl GridSceneIndex {
    /// Create a new empty grid with the given cell size.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidInput` if `cell_size` is not a positive
    /// finite number.
    pub fn new(cell_size: f32) -> Result<Self> {
        if !cell_size.is_finite() || cell_size <= 0.0 {
            return Err(engine_err!(
                "nova::GridSceneIndex",
                "cell_size must be positive and finite, got {}",
                cell_size
            ));
        }

        Ok(Self {
            cell_size,
            cells: FxHashMap::default(),
            locations: FxHashMap::default(),
        })
    }

    /// Edge length of a cell.
    pub fn cell_size(&self) -> f32 {
        self.cell_size
    }

    /// Number of occupied cells.
    pub fn occupied_cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Number of indexed renderables.
    pub fn len(&self) -> usize {
        self.locations.len()
    }

    /// True when no renderable is indexed.
    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    /// Inclusive range of cell coordinates covered by an AABB.
    fn cell_range(&self, aabb: &AABB) -> (CellCoord, CellCoord) {
        let to_cell = |v: Vec3| -> CellCoord {
            (
                (v.x / self.cell_size).floor() as i32,
                (v.y / self.cell_size).floor() as i32,
                (v.z / self.cell_size).floor() as i32,
            )
        };
        (to_cell(aabb.min), to_cell(aabb.max))
    }

    /// World-space AABB of a cell.
    fn cell_aabb(&self, coord: CellCoord) -> AABB {
        let min = Vec3::new(
            coord.0 as f32 * self.cell_size,
            coord.1 as f32 * self.cell_size,
            coord.2 as f32 * self.cell_size,
        );
        AABB {
            min,
            max: min + Vec3::splat(self.cell_size),
        }
    }

    fn for_each_cell_in(min: CellCoord, max: CellCoord, mut f: impl FnMut(CellCoord)) {
        for x in min.0..=max.0 {
            for y in min.1..=max.1 {
                for z in min.2..=max.2 {
                    f((x, y, z));
                }
            }
        }
    }
}

impl SceneIndex for GridSceneIndex {
    fn insert(&mut self, key: RenderableKey, world_aabb: &AABB) {
        let (min_cell, max_cell) = self.cell_range(world_aabb);

        let cells = &mut self.cells;
        Self::for_each_cell_in(min_cell, max_cell, |coord| {
            cells.entry(coord).or_default().push(key);
        });

        self.locations.insert(key, (*world_aabb, min_cell, max_cell));
    }

    fn remove(&mut self, key: RenderableKey) {
        let Some((_, min_cell, max_cell)) = self.locations.remove(&key) else {
            return;
        };

        let cells = &mut self.cells;
        Self::for_each_cell_in(min_cell, max_cell, |coord| {
            if let Some(keys) = cells.get_mut(&coord) {
                keys.retain(|k| *k != key);
                if keys.is_empty() {
                    cells.remove(&coord);
                }
            }
        });
    }

    fn update(&mut self, key: RenderableKey, world_aabb: &AABB) {
        self.remove(key);
        self.insert(key, world_aabb);
    }

    fn query_frustum(&self, frustum: &Frustum, results: &mut Vec<RenderableKey>) {
        let mut seen: FxHashSet<RenderableKey> = FxHashSet::default();

        for (coord, keys) in &self.cells {
            match frustum.classify_aabb(&self.cell_aabb(*coord)) {
                FrustumTest::Outside => continue,
                FrustumTest::Inside => {
                    // Whole cell is visible — no per-object test needed
                    for key in keys {
                        if seen.insert(*key) {
                            results.push(*key);
                        }
                    }
                }
                FrustumTest::Partial => {
                    for key in keys {
                        if seen.contains(key) {
                            continue;
                        }
                        let (aabb, _, _) = &self.locations[key];
                        if frustum.intersects_aabb(aabb) {
                            seen.insert(*key);
                            results.push(*key);
                        }
                    }
                }
            }
        }
    }

    fn clear(&mut self) {
        self.cells.clear();
        self.locations.clear();
    }
}

#[cfg(test)]
#[path = "grid_scene_index_tests.rs"]
mod tests;
