//! Spatial Index Module
//!
//! Provides R-tree based spatial indexing for pointer-down hit testing.
//! This reduces hit testing from O(n) to O(log n) for point queries.

use crate::types::{Pill, PillId};
use rstar::{AABB, RTree, RTreeObject};
use std::collections::HashMap;

/// A spatial entry representing a pill's bounding box.
#[derive(Debug, Clone, Copy)]
pub struct SpatialEntry {
    pub pill_id: PillId,
    pub min_x: f32,
    pub min_y: f32,
    pub max_x: f32,
    pub max_y: f32,
}

impl SpatialEntry {
    pub fn new(pill: &Pill) -> Self {
        Self {
            pill_id: pill.id,
            min_x: pill.x,
            min_y: pill.y,
            max_x: pill.right(),
            max_y: pill.bottom(),
        }
    }

    #[inline]
    pub fn contains_point(&self, x: f32, y: f32) -> bool {
        x >= self.min_x && x <= self.max_x && y >= self.min_y && y <= self.max_y
    }
}

impl RTreeObject for SpatialEntry {
    type Envelope = AABB<[f32; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_corners([self.min_x, self.min_y], [self.max_x, self.max_y])
    }
}

impl PartialEq for SpatialEntry {
    fn eq(&self, other: &Self) -> bool {
        self.pill_id == other.pill_id
    }
}

/// Spatial index over the pill list.
pub struct SpatialIndex {
    tree: RTree<SpatialEntry>,
    entries: HashMap<PillId, SpatialEntry>,
}

impl SpatialIndex {
    pub fn new() -> Self {
        Self {
            tree: RTree::new(),
            entries: HashMap::new(),
        }
    }

    pub fn insert(&mut self, pill: &Pill) {
        if let Some(old_entry) = self.entries.remove(&pill.id) {
            self.tree.remove(&old_entry);
        }

        let entry = SpatialEntry::new(pill);
        self.tree.insert(entry);
        self.entries.insert(pill.id, entry);
    }

    /// Re-index a pill whose position changed.
    pub fn update(&mut self, pill: &Pill) {
        self.insert(pill);
    }

    /// All pills whose bounds contain the point, edges included. Unordered.
    pub fn query_point(&self, x: f32, y: f32) -> Vec<PillId> {
        let point_envelope = AABB::from_point([x, y]);

        self.tree
            .locate_in_envelope_intersecting(&point_envelope)
            .filter(|entry| entry.contains_point(x, y))
            .map(|entry| entry.pill_id)
            .collect()
    }

    /// Replace the whole index with the given pills.
    pub fn rebuild(&mut self, pills: &[Pill]) {
        let entries: Vec<SpatialEntry> = pills.iter().map(SpatialEntry::new).collect();

        self.entries = entries.iter().map(|e| (e.pill_id, *e)).collect();
        self.tree = RTree::bulk_load(entries);
    }
}

impl Default for SpatialIndex {
    fn default() -> Self {
        Self::new()
    }
}
