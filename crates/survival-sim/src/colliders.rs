//! Static environment colliders (buildings) that block projectiles.

use glam::DVec3;
use serde::{Deserialize, Serialize};

use survival_core::types::Position;

/// Axis-aligned bounding box in world space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub min: DVec3,
    pub max: DVec3,
}

impl Aabb {
    /// Build a box from two opposite corners in any order.
    pub fn new(a: DVec3, b: DVec3) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    /// Box centered on `center` with full extents `size`.
    pub fn from_center_size(center: DVec3, size: DVec3) -> Self {
        let half = size.abs() * 0.5;
        Self {
            min: center - half,
            max: center + half,
        }
    }

    /// Grow the box by `margin` on every side.
    pub fn expanded(&self, margin: f64) -> Self {
        Self {
            min: self.min - DVec3::splat(margin),
            max: self.max + DVec3::splat(margin),
        }
    }

    /// Inclusive containment test.
    pub fn contains(&self, point: DVec3) -> bool {
        point.cmpge(self.min).all() && point.cmple(self.max).all()
    }
}

/// Collider boxes with the safety margin applied once at construction.
#[derive(Debug, Clone, Default)]
pub struct ColliderSet {
    expanded: Vec<Aabb>,
}

impl ColliderSet {
    pub fn new(boxes: &[Aabb], margin: f64) -> Self {
        Self {
            expanded: boxes.iter().map(|b| b.expanded(margin)).collect(),
        }
    }

    /// Whether `position` lies inside any (expanded) collider.
    pub fn blocks(&self, position: &Position) -> bool {
        let point = position.as_dvec3();
        self.expanded.iter().any(|b| b.contains(point))
    }
}
