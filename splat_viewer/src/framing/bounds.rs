/// Bounding types used by the framing pipeline.
///
/// `AABB` is a raw min/max box as reported by scene nodes. `BoundingVolume`
/// is the accumulated, immutable result of one traversal pass: either empty
/// (no contributing geometry) or a box with `min <= max` componentwise.

use glam::{Mat4, Vec3};

// ===== AABB =====

/// Axis-Aligned Bounding Box
///
/// Either in node-local space (precomputed bounds) or in world space
/// (after `transformed`, or from a node's world footprint).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AABB {
    /// Minimum corner (x, y, z)
    pub min: Vec3,
    /// Maximum corner (x, y, z)
    pub max: Vec3,
}

impl AABB {
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// Box centered on `center` with the given full extents.
    pub fn from_center_size(center: Vec3, size: Vec3) -> Self {
        let half = size * 0.5;
        Self { min: center - half, max: center + half }
    }

    /// Smallest box containing every point, `None` for an empty slice.
    pub fn from_points(points: &[Vec3]) -> Option<Self> {
        let (first, rest) = points.split_first()?;
        let mut aabb = AABB { min: *first, max: *first };
        for point in rest {
            aabb.min = aabb.min.min(*point);
            aabb.max = aabb.max.max(*point);
        }
        Some(aabb)
    }

    /// Transform this local-space AABB by a matrix, returning a new AABB.
    ///
    /// Uses the Arvo method: projects each matrix axis onto the AABB extents
    /// for an exact (tight) result without transforming all 8 corners.
    pub fn transformed(&self, matrix: &Mat4) -> AABB {
        let translation = matrix.col(3).truncate();
        let mut new_min = translation;
        let mut new_max = translation;

        for i in 0..3 {
            let axis = matrix.col(i).truncate();
            let a = axis * self.min[i];
            let b = axis * self.max[i];
            new_min += a.min(b);
            new_max += a.max(b);
        }

        AABB { min: new_min, max: new_max }
    }

    /// True when every coordinate is finite (no NaN, no infinity).
    pub fn is_finite(&self) -> bool {
        self.min.is_finite() && self.max.is_finite()
    }

    /// True when `min > max` on any axis (the usual "empty" sentinel).
    pub fn is_inverted(&self) -> bool {
        self.min.cmpgt(self.max).any()
    }

    /// Smallest box containing both boxes.
    pub fn union(&self, other: &AABB) -> AABB {
        AABB {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }
}

// ===== BOUNDING VOLUME =====

/// Accumulated bounds of the whole scene.
///
/// The empty volume is the canonical "nothing measured yet" value: its
/// center and size are zero and its diagonal is 0. Operations return new
/// values instead of mutating.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BoundingVolume {
    extent: Option<AABB>,
}

impl BoundingVolume {
    /// The empty volume
    pub fn empty() -> Self {
        Self { extent: None }
    }

    /// Volume covering one box. Corners are reordered so `min <= max`.
    ///
    /// Node bounds never reach this inverted: `node_bounds` treats an
    /// inverted box as a node without geometry.
    pub fn from_aabb(aabb: AABB) -> Self {
        Self {
            extent: Some(AABB {
                min: aabb.min.min(aabb.max),
                max: aabb.min.max(aabb.max),
            }),
        }
    }

    /// New volume covering this one and `aabb`.
    pub fn union(&self, aabb: &AABB) -> Self {
        let other = Self::from_aabb(*aabb);
        match (self.extent, other.extent) {
            (Some(current), Some(added)) => Self { extent: Some(current.union(&added)) },
            (None, added) => Self { extent: added },
            (current, None) => Self { extent: current },
        }
    }

    pub fn is_empty(&self) -> bool {
        self.extent.is_none()
    }

    /// Empty, or collapsed to a single point (nothing to frame).
    pub fn is_degenerate(&self) -> bool {
        self.diagonal() <= 0.0
    }

    /// Underlying box, `None` when empty
    pub fn aabb(&self) -> Option<&AABB> {
        self.extent.as_ref()
    }

    pub fn min(&self) -> Vec3 {
        self.extent.map_or(Vec3::ZERO, |e| e.min)
    }

    pub fn max(&self) -> Vec3 {
        self.extent.map_or(Vec3::ZERO, |e| e.max)
    }

    pub fn center(&self) -> Vec3 {
        self.extent.map_or(Vec3::ZERO, |e| (e.min + e.max) * 0.5)
    }

    pub fn size(&self) -> Vec3 {
        self.extent.map_or(Vec3::ZERO, |e| e.max - e.min)
    }

    /// Length of the box diagonal (0 when empty)
    pub fn diagonal(&self) -> f32 {
        self.size().length()
    }

    /// Largest of the three extents
    pub fn max_dimension(&self) -> f32 {
        self.size().max_element()
    }
}

#[cfg(test)]
#[path = "bounds_tests.rs"]
mod tests;
