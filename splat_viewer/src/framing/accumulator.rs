/// Bounds accumulator - measures the whole loaded scene
///
/// Walks every node below the scene root and unions their world-space
/// boxes. Each node yields its own `Result`; bad nodes are counted in the
/// report and left out of the volume so a half-streamed asset never
/// poisons the aggregate.

use crate::engine_trace;
use crate::session::{SceneNode, SceneRoot};
use super::bounds::{AABB, BoundingVolume};

/// Why a node did not contribute to the volume
#[derive(Debug, Clone, PartialEq)]
pub enum NodeBoundsError {
    /// Bounds contain NaN or infinite coordinates (typically not streamed yet)
    NonFinite,
    /// The engine failed to measure the node
    Unavailable(String),
}

/// Result of one accumulation pass
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BoundsReport {
    /// Union of every contributing node (empty when none contributed)
    pub volume: BoundingVolume,
    /// Nodes whose bounds were unioned
    pub contributing: u32,
    /// Nodes without geometry
    pub empty_nodes: u32,
    /// Nodes skipped for non-finite bounds
    pub non_finite: u32,
    /// Nodes skipped because measuring them failed
    pub failed: u32,
}

impl BoundsReport {
    /// Nodes left out because of a problem (not counting plain groups)
    pub fn skipped(&self) -> u32 {
        self.non_finite + self.failed
    }

    pub fn visited(&self) -> u32 {
        self.contributing + self.empty_nodes + self.skipped()
    }
}

/// World-space bounds of a single node.
///
/// Precomputed local bounds win over the world footprint. An inverted box
/// is the engine's "nothing here" sentinel and counts as no geometry.
pub fn node_bounds(node: &dyn SceneNode) -> Result<Option<AABB>, NodeBoundsError> {
    let aabb = match node.local_bounds() {
        // Transforming would turn the sentinel into a real box
        Some(local) if local.is_finite() && local.is_inverted() => None,
        Some(local) => Some(local.transformed(&node.world_matrix())),
        None => node
            .world_footprint()
            .map_err(|err| NodeBoundsError::Unavailable(err.to_string()))?,
    };

    match aabb {
        Some(aabb) if !aabb.is_finite() => Err(NodeBoundsError::NonFinite),
        Some(aabb) if aabb.is_inverted() => Ok(None),
        other => Ok(other),
    }
}

/// Measure the scene below `root`.
///
/// Read-only with respect to the scene; safe to call once per frame
/// from the framing poller.
pub fn compute_bounds(root: &dyn SceneRoot) -> BoundsReport {
    let mut report = BoundsReport::default();

    root.traverse(&mut |node| match node_bounds(node) {
        Ok(Some(aabb)) => {
            report.volume = report.volume.union(&aabb);
            report.contributing += 1;
        }
        Ok(None) => report.empty_nodes += 1,
        Err(NodeBoundsError::NonFinite) => report.non_finite += 1,
        Err(NodeBoundsError::Unavailable(_)) => report.failed += 1,
    });

    if report.skipped() > 0 {
        engine_trace!(
            "splatview::Bounds",
            "Skipped {} of {} nodes ({} non-finite, {} failed)",
            report.skipped(),
            report.visited(),
            report.non_finite,
            report.failed
        );
    }

    report
}

#[cfg(test)]
#[path = "accumulator_tests.rs"]
mod tests;
