/// Headless scene graph
///
/// Flat list of nodes under one rotatable root, stored in a SlotMap so
/// keys stay valid while other nodes come and go. Node geometry can be
/// scripted to behave like a real splat loader: precomputed bounds, raw
/// points, bounds that only appear after a few frames, or nodes that
/// cannot be measured at all.

use std::cell::Cell;
use glam::{Mat4, Quat, Vec3};
use slotmap::{new_key_type, SlotMap};

use splat_viewer::splatview::framing::AABB;
use splat_viewer::splatview::session::{SceneNode, SceneRoot};
use splat_viewer::splatview::{Error, Result};

new_key_type! {
    /// Stable key of a node in a HeadlessScene
    pub struct NodeKey;
}

/// What a node reports when measured
#[derive(Debug, Clone, PartialEq)]
pub enum NodeGeometry {
    /// Pure transform node, no geometry
    Group,
    /// Precomputed local-space bounds
    Bounded(AABB),
    /// Local-space splat centers; bounds computed from the world footprint
    Points(Vec<Vec3>),
    /// Bounds not decoded yet: reports NaN until `frames_remaining` reaches 0
    Streaming { bounds: AABB, frames_remaining: u32 },
    /// Measuring always fails with this reason
    Broken(String),
}

/// One node of the headless scene
#[derive(Debug, Clone, PartialEq)]
pub struct HeadlessNode {
    /// Local transform below the root
    pub transform: Mat4,
    pub geometry: NodeGeometry,
}

impl HeadlessNode {
    pub fn group() -> Self {
        Self { transform: Mat4::IDENTITY, geometry: NodeGeometry::Group }
    }

    pub fn bounded(aabb: AABB) -> Self {
        Self { transform: Mat4::IDENTITY, geometry: NodeGeometry::Bounded(aabb) }
    }

    /// Bounded node centered at the origin with the given size
    pub fn sized(size: Vec3) -> Self {
        Self::bounded(AABB::from_center_size(Vec3::ZERO, size))
    }

    pub fn points(points: Vec<Vec3>) -> Self {
        Self { transform: Mat4::IDENTITY, geometry: NodeGeometry::Points(points) }
    }

    pub fn streaming(bounds: AABB, frames_remaining: u32) -> Self {
        Self {
            transform: Mat4::IDENTITY,
            geometry: NodeGeometry::Streaming { bounds, frames_remaining },
        }
    }

    pub fn broken(reason: impl Into<String>) -> Self {
        Self { transform: Mat4::IDENTITY, geometry: NodeGeometry::Broken(reason.into()) }
    }

    pub fn at(mut self, transform: Mat4) -> Self {
        self.transform = transform;
        self
    }
}

/// Node as seen during one traversal (world matrix resolved)
struct NodeView<'a> {
    node: &'a HeadlessNode,
    world: Mat4,
}

impl SceneNode for NodeView<'_> {
    fn world_matrix(&self) -> Mat4 {
        self.world
    }

    fn local_bounds(&self) -> Option<AABB> {
        match &self.node.geometry {
            NodeGeometry::Bounded(aabb) => Some(*aabb),
            NodeGeometry::Streaming { bounds, frames_remaining } => {
                if *frames_remaining == 0 {
                    Some(*bounds)
                } else {
                    Some(AABB::new(Vec3::NAN, Vec3::NAN))
                }
            }
            _ => None,
        }
    }

    fn world_footprint(&self) -> Result<Option<AABB>> {
        match &self.node.geometry {
            NodeGeometry::Points(points) => {
                let world: Vec<Vec3> = points
                    .iter()
                    .map(|point| self.world.transform_point3(*point))
                    .collect();
                Ok(AABB::from_points(&world))
            }
            NodeGeometry::Broken(reason) => Err(Error::BackendError(reason.clone())),
            _ => Ok(None),
        }
    }
}

/// Scene graph of a headless session
#[derive(Debug)]
pub struct HeadlessScene {
    nodes: SlotMap<NodeKey, HeadlessNode>,
    rotation: Quat,
    traversals: Cell<u32>,
}

impl HeadlessScene {
    pub fn new() -> Self {
        Self {
            nodes: SlotMap::with_key(),
            rotation: Quat::IDENTITY,
            traversals: Cell::new(0),
        }
    }

    pub fn add_node(&mut self, node: HeadlessNode) -> NodeKey {
        self.nodes.insert(node)
    }

    pub fn remove_node(&mut self, key: NodeKey) -> Option<HeadlessNode> {
        self.nodes.remove(key)
    }

    pub fn node(&self, key: NodeKey) -> Option<&HeadlessNode> {
        self.nodes.get(key)
    }

    pub fn node_mut(&mut self, key: NodeKey) -> Option<&mut HeadlessNode> {
        self.nodes.get_mut(key)
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Remove every node (the root rotation is kept)
    pub fn clear(&mut self) {
        self.nodes.clear();
    }

    /// Number of traversals so far (one per accumulation pass)
    pub fn traversal_count(&self) -> u32 {
        self.traversals.get()
    }

    /// Let streaming nodes progress by one frame
    pub fn advance_frame(&mut self) {
        for node in self.nodes.values_mut() {
            if let NodeGeometry::Streaming { frames_remaining, .. } = &mut node.geometry {
                *frames_remaining = frames_remaining.saturating_sub(1);
            }
        }
    }
}

impl Default for HeadlessScene {
    fn default() -> Self {
        Self::new()
    }
}

impl SceneRoot for HeadlessScene {
    fn rotation(&self) -> Quat {
        self.rotation
    }

    fn set_rotation(&mut self, rotation: Quat) {
        self.rotation = rotation;
    }

    fn traverse(&self, visitor: &mut dyn FnMut(&dyn SceneNode)) {
        self.traversals.set(self.traversals.get() + 1);

        let root = Mat4::from_quat(self.rotation);
        for node in self.nodes.values() {
            visitor(&NodeView { node, world: root * node.transform });
        }
    }
}

#[cfg(test)]
#[path = "headless_scene_tests.rs"]
mod tests;
