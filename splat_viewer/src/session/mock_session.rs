/// Mock session for unit tests (no splat engine required)
///
/// Records what the viewer core asks of the engine so tests can assert
/// on it, and lets tests script scene contents and load outcomes.

use std::cell::Cell;
use glam::{Mat4, Quat, Vec3};

use crate::config::{BackendConfig, ClearColor};
use crate::error::{Error, Result};
use crate::framing::{look_rotation, AABB};
use crate::session::{
    CompletionSender, LoadRequest, SceneNode, SceneRoot, SessionCamera, ViewerBackend,
    ViewerSession,
};

// ============================================================================
// Mock Camera
// ============================================================================

#[derive(Debug, Clone)]
pub struct MockCamera {
    pub up: Vec3,
    pub fov: f32,
    pub near: f32,
    pub far: f32,
    pub position: Vec3,
    pub target: Vec3,
    pub orientation: Quat,
    pub projection_updates: u32,
}

impl MockCamera {
    pub fn new() -> Self {
        Self {
            up: Vec3::Y,
            fov: 50.0,
            near: 0.1,
            far: 1000.0,
            position: Vec3::new(0.0, 0.0, 5.0),
            target: Vec3::ZERO,
            orientation: Quat::IDENTITY,
            projection_updates: 0,
        }
    }
}

impl SessionCamera for MockCamera {
    fn up(&self) -> Vec3 { self.up }
    fn set_up(&mut self, up: Vec3) { self.up = up; }
    fn fov(&self) -> f32 { self.fov }
    fn set_fov(&mut self, fov_degrees: f32) { self.fov = fov_degrees; }
    fn near(&self) -> f32 { self.near }
    fn far(&self) -> f32 { self.far }

    fn set_clip_planes(&mut self, near: f32, far: f32) {
        self.near = near;
        self.far = far;
    }

    fn position(&self) -> Vec3 { self.position }
    fn target(&self) -> Vec3 { self.target }
    fn orientation(&self) -> Quat { self.orientation }

    fn look_at(&mut self, position: Vec3, target: Vec3) {
        self.position = position;
        self.target = target;
        self.orientation = look_rotation(position, target, self.up);
    }

    fn rotate_roll(&mut self, angle: f32) {
        self.orientation = (self.orientation * Quat::from_rotation_z(angle)).normalize();
    }

    fn update_projection(&mut self) {
        self.projection_updates += 1;
    }
}

// ============================================================================
// Mock Scene
// ============================================================================

/// Scripted node: a local transform plus what the engine would report
#[derive(Debug, Clone)]
pub struct MockNode {
    pub transform: Mat4,
    pub local_bounds: Option<AABB>,
    /// Local-space footprint, transformed on request
    pub footprint: Result<Option<AABB>>,
}

impl MockNode {
    pub fn with_local_bounds(aabb: AABB) -> Self {
        Self { transform: Mat4::IDENTITY, local_bounds: Some(aabb), footprint: Ok(None) }
    }

    pub fn with_footprint(aabb: AABB) -> Self {
        Self { transform: Mat4::IDENTITY, local_bounds: None, footprint: Ok(Some(aabb)) }
    }

    pub fn group() -> Self {
        Self { transform: Mat4::IDENTITY, local_bounds: None, footprint: Ok(None) }
    }

    pub fn broken(reason: &str) -> Self {
        Self {
            transform: Mat4::IDENTITY,
            local_bounds: None,
            footprint: Err(Error::BackendError(reason.to_string())),
        }
    }

    pub fn at(mut self, transform: Mat4) -> Self {
        self.transform = transform;
        self
    }
}

struct MockNodeView<'a> {
    node: &'a MockNode,
    world: Mat4,
}

impl SceneNode for MockNodeView<'_> {
    fn world_matrix(&self) -> Mat4 {
        self.world
    }

    fn local_bounds(&self) -> Option<AABB> {
        self.node.local_bounds
    }

    fn world_footprint(&self) -> Result<Option<AABB>> {
        self.node
            .footprint
            .clone()
            .map(|aabb| aabb.map(|aabb| aabb.transformed(&self.world)))
    }
}

#[derive(Debug)]
pub struct MockScene {
    pub rotation: Quat,
    pub nodes: Vec<MockNode>,
    pub traversals: Cell<u32>,
}

impl MockScene {
    pub fn new() -> Self {
        Self { rotation: Quat::IDENTITY, nodes: Vec::new(), traversals: Cell::new(0) }
    }

    pub fn with_nodes(nodes: Vec<MockNode>) -> Self {
        Self { nodes, ..Self::new() }
    }
}

impl SceneRoot for MockScene {
    fn rotation(&self) -> Quat {
        self.rotation
    }

    fn set_rotation(&mut self, rotation: Quat) {
        self.rotation = rotation;
    }

    fn traverse(&self, visitor: &mut dyn FnMut(&dyn SceneNode)) {
        self.traversals.set(self.traversals.get() + 1);
        let root = Mat4::from_quat(self.rotation);
        for node in &self.nodes {
            visitor(&MockNodeView { node, world: root * node.transform });
        }
    }
}

// ============================================================================
// Mock Session
// ============================================================================

pub struct MockSession {
    pub camera: MockCamera,
    pub scene: MockScene,
    pub clear_color: Option<ClearColor>,
    pub requests: Vec<LoadRequest>,
    pub pending: Vec<CompletionSender>,
    pub clear_calls: u32,
    pub fail_begin_load: bool,
    pub disposed: bool,
}

impl MockSession {
    pub fn new() -> Self {
        Self {
            camera: MockCamera::new(),
            scene: MockScene::new(),
            clear_color: None,
            requests: Vec::new(),
            pending: Vec::new(),
            clear_calls: 0,
            fail_begin_load: false,
            disposed: false,
        }
    }

    pub fn with_nodes(nodes: Vec<MockNode>) -> Self {
        Self { scene: MockScene::with_nodes(nodes), ..Self::new() }
    }

    /// Report the oldest pending load
    pub fn complete_oldest(&mut self, result: Result<()>) -> bool {
        if self.pending.is_empty() {
            return false;
        }
        self.pending.remove(0).complete(result)
    }

    /// Report the newest pending load
    pub fn complete_latest(&mut self, result: Result<()>) -> bool {
        match self.pending.pop() {
            Some(sender) => sender.complete(result),
            None => false,
        }
    }
}

impl ViewerSession for MockSession {
    fn camera(&self) -> &dyn SessionCamera { &self.camera }
    fn camera_mut(&mut self) -> &mut dyn SessionCamera { &mut self.camera }
    fn scene_root(&self) -> &dyn SceneRoot { &self.scene }
    fn scene_root_mut(&mut self) -> &mut dyn SceneRoot { &mut self.scene }

    fn begin_load(&mut self, request: LoadRequest, completion: CompletionSender) -> Result<()> {
        if self.fail_begin_load {
            return Err(Error::TransportError("mock refused the request".to_string()));
        }
        self.requests.push(request);
        self.pending.push(completion);
        Ok(())
    }

    fn clear_assets(&mut self) -> Result<()> {
        self.clear_calls += 1;
        self.scene.nodes.clear();
        Ok(())
    }

    fn set_clear_color(&mut self, color: ClearColor) {
        self.clear_color = Some(color);
    }

    fn dispose(&mut self) {
        self.disposed = true;
    }
}

// ============================================================================
// Mock Backend
// ============================================================================

#[derive(Default)]
pub struct MockBackend {
    pub configs: Vec<BackendConfig>,
    pub fail: bool,
}

impl ViewerBackend for MockBackend {
    type Session = MockSession;

    fn create_viewer(&mut self, config: &BackendConfig) -> Result<MockSession> {
        if self.fail {
            return Err(Error::InitializationFailed("mock backend unavailable".to_string()));
        }
        self.configs.push(*config);
        Ok(MockSession::new())
    }
}
