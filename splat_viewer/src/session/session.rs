/// Session traits - the seam between the viewer core and a splat engine
///
/// The viewer never touches engine objects directly. A backend crate
/// implements these traits over its own scene graph, camera and loader,
/// and the framing/orientation code drives them through `&mut dyn`.

use glam::{Mat4, Quat, Vec3};

use crate::config::{BackendConfig, ClearColor};
use crate::error::Result;
use crate::framing::AABB;
use crate::session::{CompletionSender, LoadRequest};

// ============================================================================
// Scene graph
// ============================================================================

/// One renderable node reachable from the scene root
pub trait SceneNode {
    /// Local-to-world transform (root rotation included)
    fn world_matrix(&self) -> Mat4;

    /// Precomputed bounds in node-local space, if the engine keeps them
    fn local_bounds(&self) -> Option<AABB>;

    /// Bounds computed from the node's world-space geometry.
    ///
    /// Only consulted when `local_bounds` is `None`. `Ok(None)` means the
    /// node has no geometry (a pure transform group, or nothing streamed
    /// yet); `Err` means the engine could not measure it.
    fn world_footprint(&self) -> Result<Option<AABB>>;
}

/// Root of the loaded scene
pub trait SceneRoot {
    /// Current root rotation
    fn rotation(&self) -> Quat;

    /// Replace the root rotation (child world transforms follow)
    fn set_rotation(&mut self, rotation: Quat);

    /// Visit every renderable node below the root.
    ///
    /// Must not mutate the scene.
    fn traverse(&self, visitor: &mut dyn FnMut(&dyn SceneNode));
}

// ============================================================================
// Camera
// ============================================================================

/// Active camera of a session
pub trait SessionCamera {
    fn up(&self) -> Vec3;

    fn set_up(&mut self, up: Vec3);

    /// Vertical field of view in degrees
    fn fov(&self) -> f32;

    fn set_fov(&mut self, fov_degrees: f32);

    fn near(&self) -> f32;

    fn far(&self) -> f32;

    fn set_clip_planes(&mut self, near: f32, far: f32);

    fn position(&self) -> Vec3;

    /// Point the camera looks at (orbit pivot)
    fn target(&self) -> Vec3;

    /// Full camera orientation, roll included
    fn orientation(&self) -> Quat;

    /// Move the camera and aim it at `target` using the current up vector.
    ///
    /// Discards any roll previously applied with `rotate_roll`.
    fn look_at(&mut self, position: Vec3, target: Vec3);

    /// Rotate about the camera's own view axis (radians)
    fn rotate_roll(&mut self, angle: f32);

    /// Rebuild the projection matrix after fov/clip/orientation changes
    fn update_projection(&mut self);
}

// ============================================================================
// Session
// ============================================================================

/// Live handle to one engine instance: scene, camera and loader.
///
/// Exactly one exists per mounted viewer. All calls happen on the
/// rendering thread; only load completions may come from elsewhere,
/// through the `CompletionSender`.
pub trait ViewerSession {
    fn camera(&self) -> &dyn SessionCamera;

    fn camera_mut(&mut self) -> &mut dyn SessionCamera;

    fn scene_root(&self) -> &dyn SceneRoot;

    fn scene_root_mut(&mut self) -> &mut dyn SceneRoot;

    /// Start fetching and decoding an asset.
    ///
    /// # Arguments
    ///
    /// * `request` - Locator, format hint and the ticket of this load
    /// * `completion` - Where to report success or failure, exactly once
    ///
    /// An `Err` here means the load could not even start; the viewer
    /// treats it like a failed completion.
    fn begin_load(&mut self, request: LoadRequest, completion: CompletionSender) -> Result<()>;

    /// Remove every loaded asset from the scene
    fn clear_assets(&mut self) -> Result<()>;

    /// Background color of the viewport
    fn set_clear_color(&mut self, color: ClearColor);

    /// Release engine resources. The session is unusable afterwards.
    fn dispose(&mut self);
}

/// Factory for sessions (one per mounted viewport)
pub trait ViewerBackend {
    type Session: ViewerSession;

    /// Create a new engine instance
    ///
    /// # Arguments
    ///
    /// * `config` - Worker/sort flags derived from the host environment
    fn create_viewer(&mut self, config: &BackendConfig) -> Result<Self::Session>;
}
