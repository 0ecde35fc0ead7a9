/// Headless session and backend
///
/// Loads never touch the network: `begin_load` parks the request and the
/// caller decides later how it ends (`resolve_load` with the nodes the
/// asset decodes to, or `fail_load`). This makes every interleaving of
/// superseded and late loads reproducible.

use rustc_hash::FxHashMap;

use splat_viewer::splatview::session::{
    CompletionSender, LoadRequest, SceneRoot, SessionCamera, ViewerBackend, ViewerSession,
};
use splat_viewer::splatview::{BackendConfig, ClearColor, Error, Result};
use splat_viewer::{engine_bail, engine_debug, engine_info};

use crate::headless_camera::HeadlessCamera;
use crate::headless_scene::{HeadlessNode, HeadlessScene, NodeKey};

/// Load waiting for the test (or demo) to decide its outcome
#[derive(Debug)]
struct PendingLoad {
    request: LoadRequest,
    completion: CompletionSender,
    /// Scene generation when the load started
    generation: u64,
}

/// In-memory engine instance
#[derive(Debug)]
pub struct HeadlessSession {
    config: BackendConfig,
    camera: HeadlessCamera,
    scene: HeadlessScene,
    clear_color: Option<ClearColor>,
    pending: FxHashMap<u64, PendingLoad>,
    /// Bumped by every `clear_assets`; loads from older generations add nothing
    generation: u64,
    loads_started: u32,
    disposed: bool,
}

impl HeadlessSession {
    pub fn new(config: BackendConfig) -> Self {
        Self {
            config,
            camera: HeadlessCamera::new(16.0 / 9.0),
            scene: HeadlessScene::new(),
            clear_color: None,
            pending: FxHashMap::default(),
            generation: 0,
            loads_started: 0,
            disposed: false,
        }
    }

    pub fn backend_config(&self) -> &BackendConfig {
        &self.config
    }

    pub fn headless_camera(&self) -> &HeadlessCamera {
        &self.camera
    }

    pub fn headless_camera_mut(&mut self) -> &mut HeadlessCamera {
        &mut self.camera
    }

    pub fn scene(&self) -> &HeadlessScene {
        &self.scene
    }

    pub fn scene_mut(&mut self) -> &mut HeadlessScene {
        &mut self.scene
    }

    pub fn clear_color(&self) -> Option<ClearColor> {
        self.clear_color
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    pub fn loads_started(&self) -> u32 {
        self.loads_started
    }

    /// Epochs of loads still waiting for an outcome, oldest first
    pub fn pending_epochs(&self) -> Vec<u64> {
        let mut epochs: Vec<u64> = self.pending.keys().copied().collect();
        epochs.sort_unstable();
        epochs
    }

    /// Request of a pending load
    pub fn pending_request(&self, epoch: u64) -> Option<&LoadRequest> {
        self.pending.get(&epoch).map(|load| &load.request)
    }

    /// Finish a pending load successfully.
    ///
    /// The nodes are added only if the scene was not cleared since the
    /// load started; the completion is reported either way.
    pub fn resolve_load(&mut self, epoch: u64, nodes: Vec<HeadlessNode>) -> Result<Vec<NodeKey>> {
        let Some(load) = self.pending.remove(&epoch) else {
            engine_bail!("splatview::Headless", "No pending load for epoch {}", epoch);
        };

        let keys = if load.generation == self.generation {
            nodes.into_iter().map(|node| self.scene.add_node(node)).collect()
        } else {
            engine_debug!(
                "splatview::Headless",
                "Load {} finished after the scene was cleared, content dropped",
                load.request.locator.url()
            );
            Vec::new()
        };

        load.completion.complete(Ok(()));
        Ok(keys)
    }

    /// Finish a pending load with an error
    pub fn fail_load(&mut self, epoch: u64, error: Error) -> Result<()> {
        let Some(load) = self.pending.remove(&epoch) else {
            engine_bail!("splatview::Headless", "No pending load for epoch {}", epoch);
        };
        load.completion.complete(Err(error));
        Ok(())
    }

    /// One display refresh worth of background decoding
    pub fn advance_frame(&mut self) {
        self.scene.advance_frame();
    }

    /// Viewport resized
    pub fn resize(&mut self, width: u32, height: u32) {
        if height > 0 {
            self.camera.set_aspect(width as f32 / height as f32);
        }
    }
}

impl ViewerSession for HeadlessSession {
    fn camera(&self) -> &dyn SessionCamera {
        &self.camera
    }

    fn camera_mut(&mut self) -> &mut dyn SessionCamera {
        &mut self.camera
    }

    fn scene_root(&self) -> &dyn SceneRoot {
        &self.scene
    }

    fn scene_root_mut(&mut self) -> &mut dyn SceneRoot {
        &mut self.scene
    }

    fn begin_load(&mut self, request: LoadRequest, completion: CompletionSender) -> Result<()> {
        if self.disposed {
            return Err(Error::InitializationFailed("session already disposed".to_string()));
        }

        let epoch = request.ticket.epoch();
        engine_debug!(
            "splatview::Headless",
            "Begin load {} (epoch {}, format {:?})",
            request.locator.url(),
            epoch,
            request.format
        );

        self.loads_started += 1;
        self.pending.insert(
            epoch,
            PendingLoad { request, completion, generation: self.generation },
        );
        Ok(())
    }

    fn clear_assets(&mut self) -> Result<()> {
        if self.disposed {
            return Err(Error::InitializationFailed("session already disposed".to_string()));
        }
        self.scene.clear();
        self.generation += 1;
        Ok(())
    }

    fn set_clear_color(&mut self, color: ClearColor) {
        self.clear_color = Some(color);
    }

    fn dispose(&mut self) {
        // Dropping the senders abandons every pending load
        self.pending.clear();
        self.scene.clear();
        self.disposed = true;
    }
}

// ============================================================================
// Backend
// ============================================================================

/// Factory for headless sessions
#[derive(Debug, Default)]
pub struct HeadlessBackend {
    created: u32,
    last_config: Option<BackendConfig>,
}

impl HeadlessBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sessions created so far
    pub fn created(&self) -> u32 {
        self.created
    }

    /// Config passed to the most recent `create_viewer`
    pub fn last_config(&self) -> Option<BackendConfig> {
        self.last_config
    }
}

impl ViewerBackend for HeadlessBackend {
    type Session = HeadlessSession;

    fn create_viewer(&mut self, config: &BackendConfig) -> Result<HeadlessSession> {
        self.created += 1;
        self.last_config = Some(*config);
        engine_info!(
            "splatview::Headless",
            "Created headless session #{} (shared worker memory: {}, GPU sort: {})",
            self.created,
            config.shared_memory_for_workers,
            config.gpu_accelerated_sort
        );
        Ok(HeadlessSession::new(*config))
    }
}

#[cfg(test)]
#[path = "headless_session_tests.rs"]
mod tests;
