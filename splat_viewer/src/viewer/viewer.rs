/// Viewer - load orchestration on top of one engine session
///
/// Owns the session, the load state machine, the framing request in
/// flight and the deferred task queue. The host calls `on_frame` once per
/// display refresh; that is the only place asynchronous results (load
/// completions, retries, settle delays) are applied, so every mutation of
/// the scene and camera happens on the rendering thread.

use std::sync::mpsc::{Receiver, Sender};
use std::time::Duration;
use winit::event::ElementState;
use winit::keyboard::Key;

use crate::config::{BackendConfig, HostEnvironment, ViewerConfig};
use crate::error::{Error, Result};
use crate::framing::{compute_bounds, place_camera, BoundsReport, FramingRequest, PollOutcome};
use crate::input::{route_key, InputFocus, KeyDisposition, ViewerAction};
use crate::orientation::{apply_orientation, classify_up_axis, OrientationState, UpAxis};
use crate::session::{
    completion_channel, AssetLocator, CompletionSender, LoadCompletion, LoadRequest, LoadTicket,
    SceneFormat, ViewerBackend, ViewerSession,
};
use crate::{engine_debug, engine_info, engine_warn};
use super::load_state::LoadState;
use super::scheduler::{DeferredTask, FrameScheduler};

/// Counters for problems the viewer recovered from on its own
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewerDiagnostics {
    /// Framing requests that ended in the fallback placement
    pub fallback_framings: u32,
    /// Completions discarded because a newer load had started
    pub stale_completions: u32,
    /// Most recent recovered error (`DegenerateScene` or `StaleCompletion`)
    pub last_recovered: Option<Error>,
    /// Report of the most recent accumulation pass
    pub last_bounds: Option<BoundsReport>,
}

/// One mounted splat viewer
pub struct Viewer<S: ViewerSession> {
    session: S,
    config: ViewerConfig,
    orientation: OrientationState,
    /// The user picked an axis since the last `load_scene`
    axis_overridden: bool,
    epoch: u64,
    load: LoadState,
    framing: Option<FramingRequest>,
    scheduler: FrameScheduler,
    completion_tx: Sender<LoadCompletion>,
    completion_rx: Receiver<LoadCompletion>,
    diagnostics: ViewerDiagnostics,
    disposed: bool,
}

impl<S: ViewerSession> Viewer<S> {
    /// Create the engine session and place the initial camera.
    ///
    /// # Arguments
    ///
    /// * `backend` - Engine factory
    /// * `host` - Host capabilities (cross-origin isolation)
    /// * `config` - Viewer configuration
    pub fn mount<B>(backend: &mut B, host: &HostEnvironment, config: ViewerConfig) -> Result<Self>
    where
        B: ViewerBackend<Session = S>,
    {
        let backend_config = BackendConfig::for_host(host);
        engine_info!(
            "splatview::Viewer",
            "Mounting viewer (shared worker memory: {}, GPU sort: {})",
            backend_config.shared_memory_for_workers,
            backend_config.gpu_accelerated_sort
        );

        let session = backend.create_viewer(&backend_config)?;
        Ok(Self::with_session(session, config))
    }

    /// Wrap an already created session
    pub fn with_session(mut session: S, config: ViewerConfig) -> Self {
        let orientation = OrientationState::new(config.flip_roll);
        place_camera(
            session.camera_mut(),
            config.initial_position,
            config.initial_target,
            orientation.roll_flipped,
        );

        let (completion_tx, completion_rx) = completion_channel();
        Self {
            session,
            config,
            orientation,
            axis_overridden: false,
            epoch: 0,
            load: LoadState::new(),
            framing: None,
            scheduler: FrameScheduler::new(),
            completion_tx,
            completion_rx,
            diagnostics: ViewerDiagnostics::default(),
            disposed: false,
        }
    }

    // ===== UI API =====

    /// Replace the scene with a new asset.
    ///
    /// Clears the current scene first, even if its own load never
    /// finished. Any framing, retry or settle task of the previous load is
    /// cancelled, and its completion will be discarded when it arrives.
    /// Without an explicit `format` the locator's suffix decides; unknown
    /// suffixes load without a hint.
    pub fn load_scene(&mut self, locator: AssetLocator, format: Option<SceneFormat>) -> LoadTicket {
        self.epoch += 1;
        let ticket = LoadTicket::new(self.epoch);

        self.framing = None;
        self.scheduler.clear();
        self.axis_overridden = false;

        if let Err(err) = self.session.clear_assets() {
            engine_warn!("splatview::Viewer", "Clearing previous scene failed: {}", err);
        }
        if self.orientation.axis != UpAxis::Y {
            self.orient(UpAxis::Y, false);
        }

        let format = format.or_else(|| locator.inferred_format());
        let name = locator.display_name();
        engine_info!(
            "splatview::Viewer",
            "Loading '{}' (epoch {}, format {})",
            name,
            ticket.epoch(),
            format.map_or_else(|| "auto".to_string(), |f| f.to_string())
        );
        self.load.begin(ticket, name);

        let request = LoadRequest { ticket, locator, format, show_loading_ui: true };
        let completion = CompletionSender::new(ticket, self.completion_tx.clone());
        if let Err(err) = self.session.begin_load(request, completion) {
            self.fail_load(err);
        }

        ticket
    }

    /// Frame the current scene again
    pub fn reset_view(&mut self) {
        self.start_framing();
    }

    /// Normalize the scene to `axis` and reframe (now and next frame).
    ///
    /// The choice holds until the next load; the settle-delay heuristic
    /// will not override it.
    pub fn set_up_axis(&mut self, axis: UpAxis) {
        self.axis_overridden = true;
        self.orient(axis, true);
    }

    /// Change the roll preference; takes effect at the next placement
    pub fn set_roll_flipped(&mut self, roll_flipped: bool) {
        self.orientation.roll_flipped = roll_flipped;
    }

    /// Route a keyboard event and run the bound action, if any.
    ///
    /// The returned disposition tells the host whether to stop the event.
    pub fn handle_key(&mut self, key: &Key, state: ElementState, focus: InputFocus) -> KeyDisposition {
        let disposition = route_key(key, state, focus);
        if let KeyDisposition::Handled(action) = disposition {
            match action {
                ViewerAction::SetUpAxis(axis) => self.set_up_axis(axis),
                ViewerAction::ResetView => self.reset_view(),
            }
        }
        disposition
    }

    // ===== FRAME DRIVER =====

    /// Advance one display refresh.
    ///
    /// # Arguments
    ///
    /// * `now` - Monotonic frame time (any fixed origin)
    pub fn on_frame(&mut self, now: Duration) {
        if self.disposed {
            return;
        }

        // Snapshot first: work queued during this frame waits for the next
        let due = self.scheduler.take_due(now, self.epoch);

        if self.framing.is_some() {
            self.step_framing();
        }

        let completions: Vec<LoadCompletion> = self.completion_rx.try_iter().collect();
        for completion in completions {
            self.apply_completion(completion, now);
        }

        for task in due {
            match task {
                DeferredTask::Reframe => self.start_framing(),
                DeferredTask::ClassifyUpAxis => self.classify_scene(),
            }
        }
    }

    // ===== ACCESSORS =====

    pub fn status(&self) -> &LoadState {
        &self.load
    }

    pub fn orientation(&self) -> OrientationState {
        self.orientation
    }

    /// Generation counter, advanced by every `load_scene`
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    pub fn diagnostics(&self) -> &ViewerDiagnostics {
        &self.diagnostics
    }

    pub fn config(&self) -> &ViewerConfig {
        &self.config
    }

    /// True while a framing request is waiting for bounds
    pub fn is_framing(&self) -> bool {
        self.framing.is_some()
    }

    /// Deferred tasks still queued
    pub fn pending_tasks(&self) -> usize {
        self.scheduler.len()
    }

    pub fn session(&self) -> &S {
        &self.session
    }

    /// Direct engine access for the host (scripting loads in tests, resize)
    pub fn session_mut(&mut self) -> &mut S {
        &mut self.session
    }

    /// Dispose the engine session and drop the viewer
    pub fn unmount(mut self) {
        self.dispose();
    }

    // ===== INTERNALS =====

    fn dispose(&mut self) {
        if !self.disposed {
            self.disposed = true;
            self.framing = None;
            self.scheduler.clear();
            self.session.dispose();
            engine_info!("splatview::Viewer", "Viewer disposed");
        }
    }

    fn apply_completion(&mut self, completion: LoadCompletion, now: Duration) {
        let ticket_epoch = completion.ticket.epoch();
        if ticket_epoch != self.epoch {
            let error = Error::StaleCompletion { ticket_epoch, current_epoch: self.epoch };
            engine_warn!("splatview::Viewer", "{}, discarded", error);
            self.diagnostics.stale_completions += 1;
            self.diagnostics.last_recovered = Some(error);
            return;
        }

        if self.load.pending_ticket() != Some(completion.ticket) {
            engine_debug!(
                "splatview::Viewer",
                "Ignoring repeated completion for epoch {}",
                ticket_epoch
            );
            return;
        }

        match completion.result {
            Ok(()) => self.finish_load(now),
            Err(err) => self.fail_load(err),
        }
    }

    fn finish_load(&mut self, now: Duration) {
        self.load.succeed();
        engine_info!("splatview::Viewer", "Scene '{}' ready", self.load.display_name());

        self.start_framing();
        self.scheduler.schedule_next_frame(DeferredTask::Reframe, self.epoch);
        self.scheduler.schedule_at(
            DeferredTask::ClassifyUpAxis,
            now + self.config.settle_delay,
            self.epoch,
        );
    }

    fn fail_load(&mut self, err: Error) {
        engine_warn!("splatview::Viewer", "Load failed: {}", err);
        self.load.fail(&err);
    }

    /// Replace any framing request with a new one and step it immediately
    fn start_framing(&mut self) {
        self.framing = Some(FramingRequest::new(self.config.retry_ceiling));
        self.step_framing();
    }

    fn step_framing(&mut self) {
        let Some(mut request) = self.framing.take() else {
            return;
        };

        let outcome = request.poll(&mut self.session, &self.config, self.orientation.roll_flipped);
        self.diagnostics.last_bounds = request.last_report().cloned();

        match outcome {
            PollOutcome::Pending { .. } => self.framing = Some(request),
            PollOutcome::Framed(_) => {}
            PollOutcome::Fallback(error) => {
                self.diagnostics.fallback_framings += 1;
                self.diagnostics.last_recovered = Some(error);
            }
        }
    }

    fn orient(&mut self, axis: UpAxis, reframe: bool) {
        apply_orientation(&mut self.session, axis);
        self.orientation.axis = axis;

        if reframe {
            self.start_framing();
            self.scheduler.schedule_next_frame(DeferredTask::Reframe, self.epoch);
        }
    }

    fn classify_scene(&mut self) {
        if self.axis_overridden {
            engine_debug!(
                "splatview::Orientation",
                "Keeping user-selected {}, skipping classification",
                self.orientation.axis
            );
            return;
        }

        let report = compute_bounds(self.session.scene_root());
        let size = report.volume.size();
        self.diagnostics.last_bounds = Some(report);

        match classify_up_axis(size, self.config.up_axis_ratio) {
            Some(axis) => {
                engine_info!(
                    "splatview::Orientation",
                    "Classified scene as {} (size {:?})",
                    axis,
                    size
                );
                self.orient(axis, true);
            }
            None => engine_debug!(
                "splatview::Orientation",
                "No usable bounds after settle delay, keeping {}",
                self.orientation.axis
            ),
        }
    }
}

impl<S: ViewerSession> Drop for Viewer<S> {
    fn drop(&mut self) {
        self.dispose();
    }
}

#[cfg(test)]
#[path = "viewer_tests.rs"]
mod tests;
