#![allow(dead_code)]
//! Headless test utilities - viewer mounting and a fake frame clock
//!
//! Every integration test drives a real `Viewer` over the headless engine.
//! Loads stay pending until the test resolves them through the session, and
//! time only moves when the test ticks the clock, so each test controls the
//! exact interleaving of completions, retries and settle delays.

use std::time::Duration;

use splat_viewer::glam::Vec3;
use splat_viewer::splatview::session::AssetLocator;
use splat_viewer::splatview::{HostEnvironment, Viewer, ViewerConfig};
use splat_viewer_headless::{HeadlessBackend, HeadlessNode, HeadlessSession, NodeKey};

/// One display refresh at 60 Hz
pub const FRAME: Duration = Duration::from_millis(16);

pub type HeadlessViewer = Viewer<HeadlessSession>;

/// Mount a viewer on a fresh headless backend
pub fn mount_viewer(config: ViewerConfig) -> HeadlessViewer {
    let mut backend = HeadlessBackend::new();
    Viewer::mount(&mut backend, &HostEnvironment::default(), config)
        .expect("Headless mount should never fail")
}

/// Monotonic frame clock driven by the test
pub struct FrameClock {
    now: Duration,
}

impl FrameClock {
    pub fn new() -> Self {
        Self { now: Duration::ZERO }
    }

    pub fn now(&self) -> Duration {
        self.now
    }

    /// Advance one refresh: streaming content progresses, then the viewer runs
    pub fn tick(&mut self, viewer: &mut HeadlessViewer) {
        self.now += FRAME;
        viewer.session_mut().advance_frame();
        viewer.on_frame(self.now);
    }

    pub fn run(&mut self, viewer: &mut HeadlessViewer, frames: u32) {
        for _ in 0..frames {
            self.tick(viewer);
        }
    }

    /// Run long enough for every deferred task of the last load to fire
    pub fn settle(&mut self, viewer: &mut HeadlessViewer) {
        let frames = (viewer.config().settle_delay.as_millis() / FRAME.as_millis()) as u32 + 4;
        self.run(viewer, frames);
    }
}

/// Start loading `url` and resolve it immediately with `nodes`
pub fn load_and_resolve(
    viewer: &mut HeadlessViewer,
    url: &str,
    nodes: Vec<HeadlessNode>,
) -> Vec<NodeKey> {
    let ticket = viewer.load_scene(AssetLocator::remote(url), None);
    viewer
        .session_mut()
        .resolve_load(ticket.epoch(), nodes)
        .expect("Load should be pending")
}

/// Component-wise comparison with an absolute tolerance
pub fn assert_vec3_near(actual: Vec3, expected: Vec3, tolerance: f32) {
    assert!(
        (actual - expected).abs().max_element() <= tolerance,
        "expected {:?}, got {:?}",
        expected,
        actual
    );
}
