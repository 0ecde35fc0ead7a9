//! Splat viewer demo
//!
//! Drives a viewer over the headless engine through one complete load:
//! a Z-up flood scan arrives, is framed, classified after the settle delay,
//! then the user pins a flood depth reading and resets the view.
//!
//! Run with: RUST_LOG=debug cargo run -p splat_viewer_demo

use std::time::Duration;

use glam::{Vec2, Vec3};
use splat_viewer::splatview::log::{LogEntry, LogSeverity, Logger};
use splat_viewer::splatview::framing::AABB;
use splat_viewer::splatview::overlay::{pick_position, CanvasSize, HazardOverlay, PinBoard, PinKind};
use splat_viewer::splatview::session::{AssetLocator, SessionCamera};
use splat_viewer::splatview::{Engine, HostEnvironment, Viewer, ViewerConfig};
use splat_viewer_headless::{HeadlessBackend, HeadlessNode};

/// Forwards engine log entries to the `log` facade
struct LogBridge;

impl Logger for LogBridge {
    fn log(&self, entry: &LogEntry) {
        let level = match entry.severity {
            LogSeverity::Trace => log::Level::Trace,
            LogSeverity::Debug => log::Level::Debug,
            LogSeverity::Info => log::Level::Info,
            LogSeverity::Warn => log::Level::Warn,
            LogSeverity::Error => log::Level::Error,
        };
        match (entry.file, entry.line) {
            (Some(file), Some(line)) => {
                log::log!(target: entry.source.as_str(), level, "{} ({}:{})", entry.message, file, line)
            }
            _ => log::log!(target: entry.source.as_str(), level, "{}", entry.message),
        }
    }
}

const FRAME: Duration = Duration::from_millis(16);

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    Engine::set_logger(LogBridge);

    let mut backend = HeadlessBackend::new();
    let host = HostEnvironment { cross_origin_isolated: true };
    let mut viewer = match Viewer::mount(&mut backend, &host, ViewerConfig::default()) {
        Ok(viewer) => viewer,
        Err(err) => {
            log::error!("Failed to mount viewer: {}", err);
            return;
        }
    };

    let ticket = viewer.load_scene(AssetLocator::remote("https://data.example/scans/flood.ksplat"), None);
    log::info!(
        "Status: {} ({})",
        viewer.status().status(),
        viewer.status().pending_name().unwrap_or_default()
    );

    let mut now = Duration::ZERO;
    let flood_scan = HeadlessNode::streaming(
        AABB::from_center_size(Vec3::ZERO, Vec3::new(4.0, 2.0, 8.0)),
        3,
    );
    if let Err(err) = viewer.session_mut().resolve_load(ticket.epoch(), vec![flood_scan]) {
        log::error!("Could not resolve load: {}", err);
        return;
    }

    for _ in 0..12 {
        now += FRAME;
        viewer.session_mut().advance_frame();
        viewer.on_frame(now);
    }

    let camera = viewer.session().headless_camera();
    log::info!("Status: {} ({})", viewer.status().status(), viewer.status().display_name());
    log::info!("Up axis: {}", viewer.orientation().axis);
    log::info!(
        "Camera at {:?} looking at {:?}, fov {}, near {:.3}, far {:.1}",
        camera.position(),
        camera.target(),
        camera.fov(),
        camera.near(),
        camera.far()
    );

    // Overlay state as the page would render it
    let canvas = CanvasSize::from_client(1280.0, 720.0);
    let hazard = HazardOverlay::default();
    if let Some(style) = hazard.layout(canvas) {
        log::info!("Hazard box {:?} stroke {} fill {}", style.rect, style.stroke, style.fill);
    }

    let mut pins = PinBoard::new();
    pins.toggle_pin_mode();
    let canvas_extent = Vec2::new(canvas.width as f32, canvas.height as f32);
    if let Some(position) = pick_position(Vec2::new(640.0, 360.0), Vec2::ZERO, canvas_extent) {
        pins.click(position);
    }
    if let Some(key) = pins.submit(PinKind::FloodDepth, "  Water at the door ", Some(35.0)) {
        if let Some(pin) = pins.get(key) {
            log::info!(
                "Pinned {:?} ({}, {:?} cm) at {:?}",
                pin.message,
                pin.kind.label(),
                pin.height_cm,
                pin.screen_position(canvas)
            );
        }
    }

    viewer.reset_view();
    viewer.unmount();
}
