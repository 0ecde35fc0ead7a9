//! Viewer configuration
//!
//! Plain data with `Default` impls carrying the reference constants.
//! Nothing here is read from the environment; the host builds a config,
//! optionally adjusts it with the `with_*` helpers, and hands it to
//! `Viewer::mount`.

use std::time::Duration;
use glam::Vec3;

// ===== CLEAR COLOR =====

/// Background color applied by the framing engine
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClearColor {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl ClearColor {
    /// Build from a `0xRRGGBB` value and an alpha.
    pub fn from_hex(rgb: u32, alpha: f32) -> Self {
        Self {
            r: ((rgb >> 16) & 0xff) as f32 / 255.0,
            g: ((rgb >> 8) & 0xff) as f32 / 255.0,
            b: (rgb & 0xff) as f32 / 255.0,
            a: alpha,
        }
    }

    /// Light tone used after every framing (`#f5f7fb`)
    pub fn light() -> Self {
        Self::from_hex(0xf5f7fb, 1.0)
    }
}

// ===== FRAMING =====

/// Constants used by the camera framing engine
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FramingConfig {
    /// Vertical field of view forced on every framing (degrees)
    pub fov_degrees: f32,
    /// Multiplier on the largest extent before fitting
    pub padding: f32,
    /// Multiplier on the fit distance when placing the camera
    pub distance_scale: f32,
    /// Oblique viewing direction (normalized at use), same for every up axis
    pub view_direction: Vec3,
    /// Smallest near plane
    pub near_min: f32,
    /// Near plane as a fraction of the fit distance
    pub near_ratio: f32,
    /// Far plane as a multiple of the fit distance
    pub far_ratio: f32,
    /// Minimum gap between near and far planes
    pub far_min_span: f32,
}

impl Default for FramingConfig {
    fn default() -> Self {
        Self {
            fov_degrees: 45.0,
            padding: 1.2,
            distance_scale: 2.0,
            view_direction: Vec3::new(-0.9, 0.6, -0.9),
            near_min: 0.01,
            near_ratio: 0.001,
            far_ratio: 20.0,
            far_min_span: 1.0,
        }
    }
}

// ===== VIEWER =====

/// Per-viewer configuration
#[derive(Debug, Clone, PartialEq)]
pub struct ViewerConfig {
    /// Apply a 180° roll about the view axis after every camera placement
    pub flip_roll: bool,
    /// Number of per-refresh retries before fallback framing
    pub retry_ceiling: u32,
    /// Delay between a successful load and up-axis classification
    pub settle_delay: Duration,
    /// `size.z > size.y * up_axis_ratio` classifies an asset as Z-up
    pub up_axis_ratio: f32,
    /// Framing constants
    pub framing: FramingConfig,
    /// Background applied after framing
    pub clear_color: ClearColor,
    /// Camera position when bounds never become available
    pub fallback_position: Vec3,
    /// Look target when bounds never become available
    pub fallback_target: Vec3,
    /// Camera position right after mount
    pub initial_position: Vec3,
    /// Look target right after mount
    pub initial_target: Vec3,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            flip_roll: true,
            retry_ceiling: 30,
            settle_delay: Duration::from_millis(80),
            up_axis_ratio: 1.5,
            framing: FramingConfig::default(),
            clear_color: ClearColor::light(),
            fallback_position: Vec3::new(3.0, 2.0, 3.0),
            fallback_target: Vec3::ZERO,
            initial_position: Vec3::new(-2.2, 1.8, -1.6),
            initial_target: Vec3::ZERO,
        }
    }
}

impl ViewerConfig {
    pub fn with_flip_roll(mut self, flip_roll: bool) -> Self {
        self.flip_roll = flip_roll;
        self
    }

    pub fn with_retry_ceiling(mut self, retry_ceiling: u32) -> Self {
        self.retry_ceiling = retry_ceiling;
        self
    }

    pub fn with_settle_delay(mut self, settle_delay: Duration) -> Self {
        self.settle_delay = settle_delay;
        self
    }

    pub fn with_framing(mut self, framing: FramingConfig) -> Self {
        self.framing = framing;
        self
    }
}

// ===== HOST / BACKEND =====

/// Capabilities reported by the hosting page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HostEnvironment {
    /// Whether the page runs in a cross-origin isolated context
    pub cross_origin_isolated: bool,
}

/// Flags passed to the rendering engine when a viewer is created
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BackendConfig {
    /// Share memory between sort/decode workers (needs cross-origin isolation)
    pub shared_memory_for_workers: bool,
    /// Sort splats on the GPU (needs cross-origin isolation)
    pub gpu_accelerated_sort: bool,
}

impl BackendConfig {
    /// Derive engine flags from host capabilities.
    ///
    /// Shared-memory workers and GPU sorting both require an isolated
    /// context; outside one they are disabled.
    pub fn for_host(host: &HostEnvironment) -> Self {
        Self {
            shared_memory_for_workers: host.cross_origin_isolated,
            gpu_accelerated_sort: host.cross_origin_isolated,
        }
    }
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self::for_host(&HostEnvironment::default())
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
