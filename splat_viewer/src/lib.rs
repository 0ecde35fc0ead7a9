/*!
# Splat Viewer

Auto-framing and orientation core for a browser-style point-cloud
("splat") viewer.

The rendering engine itself (scene graph, camera, splat loader) is consumed
through traits, so the same core drives a GPU engine in production and the
headless engine in tests.

## Architecture

- **Bounds accumulator**: measures the loaded scene node by node
- **Framing poller**: retries measurement once per frame until bounds exist
- **Camera framing**: places the camera to fit a bounding volume
- **Orientation corrector**: normalizes Z-up assets and matches the camera up vector
- **Viewer**: sequences loads, framing and the post-load up-axis heuristic

Everything asynchronous is applied from [`splatview::Viewer::on_frame`],
which the host calls once per display refresh.
*/

// Internal modules
mod error;
mod engine;
mod config;
pub mod log;
pub mod framing;
pub mod session;
pub mod orientation;
pub mod viewer;
pub mod input;
pub mod overlay;

// Main splatview namespace module
pub mod splatview {
    // Error types
    pub use crate::error::{Error, Result, LOAD_FAILURE_MESSAGE};

    // Engine services (logger)
    pub use crate::engine::Engine;

    // Configuration
    pub use crate::config::{
        BackendConfig, ClearColor, FramingConfig, HostEnvironment, ViewerConfig,
    };

    // Viewer entry point
    pub use crate::viewer::{LoadStatus, Viewer};

    // Logging sub-module (types only, NOT macros)
    pub mod log {
        pub use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger};
    }

    // Session sub-module (engine seam)
    pub mod session {
        pub use crate::session::*;
    }

    // Framing sub-module
    pub mod framing {
        pub use crate::framing::*;
    }

    // Orientation sub-module
    pub mod orientation {
        pub use crate::orientation::*;
    }

    // Viewer sub-module
    pub mod viewer {
        pub use crate::viewer::*;
    }

    // Input sub-module
    pub mod input {
        pub use crate::input::*;
    }

    // Overlay sub-module
    pub mod overlay {
        pub use crate::overlay::*;
    }
}

// Re-export math library at crate root
pub use glam;
