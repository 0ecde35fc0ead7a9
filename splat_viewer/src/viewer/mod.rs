//! Viewer orchestration: load state machine, frame-driven scheduling

mod load_state;
mod scheduler;
mod viewer;

pub use load_state::{LoadPhase, LoadState, LoadStatus, NO_SCENE_NAME};
pub use scheduler::{DeferredTask, FrameScheduler};
pub use viewer::{Viewer, ViewerDiagnostics};
