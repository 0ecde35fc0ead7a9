//! Up-axis detection and scene orientation

mod corrector;
mod up_axis;

pub use corrector::{apply_orientation, classify_up_axis};
pub use up_axis::{OrientationState, UpAxis};
