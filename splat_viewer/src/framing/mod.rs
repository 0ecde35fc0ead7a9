//! Scene measurement and camera framing

mod accumulator;
mod bounds;
mod camera_framing;
mod poller;

pub use accumulator::{compute_bounds, node_bounds, BoundsReport, NodeBoundsError};
pub use bounds::{BoundingVolume, AABB};
pub use camera_framing::{
    apply_fallback, apply_roll_correction, frame, look_rotation, place_camera, FramingSolution,
};
pub use poller::{FramingRequest, PollOutcome};
