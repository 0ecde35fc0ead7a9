//! 2D overlay models drawn over the viewport
//!
//! Geometry and colors only; drawing is up to the host.

mod gauge;
mod hazard;
mod pins;

pub use gauge::{BadgeTone, GaugeLevel};
pub use hazard::{
    CanvasSize, HazardLevel, HazardOverlay, HazardStyle, OverlayColor, OverlayRect,
    DEFAULT_HAZARD_OPACITY, HAZARD_MAX_HEIGHT, HAZARD_MAX_WIDTH, HAZARD_STROKE_WIDTH,
};
pub use pins::{
    pick_position, Pin, PinBoard, PinKey, PinKind, PinPlacement, PIN_OUTLINE_COLOR,
    PIN_OUTLINE_WIDTH, PIN_RADIUS,
};
