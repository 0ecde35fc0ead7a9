//! Keyboard routing

mod hotkeys;

pub use hotkeys::{action_for, is_viewer_key, route_key, InputFocus, KeyDisposition, ViewerAction};
