/// Viewer hotkeys and focus gating
///
/// The host forwards keyboard events here before anything else sees them.
/// While a modal or a form field has focus, navigation and orientation keys
/// are swallowed on both press and release so typing never moves the
/// camera. Otherwise Y/Z/R map to viewer actions and everything else is
/// left to the engine's own camera controls.

use bitflags::bitflags;
use winit::event::ElementState;
use winit::keyboard::{Key, NamedKey};

use crate::orientation::UpAxis;

bitflags! {
    /// What currently holds keyboard focus in the host UI
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct InputFocus: u8 {
        /// A modal dialog is open (e.g. the report pin form)
        const MODAL_OPEN = 1 << 0;
        /// A text input or textarea has focus
        const TEXT_FIELD = 1 << 1;
        /// A select box has focus
        const SELECT_FIELD = 1 << 2;
    }
}

impl InputFocus {
    /// True when viewer keys must not reach the viewer
    pub fn blocks_viewer_keys(&self) -> bool {
        !self.is_empty()
    }
}

/// Action triggered by a viewer hotkey
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewerAction {
    SetUpAxis(UpAxis),
    ResetView,
}

/// What the host should do with a key event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyDisposition {
    /// Swallow it: stop propagation and prevent the default
    Blocked,
    /// The viewer acted on it
    Handled(ViewerAction),
    /// Not ours; let it through
    PassThrough,
}

/// Lowercase character of a single-character key
fn key_char(key: &Key) -> Option<char> {
    match key {
        Key::Character(text) => {
            let mut chars = text.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => Some(c.to_ascii_lowercase()),
                _ => None,
            }
        }
        _ => None,
    }
}

/// Movement, arrow, space and orientation keys
pub fn is_viewer_key(key: &Key) -> bool {
    match key {
        Key::Named(
            NamedKey::ArrowUp
            | NamedKey::ArrowDown
            | NamedKey::ArrowLeft
            | NamedKey::ArrowRight
            | NamedKey::Space,
        ) => true,
        _ => matches!(key_char(key), Some('w' | 'a' | 's' | 'd' | ' ' | 'y' | 'z' | 'r')),
    }
}

/// Action bound to a key, case-insensitive
pub fn action_for(key: &Key) -> Option<ViewerAction> {
    match key_char(key)? {
        'y' => Some(ViewerAction::SetUpAxis(UpAxis::Y)),
        'z' => Some(ViewerAction::SetUpAxis(UpAxis::Z)),
        'r' => Some(ViewerAction::ResetView),
        _ => None,
    }
}

/// Decide what happens to one key event.
///
/// Actions fire on press only; releases of bound keys pass through.
pub fn route_key(key: &Key, state: ElementState, focus: InputFocus) -> KeyDisposition {
    if focus.blocks_viewer_keys() && is_viewer_key(key) {
        return KeyDisposition::Blocked;
    }

    match (state, action_for(key)) {
        (ElementState::Pressed, Some(action)) => KeyDisposition::Handled(action),
        _ => KeyDisposition::PassThrough,
    }
}

#[cfg(test)]
#[path = "hotkeys_tests.rs"]
mod tests;
