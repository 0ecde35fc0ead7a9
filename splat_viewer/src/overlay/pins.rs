/// Citizen report pins
///
/// Pins are stored in normalized viewport coordinates so they stay put
/// across resizes. Placing one is a small state machine: arm pin mode,
/// click the viewport (opens the report form), then submit or cancel.
/// While the form is open the viewer's hotkeys must stay blocked; see
/// [`PinBoard::input_focus`].

use chrono::{DateTime, Utc};
use glam::Vec2;
use slotmap::{new_key_type, SlotMap};

use crate::input::InputFocus;
use super::hazard::{CanvasSize, OverlayColor};

new_key_type! {
    /// Stable key of a pin on a board
    pub struct PinKey;
}

pub const PIN_RADIUS: f32 = 6.0;
pub const PIN_OUTLINE_WIDTH: f32 = 2.0;
pub const PIN_OUTLINE_COLOR: u32 = 0xffffff;

/// What a report is about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PinKind {
    /// Water depth at a spot (may carry a height)
    FloodDepth,
    /// Road or path cannot be used
    Impassable,
    /// Storm drain blocked
    DrainBlocked,
}

impl PinKind {
    pub const ALL: [PinKind; 3] = [PinKind::FloodDepth, PinKind::Impassable, PinKind::DrainBlocked];

    pub fn color(&self) -> OverlayColor {
        match self {
            PinKind::FloodDepth => OverlayColor::from_hex(0x2563eb),
            PinKind::Impassable => OverlayColor::from_hex(0xf97316),
            PinKind::DrainBlocked => OverlayColor::from_hex(0x10b981),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PinKind::FloodDepth => "Flood depth",
            PinKind::Impassable => "Impassable",
            PinKind::DrainBlocked => "Drain blocked",
        }
    }
}

/// One submitted report
#[derive(Debug, Clone, PartialEq)]
pub struct Pin {
    /// Horizontal position, 0 = left edge, 1 = right edge
    pub x: f32,
    /// Vertical position, 0 = top edge, 1 = bottom edge
    pub y: f32,
    pub kind: PinKind,
    pub message: Option<String>,
    /// Only kept for `FloodDepth` reports
    pub height_cm: Option<f32>,
    pub created_at: DateTime<Utc>,
}

impl Pin {
    /// Pixel position on a canvas of the given size
    pub fn screen_position(&self, canvas: CanvasSize) -> Vec2 {
        Vec2::new(self.x * canvas.width as f32, self.y * canvas.height as f32)
    }
}

/// Convert a click into normalized coordinates of the clicked element.
///
/// `None` for a zero-sized element.
pub fn pick_position(click: Vec2, rect_origin: Vec2, rect_size: Vec2) -> Option<Vec2> {
    if rect_size.x <= 0.0 || rect_size.y <= 0.0 {
        return None;
    }
    Some((click - rect_origin) / rect_size)
}

/// Pin placement flow
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PinPlacement {
    Idle,
    /// Next viewport click drops a draft
    Armed,
    /// Report form open for a draft at this normalized position
    Drafting(Vec2),
}

/// Submitted pins (newest first) plus the placement flow
#[derive(Debug)]
pub struct PinBoard {
    pins: SlotMap<PinKey, Pin>,
    order: Vec<PinKey>,
    placement: PinPlacement,
}

impl PinBoard {
    pub fn new() -> Self {
        Self {
            pins: SlotMap::with_key(),
            order: Vec::new(),
            placement: PinPlacement::Idle,
        }
    }

    // ===== PLACEMENT =====

    pub fn placement(&self) -> PinPlacement {
        self.placement
    }

    /// Toggle pin mode (ignored while a form is open)
    pub fn toggle_pin_mode(&mut self) {
        self.placement = match self.placement {
            PinPlacement::Idle => PinPlacement::Armed,
            PinPlacement::Armed => PinPlacement::Idle,
            drafting => drafting,
        };
    }

    /// Viewport click. Opens the form when armed; returns whether it did.
    pub fn click(&mut self, position: Vec2) -> bool {
        if self.placement == PinPlacement::Armed {
            self.placement = PinPlacement::Drafting(position);
            true
        } else {
            false
        }
    }

    /// Submit the open form. Empty messages are dropped.
    pub fn submit(&mut self, kind: PinKind, message: &str, height_cm: Option<f32>) -> Option<PinKey> {
        let PinPlacement::Drafting(position) = self.placement else {
            return None;
        };
        self.placement = PinPlacement::Idle;

        let message = message.trim();
        Some(self.insert(Pin {
            x: position.x,
            y: position.y,
            kind,
            message: (!message.is_empty()).then(|| message.to_string()),
            height_cm: if kind == PinKind::FloodDepth { height_cm } else { None },
            created_at: Utc::now(),
        }))
    }

    /// Close the form without adding a pin
    pub fn cancel(&mut self) {
        self.placement = PinPlacement::Idle;
    }

    /// Focus the viewer should assume while the form is open
    pub fn input_focus(&self) -> InputFocus {
        match self.placement {
            PinPlacement::Drafting(_) => InputFocus::MODAL_OPEN,
            _ => InputFocus::empty(),
        }
    }

    // ===== PINS =====

    /// Add a pin at the front
    pub fn insert(&mut self, pin: Pin) -> PinKey {
        let key = self.pins.insert(pin);
        self.order.insert(0, key);
        key
    }

    pub fn remove(&mut self, key: PinKey) -> Option<Pin> {
        let pin = self.pins.remove(key)?;
        self.order.retain(|k| *k != key);
        Some(pin)
    }

    pub fn get(&self, key: PinKey) -> Option<&Pin> {
        self.pins.get(key)
    }

    /// Pins, newest first
    pub fn iter(&self) -> impl Iterator<Item = (PinKey, &Pin)> + '_ {
        self.order.iter().filter_map(|key| self.pins.get(*key).map(|pin| (*key, pin)))
    }

    pub fn len(&self) -> usize {
        self.pins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pins.is_empty()
    }

    pub fn clear(&mut self) {
        self.pins.clear();
        self.order.clear();
    }
}

impl Default for PinBoard {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "pins_tests.rs"]
mod tests;
