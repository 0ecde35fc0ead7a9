/// Hazard overlay layout
///
/// A translucent rectangle drawn over the lower-middle of the viewport to
/// mark the flooded area. This module only computes geometry and colors;
/// the host draws them on its 2D canvas.

use std::fmt;

// ===== CANVAS =====

/// Backing size of the overlay canvas in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CanvasSize {
    pub width: u32,
    pub height: u32,
}

impl CanvasSize {
    /// Size from the container's client rectangle (floored, at least 1x1)
    pub fn from_client(width: f32, height: f32) -> Self {
        let floor = |value: f32| if value.is_finite() { value.floor().max(1.0) as u32 } else { 1 };
        Self { width: floor(width), height: floor(height) }
    }
}

// ===== COLOR =====

/// 8-bit RGB plus a fractional alpha, as 2D canvases take them
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverlayColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl OverlayColor {
    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub fn from_hex(rgb: u32) -> Self {
        Self::rgb((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8)
    }

    pub fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }

    /// `#rrggbb` (alpha ignored)
    pub fn hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl fmt::Display for OverlayColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgba({},{},{},{})", self.r, self.g, self.b, self.a)
    }
}

// ===== HAZARD =====

/// Severity shown by the hazard rectangle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HazardLevel {
    Low,
    #[default]
    Mid,
    High,
}

impl HazardLevel {
    /// Base color; deeper blue for higher severity
    pub fn color(&self) -> OverlayColor {
        match self {
            HazardLevel::Low => OverlayColor::rgb(153, 204, 255),
            HazardLevel::Mid => OverlayColor::rgb(51, 102, 255),
            HazardLevel::High => OverlayColor::rgb(0, 17, 170),
        }
    }
}

/// Rectangle in canvas pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverlayRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// Everything needed to draw the hazard rectangle once
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HazardStyle {
    pub rect: OverlayRect,
    pub fill: OverlayColor,
    pub stroke: OverlayColor,
    pub stroke_width: f32,
}

pub const HAZARD_MAX_WIDTH: f32 = 560.0;
pub const HAZARD_MAX_HEIGHT: f32 = 300.0;
pub const HAZARD_STROKE_WIDTH: f32 = 2.0;
pub const DEFAULT_HAZARD_OPACITY: f32 = 0.28;

/// User-controlled hazard overlay settings
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HazardOverlay {
    pub visible: bool,
    pub level: HazardLevel,
    opacity: f32,
}

impl HazardOverlay {
    pub fn new() -> Self {
        Self {
            visible: true,
            level: HazardLevel::default(),
            opacity: DEFAULT_HAZARD_OPACITY,
        }
    }

    pub fn opacity(&self) -> f32 {
        self.opacity
    }

    /// Fill opacity, clamped to `[0, 1]`
    pub fn set_opacity(&mut self, opacity: f32) {
        self.opacity = if opacity.is_nan() { 0.0 } else { opacity.clamp(0.0, 1.0) };
    }

    /// Lay the rectangle out on `canvas`; `None` while hidden.
    ///
    /// 48% of the width (at most 560 px) by 32% of the height (at most
    /// 300 px), centered at 50% / 68% of the canvas.
    pub fn layout(&self, canvas: CanvasSize) -> Option<HazardStyle> {
        if !self.visible {
            return None;
        }

        let canvas_w = canvas.width as f32;
        let canvas_h = canvas.height as f32;
        let width = (canvas_w * 0.48).min(HAZARD_MAX_WIDTH);
        let height = (canvas_h * 0.32).min(HAZARD_MAX_HEIGHT);

        let color = self.level.color();
        Some(HazardStyle {
            rect: OverlayRect {
                x: canvas_w * 0.5 - width / 2.0,
                y: canvas_h * 0.68 - height / 2.0,
                width,
                height,
            },
            fill: color.with_alpha(self.opacity),
            stroke: color.with_alpha((self.opacity + 0.2).min(0.6)),
            stroke_width: HAZARD_STROKE_WIDTH,
        })
    }
}

impl Default for HazardOverlay {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "hazard_tests.rs"]
mod tests;
