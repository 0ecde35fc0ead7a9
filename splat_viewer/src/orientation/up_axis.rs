/// Up-axis conventions and the Z-up heuristic

use std::f32::consts::FRAC_PI_2;
use std::fmt;
use glam::{Quat, Vec3};

/// Axis an asset treats as "up"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum UpAxis {
    /// Native convention, no scene rotation
    #[default]
    Y,
    X,
    Z,
}

impl UpAxis {
    /// Scene root rotation that normalizes this convention to Y-up
    pub fn scene_rotation(&self) -> Quat {
        match self {
            UpAxis::Y => Quat::IDENTITY,
            UpAxis::Z => Quat::from_rotation_x(-FRAC_PI_2),
            UpAxis::X => Quat::from_rotation_z(FRAC_PI_2),
        }
    }

    /// Camera up vector matching this convention
    pub fn camera_up(&self) -> Vec3 {
        match self {
            UpAxis::Y => Vec3::Y,
            UpAxis::Z => Vec3::Z,
            UpAxis::X => Vec3::X,
        }
    }

    /// Guess the convention from a measured bounds size.
    ///
    /// Z-up when the Z extent is strictly more than `ratio` times the Y
    /// extent, Y-up otherwise. Never returns X. Tall Y-up assets (towers,
    /// trees) are misclassified as Z-up; the keyboard override exists for
    /// them.
    pub fn classify(size: Vec3, ratio: f32) -> UpAxis {
        if size.z > size.y * ratio {
            UpAxis::Z
        } else {
            UpAxis::Y
        }
    }
}

impl fmt::Display for UpAxis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UpAxis::Y => write!(f, "Y-up"),
            UpAxis::X => write!(f, "X-up"),
            UpAxis::Z => write!(f, "Z-up"),
        }
    }
}

/// Orientation currently applied to a viewer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrientationState {
    /// Up axis the scene has been normalized from
    pub axis: UpAxis,
    /// Roll the camera 180° about its view axis after every placement
    pub roll_flipped: bool,
}

impl OrientationState {
    pub fn new(roll_flipped: bool) -> Self {
        Self { axis: UpAxis::Y, roll_flipped }
    }
}

#[cfg(test)]
#[path = "up_axis_tests.rs"]
mod tests;
