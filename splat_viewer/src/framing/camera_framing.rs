/// Camera framing engine
///
/// Turns a bounding volume into a camera placement: fixed 45° field of
/// view, a fit distance derived from the largest extent, a single oblique
/// viewing direction for every up axis, and clip planes scaled with the
/// distance so tiny and huge scenes keep a usable depth range.

use std::f32::consts::PI;
use glam::{Mat3, Quat, Vec3};

use crate::config::{FramingConfig, ViewerConfig};
use crate::engine_debug;
use crate::session::{SessionCamera, ViewerSession};
use super::bounds::BoundingVolume;

/// Camera parameters that frame one bounding volume
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FramingSolution {
    pub position: Vec3,
    /// Bounds center
    pub target: Vec3,
    pub fov_degrees: f32,
    pub near: f32,
    pub far: f32,
    /// Fit distance (the camera sits `distance * distance_scale` away)
    pub distance: f32,
}

impl FramingSolution {
    /// Solve the placement for `bounds`.
    ///
    /// Returns `None` for an empty or point-sized volume, and for one so
    /// large that the camera placement overflows.
    pub fn for_bounds(bounds: &BoundingVolume, config: &FramingConfig) -> Option<Self> {
        if bounds.is_degenerate() {
            return None;
        }

        let fov = config.fov_degrees.to_radians();
        let max_dim = bounds.max_dimension();
        let distance = (max_dim * config.padding) / (2.0 * (fov / 2.0).tan());

        let direction = config.view_direction.normalize_or_zero();
        let target = bounds.center();
        let position = target + direction * distance * config.distance_scale;

        let near = config.near_min.max(distance * config.near_ratio);
        let far = (near + config.far_min_span).max(distance * config.far_ratio);

        // Extents near f32::MAX overflow here; no usable camera
        if !(distance.is_finite() && near.is_finite() && far.is_finite() && position.is_finite()) {
            return None;
        }

        Some(Self {
            position,
            target,
            fov_degrees: config.fov_degrees,
            near,
            far,
            distance,
        })
    }

    /// Distance between the camera and the bounds center
    pub fn camera_distance(&self) -> f32 {
        self.position.distance(self.target)
    }
}

/// Frame `bounds` with the session camera.
///
/// Sets fov and clip planes, places and aims the camera, re-applies the
/// roll correction (aiming discards it) and resets the clear color.
/// Calling it twice with the same bounds leaves the same camera state.
pub fn frame(
    session: &mut dyn ViewerSession,
    bounds: &BoundingVolume,
    config: &ViewerConfig,
    roll_flipped: bool,
) -> Option<FramingSolution> {
    let solution = FramingSolution::for_bounds(bounds, &config.framing)?;

    let camera = session.camera_mut();
    camera.set_fov(solution.fov_degrees);
    camera.set_clip_planes(solution.near, solution.far);
    camera.update_projection();
    place_camera(camera, solution.position, solution.target, roll_flipped);

    session.set_clear_color(config.clear_color);

    engine_debug!(
        "splatview::Framing",
        "Framed bounds center={:?} distance={:.3} near={:.4} far={:.1}",
        solution.target,
        solution.distance,
        solution.near,
        solution.far
    );

    Some(solution)
}

/// Look at the origin from the fixed fallback offset.
///
/// Used when bounds never became available; fov and clip planes are left
/// as they are.
pub fn apply_fallback(session: &mut dyn ViewerSession, config: &ViewerConfig, roll_flipped: bool) {
    place_camera(
        session.camera_mut(),
        config.fallback_position,
        config.fallback_target,
        roll_flipped,
    );
}

/// Aim the camera, then roll it if requested
pub fn place_camera(camera: &mut dyn SessionCamera, position: Vec3, target: Vec3, roll_flipped: bool) {
    camera.look_at(position, target);
    apply_roll_correction(camera, roll_flipped);
}

/// Rotate 180° about the view axis when the roll flag is set
pub fn apply_roll_correction(camera: &mut dyn SessionCamera, roll_flipped: bool) {
    if roll_flipped {
        camera.rotate_roll(PI);
        camera.update_projection();
    }
}

/// Orientation of a camera at `position` looking at `target`.
///
/// The camera looks down its local -Z with local +Y as close to `up` as
/// possible. When the view direction is parallel to `up` any perpendicular
/// vector is used instead.
pub fn look_rotation(position: Vec3, target: Vec3, up: Vec3) -> Quat {
    let forward = (target - position).normalize_or_zero();
    if forward == Vec3::ZERO {
        return Quat::IDENTITY;
    }

    let right = forward.cross(up);
    let right = if right.length_squared() > 1e-12 {
        right.normalize()
    } else {
        forward.any_orthonormal_vector()
    };
    let camera_up = right.cross(forward);

    Quat::from_mat3(&Mat3::from_cols(right, camera_up, -forward)).normalize()
}

#[cfg(test)]
#[path = "camera_framing_tests.rs"]
mod tests;
