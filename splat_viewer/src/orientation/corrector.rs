/// Axis orientation corrector
///
/// Normalizes the scene to Y-up by rotating the scene root, then matches
/// the camera up vector to the chosen convention. Reframing after the
/// change is left to the caller, which owns the frame schedule.

use glam::Vec3;

use crate::engine_info;
use crate::session::ViewerSession;
use super::up_axis::UpAxis;

/// Rotate the scene root and align the camera up vector for `axis`.
///
/// The root rotation is reset before the axis rotation is applied, so
/// repeated calls never accumulate.
pub fn apply_orientation(session: &mut dyn ViewerSession, axis: UpAxis) {
    session.scene_root_mut().set_rotation(axis.scene_rotation());

    let camera = session.camera_mut();
    camera.set_up(axis.camera_up());
    camera.update_projection();

    engine_info!("splatview::Orientation", "Scene oriented {}", axis);
}

/// Classify a measured size, `None` when there is nothing measured or the
/// size overflowed.
pub fn classify_up_axis(size: Vec3, ratio: f32) -> Option<UpAxis> {
    if size.is_finite() && size.length_squared() > 0.0 {
        Some(UpAxis::classify(size, ratio))
    } else {
        None
    }
}

#[cfg(test)]
#[path = "corrector_tests.rs"]
mod tests;
