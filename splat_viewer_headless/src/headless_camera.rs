/// Headless perspective camera
///
/// Keeps the same state a browser splat viewer's camera does: position,
/// orbit target, up vector, orientation (roll included) and a cached
/// projection matrix rebuilt on `update_projection`.

use glam::{Mat4, Quat, Vec3};

use splat_viewer::splatview::framing::look_rotation;
use splat_viewer::splatview::session::SessionCamera;

#[derive(Debug, Clone)]
pub struct HeadlessCamera {
    up: Vec3,
    fov: f32,
    near: f32,
    far: f32,
    aspect: f32,
    position: Vec3,
    target: Vec3,
    orientation: Quat,
    projection: Mat4,
    projection_updates: u32,
}

impl HeadlessCamera {
    pub fn new(aspect: f32) -> Self {
        let mut camera = Self {
            up: Vec3::Y,
            fov: 50.0,
            near: 0.1,
            far: 1000.0,
            aspect,
            position: Vec3::new(0.0, 0.0, 5.0),
            target: Vec3::ZERO,
            orientation: Quat::IDENTITY,
            projection: Mat4::IDENTITY,
            projection_updates: 0,
        };
        camera.rebuild_projection();
        camera
    }

    /// Viewport resized
    pub fn set_aspect(&mut self, aspect: f32) {
        if aspect.is_finite() && aspect > 0.0 {
            self.aspect = aspect;
            self.rebuild_projection();
        }
    }

    pub fn aspect(&self) -> f32 {
        self.aspect
    }

    pub fn projection_matrix(&self) -> &Mat4 {
        &self.projection
    }

    /// World-to-camera transform
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::from_rotation_translation(self.orientation, self.position).inverse()
    }

    /// Up direction on screen (flips with a 180° roll)
    pub fn screen_up(&self) -> Vec3 {
        self.orientation * Vec3::Y
    }

    /// Viewing direction
    pub fn forward(&self) -> Vec3 {
        self.orientation * Vec3::NEG_Z
    }

    pub fn projection_updates(&self) -> u32 {
        self.projection_updates
    }

    fn rebuild_projection(&mut self) {
        self.projection = Mat4::perspective_rh(self.fov.to_radians(), self.aspect, self.near, self.far);
    }
}

impl SessionCamera for HeadlessCamera {
    fn up(&self) -> Vec3 {
        self.up
    }

    fn set_up(&mut self, up: Vec3) {
        self.up = up;
    }

    fn fov(&self) -> f32 {
        self.fov
    }

    fn set_fov(&mut self, fov_degrees: f32) {
        self.fov = fov_degrees;
    }

    fn near(&self) -> f32 {
        self.near
    }

    fn far(&self) -> f32 {
        self.far
    }

    fn set_clip_planes(&mut self, near: f32, far: f32) {
        self.near = near;
        self.far = far;
    }

    fn position(&self) -> Vec3 {
        self.position
    }

    fn target(&self) -> Vec3 {
        self.target
    }

    fn orientation(&self) -> Quat {
        self.orientation
    }

    fn look_at(&mut self, position: Vec3, target: Vec3) {
        self.position = position;
        self.target = target;
        self.orientation = look_rotation(position, target, self.up);
    }

    fn rotate_roll(&mut self, angle: f32) {
        self.orientation = (self.orientation * Quat::from_rotation_z(angle)).normalize();
    }

    fn update_projection(&mut self) {
        self.rebuild_projection();
        self.projection_updates += 1;
    }
}
