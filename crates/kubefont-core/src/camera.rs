//! Perspective camera driven by a position and XYZ Euler angles.
//!
//! The camera looks down its local -Z axis. No look-at target is kept: input
//! motion writes the position and rotation directly each frame.

use crate::constants::{CAMERA_FAR, CAMERA_FOV_DEG, CAMERA_NEAR};
use crate::motion::MotionState;
use glam::{EulerRot, Mat4, Quat, Vec3};

#[derive(Clone, Debug, PartialEq)]
pub struct PerspectiveCamera {
    pub fov_y_degrees: f32,
    pub aspect: f32,
    pub znear: f32,
    pub zfar: f32,
    pub position: Vec3,
    pub rotation: Vec3,
}

impl PerspectiveCamera {
    pub fn new(fov_y_degrees: f32, aspect: f32, znear: f32, zfar: f32) -> Self {
        Self {
            fov_y_degrees,
            aspect: sanitize_aspect(aspect),
            znear,
            zfar,
            position: Vec3::ZERO,
            rotation: Vec3::ZERO,
        }
    }

    /// Camera with the scene's standard lens.
    pub fn standard(aspect: f32) -> Self {
        Self::new(CAMERA_FOV_DEG, aspect, CAMERA_NEAR, CAMERA_FAR)
    }

    pub fn set_aspect(&mut self, aspect: f32) {
        self.aspect = sanitize_aspect(aspect);
    }

    /// Copy pan into x/y (depth untouched) and rotation into the x/y angles.
    pub fn apply_motion(&mut self, motion: &MotionState) {
        self.position.x = motion.pan.x;
        self.position.y = motion.pan.y;
        self.rotation.x = motion.rotation.x;
        self.rotation.y = motion.rotation.y;
    }

    pub fn orientation(&self) -> Quat {
        Quat::from_euler(EulerRot::XYZ, self.rotation.x, self.rotation.y, self.rotation.z)
    }

    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(
            self.fov_y_degrees.to_radians(),
            self.aspect,
            self.znear,
            self.zfar,
        )
    }

    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::from_rotation_translation(self.orientation(), self.position).inverse()
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}

fn sanitize_aspect(aspect: f32) -> f32 {
    if aspect.is_finite() && aspect > 0.0 {
        aspect
    } else {
        1.0
    }
}
