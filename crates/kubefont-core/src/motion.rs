//! Input-to-camera mappings.
//!
//! Both mappings produce a [`MotionState`]: a pan vector copied into the
//! camera's x/y position and a rotation vector copied into its x/y Euler
//! angles on the next frame.

use crate::constants::{
    ORIENTATION_ANGLE_OFFSET, ORIENTATION_PAN_SPEED, ORIENTATION_ROTATE_SPEED, ORIENTATION_WRAP,
    POINTER_PAN_SPEED, POINTER_ROTATE_SPEED,
};
use glam::Vec2;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MotionState {
    pub pan: Vec2,
    pub rotation: Vec2,
}

/// Map a pointer offset from the container center to camera motion.
#[inline]
pub fn pointer_motion(dx: f32, dy: f32) -> MotionState {
    MotionState {
        pan: Vec2::new(1.0 - dx * POINTER_PAN_SPEED, 1.0 - dy * POINTER_PAN_SPEED),
        rotation: Vec2::new(dy * POINTER_ROTATE_SPEED, -dx * POINTER_ROTATE_SPEED),
    }
}

/// Shift an orientation angle and wrap it. The remainder keeps the sign of
/// the shifted angle, so negative inputs stay negative.
#[inline]
pub fn wrap_angle(angle: f32) -> f32 {
    (angle + ORIENTATION_ANGLE_OFFSET) % ORIENTATION_WRAP
}

/// Orientation mapping relative to the first reading seen.
#[derive(Clone, Copy, Debug, Default)]
pub struct OrientationMapper {
    origin: Option<Vec2>,
}

impl OrientationMapper {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn origin(&self) -> Option<Vec2> {
        self.origin
    }

    pub fn reset(&mut self) {
        self.origin = None;
    }

    /// Feed one `deviceorientation` reading. Missing angles count as zero.
    pub fn update(&mut self, alpha: Option<f64>, beta: Option<f64>) -> MotionState {
        let current = Vec2::new(
            wrap_angle(alpha.unwrap_or(0.0) as f32),
            wrap_angle(beta.unwrap_or(0.0) as f32),
        );
        let origin = *self.origin.get_or_insert(current);
        let d = -(current - origin);
        MotionState {
            pan: d * ORIENTATION_PAN_SPEED,
            rotation: Vec2::new(-d.y * ORIENTATION_ROTATE_SPEED, -d.x * ORIENTATION_ROTATE_SPEED),
        }
    }
}
