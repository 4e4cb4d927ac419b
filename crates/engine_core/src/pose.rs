//! Pose and Euler-angle utilities for spatial positioning.

use glam::{Mat3, Mat4, Vec3};

/// Orientation as three independent Euler angles, in radians.
///
/// The angles are applied X first, then Y, then Z: the combined rotation is
/// `Rx(pitch) * Ry(yaw) * Rz(roll)` acting on column vectors. Forward-vector
/// and camera-offset results depend on this order exactly.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Euler {
    /// Rotation about the X axis.
    pub pitch: f32,
    /// Rotation about the Y axis.
    pub yaw: f32,
    /// Rotation about the Z axis.
    pub roll: f32,
}

impl Euler {
    pub const ZERO: Self = Self {
        pitch: 0.0,
        yaw: 0.0,
        roll: 0.0,
    };

    pub fn new(pitch: f32, yaw: f32, roll: f32) -> Self {
        Self { pitch, yaw, roll }
    }

    /// Rotation matrix for these angles (X, then Y, then Z).
    pub fn to_mat3(self) -> Mat3 {
        Mat3::from_rotation_x(self.pitch)
            * Mat3::from_rotation_y(self.yaw)
            * Mat3::from_rotation_z(self.roll)
    }

    /// Rotate a vector from the local frame into the world frame.
    pub fn rotate(self, vector: Vec3) -> Vec3 {
        self.to_mat3() * vector
    }
}

/// Rotate `vector` by the Euler angles `pitch`, `yaw`, `roll` (X, then Y, then Z).
pub fn rotate(vector: Vec3, pitch: f32, yaw: f32, roll: f32) -> Vec3 {
    Euler::new(pitch, yaw, roll).rotate(vector)
}

/// Position plus three-axis orientation.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Pose {
    pub position: Vec3,
    pub orientation: Euler,
}

impl Pose {
    /// Create a level pose at the given position.
    pub fn from_position(position: Vec3) -> Self {
        Self {
            position,
            orientation: Euler::ZERO,
        }
    }

    pub fn new(position: Vec3, orientation: Euler) -> Self {
        Self {
            position,
            orientation,
        }
    }

    /// Local forward axis (+X) in world space.
    pub fn forward(&self) -> Vec3 {
        self.orientation.rotate(Vec3::X)
    }

    /// Map a point given in this pose's local frame to world space.
    pub fn local_to_world(&self, offset: Vec3) -> Vec3 {
        self.position + self.orientation.rotate(offset)
    }

    /// Height above the nominal ground plane.
    pub fn altitude(&self) -> f32 {
        self.position.y
    }

    /// Model matrix for this pose.
    pub fn to_matrix(&self) -> Mat4 {
        Mat4::from_translation(self.position) * Mat4::from_mat3(self.orientation.to_mat3())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    const EPS: f32 = 1e-5;

    #[test]
    fn zero_orientation_is_identity() {
        let v = Vec3::new(1.5, -2.0, 3.25);
        assert_eq!(Euler::ZERO.rotate(v), v);
        assert_eq!(Pose::from_position(Vec3::ZERO).forward(), Vec3::X);
    }

    #[test]
    fn quarter_yaw_turns_forward_towards_negative_z() {
        let f = rotate(Vec3::X, 0.0, FRAC_PI_2, 0.0);
        assert!(f.abs_diff_eq(Vec3::NEG_Z, EPS), "got {:?}", f);
    }

    #[test]
    fn positive_roll_lifts_the_nose() {
        let f = rotate(Vec3::X, 0.0, 0.0, 0.1);
        assert!(f.y > 0.0);
        let f = rotate(Vec3::X, 0.0, 0.0, -0.1);
        assert!(f.y < 0.0);
    }

    /// Z is applied to the vector first, X last: Rz sends X to Y, then Rx sends Y to Z.
    #[test]
    fn composition_order_is_x_then_y_then_z() {
        let v = rotate(Vec3::X, FRAC_PI_2, 0.0, FRAC_PI_2);
        assert!(v.abs_diff_eq(Vec3::Z, EPS), "got {:?}", v);
    }

    #[test]
    fn pitch_alone_leaves_forward_axis_untouched() {
        let pose = Pose::new(Vec3::ZERO, Euler::new(0.7, 0.0, 0.0));
        assert_eq!(pose.forward(), Vec3::X);
    }

    #[test]
    fn local_to_world_applies_orientation_then_translation() {
        let pose = Pose::new(Vec3::new(10.0, 5.0, 0.0), Euler::new(0.0, FRAC_PI_2, 0.0));
        let p = pose.local_to_world(Vec3::new(-18.0, 8.0, 0.0));
        assert!(p.abs_diff_eq(Vec3::new(10.0, 13.0, 18.0), 1e-4), "got {:?}", p);
        let m = pose.to_matrix().transform_point3(Vec3::new(-18.0, 8.0, 0.0));
        assert!(m.abs_diff_eq(p, 1e-4));
    }
}
