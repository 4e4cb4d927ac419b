//! Chase camera that trails the aircraft from behind and above.

use engine_core::Pose;
use glam::{Mat4, Vec3};

/// Camera offset in the aircraft's local frame: behind (-X) and above (+Y).
pub const CHASE_OFFSET: Vec3 = Vec3::new(-18.0, 8.0, 0.0);
/// Fraction of the remaining distance to the ideal position covered each tick.
pub const CHASE_SMOOTHING: f32 = 0.15;

/// Where the camera is and what it looks at.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraPose {
    pub position: Vec3,
    pub target: Vec3,
}

/// Perspective projection parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraLens {
    /// Vertical field of view in degrees.
    pub fov_degrees: f32,
    pub near: f32,
    pub far: f32,
    /// Aspect ratio (width / height).
    pub aspect: f32,
}

impl Default for CameraLens {
    fn default() -> Self {
        Self {
            fov_degrees: 75.0,
            near: 0.1,
            far: 2000.0,
            aspect: 16.0 / 9.0,
        }
    }
}

impl CameraLens {
    /// Update aspect ratio (call on window resize).
    pub fn set_aspect(&mut self, width: u32, height: u32) {
        self.aspect = width as f32 / height.max(1) as f32;
    }

    /// Get the projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov_degrees.to_radians(), self.aspect, self.near, self.far)
    }
}

/// Camera that eases toward a fixed offset behind the aircraft.
///
/// Position converges geometrically on the ideal spot, so a respawn teleport is
/// followed by a short swoop rather than a cut. The look-at target is never smoothed.
#[derive(Debug, Clone)]
pub struct ChaseCamera {
    position: Vec3,
    target: Vec3,
    pub lens: CameraLens,
}

impl ChaseCamera {
    /// Place the camera exactly at its ideal position for `aircraft`.
    pub fn new(aircraft: &Pose) -> Self {
        Self {
            position: Self::desired_position(aircraft),
            target: aircraft.position,
            lens: CameraLens::default(),
        }
    }

    /// Place the camera at an arbitrary position, e.g. to replay a saved view.
    pub fn at(position: Vec3, target: Vec3) -> Self {
        Self {
            position,
            target,
            lens: CameraLens::default(),
        }
    }

    /// Ideal camera position: the chase offset rotated into the aircraft's frame.
    pub fn desired_position(aircraft: &Pose) -> Vec3 {
        aircraft.local_to_world(CHASE_OFFSET)
    }

    /// Advance one tick toward the aircraft.
    pub fn update(&mut self, aircraft: &Pose) {
        let desired = Self::desired_position(aircraft);
        self.position = self.position.lerp(desired, CHASE_SMOOTHING);
        self.target = aircraft.position;
    }

    pub fn pose(&self) -> CameraPose {
        CameraPose {
            position: self.position,
            target: self.target,
        }
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn target(&self) -> Vec3 {
        self.target
    }

    /// Get the view matrix.
    pub fn view_matrix(&self) -> Mat4 {
        let mut target = self.target;
        if (target - self.position).length_squared() < 1e-8 {
            target = self.position + Vec3::X;
        }
        Mat4::look_at_rh(self.position, target, Vec3::Y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use engine_core::Euler;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn level_aircraft_puts_camera_behind_and_above() {
        let aircraft = Pose::from_position(Vec3::new(0.0, 2.0, -90.0));
        let cam = ChaseCamera::new(&aircraft);
        assert_eq!(cam.position(), Vec3::new(-18.0, 10.0, -90.0));
        assert_eq!(cam.target(), aircraft.position);
    }

    #[test]
    fn offset_follows_aircraft_heading() {
        let aircraft = Pose::new(Vec3::ZERO, Euler::new(0.0, FRAC_PI_2, 0.0));
        let desired = ChaseCamera::desired_position(&aircraft);
        // Facing -Z, so "behind" is +Z.
        assert!(desired.abs_diff_eq(Vec3::new(0.0, 8.0, 18.0), 1e-4), "got {:?}", desired);
    }

    #[test]
    fn stationary_aircraft_keeps_camera_in_place() {
        let aircraft = Pose::new(Vec3::new(5.0, 40.0, 3.0), Euler::new(0.2, 0.4, -0.3));
        let mut cam = ChaseCamera::new(&aircraft);
        let start = cam.position();
        for _ in 0..100 {
            cam.update(&aircraft);
        }
        assert!(cam.position().abs_diff_eq(start, 1e-4));
    }

    #[test]
    fn camera_converges_geometrically_after_teleport() {
        let far = Pose::from_position(Vec3::new(300.0, 80.0, 200.0));
        let mut cam = ChaseCamera::new(&far);

        let launch = Pose::from_position(Vec3::new(0.0, 2.0, -90.0));
        let desired = ChaseCamera::desired_position(&launch);
        let mut distance = cam.position().distance(desired);
        for _ in 0..30 {
            cam.update(&launch);
            let next = cam.position().distance(desired);
            let ratio = next / distance;
            assert!((ratio - 0.85).abs() < 1e-3, "ratio {}", ratio);
            assert!(next > 0.0, "camera snapped onto target");
            distance = next;
        }
        // Target is not smoothed.
        assert_eq!(cam.target(), launch.position);
    }

    #[test]
    fn view_matrix_is_finite_when_camera_sits_on_target() {
        let cam = ChaseCamera::at(Vec3::ONE, Vec3::ONE);
        assert!(cam.view_matrix().is_finite());
    }

    #[test]
    fn resize_updates_aspect() {
        let mut lens = CameraLens::default();
        lens.set_aspect(800, 600);
        assert!((lens.aspect - 4.0 / 3.0).abs() < 1e-6);
        lens.set_aspect(800, 0);
        assert_eq!(lens.aspect, 800.0);
        assert!(lens.projection_matrix().is_finite());
    }
}
