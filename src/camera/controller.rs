use glam::Vec3;

use crate::camera::core::{clamp_pitch, spherical_direction, Camera};

/// Which update rule governs the camera.
///
/// The orbit radius lives inside the variants so that orbit-only data is
/// only reachable while orbiting. Free-fly keeps the live distance to the
/// reference target instead, which becomes the radius on the way back.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CameraMode {
    /// Camera sits on a sphere around the target and looks at it.
    Orbit {
        /// Sphere radius.
        radius: f32,
    },
    /// Camera turns in place; the look direction comes from yaw/pitch.
    FreeFly {
        /// Distance from the camera to the reference target, refreshed on
        /// every update.
        target_distance: f32,
    },
}

impl CameraMode {
    /// Whether this is the orbit variant.
    #[must_use]
    pub fn is_orbit(&self) -> bool {
        matches!(self, Self::Orbit { .. })
    }

    /// The radius an orbit update would resume at.
    #[must_use]
    pub fn radius(&self) -> f32 {
        match *self {
            Self::Orbit { radius } => radius,
            Self::FreeFly { target_distance } => target_distance,
        }
    }

    /// The other mode, carrying the radius across.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Orbit { radius } => Self::FreeFly {
                target_distance: radius,
            },
            Self::FreeFly { target_distance } => Self::Orbit {
                radius: target_distance,
            },
        }
    }

    /// Short name for logs.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Orbit { .. } => "orbit",
            Self::FreeFly { .. } => "free-fly",
        }
    }
}

/// Lateral/longitudinal direction for free-fly translation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveDirection {
    /// Along `front`.
    Forward,
    /// Against `front`.
    Backward,
    /// Against `right`.
    Left,
    /// Along `right`.
    Right,
}

/// Converts angular and positional input into a consistent look-at geometry
/// for a single [`Camera`].
///
/// The controller owns the mode; the camera is passed in by reference so
/// the renderer can keep reading it between updates.
#[derive(Debug, Clone, PartialEq)]
pub struct CameraController {
    mode: CameraMode,
}

impl CameraController {
    /// Start in orbit mode at the given radius.
    #[must_use]
    pub fn new(radius: f32) -> Self {
        Self {
            mode: CameraMode::Orbit {
                radius: radius.max(0.0),
            },
        }
    }

    /// Start in the given mode.
    #[must_use]
    pub fn with_mode(mode: CameraMode) -> Self {
        Self { mode }
    }

    /// Current mode.
    #[must_use]
    pub fn mode(&self) -> CameraMode {
        self.mode
    }

    /// Replace the mode. Orientation and position are untouched; only the
    /// rule applied by later updates changes.
    pub fn set_mode(&mut self, mode: CameraMode) {
        if mode != self.mode {
            log::info!("camera mode: {} -> {}", self.mode.name(), mode.name());
        }
        self.mode = mode;
    }

    /// Switch between orbit and free-fly, keeping the most recent radius.
    pub fn toggle_mode(&mut self) -> CameraMode {
        self.set_mode(self.mode.toggled());
        self.mode
    }

    /// Radius the next orbit update resumes at.
    #[must_use]
    pub fn orbit_radius(&self) -> f32 {
        self.mode.radius()
    }

    /// Apply an angular delta.
    ///
    /// In orbit mode the deltas are subtracted (dragging moves the scene),
    /// the camera is placed on the sphere of radius `distance` around
    /// `target` and looks at it. In free-fly mode the deltas are added
    /// (dragging turns the camera), `distance` is ignored and the live
    /// distance to `target` is recorded instead.
    pub fn update(
        &mut self,
        camera: &mut Camera,
        target: Vec3,
        distance: f32,
        delta_yaw: f32,
        delta_pitch: f32,
    ) {
        let speed = camera.movement_speed();
        match self.mode {
            CameraMode::Orbit { .. } => {
                let radius = distance.max(0.0);
                camera.yaw -= delta_yaw * speed;
                camera.pitch = clamp_pitch(camera.pitch - delta_pitch * speed);

                camera.position =
                    target - spherical_direction(camera.yaw, camera.pitch) * radius;

                // Camera on the target: keep looking the same way.
                if let Some(front) = (target - camera.position).try_normalize() {
                    camera.front = front;
                }
                self.mode = CameraMode::Orbit { radius };
            }
            CameraMode::FreeFly { .. } => {
                camera.yaw += delta_yaw * speed;
                camera.pitch = clamp_pitch(camera.pitch + delta_pitch * speed);

                self.mode = CameraMode::FreeFly {
                    target_distance: target.distance(camera.position),
                };

                if let Some(front) =
                    spherical_direction(camera.yaw, camera.pitch).try_normalize()
                {
                    camera.front = front;
                }
            }
        }
        rebuild_basis(camera);
        log::trace!(
            "camera {} yaw={:.2} pitch={:.2} pos={:?}",
            self.mode.name(),
            camera.yaw,
            camera.pitch,
            camera.position
        );
    }

    /// [`update`](Self::update) using the controller's own radius.
    pub fn rotate(
        &mut self,
        camera: &mut Camera,
        target: Vec3,
        delta_yaw: f32,
        delta_pitch: f32,
    ) {
        let radius = self.orbit_radius();
        self.update(camera, target, radius, delta_yaw, delta_pitch);
    }

    /// Change the orbit radius by `delta * movement_speed` and re-place the
    /// camera. Does nothing in free-fly mode, where the radius follows the
    /// camera. Returns whether the camera moved.
    pub fn zoom(&mut self, camera: &mut Camera, target: Vec3, delta: f32) -> bool {
        let CameraMode::Orbit { radius } = self.mode else {
            return false;
        };
        let radius = (radius + delta * camera.movement_speed()).max(0.0);
        self.update(camera, target, radius, 0.0, 0.0);
        true
    }

    /// Move the camera along its basis in free-fly mode:
    /// `position += direction * step * movement_speed`. No rotation side
    /// effect. Returns `false` (and does nothing) in orbit mode.
    pub fn translate(
        &self,
        camera: &mut Camera,
        direction: MoveDirection,
        step: f32,
    ) -> bool {
        if self.mode.is_orbit() {
            return false;
        }
        let axis = match direction {
            MoveDirection::Forward => camera.front,
            MoveDirection::Backward => -camera.front,
            MoveDirection::Left => -camera.right,
            MoveDirection::Right => camera.right,
        };
        camera.position += axis * (step * camera.movement_speed());
        true
    }
}

/// Re-derive `right` and `up` from `front`. A `front` parallel to the world
/// up keeps the previous `right`.
fn rebuild_basis(camera: &mut Camera) {
    if let Some(right) = camera.front.cross(camera.world_up).try_normalize() {
        camera.right = right;
    }
    if let Some(up) = camera.right.cross(camera.front).try_normalize() {
        camera.up = up;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::core::PITCH_LIMIT;

    const EPS: f32 = 1e-4;

    fn level_camera(speed: f32) -> Camera {
        Camera::new(0.0, 0.0, Vec3::new(-10.0, 0.0, 0.0), Vec3::X, speed)
    }

    fn assert_orthonormal(camera: &Camera) {
        assert!((camera.front.length() - 1.0).abs() < EPS);
        assert!((camera.right.length() - 1.0).abs() < EPS);
        assert!((camera.up.length() - 1.0).abs() < EPS);
        assert!(camera.front.dot(camera.right).abs() < EPS);
        assert!(camera.front.dot(camera.up).abs() < EPS);
        assert!(camera.right.dot(camera.up).abs() < EPS);
    }

    fn assert_vec_eq(a: Vec3, b: Vec3) {
        assert!((a - b).length() < EPS, "{a:?} != {b:?}");
    }

    #[test]
    fn pitch_clamped_for_huge_delta() {
        for mode in [
            CameraMode::Orbit { radius: 10.0 },
            CameraMode::FreeFly {
                target_distance: 10.0,
            },
        ] {
            let mut camera = level_camera(1.0);
            let mut controller = CameraController::with_mode(mode);
            controller.update(&mut camera, Vec3::ZERO, 10.0, 0.0, 1.0e6);
            assert!(camera.pitch.abs() <= PITCH_LIMIT);
            controller.update(&mut camera, Vec3::ZERO, 10.0, 0.0, -1.0e6);
            assert!(camera.pitch.abs() <= PITCH_LIMIT);
        }
    }

    #[test]
    fn pitch_clamped_over_repeated_calls() {
        let mut camera = level_camera(0.2);
        let mut controller = CameraController::with_mode(CameraMode::FreeFly {
            target_distance: 0.0,
        });
        for _ in 0..2000 {
            controller.update(&mut camera, Vec3::ZERO, 0.0, 0.3, 1.0);
            assert!(camera.pitch <= PITCH_LIMIT);
        }
        assert_eq!(camera.pitch, PITCH_LIMIT);
        assert_orthonormal(&camera);
    }

    #[test]
    fn orbit_keeps_requested_distance() {
        let target = Vec3::new(0.621_314, 3.251_53, -6.823_11);
        let mut camera = level_camera(0.2);
        let mut controller = CameraController::new(24.8545);
        let deltas = [(1.0, 0.0), (0.0, -1.0), (-3.5, 2.0), (120.0, 40.0)];
        for (i, (dy, dp)) in deltas.into_iter().enumerate() {
            let distance = 5.0 + i as f32 * 3.0;
            controller.update(&mut camera, target, distance, dy, dp);
            assert!((camera.position.distance(target) - distance).abs() < EPS);
            assert_eq!(controller.orbit_radius(), distance);
            assert_orthonormal(&camera);
            assert_vec_eq(camera.front, (target - camera.position).normalize());
        }
    }

    #[test]
    fn basis_orthonormal_in_free_fly() {
        let mut camera = level_camera(0.2);
        let mut controller = CameraController::with_mode(CameraMode::FreeFly {
            target_distance: 0.0,
        });
        for (dy, dp) in [(13.0, 4.0), (-250.0, -30.0), (0.5, 88.0), (0.0, -500.0)] {
            controller.update(&mut camera, Vec3::ZERO, 0.0, dy, dp);
            assert_orthonormal(&camera);
        }
    }

    #[test]
    fn orbit_input_decreases_yaw() {
        let mut camera = level_camera(1.0);
        let mut controller = CameraController::new(10.0);
        controller.update(&mut camera, Vec3::ZERO, 10.0, 1.0, 0.0);
        assert_eq!(camera.yaw, -1.0);
        // position = -dir(yaw) * 10; yaw < 0 puts sin(yaw) < 0, so z > 0.
        let expected = -spherical_direction(-1.0, 0.0) * 10.0;
        assert_vec_eq(camera.position, expected);
        assert!(camera.position.z > 0.0);
        assert!(camera.position.x < 0.0);
    }

    #[test]
    fn free_fly_input_increases_yaw() {
        let mut camera = level_camera(1.0);
        let mut controller = CameraController::with_mode(CameraMode::FreeFly {
            target_distance: 10.0,
        });
        let before = camera.position;
        controller.update(&mut camera, Vec3::ZERO, 10.0, 1.0, 0.0);
        assert_eq!(camera.yaw, 1.0);
        assert_vec_eq(camera.front, spherical_direction(1.0, 0.0));
        assert!(camera.front.z > 0.0);
        assert_eq!(camera.position, before);
    }

    #[test]
    fn free_fly_records_live_distance_and_ignores_argument() {
        let mut camera = level_camera(1.0);
        let mut controller = CameraController::with_mode(CameraMode::FreeFly {
            target_distance: 0.0,
        });
        let target = Vec3::new(0.0, 3.0, 4.0);
        controller.update(&mut camera, target, 999.0, 0.0, 0.0);
        let expected = target.distance(camera.position);
        assert!((controller.orbit_radius() - expected).abs() < EPS);
    }

    #[test]
    fn mode_switch_resumes_at_free_fly_radius() {
        let target = Vec3::ZERO;
        let mut camera = level_camera(0.2);
        let mut controller = CameraController::new(10.0);
        controller.update(&mut camera, target, 10.0, 0.0, 0.0);

        assert!(!controller.toggle_mode().is_orbit());
        for (dy, dp) in [(2.0, 1.0), (-1.0, 0.5), (0.25, -0.75)] {
            controller.update(&mut camera, target, 0.0, dy, dp);
        }
        let _ = controller.translate(&mut camera, MoveDirection::Backward, 3.0);
        controller.update(&mut camera, target, 0.0, 0.0, 0.0);
        let radius = controller.orbit_radius();
        let front = camera.front;
        let (yaw, pitch) = (camera.yaw, camera.pitch);

        assert!(controller.toggle_mode().is_orbit());
        assert_eq!(controller.orbit_radius(), radius);
        controller.update(&mut camera, target, radius, 0.0, 0.0);

        assert_eq!((camera.yaw, camera.pitch), (yaw, pitch));
        assert!((camera.position.distance(target) - radius).abs() < EPS);
        assert_vec_eq(camera.front, front);
        assert_vec_eq((target - camera.position).normalize(), front);
    }

    #[test]
    fn toggle_round_trip_does_not_move_camera() {
        let target = Vec3::new(1.0, 2.0, 3.0);
        let mut camera = level_camera(0.2);
        let mut controller = CameraController::new(12.0);
        controller.update(&mut camera, target, 12.0, 5.0, -3.0);
        let snapshot = camera.clone();

        let _ = controller.toggle_mode();
        controller.update(&mut camera, target, 0.0, 0.0, 0.0);
        assert_vec_eq(camera.position, snapshot.position);
        assert_vec_eq(camera.front, snapshot.front);
        assert!((controller.orbit_radius() - 12.0).abs() < EPS);

        let _ = controller.toggle_mode();
        controller.rotate(&mut camera, target, 0.0, 0.0);
        assert_vec_eq(camera.position, snapshot.position);
        assert_vec_eq(camera.front, snapshot.front);
        assert_vec_eq(camera.up, snapshot.up);
    }

    #[test]
    fn zero_delta_is_idempotent() {
        for mode in [
            CameraMode::Orbit { radius: 7.0 },
            CameraMode::FreeFly {
                target_distance: 7.0,
            },
        ] {
            let target = Vec3::new(0.5, -1.0, 2.0);
            let mut camera = Camera::new(
                56.0,
                -13.0,
                Vec3::new(-17.0, 10.0, -23.0),
                Vec3::new(0.544_861, -0.224_951, 0.807_789),
                0.2,
            );
            let mut controller = CameraController::with_mode(mode);
            controller.update(&mut camera, target, 7.0, 0.0, 0.0);
            let first = camera.clone();
            for _ in 0..10 {
                controller.update(&mut camera, target, 7.0, 0.0, 0.0);
            }
            assert_vec_eq(camera.position, first.position);
            assert_vec_eq(camera.front, first.front);
            assert_vec_eq(camera.right, first.right);
            assert_vec_eq(camera.up, first.up);
        }
    }

    #[test]
    fn zero_radius_keeps_previous_front() {
        let mut camera = level_camera(1.0);
        let mut controller = CameraController::new(0.0);
        let front = camera.front;
        controller.update(&mut camera, Vec3::new(4.0, 5.0, 6.0), 0.0, 0.0, 0.0);
        assert_vec_eq(camera.position, Vec3::new(4.0, 5.0, 6.0));
        assert_vec_eq(camera.front, front);
        assert!(!camera.front.is_nan());
        assert!(!camera.up.is_nan());
        assert_orthonormal(&camera);
    }

    #[test]
    fn negative_distance_treated_as_zero() {
        let mut camera = level_camera(1.0);
        let mut controller = CameraController::new(5.0);
        controller.update(&mut camera, Vec3::ZERO, -3.0, 0.0, 0.0);
        assert_eq!(controller.orbit_radius(), 0.0);
        assert!(camera.position.length() < EPS);
    }

    #[test]
    fn translate_only_in_free_fly() {
        let mut camera = level_camera(0.2);
        let orbit = CameraController::new(10.0);
        assert!(!orbit.translate(&mut camera, MoveDirection::Forward, 1.0));
        assert_eq!(camera.position, Vec3::new(-10.0, 0.0, 0.0));

        let mut free = CameraController::with_mode(CameraMode::FreeFly {
            target_distance: 10.0,
        });
        free.update(&mut camera, Vec3::ZERO, 0.0, 0.0, 0.0);
        let front = camera.front;
        let right = camera.right;
        assert!(free.translate(&mut camera, MoveDirection::Forward, 1.0));
        assert_vec_eq(camera.position, Vec3::new(-10.0, 0.0, 0.0) + front * 0.2);
        assert!(free.translate(&mut camera, MoveDirection::Right, 0.5));
        assert!(free.translate(&mut camera, MoveDirection::Backward, 1.0));
        assert_vec_eq(camera.position, Vec3::new(-10.0, 0.0, 0.0) + right * 0.1);
        assert!(free.translate(&mut camera, MoveDirection::Left, 0.5));
        assert_vec_eq(camera.position, Vec3::new(-10.0, 0.0, 0.0));
        assert_eq!(camera.front, front);
    }

    #[test]
    fn zoom_changes_radius_in_orbit_only() {
        let mut camera = level_camera(0.2);
        let mut controller = CameraController::new(10.0);
        assert!(controller.zoom(&mut camera, Vec3::ZERO, -0.1));
        assert!((controller.orbit_radius() - 9.98).abs() < EPS);
        assert!((camera.position.length() - 9.98).abs() < EPS);
        assert!(controller.zoom(&mut camera, Vec3::ZERO, -1000.0));
        assert_eq!(controller.orbit_radius(), 0.0);

        let _ = controller.toggle_mode();
        assert!(!controller.zoom(&mut camera, Vec3::ZERO, 1.0));
    }
}
