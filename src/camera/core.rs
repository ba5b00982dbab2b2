use glam::{Mat4, Vec3};

use crate::options::CameraOptions;

/// Pitch limit in degrees. Keeps `front` away from `world_up` so the
/// right-vector cross product never degenerates.
pub const PITCH_LIMIT: f32 = 89.0;

/// Yaw/pitch camera with an explicit orthonormal basis.
///
/// The basis (`front`, `right`, `up`) is derived state: the
/// [`CameraController`](super::controller::CameraController) rebuilds it
/// from the angles (and, in orbit mode, the target) on every update.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    /// Eye position in world space.
    pub position: Vec3,
    /// Unit look direction.
    pub front: Vec3,
    /// Unit right vector, `front × world_up`.
    pub right: Vec3,
    /// Unit up vector, `right × front`.
    pub up: Vec3,
    /// Fixed reference up direction.
    pub world_up: Vec3,
    /// Heading in degrees. Unbounded.
    pub yaw: f32,
    /// Elevation in degrees, kept in `[-PITCH_LIMIT, PITCH_LIMIT]`.
    pub pitch: f32,
    /// Multiplier applied to every angular delta and translation step.
    movement_speed: f32,
    /// Vertical field of view in degrees.
    pub fovy: f32,
    /// Near clipping plane distance.
    pub znear: f32,
    /// Far clipping plane distance.
    pub zfar: f32,
}

impl Camera {
    /// Create a camera from its starting angles, position and look
    /// direction. `up` is the world up until the first update.
    #[must_use]
    pub fn new(
        yaw: f32,
        pitch: f32,
        position: Vec3,
        front: Vec3,
        movement_speed: f32,
    ) -> Self {
        let world_up = Vec3::Y;
        let front = front.try_normalize().unwrap_or(Vec3::Z);
        let right = front.cross(world_up).try_normalize().unwrap_or(Vec3::X);
        Self {
            position,
            front,
            right,
            up: world_up,
            world_up,
            yaw,
            pitch: clamp_pitch(pitch),
            movement_speed,
            fovy: 45.0,
            znear: 0.1,
            zfar: 100.0,
        }
    }

    /// Build a camera from options, including the projection parameters.
    #[must_use]
    pub fn from_options(options: &CameraOptions) -> Self {
        let mut camera = Self::new(
            options.yaw,
            options.pitch,
            Vec3::from_array(options.position),
            Vec3::from_array(options.front),
            options.movement_speed,
        );
        camera.fovy = options.fovy;
        camera.znear = options.znear;
        camera.zfar = options.zfar;
        camera
    }

    /// Scalar applied to angular deltas and translation steps.
    #[must_use]
    pub fn movement_speed(&self) -> f32 {
        self.movement_speed
    }

    /// View matrix, `look_at(position, position + front, up)`.
    #[must_use]
    pub fn build_view(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.position + self.front, self.up)
    }

    /// Perspective projection for the given viewport aspect ratio.
    #[must_use]
    pub fn build_projection(&self, aspect: f32) -> Mat4 {
        Mat4::perspective_rh(
            self.fovy.to_radians(),
            aspect,
            self.znear,
            self.zfar,
        )
    }

    /// Build the combined view-projection matrix.
    #[must_use]
    pub fn build_matrix(&self, aspect: f32) -> Mat4 {
        self.build_projection(aspect) * self.build_view()
    }
}

/// Clamp a pitch angle (degrees) to the allowed range.
#[must_use]
pub fn clamp_pitch(pitch: f32) -> f32 {
    pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT)
}

/// Unit direction for a yaw/pitch pair given in degrees.
///
/// `(cos yaw · cos pitch, sin pitch, sin yaw · cos pitch)`
#[must_use]
pub fn spherical_direction(yaw: f32, pitch: f32) -> Vec3 {
    let (sin_yaw, cos_yaw) = yaw.to_radians().sin_cos();
    let (sin_pitch, cos_pitch) = pitch.to_radians().sin_cos();
    Vec3::new(cos_yaw * cos_pitch, sin_pitch, sin_yaw * cos_pitch)
}

#[repr(C)]
#[derive(Debug, Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
/// GPU uniform buffer holding the camera matrices and eye data used by the
/// per-vertex lighting shader.
pub struct CameraUniform {
    /// View matrix.
    pub view: [[f32; 4]; 4],
    /// Projection matrix.
    pub projection: [[f32; 4]; 4],
    /// Camera world-space position.
    pub position: [f32; 3],
    /// Viewport aspect ratio.
    pub aspect: f32,
    /// Camera forward direction.
    pub front: [f32; 3],
    /// Vertical field of view in degrees.
    pub fovy: f32,
}

impl Default for CameraUniform {
    fn default() -> Self {
        Self::new()
    }
}

impl CameraUniform {
    /// Create a new camera uniform with identity matrices.
    #[must_use]
    pub fn new() -> Self {
        Self {
            view: Mat4::IDENTITY.to_cols_array_2d(),
            projection: Mat4::IDENTITY.to_cols_array_2d(),
            position: [0.0; 3],
            aspect: 16.0 / 9.0,
            front: [0.0, 0.0, -1.0],
            fovy: 45.0,
        }
    }

    /// Update uniform fields from the given camera's current state.
    pub fn update(&mut self, camera: &Camera, aspect: f32) {
        self.view = camera.build_view().to_cols_array_2d();
        self.projection = camera.build_projection(aspect).to_cols_array_2d();
        self.position = camera.position.to_array();
        self.aspect = aspect;
        self.front = camera.front.to_array();
        self.fovy = camera.fovy;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spherical_direction_axes() {
        let d = spherical_direction(0.0, 0.0);
        assert!((d - Vec3::X).length() < 1e-6);
        let d = spherical_direction(90.0, 0.0);
        assert!((d - Vec3::Z).length() < 1e-6);
        let d = spherical_direction(0.0, 89.0);
        assert!(d.y > 0.99);
        assert!((d.length() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn new_clamps_pitch_and_normalizes_front() {
        let camera =
            Camera::new(0.0, 120.0, Vec3::ZERO, Vec3::new(2.0, 0.0, 0.0), 1.0);
        assert_eq!(camera.pitch, PITCH_LIMIT);
        assert!((camera.front.length() - 1.0).abs() < 1e-6);
        assert_eq!(camera.world_up, Vec3::Y);
    }

    #[test]
    fn view_matrix_maps_eye_to_origin() {
        let camera = Camera::new(
            0.0,
            0.0,
            Vec3::new(1.0, 2.0, 3.0),
            Vec3::new(0.0, 0.0, -1.0),
            1.0,
        );
        let eye = camera.build_view().transform_point3(camera.position);
        assert!(eye.length() < 1e-5);
    }

    #[test]
    fn combined_matrix_is_projection_after_view() {
        let camera = Camera::new(
            30.0,
            -10.0,
            Vec3::new(-17.0, 10.0, -23.0),
            Vec3::new(0.544_861, -0.224_951, 0.807_789),
            0.2,
        );
        let point = Vec3::new(0.6, 3.2, -6.8);
        let combined = camera.build_matrix(1.5).project_point3(point);
        let stepwise = camera
            .build_projection(1.5)
            .project_point3(camera.build_view().transform_point3(point));
        assert!((combined - stepwise).length() < 1e-5);
    }

    #[test]
    fn uniform_tracks_camera() {
        let camera = Camera::new(
            0.0,
            0.0,
            Vec3::new(1.0, 2.0, 3.0),
            Vec3::new(1.0, 0.0, 0.0),
            1.0,
        );
        let mut uniform = CameraUniform::new();
        uniform.update(&camera, 2.0);
        assert_eq!(uniform.position, [1.0, 2.0, 3.0]);
        assert_eq!(uniform.aspect, 2.0);
        assert_eq!(uniform.front, [1.0, 0.0, 0.0]);
        assert_eq!(size_of::<CameraUniform>(), 160);
    }
}
