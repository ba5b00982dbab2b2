use glam::Vec3;

use crate::camera::Camera;
use crate::options::SceneOptions;

/// The movable spot light plus the fixed sun.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneLight {
    /// Spot light direction.
    pub direction: Vec3,
    /// Spot light position.
    pub position: Vec3,
    /// Sun position.
    pub sun_position: Vec3,
    /// Sun colour (linear RGB).
    pub sun_colour: Vec3,
}

impl SceneLight {
    /// Light set-up from the scene options.
    #[must_use]
    pub fn from_options(options: &SceneOptions) -> Self {
        Self {
            direction: Vec3::from_array(options.light_direction),
            position: Vec3::from_array(options.light_position),
            sun_position: Vec3::from_array(options.sun_position),
            sun_colour: Vec3::from_array(options.sun_colour),
        }
    }

    /// Put the spot light where the camera is, pointing where it looks.
    pub fn follow_camera(&mut self, camera: &Camera) {
        self.direction = camera.front;
        self.position = camera.position;
    }
}

impl Default for SceneLight {
    fn default() -> Self {
        Self::from_options(&SceneOptions::default())
    }
}
