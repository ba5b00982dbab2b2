use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Camera", inline)]
#[serde(default)]
/// Camera start pose, projection and control parameters.
pub struct CameraOptions {
    /// Vertical field of view in degrees.
    #[schemars(title = "Field of View", range(min = 20.0, max = 90.0), extend("step" = 1.0))]
    pub fovy: f32,
    /// Near clipping plane distance.
    #[schemars(skip)]
    pub znear: f32,
    /// Far clipping plane distance.
    #[schemars(skip)]
    pub zfar: f32,
    /// Multiplier for angular deltas, zoom and movement.
    #[schemars(title = "Movement Speed", range(min = 0.01, max = 2.0), extend("step" = 0.01))]
    pub movement_speed: f32,
    /// Starting heading in degrees.
    #[schemars(skip)]
    pub yaw: f32,
    /// Starting elevation in degrees.
    #[schemars(skip)]
    pub pitch: f32,
    /// Starting eye position.
    #[schemars(skip)]
    pub position: [f32; 3],
    /// Starting look direction.
    #[schemars(skip)]
    pub front: [f32; 3],
    /// Point the camera orbits around.
    #[schemars(skip)]
    pub target: [f32; 3],
    /// Starting orbit radius.
    #[schemars(title = "Orbit Radius", range(min = 1.0, max = 60.0), extend("step" = 0.5))]
    pub orbit_radius: f32,
    /// Start in free-fly mode instead of orbiting.
    #[schemars(title = "Start in Free-Fly")]
    pub free_fly: bool,
    /// Radius change per zoom key frame, before `movement_speed`.
    #[schemars(skip)]
    pub zoom_step: f32,
    /// Distance per movement key frame, before `movement_speed`.
    #[schemars(skip)]
    pub move_step: f32,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            fovy: 45.0,
            znear: 0.1,
            zfar: 100.0,
            movement_speed: 0.2,
            yaw: 56.0,
            pitch: -13.0,
            position: [-17.0, 10.0, -23.0],
            front: [0.544_861, -0.224_951, 0.807_789],
            target: [0.621_314, 3.251_53, -6.823_11],
            orbit_radius: 24.8545,
            free_fly: false,
            zoom_step: 0.1,
            move_step: 0.1,
        }
    }
}
