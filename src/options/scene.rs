use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Scene", inline)]
#[serde(default)]
/// Lights and frame pacing for the plant scene.
pub struct SceneOptions {
    /// Initial spot light direction.
    #[schemars(skip)]
    pub light_direction: [f32; 3],
    /// Initial spot light position.
    #[schemars(skip)]
    pub light_position: [f32; 3],
    /// Sun position.
    #[schemars(skip)]
    pub sun_position: [f32; 3],
    /// Sun colour.
    #[schemars(skip)]
    pub sun_colour: [f32; 3],
    /// Move the spot light to the camera on start-up.
    #[schemars(title = "Light Follows Camera")]
    pub light_at_camera: bool,
    /// Frame limit (0 = unlimited).
    #[schemars(title = "Target FPS", range(min = 0, max = 240))]
    pub target_fps: u32,
}

impl Default for SceneOptions {
    fn default() -> Self {
        Self {
            light_direction: [0.1, -0.81, -0.61],
            light_position: [2.0, 6.0, 7.0],
            sun_position: [-3.848_88, 15.3776, -21.5044],
            sun_colour: [0.5, 0.0, 0.0],
            light_at_camera: true,
            target_fps: 60,
        }
    }
}
