//! Plain-data scene state that sits next to the camera: the control box
//! state machine, the lights and the object inversion toggle.
//!
//! Nothing here touches GPU handles or asset files; a renderer reads these
//! values each frame.

mod control_box;
mod light;

use glam::{Mat4, Vec3};

pub use control_box::{ControlBox, Indicators, Lamp};
pub use light::SceneLight;

/// Model transform shared by every object in the scene. Inverted scenes
/// are mirrored across the ground plane.
#[must_use]
pub fn model_transform(inverted: bool) -> Mat4 {
    if inverted {
        Mat4::from_scale(Vec3::new(1.0, -1.0, 1.0))
    } else {
        Mat4::IDENTITY
    }
}
