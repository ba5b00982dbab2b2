use serde::{Deserialize, Serialize};

/// Viewer actions that can be bound to keys.
///
/// Serde serializes as `snake_case` strings so TOML presets stay readable:
/// ```toml
/// [keybindings.bindings]
/// toggle_camera_mode = "KeyL"
/// move_forward = "KeyW"
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyAction {
    /// Orbit upwards (held, orbit mode).
    OrbitUp,
    /// Orbit downwards (held, orbit mode).
    OrbitDown,
    /// Orbit to the left (held, orbit mode).
    OrbitLeft,
    /// Orbit to the right (held, orbit mode).
    OrbitRight,
    /// Shrink the orbit radius (held, orbit mode).
    ZoomIn,
    /// Grow the orbit radius (held, orbit mode).
    ZoomOut,
    /// Fly forward (held, free-fly mode).
    MoveForward,
    /// Fly backward (held, free-fly mode).
    MoveBackward,
    /// Strafe left (held, free-fly mode).
    MoveLeft,
    /// Strafe right (held, free-fly mode).
    MoveRight,
    /// Switch between orbit and free-fly (once per press).
    ToggleCameraMode,
    /// Mirror the scene across the ground plane (once per press).
    ToggleInvert,
    /// Move the spot light to the camera (held).
    PlaceLight,
    /// Close the viewer (once per press).
    Exit,
}

impl KeyAction {
    /// Whether the action fires once per physical press rather than every
    /// frame while held.
    #[must_use]
    pub fn is_toggle(self) -> bool {
        matches!(self, Self::ToggleCameraMode | Self::ToggleInvert | Self::Exit)
    }
}
