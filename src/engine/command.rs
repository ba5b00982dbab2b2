//! The viewer's complete interactive vocabulary.
//!
//! Every user-facing operation, whether triggered by a key, a mouse
//! gesture or a programmatic call, is represented as a `ViewerCommand`.
//! Consumers construct commands and pass them to
//! [`ViewerEngine::execute`](super::ViewerEngine::execute).

use crate::camera::MoveDirection;

/// A single operation on the viewer state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ViewerCommand {
    // ── Camera ──────────────────────────────────────────────────────
    /// Turn the camera by unscaled angular deltas (pointer pixels or unit
    /// key steps). The controller applies the movement speed and the
    /// mode's sign convention.
    RotateCamera {
        /// Horizontal delta.
        delta_yaw: f32,
        /// Vertical delta (positive = up).
        delta_pitch: f32,
    },

    /// Change the orbit radius by `delta` zoom steps (negative = closer).
    Zoom {
        /// Number of zoom steps.
        delta: f32,
    },

    /// Move one movement step along the camera basis (free-fly only).
    MoveCamera {
        /// Which way to go.
        direction: MoveDirection,
    },

    /// Switch between orbit and free-fly.
    ToggleCameraMode,

    // ── Scene ───────────────────────────────────────────────────────
    /// Move the spot light to the camera.
    PlaceLight,

    /// Mirror the scene across the ground plane.
    ToggleInvert,

    /// Step the control box to its next running state.
    CycleControlBox,

    /// Switch the control box off.
    SwitchOffControlBox,

    // ── Application ─────────────────────────────────────────────────
    /// Close the viewer.
    Exit,
}
