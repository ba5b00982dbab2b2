//! Camera system for the plant scene.
//!
//! Provides a yaw/pitch camera that either orbits a fixed target or flies
//! freely, plus the view/projection matrices and GPU uniform derived from it.

/// Orbit/free-fly controller and its mode.
pub mod controller;
/// Core camera struct and GPU uniform types.
pub mod core;

pub use controller::{CameraController, CameraMode, MoveDirection};
pub use core::{Camera, CameraUniform};
