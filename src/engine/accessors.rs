//! Read-only views of the engine state for renderers and tests.

use glam::{Mat4, Vec3};

use super::ViewerEngine;
use crate::camera::{Camera, CameraMode, CameraUniform};
use crate::input::InputProcessor;
use crate::options::Options;
use crate::scene::{self, ControlBox, SceneLight};

impl ViewerEngine {
    /// The camera, as last updated.
    #[must_use]
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// Current camera mode.
    #[must_use]
    pub fn mode(&self) -> CameraMode {
        self.controller.mode()
    }

    /// Radius the next orbit update resumes at.
    #[must_use]
    pub fn orbit_radius(&self) -> f32 {
        self.controller.orbit_radius()
    }

    /// Fixed orbit target.
    #[must_use]
    pub fn target(&self) -> Vec3 {
        self.target
    }

    /// Spot light and sun.
    #[must_use]
    pub fn light(&self) -> &SceneLight {
        &self.light
    }

    /// Control box state.
    #[must_use]
    pub fn control_box(&self) -> ControlBox {
        self.control_box
    }

    /// Whether the scene is mirrored across the ground plane.
    #[must_use]
    pub fn is_inverted(&self) -> bool {
        self.inverted
    }

    /// Model transform shared by every scene object.
    #[must_use]
    pub fn model_transform(&self) -> Mat4 {
        scene::model_transform(self.inverted)
    }

    /// Options the engine was built with.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// The input processor, for inspecting held keys and bindings.
    #[must_use]
    pub fn input(&self) -> &InputProcessor {
        &self.input
    }

    /// Whether an exit command has been executed.
    #[must_use]
    pub fn should_exit(&self) -> bool {
        self.exit_requested
    }

    /// Record the viewport size in physical pixels.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.viewport = (width.max(1), height.max(1));
    }

    /// Viewport aspect ratio (width / height).
    #[must_use]
    pub fn aspect(&self) -> f32 {
        self.viewport.0 as f32 / self.viewport.1 as f32
    }

    /// `look_at(position, position + front, up)`.
    #[must_use]
    pub fn view_matrix(&self) -> Mat4 {
        self.camera.build_view()
    }

    /// Perspective projection for the current viewport.
    #[must_use]
    pub fn projection(&self) -> Mat4 {
        self.camera.build_projection(self.aspect())
    }

    /// Combined view-projection matrix for the current viewport.
    #[must_use]
    pub fn view_projection(&self) -> Mat4 {
        self.camera.build_matrix(self.aspect())
    }

    /// GPU-ready camera data for the current viewport.
    #[must_use]
    pub fn camera_uniform(&self) -> CameraUniform {
        let mut uniform = CameraUniform::new();
        uniform.update(&self.camera, self.aspect());
        uniform
    }
}
