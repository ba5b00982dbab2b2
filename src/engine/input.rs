//! Input methods for ViewerEngine

use super::ViewerEngine;
use crate::input::InputEvent;

impl ViewerEngine {
    /// Process a platform-agnostic pointer event.
    ///
    /// Returns `true` if the view changed.
    pub fn handle_input(&mut self, event: InputEvent) -> bool {
        let mode = self.controller.mode();
        self.input
            .handle_event(event, mode)
            .is_some_and(|cmd| self.execute(cmd))
    }

    /// Process a physical key change (`key` in `winit::keyboard::KeyCode`
    /// debug format, e.g. `"KeyL"`). Toggle actions run immediately; held
    /// actions are applied by [`update_frame`](Self::update_frame).
    pub fn handle_key(&mut self, key: &str, pressed: bool) -> bool {
        self.input
            .handle_key(key, pressed)
            .is_some_and(|cmd| self.execute(cmd))
    }

    /// Apply the commands for every key held this frame. Returns `true` if
    /// any of them changed the view.
    pub fn update_frame(&mut self) -> bool {
        let commands = self.input.frame_commands(self.controller.mode());
        let mut changed = false;
        for cmd in commands {
            changed |= self.execute(cmd);
        }
        if changed {
            log::trace!(
                "frame: pos={:?} front={:?}",
                self.camera.position,
                self.camera.front
            );
        }
        changed
    }
}
