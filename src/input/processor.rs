//! Converts raw platform events into viewer commands.
//!
//! The `InputProcessor` owns all transient input state (cursor tracking,
//! held keys) and the key-binding map. It is the only thing that sits
//! between raw window events and the engine's
//! [`execute`](crate::engine::ViewerEngine::execute) method.
//!
//! Keys come in two flavours. Toggles fire once when the key goes down and
//! ignore auto-repeat. Everything else is *held* state, polled once per
//! frame through [`InputProcessor::frame_commands`], so a held arrow key
//! keeps orbiting at a steady per-frame rate.

use std::collections::HashSet;

use super::event::{InputEvent, MouseButton};
use super::keyboard::KeyAction;
use super::mouse::PointerTracker;
use crate::camera::{CameraMode, MoveDirection};
use crate::engine::ViewerCommand;
use crate::options::KeybindingOptions;

/// Converts raw window events into [`ViewerCommand`]s.
///
/// # Usage
///
/// ```ignore
/// // In the event loop:
/// if let Some(cmd) = input_processor.handle_event(event, mode) {
///     engine.execute(cmd);
/// }
///
/// // Once per frame:
/// for cmd in input_processor.frame_commands(mode) {
///     engine.execute(cmd);
/// }
/// ```
pub struct InputProcessor {
    /// Cursor tracking.
    pointer: PointerTracker,
    /// Actions whose key is currently down.
    held: HashSet<KeyAction>,
    /// Key string → action mapping.
    key_bindings: KeybindingOptions,
}

impl InputProcessor {
    /// Create a new processor with default key bindings.
    #[must_use]
    pub fn new() -> Self {
        Self::with_key_bindings(KeybindingOptions::default())
    }

    /// Create a processor with custom key bindings.
    #[must_use]
    pub fn with_key_bindings(key_bindings: KeybindingOptions) -> Self {
        Self {
            pointer: PointerTracker::new(),
            held: HashSet::new(),
            key_bindings,
        }
    }

    /// Current cursor position in physical pixels.
    #[must_use]
    pub fn mouse_pos(&self) -> (f32, f32) {
        self.pointer.mouse_pos
    }

    /// Whether the key bound to `action` is currently down.
    #[must_use]
    pub fn is_held(&self, action: KeyAction) -> bool {
        self.held.contains(&action)
    }

    /// Read-only access to the key bindings.
    #[must_use]
    pub fn key_bindings(&self) -> &KeybindingOptions {
        &self.key_bindings
    }

    /// Mutable access to the key bindings for reconfiguration.
    pub fn key_bindings_mut(&mut self) -> &mut KeybindingOptions {
        &mut self.key_bindings
    }

    /// Release every held key.
    pub fn release_all(&mut self) {
        self.held.clear();
    }

    /// Process a physical key change. Returns a command only for toggle
    /// actions, and only on the press that takes the key from up to down.
    pub fn handle_key(
        &mut self,
        key: &str,
        pressed: bool,
    ) -> Option<ViewerCommand> {
        let action = self.key_bindings.lookup(key)?;
        if !pressed {
            let _ = self.held.remove(&action);
            return None;
        }
        let newly_pressed = self.held.insert(action);
        if !(newly_pressed && action.is_toggle()) {
            return None;
        }
        match action {
            KeyAction::ToggleCameraMode => {
                // The cursor may have moved while the other mode ignored it.
                self.pointer.reset();
                Some(ViewerCommand::ToggleCameraMode)
            }
            KeyAction::ToggleInvert => Some(ViewerCommand::ToggleInvert),
            KeyAction::Exit => Some(ViewerCommand::Exit),
            _ => None,
        }
    }

    /// Process a pointer event and return zero or one commands.
    ///
    /// Cursor motion only turns the camera in free-fly mode; while orbiting
    /// the tracker is reset so the first free-fly sample does not jump.
    pub fn handle_event(
        &mut self,
        event: InputEvent,
        mode: CameraMode,
    ) -> Option<ViewerCommand> {
        match event {
            InputEvent::CursorMoved { x, y } => {
                if mode.is_orbit() {
                    self.pointer.reset();
                    self.pointer.observe(x, y);
                    return None;
                }
                let (dx, dy) = self.pointer.offset(x, y)?;
                Some(ViewerCommand::RotateCamera {
                    delta_yaw: dx,
                    delta_pitch: dy,
                })
            }
            InputEvent::MouseButton {
                button: MouseButton::Left,
                pressed: true,
            } => Some(ViewerCommand::CycleControlBox),
            InputEvent::MouseButton {
                button: MouseButton::Right,
                pressed: true,
            } => Some(ViewerCommand::SwitchOffControlBox),
            InputEvent::MouseButton { .. } => None,
            InputEvent::FocusLost => {
                self.release_all();
                None
            }
        }
    }

    /// Commands produced by the keys held during this frame.
    ///
    /// Orbit mode: the arrow keys give one unit rotation (later keys in
    /// up, down, left, right order win) and the zoom keys change the
    /// radius. Free-fly mode: the movement keys translate the camera.
    #[must_use]
    pub fn frame_commands(&self, mode: CameraMode) -> Vec<ViewerCommand> {
        let mut commands = Vec::new();

        if self.is_held(KeyAction::PlaceLight) {
            commands.push(ViewerCommand::PlaceLight);
        }

        if mode.is_orbit() {
            if self.is_held(KeyAction::ZoomIn) {
                commands.push(ViewerCommand::Zoom { delta: -1.0 });
            }
            if self.is_held(KeyAction::ZoomOut) {
                commands.push(ViewerCommand::Zoom { delta: 1.0 });
            }
            if let Some((delta_yaw, delta_pitch)) = self.orbit_direction() {
                commands.push(ViewerCommand::RotateCamera {
                    delta_yaw,
                    delta_pitch,
                });
            }
        } else {
            let moves = [
                (KeyAction::MoveForward, MoveDirection::Forward),
                (KeyAction::MoveBackward, MoveDirection::Backward),
                (KeyAction::MoveLeft, MoveDirection::Left),
                (KeyAction::MoveRight, MoveDirection::Right),
            ];
            commands.extend(
                moves
                    .into_iter()
                    .filter(|(action, _)| self.is_held(*action))
                    .map(|(_, direction)| ViewerCommand::MoveCamera {
                        direction,
                    }),
            );
        }

        commands
    }

    /// Unit orbit delta for the held arrow keys, if any.
    fn orbit_direction(&self) -> Option<(f32, f32)> {
        let arrows = [
            (KeyAction::OrbitUp, (0.0, 1.0)),
            (KeyAction::OrbitDown, (0.0, -1.0)),
            (KeyAction::OrbitLeft, (-1.0, 0.0)),
            (KeyAction::OrbitRight, (1.0, 0.0)),
        ];
        arrows
            .into_iter()
            .filter(|(action, _)| self.is_held(*action))
            .map(|(_, delta)| delta)
            .next_back()
    }
}

impl Default for InputProcessor {
    fn default() -> Self {
        Self::new()
    }
}
