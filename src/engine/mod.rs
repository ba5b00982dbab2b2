//! The viewer engine: camera, controller and plain-data scene state behind
//! a single command interface.
//!
//! The engine never touches the GPU. A renderer reads
//! [`ViewerEngine::camera_uniform`], [`ViewerEngine::light`],
//! [`ViewerEngine::control_box`] and [`ViewerEngine::model_transform`] after
//! input has been applied for the frame.

mod accessors;
pub mod command;
mod input;

use glam::Vec3;

pub use self::command::ViewerCommand;
use crate::camera::{Camera, CameraController, CameraMode};
use crate::input::InputProcessor;
use crate::options::Options;
use crate::scene::{ControlBox, SceneLight};

/// Owns the single camera and everything the input layer can change.
pub struct ViewerEngine {
    camera: Camera,
    controller: CameraController,
    /// Fixed orbit target.
    target: Vec3,
    light: SceneLight,
    control_box: ControlBox,
    inverted: bool,
    input: InputProcessor,
    options: Options,
    viewport: (u32, u32),
    exit_requested: bool,
}

impl ViewerEngine {
    /// Build the engine from options: place the camera, settle it with a
    /// zero-delta update and optionally move the light onto it.
    #[must_use]
    pub fn new(options: Options) -> Self {
        let camera_opts = &options.camera;
        let camera = Camera::from_options(camera_opts);
        let radius = camera_opts.orbit_radius.max(0.0);
        let controller = if camera_opts.free_fly {
            CameraController::with_mode(CameraMode::FreeFly {
                target_distance: radius,
            })
        } else {
            CameraController::new(radius)
        };

        let mut engine = Self {
            camera,
            controller,
            target: Vec3::from_array(camera_opts.target),
            light: SceneLight::from_options(&options.scene),
            control_box: ControlBox::Off,
            inverted: false,
            input: InputProcessor::with_key_bindings(
                options.keybindings.clone(),
            ),
            viewport: (1920, 1080),
            exit_requested: false,
            options,
        };
        engine.controller.rotate(&mut engine.camera, engine.target, 0.0, 0.0);
        if engine.options.scene.light_at_camera {
            engine.light.follow_camera(&engine.camera);
        }
        log::info!(
            "camera ready: {} radius={:.3} yaw={} pitch={}",
            engine.controller.mode().name(),
            engine.controller.orbit_radius(),
            engine.camera.yaw,
            engine.camera.pitch
        );
        engine
    }

    /// Apply one command. Returns `true` if the view (camera, light or
    /// scene appearance) changed.
    pub fn execute(&mut self, cmd: ViewerCommand) -> bool {
        match cmd {
            ViewerCommand::RotateCamera {
                delta_yaw,
                delta_pitch,
            } => {
                self.controller.rotate(
                    &mut self.camera,
                    self.target,
                    delta_yaw,
                    delta_pitch,
                );
                true
            }
            ViewerCommand::Zoom { delta } => {
                let step = delta * self.options.camera.zoom_step;
                self.controller.zoom(&mut self.camera, self.target, step)
            }
            ViewerCommand::MoveCamera { direction } => self.controller.translate(
                &mut self.camera,
                direction,
                self.options.camera.move_step,
            ),
            ViewerCommand::ToggleCameraMode => {
                let _ = self.controller.toggle_mode();
                false
            }
            ViewerCommand::PlaceLight => {
                self.light.follow_camera(&self.camera);
                true
            }
            ViewerCommand::ToggleInvert => {
                self.inverted = !self.inverted;
                log::info!("scene inverted: {}", self.inverted);
                true
            }
            ViewerCommand::CycleControlBox => {
                let _ = self.control_box.cycle();
                true
            }
            ViewerCommand::SwitchOffControlBox => self.control_box.switch_off(),
            ViewerCommand::Exit => {
                log::info!("exit requested");
                self.exit_requested = true;
                false
            }
        }
    }
}

impl Default for ViewerEngine {
    fn default() -> Self {
        Self::new(Options::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::MoveDirection;
    use crate::input::{InputEvent, MouseButton};

    const EPS: f32 = 1e-3;

    #[test]
    fn starts_on_orbit_sphere() {
        let engine = ViewerEngine::default();
        let radius = Options::default().camera.orbit_radius;
        assert!(engine.mode().is_orbit());
        let d = engine.camera().position.distance(engine.target());
        assert!((d - radius).abs() < EPS);
        assert_eq!(engine.camera().yaw, 56.0);
        assert_eq!(engine.camera().pitch, -13.0);
        assert_eq!(engine.light().position, engine.camera().position);
        assert_eq!(engine.control_box(), ControlBox::Off);
    }

    #[test]
    fn orbit_keys_keep_radius() {
        let mut engine = ViewerEngine::default();
        let _ = engine.handle_key("ArrowRight", true);
        for _ in 0..30 {
            let _ = engine.update_frame();
        }
        let _ = engine.handle_key("ArrowRight", false);
        assert!((engine.camera().yaw - (56.0 - 30.0 * 0.2)).abs() < EPS);
        let d = engine.camera().position.distance(engine.target());
        assert!((d - engine.orbit_radius()).abs() < EPS);
    }

    #[test]
    fn zoom_key_shrinks_radius() {
        let mut engine = ViewerEngine::default();
        let before = engine.orbit_radius();
        let _ = engine.handle_key("KeyR", true);
        assert!(engine.update_frame());
        assert!((engine.orbit_radius() - (before - 0.1 * 0.2)).abs() < 1e-5);
    }

    #[test]
    fn free_fly_round_trip() {
        let mut engine = ViewerEngine::default();
        let _ = engine.handle_key("KeyL", true);
        let _ = engine.handle_key("KeyL", false);
        assert!(!engine.mode().is_orbit());

        // Pointer look, then fly forward.
        let _ = engine.handle_input(InputEvent::CursorMoved { x: 100.0, y: 100.0 });
        assert!(engine.handle_input(InputEvent::CursorMoved { x: 110.0, y: 100.0 }));
        assert!((engine.camera().yaw - 58.0).abs() < EPS);
        let start = engine.camera().position;
        assert!(engine.execute(ViewerCommand::MoveCamera {
            direction: MoveDirection::Forward
        }));
        assert!(engine.camera().position.distance(start) > 0.0);

        let front = engine.camera().front;
        let radius = {
            let _ = engine.execute(ViewerCommand::RotateCamera {
                delta_yaw: 0.0,
                delta_pitch: 0.0,
            });
            engine.orbit_radius()
        };
        let _ = engine.execute(ViewerCommand::ToggleCameraMode);
        assert!(engine.mode().is_orbit());
        assert_eq!(engine.orbit_radius(), radius);
        let _ = engine.execute(ViewerCommand::RotateCamera {
            delta_yaw: 0.0,
            delta_pitch: 0.0,
        });
        assert!((engine.camera().front - front).length() < EPS);
        let d = engine.camera().position.distance(engine.target());
        assert!((d - radius).abs() < EPS);
    }

    #[test]
    fn move_ignored_while_orbiting() {
        let mut engine = ViewerEngine::default();
        let start = engine.camera().position;
        assert!(!engine.execute(ViewerCommand::MoveCamera {
            direction: MoveDirection::Left
        }));
        assert_eq!(engine.camera().position, start);
    }

    #[test]
    fn scene_commands() {
        let mut engine = ViewerEngine::default();
        assert!(engine.handle_input(InputEvent::MouseButton {
            button: MouseButton::Left,
            pressed: true,
        }));
        assert_eq!(engine.control_box(), ControlBox::HalfHalf);
        assert!(engine.handle_input(InputEvent::MouseButton {
            button: MouseButton::Right,
            pressed: true,
        }));
        assert_eq!(engine.control_box(), ControlBox::Off);

        assert!(!engine.is_inverted());
        let _ = engine.handle_key("KeyT", true);
        assert!(engine.is_inverted());
        assert_eq!(engine.model_transform().y_axis.y, -1.0);

        assert!(!engine.should_exit());
        let _ = engine.handle_key("Escape", true);
        assert!(engine.should_exit());
    }

    #[test]
    fn light_follows_camera_on_space() {
        let mut engine = ViewerEngine::default();
        let _ = engine.handle_key("ArrowUp", true);
        let _ = engine.update_frame();
        let _ = engine.handle_key("ArrowUp", false);
        assert_ne!(engine.light().position, engine.camera().position);
        let _ = engine.handle_key("Space", true);
        let _ = engine.update_frame();
        assert_eq!(engine.light().position, engine.camera().position);
        assert_eq!(engine.light().direction, engine.camera().front);
    }

    #[test]
    fn uniform_uses_viewport_aspect() {
        let mut engine = ViewerEngine::default();
        engine.resize(800, 400);
        let uniform = engine.camera_uniform();
        assert_eq!(uniform.aspect, 2.0);
        assert_eq!(uniform.position, engine.camera().position.to_array());
        engine.resize(0, 0);
        assert_eq!(engine.aspect(), 1.0);
    }

    #[test]
    fn view_projection_combines_accessors() {
        let mut engine = ViewerEngine::default();
        engine.resize(1600, 900);
        let expected = engine.projection() * engine.view_matrix();
        assert!(engine.view_projection().abs_diff_eq(expected, 1e-5));
    }

    #[test]
    fn starts_in_free_fly_when_configured() {
        let mut options = Options::default();
        options.camera.free_fly = true;
        let engine = ViewerEngine::new(options);
        assert!(!engine.mode().is_orbit());
        assert_eq!(engine.camera().position, Vec3::new(-17.0, 10.0, -23.0));
    }
}
