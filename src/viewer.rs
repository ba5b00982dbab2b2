//! Standalone viewer window backed by winit.
//!
//! The window feeds pointer and key events to a [`ViewerEngine`] and runs
//! the held-key update once per paced frame. Drawing the plant meshes is
//! left to whichever renderer consumes [`ViewerEngine::camera_uniform`].
//!
//! ```no_run
//! # use plantview::Viewer;
//! Viewer::builder()
//!     .with_title("Pump Room")
//!     .build()
//!     .run()
//!     .unwrap();
//! ```

use std::sync::Arc;

use winit::{
    application::ApplicationHandler,
    event::{ElementState, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::PhysicalKey,
    window::{Window, WindowId},
};

use crate::{
    engine::ViewerEngine, error::PlantViewError, input::InputEvent,
    input::MouseButton, options::Options, util::frame_timing::FrameTiming,
};

/// How often (in frames) the frame rate is logged.
const FPS_LOG_INTERVAL: u64 = 600;

// ── Builder ──────────────────────────────────────────────────────────────

/// Fluent builder for [`Viewer`].
pub struct ViewerBuilder {
    options: Option<Options>,
    title: String,
}

impl ViewerBuilder {
    /// Create a builder with default options and the title
    /// "Plant Viewer".
    fn new() -> Self {
        Self {
            options: None,
            title: "Plant Viewer".into(),
        }
    }

    /// Override the default options.
    #[must_use]
    pub fn with_options(mut self, options: Options) -> Self {
        self.options = Some(options);
        self
    }

    /// Set the window title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Consume the builder and produce a [`Viewer`].
    #[must_use]
    pub fn build(self) -> Viewer {
        Viewer {
            options: self.options.unwrap_or_default(),
            title: self.title,
        }
    }
}

// ── Viewer ───────────────────────────────────────────────────────────────

/// A standalone window driving the plant camera.
///
/// Construct via [`Viewer::builder`], then call [`run`](Self::run) to
/// enter the event loop.
pub struct Viewer {
    options: Options,
    title: String,
}

impl Viewer {
    /// Start a new builder.
    #[must_use]
    pub fn builder() -> ViewerBuilder {
        ViewerBuilder::new()
    }

    /// Open the window and run the event loop. Blocks until the window is
    /// closed or the exit key is pressed.
    ///
    /// # Errors
    ///
    /// Returns [`PlantViewError::Viewer`] if the event loop cannot be
    /// created or exits with an error.
    pub fn run(self) -> Result<(), PlantViewError> {
        let event_loop = EventLoop::new()
            .map_err(|e| PlantViewError::Viewer(e.to_string()))?;
        event_loop.set_control_flow(ControlFlow::Poll);

        let mut app = ViewerApp {
            window: None,
            timing: FrameTiming::new(self.options.scene.target_fps),
            engine: ViewerEngine::new(self.options),
            title: self.title,
        };

        event_loop
            .run_app(&mut app)
            .map_err(|e| PlantViewError::Viewer(e.to_string()))
    }
}

// ── Winit app ────────────────────────────────────────────────────────────

/// Internal winit application handler.
struct ViewerApp {
    window: Option<Arc<Window>>,
    engine: ViewerEngine,
    timing: FrameTiming,
    title: String,
}

impl ViewerApp {
    /// Run one paced frame: apply held keys, then report.
    fn frame(&mut self) {
        if !self.timing.should_render() {
            return;
        }
        if self.engine.update_frame() {
            log::trace!("view-projection: {:?}", self.engine.view_projection());
        }
        let _ = self.timing.end_frame();
        if self.timing.frame_count().is_multiple_of(FPS_LOG_INTERVAL) {
            log::debug!(
                "{:.1} fps, camera {} at {:?}",
                self.timing.fps(),
                self.engine.mode().name(),
                self.engine.camera().position
            );
        }
    }
}

impl ApplicationHandler for ViewerApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let attrs = Window::default_attributes()
            .with_title(&self.title)
            .with_inner_size(winit::dpi::LogicalSize::new(1280.0, 720.0));

        let window = match event_loop.create_window(attrs) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                log::error!("Failed to create window: {e}");
                event_loop.exit();
                return;
            }
        };

        let inner = window.inner_size();
        self.engine.resize(inner.width, inner.height);
        window.request_redraw();
        self.window = Some(window);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
                return;
            }
            WindowEvent::Resized(size) => {
                self.engine.resize(size.width, size.height);
            }
            WindowEvent::Focused(false) => {
                let _ = self.engine.handle_input(InputEvent::FocusLost);
            }
            WindowEvent::CursorMoved { position, .. } => {
                #[allow(clippy::cast_possible_truncation)]
                let (x, y) = (position.x as f32, position.y as f32);
                let _ = self
                    .engine
                    .handle_input(InputEvent::CursorMoved { x, y });
            }
            WindowEvent::MouseInput { button, state, .. } => {
                let _ = self.engine.handle_input(InputEvent::MouseButton {
                    button: MouseButton::from(button),
                    pressed: state == ElementState::Pressed,
                });
            }
            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(code) = event.physical_key {
                    let key = format!("{code:?}");
                    let _ = self
                        .engine
                        .handle_key(&key, event.state == ElementState::Pressed);
                }
            }
            WindowEvent::RedrawRequested => self.frame(),
            _ => {}
        }

        if self.engine.should_exit() {
            event_loop.exit();
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if let Some(deadline) = self.timing.next_frame_at() {
            event_loop.set_control_flow(ControlFlow::WaitUntil(deadline));
        }
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}
