// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]
// Allowances (mirror `[lints.clippy]` in Cargo.toml)
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::float_cmp)]
#![allow(clippy::suboptimal_flops)]
#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::similar_names)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::redundant_pub_crate)]
// Tests unwrap freely
#![cfg_attr(test, allow(clippy::unwrap_used))]

//! Fixed-scene 3D viewer for a small plant of mechanical equipment.
//!
//! The heart of the crate is the camera: a yaw/pitch camera that either
//! orbits a fixed target or flies freely, with the basis rebuilt and the
//! pitch clamped on every update.
//!
//! # Key entry points
//!
//! - [`camera::CameraController`] - orbit/free-fly update rules
//! - [`engine::ViewerEngine`] - camera plus scene state behind one command
//!   interface
//! - [`input::InputProcessor`] - raw pointer/key events to commands
//! - [`options::Options`] - TOML-backed scene constants and key bindings
//!
//! # Frame order
//!
//! Input events are applied as they arrive; held keys are applied once per
//! frame by [`engine::ViewerEngine::update_frame`]; the renderer then reads
//! [`engine::ViewerEngine::camera_uniform`]. Everything runs on the thread
//! that owns the window.

pub mod camera;
pub mod engine;
pub mod error;
pub mod input;
pub mod options;
pub mod scene;
pub mod util;
#[cfg(feature = "viewer")]
pub mod viewer;

pub use engine::{ViewerCommand, ViewerEngine};
pub use error::PlantViewError;
pub use input::{InputEvent, MouseButton};
#[cfg(feature = "viewer")]
pub use viewer::Viewer;
