//! Shared utilities for the viewer loop.

pub mod frame_timing;
