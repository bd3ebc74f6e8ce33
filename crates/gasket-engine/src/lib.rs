//! Gasket engine crate.
//!
//! This crate owns the platform + GPU runtime pieces used by the viewer:
//! window/event loop, wgpu device + surface, keyboard input state, frame
//! timing, the draw-command scene stream, and the triangle renderer that
//! consumes it.

pub mod device;
pub mod window;
pub mod input;
pub mod time;
pub mod core;

pub mod logging;
pub mod coords;
pub mod render;
pub mod paint;
pub mod scene;
