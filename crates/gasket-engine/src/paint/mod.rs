//! Paint model shared between the viewer and the renderer.
//!
//! Scope:
//! - color representation (linear RGBA, solid fills only)
//!
//! Geometry types remain in `coords`.

mod color;

pub use color::Color;
