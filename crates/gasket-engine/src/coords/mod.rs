//! Coordinate and geometry types shared across the engine and the viewer.
//!
//! Canonical CPU space:
//! - Normalized device coordinates (NDC)
//! - Origin at the window center
//! - +X right, +Y up, visible range [-1, 1] on both axes
//!
//! Geometry is handed to the GPU in this space unchanged; there is no
//! viewport basis conversion in the shaders. A consequence is that the image
//! stretches with the window when the aspect ratio changes.

mod vec2;

pub use vec2::Vec2;
