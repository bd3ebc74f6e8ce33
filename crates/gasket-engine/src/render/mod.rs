//! GPU rendering subsystem.
//!
//! Renderers consume `scene` draw streams and issue GPU commands via wgpu.
//! Each renderer is responsible for its own GPU resources (pipelines,
//! buffers).
//!
//! Convention:
//! - CPU geometry is in NDC (origin center, +Y up); shaders apply the
//!   per-command transform and emit clip-space positions directly.
//! - Paint order is insertion order; later commands overdraw earlier ones.

mod ctx;
mod tri;

pub use ctx::{RenderCtx, RenderTarget};
pub use tri::{TriRenderer, BASE_TRIANGLE};
