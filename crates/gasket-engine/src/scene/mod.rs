//! Scene (draw stream) types.
//!
//! Responsibilities:
//! - store renderer-agnostic draw commands
//! - preserve insertion order (the viewer's traversal order is the paint
//!   order; later commands overdraw earlier ones)
//! - keep shape-specific payloads isolated per shape file

mod cmd;
mod list;
mod tri;

pub use cmd::DrawCmd;
pub use list::DrawList;
pub use tri::TriCmd;
