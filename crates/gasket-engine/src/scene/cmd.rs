use crate::scene::tri::TriCmd;

/// Renderer-agnostic draw command stream.
///
/// Extending the scene:
/// - add a new payload module under `scene::*`
/// - add a new variant here
/// - implement push helpers inside that payload module
/// - add a matching renderer under `render::*`
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    Tri(TriCmd),
}
