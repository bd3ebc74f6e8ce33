use crate::coords::Vec2;
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList};

/// Base-triangle draw payload.
///
/// The renderer owns a single unit base triangle mesh; each command places
/// one copy of it via the decomposed transform `scale * rot(rotation) * p +
/// translation`, applied per vertex in the shader.
#[derive(Debug, Clone, PartialEq)]
pub struct TriCmd {
    /// Uniform scale factor.
    pub scale: f32,
    /// Rotation around the origin, in radians. Zero on the subdivision path.
    pub rotation: f32,
    /// Translation applied after scale and rotation, in NDC.
    pub translation: Vec2,
    /// Solid fill color.
    pub color: Color,
}

impl TriCmd {
    #[inline]
    pub fn new(scale: f32, rotation: f32, translation: Vec2, color: Color) -> Self {
        Self {
            scale,
            rotation,
            translation,
            color,
        }
    }
}

impl DrawList {
    /// Records a placed base-triangle draw command.
    #[inline]
    pub fn push_tri(&mut self, scale: f32, rotation: f32, translation: Vec2, color: Color) {
        self.push(DrawCmd::Tri(TriCmd::new(scale, rotation, translation, color)));
    }
}
