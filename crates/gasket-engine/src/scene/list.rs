use super::DrawCmd;

/// Recorded draw stream for a frame.
///
/// Commands are replayed by renderers in insertion order; there is no
/// z-sorting. The stream is rebuilt from scratch every frame — `clear()`
/// keeps allocated capacity so a steady-state frame allocates nothing.
#[derive(Debug, Default)]
pub struct DrawList {
    items: Vec<DrawCmd>,
}

impl DrawList {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears recorded items. Keeps allocated capacity for reuse.
    #[inline]
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Returns items in insertion order.
    #[inline]
    pub fn items(&self) -> &[DrawCmd] {
        &self.items
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Pushes a draw command.
    #[inline]
    pub fn push(&mut self, cmd: DrawCmd) {
        self.items.push(cmd);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Vec2;
    use crate::paint::Color;

    fn tri(scale: f32) -> DrawCmd {
        DrawCmd::Tri(crate::scene::TriCmd::new(
            scale,
            0.0,
            Vec2::zero(),
            Color::black(),
        ))
    }

    // ── ordering ──────────────────────────────────────────────────────────

    #[test]
    fn items_preserve_insertion_order() {
        let mut list = DrawList::new();
        list.push(tri(1.0));
        list.push(tri(0.5));
        list.push(tri(0.25));

        let scales: Vec<f32> = list
            .items()
            .iter()
            .map(|cmd| {
                let DrawCmd::Tri(t) = cmd;
                t.scale
            })
            .collect();
        assert_eq!(scales, vec![1.0, 0.5, 0.25]);
    }

    // ── clear ─────────────────────────────────────────────────────────────

    #[test]
    fn clear_empties_but_keeps_capacity() {
        let mut list = DrawList::new();
        for _ in 0..64 {
            list.push(tri(1.0));
        }
        let cap = list.items.capacity();

        list.clear();
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
        assert_eq!(list.items.capacity(), cap);
    }
}
