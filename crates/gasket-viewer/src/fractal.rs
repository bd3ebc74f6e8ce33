//! Sierpinski subdivision.
//!
//! The traversal is a pure iterator: it computes triangles and placements
//! and yields draw requests in traversal order, but performs no GPU work.
//! The app consumes the stream into a `DrawList`, which the engine's
//! triangle renderer replays.
//!
//! Semantics: each visited node with remaining depth > 0 first yields its
//! own draw request, then descends into the three corner sub-triangles at
//! depth - 1. A node at depth 0 is terminal: nothing is yielded and nothing
//! is recursed. A traversal with `max_depth = d` therefore yields exactly
//! `(3^d - 1) / 2` requests, and zero for `d = 0`.

use gasket_engine::coords::Vec2;
use gasket_engine::render::BASE_TRIANGLE;

/// Anchor vertex of the base triangle; placements position scaled copies of
/// the base mesh so this vertex lands on the current triangle's corner `b`.
const REFERENCE: Vec2 = BASE_TRIANGLE[1];

/// A triangle given by its three corners, in NDC.
///
/// Corners are immutable per node; children are computed fresh from the edge
/// midpoints, never mutated in place.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Triangle {
    pub a: Vec2,
    pub b: Vec2,
    pub c: Vec2,
}

impl Triangle {
    #[inline]
    pub const fn new(a: Vec2, b: Vec2, c: Vec2) -> Self {
        Self { a, b, c }
    }

    /// The renderer's unit base triangle.
    #[inline]
    pub const fn base() -> Self {
        Self::new(BASE_TRIANGLE[0], BASE_TRIANGLE[1], BASE_TRIANGLE[2])
    }

    /// Midpoints of the three edges: `(mid(ab), mid(bc), mid(ca))`.
    ///
    /// Each midpoint is `(p + q) / 2` componentwise, exact for
    /// representable inputs.
    #[inline]
    pub fn edge_midpoints(&self) -> (Vec2, Vec2, Vec2) {
        (
            self.a.midpoint(self.b),
            self.b.midpoint(self.c),
            self.c.midpoint(self.a),
        )
    }

    /// The three corner sub-triangles, in traversal order.
    fn children(&self) -> [Triangle; 3] {
        let (mab, mbc, mca) = self.edge_midpoints();
        [
            Triangle::new(self.a, mab, mca),
            Triangle::new(mab, self.b, mbc),
            Triangle::new(mca, mbc, self.c),
        ]
    }
}

/// Scale/rotation/translation decomposition placing the base mesh.
///
/// Applied per vertex as `scale * rot(rotation) * p + translation`. On the
/// subdivision path rotation is always zero; the only rotated placement is
/// the viewer's one-off inverted base triangle.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Placement {
    pub scale: f32,
    pub rotation: f32,
    pub translation: Vec2,
}

impl Placement {
    #[inline]
    pub const fn new(scale: f32, rotation: f32, translation: Vec2) -> Self {
        Self {
            scale,
            rotation,
            translation,
        }
    }

    #[inline]
    pub const fn identity() -> Self {
        Self::new(1.0, 0.0, Vec2::zero())
    }

    /// Placement that scales the base triangle by `scale` and translates it
    /// so its reference vertex lands on `anchor`: `translation = anchor -
    /// scale * reference`. Because every sub-triangle is the base triangle
    /// uniformly scaled with unchanged orientation, anchoring one vertex
    /// positions all three.
    #[inline]
    pub fn anchored(scale: f32, anchor: Vec2) -> Self {
        Self::new(scale, 0.0, anchor - REFERENCE * scale)
    }

    /// Applies the placement to a point.
    pub fn apply(&self, p: Vec2) -> Vec2 {
        let (sin, cos) = self.rotation.sin_cos();
        let rotated = Vec2::new(cos * p.x - sin * p.y, sin * p.x + cos * p.y);
        rotated * self.scale + self.translation
    }
}

/// One draw request yielded by the subdivision.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SubTriangle {
    /// The corners of the region this request covers.
    pub triangle: Triangle,

    /// Remaining depth at this node; always >= 1 for yielded nodes.
    pub depth: u32,

    /// Placement of the base mesh over `triangle`.
    pub placement: Placement,
}

/// Depth-first preorder walk of the subdivision.
///
/// Yields a node before its children, children in corner order (a-side,
/// b-side, c-side). The recursion is carried on an explicit stack; children
/// are pushed in reverse so they pop in order.
///
/// The root must be a uniformly scaled, unrotated copy of the base triangle
/// (in practice: `Triangle::base()` itself); the anchored placement math
/// relies on that orientation.
#[derive(Debug)]
pub struct Subdivision {
    max_depth: u32,
    stack: Vec<(Triangle, u32)>,
}

impl Subdivision {
    pub fn new(root: Triangle, max_depth: u32) -> Self {
        Self {
            max_depth,
            stack: vec![(root, max_depth)],
        }
    }
}

impl Iterator for Subdivision {
    type Item = SubTriangle;

    fn next(&mut self) -> Option<SubTriangle> {
        loop {
            let (triangle, depth) = self.stack.pop()?;

            // Terminal node: nothing drawn, nothing recursed.
            if depth == 0 {
                continue;
            }

            let [child_a, child_b, child_c] = triangle.children();
            self.stack.push((child_c, depth - 1));
            self.stack.push((child_b, depth - 1));
            self.stack.push((child_a, depth - 1));

            let level = self.max_depth - depth;
            let scale = 0.5f32.powi(level as i32);

            return Some(SubTriangle {
                triangle,
                depth,
                placement: Placement::anchored(scale, triangle.b),
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-6;

    fn approx(a: Vec2, b: Vec2) -> bool {
        (a.x - b.x).abs() <= EPS && (a.y - b.y).abs() <= EPS
    }

    fn count(max_depth: u32) -> usize {
        Subdivision::new(Triangle::base(), max_depth).count()
    }

    // ── draw-count law ────────────────────────────────────────────────────

    #[test]
    fn depth_zero_yields_nothing() {
        assert_eq!(count(0), 0);
    }

    #[test]
    fn draw_count_follows_geometric_law() {
        // (3^d - 1) / 2 requests per traversal.
        assert_eq!(count(1), 1);
        assert_eq!(count(2), 4);
        assert_eq!(count(3), 13);

        for d in 1..=7u32 {
            let expected = (3usize.pow(d) - 1) / 2;
            assert_eq!(count(d), expected, "depth {d}");
        }
    }

    #[test]
    fn yielded_nodes_are_never_terminal() {
        for node in Subdivision::new(Triangle::base(), 5) {
            assert!(node.depth >= 1);
        }
    }

    // ── midpoints ─────────────────────────────────────────────────────────

    #[test]
    fn edge_midpoints_are_exact() {
        let (mab, mbc, mca) = Triangle::base().edge_midpoints();
        assert_eq!(mab, Vec2::new(0.0, 1.0));
        assert_eq!(mbc, Vec2::new(0.5, 0.0));
        assert_eq!(mca, Vec2::new(-0.5, 0.0));
    }

    // ── scale law ─────────────────────────────────────────────────────────

    #[test]
    fn root_placement_is_identity() {
        let root = Subdivision::new(Triangle::base(), 3).next().unwrap();
        assert_eq!(root.placement, Placement::identity());
    }

    #[test]
    fn scale_halves_exactly_per_level() {
        let max_depth = 6;
        for node in Subdivision::new(Triangle::base(), max_depth) {
            let level = max_depth - node.depth;
            // Powers of 0.5 are exact in binary floating point.
            assert_eq!(node.placement.scale, 0.5f32.powi(level as i32));
            assert_eq!(node.placement.rotation, 0.0);
        }
    }

    // ── anchor coincidence ────────────────────────────────────────────────

    #[test]
    fn placement_lands_reference_vertex_on_anchor() {
        for node in Subdivision::new(Triangle::base(), 5) {
            let placed = node.placement.apply(REFERENCE);
            assert!(
                approx(placed, node.triangle.b),
                "anchor mismatch: {placed:?} vs {:?}",
                node.triangle.b
            );
        }
    }

    #[test]
    fn placement_reproduces_all_three_corners() {
        for node in Subdivision::new(Triangle::base(), 4) {
            let base = Triangle::base();
            assert!(approx(node.placement.apply(base.a), node.triangle.a));
            assert!(approx(node.placement.apply(base.b), node.triangle.b));
            assert!(approx(node.placement.apply(base.c), node.triangle.c));
        }
    }

    // ── traversal order ───────────────────────────────────────────────────

    #[test]
    fn traversal_is_preorder_in_corner_order() {
        let base = Triangle::base();
        let nodes: Vec<SubTriangle> = Subdivision::new(base, 2).collect();
        assert_eq!(nodes.len(), 4);

        // Root first.
        assert_eq!(nodes[0].triangle, base);
        assert_eq!(nodes[0].depth, 2);

        // Children follow in corner order at half scale.
        let [child_a, child_b, child_c] = base.children();
        assert_eq!(nodes[1].triangle, child_a);
        assert_eq!(nodes[2].triangle, child_b);
        assert_eq!(nodes[3].triangle, child_c);
        for child in &nodes[1..] {
            assert_eq!(child.depth, 1);
            assert_eq!(child.placement.scale, 0.5);
        }
    }

    // ── rotated placement ─────────────────────────────────────────────────

    #[test]
    fn half_turn_placement_inverts_the_base_triangle() {
        let placement = Placement::new(1.0, std::f32::consts::PI, Vec2::zero());
        let flipped = placement.apply(Vec2::new(0.0, -1.0));
        assert!(approx(flipped, Vec2::new(0.0, 1.0)));
    }
}
