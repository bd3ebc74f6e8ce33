use gasket_engine::coords::Vec2;
use gasket_engine::core::{App, AppControl, FrameCtx};
use gasket_engine::input::Key;
use gasket_engine::render::TriRenderer;
use gasket_engine::scene::DrawList;

use crate::config::ViewerConfig;
use crate::fractal::{Placement, Subdivision, Triangle};

/// Per-frame viewer: rebuilds the draw stream from the subdivision and hands
/// it to the triangle renderer.
pub struct ViewerApp {
    config: ViewerConfig,
    root: Triangle,
    draw_list: DrawList,
    renderer: TriRenderer,
}

impl ViewerApp {
    pub fn new(config: ViewerConfig) -> Self {
        Self {
            config,
            root: Triangle::base(),
            draw_list: DrawList::new(),
            renderer: TriRenderer::new(),
        }
    }

    /// Records one frame's draw stream: the inverted base triangle first,
    /// then the subdivision in traversal order. The list is rebuilt from
    /// scratch every frame; no geometry is cached between frames.
    fn record_scene(&mut self) {
        self.draw_list.clear();

        // One-off inverted base triangle behind the fractal; the only
        // rotated placement in the program.
        let inverted = Placement::new(1.0, std::f32::consts::PI, Vec2::zero());
        self.draw_list.push_tri(
            inverted.scale,
            inverted.rotation,
            inverted.translation,
            self.config.palette.inverted,
        );

        for node in Subdivision::new(self.root, self.config.max_depth) {
            let level = self.config.max_depth - node.depth;
            let placement = node.placement;
            self.draw_list.push_tri(
                placement.scale,
                placement.rotation,
                placement.translation,
                self.config.palette.level_color(level),
            );
        }
    }
}

impl App for ViewerApp {
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        // Polled close request, like the original's per-frame key check.
        if ctx.input.key_down(Key::Escape) {
            log::info!("escape pressed; closing");
            return AppControl::Exit;
        }

        self.record_scene();

        if ctx.time.frame_index == 0 {
            log::debug!(
                "first frame: {} draw requests at depth {}",
                self.draw_list.len(),
                self.config.max_depth
            );
        }

        let renderer = &mut self.renderer;
        let draw_list = &self.draw_list;
        ctx.render(self.config.palette.background, |rctx, target| {
            renderer.render(rctx, target, draw_list);
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scene_records_inverted_base_plus_subdivision() {
        let config = ViewerConfig {
            max_depth: 3,
            ..ViewerConfig::default()
        };
        let mut app = ViewerApp::new(config);

        app.record_scene();

        // 1 inverted base + (3^3 - 1) / 2 subdivision requests.
        assert_eq!(app.draw_list.len(), 1 + 13);
    }

    #[test]
    fn scene_is_rebuilt_not_accumulated() {
        let mut app = ViewerApp::new(ViewerConfig {
            max_depth: 2,
            ..ViewerConfig::default()
        });

        app.record_scene();
        let first = app.draw_list.len();
        app.record_scene();

        assert_eq!(app.draw_list.len(), first);
    }
}
