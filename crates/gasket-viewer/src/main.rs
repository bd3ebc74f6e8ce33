use anyhow::Result;
use winit::dpi::LogicalSize;

use gasket_engine::device::GpuInit;
use gasket_engine::logging::{init_logging, LoggingConfig};
use gasket_engine::window::{Runtime, RuntimeConfig};

mod app;
mod config;
mod fractal;

use app::ViewerApp;
use config::ViewerConfig;

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let config = ViewerConfig::default();
    log::info!(
        "{}: {}x{}, depth {}",
        config.title,
        config.window_size.0,
        config.window_size.1,
        config.max_depth
    );

    let runtime_config = RuntimeConfig {
        title: config.title.clone(),
        initial_size: LogicalSize::new(config.window_size.0, config.window_size.1),
    };

    Runtime::run(runtime_config, GpuInit::default(), ViewerApp::new(config))
}
