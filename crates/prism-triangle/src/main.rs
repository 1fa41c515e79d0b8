use prism_engine::core::{App, AppControl, FrameCtx};
use prism_engine::device::GpuInit;
use prism_engine::logging::{init_logging, LoggingConfig};
use prism_engine::render::TriangleRenderer;
use prism_engine::window::{Runtime, RuntimeConfig};

const CLEAR: wgpu::Color = wgpu::Color::BLACK;

/// Binds the fixed pipeline and draws the triangle, nothing else per frame.
#[derive(Default)]
struct TriangleApp {
    renderer: TriangleRenderer,
}

impl App for TriangleApp {
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        let renderer = &mut self.renderer;
        ctx.render(CLEAR, |rctx, target| renderer.render(rctx, target))
    }
}

fn main() -> anyhow::Result<()> {
    init_logging(LoggingConfig::default());

    let config = RuntimeConfig {
        title: "prism · triangle".to_string(),
        ..RuntimeConfig::default()
    };

    log::info!("starting {}", config.title);
    Runtime::run(config, GpuInit::default(), TriangleApp::default())
}
