use prism_engine::core::{App, AppControl, FrameCtx};
use prism_engine::device::GpuInit;
use prism_engine::logging::{init_logging, LoggingConfig};
use prism_engine::render::TransformRenderer;
use prism_engine::transform::TransformConfig;
use prism_engine::window::{Runtime, RuntimeConfig};

const CLEAR: wgpu::Color = wgpu::Color::BLACK;

/// Spins the triangle about Y, one degree per frame.
struct SpinApp {
    renderer: TransformRenderer,
}

impl App for SpinApp {
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        let renderer = &mut self.renderer;
        let control = ctx.render(CLEAR, |rctx, target| renderer.render(rctx, target));

        if ctx.time.frame_index % 360 == 0 {
            log::trace!("angle {}°", self.renderer.transform().angle().degrees());
        }
        control
    }
}

fn main() -> anyhow::Result<()> {
    init_logging(LoggingConfig::default());

    let config = RuntimeConfig {
        title: "prism · spin".to_string(),
        ..RuntimeConfig::default()
    };

    let transform = TransformConfig::default();
    log::info!(
        "starting {} (fov {}°, camera at z = {})",
        config.title,
        transform.fov_y_degrees,
        transform.camera_distance
    );

    let app = SpinApp {
        renderer: TransformRenderer::with_config(transform),
    };
    Runtime::run(config, GpuInit::default(), app)
}
