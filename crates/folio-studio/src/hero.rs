use anyhow::Result;
use rand::rngs::StdRng;
use rand::SeedableRng;
use winit::dpi::LogicalSize;

use folio_engine::coords::Viewport;
use folio_engine::core::{App, AppControl, FrameCtx};
use folio_engine::device::GpuInit;
use folio_engine::paint::Color;
use folio_engine::render::ShapeRenderer;
use folio_engine::window::{Runtime, RuntimeConfig};
use folio_motion::{Backdrop, CountUp, GearFieldConfig};

use crate::cli::HeroArgs;

const BACKGROUND: Color = Color { r: 0.035, g: 0.035, b: 0.043, a: 1.0 };
const TITLE: &str = "folio";

/// The hero counters: value, suffix, caption.
fn stats() -> Vec<(CountUp, &'static str)> {
    vec![
        (CountUp::new(5).suffix("+"), "years"),
        (CountUp::new(8), "projects"),
        (CountUp::new(20).suffix("+"), "companies"),
    ]
}

struct HeroApp {
    config: GearFieldConfig,
    rng: StdRng,

    /// Mounted on the first frame, once the real window size is known.
    backdrop: Option<Backdrop>,
    renderer: ShapeRenderer,

    stats: Vec<(CountUp, &'static str)>,
    title: String,
}

impl HeroApp {
    fn new(config: GearFieldConfig, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_entropy(),
        };
        Self {
            config,
            rng,
            backdrop: None,
            renderer: ShapeRenderer::new(),
            stats: stats(),
            title: String::new(),
        }
    }

    /// Window title carrying the counters; `None` while unchanged.
    fn stats_title(&mut self, ctx: &FrameCtx<'_, '_>) -> Option<String> {
        if self.stats.iter().all(|(c, _)| c.is_finished()) {
            return None;
        }
        let parts: Vec<String> = self
            .stats
            .iter_mut()
            .map(|(c, caption)| {
                c.update(ctx.time.now);
                format!("{} {caption}", c.label())
            })
            .collect();
        let title = format!("{TITLE}  {}", parts.join(" · "));
        if title == self.title {
            return None;
        }
        if self.stats.iter().all(|(c, _)| c.is_finished()) {
            log::info!("hero stats: {}", parts.join(", "));
        }
        self.title = title.clone();
        Some(title)
    }
}

impl App for HeroApp {
    fn on_resize(&mut self, viewport: Viewport) {
        if let Some(b) = self.backdrop.as_mut() {
            b.on_resize(viewport);
        }
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        if let Some(title) = self.stats_title(ctx) {
            ctx.window.window.set_title(&title);
        }

        let viewport = ctx.window.viewport();
        let backdrop = self
            .backdrop
            .get_or_insert_with(|| Backdrop::mount(viewport, &self.config, &mut self.rng));
        backdrop.frame();

        let list = backdrop.surface().draw_list();
        let renderer = &mut self.renderer;
        ctx.render(BACKGROUND, |rctx, target| renderer.render(rctx, target, list))
    }

    fn wants_frames(&self) -> bool {
        let counting = !self.stats.iter().all(|(c, _)| c.is_finished());
        counting || self.backdrop.as_ref().is_none_or(Backdrop::is_running)
    }

    fn on_exit(&mut self) {
        if let Some(b) = self.backdrop.as_mut() {
            b.teardown();
        }
    }
}

pub fn run(args: HeroArgs) -> Result<()> {
    let config = GearFieldConfig { max_gears: args.max_gears, ..GearFieldConfig::default() };

    log::info!(
        "hero: {}x{}, up to {} gears, seed {:?}",
        args.width,
        args.height,
        config.max_gears,
        args.seed
    );

    Runtime::run(
        RuntimeConfig {
            title: TITLE.to_string(),
            initial_size: LogicalSize::new(args.width, args.height),
        },
        GpuInit::default(),
        HeroApp::new(config, args.seed),
    )
}
