use std::time::Instant;

use clap::Parser;
use garden_core::{
    Animator, BloomScene, DrawCommand, GardenConfig, GardenScene, Recorder, Scene, SceneKind,
    DEFAULT_TIME_STEP,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Run an animation headless against the recording surface.
#[derive(Parser, Debug)]
#[command(name = "garden-native", about = "Headless runner for the bloom and garden animations")]
struct Cli {
    /// `bloom` or `garden`
    #[arg(long, default_value_t = SceneKind::Bloom)]
    scene: SceneKind,

    #[arg(long, default_value_t = 600)]
    frames: u64,

    #[arg(long, default_value_t = 1280.0)]
    width: f64,

    #[arg(long, default_value_t = 720.0)]
    height: f64,

    /// Logical time per frame
    #[arg(long, default_value_t = DEFAULT_TIME_STEP)]
    step: f64,

    /// Fix the random source; omitted means a fresh scene every run
    #[arg(long)]
    seed: Option<u64>,
}

#[derive(Debug, Default)]
struct FrameStats {
    commands: usize,
    fills: usize,
    strokes: usize,
    peak: usize,
}

impl FrameStats {
    fn record(&mut self, frame: &Recorder) {
        self.commands += frame.len();
        self.fills += frame.count(|c| matches!(c, DrawCommand::Fill | DrawCommand::FillRect(..)));
        self.strokes += frame.count(|c| matches!(c, DrawCommand::Stroke));
        self.peak = self.peak.max(frame.len());
    }
}

fn run<Sc: Scene>(scene: Sc, cli: &Cli) -> anyhow::Result<()> {
    log::info!(
        "[scene] {} {}x{} entities={}",
        scene.name(),
        cli.width,
        cli.height,
        scene.entity_count()
    );
    let mut animator = Animator::new(scene, cli.step)?;
    let mut surface = Recorder::new(cli.width, cli.height);
    let mut stats = FrameStats::default();

    let started = Instant::now();
    for _ in 0..cli.frames {
        surface.clear();
        animator.tick(&mut surface);
        stats.record(&surface);
    }
    let elapsed = started.elapsed();

    let frames = animator.frames().max(1) as f64;
    log::info!(
        "[driver] frames={} t={:.2} avg_cmds={:.0} peak_cmds={} fills={} strokes={} elapsed={:.1?} ({:.1} fps)",
        animator.frames(),
        animator.time(),
        stats.commands as f64 / frames,
        stats.peak,
        stats.fills,
        stats.strokes,
        elapsed,
        frames / elapsed.as_secs_f64().max(f64::EPSILON)
    );
    Ok(())
}

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let cli = Cli::parse();
    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    match cli.scene {
        SceneKind::Bloom => run(BloomScene::new(cli.width, cli.height, &mut rng), &cli),
        SceneKind::Garden => run(
            GardenScene::generate(cli.width, cli.height, &GardenConfig::default(), &mut rng),
            &cli,
        ),
    }
}
