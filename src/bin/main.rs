//! svmscope Command Line Interface
//!
//! Replays interactive sessions from event scripts and renders the decision
//! surface to PNG frames, without needing a windowing system.

use clap::{Args, Parser, Subcommand, ValueEnum};
use env_logger::Env;
use log::{error, info};
use std::fs;
use std::path::PathBuf;
use std::process;
use svmscope::core::{DecisionModel, KernelKind, Result, TrainerError};
use svmscope::data;
use svmscope::render::RenderOptions;
use svmscope::session::{dispatch, script, AnimationDriver, InputEvent, SessionController};
use svmscope::surface::GridSpec;
use svmscope::text::set_farsi_font;

#[derive(Parser)]
#[command(name = "svmscope")]
#[command(about = "Interactive SVM decision-boundary visualizer")]
#[command(version = env!("CARGO_PKG_VERSION"))]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Replay an event script against the interactive trainer
    Trainer(TrainerArgs),
    /// Render the progressive-boundary animation on the circles dataset
    Animate(AnimateArgs),
    /// Render a single still of the default session
    Snapshot(SnapshotArgs),
}

#[derive(Args)]
struct TrainerArgs {
    /// Event script (JSON array); the built-in demo script when omitted
    #[arg(short, long)]
    script: Option<PathBuf>,

    /// Start from an empty canvas instead of the seeded clusters
    #[arg(long)]
    empty: bool,

    #[command(flatten)]
    render: RenderArgs,
}

#[derive(Args)]
struct AnimateArgs {
    /// Points per class in the circles dataset
    #[arg(short, long, default_value = "60")]
    n: usize,

    /// Inner-to-outer radius ratio
    #[arg(long, default_value = "0.5")]
    factor: f64,

    /// Gaussian jitter applied to each point
    #[arg(long, default_value = "0.1")]
    noise: f64,

    /// RNG seed for the dataset
    #[arg(long, default_value = "42")]
    seed: u64,

    #[command(flatten)]
    render: RenderArgs,
}

#[derive(Args)]
struct SnapshotArgs {
    /// Kernel function
    #[arg(short, long, default_value = "rbf")]
    kernel: CliKernel,

    /// Regularization parameter C
    #[arg(short = 'C', long, default_value = "100.0")]
    c: f64,

    /// Kernel width gamma
    #[arg(short, long, default_value = "0.5")]
    gamma: f64,

    /// Output PNG file
    #[arg(short, long, default_value = "snapshot.png")]
    output: PathBuf,

    #[command(flatten)]
    render: RenderArgs,
}

#[derive(Args)]
struct RenderArgs {
    /// Directory frames are written to (ignored by snapshot)
    #[arg(long, default_value = "frames")]
    out: PathBuf,

    /// Frame width and height in pixels
    #[arg(long, default_value = "800")]
    size: u32,

    /// Decision-surface grid resolution per axis
    #[arg(long, default_value = "300")]
    resolution: usize,

    /// Farsi-capable font file; known locations are probed when omitted
    #[arg(long)]
    font: Option<PathBuf>,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum CliKernel {
    Linear,
    Rbf,
    Poly,
    Sigmoid,
}

impl From<CliKernel> for KernelKind {
    fn from(kernel: CliKernel) -> Self {
        match kernel {
            CliKernel::Linear => KernelKind::Linear,
            CliKernel::Rbf => KernelKind::Rbf,
            CliKernel::Poly => KernelKind::Poly,
            CliKernel::Sigmoid => KernelKind::Sigmoid,
        }
    }
}

fn main() {
    let cli = Cli::parse();

    let log_level = if cli.debug {
        "debug"
    } else if cli.verbose {
        "info"
    } else {
        "warn"
    };

    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    let result = match cli.command {
        Commands::Trainer(args) => trainer_command(args),
        Commands::Animate(args) => animate_command(args),
        Commands::Snapshot(args) => snapshot_command(args),
    };

    if let Err(e) = result {
        error!("Error: {e}");
        process::exit(1);
    }
}

fn trainer_command(args: TrainerArgs) -> Result<()> {
    let events = match &args.script {
        Some(path) => {
            info!("Replaying script {path:?}");
            script::load_script(path)?
        }
        None => {
            info!("Replaying the built-in demo script");
            script::demo_script()
        }
    };

    let points = if args.empty {
        Vec::new()
    } else {
        data::two_clusters(data::DEFAULT_SEED)
    };
    let mut session =
        SessionController::with_points(points).with_grid(grid_for(&args.render));
    let mut driver = AnimationDriver::new();
    let draw_labels = set_farsi_font(args.render.font.as_deref());

    fs::create_dir_all(&args.render.out)?;

    let mut readout = None;
    for (i, event) in events.iter().enumerate() {
        let result = dispatch(&mut session, &mut driver, event);
        // Pointer motion refreshes the readout (None blanks it); reset
        // blanks it outright. Other events leave the last value up.
        if matches!(event, InputEvent::PointerMoved { .. } | InputEvent::Reset) {
            readout = result;
        }
        driver.tick();

        let path = args.render.out.join(format!("frame_{i:04}.png"));
        let options = RenderOptions {
            draw_labels,
            status: Some(driver.status_line()),
            readout,
        };
        render_png(&session, 1.0, &options, &path, &args.render)?;
    }

    info!(
        "Wrote {} frames to {:?} ({} points, {} support vectors)",
        events.len(),
        args.render.out,
        session.points().len(),
        session.model().map_or(0, |m| m.n_support_vectors()),
    );
    Ok(())
}

fn animate_command(args: AnimateArgs) -> Result<()> {
    if !(0.0..1.0).contains(&args.factor) || args.factor <= 0.0 {
        return Err(TrainerError::InvalidParameter(format!(
            "factor must be in (0, 1), got {}",
            args.factor
        )));
    }

    let points = data::circles(args.n, args.factor, args.noise, args.seed);
    let session = SessionController::with_points(points).with_grid(grid_for(&args.render));
    let mut driver = AnimationDriver::new();
    let draw_labels = set_farsi_font(args.render.font.as_deref());

    fs::create_dir_all(&args.render.out)?;

    // One fit, then the surface grows toward it frame by frame
    for i in 0..svmscope::session::animation::CYCLE_FRAMES {
        let path = args.render.out.join(format!("frame_{i:04}.png"));
        let options = RenderOptions {
            draw_labels,
            status: Some(driver.status_line()),
            readout: None,
        };
        render_png(&session, driver.alpha(), &options, &path, &args.render)?;
        driver.tick();
    }

    info!("Wrote animation frames to {:?}", args.render.out);
    Ok(())
}

fn snapshot_command(args: SnapshotArgs) -> Result<()> {
    let mut session = SessionController::new().with_grid(grid_for(&args.render));
    session.set_kernel(args.kernel.into());
    session.set_c(args.c);
    session.set_gamma(args.gamma);
    session.retrain();

    let options = RenderOptions {
        draw_labels: set_farsi_font(args.render.font.as_deref()),
        status: None,
        readout: None,
    };
    render_png(&session, 1.0, &options, &args.output, &args.render)?;

    info!("Wrote snapshot to {:?}", args.output);
    Ok(())
}

fn grid_for(render: &RenderArgs) -> GridSpec {
    GridSpec::new(-5.0, 5.0, -5.0, 5.0, render.resolution.max(2))
}

fn render_png(
    session: &SessionController,
    alpha: f64,
    options: &RenderOptions,
    path: &PathBuf,
    render: &RenderArgs,
) -> Result<()> {
    use plotters::prelude::*;

    let area = BitMapBackend::new(path, (render.size, render.size)).into_drawing_area();
    svmscope::render::render_scene(session, alpha, options, &area)
        .map_err(|e| TrainerError::RenderError(e.to_string()))
}
