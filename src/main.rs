//! TrigBlaster headless host
//!
//! Drives a motion session with a synthetic accelerometer at a fixed frame
//! rate and reports where the sprite ends up.

use anyhow::{Context, Result};
use clap::Parser;
use glam::Vec2;

use trig_blaster::platform::{FrameDriver, SpriteTransform, SyntheticAccelerometer};
use trig_blaster::{ActorState, Arena, RADIANS_TO_DEGREES, Simulation, Tuning};

/// Tilt-driven sprite motion, run without a screen
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// JSON tuning file (overrides --preset)
    #[arg(long)]
    tuning: Option<std::path::PathBuf>,
    /// Built-in tuning preset: bounce or clamp
    #[arg(long, default_value = "bounce")]
    preset: String,
    /// Frames to simulate
    #[arg(long, default_value_t = 600)]
    frames: u32,
    /// Host frame rate
    #[arg(long, default_value_t = 60.0)]
    fps: f64,
    #[arg(long, default_value_t = 320.0, allow_hyphen_values = true)]
    width: f32,
    #[arg(long, default_value_t = 568.0, allow_hyphen_values = true)]
    height: f32,
    /// Seed for accelerometer jitter
    #[arg(long, default_value_t = 1)]
    seed: u64,
    /// Device tilt along its X axis (g)
    #[arg(long, default_value_t = 0.3, allow_hyphen_values = true)]
    tilt_x: f32,
    /// Device tilt along its Y axis (g)
    #[arg(long, default_value_t = -0.2, allow_hyphen_values = true)]
    tilt_y: f32,
    /// Jitter amplitude added to each reading (g)
    #[arg(long, default_value_t = 0.02)]
    jitter: f32,
    /// Run as if the device had no accelerometer
    #[arg(long)]
    no_accelerometer: bool,
    /// Print the final actor state as JSON
    #[arg(long)]
    dump_state: bool,
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

/// Reject values the session cannot run with
fn check_args(args: &Args) -> Result<()> {
    anyhow::ensure!(
        args.fps.is_finite() && args.fps > 0.0,
        "--fps must be finite and positive"
    );
    anyhow::ensure!(
        Arena::new(args.width, args.height).is_valid(),
        "--width and --height must be finite and positive (got {}x{})",
        args.width,
        args.height
    );
    anyhow::ensure!(
        args.jitter.is_finite() && args.jitter >= 0.0,
        "--jitter must be finite and non-negative"
    );
    anyhow::ensure!(
        args.tilt_x.is_finite() && args.tilt_y.is_finite(),
        "--tilt-x and --tilt-y must be finite"
    );
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let tuning = match &args.tuning {
        Some(path) => Tuning::load(path)
            .with_context(|| format!("loading tuning from {}", path.display()))?,
        None => Tuning::preset(&args.preset)?,
    };
    check_args(&args)?;

    let arena = Arena::new(args.width, args.height);
    log::info!(
        "TrigBlaster starting: {}x{} arena, {:?} borders, {} frames at {} fps",
        arena.width,
        arena.height,
        tuning.border,
        args.frames,
        args.fps
    );

    let accelerometer = if args.no_accelerometer {
        SyntheticAccelerometer::unavailable()
    } else {
        SyntheticAccelerometer::new(args.seed, Vec2::new(args.tilt_x, args.tilt_y), args.jitter)
    };

    let start = ActorState::centered(arena, Vec2::ZERO);
    let sim = Simulation::new(arena, tuning).with_actor(start);
    let mut driver = FrameDriver::new(sim, accelerometer, SpriteTransform::default());
    driver.start_monitoring();

    let mut bounces = 0u32;
    for frame in 0..args.frames {
        let timestamp = frame as f64 / args.fps;
        driver.frame(timestamp, arena);
        if driver.simulation().last_hit().any() {
            bounces += 1;
        }
    }

    let sprite = driver.sprite();
    log::info!(
        "Finished: position ({:.1}, {:.1}), rotation {:.1}°, {} border contacts",
        sprite.position.x,
        sprite.position.y,
        sprite.rotation * RADIANS_TO_DEGREES,
        bounces
    );

    if args.dump_state {
        let json = serde_json::to_string_pretty(driver.simulation().actor())
            .context("serializing actor state")?;
        println!("{json}");
    }

    driver.stop_monitoring();
    Ok(())
}
