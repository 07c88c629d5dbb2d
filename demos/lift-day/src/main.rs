//! lift-day — one simulated day of a small office building.
//!
//! Runs the dispatch simulator with default or JSON-supplied settings,
//! writes `step_summaries.csv` and `elevator_snapshots.csv`, optionally
//! prints the ASCII panel, and finishes with the run summary.
//!
//! ```text
//! RUST_LOG=lift_dispatch=debug lift-day --steps 180 --render-every 15
//! ```

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use lift_core::{LiftConfig, SimClock, Tick};
use lift_dispatch::{DispatchObserver, FleetBuilder, FleetSnapshot, LiftEvent, StepReport};
use lift_output::{CsvWriter, OutputObserver, OutputWriter, render_panel};

/// Multi-elevator dispatch simulation
#[derive(Parser, Debug)]
#[command(name = "lift-day")]
#[command(about = "Simulate a building's elevators minute by minute")]
struct Args {
    /// Number of one-minute steps (overrides the config file)
    #[arg(long)]
    steps: Option<u64>,

    /// Random seed (overrides the config file)
    #[arg(long)]
    seed: Option<u64>,

    /// JSON file with building and traffic settings; missing keys use defaults
    #[arg(long)]
    config: Option<PathBuf>,

    /// Directory for the CSV output (created if missing)
    #[arg(long, default_value = "output/lift-day")]
    output_dir: PathBuf,

    /// Print the building panel at snapshot steps that are multiples of N
    /// (0 disables)
    #[arg(long, default_value_t = 0)]
    render_every: u64,
}

// ── Observer wrapper that prints the panel ───────────────────────────────────

struct PanelPrinter<W: OutputWriter> {
    inner: OutputObserver<W>,
    every: u64,
}

impl<W: OutputWriter> DispatchObserver for PanelPrinter<W> {
    fn on_step_start(&mut self, tick: Tick, clock: &SimClock) {
        self.inner.on_step_start(tick, clock);
    }

    fn on_event(&mut self, tick: Tick, event: &LiftEvent) {
        self.inner.on_event(tick, event);
    }

    fn on_step_end(&mut self, tick: Tick, report: &StepReport) {
        self.inner.on_step_end(tick, report);
    }

    // The snapshot is taken before the clock advances, so the panel header
    // shows the minute that produced it.
    fn on_snapshot(&mut self, tick: Tick, fleet: FleetSnapshot<'_>) {
        if self.every > 0 && tick.0.is_multiple_of(self.every) {
            println!("{}", render_panel(fleet));
        }
        self.inner.on_snapshot(tick, fleet);
    }

    fn on_sim_end(&mut self, final_tick: Tick) {
        self.inner.on_sim_end(final_tick);
    }
}

fn load_config(path: Option<&Path>) -> Result<LiftConfig> {
    let Some(path) = path else {
        return Ok(LiftConfig::default());
    };
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parsing config {}", path.display()))
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .init();

    let args = Args::parse();

    // 1. Settings.
    let mut config = load_config(args.config.as_deref())?;
    if let Some(steps) = args.steps {
        config.total_steps = steps;
    }
    if let Some(seed) = args.seed {
        config.seed = seed;
    }
    tracing::info!(
        floors = config.num_floors,
        elevators = config.num_elevators,
        steps = config.total_steps,
        seed = config.seed,
        "starting lift-day"
    );

    // 2. Fleet.
    let mut fleet = FleetBuilder::new(config.clone()).build()?;

    // 3. Output.
    std::fs::create_dir_all(&args.output_dir)
        .with_context(|| format!("creating {}", args.output_dir.display()))?;
    let writer = CsvWriter::new(&args.output_dir)?;
    let mut obs = PanelPrinter {
        inner: OutputObserver::new(writer, &config),
        every: args.render_every,
    };

    // 4. Run.
    let t0 = Instant::now();
    fleet.run(&mut obs);
    let elapsed = t0.elapsed();

    if let Some(e) = obs.inner.take_error() {
        eprintln!("output error: {e}");
    }

    // 5. Summary.
    println!("Simulation complete in {:.3} s", elapsed.as_secs_f64());
    println!("  output directory : {}", args.output_dir.display());
    println!("  still waiting    : {}", fleet.total_waiting());
    println!("  still aboard     : {}", fleet.total_onboard());
    println!();
    println!("{}", obs.inner.stats());

    Ok(())
}
