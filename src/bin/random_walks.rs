use std::{num::NonZeroUsize, path::PathBuf, thread, time::Duration};

use clap::{Parser, ValueEnum};
use color_eyre::eyre::{Result, WrapErr};
use log::info;
use random_walks::{
    csv::{write_histogram_csv, write_positions_csv},
    HistogramMode, PathRetention, Simulation, SimulationConfig, WalkStrategy, MAX_STEPS,
};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Walk {
    FreePath,
    UniformAngle,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Mode {
    Cdf,
    Pdf,
    PathOverlay,
}

/// Run a random walk simulation without a window and export its statistics.
#[derive(Parser, Debug)]
struct Args {
    /// Number of particles, raised to 1 if lower
    #[arg(short = 'n', long, default_value_t = 1000)]
    particles: usize,
    /// Mean free path
    #[arg(short = 'l', long, default_value_t = 5.)]
    mean_free_path: f64,
    /// Pause between ticks in microseconds
    #[arg(short = 't', long, default_value_t = 1)]
    delay_us: u64,
    /// Ticks to run, stops early at the step ceiling
    #[arg(short = 's', long, default_value_t = 1000)]
    ticks: usize,
    #[arg(long, value_enum, default_value_t = Walk::FreePath)]
    walk: Walk,
    /// Seed for a reproducible run
    #[arg(long)]
    seed: Option<u64>,
    #[arg(long, value_enum, default_value_t = Mode::Cdf)]
    mode: Mode,
    /// Histogram bins, the default of the mode if omitted
    #[arg(long)]
    bins: Option<usize>,
    /// Keep only this many points of every path
    #[arg(long)]
    path_cap: Option<NonZeroUsize>,
    #[arg(long, default_value = "histogram.csv")]
    histogram: PathBuf,
    #[arg(long)]
    positions: Option<PathBuf>,
    /// Log a progress line every this many ticks
    #[arg(long, default_value_t = 100)]
    progress_every: usize,
}

impl Args {
    fn config(&self) -> SimulationConfig {
        let walk = match self.walk {
            Walk::FreePath => WalkStrategy::FreePath,
            Walk::UniformAngle => WalkStrategy::UniformAngle,
        };
        let path_retention = match self.path_cap {
            Some(cap) => PathRetention::Capped(cap),
            None => PathRetention::Unbounded,
        };

        let mut config = SimulationConfig::new(self.particles, self.mean_free_path)
            .with_tick_delay(Duration::from_micros(self.delay_us))
            .with_walk(walk)
            .with_path_retention(path_retention);
        if let Some(seed) = self.seed {
            config = config.with_seed(seed);
        }
        config.clamped()
    }

    fn mode(&self) -> HistogramMode {
        match self.mode {
            Mode::Cdf => HistogramMode::Cdf,
            Mode::Pdf => HistogramMode::Pdf,
            Mode::PathOverlay => HistogramMode::PathOverlay,
        }
    }
}

fn main() -> Result<()> {
    color_eyre::install()?;
    env_logger::init();

    let args = Args::parse();
    let config = args.config();
    let tick_delay = config.tick_delay;
    let mut sim = Simulation::new(config).wrap_err("invalid simulation settings")?;

    let ticks = args.ticks.min(MAX_STEPS);
    let progress_every = args.progress_every.max(1);
    for _ in 0..ticks {
        sim.tick();
        if sim.current_step() % progress_every == 0 {
            info!("{} out of {ticks} ticks done.", sim.current_step());
        }
        if !tick_delay.is_zero() {
            thread::sleep(tick_delay);
        }
    }

    let mode = args.mode();
    let sample = sim.compute_histogram(args.bins.unwrap_or(mode.default_bin_count()), mode);
    let summary = sample.summary;
    info!(
        "R = {:.3}, N(R) = {:.3}, R' = {:.3}, N(R') = {:.3}",
        summary.theoretical_rms,
        summary.theoretical_cdf_at_rms,
        summary.empirical_rms,
        summary.empirical_cdf_at_rms
    );
    if let Some(peaks) = sample.peaks {
        info!(
            "theory peak {:.3}, experimental peak {:.3}",
            peaks.theoretical, peaks.empirical
        );
    }

    write_histogram_csv(&sample, &args.histogram)
        .wrap_err_with(|| format!("failed to write {}", args.histogram.display()))?;
    if let Some(path) = &args.positions {
        write_positions_csv(sim.particles(), path)
            .wrap_err_with(|| format!("failed to write {}", path.display()))?;
    }

    Ok(())
}
