//! mmc — a multi-server queue fed by a Poisson arrival stream.
//!
//! Runs a mixed pool (a few fast fixed-time workers in front of slower
//! geometric ones) for `ARRIVAL_STEPS` steps, then depletes the queue and
//! writes the interval statistics to `output/mmc/`.
//!
//! Log verbosity follows `RUST_LOG` (default `info`); `RUST_LOG=qsim_system=trace`
//! shows every change of the active window.

use std::path::Path;
use std::time::Instant;

use anyhow::{Result, bail};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use rand_distr::{Distribution, Poisson};
use tracing::info;
use tracing_subscriber::EnvFilter;

use qsim_core::{Discipline, SimConfig};
use qsim_output::{CsvWriter, StatsOutputObserver};
use qsim_sim::SimBuilder;
use qsim_stats::RunStats;

// ── Constants ─────────────────────────────────────────────────────────────────

const SEED:              u64   = 42;
const ARRIVAL_STEPS:     usize = 5_000;
const ARRIVAL_RATE:      f64   = 1.6;  // mean arrivals per step
const FIXED_WORKERS:     usize = 2;
const FIXED_SERVICE:     u64   = 2;
const RANDOM_WORKERS:    usize = 6;
const RANDOM_MEAN:       f64   = 5.0;
const REPORT_INTERVAL:   u64   = 100;
const OUTPUT_DIR:        &str  = "output/mmc";

// ── Workload ──────────────────────────────────────────────────────────────────

/// Per-step arrival counts drawn from Poisson(`rate`).
fn poisson_workload(steps: usize, rate: f64, seed: u64) -> Result<Vec<u64>> {
    let dist = Poisson::new(rate)?;
    let mut rng = SmallRng::seed_from_u64(seed);
    Ok((0..steps).map(|_| dist.sample(&mut rng) as u64).collect())
}

fn mean(samples: &[u64]) -> f64 {
    if samples.is_empty() {
        return 0.0;
    }
    samples.iter().sum::<u64>() as f64 / samples.len() as f64
}

fn print_summary(stats: &RunStats) {
    println!("{:<10} {:>9} {:>10} {:>9} {:>9}", "Interval", "Arrived", "Completed", "Queue", "Busy");
    println!("{}", "-".repeat(51));
    for i in 0..stats.intervals() {
        println!(
            "{:<10} {:>9} {:>10} {:>9.2} {:>9.2}",
            i,
            stats.n_requests.history()[i],
            stats.n_completed.history()[i],
            stats.c_qsize.history()[i],
            stats.c_util.history()[i],
        );
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let capacity = FIXED_WORKERS as f64 / FIXED_SERVICE as f64 + RANDOM_WORKERS as f64 / RANDOM_MEAN;
    println!("=== mmc — qsim multi-server queue ===");
    println!(
        "Workers: {FIXED_WORKERS} fixed ({FIXED_SERVICE} ticks) + {RANDOM_WORKERS} random (mean {RANDOM_MEAN})"
    );
    println!(
        "Arrivals: {ARRIVAL_RATE}/step for {ARRIVAL_STEPS} steps  |  load {:.2}  |  Seed: {SEED}",
        ARRIVAL_RATE / capacity
    );
    println!();

    // 1. Config and pool.
    let config = SimConfig {
        report_interval:  REPORT_INTERVAL,
        deplete:          true,
        settle_intervals: SimConfig::DEFAULT_SETTLE_INTERVALS,
        seed:             SEED,
        discipline:       Discipline::Fifo,
    };
    let mut sim = SimBuilder::new(config)
        .fixed_workers(FIXED_WORKERS, FIXED_SERVICE)
        .random_workers(RANDOM_WORKERS, RANDOM_MEAN)
        .build()?;

    // 2. Workload.
    let workload = poisson_workload(ARRIVAL_STEPS, ARRIVAL_RATE, SEED)?;
    info!(arrivals = workload.iter().sum::<u64>(), "workload generated");

    // 3. Output.
    std::fs::create_dir_all(OUTPUT_DIR)?;
    let writer = CsvWriter::new(Path::new(OUTPUT_DIR))?;
    let mut obs = StatsOutputObserver::new(writer);

    // 4. Run.
    let t0 = Instant::now();
    let steps = sim.run(workload, &mut obs);
    let elapsed = t0.elapsed();

    if let Some(e) = obs.take_error() {
        bail!("output error: {e}");
    }
    if !sim.system.is_empty() {
        bail!("queue did not drain ({} still pending)", sim.register.n_pending());
    }

    // 5. Summary.
    let stats = &sim.stats;
    println!("Simulation complete: {steps} steps in {:.3} s", elapsed.as_secs_f64());
    println!("  requests          : {}", sim.register.count());
    println!("  mean response time: {:.2} ticks", mean(&stats.response_times()));
    println!("  mean service time : {:.2} ticks", mean(&stats.service_times()));
    println!("  output            : {OUTPUT_DIR}/");
    println!();
    print_summary(stats);

    Ok(())
}
