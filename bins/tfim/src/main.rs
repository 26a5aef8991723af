use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

use rng::ONDRng;
use simulator::{run_ensemble, write_lattice_csv, write_trace_csv, TfimParams, TfimSimulation};

/// Transverse-field Ising Monte Carlo (OND-RNG)
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Lattice side length
    #[arg(long, default_value_t = 10)]
    size: usize,

    /// Inverse temperature
    #[arg(long, default_value_t = 0.4)]
    beta: f64,

    /// Transverse-field kick probability per update
    #[arg(long, default_value_t = 0.05)]
    h: f64,

    /// Number of sweeps
    #[arg(long, default_value_t = 100)]
    steps: usize,

    /// RNG seed (full reproducibility)
    #[arg(long, default_value = "default-seed")]
    seed: String,

    /// Independent replicas run in parallel (1 = single chain)
    #[arg(long, default_value_t = 1)]
    replicas: usize,

    /// Number of Rayon worker threads (0 = Rayon default)
    #[arg(long, default_value_t = 0)]
    threads: usize,

    /// Write the final lattice as CSV
    #[arg(long)]
    lattice_out: Option<PathBuf>,

    /// Write per-sweep magnetization and energy as CSV
    #[arg(long)]
    trace_out: Option<PathBuf>,

    /// Log filter, overridden by RUST_LOG
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    if args.threads > 0 {
        rayon::ThreadPoolBuilder::new()
            .num_threads(args.threads)
            .build_global()
            .context("failed to build Rayon thread pool")?;
    }

    let params = TfimParams {
        size: args.size,
        beta: args.beta,
        h: args.h,
        steps: args.steps,
    };

    if args.replicas > 1 {
        let summary = run_ensemble(params, args.replicas, &args.seed)?;
        for r in &summary.replicas {
            println!(
                "replica {:>3}: M = {:+.4}  E/N = {:+.4}  acc = {:.3}",
                r.replica, r.magnetization, r.energy, r.acceptance_rate
            );
        }
        println!(
            "ensemble: <M> = {:+.4}  <|M|> = {:.4}  <E/N> = {:+.4}",
            summary.mean_magnetization, summary.mean_abs_magnetization, summary.mean_energy
        );
        return Ok(());
    }

    let mut rng = ONDRng::new(args.seed.as_bytes());
    let mut sim = TfimSimulation::new(params, &mut rng)?;
    info!(
        magnetization = sim.magnetization(),
        energy = sim.energy_per_spin(),
        "initial lattice"
    );

    let records = sim.run_recorded(&mut rng);
    let (accepted, kicked) = records
        .iter()
        .fold((0u64, 0u64), |(a, k), r| (a + r.accepted, k + r.kicked));
    let attempts = (params.steps * params.size * params.size) as f64;

    println!(
        "TFIM {}x{}: beta = {}, h = {}, sweeps = {}",
        params.size, params.size, params.beta, params.h, params.steps
    );
    println!("M = {:+.4}", sim.magnetization());
    println!("E/N = {:+.4}", sim.energy_per_spin());
    if attempts > 0.0 {
        println!(
            "acceptance = {:.3}, kick rate = {:.3}",
            accepted as f64 / attempts,
            kicked as f64 / attempts
        );
    }

    if let Some(path) = &args.lattice_out {
        write_lattice_csv(path, sim.lattice())
            .with_context(|| format!("failed to write lattice to {}", path.display()))?;
        info!(path = %path.display(), "lattice written");
    }
    if let Some(path) = &args.trace_out {
        write_trace_csv(path, &records)
            .with_context(|| format!("failed to write trace to {}", path.display()))?;
        info!(path = %path.display(), "trace written");
    }

    Ok(())
}
