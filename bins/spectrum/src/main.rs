use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::EnvFilter;

use linalg::Spectrum;
use quantum::{HarmonicOscillator, HeisenbergModel, HubbardModel};

/// Exact spectra of small quantum models
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(long, value_enum)]
    model: Model,

    /// Spins (heisenberg), sites (hubbard) or truncation levels (oscillator)
    #[arg(long, short = 'n', default_value_t = 4)]
    n: usize,

    /// Heisenberg exchange coupling
    #[arg(long, default_value_t = 1.0)]
    j: f64,

    /// Hubbard hopping amplitude
    #[arg(long, default_value_t = 1.0)]
    t: f64,

    /// Hubbard on-site interaction
    #[arg(long, default_value_t = 2.0)]
    u: f64,

    /// Oscillator frequency
    #[arg(long, default_value_t = 1.0)]
    omega: f64,

    /// Print only the lowest levels (0 = all)
    #[arg(long, default_value_t = 10)]
    levels: usize,

    /// Write all energies as CSV
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Log filter, overridden by RUST_LOG
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Model {
    Heisenberg,
    Hubbard,
    Oscillator,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let spectrum = match args.model {
        Model::Heisenberg => {
            let model = HeisenbergModel::new(args.n, args.j)?;
            println!("Heisenberg chain: n = {}, J = {}, dim = {}", model.n(), model.j(), model.dim());
            model.solve()
        }
        Model::Hubbard => {
            let model = HubbardModel::new(args.n, args.t, args.u)?;
            println!(
                "Hubbard chain: sites = {}, t = {}, U = {}, dim = {}",
                model.num_sites(),
                model.t(),
                model.u(),
                model.dim()
            );
            model.diagonalize()
        }
        Model::Oscillator => {
            let model = HarmonicOscillator::new(args.n, args.omega)?;
            println!("Harmonic oscillator: levels = {}, omega = {}", model.n(), model.omega());
            model.find_eigenstates()
        }
    };

    let shown = if args.levels == 0 {
        spectrum.dim()
    } else {
        args.levels.min(spectrum.dim())
    };
    for (k, e) in spectrum.energies.iter().take(shown).enumerate() {
        println!("E[{:>4}] = {:+.8}", k, e);
    }
    if shown < spectrum.dim() {
        println!("... {} more", spectrum.dim() - shown);
    }

    if let Some(path) = &args.csv {
        write_energies(path, &spectrum)
            .with_context(|| format!("failed to write energies to {}", path.display()))?;
        info!(path = %path.display(), "energies written");
    }

    Ok(())
}

fn write_energies(path: &Path, spectrum: &Spectrum) -> std::io::Result<()> {
    let mut f = BufWriter::new(File::create(path)?);
    writeln!(f, "level,energy")?;
    for (k, e) in spectrum.energies.iter().enumerate() {
        writeln!(f, "{},{}", k, e)?;
    }
    f.flush()
}
