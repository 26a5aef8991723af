use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;

use quantum::circuits::{
    heisenberg_circuit, heisenberg_lattice_circuit, heisenberg_lattice_matrix_circuit, tfim_circuit,
    TIME_PARAMETER,
};
use quantum::{Angle, Circuit, SquareLattice, SquareLatticeMatrix};

/// Build Trotter circuits for the spin models
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(long, value_enum)]
    model: Model,

    /// Qubits in the chain (tfim, heisenberg)
    #[arg(long, short = 'n', default_value_t = 4)]
    n: usize,

    /// ZZ angle of the TFIM layer
    #[arg(long, default_value_t = 0.5)]
    theta_z: f64,

    /// RX angle of the TFIM layer
    #[arg(long, default_value_t = 0.3)]
    theta_x: f64,

    /// Add the wrap-around bond to the TFIM chain
    #[arg(long)]
    periodic: bool,

    /// Trotter steps (heisenberg)
    #[arg(long, default_value_t = 1)]
    steps: usize,

    /// Lattice rows (lattice, lattice-matrix)
    #[arg(long, default_value_t = 2)]
    rows: usize,

    /// Lattice columns (lattice, lattice-matrix)
    #[arg(long, default_value_t = 2)]
    cols: usize,

    /// Fixed evolution time for the lattice circuits; symbolic if omitted
    #[arg(long)]
    time: Option<f64>,

    /// Emit the circuit as JSON
    #[arg(long)]
    json: bool,

    /// Log filter, overridden by RUST_LOG
    #[arg(long, default_value = "warn")]
    log_level: String,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Model {
    Tfim,
    Heisenberg,
    Lattice,
    LatticeMatrix,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let time = || match args.time {
        Some(t) => Angle::from(t),
        None => Angle::symbol(TIME_PARAMETER),
    };

    let qc: Circuit = match args.model {
        Model::Tfim => tfim_circuit(args.n, args.theta_z, args.theta_x, args.periodic)?,
        Model::Heisenberg => heisenberg_circuit(args.n, args.steps)?,
        Model::Lattice => {
            let lattice = SquareLattice::new(args.rows, args.cols);
            heisenberg_lattice_circuit(&lattice, time())?
        }
        Model::LatticeMatrix => {
            let lattice = SquareLatticeMatrix::new(args.rows, args.cols);
            heisenberg_lattice_matrix_circuit(&lattice, time())?
        }
    };

    info!(
        name = qc.name(),
        num_qubits = qc.num_qubits(),
        gates = qc.len(),
        "circuit built"
    );

    if args.json {
        let text = serde_json::to_string_pretty(&qc).context("failed to serialize circuit")?;
        println!("{}", text);
        return Ok(());
    }

    print!("{}", qc);
    let ops: Vec<String> = qc
        .count_ops()
        .iter()
        .map(|(name, count)| format!("{}: {}", name, count))
        .collect();
    println!("// {} gates ({})", qc.len(), ops.join(", "));
    let params = qc.parameters();
    if !params.is_empty() {
        let names: Vec<&str> = params.iter().map(String::as_str).collect();
        println!("// parameters: {}", names.join(", "));
    }

    Ok(())
}
