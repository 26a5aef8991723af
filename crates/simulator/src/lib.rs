pub mod ensemble;
pub mod error;
pub mod lattice;
pub mod observables;
mod output;
pub mod tfim;

pub use ensemble::{run_ensemble, EnsembleSummary, ReplicaSummary};
pub use error::{TfimError, TfimResult};
pub use lattice::SpinLattice;
pub use observables::{energy_per_spin, magnetization};
pub use output::{write_lattice_csv, write_trace_csv};
pub use tfim::{SweepRecord, SweepStats, TfimParams, TfimSimulation, UpdateOutcome, COUPLING};
