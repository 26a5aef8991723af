pub mod circuit;
pub mod circuits;
pub mod error;
pub mod gates;
pub mod hamiltonian;
pub mod hubbard;
pub mod lattice;
pub mod oscillator;

pub use circuit::{Angle, Circuit, Gate, Instruction};
pub use error::{CircuitError, CircuitResult, ModelError, ModelResult};
pub use hamiltonian::HeisenbergModel;
pub use hubbard::HubbardModel;
pub use lattice::{SquareLattice, SquareLatticeMatrix};
pub use oscillator::HarmonicOscillator;
