//! Circuit constructors for the spin models.

use crate::circuit::{Angle, Circuit};
use crate::error::{CircuitError, CircuitResult};
use crate::lattice::{SquareLattice, SquareLatticeMatrix};
use tracing::debug;

/// Name of the evolution-time parameter used by the Heisenberg circuits.
pub const TIME_PARAMETER: &str = "t";

/// One layer of the transverse-field Ising model on a chain: a ZZ coupling
/// (CX · RZ(θz) · CX) on each bond, then RX(θx) on every qubit.
///
/// The wrap-around bond (n-1, 0) is added when `periodic` is set and the
/// chain has more than two qubits.
pub fn tfim_circuit(
    n_qubits: usize,
    theta_z: impl Into<Angle>,
    theta_x: impl Into<Angle>,
    periodic: bool,
) -> CircuitResult<Circuit> {
    let theta_z = theta_z.into();
    let theta_x = theta_x.into();
    let mut qc = Circuit::new("tfim", n_qubits);

    for i in 0..n_qubits.saturating_sub(1) {
        qc.cx(i, i + 1)?;
        qc.rz(theta_z.clone(), i + 1)?;
        qc.cx(i, i + 1)?;
    }

    if periodic && n_qubits > 2 {
        qc.cx(n_qubits - 1, 0)?;
        qc.rz(theta_z.clone(), 0)?;
        qc.cx(n_qubits - 1, 0)?;
    }

    for i in 0..n_qubits {
        qc.rx(theta_x.clone(), i)?;
    }

    debug!(n_qubits, periodic, gates = qc.len(), "built TFIM circuit");
    Ok(qc)
}

/// Trotterized Heisenberg chain with periodic boundary. Every step applies
/// RXX, RYY, RZZ(2t) to each bond (i, i+1) and then to (n-1, 0).
pub fn heisenberg_circuit(n_qubits: usize, trotter_steps: usize) -> CircuitResult<Circuit> {
    if n_qubits < 2 {
        return Err(CircuitError::TooFewQubits {
            required: 2,
            got: n_qubits,
        });
    }

    let theta = Angle::symbol(TIME_PARAMETER).scaled(2.0);
    let mut qc = Circuit::new("heisenberg", n_qubits);

    for _ in 0..trotter_steps {
        for i in 0..n_qubits - 1 {
            append_exchange(&mut qc, &theta, i, i + 1)?;
        }
        append_exchange(&mut qc, &theta, n_qubits - 1, 0)?;
    }

    debug!(n_qubits, trotter_steps, gates = qc.len(), "built Heisenberg circuit");
    Ok(qc)
}

/// Heisenberg exchange on a square lattice from its adjacency list. Each
/// bond appears once per endpoint, so it is applied in both directions.
pub fn heisenberg_lattice_circuit(lattice: &SquareLattice, t: impl Into<Angle>) -> CircuitResult<Circuit> {
    let theta = t.into().scaled(2.0);
    let mut qc = Circuit::new("heisenberg_lattice", lattice.num_sites());

    for (site, neighbors) in lattice.adjacency_list().iter().enumerate() {
        for &nb in neighbors {
            append_exchange(&mut qc, &theta, site, nb)?;
        }
    }

    debug!(
        rows = lattice.rows(),
        cols = lattice.cols(),
        gates = qc.len(),
        "built lattice Heisenberg circuit"
    );
    Ok(qc)
}

/// Heisenberg exchange on a square lattice from its adjacency matrix; each
/// bond (i < j) is applied once.
pub fn heisenberg_lattice_matrix_circuit(
    lattice: &SquareLatticeMatrix,
    t: impl Into<Angle>,
) -> CircuitResult<Circuit> {
    let theta = t.into().scaled(2.0);
    let n = lattice.num_sites();
    let mut qc = Circuit::new("heisenberg_lattice_matrix", n);

    for i in 0..n {
        for j in i + 1..n {
            if lattice.are_neighbors(i, j) {
                append_exchange(&mut qc, &theta, i, j)?;
            }
        }
    }

    debug!(
        rows = lattice.rows(),
        cols = lattice.cols(),
        gates = qc.len(),
        "built matrix-lattice Heisenberg circuit"
    );
    Ok(qc)
}

fn append_exchange(qc: &mut Circuit, theta: &Angle, a: usize, b: usize) -> CircuitResult<()> {
    qc.rxx(theta.clone(), a, b)?;
    qc.ryy(theta.clone(), a, b)?;
    qc.rzz(theta.clone(), a, b)?;
    Ok(())
}
