use crate::error::{ModelError, ModelResult};
use crate::gates::{pauli_x, pauli_y, pauli_z};
use faer::Mat;
use linalg::dense::{add_scaled, from_2x2, identity, kron, zeros};
use linalg::{eigh, Spectrum, C64};
use tracing::debug;

/// Largest chain handled densely (2^10 = 1024 basis states).
pub const MAX_HEISENBERG_SPINS: usize = 10;

/// Periodic spin-1/2 Heisenberg chain
/// H = -J Σ_i (X_i X_{i+1} + Y_i Y_{i+1} + Z_i Z_{i+1}), site n-1 bonded to site 0.
#[derive(Clone)]
pub struct HeisenbergModel {
    n: usize,
    j: f64,
    hamiltonian: Mat<C64>,
}

impl HeisenbergModel {
    pub fn new(n: usize, j: f64) -> ModelResult<Self> {
        ensure_finite("J", j)?;
        if n == 0 {
            return Err(ModelError::InvalidSize {
                what: "number of spins",
                value: n,
                min: 1,
            });
        }
        if n > MAX_HEISENBERG_SPINS {
            return Err(ModelError::TooLarge {
                what: "number of spins",
                value: n,
                max: MAX_HEISENBERG_SPINS,
            });
        }

        debug!(n, j, dim = 1usize << n, "building Heisenberg Hamiltonian");
        let hamiltonian = build_heisenberg(n, j);
        Ok(Self { n, j, hamiltonian })
    }

    pub fn n(&self) -> usize {
        self.n
    }

    pub fn j(&self) -> f64 {
        self.j
    }

    pub fn dim(&self) -> usize {
        self.hamiltonian.nrows()
    }

    pub fn hamiltonian(&self) -> &Mat<C64> {
        &self.hamiltonian
    }

    pub fn solve(&self) -> Spectrum {
        eigh(&self.hamiltonian)
    }
}

fn build_heisenberg(n: usize, j: f64) -> Mat<C64> {
    let paulis = [
        from_2x2(pauli_x()),
        from_2x2(pauli_y()),
        from_2x2(pauli_z()),
    ];
    let id = identity(2);
    let mut h = zeros(1 << n);

    for i in 0..n {
        let next = (i + 1) % n;
        for p in &paulis {
            let mut term = identity(1);
            for site in 0..n {
                let factor = if site == i || site == next { p } else { &id };
                term = kron(&term, factor);
            }
            add_scaled(&mut h, &term, C64::new(-j, 0.0));
        }
    }
    h
}

pub(crate) fn ensure_finite(name: &'static str, value: f64) -> ModelResult<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ModelError::NonFinite { name, value })
    }
}
