use crate::error::{ModelError, ModelResult};
use crate::hamiltonian::ensure_finite;
use faer::Mat;
use linalg::dense::{adjoint, matmul};
use linalg::{eigh, Spectrum, C64};
use tracing::debug;

/// Largest truncated Fock space handled densely.
pub const MAX_OSCILLATOR_LEVELS: usize = 2048;

/// Quantum harmonic oscillator truncated to the lowest `n` Fock states,
/// H = ω (a†a + ½).
#[derive(Clone)]
pub struct HarmonicOscillator {
    n: usize,
    omega: f64,
    hamiltonian: Mat<C64>,
}

impl HarmonicOscillator {
    pub fn new(n: usize, omega: f64) -> ModelResult<Self> {
        ensure_finite("omega", omega)?;
        if n == 0 {
            return Err(ModelError::InvalidSize {
                what: "number of levels",
                value: n,
                min: 1,
            });
        }
        if n > MAX_OSCILLATOR_LEVELS {
            return Err(ModelError::TooLarge {
                what: "number of levels",
                value: n,
                max: MAX_OSCILLATOR_LEVELS,
            });
        }

        debug!(n, omega, "building harmonic oscillator Hamiltonian");
        let a = annihilation(n);
        let number = matmul(&adjoint(&a), &a);
        let hamiltonian = Mat::from_fn(n, n, |i, j| {
            let half = if i == j { 0.5 } else { 0.0 };
            (number.read(i, j) + C64::new(half, 0.0)) * omega
        });

        Ok(Self {
            n,
            omega,
            hamiltonian,
        })
    }

    pub fn n(&self) -> usize {
        self.n
    }

    pub fn omega(&self) -> f64 {
        self.omega
    }

    pub fn hamiltonian(&self) -> &Mat<C64> {
        &self.hamiltonian
    }

    /// The truncated annihilation operator, a[k][k+1] = √(k+1).
    pub fn annihilation_operator(&self) -> Mat<C64> {
        annihilation(self.n)
    }

    pub fn find_eigenstates(&self) -> Spectrum {
        eigh(&self.hamiltonian)
    }
}

fn annihilation(n: usize) -> Mat<C64> {
    Mat::from_fn(n, n, |i, j| {
        if j == i + 1 {
            C64::new((j as f64).sqrt(), 0.0)
        } else {
            C64::new(0.0, 0.0)
        }
    })
}
