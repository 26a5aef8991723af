use crate::dense::C64;
use faer::{Mat, Side};

/// Eigen-decomposition of a Hermitian operator.
#[derive(Clone)]
pub struct Spectrum {
    /// Eigenvalues in ascending order.
    pub energies: Vec<f64>,
    /// Eigenvectors stored column-wise, column k belongs to `energies[k]`.
    pub states: Mat<C64>,
}

impl Spectrum {
    pub fn dim(&self) -> usize {
        self.energies.len()
    }

    pub fn ground_energy(&self) -> f64 {
        self.energies.first().copied().unwrap_or(f64::NAN)
    }

    pub fn state(&self, k: usize) -> Vec<C64> {
        (0..self.states.nrows()).map(|i| self.states.read(i, k)).collect()
    }
}

/// Diagonalize a Hermitian matrix. Only the lower triangle is read.
pub fn eigh(m: &Mat<C64>) -> Spectrum {
    assert!(m.nrows() == m.ncols(), "eigh requires a square matrix");
    let n = m.nrows();
    if n == 0 {
        return Spectrum {
            energies: Vec::new(),
            states: Mat::<C64>::zeros(0, 0),
        };
    }

    let eig = m.selfadjoint_eigendecomposition(Side::Lower);
    let s = eig.s().column_vector();
    let u = eig.u();

    let mut order: Vec<usize> = (0..n).collect();
    order.sort_by(|&a, &b| s.read(a).re.total_cmp(&s.read(b).re));

    let energies = order.iter().map(|&k| s.read(k).re).collect();
    let states = Mat::from_fn(n, n, |i, j| u.read(i, order[j]));

    Spectrum { energies, states }
}
