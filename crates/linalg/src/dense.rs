use faer::Mat;
use num_complex::Complex64;

pub type C64 = Complex64;

const ZERO: C64 = C64::new(0.0, 0.0);
const ONE: C64 = C64::new(1.0, 0.0);

pub fn zeros(n: usize) -> Mat<C64> {
    Mat::<C64>::zeros(n, n)
}

pub fn identity(n: usize) -> Mat<C64> {
    Mat::from_fn(n, n, |i, j| if i == j { ONE } else { ZERO })
}

pub fn from_2x2(m: [[C64; 2]; 2]) -> Mat<C64> {
    Mat::from_fn(2, 2, |i, j| m[i][j])
}

/// Kronecker product a ⊗ b; `a` indexes the most significant block.
pub fn kron(a: &Mat<C64>, b: &Mat<C64>) -> Mat<C64> {
    let (ar, ac) = (a.nrows(), a.ncols());
    let (br, bc) = (b.nrows(), b.ncols());
    let mut out = Mat::<C64>::zeros(ar * br, ac * bc);

    for i in 0..ar {
        for j in 0..ac {
            let aij = a.read(i, j);
            if aij == ZERO {
                continue;
            }
            for k in 0..br {
                for l in 0..bc {
                    out.write(i * br + k, j * bc + l, aij * b.read(k, l));
                }
            }
        }
    }
    out
}

/// `m += alpha * term`, in place.
pub fn add_scaled(m: &mut Mat<C64>, term: &Mat<C64>, alpha: C64) {
    assert!(
        m.nrows() == term.nrows() && m.ncols() == term.ncols(),
        "add_scaled shape mismatch"
    );
    for i in 0..m.nrows() {
        for j in 0..m.ncols() {
            let t = term.read(i, j);
            if t != ZERO {
                let cur = m.read(i, j);
                m.write(i, j, cur + alpha * t);
            }
        }
    }
}

/// Plain triple-loop product, for the small operators built in this workspace.
pub fn matmul(a: &Mat<C64>, b: &Mat<C64>) -> Mat<C64> {
    assert!(a.ncols() == b.nrows(), "matmul shape mismatch");
    let mut out = Mat::<C64>::zeros(a.nrows(), b.ncols());
    for i in 0..a.nrows() {
        for k in 0..a.ncols() {
            let aik = a.read(i, k);
            if aik == ZERO {
                continue;
            }
            for j in 0..b.ncols() {
                let cur = out.read(i, j);
                out.write(i, j, cur + aik * b.read(k, j));
            }
        }
    }
    out
}

pub fn adjoint(m: &Mat<C64>) -> Mat<C64> {
    Mat::from_fn(m.ncols(), m.nrows(), |i, j| m.read(j, i).conj())
}

pub fn is_hermitian(m: &Mat<C64>, tol: f64) -> bool {
    if m.nrows() != m.ncols() {
        return false;
    }
    for i in 0..m.nrows() {
        for j in i..m.ncols() {
            if (m.read(i, j) - m.read(j, i).conj()).norm() > tol {
                return false;
            }
        }
    }
    true
}

/// True when the columns of `m` form an orthonormal set.
pub fn is_orthonormal(m: &Mat<C64>, tol: f64) -> bool {
    let gram = matmul(&adjoint(m), m);
    approx_identity(&gram, tol)
}

pub fn approx_identity(m: &Mat<C64>, tol: f64) -> bool {
    if m.nrows() != m.ncols() {
        return false;
    }
    for i in 0..m.nrows() {
        for j in 0..m.ncols() {
            let expected = if i == j { ONE } else { ZERO };
            if (m.read(i, j) - expected).norm() > tol {
                return false;
            }
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kron_shapes_and_blocks() {
        let z = from_2x2([[ONE, ZERO], [ZERO, -ONE]]);
        let i2 = identity(2);
        let zi = kron(&z, &i2);
        assert_eq!((zi.nrows(), zi.ncols()), (4, 4));
        // Z ⊗ I = diag(1, 1, -1, -1)
        let diag: Vec<f64> = (0..4).map(|k| zi.read(k, k).re).collect();
        assert_eq!(diag, vec![1.0, 1.0, -1.0, -1.0]);
        let iz = kron(&i2, &z);
        let diag: Vec<f64> = (0..4).map(|k| iz.read(k, k).re).collect();
        assert_eq!(diag, vec![1.0, -1.0, 1.0, -1.0]);
    }

    #[test]
    fn hermitian_check() {
        let i = C64::new(0.0, 1.0);
        let y = from_2x2([[ZERO, -i], [i, ZERO]]);
        assert!(is_hermitian(&y, 1e-12));
        let not_h = from_2x2([[ZERO, i], [i, ZERO]]);
        assert!(!is_hermitian(&not_h, 1e-12));
    }

    #[test]
    fn identity_is_orthonormal() {
        assert!(is_orthonormal(&identity(5), 1e-12));
        let mut m = identity(3);
        m.write(0, 1, ONE);
        assert!(!is_orthonormal(&m, 1e-12));
    }
}
