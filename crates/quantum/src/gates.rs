use num_complex::Complex64;

pub type C64 = Complex64;

pub fn pauli_x() -> [[C64; 2]; 2] {
    let z = C64::new(0.0, 0.0);
    let o = C64::new(1.0, 0.0);
    [[z, o], [o, z]]
}

pub fn pauli_y() -> [[C64; 2]; 2] {
    let z = C64::new(0.0, 0.0);
    let i = C64::new(0.0, 1.0);
    let ni = C64::new(0.0, -1.0);
    [[z, ni], [i, z]]
}

pub fn pauli_z() -> [[C64; 2]; 2] {
    let z = C64::new(0.0, 0.0);
    let o = C64::new(1.0, 0.0);
    let m = C64::new(-1.0, 0.0);
    [[o, z], [z, m]]
}

pub fn rx(theta: f64) -> [[C64; 2]; 2] {
    let c = (theta / 2.0).cos();
    let s = (theta / 2.0).sin();
    [
        [C64::new(c, 0.0), C64::new(0.0, -s)],
        [C64::new(0.0, -s), C64::new(c, 0.0)],
    ]
}

pub fn rz(theta: f64) -> [[C64; 2]; 2] {
    let c = (theta / 2.0).cos();
    let s = (theta / 2.0).sin();
    let z = C64::new(0.0, 0.0);
    [[C64::new(c, -s), z], [z, C64::new(c, s)]]
}

/// |00>→|00>, |01>→|01>, |10>→|11>, |11>→|10>
pub fn cnot() -> [[C64; 4]; 4] {
    let z = C64::new(0.0, 0.0);
    let o = C64::new(1.0, 0.0);
    [
        [o, z, z, z],
        [z, o, z, z],
        [z, z, z, o],
        [z, z, o, z],
    ]
}

/// exp(-i θ/2 X⊗X)
pub fn rxx(theta: f64) -> [[C64; 4]; 4] {
    pair_rotation(pauli_x(), theta)
}

/// exp(-i θ/2 Y⊗Y)
pub fn ryy(theta: f64) -> [[C64; 4]; 4] {
    pair_rotation(pauli_y(), theta)
}

/// exp(-i θ/2 Z⊗Z)
pub fn rzz(theta: f64) -> [[C64; 4]; 4] {
    pair_rotation(pauli_z(), theta)
}

pub fn kron2(a: [[C64; 2]; 2], b: [[C64; 2]; 2]) -> [[C64; 4]; 4] {
    let mut out = [[C64::new(0.0, 0.0); 4]; 4];
    for i in 0..2 {
        for j in 0..2 {
            for k in 0..2 {
                for l in 0..2 {
                    out[i * 2 + k][j * 2 + l] = a[i][j] * b[k][l];
                }
            }
        }
    }
    out
}

// P⊗P squares to the identity, so the exponential is cos·I - i sin·P⊗P.
fn pair_rotation(p: [[C64; 2]; 2], theta: f64) -> [[C64; 4]; 4] {
    let pp = kron2(p, p);
    let c = C64::new((theta / 2.0).cos(), 0.0);
    let s = C64::new(0.0, -(theta / 2.0).sin());
    let mut out = [[C64::new(0.0, 0.0); 4]; 4];
    for (i, row) in out.iter_mut().enumerate() {
        for (j, v) in row.iter_mut().enumerate() {
            let diag = if i == j { c } else { C64::new(0.0, 0.0) };
            *v = diag + s * pp[i][j];
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rzz_is_diagonal_parity_phase() {
        let theta = 0.7;
        let u = rzz(theta);
        let minus = C64::from_polar(1.0, -theta / 2.0);
        let plus = C64::from_polar(1.0, theta / 2.0);
        let expected = [minus, plus, plus, minus];
        for k in 0..4 {
            assert!((u[k][k] - expected[k]).norm() < 1e-12, "k = {}", k);
        }
        assert!(u[0][3].norm() < 1e-12);
    }

    #[test]
    fn rx_at_pi_is_minus_i_x() {
        let u = rx(std::f64::consts::PI);
        assert!(u[0][0].norm() < 1e-12);
        assert!((u[0][1] - C64::new(0.0, -1.0)).norm() < 1e-12);
    }
}
