use crate::lattice::SpinLattice;
use crate::tfim::COUPLING;

/// Mean spin, in [-1, 1].
pub fn magnetization(lattice: &SpinLattice) -> f64 {
    let n = lattice.n_spins();
    if n == 0 {
        return 0.0;
    }
    let total: i64 = lattice.as_slice().iter().map(|&s| s as i64).sum();
    total as f64 / n as f64
}

/// Ising energy per spin, -J Σ s_i s_j over forward (down, right) bonds.
pub fn energy_per_spin(lattice: &SpinLattice) -> f64 {
    let n = lattice.n_spins();
    if n == 0 {
        return 0.0;
    }
    let size = lattice.size();
    let mut total = 0i64;
    for i in 0..size {
        for j in 0..size {
            let s = lattice.get(i, j) as i64;
            let [down, right, _, _] = lattice.neighbors(i, j);
            total += s * lattice.get(down.0, down.1) as i64;
            total += s * lattice.get(right.0, right.1) as i64;
        }
    }
    -COUPLING * total as f64 / n as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aligned_lattice() {
        let up = SpinLattice::uniform(4, 1);
        assert_eq!(magnetization(&up), 1.0);
        assert_eq!(energy_per_spin(&up), -2.0);
        let down = SpinLattice::uniform(4, -1);
        assert_eq!(magnetization(&down), -1.0);
        assert_eq!(energy_per_spin(&down), -2.0);
    }

    #[test]
    fn checkerboard_is_antialigned() {
        let mut lat = SpinLattice::uniform(4, 1);
        for i in 0..4 {
            for j in 0..4 {
                if (i + j) % 2 == 1 {
                    lat.flip(i, j);
                }
            }
        }
        assert_eq!(magnetization(&lat), 0.0);
        assert_eq!(energy_per_spin(&lat), 2.0);
    }
}
