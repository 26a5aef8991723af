//! One-dimensional Hubbard chain in the occupation-number basis.
//!
//! Each site carries two modes (spin up, spin down), so `num_sites` sites
//! span `4^num_sites` basis states. A basis index is read most significant
//! bit first as the occupations `(site0↑, site0↓, site1↑, site1↓, ...)`.
//!
//! Hopping moves a particle from site `i` to an empty site `i + 1` of the
//! same spin and contributes `-t` symmetrically. No fermionic sign is
//! applied, so the operator is a real symmetric matrix.

use crate::error::{ModelError, ModelResult};
use crate::hamiltonian::ensure_finite;
use faer::Mat;
use linalg::dense::zeros;
use linalg::{eigh, Spectrum, C64};
use tracing::debug;

/// Largest chain handled densely (4^5 = 1024 basis states).
pub const MAX_HUBBARD_SITES: usize = 5;

#[derive(Clone)]
pub struct HubbardModel {
    num_sites: usize,
    t: f64,
    u: f64,
    hamiltonian: Mat<C64>,
}

impl HubbardModel {
    pub fn new(num_sites: usize, t: f64, u: f64) -> ModelResult<Self> {
        ensure_finite("t", t)?;
        ensure_finite("U", u)?;
        if num_sites == 0 {
            return Err(ModelError::InvalidSize {
                what: "number of sites",
                value: num_sites,
                min: 1,
            });
        }
        if num_sites > MAX_HUBBARD_SITES {
            return Err(ModelError::TooLarge {
                what: "number of sites",
                value: num_sites,
                max: MAX_HUBBARD_SITES,
            });
        }

        debug!(num_sites, t, u, dim = 1usize << (2 * num_sites), "building Hubbard Hamiltonian");
        let hamiltonian = build_hubbard(num_sites, t, u);
        Ok(Self {
            num_sites,
            t,
            u,
            hamiltonian,
        })
    }

    pub fn num_sites(&self) -> usize {
        self.num_sites
    }

    pub fn t(&self) -> f64 {
        self.t
    }

    pub fn u(&self) -> f64 {
        self.u
    }

    pub fn dim(&self) -> usize {
        self.hamiltonian.nrows()
    }

    pub fn hamiltonian(&self) -> &Mat<C64> {
        &self.hamiltonian
    }

    pub fn diagonalize(&self) -> Spectrum {
        eigh(&self.hamiltonian)
    }
}

/// Occupation of mode `mode` in basis state `idx`, modes counted from the
/// most significant bit.
#[inline]
fn occupation(idx: usize, mode: usize, n_modes: usize) -> usize {
    (idx >> (n_modes - 1 - mode)) & 1
}

#[inline]
fn mode_mask(mode: usize, n_modes: usize) -> usize {
    1 << (n_modes - 1 - mode)
}

fn build_hubbard(num_sites: usize, t: f64, u: f64) -> Mat<C64> {
    let n_modes = 2 * num_sites;
    let dim = 1usize << n_modes;
    let mut h = zeros(dim);
    let hop = C64::new(-t, 0.0);

    for i in 0..num_sites.saturating_sub(1) {
        for idx in 0..dim {
            for spin in 0..2 {
                let from = 2 * i + spin;
                let to = 2 * (i + 1) + spin;
                if occupation(idx, from, n_modes) > occupation(idx, to, n_modes) {
                    let new_idx = idx ^ mode_mask(from, n_modes) ^ mode_mask(to, n_modes);
                    let a = h.read(idx, new_idx);
                    h.write(idx, new_idx, a + hop);
                    let b = h.read(new_idx, idx);
                    h.write(new_idx, idx, b + hop);
                }
            }
        }
    }

    for idx in 0..dim {
        let mut doubles = 0usize;
        for i in 0..num_sites {
            doubles += occupation(idx, 2 * i, n_modes) * occupation(idx, 2 * i + 1, n_modes);
        }
        if doubles > 0 {
            let cur = h.read(idx, idx);
            h.write(idx, idx, cur + C64::new(u * doubles as f64, 0.0));
        }
    }

    h
}

#[cfg(test)]
mod tests {
    use super::occupation;

    #[test]
    fn occupation_reads_msb_first() {
        // 4 modes, idx = 0b1000 -> mode 0 occupied
        assert_eq!(occupation(0b1000, 0, 4), 1);
        assert_eq!(occupation(0b1000, 3, 4), 0);
        assert_eq!(occupation(0b0001, 3, 4), 1);
    }
}
