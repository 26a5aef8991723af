use crate::error::{TfimError, TfimResult};
use rng::ONDRng;
use serde::{Deserialize, Serialize};

/// Square grid of ±1 spins with periodic boundaries, stored row-major.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawSpinLattice")]
pub struct SpinLattice {
    size: usize,
    spins: Vec<i8>,
}

#[derive(Deserialize)]
struct RawSpinLattice {
    size: usize,
    spins: Vec<i8>,
}

impl TryFrom<RawSpinLattice> for SpinLattice {
    type Error = TfimError;

    fn try_from(raw: RawSpinLattice) -> TfimResult<Self> {
        Self::from_spins(raw.size, raw.spins)
    }
}

impl SpinLattice {
    /// Wrap row-major spins. Fails unless there are exactly `size²` values,
    /// each ±1.
    pub fn from_spins(size: usize, spins: Vec<i8>) -> TfimResult<Self> {
        let lattice = Self { size, spins };
        lattice.validate()?;
        Ok(lattice)
    }

    pub fn validate(&self) -> TfimResult<()> {
        if self.size.checked_mul(self.size) != Some(self.spins.len()) {
            return Err(TfimError::InvalidConfig {
                size: self.size,
                reason: "spin count differs from size²",
            });
        }
        if let Some(&s) = self.spins.iter().find(|&&s| s != 1 && s != -1) {
            return Err(TfimError::InvalidParameter {
                name: "spin",
                value: s as f64,
                expected: "+1 or -1",
            });
        }
        Ok(())
    }

    /// Uniform ±1 spins, one draw per site in row-major order.
    pub fn random(size: usize, rng: &mut ONDRng) -> Self {
        let spins = (0..size * size)
            .map(|_| if rng.next_below(2, b"TFIM_INIT") == 1 { 1 } else { -1 })
            .collect();
        Self { size, spins }
    }

    /// Every spin set to `value` (normalized to ±1).
    pub fn uniform(size: usize, value: i8) -> Self {
        let v = if value < 0 { -1 } else { 1 };
        Self {
            size,
            spins: vec![v; size * size],
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn n_spins(&self) -> usize {
        self.spins.len()
    }

    #[inline]
    pub fn get(&self, i: usize, j: usize) -> i8 {
        self.spins[i * self.size + j]
    }

    #[inline]
    pub fn flip(&mut self, i: usize, j: usize) {
        let k = i * self.size + j;
        self.spins[k] = -self.spins[k];
    }

    pub fn as_slice(&self) -> &[i8] {
        &self.spins
    }

    pub fn rows(&self) -> impl Iterator<Item = &[i8]> {
        self.spins.chunks(self.size.max(1))
    }

    /// The four periodic neighbors of (i, j) in the order down, right, up, left.
    #[inline]
    pub fn neighbors(&self, i: usize, j: usize) -> [(usize, usize); 4] {
        let n = self.size;
        let down = if i + 1 == n { 0 } else { i + 1 };
        let right = if j + 1 == n { 0 } else { j + 1 };
        let up = if i == 0 { n - 1 } else { i - 1 };
        let left = if j == 0 { n - 1 } else { j - 1 };
        [(down, j), (i, right), (up, j), (i, left)]
    }

    #[inline]
    pub fn neighbor_sum(&self, i: usize, j: usize) -> i32 {
        self.neighbors(i, j)
            .iter()
            .map(|&(a, b)| self.get(a, b) as i32)
            .sum()
    }
}
