//! Transverse-field Ising Monte Carlo on a periodic square lattice.
//!
//! One update picks a random site, applies the Metropolis rule for the
//! nearest-neighbour Ising energy, and then independently flips the same
//! site with probability `h` (the transverse-field kick). A sweep is
//! `size²` updates with sites drawn with replacement.
//!
//! Random draws per update, in order: row, column, Metropolis draw (only
//! when ΔE ≥ 0), kick draw. Reproducing a run requires the same seed and
//! the same sequence of calls.

use crate::error::{TfimError, TfimResult};
use crate::lattice::SpinLattice;
use crate::observables::{energy_per_spin, magnetization};
use rng::ONDRng;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

/// Nearest-neighbour coupling J. Fixed; the model has no coupling parameter.
pub const COUPLING: f64 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TfimParams {
    /// Lattice side length.
    pub size: usize,
    /// Inverse temperature.
    pub beta: f64,
    /// Per-update probability of a transverse-field kick.
    pub h: f64,
    /// Number of sweeps performed by [`TfimSimulation::run`].
    pub steps: usize,
}

impl Default for TfimParams {
    fn default() -> Self {
        Self {
            size: 10,
            beta: 0.4,
            h: 0.05,
            steps: 100,
        }
    }
}

impl TfimParams {
    pub fn validate(&self) -> TfimResult<()> {
        if self.size == 0 {
            return Err(TfimError::InvalidConfig {
                size: self.size,
                reason: "lattice side must be positive",
            });
        }
        if self.size.checked_mul(self.size).is_none() {
            return Err(TfimError::InvalidConfig {
                size: self.size,
                reason: "site count overflows",
            });
        }
        if !(self.beta >= 0.0) {
            return Err(TfimError::InvalidParameter {
                name: "beta",
                value: self.beta,
                expected: "a non-negative inverse temperature",
            });
        }
        if !(0.0..=1.0).contains(&self.h) {
            return Err(TfimError::InvalidParameter {
                name: "h",
                value: self.h,
                expected: "a probability in [0, 1]",
            });
        }
        Ok(())
    }

    pub fn n_sites(&self) -> usize {
        self.size * self.size
    }
}

/// Result of a single update attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpdateOutcome {
    pub site: (usize, usize),
    /// The Metropolis flip was accepted.
    pub accepted: bool,
    /// The transverse-field kick fired.
    pub kicked: bool,
}

impl UpdateOutcome {
    /// Net change of the spin: a kick undoes an accepted flip.
    pub fn flipped(&self) -> bool {
        self.accepted != self.kicked
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SweepStats {
    pub attempts: u64,
    pub accepted: u64,
    pub kicked: u64,
}

impl SweepStats {
    fn record(&mut self, outcome: UpdateOutcome) {
        self.attempts += 1;
        self.accepted += outcome.accepted as u64;
        self.kicked += outcome.kicked as u64;
    }

    pub fn merge(&mut self, other: SweepStats) {
        self.attempts += other.attempts;
        self.accepted += other.accepted;
        self.kicked += other.kicked;
    }

    pub fn acceptance_rate(&self) -> f64 {
        if self.attempts == 0 {
            return 0.0;
        }
        self.accepted as f64 / self.attempts as f64
    }

    pub fn kick_rate(&self) -> f64 {
        if self.attempts == 0 {
            return 0.0;
        }
        self.kicked as f64 / self.attempts as f64
    }
}

/// Observables after one sweep.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SweepRecord {
    pub sweep: usize,
    pub magnetization: f64,
    pub energy: f64,
    pub accepted: u64,
    pub kicked: u64,
}

pub struct TfimSimulation {
    params: TfimParams,
    lattice: SpinLattice,
}

impl TfimSimulation {
    /// Validate `params` and fill the lattice with uniform random spins.
    pub fn new(params: TfimParams, rng: &mut ONDRng) -> TfimResult<Self> {
        params.validate()?;
        let lattice = SpinLattice::random(params.size, rng);
        debug!(
            size = params.size,
            beta = params.beta,
            h = params.h,
            steps = params.steps,
            "initialized TFIM lattice"
        );
        Ok(Self { params, lattice })
    }

    /// Start from a prepared lattice instead of a random one.
    pub fn with_lattice(params: TfimParams, lattice: SpinLattice) -> TfimResult<Self> {
        params.validate()?;
        if lattice.size() != params.size {
            return Err(TfimError::InvalidConfig {
                size: lattice.size(),
                reason: "lattice side differs from params.size",
            });
        }
        lattice.validate()?;
        Ok(Self { params, lattice })
    }

    pub fn params(&self) -> &TfimParams {
        &self.params
    }

    pub fn lattice(&self) -> &SpinLattice {
        &self.lattice
    }

    /// Owned copy of the current configuration.
    pub fn snapshot(&self) -> SpinLattice {
        self.lattice.clone()
    }

    pub fn magnetization(&self) -> f64 {
        magnetization(&self.lattice)
    }

    pub fn energy_per_spin(&self) -> f64 {
        energy_per_spin(&self.lattice)
    }

    /// One single-site update.
    pub fn update(&mut self, rng: &mut ONDRng) -> UpdateOutcome {
        let size = self.params.size;
        let i = rng.next_below(size, b"TFIM_ROW");
        let j = rng.next_below(size, b"TFIM_COL");

        let s = self.lattice.get(i, j) as f64;
        let delta_e = 2.0 * COUPLING * s * self.lattice.neighbor_sum(i, j) as f64;

        let accepted = delta_e < 0.0
            || rng.next_f64(b"TFIM_ACCEPT") < acceptance_probability(self.params.beta, delta_e);
        if accepted {
            self.lattice.flip(i, j);
        }

        let kicked = rng.next_f64(b"TFIM_KICK") < self.params.h;
        if kicked {
            self.lattice.flip(i, j);
        }

        UpdateOutcome {
            site: (i, j),
            accepted,
            kicked,
        }
    }

    /// One sweep of `size²` updates.
    pub fn step(&mut self, rng: &mut ONDRng) -> SweepStats {
        let mut stats = SweepStats::default();
        for _ in 0..self.params.n_sites() {
            stats.record(self.update(rng));
        }
        stats
    }

    /// All `steps` sweeps.
    pub fn run(&mut self, rng: &mut ONDRng) -> SweepStats {
        debug!(steps = self.params.steps, "running TFIM sweeps");
        let mut total = SweepStats::default();
        for sweep in 0..self.params.steps {
            let stats = self.step(rng);
            trace!(sweep, accepted = stats.accepted, kicked = stats.kicked, "sweep done");
            total.merge(stats);
        }
        debug!(
            acceptance = total.acceptance_rate(),
            kick_rate = total.kick_rate(),
            magnetization = self.magnetization(),
            "TFIM run finished"
        );
        total
    }

    /// All `steps` sweeps, recording observables after each one.
    pub fn run_recorded(&mut self, rng: &mut ONDRng) -> Vec<SweepRecord> {
        let mut records = Vec::with_capacity(self.params.steps);
        for sweep in 0..self.params.steps {
            let stats = self.step(rng);
            let record = SweepRecord {
                sweep,
                magnetization: self.magnetization(),
                energy: self.energy_per_spin(),
                accepted: stats.accepted,
                kicked: stats.kicked,
            };
            trace!(sweep, magnetization = record.magnetization, energy = record.energy, "sweep done");
            records.push(record);
        }
        records
    }
}

/// Metropolis probability for ΔE ≥ 0. ΔE = 0 is always accepted, which
/// keeps β = ∞ well defined.
#[inline]
fn acceptance_probability(beta: f64, delta_e: f64) -> f64 {
    if delta_e == 0.0 {
        1.0
    } else {
        (-beta * delta_e).exp()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn acceptance_limits() {
        assert_eq!(acceptance_probability(0.0, 8.0), 1.0);
        assert_eq!(acceptance_probability(f64::INFINITY, 4.0), 0.0);
        assert_eq!(acceptance_probability(f64::INFINITY, 0.0), 1.0);
        assert!((acceptance_probability(0.5, 4.0) - (-2.0f64).exp()).abs() < 1e-15);
    }

    #[test]
    fn validation() {
        assert!(TfimParams::default().validate().is_ok());
        let bad = |p: TfimParams| p.validate().unwrap_err();
        assert!(matches!(
            bad(TfimParams { size: 0, ..Default::default() }),
            TfimError::InvalidConfig { size: 0, .. }
        ));
        assert!(matches!(
            bad(TfimParams { size: usize::MAX, ..Default::default() }),
            TfimError::InvalidConfig { .. }
        ));
        assert!(matches!(
            bad(TfimParams { beta: -0.1, ..Default::default() }),
            TfimError::InvalidParameter { name: "beta", .. }
        ));
        assert!(matches!(
            bad(TfimParams { beta: f64::NAN, ..Default::default() }),
            TfimError::InvalidParameter { name: "beta", .. }
        ));
        assert!(matches!(
            bad(TfimParams { h: 1.5, ..Default::default() }),
            TfimError::InvalidParameter { name: "h", .. }
        ));
        assert!(matches!(
            bad(TfimParams { h: f64::NAN, ..Default::default() }),
            TfimError::InvalidParameter { name: "h", .. }
        ));
        assert!(TfimParams { beta: f64::INFINITY, h: 1.0, steps: 0, ..Default::default() }
            .validate()
            .is_ok());
    }

    #[test]
    fn draw_count_follows_energy_sign() {
        // All spins up: ΔE = +8 for every site, so each update draws
        // row, column, Metropolis and kick values.
        let params = TfimParams { size: 4, beta: 50.0, h: 0.0, steps: 1 };
        let mut sim = TfimSimulation::with_lattice(params, SpinLattice::uniform(4, 1)).unwrap();
        let mut rng = ONDRng::new(b"draws");
        let outcome = sim.update(&mut rng);
        assert!(!outcome.accepted);
        assert_eq!(rng.draws(), 4);

        // 2x2 checkerboard: every site sees four opposite neighbours,
        // ΔE = -8, so the flip is unconditional and no Metropolis value
        // is drawn.
        let mut board = SpinLattice::uniform(2, 1);
        board.flip(0, 1);
        board.flip(1, 0);
        let params = TfimParams { size: 2, beta: 1.0, h: 0.0, steps: 1 };
        let mut sim = TfimSimulation::with_lattice(params, board).unwrap();
        let mut rng = ONDRng::new(b"draws");
        let outcome = sim.update(&mut rng);
        assert!(outcome.accepted);
        assert!(outcome.flipped());
        assert_eq!(rng.draws(), 3);
    }

    #[test]
    fn mismatched_lattice_is_rejected() {
        let params = TfimParams { size: 3, ..Default::default() };
        let err = TfimSimulation::with_lattice(params, SpinLattice::uniform(4, 1)).err();
        assert!(matches!(err, Some(TfimError::InvalidConfig { size: 4, .. })));
    }
}
