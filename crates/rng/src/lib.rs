use sha3::{digest::{ExtendableOutput, Update, XofReader}, Shake256};

/// Deterministic SHAKE256 stream. Every draw is labelled with a context so
/// that streams stay reproducible when call sites are reordered.
#[derive(Clone, Debug)]
pub struct ONDRng {
    state: [u8; 32],
    step: u64,
}

impl ONDRng {
    pub fn new(seed: &[u8]) -> Self {
        let mut state = [0u8; 32];
        shake(&[seed, b"OND_INIT"], &mut state);
        Self { state, step: 0 }
    }

    pub fn from_u64(seed: u64) -> Self {
        Self::new(&seed.to_be_bytes())
    }

    /// Uniform value in [0, 1) with 53 bits of resolution.
    pub fn next_f64(&mut self, ctx: &[u8]) -> f64 {
        self.step += 1;

        let state = self.state;
        let step_bytes = self.step.to_be_bytes();
        let mut next_state = self.state;
        shake(&[&state, &step_bytes, b"QSIM"], &mut next_state);
        self.state = next_state;

        let mut out = [0u8; 8];
        shake(&[&self.state, ctx], &mut out);

        if self.state[0] < 16 {
            let state = self.state;
            let mut next_state = self.state;
            shake(&[&state, b"SKIP"], &mut next_state);
            self.state = next_state;
        }

        (u64::from_be_bytes(out) >> 11) as f64 * (1.0 / (1u64 << 53) as f64)
    }

    /// Uniform index in [0, n). `n` must be non-zero.
    pub fn next_below(&mut self, n: usize, ctx: &[u8]) -> usize {
        assert!(n > 0, "next_below requires a non-empty range");
        let x = (self.next_f64(ctx) * n as f64) as usize;
        x.min(n - 1)
    }

    /// Number of values drawn so far.
    pub fn draws(&self) -> u64 {
        self.step
    }
}

fn shake(parts: &[&[u8]], out: &mut [u8]) {
    let mut h = Shake256::default();
    for p in parts {
        h.update(p);
    }
    let mut r = h.finalize_xof();
    r.read(out);
}

#[cfg(test)]
mod tests {
    use super::ONDRng;

    #[test]
    fn same_seed_same_stream() {
        let mut a = ONDRng::new(b"seed");
        let mut b = ONDRng::new(b"seed");
        for _ in 0..64 {
            assert_eq!(a.next_f64(b"X").to_bits(), b.next_f64(b"X").to_bits());
        }
        assert_eq!(a.draws(), 64);
    }

    #[test]
    fn context_separates_values() {
        let mut a = ONDRng::new(b"seed");
        let mut b = ONDRng::new(b"seed");
        assert_ne!(a.next_f64(b"A"), b.next_f64(b"B"));
    }

    #[test]
    fn unit_interval_and_index_range() {
        let mut rng = ONDRng::from_u64(7);
        for _ in 0..2000 {
            let x = rng.next_f64(b"U");
            assert!((0.0..1.0).contains(&x), "x = {}", x);
            let k = rng.next_below(10, b"K");
            assert!(k < 10);
        }
    }

    #[test]
    fn index_covers_range() {
        let mut rng = ONDRng::from_u64(11);
        let mut seen = [false; 4];
        for _ in 0..200 {
            seen[rng.next_below(4, b"K")] = true;
        }
        assert!(seen.iter().all(|&s| s), "seen = {:?}", seen);
    }
}
