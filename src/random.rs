/// Uniform samples in `[0, 1)`.
///
/// The browser passes `Math.random`, so placement and grain differ on every
/// mount. Tests pass something deterministic.
pub trait RandomSource {
    fn next_unit(&mut self) -> f64;
}

impl<F: FnMut() -> f64> RandomSource for F {
    fn next_unit(&mut self) -> f64 {
        self()
    }
}

/// Small xorshift generator for reproducible runs.
#[derive(Clone, Debug)]
pub struct XorShift(u64);

impl XorShift {
    pub fn seeded(seed: u64) -> Self {
        Self(seed.max(1))
    }
}

impl RandomSource for XorShift {
    fn next_unit(&mut self) -> f64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        (x >> 11) as f64 / (1u64 << 53) as f64
    }
}
