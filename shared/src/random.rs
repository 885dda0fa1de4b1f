/// Source of uniform randomness, injected so tests can script outcomes.
pub trait RandomSource {
    /// Uniform draw in `[0, 1)`.
    fn roll(&mut self) -> f64;

    /// Uniform integer in `0..range`.
    fn delta(&mut self, range: u32) -> u64 {
        (self.roll() * f64::from(range)) as u64
    }
}

/// Production source backed by fastrand (wasm-compatible).
#[derive(Debug, Clone, Copy, Default)]
pub struct FastrandSource;

impl RandomSource for FastrandSource {
    fn roll(&mut self) -> f64 {
        fastrand::f64()
    }
}
