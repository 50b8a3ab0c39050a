//! Seeded sine-based random source shared by every stochastic generation step.

/// Reproducible float stream derived from `sin(seed + n)`.
///
/// The stream is not statistically strong. It only has to be stable for a
/// given seed so that a map can be regenerated from its stored seed.
#[derive(Clone, Debug)]
pub(crate) struct SeededRandom {
    counter: f64,
}

impl SeededRandom {
    pub(crate) fn new(seed: i64) -> Self {
        // The first sample (`sin(seed)`) is drawn and discarded on construction.
        Self { counter: seed as f64 + 1.0 }
    }

    /// Next float in `[0, 1)`.
    pub(crate) fn next_float(&mut self) -> f64 {
        let x = self.counter.sin() * 10_000.0;
        self.counter += 1.0;
        let fraction = x - x.floor();
        // A tiny negative product can round its fraction up to exactly 1.0.
        if fraction >= 1.0 { 0.0 } else { fraction }
    }

    pub(crate) fn next_bool(&mut self) -> bool {
        self.next_float() > 0.5
    }

    /// Uniform index in `0..len`. `len` must be non-zero.
    pub(crate) fn next_index(&mut self, len: usize) -> usize {
        debug_assert!(len > 0);
        let index = (self.next_float() * len as f64).floor() as usize;
        index.min(len - 1)
    }

    /// Split offset jitter: `floor((r - 0.5) * 2)`, which is either -1 or 0.
    pub(crate) fn next_jitter(&mut self) -> i64 {
        ((self.next_float() - 0.5) * 2.0).floor() as i64
    }
}
