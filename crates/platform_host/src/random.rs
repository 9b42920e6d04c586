//! Non-cryptographic randomness for UI choices such as feed picks and food placement.

const ZERO_SEED_STATE: u64 = 0x9E37_79B9_7F4A_7C15;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Xorshift64 generator; deterministic for a given seed.
pub struct XorShift64 {
    state: u64,
}

impl XorShift64 {
    /// Creates a generator from `seed`; a zero seed is replaced by a fixed non-zero state.
    pub const fn new(seed: u64) -> Self {
        Self {
            state: if seed == 0 { ZERO_SEED_STATE } else { seed },
        }
    }

    /// Creates a generator seeded from [`entropy_seed`].
    pub fn from_entropy() -> Self {
        Self::new(entropy_seed())
    }

    /// Advances the generator.
    pub fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state = x;
        x
    }

    /// Returns an index in `0..len`; a zero `len` yields `0`.
    pub fn next_index(&mut self, len: usize) -> usize {
        (self.next_u64() % len.max(1) as u64) as usize
    }
}

/// Returns a seed from host randomness: `Math.random` in the browser, the clock natively.
pub fn entropy_seed() -> u64 {
    #[cfg(target_arch = "wasm32")]
    {
        (js_sys::Math::random() * u64::MAX as f64) as u64
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|elapsed| elapsed.as_nanos() as u64)
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn same_seed_replays_same_sequence() {
        let mut first = XorShift64::new(42);
        let mut second = XorShift64::new(42);
        let a: Vec<_> = (0..8).map(|_| first.next_u64()).collect();
        let b: Vec<_> = (0..8).map(|_| second.next_u64()).collect();
        assert_eq!(a, b);
    }

    #[test]
    fn zero_seed_still_advances_and_indices_stay_in_range() {
        let mut rng = XorShift64::new(0);
        assert_ne!(rng.next_u64(), 0);
        for len in [1, 5, 400] {
            assert!(rng.next_index(len) < len);
        }
        assert_eq!(rng.next_index(0), 0);
    }
}
