const M: u32 = 0x7fffffff;
const A: u64 = 16807;

/// Park-Miller "minimal standard" generator. Deterministic for a given seed.
pub struct Random {
    seed: u32,
}

impl Random {
    pub fn new(seed: u32) -> Self {
        let mut seed = seed & M;
        if seed == 0 || seed == M {
            seed = 1;
        }
        Self { seed }
    }

    /// Returns a value in [1, M - 1]
    pub fn next(&mut self) -> u32 {
        let product = self.seed as u64 * A;
        // product % M
        self.seed = ((product >> 31) + (product & M as u64)) as u32;
        if self.seed > M {
            self.seed -= M;
        }
        self.seed
    }

    pub fn uniform(&mut self, n: u32) -> u32 {
        self.next() % n
    }

    /// Uniform in [0.0, 1.0). Uses the top 24 bits so the result is exact in f32
    /// and can never round up to 1.0.
    pub fn next_f32(&mut self) -> f32 {
        (self.next() >> 7) as f32 / (1u32 << 24) as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_deterministic() {
        let mut a = Random::new(301);
        let mut b = Random::new(301);
        for _ in 0..1000 {
            assert_eq!(a.next(), b.next());
        }
    }

    #[test]
    fn test_random_minimal_standard() {
        // Known value of the minimal standard generator: seed 1 reaches
        // 1043618065 after 10000 steps.
        let mut rnd = Random::new(1);
        let mut last = 0;
        for _ in 0..10000 {
            last = rnd.next();
        }
        assert_eq!(1043618065, last);
    }

    #[test]
    fn test_random_degenerate_seeds() {
        assert_eq!(Random::new(0).next(), Random::new(1).next());
        assert_eq!(Random::new(M).next(), Random::new(1).next());
    }

    #[test]
    fn test_random_ranges() {
        let mut rnd = Random::new(42);
        for _ in 0..100000 {
            let f = rnd.next_f32();
            assert!((0.0..1.0).contains(&f));
            assert!(rnd.uniform(3) < 3);
            let n = rnd.next();
            assert!(n > 0 && n < M);
        }
    }
}
