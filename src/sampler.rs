//! Cumulative-bucket sampling over integer percentage weights.

use rand::Rng;

use crate::{Sampler, error::WeightError};

/// Total of a valid weight table; rolls are drawn from `1..=ROLL_MAX`.
pub const ROLL_MAX: u32 = 100;

/// Weighted sampler that walks the cumulative distribution in entry order:
/// a roll of `r` lands in the first bucket whose running total reaches `r`.
#[derive(Debug, Clone)]
pub struct CumulativeSampler {
    cumulative: Vec<u32>,
}

impl CumulativeSampler {
    /// Construct from positive integer weights summing to exactly
    /// [`ROLL_MAX`]. O(n).
    ///
    /// # Errors
    /// * [`WeightError::Empty`] if there are no weights.
    /// * [`WeightError::ZeroWeight`] if any weight is zero.
    /// * [`WeightError::BadTotal`] if the weights do not sum to 100.
    pub fn new(weights: &[u32]) -> Result<Self, WeightError> {
        if weights.is_empty() {
            return Err(WeightError::Empty);
        }

        let mut total = 0u64;
        for (i, &w) in weights.iter().enumerate() {
            if w == 0 {
                return Err(WeightError::ZeroWeight { index: i });
            }
            total += u64::from(w);
        }
        if total != u64::from(ROLL_MAX) {
            return Err(WeightError::BadTotal { total });
        }

        let mut cumulative = Vec::with_capacity(weights.len());
        let mut acc = 0u32;
        for &w in weights {
            acc += w;
            cumulative.push(acc);
        }
        Ok(Self { cumulative })
    }

    /// Map a roll in `1..=ROLL_MAX` to its bucket: the first index whose
    /// cumulative weight is >= the roll. Rolls past the last bucket cannot
    /// happen for a valid table; they fall back to index 0, the first
    /// (lowest) bucket.
    pub fn index_for_roll(&self, roll: u32) -> usize {
        self.cumulative
            .iter()
            .position(|&threshold| roll <= threshold)
            .unwrap_or(0)
    }

    /// Draw k rolls, returning counts per bucket (useful for checks).
    #[cfg(test)]
    pub fn sample_counts<R: Rng + ?Sized>(&self, rng: &mut R, draws: usize) -> Vec<usize> {
        let mut counts = vec![0usize; self.cumulative.len()];
        for _ in 0..draws {
            counts[self.pick(rng)] += 1;
        }
        counts
    }

    pub fn len(&self) -> usize {
        self.cumulative.len()
    }
    pub fn is_empty(&self) -> bool {
        self.cumulative.is_empty()
    }
}

impl Sampler for CumulativeSampler {
    #[inline]
    fn len(&self) -> usize {
        // call the inherent method explicitly to avoid trait-recursion
        CumulativeSampler::len(self)
    }
    #[inline]
    fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> usize {
        self.index_for_roll(rng.random_range(1..=ROLL_MAX))
    }
}

/// Uniform index sampler: picks an index in `0..n` with equal probability.
#[derive(Debug, Clone, Copy)]
pub struct UniformSampler {
    n: usize,
}

impl UniformSampler {
    pub fn new(n: usize) -> Result<Self, WeightError> {
        if n == 0 {
            return Err(WeightError::Empty);
        }
        Ok(Self { n })
    }
}

impl Sampler for UniformSampler {
    #[inline]
    fn len(&self) -> usize {
        self.n
    }
    #[inline]
    fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> usize {
        rng.random_range(0..self.n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn rejects_bad_inputs() {
        assert!(matches!(
            CumulativeSampler::new(&[]),
            Err(WeightError::Empty)
        ));
        assert!(matches!(
            CumulativeSampler::new(&[50, 0, 50]),
            Err(WeightError::ZeroWeight { index: 1 })
        ));
        assert!(matches!(
            CumulativeSampler::new(&[50, 30, 15]),
            Err(WeightError::BadTotal { total: 95 })
        ));
        assert!(matches!(
            CumulativeSampler::new(&[60, 30, 15, 5]),
            Err(WeightError::BadTotal { total: 110 })
        ));
        assert!(matches!(UniformSampler::new(0), Err(WeightError::Empty)));
    }

    #[test]
    fn boundary_rolls_hit_expected_buckets() {
        let sampler = CumulativeSampler::new(&[50, 30, 15, 5]).unwrap();

        // Bucket edges: 1..=50 -> 0, 51..=80 -> 1, 81..=95 -> 2, 96..=100 -> 3.
        assert_eq!(sampler.index_for_roll(1), 0);
        assert_eq!(sampler.index_for_roll(50), 0);
        assert_eq!(sampler.index_for_roll(51), 1);
        assert_eq!(sampler.index_for_roll(80), 1);
        assert_eq!(sampler.index_for_roll(81), 2);
        assert_eq!(sampler.index_for_roll(95), 2);
        assert_eq!(sampler.index_for_roll(96), 3);
        assert_eq!(sampler.index_for_roll(100), 3);
    }

    #[test]
    fn out_of_range_roll_falls_back_to_first_bucket() {
        let sampler = CumulativeSampler::new(&[50, 30, 15, 5]).unwrap();
        assert_eq!(sampler.index_for_roll(101), 0);
    }

    #[test]
    fn frequencies_match_weights() {
        let weights = [50u32, 30, 15, 5];
        let sampler = CumulativeSampler::new(&weights).unwrap();

        let mut rng = StdRng::seed_from_u64(42);
        let draws = 100_000usize;
        let counts = sampler.sample_counts(&mut rng, draws);

        for (i, &c) in counts.iter().enumerate() {
            let p = weights[i] as f64 / 100.0;
            let emp = c as f64 / draws as f64;
            assert!((emp - p).abs() < 0.01, "i={i} emp={emp} p={p}");
        }
    }

    #[test]
    fn degenerate_singleton() {
        let sampler = CumulativeSampler::new(&[100]).unwrap();
        let mut rng = rand::rng();
        for _ in 0..1000 {
            assert_eq!(sampler.pick(&mut rng), 0);
        }
    }
}
