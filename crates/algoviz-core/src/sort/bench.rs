//! The array under study and its original snapshot

use std::time::Duration;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::ensure_range;
use crate::error::Result;
use crate::observe::Observer;
use crate::sort::run::sort_with;
use crate::sort::types::{ArrayFrame, SortAlgorithm, SortStats};
use crate::step::Pacer;

/// Smallest generated value (bar height)
pub const MIN_VALUE: i64 = 10;
/// Largest generated value
pub const MAX_VALUE: i64 = 209;
pub const DEFAULT_ARRAY_SIZE: usize = 30;
pub const MIN_ARRAY_SIZE: usize = 10;
pub const MAX_ARRAY_SIZE: usize = 100;

/// Holds the original snapshot every run starts from, plus the current
/// (last displayed) state of the array.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArrayBench {
    original: Vec<i64>,
    current: Vec<i64>,
}

impl ArrayBench {
    /// Use `values` as the original snapshot. Any length is accepted.
    pub fn from_values(values: Vec<i64>) -> Self {
        Self {
            current: values.clone(),
            original: values,
        }
    }

    /// Random array of `size` values in `MIN_VALUE..=MAX_VALUE`.
    pub fn random<R: Rng + ?Sized>(size: usize, rng: &mut R) -> Result<Self> {
        Ok(Self::from_values(random_values(size, rng)?))
    }

    /// Random array from a fixed `seed`, or from the thread RNG when unset.
    pub fn seeded(size: usize, seed: Option<u64>) -> Result<Self> {
        match seed {
            Some(seed) => Self::random(size, &mut StdRng::seed_from_u64(seed)),
            None => Self::random(size, &mut rand::rng()),
        }
    }

    pub fn original(&self) -> &[i64] {
        &self.original
    }

    pub fn current(&self) -> &[i64] {
        &self.current
    }

    pub fn len(&self) -> usize {
        self.original.len()
    }

    pub fn is_empty(&self) -> bool {
        self.original.is_empty()
    }

    /// Run `algorithm` from the original snapshot; the result becomes current.
    pub fn run(
        &mut self,
        algorithm: SortAlgorithm,
        observer: &mut dyn Observer<ArrayFrame>,
        pacer: &dyn Pacer,
        delay: Duration,
    ) -> Result<SortStats> {
        self.current = self.original.clone();
        let run = sort_with(algorithm, &self.original, observer, pacer, delay)?;
        self.current = run.values;
        Ok(run.stats)
    }
}

fn random_values<R: Rng + ?Sized>(size: usize, rng: &mut R) -> Result<Vec<i64>> {
    ensure_range!(
        "array size",
        size,
        MIN_ARRAY_SIZE as u64..=MAX_ARRAY_SIZE as u64
    );
    Ok((0..size)
        .map(|_| rng.random_range(MIN_VALUE..=MAX_VALUE))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::observe::Discard;
    use crate::step::Instant;
    use crate::VizError;

    #[test]
    fn test_random_respects_bounds() {
        let mut rng = StdRng::seed_from_u64(1);
        let bench = ArrayBench::random(DEFAULT_ARRAY_SIZE, &mut rng).unwrap();
        assert_eq!(bench.len(), 30);
        assert!(bench
            .original()
            .iter()
            .all(|v| (MIN_VALUE..=MAX_VALUE).contains(v)));
        assert_eq!(bench.original(), bench.current());
    }

    #[test]
    fn test_size_limits() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(ArrayBench::random(10, &mut rng).is_ok());
        assert!(ArrayBench::random(100, &mut rng).is_ok());
        assert!(matches!(
            ArrayBench::random(9, &mut rng),
            Err(VizError::OutOfRange { .. })
        ));
        assert!(ArrayBench::random(101, &mut rng).is_err());
    }

    #[test]
    fn test_seeded_generation_is_reproducible() {
        let a = ArrayBench::random(50, &mut StdRng::seed_from_u64(99)).unwrap();
        let b = ArrayBench::random(50, &mut StdRng::seed_from_u64(99)).unwrap();
        assert_eq!(a, b);

        let c = ArrayBench::seeded(50, Some(99)).unwrap();
        assert_eq!(a, c);
        assert_eq!(ArrayBench::seeded(20, None).unwrap().len(), 20);
    }

    #[test]
    fn test_runs_start_from_original() {
        let mut bench = ArrayBench::from_values(vec![5, 3, 8, 1, 2]);
        let first = bench
            .run(SortAlgorithm::Bubble, &mut Discard, &Instant, Duration::ZERO)
            .unwrap();
        assert_eq!(bench.current(), &[1, 2, 3, 5, 8]);
        assert_eq!(bench.original(), &[5, 3, 8, 1, 2]);

        let second = bench
            .run(SortAlgorithm::Bubble, &mut Discard, &Instant, Duration::ZERO)
            .unwrap();
        assert_eq!(first.swaps, second.swaps);
        assert_eq!(first.swaps, 7);
    }
}
