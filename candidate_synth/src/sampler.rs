use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// The source of randomness for the synthesis.
///
/// The synthesizer only needs two kinds of draws. Implementing this trait
/// directly (instead of going through an `Rng`) makes it possible to script
/// the exact choices in tests.
pub trait Sampler {
    /// Draws an integer uniformly from `[low, high]` (both inclusive).
    fn draw_count(&mut self, low: usize, high: usize) -> usize;

    /// Draws `amount` distinct indices from `0..population`, uniformly over
    /// all the subsets of that size. The order of the returned indices is
    /// the order of the picks.
    fn pick_indices(&mut self, population: usize, amount: usize) -> Vec<usize>;
}

/// A sampler backed by any random number generator.
pub struct RngSampler<R: Rng> {
    rng: R,
}

impl<R: Rng> RngSampler<R> {
    pub fn new(rng: R) -> RngSampler<R> {
        RngSampler { rng }
    }
}

impl RngSampler<StdRng> {
    /// A reproducible sampler: the same seed always yields the same draws.
    pub fn from_seed(seed: u64) -> RngSampler<StdRng> {
        RngSampler::new(StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> RngSampler<StdRng> {
        RngSampler::new(StdRng::from_entropy())
    }
}

impl<R: Rng> Sampler for RngSampler<R> {
    fn draw_count(&mut self, low: usize, high: usize) -> usize {
        self.rng.gen_range(low..=high)
    }

    fn pick_indices(&mut self, population: usize, amount: usize) -> Vec<usize> {
        let amount = amount.min(population);
        rand::seq::index::sample(&mut self.rng, population, amount).into_vec()
    }
}
