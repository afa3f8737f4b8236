//! Analysis configuration.

use crate::error::AnalysisError;
use crate::graph::SimpleGraph;
use crate::packing::TrianglePacking;
use rand::rngs::SmallRng;
use rand::SeedableRng;

/// How the certifier builds the packing it offers as a certificate.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PackingStrategy {
    /// First-fit over triangles in canonical order. Deterministic.
    #[default]
    Greedy,
    /// Best of `rounds` first-fit passes over seeded random triangle orders.
    Randomized {
        /// Seed for the shuffle; equal seeds give equal packings.
        seed: u64,
        /// Number of shuffled passes on top of the canonical one.
        rounds: usize,
    },
}

impl PackingStrategy {
    /// Builds a packing of `g` with this strategy.
    pub fn build(&self, g: &SimpleGraph) -> TrianglePacking {
        match *self {
            PackingStrategy::Greedy => TrianglePacking::greedy(g),
            PackingStrategy::Randomized { seed, rounds } => {
                let mut rng = SmallRng::seed_from_u64(seed);
                TrianglePacking::randomized(g, &mut rng, rounds)
            }
        }
    }
}

/// Parameters for [`crate::report::AnalysisReport::analyze`].
#[derive(Clone, Debug)]
pub struct AnalysisConfig {
    /// Fraction `epsilon` for the far-from-triangle-free question.
    pub epsilon: f64,
    /// Packing construction used as the certificate.
    pub packing: PackingStrategy,
    /// Keep witness triangles/edges in the report.
    pub collect_witnesses: bool,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            epsilon: 0.0,
            packing: PackingStrategy::Greedy,
            collect_witnesses: true,
        }
    }
}

impl AnalysisConfig {
    /// Checks that the configuration is usable.
    ///
    /// # Errors
    /// Returns [`AnalysisError::InvalidEpsilon`] if `epsilon` is NaN or infinite.
    pub fn validate(&self) -> Result<(), AnalysisError> {
        if !self.epsilon.is_finite() {
            return Err(AnalysisError::InvalidEpsilon(self.epsilon));
        }
        Ok(())
    }
}
