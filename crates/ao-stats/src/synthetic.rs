//! Deterministic three-population panels for tests and demos.
//!
//! Individual `k` belongs to population `k % 3`, so the three populations
//! are interleaved column-wise the way a coalescent simulator with
//! round-robin sampling lays them out.  Each population draws its own allele
//! frequency per site from a disjoint band, which keeps every site
//! polymorphic in practice and the populations differentiated.

use ao_core::PopulationId;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::matrix::HaplotypeMatrix;
use crate::pipeline::{PLOIDY, PopulationMap};

/// Alternate-allele frequency band of each population.
const FREQUENCY_BANDS: [(f64, f64); 3] = [(0.15, 0.35), (0.40, 0.60), (0.65, 0.85)];

/// A simulated haplotype matrix with its population labelling.
#[derive(Clone, Debug)]
pub struct SyntheticPanel {
    pub haplotypes:  HaplotypeMatrix,
    /// Population of each haplotype column.
    pub pop_index:   Vec<PopulationId>,
    pub populations: PopulationMap,
}

/// Generate `n_variants` biallelic sites for `individuals_per_pop` diploid
/// individuals in each of three populations.
pub fn synthetic_panel(n_variants: usize, individuals_per_pop: usize, seed: u64) -> SyntheticPanel {
    let mut rng = SmallRng::seed_from_u64(seed);
    let n_individuals = individuals_per_pop * 3;
    let n_haplotypes = n_individuals * PLOIDY;

    let pop_index: Vec<PopulationId> = (0..n_haplotypes)
        .map(|h| PopulationId(((h / PLOIDY) % 3) as u32))
        .collect();

    let mut calls = Vec::with_capacity(n_variants * n_haplotypes);
    for _ in 0..n_variants {
        let freqs: Vec<f64> = FREQUENCY_BANDS
            .iter()
            .map(|&(lo, hi)| rng.gen_range(lo..hi))
            .collect();
        for pop in &pop_index {
            calls.push(rng.gen_bool(freqs[pop.index()]) as i8);
        }
    }

    SyntheticPanel {
        haplotypes: HaplotypeMatrix::from_calls(n_variants, n_haplotypes, calls),
        pop_index,
        populations: PopulationMap::new(PopulationId(0), PopulationId(1), PopulationId(2)),
    }
}
