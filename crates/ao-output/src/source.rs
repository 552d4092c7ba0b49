//! Interfaces of the upstream simulation engine.
//!
//! The output layer never runs a simulation itself; it reads results through
//! these two traits.

use std::io::{self, Write};

use ao_core::{PopulationId, SampleId};
use ao_stats::HaplotypeMatrix;

/// The demographic model a run was simulated under.
pub trait DemographicModel {
    /// Write the model's own debug description to `out`.
    fn write_debug(&self, out: &mut dyn Write) -> io::Result<()>;

    /// Long-form label of an internal population id, e.g. `"Europe"`.
    fn long_name(&self, pop: PopulationId) -> Option<&str>;
}

/// One simulated genealogy with its mutations.
pub trait TreeSequence {
    /// Number of haploid samples.
    fn sample_size(&self) -> usize;

    /// Population a haploid sample was drawn from.
    fn population(&self, sample: SampleId) -> PopulationId;

    fn sequence_length(&self) -> f64;

    /// Variants × haploid samples allele calls.
    fn genotype_matrix(&self) -> HaplotypeMatrix;

    /// Write the variants as VCF, grouping `ploidy` haplotypes per individual.
    fn write_vcf(&self, out: &mut dyn Write, ploidy: usize) -> io::Result<()>;
}
