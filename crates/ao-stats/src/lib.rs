//! `ao-stats` — summary statistics over a simulated genotype matrix.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                  |
//! |---------------|-----------------------------------------------------------|
//! | [`matrix`]    | `HaplotypeMatrix`, `GenotypeMatrix`                       |
//! | [`counts`]    | `AlleleCounts`, biallelic/MAF filter, mean pairwise difference |
//! | [`fst`]       | `weir_cockerham_fst`, `FstComponents`                     |
//! | [`pipeline`]  | `SuperPopulation`, `PopulationMap`, `PiFstRow`, `compute_pi_and_fst` |
//! | [`format`]    | `format_significant`                                      |
//! | [`synthetic`] | `synthetic_panel` for tests and demos                     |
//! | [`error`]     | `StatsError`, `StatsResult<T>`                            |
//!
//! # Pipeline (summary)
//!
//! ```text
//! per population P in AF, EU, AS:
//!   g_P      = haplotypes of P paired into diploid genotypes
//!   keep     = biallelic 0/1 sites with minor count ≥ ⌊0.05 · samples(P)⌋
//!   pi(P)    = Σ mean_pairwise_difference(g_P[keep]) / |keep|
//! pooled     = biallelic 0/1 filter over g_AF ++ g_EU ++ g_AS
//! per pair (P, Q):
//!   a, b, c  = weir_cockerham(g_P ++ g_Q [pooled], blocks P | Q)
//!   Fst      = Σa / (Σa + Σb + Σc)
//! ```
//!
//! Ploidy is 2 throughout.  When no site passes a filter the ratio is `NaN`.

pub mod counts;
pub mod error;
pub mod format;
pub mod fst;
pub mod matrix;
pub mod pipeline;
pub mod synthetic;

#[cfg(test)]
mod tests;

pub use counts::AlleleCounts;
pub use error::{StatsError, StatsResult};
pub use format::format_significant;
pub use fst::{FstComponents, weir_cockerham_fst};
pub use matrix::{GenotypeMatrix, HaplotypeMatrix};
pub use pipeline::{PLOIDY, PiFstRow, PopulationMap, SuperPopulation, compute_pi_and_fst};
pub use synthetic::{SyntheticPanel, synthetic_panel};
