//! Dense allele-call matrices.
//!
//! Calls are `i8` allele indices (`0` = reference, `1` = first alternate, …);
//! any negative value is a missing call and is ignored by every count.

use crate::counts::AlleleCounts;
use crate::{StatsError, StatsResult};

// ── HaplotypeMatrix ───────────────────────────────────────────────────────────

/// Variants × haploid samples, row-major.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HaplotypeMatrix {
    n_variants:   usize,
    n_haplotypes: usize,
    calls:        Vec<i8>,
}

impl HaplotypeMatrix {
    /// Wrap `calls`, laid out as `calls[variant * n_haplotypes + haplotype]`.
    pub fn new(n_variants: usize, n_haplotypes: usize, calls: Vec<i8>) -> StatsResult<Self> {
        let expected = n_variants * n_haplotypes;
        if calls.len() != expected {
            return Err(StatsError::ShapeMismatch {
                what: "haplotype matrix",
                expected,
                got: calls.len(),
            });
        }
        Ok(Self { n_variants, n_haplotypes, calls })
    }

    pub(crate) fn from_calls(n_variants: usize, n_haplotypes: usize, calls: Vec<i8>) -> Self {
        debug_assert_eq!(calls.len(), n_variants * n_haplotypes);
        Self { n_variants, n_haplotypes, calls }
    }

    /// Build from one row per variant.  All rows must have equal length.
    pub fn from_rows(rows: &[Vec<i8>]) -> StatsResult<Self> {
        let n_haplotypes = rows.first().map_or(0, Vec::len);
        let mut calls = Vec::with_capacity(rows.len() * n_haplotypes);
        for row in rows {
            if row.len() != n_haplotypes {
                return Err(StatsError::ShapeMismatch {
                    what:     "haplotype row",
                    expected: n_haplotypes,
                    got:      row.len(),
                });
            }
            calls.extend_from_slice(row);
        }
        Self::new(rows.len(), n_haplotypes, calls)
    }

    pub fn n_variants(&self) -> usize {
        self.n_variants
    }

    pub fn n_haplotypes(&self) -> usize {
        self.n_haplotypes
    }

    /// The calls of one variant across all haplotypes.
    pub fn row(&self, variant: usize) -> &[i8] {
        let start = variant * self.n_haplotypes;
        &self.calls[start..start + self.n_haplotypes]
    }

    /// Keep only the haplotype columns in `columns`, in that order.
    pub fn select_columns(&self, columns: &[usize]) -> HaplotypeMatrix {
        let mut calls = Vec::with_capacity(self.n_variants * columns.len());
        for v in 0..self.n_variants {
            let row = self.row(v);
            calls.extend(columns.iter().map(|&c| row[c]));
        }
        HaplotypeMatrix {
            n_variants:   self.n_variants,
            n_haplotypes: columns.len(),
            calls,
        }
    }

    /// Group consecutive haplotypes into samples of `ploidy` copies.
    pub fn to_genotypes(self, ploidy: usize) -> StatsResult<GenotypeMatrix> {
        if ploidy == 0 || self.n_haplotypes % ploidy != 0 {
            return Err(StatsError::Ploidy { haplotypes: self.n_haplotypes, ploidy });
        }
        Ok(GenotypeMatrix {
            n_variants: self.n_variants,
            n_samples:  self.n_haplotypes / ploidy,
            ploidy,
            calls:      self.calls,
        })
    }
}

// ── GenotypeMatrix ────────────────────────────────────────────────────────────

/// Variants × samples × ploidy, row-major.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GenotypeMatrix {
    n_variants: usize,
    n_samples:  usize,
    ploidy:     usize,
    calls:      Vec<i8>,
}

impl GenotypeMatrix {
    pub fn n_variants(&self) -> usize {
        self.n_variants
    }

    pub fn n_samples(&self) -> usize {
        self.n_samples
    }

    pub fn ploidy(&self) -> usize {
        self.ploidy
    }

    /// Calls of one sample at one variant (`ploidy` entries).
    #[inline]
    pub fn genotype(&self, variant: usize, sample: usize) -> &[i8] {
        let start = (variant * self.n_samples + sample) * self.ploidy;
        &self.calls[start..start + self.ploidy]
    }

    /// Largest allele index called anywhere, or `None` if nothing is called.
    pub fn max_allele(&self) -> Option<i8> {
        self.calls.iter().copied().filter(|&a| a >= 0).max()
    }

    /// Append the samples of `others` after those of `self`.
    pub fn concatenate(&self, others: &[&GenotypeMatrix]) -> StatsResult<GenotypeMatrix> {
        for other in others {
            if other.n_variants != self.n_variants {
                return Err(StatsError::Concatenate(format!(
                    "variant counts differ ({} vs {})",
                    self.n_variants, other.n_variants
                )));
            }
            if other.ploidy != self.ploidy {
                return Err(StatsError::Concatenate(format!(
                    "ploidies differ ({} vs {})",
                    self.ploidy, other.ploidy
                )));
            }
        }

        let parts: Vec<&GenotypeMatrix> = std::iter::once(self).chain(others.iter().copied()).collect();
        let n_samples: usize = parts.iter().map(|g| g.n_samples).sum();
        let mut calls = Vec::with_capacity(self.n_variants * n_samples * self.ploidy);
        for v in 0..self.n_variants {
            for part in &parts {
                let width = part.n_samples * part.ploidy;
                calls.extend_from_slice(&part.calls[v * width..(v + 1) * width]);
            }
        }

        Ok(GenotypeMatrix {
            n_variants: self.n_variants,
            n_samples,
            ploidy: self.ploidy,
            calls,
        })
    }

    /// Keep the variants whose `keep` flag is set.
    pub fn filter_variants(&self, keep: &[bool]) -> StatsResult<GenotypeMatrix> {
        if keep.len() != self.n_variants {
            return Err(StatsError::ShapeMismatch {
                what:     "variant mask",
                expected: self.n_variants,
                got:      keep.len(),
            });
        }
        let width = self.n_samples * self.ploidy;
        let mut calls = Vec::new();
        let mut n_variants = 0;
        for (v, _) in keep.iter().enumerate().filter(|(_, k)| **k) {
            calls.extend_from_slice(&self.calls[v * width..(v + 1) * width]);
            n_variants += 1;
        }
        Ok(GenotypeMatrix {
            n_variants,
            n_samples: self.n_samples,
            ploidy: self.ploidy,
            calls,
        })
    }

    /// Allele counts over all samples, sized by [`max_allele`](Self::max_allele).
    pub fn count_alleles(&self) -> AlleleCounts {
        let samples: Vec<usize> = (0..self.n_samples).collect();
        self.count_alleles_subset(&samples, self.max_allele())
    }

    /// Allele counts over `samples` only, for alleles `0..=max_allele`.
    pub fn count_alleles_subset(&self, samples: &[usize], max_allele: Option<i8>) -> AlleleCounts {
        let n_alleles = max_allele.map_or(0, |m| m as usize + 1);
        let mut counts = AlleleCounts::zeros(self.n_variants, n_alleles);
        for v in 0..self.n_variants {
            for &s in samples {
                for &allele in self.genotype(v, s) {
                    if allele >= 0 && (allele as usize) < n_alleles {
                        counts.increment(v, allele as usize);
                    }
                }
            }
        }
        counts
    }

    /// `true` if the genotype is fully called and not homozygous.
    #[inline]
    pub fn is_het(&self, variant: usize, sample: usize) -> bool {
        let gt = self.genotype(variant, sample);
        gt.iter().all(|&a| a >= 0) && gt.iter().any(|&a| a != gt[0])
    }

    /// Number of `samples` heterozygous at `variant` and carrying `allele`.
    pub fn count_het_allele(&self, variant: usize, allele: i8, samples: &[usize]) -> usize {
        samples
            .iter()
            .filter(|&&s| self.is_het(variant, s) && self.genotype(variant, s).contains(&allele))
            .count()
    }
}
