//! Per-variant allele counts and the statistics derived from them.

/// Variants × alleles count table, row-major.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AlleleCounts {
    n_variants: usize,
    n_alleles:  usize,
    counts:     Vec<u32>,
}

impl AlleleCounts {
    pub fn zeros(n_variants: usize, n_alleles: usize) -> Self {
        Self {
            n_variants,
            n_alleles,
            counts: vec![0; n_variants * n_alleles],
        }
    }

    #[inline]
    pub(crate) fn increment(&mut self, variant: usize, allele: usize) {
        self.counts[variant * self.n_alleles + allele] += 1;
    }

    pub fn n_variants(&self) -> usize {
        self.n_variants
    }

    pub fn n_alleles(&self) -> usize {
        self.n_alleles
    }

    /// Counts of every allele at one variant.
    pub fn row(&self, variant: usize) -> &[u32] {
        let start = variant * self.n_alleles;
        &self.counts[start..start + self.n_alleles]
    }

    /// Number of called alleles at one variant.
    pub fn allele_number(&self, variant: usize) -> u32 {
        self.row(variant).iter().sum()
    }

    /// Number of distinct alleles observed at one variant.
    pub fn allelism(&self, variant: usize) -> usize {
        self.row(variant).iter().filter(|&&c| c > 0).count()
    }

    /// Highest allele index observed at one variant.
    pub fn max_allele(&self, variant: usize) -> Option<usize> {
        self.row(variant).iter().rposition(|&c| c > 0)
    }

    /// Sites with exactly alleles 0 and 1 observed, each at least `min_mac`
    /// times.
    pub fn is_biallelic_01(&self, min_mac: u32) -> Vec<bool> {
        (0..self.n_variants)
            .map(|v| {
                self.allelism(v) == 2
                    && self.max_allele(v) == Some(1)
                    && {
                        let row = self.row(v);
                        row[0].min(row[1]) >= min_mac
                    }
            })
            .collect()
    }

    /// Probability that two distinct haplotypes drawn at a site differ.
    ///
    /// `NaN` where fewer than two alleles are called.
    pub fn mean_pairwise_difference(&self) -> Vec<f64> {
        (0..self.n_variants)
            .map(|v| {
                let an = self.allele_number(v) as f64;
                let n_pairs = an * (an - 1.0) / 2.0;
                let n_same: f64 = self
                    .row(v)
                    .iter()
                    .map(|&c| {
                        let c = c as f64;
                        c * (c - 1.0) / 2.0
                    })
                    .sum();
                if n_pairs > 0.0 {
                    (n_pairs - n_same) / n_pairs
                } else {
                    f64::NAN
                }
            })
            .collect()
    }
}
