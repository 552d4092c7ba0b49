//! Weir & Cockerham (1984) variance components.

use crate::matrix::GenotypeMatrix;

/// Variance components summed over every site and allele.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct FstComponents {
    /// Between populations.
    pub a: f64,
    /// Between individuals within populations.
    pub b: f64,
    /// Between gametes within individuals.
    pub c: f64,
}

impl FstComponents {
    /// `Σa / (Σa + Σb + Σc)`; `NaN` when the denominator is zero.
    pub fn fst(&self) -> f64 {
        self.a / (self.a + self.b + self.c)
    }
}

/// Estimate the variance components for the sample blocks in `subpops`.
///
/// Every sample index in `subpops` must be below `g.n_samples()`.  The
/// number of individuals per population is the called allele number divided
/// by two, so `g` is expected to be diploid.
pub fn weir_cockerham_fst(g: &GenotypeMatrix, subpops: &[Vec<usize>]) -> FstComponents {
    let max_allele = g.max_allele();
    let n_alleles = max_allele.map_or(0, |m| m as usize + 1);
    let r = subpops.len() as f64;

    let counts: Vec<_> = subpops
        .iter()
        .map(|samples| g.count_alleles_subset(samples, max_allele))
        .collect();
    let pooled: Vec<usize> = subpops.iter().flatten().copied().collect();

    let mut total = FstComponents::default();

    for v in 0..g.n_variants() {
        let an: Vec<f64> = counts.iter().map(|ac| ac.allele_number(v) as f64).collect();
        let n: Vec<f64> = counts.iter().map(|ac| (ac.allele_number(v) / 2) as f64).collect();

        let n_total: f64 = n.iter().sum();
        let n_bar = n_total / r;
        let n_c = (n_total - n.iter().map(|x| x * x).sum::<f64>() / n_total) / (r - 1.0);
        let an_total: f64 = an.iter().sum();

        for allele in 0..n_alleles {
            let ac: Vec<f64> = counts.iter().map(|c| c.row(v)[allele] as f64).collect();
            let p_bar = ac.iter().sum::<f64>() / an_total;

            let s_squared = (0..counts.len())
                .map(|i| {
                    let p = ac[i] / an[i];
                    n[i] * (p - p_bar).powi(2)
                })
                .sum::<f64>()
                / (n_bar * (r - 1.0));

            let h_bar = g.count_het_allele(v, allele as i8, &pooled) as f64 / n_total;
            let p_q = p_bar * (1.0 - p_bar);

            let a = (n_bar / n_c)
                * (s_squared
                    - (1.0 / (n_bar - 1.0)) * (p_q - (r - 1.0) * s_squared / r - h_bar / 4.0));
            let b = (n_bar / (n_bar - 1.0))
                * (p_q - (r - 1.0) * s_squared / r - (2.0 * n_bar - 1.0) * h_bar / (4.0 * n_bar));
            let c = h_bar / 2.0;

            total.a += a;
            total.b += b;
            total.c += c;
        }
    }

    total
}
