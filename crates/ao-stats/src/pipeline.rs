//! Per-population diversity and pairwise Fst for the three super-populations.

use std::fmt;
use std::str::FromStr;

use ao_core::PopulationId;
use tracing::debug;

use crate::format::format_significant;
use crate::fst::weir_cockerham_fst;
use crate::matrix::{GenotypeMatrix, HaplotypeMatrix};
use crate::{StatsError, StatsResult};

/// Copies per individual.
pub const PLOIDY: usize = 2;

/// Minor-allele fraction of the sample count a site must reach.
const MIN_MAF: f64 = 0.05;

/// Significant digits of every printed statistic.
const DIGITS: usize = 5;

/// The three fixed super-populations, in output order.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum SuperPopulation {
    Af,
    Eu,
    As,
}

impl SuperPopulation {
    pub const ALL: [SuperPopulation; 3] = [SuperPopulation::Af, SuperPopulation::Eu, SuperPopulation::As];

    /// Population pairs for Fst, in output order.
    pub const PAIRS: [(SuperPopulation, SuperPopulation); 3] = [
        (SuperPopulation::Af, SuperPopulation::Eu),
        (SuperPopulation::Af, SuperPopulation::As),
        (SuperPopulation::Eu, SuperPopulation::As),
    ];

    pub fn label(self) -> &'static str {
        match self {
            SuperPopulation::Af => "AF",
            SuperPopulation::Eu => "EU",
            SuperPopulation::As => "AS",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for SuperPopulation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for SuperPopulation {
    type Err = StatsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SuperPopulation::ALL
            .into_iter()
            .find(|p| p.label() == s)
            .ok_or_else(|| StatsError::UnknownLabel(s.to_owned()))
    }
}

/// Which simulation population id carries each super-population label.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct PopulationMap {
    ids: [PopulationId; 3],
}

impl PopulationMap {
    pub fn new(af: PopulationId, eu: PopulationId, as_: PopulationId) -> Self {
        Self { ids: [af, eu, as_] }
    }

    /// Build from `(label, id)` pairs; labels other than AF, EU, AS fail.
    ///
    /// Every one of AF, EU, AS must appear; a later pair for the same label
    /// replaces an earlier one.
    pub fn from_labels<'a, I>(pairs: I) -> StatsResult<Self>
    where
        I: IntoIterator<Item = (&'a str, PopulationId)>,
    {
        let mut ids: [Option<PopulationId>; 3] = [None; 3];
        for (label, id) in pairs {
            ids[label.parse::<SuperPopulation>()?.index()] = Some(id);
        }
        let [Some(af), Some(eu), Some(as_)] = ids else {
            let missing = SuperPopulation::ALL
                .into_iter()
                .find(|p| ids[p.index()].is_none())
                .unwrap_or(SuperPopulation::Af);
            return Err(StatsError::MissingLabel(missing.label()));
        };
        Ok(Self::new(af, eu, as_))
    }

    pub fn id(&self, pop: SuperPopulation) -> PopulationId {
        self.ids[pop.index()]
    }
}

/// One row of the statistics table.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PiFstRow {
    /// Diversity of AF, EU, AS.
    pub pi:  [f64; 3],
    /// Fst of AF-EU, AF-AS, EU-AS.
    pub fst: [f64; 3],
}

impl PiFstRow {
    /// Column labels, matching [`fields`](Self::fields).
    pub const HEADER: [&'static str; 6] = ["AF", "EU", "AS", "AF-EU", "AF-AS", "EU-AS"];

    /// The six values, each with five significant digits.
    pub fn fields(&self) -> [String; 6] {
        let [p0, p1, p2] = self.pi;
        let [f0, f1, f2] = self.fst;
        [p0, p1, p2, f0, f1, f2].map(|x| format_significant(x, DIGITS))
    }
}

impl fmt::Display for PiFstRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.fields().join("\t"))
    }
}

/// Minimum minor-allele count for `n_samples` diploid samples (truncated).
fn min_mac(n_samples: usize) -> u32 {
    (MIN_MAF * n_samples as f64) as u32
}

/// Diploid genotypes of every haplotype assigned to `id`.
fn population_genotypes(
    haplotypes: &HaplotypeMatrix,
    pop_index:  &[PopulationId],
    id:         PopulationId,
) -> StatsResult<GenotypeMatrix> {
    let columns: Vec<usize> = pop_index
        .iter()
        .enumerate()
        .filter(|(_, p)| **p == id)
        .map(|(i, _)| i)
        .collect();
    haplotypes.select_columns(&columns).to_genotypes(PLOIDY)
}

/// Mean pairwise difference per kept site.
fn diversity(g: &GenotypeMatrix) -> StatsResult<(f64, usize)> {
    let keep = g.count_alleles().is_biallelic_01(min_mac(g.n_samples()));
    let kept = g.filter_variants(&keep)?;
    let mpd: f64 = kept.count_alleles().mean_pairwise_difference().iter().sum();
    Ok((mpd / kept.n_variants() as f64, kept.n_variants()))
}

/// Compute the statistics row for one simulated panel.
///
/// `pop_index[h]` is the population of haplotype column `h`.  The Fst site
/// filter is derived once from the pooled three-population genotypes and
/// shared by all three pairs.
pub fn compute_pi_and_fst(
    haplotypes:  &HaplotypeMatrix,
    pop_index:   &[PopulationId],
    populations: &PopulationMap,
) -> StatsResult<PiFstRow> {
    if pop_index.len() != haplotypes.n_haplotypes() {
        return Err(StatsError::ShapeMismatch {
            what:     "population index",
            expected: haplotypes.n_haplotypes(),
            got:      pop_index.len(),
        });
    }

    let genotypes = SuperPopulation::ALL
        .iter()
        .map(|&pop| population_genotypes(haplotypes, pop_index, populations.id(pop)))
        .collect::<StatsResult<Vec<_>>>()?;

    let mut row = PiFstRow { pi: [0.0; 3], fst: [0.0; 3] };

    for pop in SuperPopulation::ALL {
        let g = &genotypes[pop.index()];
        let (pi, kept) = diversity(g)?;
        debug!(population = %pop, samples = g.n_samples(), kept, pi, "diversity");
        row.pi[pop.index()] = pi;
    }

    let pooled = genotypes[0].concatenate(&[&genotypes[1], &genotypes[2]])?;
    let keep = pooled.count_alleles().is_biallelic_01(min_mac(pooled.n_samples()));
    debug!(
        samples = pooled.n_samples(),
        kept = keep.iter().filter(|k| **k).count(),
        "pooled Fst site filter"
    );

    for (i, (p, q)) in SuperPopulation::PAIRS.into_iter().enumerate() {
        let first = &genotypes[p.index()];
        let second = &genotypes[q.index()];
        let n_first = first.n_samples();
        let subpops = vec![
            (0..n_first).collect::<Vec<_>>(),
            (n_first..n_first + second.n_samples()).collect(),
        ];

        let combined = first.concatenate(&[second])?.filter_variants(&keep)?;
        let components = weir_cockerham_fst(&combined, &subpops);
        row.fst[i] = components.fst();
        let pair = format!("{p}-{q}");
        debug!(%pair, sites = combined.n_variants(), fst = row.fst[i], "fst");
    }

    Ok(row)
}
