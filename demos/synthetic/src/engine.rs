//! A stand-in simulation engine backed by a synthetic three-population panel.

use std::collections::BTreeMap;
use std::io::{self, Write};

use ao_core::{PopulationId, SampleId};
use ao_output::{DemographicModel, Tracts, TreeSequence};
use ao_stats::{HaplotypeMatrix, PLOIDY, SyntheticPanel, synthetic_panel};

const LONG_NAMES: [&str; 3] = ["Africa", "Europe", "Asia"];

pub struct ThreePopModel;

impl DemographicModel for ThreePopModel {
    fn write_debug(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "Demographic model: three populations, no migration")?;
        for (i, name) in LONG_NAMES.iter().enumerate() {
            writeln!(out, "  population {i}: {name}")?;
        }
        Ok(())
    }

    fn long_name(&self, pop: PopulationId) -> Option<&str> {
        LONG_NAMES.get(pop.index()).copied()
    }
}

pub struct SyntheticTree {
    pub panel:           SyntheticPanel,
    pub sequence_length: f64,
}

impl SyntheticTree {
    pub fn new(n_variants: usize, individuals_per_pop: usize, seed: u64) -> Self {
        Self {
            panel:           synthetic_panel(n_variants, individuals_per_pop, seed),
            sequence_length: 1.0e6,
        }
    }

    pub fn n_variants(&self) -> usize {
        self.panel.haplotypes.n_variants()
    }

    pub fn n_individuals(&self) -> usize {
        self.panel.pop_index.len() / PLOIDY
    }

    /// Evenly spaced 1-based variant positions.
    pub fn position(&self, variant: usize) -> u64 {
        let step = self.sequence_length / (self.n_variants() + 1) as f64;
        ((variant + 1) as f64 * step) as u64
    }

    /// Contiguous windows of `width` bp labelled round-robin by population.
    pub fn tracts(&self, width: u64) -> BTreeMap<String, Tracts> {
        let mut tracts: BTreeMap<String, Tracts> = BTreeMap::new();
        let end = self.sequence_length as u64;
        let mut start = 0;
        let mut label = 0;
        while start < end {
            let stop = (start + width).min(end);
            tracts.entry(LONG_NAMES[label % 3].to_owned()).or_default().push(start, stop);
            start = stop;
            label += 1;
        }
        tracts
    }

    /// One line per variant, one digit per individual: reference allele count.
    pub fn write_eigenstrat(&self, out: &mut dyn Write) -> io::Result<()> {
        for v in 0..self.n_variants() {
            let row = self.panel.haplotypes.row(v);
            let line: String = row
                .chunks(PLOIDY)
                .map(|gt| {
                    let refs = gt.iter().filter(|&&a| a == 0).count();
                    char::from_digit(refs as u32, 10).unwrap_or('9')
                })
                .collect();
            writeln!(out, "{line}")?;
        }
        Ok(())
    }

    pub fn write_snp(&self, out: &mut dyn Write) -> io::Result<()> {
        for v in 0..self.n_variants() {
            writeln!(out, "rs{v}\t1\t0.0\t{}\tA\tT", self.position(v))?;
        }
        Ok(())
    }

    pub fn write_ind(&self, out: &mut dyn Write) -> io::Result<()> {
        for k in 0..self.n_individuals() {
            let pop = self.panel.pop_index[k * PLOIDY];
            writeln!(out, "msp_{k}\tU\t{}", LONG_NAMES[pop.index()])?;
        }
        Ok(())
    }
}

impl TreeSequence for SyntheticTree {
    fn sample_size(&self) -> usize {
        self.panel.pop_index.len()
    }

    fn population(&self, sample: SampleId) -> PopulationId {
        self.panel.pop_index[sample.index()]
    }

    fn sequence_length(&self) -> f64 {
        self.sequence_length
    }

    fn genotype_matrix(&self) -> HaplotypeMatrix {
        self.panel.haplotypes.clone()
    }

    fn write_vcf(&self, out: &mut dyn Write, ploidy: usize) -> io::Result<()> {
        writeln!(out, "##fileformat=VCFv4.2")?;
        writeln!(out, "##contig=<ID=1,length={}>", self.sequence_length as u64)?;
        write!(out, "#CHROM\tPOS\tID\tREF\tALT\tQUAL\tFILTER\tINFO\tFORMAT")?;
        for k in 0..self.sample_size() / ploidy {
            write!(out, "\tmsp_{k}")?;
        }
        writeln!(out)?;

        for v in 0..self.n_variants() {
            write!(out, "1\t{}\t.\tA\tT\t.\tPASS\t.\tGT", self.position(v))?;
            for gt in self.panel.haplotypes.row(v).chunks(ploidy) {
                let calls: Vec<String> = gt.iter().map(i8::to_string).collect();
                write!(out, "\t{}", calls.join("|"))?;
            }
            writeln!(out)?;
        }
        Ok(())
    }
}
