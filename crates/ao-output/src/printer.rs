//! `FilePrinter` — the per-run output context.

use std::collections::BTreeMap;
use std::fmt::Display;
use std::path::{Path, PathBuf};

use ao_core::{OutputConfig, OutputKey, PopulationId, SampleId, SimParams};
use ao_stats::{PLOIDY, PopulationMap, compute_pi_and_fst};
use serde::Serialize;
use tracing::{debug, info};

use crate::manager::WriterManager;
use crate::records::{self, Tracts};
use crate::sink::WriterHandle;
use crate::source::{DemographicModel, TreeSequence};
use crate::{OutputError, OutputResult};

/// Every writer of one simulation run plus the parameters that show up in
/// record bodies.
///
/// Each `print_*` method is a no-op when its output is not open.  Prefer
/// [`run`] over constructing this directly: it guarantees the writers are
/// closed on every exit path and reports close errors.
pub struct FilePrinter {
    writers: WriterManager,
    params:  SimParams,
}

impl FilePrinter {
    /// Resolve `config` into a plan and open every planned writer.
    pub fn open(config: &OutputConfig) -> OutputResult<Self> {
        let plan = ao_plan::resolve(config)?;
        let writers = WriterManager::open(plan)?;
        info!(
            open = OutputKey::ALL.iter().filter(|k| writers.is_open(**k)).count(),
            "output writers ready"
        );
        Ok(Self { writers, params: config.params.clone() })
    }

    pub fn params(&self) -> &SimParams {
        &self.params
    }

    pub fn writers(&self) -> &WriterManager {
        &self.writers
    }

    /// The open writer for `key`, if any.  Used for bodies this crate does
    /// not format itself (eigenstrat genotypes, SNP and individual lists).
    pub fn writer(&mut self, key: OutputKey) -> Option<&mut WriterHandle> {
        self.writers.writer(key)
    }

    // ── Need queries ─────────────────────────────────────────────────────

    pub fn debug_needed(&self) -> bool {
        self.writers.is_open(OutputKey::Debug)
    }

    pub fn haplo_needed(&self) -> bool {
        self.writers.is_open(OutputKey::Haplo)
    }

    pub fn ils_needed(&self) -> bool {
        self.writers.is_open(OutputKey::Ils)
    }

    pub fn options_needed(&self) -> bool {
        self.writers.is_open(OutputKey::Options)
    }

    pub fn vcf_needed(&self) -> bool {
        self.writers.is_open(OutputKey::Vcf)
    }

    pub fn popfile_needed(&self) -> bool {
        self.writers.is_open(OutputKey::Popfile)
    }

    pub fn f4dstat_needed(&self) -> bool {
        self.writers.is_open(OutputKey::F4dstat)
    }

    pub fn pi_needed(&self) -> bool {
        self.writers.is_open(OutputKey::Pi)
    }

    /// `true` if any output derived from a single simulated tree is open.
    pub fn single_simulation_needed(&self) -> bool {
        self.vcf_needed()
            || self.popfile_needed()
            || self.pi_needed()
            || self.haplo_needed()
            || self.ils_needed()
    }

    // ── Printers ─────────────────────────────────────────────────────────

    pub fn print_options<T: Serialize>(&mut self, options: &T) -> OutputResult<()> {
        match self.writers.writer(OutputKey::Options) {
            Some(out) => records::write_options(out, options),
            None => Ok(()),
        }
    }

    pub fn print_debug<M: DemographicModel + ?Sized>(&mut self, model: &M) -> OutputResult<()> {
        match self.writers.writer(OutputKey::Debug) {
            Some(out) => Ok(model.write_debug(out)?),
            None => Ok(()),
        }
    }

    pub fn print_popfile<M, T>(&mut self, model: &M, tree: &T) -> OutputResult<()>
    where
        M: DemographicModel + ?Sized,
        T: TreeSequence + ?Sized,
    {
        match self.writers.writer(OutputKey::Popfile) {
            Some(out) => records::write_popfile(out, model, tree),
            None => Ok(()),
        }
    }

    pub fn print_vcf<T: TreeSequence + ?Sized>(&mut self, tree: &T) -> OutputResult<()> {
        match self.writers.writer(OutputKey::Vcf) {
            Some(out) => Ok(tree.write_vcf(out, PLOIDY)?),
            None => Ok(()),
        }
    }

    pub fn print_haplo<K: Display>(&mut self, tracts: &BTreeMap<K, Tracts>) -> OutputResult<()> {
        let seed = self.params.seed;
        match self.writers.writer(OutputKey::Haplo) {
            Some(out) => records::write_tracts(out, seed, tracts),
            None => Ok(()),
        }
    }

    pub fn print_ils<K: Display>(&mut self, tracts: &BTreeMap<K, Tracts>) -> OutputResult<()> {
        let seed = self.params.seed;
        match self.writers.writer(OutputKey::Ils) {
            Some(out) => records::write_tracts(out, seed, tracts),
            None => Ok(()),
        }
    }

    /// Write the F4 parameter file naming the eigen, snp and ind outputs.
    ///
    /// A bundle member that is not a file (standard output) is named by its
    /// key.
    pub fn print_f4dstat(&mut self) -> OutputResult<()> {
        let [eigen, snp, ind] = [OutputKey::Eigen, OutputKey::Snp, OutputKey::Ind].map(|key| {
            self.writers
                .plan()
                .path(key)
                .map_or_else(|| PathBuf::from(key.name()), Path::to_path_buf)
        });
        match self.writers.writer(OutputKey::F4dstat) {
            Some(out) => records::write_f4_header(out, &eigen, &snp, &ind),
            None => Ok(()),
        }
    }

    /// Compute and write the diversity / Fst table for `tree`.
    ///
    /// The genotype matrix is only materialised when the output is open.
    pub fn print_pi<T: TreeSequence + ?Sized>(
        &mut self,
        tree:        &T,
        populations: &PopulationMap,
    ) -> OutputResult<()> {
        let Some(out) = self.writers.writer(OutputKey::Pi) else {
            return Ok(());
        };

        let haplotypes = tree.genotype_matrix();
        let pop_index: Vec<PopulationId> = (0..tree.sample_size())
            .map(|s| tree.population(SampleId(s as u32)))
            .collect();
        let row = compute_pi_and_fst(&haplotypes, &pop_index, populations)?;
        debug!(%row, sequence_length = tree.sequence_length(), "pi / Fst");
        records::write_pi_table(out, &row)
    }

    /// Close every writer and report the first close error.
    pub fn close(mut self) -> OutputResult<()> {
        self.writers.close_all()
    }
}

/// Open the writers for `config`, hand them to `f`, then close them.
///
/// Writers are closed whether `f` succeeds or not.  An error from `f` takes
/// precedence over a close error.
pub fn run<T, E, F>(config: &OutputConfig, f: F) -> Result<T, E>
where
    E: From<OutputError>,
    F: FnOnce(&mut FilePrinter) -> Result<T, E>,
{
    let mut printer = FilePrinter::open(config)?;
    let result = f(&mut printer);
    let closed = printer.close();
    let value = result?;
    closed?;
    Ok(value)
}
