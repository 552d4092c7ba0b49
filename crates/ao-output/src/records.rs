//! Line-oriented record formatters.
//!
//! Each function writes one complete record block to any `Write` sink, so
//! they can be tested against a `Vec<u8>` and used with a
//! [`WriterHandle`][crate::WriterHandle] unchanged.

use std::collections::BTreeMap;
use std::fmt::Display;
use std::io::Write;
use std::path::Path;

use ao_core::SampleId;
use ao_stats::PiFstRow;
use serde::Serialize;
use serde_json::Value;

use crate::source::{DemographicModel, TreeSequence};
use crate::{OutputError, OutputResult};

/// Population file referenced by every F4 parameter file.
pub const F4_POPFILE_NAME: &str = "sim.popfile_F4stat";

/// Haplotype tracts of one label: parallel start / end coordinates.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Tracts {
    pub starts: Vec<u64>,
    pub ends:   Vec<u64>,
}

impl Tracts {
    pub fn push(&mut self, start: u64, end: u64) {
        self.starts.push(start);
        self.ends.push(end);
    }
}

fn tsv_writer<W: Write>(out: W) -> csv::Writer<W> {
    csv::WriterBuilder::new()
        .delimiter(b'\t')
        .quote_style(csv::QuoteStyle::Never)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(out)
}

fn option_scalar(value: &Value) -> String {
    match value {
        Value::Null => "None".to_owned(),
        Value::Bool(true) => "True".to_owned(),
        Value::Bool(false) => "False".to_owned(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Dump every field of `options` as `key: value`, one per line.
///
/// Sequence values are expanded into an indented bracketed block.
pub fn write_options<W: Write, T: Serialize>(out: &mut W, options: &T) -> OutputResult<()> {
    let Value::Object(fields) = serde_json::to_value(options)? else {
        return Err(OutputError::OptionsNotAMap);
    };

    writeln!(out, "Options")?;
    for (key, value) in &fields {
        match value {
            Value::Array(items) => {
                writeln!(out, "{key}: [")?;
                for item in items {
                    writeln!(out, "\t{},", option_scalar(item))?;
                }
                writeln!(out, "]")?;
            }
            scalar => writeln!(out, "{key}: {}", option_scalar(scalar))?,
        }
    }
    Ok(())
}

/// Population assignment table: one row per diploid individual.
///
/// Individual `k` is labelled by the population of its first haplotype
/// `2k`.
pub fn write_popfile<W, M, T>(out: &mut W, model: &M, tree: &T) -> OutputResult<()>
where
    W: Write,
    M: DemographicModel + ?Sized,
    T: TreeSequence + ?Sized,
{
    let mut tsv = tsv_writer(out);
    tsv.write_record(["samp", "pop", "super_pop"])?;

    for sample in (0..tree.sample_size()).step_by(2) {
        let sample = SampleId(sample as u32);
        let pop = tree.population(sample);
        let name = model.long_name(pop).ok_or(OutputError::UnknownPopulation(pop))?;
        tsv.write_record([format!("msp_{}", sample.individual()).as_str(), name, name])?;
    }
    tsv.flush()?;
    Ok(())
}

/// `seed\tstart\tend\tlabel` per tract, labels in sorted order.
pub fn write_tracts<W: Write, K: Display>(
    out:    &mut W,
    seed:   u64,
    tracts: &BTreeMap<K, Tracts>,
) -> OutputResult<()> {
    for (label, t) in tracts {
        for (start, end) in t.starts.iter().zip(&t.ends) {
            writeln!(out, "{seed}\t{start}\t{end}\t{label}")?;
        }
    }
    Ok(())
}

fn basename(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// F4 parameter file naming the other three bundle members.
///
/// Each name is the file name of the planned path without its final
/// extension.
pub fn write_f4_header<W: Write>(out: &mut W, eigen: &Path, snp: &Path, ind: &Path) -> OutputResult<()> {
    writeln!(out, "genotypename: {}", basename(eigen))?;
    writeln!(out, "snpname: {}", basename(snp))?;
    writeln!(out, "indivname: {}", basename(ind))?;
    writeln!(out, "popfilename: {F4_POPFILE_NAME}")?;
    Ok(())
}

/// Header line plus one row of diversity and Fst values.
pub fn write_pi_table<W: Write>(out: &mut W, row: &PiFstRow) -> OutputResult<()> {
    let mut tsv = tsv_writer(out);
    tsv.write_record(PiFstRow::HEADER)?;
    tsv.write_record(row.fields())?;
    tsv.flush()?;
    Ok(())
}
