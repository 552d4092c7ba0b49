//! The fixed rule table driving plan resolution.
//!
//! Each requestable output has one [`OutputRule`]: whether it may fall back
//! to stdout, and one [`FileStructRule`] per file it produces.  Only the
//! F4-statistic rule produces more than one file.

use std::path::{Path, PathBuf};

use ao_core::{OutputKey, SimParams};

use crate::naming::{f4_filename, run_filename};

/// How the default (unrequested) filename of an output is built.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum DefaultName {
    /// A constant name such as `debug.txt`.
    Fixed(&'static str),
    /// [`run_filename`] with the given extension.
    Run(&'static str),
    /// [`f4_filename`] with the given base.
    F4(&'static str),
}

impl DefaultName {
    pub fn render(self, params: &SimParams) -> String {
        match self {
            DefaultName::Fixed(name) => name.to_owned(),
            DefaultName::Run(ext)    => run_filename(params, ext),
            DefaultName::F4(base)    => f4_filename(params, base),
        }
    }
}

/// How a user-supplied basename becomes a filename.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum NamePattern {
    /// Use the basename as given.
    Verbatim,
    /// Append the extension unless the basename already ends with it.
    Extension(&'static str),
    /// Always surround the basename.
    Wrap { prefix: &'static str, suffix: &'static str },
}

/// Naming rule for one output file.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct FileStructRule {
    pub key:     OutputKey,
    pub default: DefaultName,
    pub pattern: NamePattern,
}

impl FileStructRule {
    pub fn default_name(&self, params: &SimParams) -> String {
        self.default.render(params)
    }

    /// Filename for an explicit request.
    ///
    /// Any directory component of `requested` is kept in front of the
    /// rendered name; the pattern applies to the final component only.
    pub fn custom_name(&self, requested: &str) -> PathBuf {
        let path = Path::new(requested);
        let dir = path.parent().unwrap_or_else(|| Path::new(""));
        let base = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();

        let name = match self.pattern {
            NamePattern::Verbatim => base,
            NamePattern::Extension(ext) if base.ends_with(ext) => base,
            NamePattern::Extension(ext) => format!("{base}{ext}"),
            NamePattern::Wrap { prefix, suffix } => format!("{prefix}{base}{suffix}"),
        };
        dir.join(name)
    }
}

/// Resolution rule for one requestable output.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct OutputRule {
    /// The key whose request drives every file in `files`.
    pub request:         OutputKey,
    /// Whether this output goes to stdout when nothing at all is configured.
    pub supports_stdout: bool,
    pub files:           &'static [FileStructRule],
}

const fn single(key: OutputKey, default: DefaultName, pattern: NamePattern) -> [FileStructRule; 1] {
    [FileStructRule { key, default, pattern }]
}

const DEBUG_FILES:   [FileStructRule; 1] =
    single(OutputKey::Debug, DefaultName::Fixed("debug.txt"), NamePattern::Verbatim);
const HAPLO_FILES:   [FileStructRule; 1] =
    single(OutputKey::Haplo, DefaultName::Run(".bed.merged.gz"), NamePattern::Verbatim);
const ILS_FILES:     [FileStructRule; 1] =
    single(OutputKey::Ils, DefaultName::Run(".ils.bed.merged.gz"), NamePattern::Verbatim);
const OPTIONS_FILES: [FileStructRule; 1] =
    single(OutputKey::Options, DefaultName::Fixed("options.txt"), NamePattern::Verbatim);
const POPFILE_FILES: [FileStructRule; 1] =
    single(OutputKey::Popfile, DefaultName::Run(".popfile"), NamePattern::Extension(".popfile"));
const VCF_FILES:     [FileStructRule; 1] =
    single(OutputKey::Vcf, DefaultName::Run(".vcf.gz"), NamePattern::Extension(".vcf.gz"));
const PI_FILES:      [FileStructRule; 1] =
    single(OutputKey::Pi, DefaultName::Fixed("pi.txt"), NamePattern::Verbatim);

const F4_FILES: [FileStructRule; 4] = [
    FileStructRule {
        key:     OutputKey::F4dstat,
        default: DefaultName::F4("parfile.F4stat"),
        pattern: NamePattern::Wrap { prefix: "parfile.F4stat.", suffix: ".gz" },
    },
    FileStructRule {
        key:     OutputKey::Eigen,
        default: DefaultName::F4("eigenstratgeno"),
        pattern: NamePattern::Wrap { prefix: "eigenstratgeno.", suffix: ".gz" },
    },
    FileStructRule {
        key:     OutputKey::Snp,
        default: DefaultName::F4("snp"),
        pattern: NamePattern::Wrap { prefix: "snp.", suffix: ".gz" },
    },
    FileStructRule {
        key:     OutputKey::Ind,
        default: DefaultName::F4("ind"),
        pattern: NamePattern::Wrap { prefix: "ind.", suffix: ".gz" },
    },
];

/// One entry per requestable output, in resolution order.
pub const RULES: &[OutputRule] = &[
    OutputRule { request: OutputKey::Debug,   supports_stdout: true,  files: &DEBUG_FILES },
    OutputRule { request: OutputKey::Haplo,   supports_stdout: true,  files: &HAPLO_FILES },
    OutputRule { request: OutputKey::Ils,     supports_stdout: true,  files: &ILS_FILES },
    OutputRule { request: OutputKey::Options, supports_stdout: true,  files: &OPTIONS_FILES },
    OutputRule { request: OutputKey::Popfile, supports_stdout: false, files: &POPFILE_FILES },
    OutputRule { request: OutputKey::Vcf,     supports_stdout: false, files: &VCF_FILES },
    OutputRule { request: OutputKey::F4dstat, supports_stdout: false, files: &F4_FILES },
    OutputRule { request: OutputKey::Pi,      supports_stdout: true,  files: &PI_FILES },
];
