//! Logical outputs of one simulation run.

use std::fmt;
use std::str::FromStr;

use crate::CoreError;

/// One logical output of a run.
///
/// `F4dstat`, `Eigen`, `Snp` and `Ind` form the F4-statistic bundle: the user
/// requests only `f4dstat`, and the other three share its base path.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
pub enum OutputKey {
    Debug,
    Haplo,
    Ils,
    Options,
    Vcf,
    Popfile,
    F4dstat,
    Eigen,
    Snp,
    Ind,
    Pi,
}

impl OutputKey {
    /// Number of distinct output keys.
    pub const COUNT: usize = 11;

    /// Every key, in plan order.
    pub const ALL: [OutputKey; Self::COUNT] = [
        OutputKey::Debug,
        OutputKey::Haplo,
        OutputKey::Ils,
        OutputKey::Options,
        OutputKey::Vcf,
        OutputKey::Popfile,
        OutputKey::F4dstat,
        OutputKey::Eigen,
        OutputKey::Snp,
        OutputKey::Ind,
        OutputKey::Pi,
    ];

    /// The keys a user can request a path for.
    pub const REQUESTABLE: [OutputKey; 8] = [
        OutputKey::Debug,
        OutputKey::Haplo,
        OutputKey::Ils,
        OutputKey::Options,
        OutputKey::Vcf,
        OutputKey::Popfile,
        OutputKey::F4dstat,
        OutputKey::Pi,
    ];

    /// Dense index into per-key arrays.
    #[inline(always)]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Lower-case name, as used in configuration and logs.
    pub fn name(self) -> &'static str {
        match self {
            OutputKey::Debug   => "debug",
            OutputKey::Haplo   => "haplo",
            OutputKey::Ils     => "ils",
            OutputKey::Options => "options",
            OutputKey::Vcf     => "vcf",
            OutputKey::Popfile => "popfile",
            OutputKey::F4dstat => "f4dstat",
            OutputKey::Eigen   => "eigen",
            OutputKey::Snp     => "snp",
            OutputKey::Ind     => "ind",
            OutputKey::Pi      => "pi",
        }
    }

    /// The requestable key whose user-supplied path drives this output.
    pub fn request_key(self) -> OutputKey {
        match self {
            OutputKey::Eigen | OutputKey::Snp | OutputKey::Ind => OutputKey::F4dstat,
            key => key,
        }
    }
}

impl fmt::Display for OutputKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for OutputKey {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OutputKey::ALL
            .into_iter()
            .find(|key| key.name() == s)
            .ok_or_else(|| CoreError::UnknownKey(s.to_owned()))
    }
}
