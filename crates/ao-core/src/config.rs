//! Run configuration handed over by the option parser.
//!
//! `OutputConfig` carries one optional request per requestable
//! [`OutputKey`], an optional shared output directory, and the simulation
//! parameters that appear in generated filenames.  A request is either an
//! explicit path / basename or [`STDOUT_REQUEST`].

use std::path::PathBuf;

use crate::{CoreError, CoreResult, OutputKey};

/// Request value meaning "write this output to standard output".
pub const STDOUT_REQUEST: &str = "*";

/// Simulation parameters used only for default filename generation.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SimParams {
    /// Demographic model name, e.g. `"out_of_africa"`.
    pub model:         String,
    /// Target population label.
    pub pop:           String,
    pub seed:          u64,
    pub n1_admix_prop: f64,
    pub n2_admix_prop: f64,
    /// Divergence time between the two admixing populations.
    pub t_n1_n2:       f64,
}

/// Raw output configuration for one run.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct OutputConfig {
    pub debug_file:   Option<String>,
    pub haplo_file:   Option<String>,
    pub ils_file:     Option<String>,
    pub option_file:  Option<String>,
    pub vcf_file:     Option<String>,
    pub popfile_file: Option<String>,
    pub f4dstat_file: Option<String>,
    pub pi_file:      Option<String>,
    pub out_dir:      Option<PathBuf>,
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub params:       SimParams,
}

impl OutputConfig {
    /// The raw request for `key`.  Bundle members report the `f4dstat`
    /// request they share.
    pub fn request(&self, key: OutputKey) -> Option<&str> {
        let slot = match key.request_key() {
            OutputKey::Debug   => &self.debug_file,
            OutputKey::Haplo   => &self.haplo_file,
            OutputKey::Ils     => &self.ils_file,
            OutputKey::Options => &self.option_file,
            OutputKey::Vcf     => &self.vcf_file,
            OutputKey::Popfile => &self.popfile_file,
            OutputKey::Pi      => &self.pi_file,
            _                  => &self.f4dstat_file,
        };
        slot.as_deref()
    }

    fn request_slot(&mut self, key: OutputKey) -> &mut Option<String> {
        match key.request_key() {
            OutputKey::Debug   => &mut self.debug_file,
            OutputKey::Haplo   => &mut self.haplo_file,
            OutputKey::Ils     => &mut self.ils_file,
            OutputKey::Options => &mut self.option_file,
            OutputKey::Vcf     => &mut self.vcf_file,
            OutputKey::Popfile => &mut self.popfile_file,
            OutputKey::Pi      => &mut self.pi_file,
            _                  => &mut self.f4dstat_file,
        }
    }

    /// Number of requestable keys with any request at all.
    pub fn requested_count(&self) -> usize {
        OutputKey::REQUESTABLE
            .iter()
            .filter(|&&key| self.request(key).is_some())
            .count()
    }

    /// Number of requestable keys asking for standard output.
    pub fn stdout_requests(&self) -> usize {
        OutputKey::REQUESTABLE
            .iter()
            .filter(|&&key| self.request(key) == Some(STDOUT_REQUEST))
            .count()
    }

    /// Set the request for `key` (builder style).
    pub fn with_request(mut self, key: OutputKey, value: impl Into<String>) -> Self {
        *self.request_slot(key) = Some(value.into());
        self
    }

    /// Apply a `key=value` request such as `vcf=run` or `pi=*`.
    ///
    /// Fails with [`CoreError::BadRequest`] when there is no `=`, and with
    /// [`CoreError::UnknownKey`] when the key is not an output name.
    pub fn apply_request(&mut self, spec: &str) -> CoreResult<OutputKey> {
        let (key, value) = spec
            .split_once('=')
            .ok_or_else(|| CoreError::BadRequest(spec.to_owned()))?;
        let key: OutputKey = key.trim().parse()?;
        *self.request_slot(key) = Some(value.to_owned());
        Ok(key)
    }

    /// Set the shared output directory (builder style).
    pub fn with_out_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.out_dir = Some(dir.into());
        self
    }

    /// Replace the simulation parameters (builder style).
    pub fn with_params(mut self, params: SimParams) -> Self {
        self.params = params;
        self
    }
}
