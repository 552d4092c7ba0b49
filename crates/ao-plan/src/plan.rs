//! Resolves an [`OutputConfig`] into a [`FilePlan`].

use std::path::{Path, PathBuf};

use ao_core::{OutputConfig, OutputKey, STDOUT_REQUEST};
use tracing::{debug, info};

use crate::rule::{OutputRule, RULES};
use crate::{PlanError, PlanResult};

/// Where one output goes.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum FileTarget {
    /// Not written at all.
    #[default]
    Absent,
    /// The process-wide standard output.
    Stdout,
    Path(PathBuf),
}

impl FileTarget {
    pub fn is_absent(&self) -> bool {
        matches!(self, FileTarget::Absent)
    }

    pub fn path(&self) -> Option<&Path> {
        match self {
            FileTarget::Path(path) => Some(path),
            _ => None,
        }
    }
}

/// The resolved destination of every [`OutputKey`].
///
/// Built once by [`OutputPlanner`] and never mutated afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FilePlan {
    targets:   [FileTarget; OutputKey::COUNT],
    out_dir:   Option<PathBuf>,
    print_all: bool,
}

impl FilePlan {
    pub fn target(&self, key: OutputKey) -> &FileTarget {
        &self.targets[key.index()]
    }

    /// The planned path for `key`, if it goes to a file.
    pub fn path(&self, key: OutputKey) -> Option<&Path> {
        self.target(key).path()
    }

    /// All keys with their targets, in [`OutputKey::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = (OutputKey, &FileTarget)> {
        OutputKey::ALL.into_iter().zip(self.targets.iter())
    }

    /// `true` if no output is written anywhere.
    pub fn is_empty(&self) -> bool {
        self.targets.iter().all(FileTarget::is_absent)
    }

    /// `true` if every default-named output is materialised in the directory.
    pub fn is_print_all(&self) -> bool {
        self.print_all
    }

    pub fn out_dir(&self) -> Option<&Path> {
        self.out_dir.as_deref()
    }
}

/// Validates a configuration and turns it into a [`FilePlan`].
///
/// Construction performs the stdout check, so a planner that exists is
/// always plannable.  [`plan`](Self::plan) is pure; [`resolve`](Self::resolve)
/// additionally creates the output directory.
#[derive(Debug)]
pub struct OutputPlanner<'a> {
    config:    &'a OutputConfig,
    requested: usize,
}

impl<'a> OutputPlanner<'a> {
    /// Fails with [`PlanError::MultipleStdout`] before touching the filesystem.
    pub fn new(config: &'a OutputConfig) -> PlanResult<Self> {
        let requested = config.requested_count();
        if requested > 0 {
            let count = config.stdout_requests();
            if count > 1 {
                return Err(PlanError::MultipleStdout { count });
            }
        }
        Ok(Self { config, requested })
    }

    /// Whether every default-named output goes into the output directory.
    pub fn print_all(&self) -> bool {
        self.requested == 0 && self.config.out_dir.is_some()
    }

    /// Compute the plan without any filesystem access.
    pub fn plan(&self) -> FilePlan {
        let print_all = self.print_all();
        let mut targets: [FileTarget; OutputKey::COUNT] = Default::default();

        for rule in RULES {
            self.resolve_rule(rule, print_all, &mut targets);
        }

        FilePlan {
            targets,
            out_dir: self.config.out_dir.clone(),
            print_all,
        }
    }

    /// Create the output directory if needed and return the plan.
    pub fn resolve(self) -> PlanResult<FilePlan> {
        if let Some(dir) = &self.config.out_dir {
            if !dir.exists() {
                std::fs::create_dir_all(dir).map_err(|source| PlanError::CreateDir {
                    path: dir.clone(),
                    source,
                })?;
                info!(dir = %dir.display(), "created output directory");
            }
        }

        let plan = self.plan();
        for (key, target) in plan.iter() {
            debug!(%key, ?target, "resolved output");
        }
        Ok(plan)
    }

    fn resolve_rule(
        &self,
        rule:      &OutputRule,
        print_all: bool,
        targets:   &mut [FileTarget; OutputKey::COUNT],
    ) {
        let request = self.config.request(rule.request);
        let dir = self.config.out_dir.as_deref().unwrap_or_else(|| Path::new(""));
        let params = &self.config.params;

        for file in rule.files {
            let target = if rule.supports_stdout && self.requested == 0 && !print_all {
                FileTarget::Stdout
            } else {
                match request {
                    Some(STDOUT_REQUEST) if rule.supports_stdout => FileTarget::Stdout,
                    Some(name) => FileTarget::Path(dir.join(file.custom_name(name))),
                    None if print_all => FileTarget::Path(dir.join(file.default_name(params))),
                    None => FileTarget::Absent,
                }
            };
            targets[file.key.index()] = target;
        }
    }
}

/// Validate `config`, create its output directory, and return its plan.
pub fn resolve(config: &OutputConfig) -> PlanResult<FilePlan> {
    OutputPlanner::new(config)?.resolve()
}
