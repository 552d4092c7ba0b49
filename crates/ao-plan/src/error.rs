use std::path::PathBuf;

use thiserror::Error;

/// Errors produced while resolving a [`FilePlan`][crate::FilePlan].
#[derive(Debug, Error)]
pub enum PlanError {
    /// The configuration asked for more than one output on stdout.
    #[error("at most one stdout output allowed, got {count}")]
    MultipleStdout { count: usize },

    #[error("cannot create output directory {}: {source}", path.display())]
    CreateDir {
        path:   PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type PlanResult<T> = Result<T, PlanError>;
