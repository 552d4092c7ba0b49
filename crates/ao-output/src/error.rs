//! Error types for ao-output.

use ao_core::PopulationId;
use ao_plan::PlanError;
use ao_stats::StatsError;
use thiserror::Error;

/// Errors that can occur while opening writers or printing records.
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TSV write error: {0}")]
    Csv(#[from] csv::Error),

    #[error("option serialisation error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("option dump expects a struct or map of options")]
    OptionsNotAMap,

    #[error(transparent)]
    Plan(#[from] PlanError),

    #[error(transparent)]
    Stats(#[from] StatsError),

    #[error("no long name for population {0}")]
    UnknownPopulation(PopulationId),
}

/// Alias for `Result<T, OutputError>`.
pub type OutputResult<T> = Result<T, OutputError>;
