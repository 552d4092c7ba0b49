use thiserror::Error;

/// Errors produced by malformed genotype input.
#[derive(Debug, Error)]
pub enum StatsError {
    #[error("{what} has {got} entries, expected {expected}")]
    ShapeMismatch {
        what:     &'static str,
        expected: usize,
        got:      usize,
    },

    #[error("{haplotypes} haplotypes cannot be grouped into ploidy {ploidy}")]
    Ploidy { haplotypes: usize, ploidy: usize },

    #[error("cannot concatenate genotype matrices: {0}")]
    Concatenate(String),

    #[error("population label {0:?} is not one of AF, EU, AS")]
    UnknownLabel(String),

    #[error("no population id given for label {0}")]
    MissingLabel(&'static str),
}

pub type StatsResult<T> = Result<T, StatsError>;
