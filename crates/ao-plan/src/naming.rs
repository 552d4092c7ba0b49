//! Filenames that encode the simulation parameters of a run.

use ao_core::SimParams;

/// Render a float parameter with at least one fractional digit, so
/// integral values read `0.0` and `50.0` rather than `0` and `50`.
pub fn float_param(value: f64) -> String {
    format!("{value:?}")
}

/// Per-run filename: `<model>_<pop>_<seed>_n1_<n1>_n2_<n2><extension>`.
///
/// `extension` includes its leading dot, e.g. `".bed.merged.gz"`.
pub fn run_filename(params: &SimParams, extension: &str) -> String {
    format!(
        "{}_{}_{}_n1_{}_n2_{}{extension}",
        params.model,
        params.pop,
        params.seed,
        float_param(params.n1_admix_prop),
        float_param(params.n2_admix_prop),
    )
}

/// F4-statistic bundle filename:
/// `<model>.<base>.n1_<n1>_n2_<n2>_t_<t>_<seed>.gz`.
pub fn f4_filename(params: &SimParams, base: &str) -> String {
    format!(
        "{}.{base}.n1_{}_n2_{}_t_{}_{}.gz",
        params.model,
        float_param(params.n1_admix_prop),
        float_param(params.n2_admix_prop),
        float_param(params.t_n1_n2),
        params.seed,
    )
}
