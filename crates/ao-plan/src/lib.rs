//! `ao-plan` — output routing for a simulation run.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                   |
//! |------------|------------------------------------------------------------|
//! | [`naming`] | `run_filename`, `f4_filename`, `float_param`               |
//! | [`rule`]   | `FileStructRule`, `OutputRule`, the fixed `RULES` table    |
//! | [`plan`]   | `OutputPlanner`, `FilePlan`, `FileTarget`, `resolve`       |
//! | [`error`]  | `PlanError`, `PlanResult<T>`                               |
//!
//! # Resolution (summary)
//!
//! ```text
//! validate        at most one request may be "*"
//! print_all     = no request at all && out_dir given
//! per key:
//!   stdout-eligible && nothing requested && !print_all → Stdout
//!   stdout-eligible && request == "*"                  → Stdout
//!   no request                                         → print_all ? dir/default : Absent
//!   request                                            → dir/custom_name(request)
//! ```

pub mod error;
pub mod naming;
pub mod plan;
pub mod rule;

#[cfg(test)]
mod tests;

pub use error::{PlanError, PlanResult};
pub use naming::{f4_filename, float_param, run_filename};
pub use plan::{FilePlan, FileTarget, OutputPlanner, resolve};
pub use rule::{DefaultName, FileStructRule, NamePattern, OutputRule, RULES};
