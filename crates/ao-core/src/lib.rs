//! `ao-core` — foundational types for the `admixout` output layer.
//!
//! This crate is a dependency of every other `ao-*` crate.  It has no `ao-*`
//! dependencies and only `thiserror` (plus optional `serde`) from outside.
//!
//! # What lives here
//!
//! | Module     | Contents                                               |
//! |------------|--------------------------------------------------------|
//! | [`keys`]   | `OutputKey`: every logical output of a run             |
//! | [`ids`]    | `PopulationId`, `SampleId`                             |
//! | [`config`] | `OutputConfig`, `SimParams`, `STDOUT_REQUEST`          |
//! | [`error`]  | `CoreError`, `CoreResult`                              |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to config and id types.     |

pub mod config;
pub mod error;
pub mod ids;
pub mod keys;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{OutputConfig, STDOUT_REQUEST, SimParams};
pub use error::{CoreError, CoreResult};
pub use ids::{PopulationId, SampleId};
pub use keys::OutputKey;
