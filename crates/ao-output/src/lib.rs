//! `ao-output` — writers and record formatters for one simulation run.
//!
//! | Module      | Contents                                                    |
//! |-------------|-------------------------------------------------------------|
//! | [`sink`]    | `WriterHandle` over stdout, plain files and gzip files      |
//! | [`manager`] | `WriterManager`: open every planned output, close each once |
//! | [`source`]  | `DemographicModel`, `TreeSequence` (upstream engine)        |
//! | [`records`] | option dump, popfile, tracts, F4 header, pi table           |
//! | [`printer`] | `FilePrinter` run context, scoped [`run`]                   |
//! | [`error`]   | `OutputError`, `OutputResult<T>`                            |
//!
//! # Usage
//!
//! ```rust,ignore
//! use ao_output::run;
//!
//! run(&config, |out| -> anyhow::Result<()> {
//!     out.print_options(&config)?;
//!     if out.single_simulation_needed() {
//!         let tree = simulate(&config.params);
//!         out.print_popfile(&model, &tree)?;
//!         out.print_pi(&tree, &populations)?;
//!     }
//!     Ok(())
//! })?;
//! ```

pub mod error;
pub mod manager;
pub mod printer;
pub mod records;
pub mod sink;
pub mod source;


pub use error::{OutputError, OutputResult};
pub use manager::WriterManager;
pub use printer::{FilePrinter, run};
pub use records::{F4_POPFILE_NAME, Tracts};
pub use sink::{Encoding, WriterHandle};
pub use source::{DemographicModel, TreeSequence};
