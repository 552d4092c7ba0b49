//! synthetic — runs every output of the admixout layer against a synthetic
//! three-population simulation.
//!
//! ```text
//! synthetic [config.json] [key=path ...]
//! ```
//!
//! The optional first argument is a JSON `OutputConfig`; `key=path` pairs
//! (`vcf=run`, `pi=*`, …) override its requests.  With neither, nothing is
//! requested, so every stdout-eligible output is printed to stdout.  Logs go
//! to stderr; set `RUST_LOG=debug` to see plan resolution and writer
//! lifecycle events.

mod engine;

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use ao_core::{OutputConfig, OutputKey, PopulationId, SimParams};
use ao_stats::PopulationMap;
use ao_output::run;

use engine::{SyntheticTree, ThreePopModel};

// ── Constants ─────────────────────────────────────────────────────────────────

const N_VARIANTS:          usize = 200;
const INDIVIDUALS_PER_POP: usize = 20;
const HAPLO_TRACT_BP:      u64   = 50_000;
const ILS_TRACT_BP:        u64   = 120_000;

fn default_params() -> SimParams {
    SimParams {
        model:         "out_of_africa".to_owned(),
        pop:           "AS".to_owned(),
        seed:          42,
        n1_admix_prop: 0.02,
        n2_admix_prop: 0.01,
        t_n1_n2:       50.0,
    }
}

fn load_config(path: Option<&str>) -> Result<OutputConfig> {
    let Some(path) = path else {
        return Ok(OutputConfig::default().with_params(default_params()));
    };
    let text = std::fs::read_to_string(path).with_context(|| format!("reading config {path}"))?;
    serde_json::from_str(&text).with_context(|| format!("parsing config {path}"))
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut args = std::env::args().skip(1).peekable();
    let path = args.next_if(|arg| !arg.contains('='));
    let mut config = load_config(path.as_deref())?;
    for spec in args {
        let key = config.apply_request(&spec).with_context(|| format!("bad argument {spec:?}"))?;
        info!(%key, request = ?config.request(key), "request from command line");
    }
    info!(
        model = %config.params.model,
        seed = config.params.seed,
        out_dir = ?config.out_dir,
        "starting run"
    );

    let model = ThreePopModel;
    run(&config, |out| -> Result<()> {
        out.print_options(&config)?;
        out.print_debug(&model)?;

        if !out.single_simulation_needed() && !out.f4dstat_needed() {
            info!("no simulation output requested");
            return Ok(());
        }

        let tree = SyntheticTree::new(N_VARIANTS, INDIVIDUALS_PER_POP, config.params.seed);
        info!(
            variants = tree.n_variants(),
            individuals = tree.n_individuals(),
            "simulated panel"
        );

        out.print_popfile(&model, &tree)?;
        out.print_vcf(&tree)?;
        out.print_haplo(&tree.tracts(HAPLO_TRACT_BP))?;
        out.print_ils(&tree.tracts(ILS_TRACT_BP))?;
        let populations = PopulationMap::from_labels([
            ("AF", PopulationId(0)),
            ("EU", PopulationId(1)),
            ("AS", PopulationId(2)),
        ])?;
        out.print_pi(&tree, &populations)?;

        out.print_f4dstat()?;
        if let Some(w) = out.writer(OutputKey::Eigen) {
            tree.write_eigenstrat(w)?;
        }
        if let Some(w) = out.writer(OutputKey::Snp) {
            tree.write_snp(w)?;
        }
        if let Some(w) = out.writer(OutputKey::Ind) {
            tree.write_ind(w)?;
        }
        Ok(())
    })?;

    info!("run complete");
    Ok(())
}
