//! Unit tests for ao-plan.

#[cfg(test)]
mod helpers {
    use ao_core::{OutputConfig, SimParams};

    pub fn params() -> SimParams {
        SimParams {
            model:         "ooa".to_owned(),
            pop:           "AF".to_owned(),
            seed:          7,
            n1_admix_prop: 0.1,
            n2_admix_prop: 0.05,
            t_n1_n2:       2.5,
        }
    }

    pub fn config() -> OutputConfig {
        OutputConfig::default().with_params(params())
    }
}

// ── Naming ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod naming {
    use super::helpers::params;
    use crate::naming::float_param;
    use crate::{f4_filename, run_filename};

    #[test]
    fn run_filename_encodes_parameters() {
        assert_eq!(run_filename(&params(), ".vcf.gz"), "ooa_AF_7_n1_0.1_n2_0.05.vcf.gz");
    }

    #[test]
    fn f4_filename_encodes_divergence_time() {
        assert_eq!(
            f4_filename(&params(), "snp"),
            "ooa.snp.n1_0.1_n2_0.05_t_2.5_7.gz"
        );
    }

    #[test]
    fn integral_floats_keep_a_fractional_digit() {
        let mut p = params();
        p.model = "m".to_owned();
        p.seed = 1;
        p.n1_admix_prop = 0.0;
        p.n2_admix_prop = 1.0;
        p.t_n1_n2 = 50.0;
        assert_eq!(run_filename(&p, ".popfile"), "m_AF_1_n1_0.0_n2_1.0.popfile");
        assert_eq!(f4_filename(&p, "snp"), "m.snp.n1_0.0_n2_1.0_t_50.0_1.gz");
    }

    #[test]
    fn float_param_rendering() {
        assert_eq!(float_param(0.0), "0.0");
        assert_eq!(float_param(-2.0), "-2.0");
        assert_eq!(float_param(0.05), "0.05");
        assert_eq!(float_param(2.5), "2.5");
    }
}

// ── FileStructRule ────────────────────────────────────────────────────────────

#[cfg(test)]
mod rule {
    use std::path::PathBuf;

    use ao_core::OutputKey;

    use crate::{DefaultName, FileStructRule, NamePattern, RULES};

    fn vcf_rule() -> FileStructRule {
        FileStructRule {
            key:     OutputKey::Vcf,
            default: DefaultName::Run(".vcf.gz"),
            pattern: NamePattern::Extension(".vcf.gz"),
        }
    }

    #[test]
    fn extension_is_appended() {
        assert_eq!(vcf_rule().custom_name("run"), PathBuf::from("run.vcf.gz"));
    }

    #[test]
    fn extension_is_not_doubled() {
        assert_eq!(vcf_rule().custom_name("run.vcf.gz"), PathBuf::from("run.vcf.gz"));
    }

    #[test]
    fn directory_component_is_kept() {
        assert_eq!(
            vcf_rule().custom_name("sub/dir/run"),
            PathBuf::from("sub/dir/run.vcf.gz")
        );
    }

    #[test]
    fn wrap_always_applies() {
        let rule = FileStructRule {
            key:     OutputKey::Snp,
            default: DefaultName::F4("snp"),
            pattern: NamePattern::Wrap { prefix: "snp.", suffix: ".gz" },
        };
        assert_eq!(rule.custom_name("x.gz"), PathBuf::from("snp.x.gz.gz"));
    }

    #[test]
    fn verbatim_keeps_basename() {
        let rule = FileStructRule {
            key:     OutputKey::Debug,
            default: DefaultName::Fixed("debug.txt"),
            pattern: NamePattern::Verbatim,
        };
        assert_eq!(rule.custom_name("log"), PathBuf::from("log"));
    }

    #[test]
    fn table_covers_every_key_once() {
        let mut seen = [0usize; OutputKey::COUNT];
        for rule in RULES {
            for file in rule.files {
                assert_eq!(file.key.request_key(), rule.request);
                seen[file.key.index()] += 1;
            }
        }
        assert!(seen.iter().all(|&n| n == 1), "{seen:?}");
    }
}

// ── Planner ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod planner {
    use std::path::{Path, PathBuf};

    use ao_core::{OutputKey, STDOUT_REQUEST};
    use tempfile::TempDir;

    use super::helpers::config;
    use crate::{FileTarget, OutputPlanner, PlanError, resolve};

    const STDOUT_ELIGIBLE: [OutputKey; 5] = [
        OutputKey::Debug,
        OutputKey::Haplo,
        OutputKey::Ils,
        OutputKey::Options,
        OutputKey::Pi,
    ];

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    #[test]
    fn nothing_configured_routes_eligible_outputs_to_stdout() {
        let plan = resolve(&config()).unwrap();
        assert!(!plan.is_print_all());
        for (key, target) in plan.iter() {
            if STDOUT_ELIGIBLE.contains(&key) {
                assert_eq!(*target, FileTarget::Stdout, "{key}");
            } else {
                assert_eq!(*target, FileTarget::Absent, "{key}");
            }
        }
    }

    #[test]
    fn two_stdout_requests_fail() {
        let cfg = config()
            .with_request(OutputKey::Debug, STDOUT_REQUEST)
            .with_request(OutputKey::Pi, STDOUT_REQUEST);
        let err = OutputPlanner::new(&cfg).unwrap_err();
        assert!(matches!(err, PlanError::MultipleStdout { count: 2 }));
    }

    #[test]
    fn stdout_check_runs_before_directory_creation() {
        let dir = tmp();
        let out = dir.path().join("never");
        let cfg = config()
            .with_out_dir(&out)
            .with_request(OutputKey::Haplo, STDOUT_REQUEST)
            .with_request(OutputKey::Ils, STDOUT_REQUEST)
            .with_request(OutputKey::Options, STDOUT_REQUEST);
        assert!(resolve(&cfg).is_err());
        assert!(!out.exists());
    }

    #[test]
    fn resolution_is_idempotent() {
        let dir = tmp();
        let cfg = config()
            .with_out_dir(dir.path())
            .with_request(OutputKey::Vcf, "run")
            .with_request(OutputKey::Debug, STDOUT_REQUEST);
        assert_eq!(resolve(&cfg).unwrap(), resolve(&cfg).unwrap());
    }

    #[test]
    fn print_all_materialises_defaults_in_directory() {
        let dir = tmp();
        let out = dir.path().join("nested/out");
        let plan = resolve(&config().with_out_dir(&out)).unwrap();

        assert!(out.is_dir(), "output directory should be created");
        assert!(plan.is_print_all());
        for (key, target) in plan.iter() {
            let path = target.path().unwrap_or_else(|| panic!("{key} should be a file"));
            assert_eq!(path.parent(), Some(out.as_path()), "{key}");
        }
        assert_eq!(plan.path(OutputKey::Debug), Some(out.join("debug.txt").as_path()));
        assert_eq!(
            plan.path(OutputKey::Haplo),
            Some(out.join("ooa_AF_7_n1_0.1_n2_0.05.bed.merged.gz").as_path())
        );
        assert_eq!(
            plan.path(OutputKey::Eigen),
            Some(out.join("ooa.eigenstratgeno.n1_0.1_n2_0.05_t_2.5_7.gz").as_path())
        );
    }

    #[test]
    fn explicit_request_leaves_others_absent() {
        let plan = resolve(&config().with_request(OutputKey::Vcf, "run.vcf.gz")).unwrap();
        assert_eq!(plan.path(OutputKey::Vcf), Some(Path::new("run.vcf.gz")));
        for key in OutputKey::ALL.into_iter().filter(|&k| k != OutputKey::Vcf) {
            assert!(plan.target(key).is_absent(), "{key}");
        }
    }

    #[test]
    fn stdout_request_wins_over_directory() {
        let dir = tmp();
        let cfg = config()
            .with_out_dir(dir.path())
            .with_request(OutputKey::Pi, STDOUT_REQUEST)
            .with_request(OutputKey::Popfile, "pops");
        let plan = resolve(&cfg).unwrap();
        assert_eq!(*plan.target(OutputKey::Pi), FileTarget::Stdout);
        assert_eq!(plan.path(OutputKey::Popfile), Some(dir.path().join("pops.popfile").as_path()));
        assert!(plan.target(OutputKey::Debug).is_absent());
    }

    #[test]
    fn f4dstat_request_expands_to_bundle() {
        let dir = tmp();
        let cfg = config().with_out_dir(dir.path()).with_request(OutputKey::F4dstat, "sim");
        let plan = resolve(&cfg).unwrap();
        let expect = |name: &str| Some(dir.path().join(name));
        assert_eq!(plan.path(OutputKey::F4dstat).map(Path::to_path_buf), expect("parfile.F4stat.sim.gz"));
        assert_eq!(plan.path(OutputKey::Eigen).map(Path::to_path_buf), expect("eigenstratgeno.sim.gz"));
        assert_eq!(plan.path(OutputKey::Snp).map(Path::to_path_buf), expect("snp.sim.gz"));
        assert_eq!(plan.path(OutputKey::Ind).map(Path::to_path_buf), expect("ind.sim.gz"));
    }

    #[test]
    fn request_directory_nests_under_out_dir() {
        let dir = tmp();
        let cfg = config().with_out_dir(dir.path()).with_request(OutputKey::Vcf, "chr1/run");
        let plan = resolve(&cfg).unwrap();
        assert_eq!(
            plan.path(OutputKey::Vcf).map(Path::to_path_buf),
            Some(dir.path().join("chr1").join("run.vcf.gz"))
        );
    }

    #[test]
    fn absolute_request_directory_is_used_literally() {
        let cfg = config().with_out_dir("ignored").with_request(OutputKey::Popfile, "/data/run");
        let plan = OutputPlanner::new(&cfg).unwrap().plan();
        assert_eq!(
            plan.path(OutputKey::Popfile).map(Path::to_path_buf),
            Some(PathBuf::from("/data/run.popfile"))
        );
    }

    #[test]
    fn star_is_a_basename_for_file_only_outputs() {
        let dir = tmp();
        let cfg = config()
            .with_out_dir(dir.path())
            .with_request(OutputKey::Vcf, STDOUT_REQUEST)
            .with_request(OutputKey::Popfile, "pops");
        let plan = resolve(&cfg).unwrap();
        assert_eq!(plan.path(OutputKey::Vcf), Some(dir.path().join("*.vcf.gz").as_path()));
        assert!(plan.iter().all(|(_, target)| *target != FileTarget::Stdout));
    }

    #[test]
    fn star_f4dstat_request_stays_in_files() {
        let dir = tmp();
        let cfg = config().with_out_dir(dir.path()).with_request(OutputKey::F4dstat, STDOUT_REQUEST);
        let plan = OutputPlanner::new(&cfg).unwrap().plan();

        let stdout = plan.iter().filter(|(_, target)| **target == FileTarget::Stdout).count();
        assert_eq!(stdout, 0);
        assert_eq!(
            plan.path(OutputKey::F4dstat).map(Path::to_path_buf),
            Some(dir.path().join("parfile.F4stat.*.gz"))
        );
        assert_eq!(
            plan.path(OutputKey::Eigen).map(Path::to_path_buf),
            Some(dir.path().join("eigenstratgeno.*.gz"))
        );
    }

    #[test]
    fn print_all_defaults_keep_integral_floats() {
        let dir = tmp();
        let mut cfg = config().with_out_dir(dir.path());
        cfg.params.n1_admix_prop = 0.0;
        cfg.params.n2_admix_prop = 0.0;
        cfg.params.t_n1_n2 = 50.0;
        let plan = OutputPlanner::new(&cfg).unwrap().plan();
        assert_eq!(
            plan.path(OutputKey::Vcf).map(Path::to_path_buf),
            Some(dir.path().join("ooa_AF_7_n1_0.0_n2_0.0.vcf.gz"))
        );
        assert_eq!(
            plan.path(OutputKey::Snp).map(Path::to_path_buf),
            Some(dir.path().join("ooa.snp.n1_0.0_n2_0.0_t_50.0_7.gz"))
        );
    }

    #[test]
    fn single_stdout_request_is_allowed() {
        let cfg = config().with_request(OutputKey::Debug, STDOUT_REQUEST);
        let plan = resolve(&cfg).unwrap();
        assert_eq!(*plan.target(OutputKey::Debug), FileTarget::Stdout);
        assert!(plan.target(OutputKey::Pi).is_absent());
    }
}
