//! Unit tests for ao-stats.
//!
//! Hand-sized matrices check the estimators against values worked out on
//! paper; the synthetic panel checks the shape of the full table.

#[cfg(test)]
mod helpers {
    use ao_core::PopulationId;

    use crate::{GenotypeMatrix, HaplotypeMatrix, PopulationMap};

    pub fn genotypes(rows: &[Vec<i8>]) -> GenotypeMatrix {
        HaplotypeMatrix::from_rows(rows).unwrap().to_genotypes(2).unwrap()
    }

    pub fn default_map() -> PopulationMap {
        PopulationMap::new(PopulationId(0), PopulationId(1), PopulationId(2))
    }

    /// Population index with `per_pop` haplotypes in each of pops 0, 1, 2.
    pub fn block_index(per_pop: usize) -> Vec<PopulationId> {
        (0..3u32)
            .flat_map(|p| std::iter::repeat_n(PopulationId(p), per_pop))
            .collect()
    }
}

// ── Matrices ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod matrix {
    use super::helpers::genotypes;
    use crate::{HaplotypeMatrix, StatsError};

    #[test]
    fn shape_is_checked() {
        let err = HaplotypeMatrix::new(2, 3, vec![0; 5]).unwrap_err();
        assert!(matches!(err, StatsError::ShapeMismatch { expected: 6, got: 5, .. }));
    }

    #[test]
    fn ragged_rows_rejected() {
        assert!(HaplotypeMatrix::from_rows(&[vec![0, 1], vec![0]]).is_err());
    }

    #[test]
    fn odd_haplotypes_cannot_be_diploid() {
        let h = HaplotypeMatrix::from_rows(&[vec![0, 1, 0]]).unwrap();
        assert!(matches!(h.to_genotypes(2), Err(StatsError::Ploidy { haplotypes: 3, ploidy: 2 })));
    }

    #[test]
    fn consecutive_haplotypes_pair_into_samples() {
        let g = genotypes(&[vec![0, 1, 1, 1]]);
        assert_eq!(g.n_samples(), 2);
        assert_eq!(g.genotype(0, 0), &[0, 1]);
        assert_eq!(g.genotype(0, 1), &[1, 1]);
        assert!(g.is_het(0, 0));
        assert!(!g.is_het(0, 1));
    }

    #[test]
    fn select_columns_keeps_order() {
        let h = HaplotypeMatrix::from_rows(&[vec![0, 1, 2, 3], vec![4, 5, 6, 7]]).unwrap();
        let s = h.select_columns(&[3, 0]);
        assert_eq!(s.row(0), &[3, 0]);
        assert_eq!(s.row(1), &[7, 4]);
    }

    #[test]
    fn concatenate_appends_samples_per_variant() {
        let a = genotypes(&[vec![0, 0], vec![1, 1]]);
        let b = genotypes(&[vec![0, 1, 1, 0], vec![1, 0, 0, 0]]);
        let c = a.concatenate(&[&b]).unwrap();
        assert_eq!(c.n_samples(), 3);
        assert_eq!(c.genotype(0, 0), &[0, 0]);
        assert_eq!(c.genotype(0, 2), &[1, 0]);
        assert_eq!(c.genotype(1, 1), &[1, 0]);
    }

    #[test]
    fn concatenate_rejects_variant_mismatch() {
        let a = genotypes(&[vec![0, 0]]);
        let b = genotypes(&[vec![0, 0], vec![1, 1]]);
        assert!(matches!(a.concatenate(&[&b]), Err(StatsError::Concatenate(_))));
    }

    #[test]
    fn filter_variants_keeps_flagged_rows() {
        let g = genotypes(&[vec![0, 0], vec![1, 1], vec![0, 1]]);
        let f = g.filter_variants(&[false, true, true]).unwrap();
        assert_eq!(f.n_variants(), 2);
        assert_eq!(f.genotype(0, 0), &[1, 1]);
        assert!(g.filter_variants(&[true]).is_err());
    }
}

// ── Allele counts ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod counts {
    use approx::assert_relative_eq;

    use super::helpers::genotypes;

    #[test]
    fn missing_calls_are_ignored() {
        let g = genotypes(&[vec![0, -1, 1, 1]]);
        let ac = g.count_alleles();
        assert_eq!(ac.row(0), &[1, 2]);
        assert_eq!(ac.allele_number(0), 3);
    }

    #[test]
    fn biallelic_01_filter() {
        let g = genotypes(&[
            vec![0, 0, 0, 1], // biallelic, minor count 1
            vec![0, 0, 0, 0], // monomorphic
            vec![0, 2, 0, 2], // alleles 0 and 2
            vec![0, 1, 1, 0], // biallelic, minor count 2
        ]);
        let ac = g.count_alleles();
        assert_eq!(ac.is_biallelic_01(0), vec![true, false, false, true]);
        assert_eq!(ac.is_biallelic_01(2), vec![false, false, false, true]);
    }

    #[test]
    fn mean_pairwise_difference_matches_hand_count() {
        // 2 of each allele among 4 haplotypes: 4 of 6 pairs differ.
        let g = genotypes(&[vec![0, 1, 0, 1], vec![0, 0, 0, 1]]);
        let mpd = g.count_alleles().mean_pairwise_difference();
        assert_relative_eq!(mpd[0], 4.0 / 6.0);
        assert_relative_eq!(mpd[1], 3.0 / 6.0);
    }

    #[test]
    fn mean_pairwise_difference_nan_without_pairs() {
        let g = genotypes(&[vec![0, -1]]);
        assert!(g.count_alleles().mean_pairwise_difference()[0].is_nan());
    }
}

// ── Weir & Cockerham ──────────────────────────────────────────────────────────

#[cfg(test)]
mod fst {
    use approx::assert_relative_eq;

    use super::helpers::genotypes;
    use crate::weir_cockerham_fst;

    fn two_blocks() -> Vec<Vec<usize>> {
        vec![vec![0, 1], vec![2, 3]]
    }

    #[test]
    fn fixed_differences_give_one() {
        let g = genotypes(&[vec![0, 0, 0, 0, 1, 1, 1, 1]]);
        let c = weir_cockerham_fst(&g, &two_blocks());
        assert_relative_eq!(c.a, 1.0);
        assert_relative_eq!(c.b, 0.0);
        assert_relative_eq!(c.c, 0.0);
        assert_relative_eq!(c.fst(), 1.0);
    }

    #[test]
    fn identical_heterozygous_populations_give_zero() {
        let g = genotypes(&[vec![0, 1, 0, 1, 0, 1, 0, 1]]);
        let c = weir_cockerham_fst(&g, &two_blocks());
        assert_relative_eq!(c.a, 0.0);
        assert_relative_eq!(c.b, -0.5);
        assert_relative_eq!(c.c, 1.0);
        assert_relative_eq!(c.fst(), 0.0);
    }

    #[test]
    fn no_sites_is_nan() {
        let g = genotypes(&[vec![0; 8]]).filter_variants(&[false]).unwrap();
        assert!(weir_cockerham_fst(&g, &two_blocks()).fst().is_nan());
    }
}

// ── Formatting ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod format {
    use crate::format_significant;

    #[test]
    fn fixed_notation() {
        assert_eq!(format_significant(2.0 / 3.0, 5), "0.66667");
        assert_eq!(format_significant(0.5, 5), "0.5");
        assert_eq!(format_significant(1.0, 5), "1.0");
        assert_eq!(format_significant(12345.0, 5), "12345.0");
        assert_eq!(format_significant(-0.012345678, 5), "-0.012346");
        assert_eq!(format_significant(0.00012345, 5), "0.00012345");
    }

    #[test]
    fn scientific_notation() {
        assert_eq!(format_significant(0.000012345, 5), "1.2345e-05");
        assert_eq!(format_significant(123456.0, 5), "1.2346e+05");
        assert_eq!(format_significant(1e10, 5), "1e+10");
    }

    #[test]
    fn special_values() {
        assert_eq!(format_significant(f64::NAN, 5), "nan");
        assert_eq!(format_significant(f64::INFINITY, 5), "inf");
        assert_eq!(format_significant(0.0, 5), "0.0");
    }
}

// ── Pipeline ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod pipeline {
    use ao_core::PopulationId;
    use approx::assert_relative_eq;

    use super::helpers::{block_index, default_map};
    use crate::{
        HaplotypeMatrix, PiFstRow, PopulationMap, StatsError, SuperPopulation, compute_pi_and_fst,
        synthetic_panel,
    };

    #[test]
    fn hand_sized_panel() {
        // 4 haplotypes (2 individuals) per population, blocks AF | EU | AS.
        let h = HaplotypeMatrix::from_rows(&[
            // AF polymorphic, EU fixed 0, AS fixed 1
            vec![0, 1, 0, 1, 0, 0, 0, 0, 1, 1, 1, 1],
            // monomorphic everywhere: dropped by every filter
            vec![0; 12],
        ])
        .unwrap();
        let row = compute_pi_and_fst(&h, &block_index(4), &default_map()).unwrap();

        assert_relative_eq!(row.pi[0], 4.0 / 6.0);
        // EU and AS have no polymorphic site left: 0 / 0.
        assert!(row.pi[1].is_nan());
        assert!(row.pi[2].is_nan());
        // EU vs AS differ by a fixed difference at the only kept site.
        assert_relative_eq!(row.fst[2], 1.0);
        assert_eq!(row.fields()[0], "0.66667");
        assert_eq!(row.fields()[1], "nan");
    }

    #[test]
    fn pooled_filter_is_shared_by_pairs() {
        // Site 0 polymorphic only in AF; site 1 polymorphic only in EU.
        // The pooled filter keeps both sites for every pair, including
        // EU-AS where site 0 is monomorphic.
        let h = HaplotypeMatrix::from_rows(&[
            vec![0, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0],
            vec![0, 0, 0, 0, 1, 0, 0, 1, 0, 0, 0, 0],
        ])
        .unwrap();
        let row = compute_pi_and_fst(&h, &block_index(4), &default_map()).unwrap();
        for fst in row.fst {
            assert!(fst.is_finite(), "{row:?}");
        }
    }

    #[test]
    fn populations_are_selected_by_id() {
        // Same panel, with AF and AS ids swapped.
        let h = HaplotypeMatrix::from_rows(&[vec![0, 1, 0, 1, 0, 0, 0, 0, 1, 1, 1, 1]]).unwrap();
        let swapped = PopulationMap::new(PopulationId(2), PopulationId(1), PopulationId(0));
        let row = compute_pi_and_fst(&h, &block_index(4), &swapped).unwrap();
        assert!(row.pi[0].is_nan());
        assert_relative_eq!(row.pi[2], 4.0 / 6.0);
    }

    #[test]
    fn index_length_must_match() {
        let h = HaplotypeMatrix::from_rows(&[vec![0, 1, 0, 1]]).unwrap();
        let err = compute_pi_and_fst(&h, &block_index(2), &default_map()).unwrap_err();
        assert!(matches!(err, StatsError::ShapeMismatch { expected: 4, got: 6, .. }));
    }

    #[test]
    fn synthetic_table_shape() {
        let panel = synthetic_panel(100, 20, 11);
        let row = compute_pi_and_fst(&panel.haplotypes, &panel.pop_index, &panel.populations)
            .unwrap();

        let line = row.to_string();
        let fields: Vec<&str> = line.split('\t').collect();
        assert_eq!(fields.len(), 6);
        for field in &fields {
            let value: f64 = field.parse().unwrap_or_else(|_| panic!("not numeric: {field}"));
            assert!(value.is_finite());
            let digits = field
                .trim_start_matches('-')
                .chars()
                .take_while(|c| *c != 'e')
                .filter(char::is_ascii_digit)
                .collect::<String>();
            assert!(digits.trim_start_matches('0').len() <= 5, "{field}");
        }
        for fst in row.fst {
            assert!((0.0..=1.0).contains(&fst), "fst out of range: {fst}");
        }
        for pi in row.pi {
            assert!(pi > 0.0 && pi <= 1.0, "pi out of range: {pi}");
        }
    }

    #[test]
    fn synthetic_panel_is_deterministic() {
        let a = synthetic_panel(10, 4, 3);
        let b = synthetic_panel(10, 4, 3);
        assert_eq!(a.haplotypes, b.haplotypes);
        assert_eq!(a.pop_index, b.pop_index);
    }

    #[test]
    fn header_and_labels() {
        assert_eq!(PiFstRow::HEADER.join("\t"), "AF\tEU\tAS\tAF-EU\tAF-AS\tEU-AS");
        assert_eq!("EU".parse::<SuperPopulation>().unwrap(), SuperPopulation::Eu);
        assert!(matches!("XX".parse::<SuperPopulation>(), Err(StatsError::UnknownLabel(_))));
    }

    #[test]
    fn population_map_from_all_labels() {
        let map = PopulationMap::from_labels([
            ("EU", PopulationId(4)),
            ("AS", PopulationId(9)),
            ("AF", PopulationId(0)),
        ])
        .unwrap();
        assert_eq!(map, PopulationMap::new(PopulationId(0), PopulationId(4), PopulationId(9)));
    }

    #[test]
    fn population_map_missing_label_fails() {
        let err = PopulationMap::from_labels([("AF", PopulationId(1)), ("AS", PopulationId(2))])
            .unwrap_err();
        assert!(matches!(err, StatsError::MissingLabel("EU")));
        let none = std::iter::empty::<(&str, PopulationId)>();
        assert!(matches!(PopulationMap::from_labels(none), Err(StatsError::MissingLabel("AF"))));
    }
}
