mod common;

use common::test_utils::{generate_ips, generate_test_items};
use probabilistic_rs::{
    AlphaTable, Candidate, HyperLogLog, HyperLogLogConfigBuilder, SketchError,
    hash_murmur32,
};
use serde_json::json;

fn relative_error(estimate: f64, actual: usize) -> f64 {
    (estimate - actual as f64).abs() / actual as f64
}

fn filled_sketch(precision: u8, items: &[String]) -> HyperLogLog {
    let mut hll = HyperLogLog::new(precision).expect("Valid precision");
    for item in items {
        hll.add(item);
    }
    hll
}

#[cfg(test)]
mod accuracy_tests {
    use super::*;

    #[test]
    fn test_accuracy_across_cardinalities() {
        let precision = 14;
        let tolerance = 3.0 * 1.04 / ((1u32 << precision) as f64).sqrt();

        for n in [100, 1_000, 10_000, 200_000] {
            let items = generate_test_items(n);
            let hll = filled_sketch(precision, &items);
            let error = relative_error(hll.estimate(), n);
            assert!(
                error <= tolerance,
                "n={n}: estimate {:.1}, relative error {error:.4} > {tolerance:.4}",
                hll.estimate()
            );
        }
    }

    #[test]
    fn test_accuracy_on_ip_addresses() {
        let precision = 12;
        let tolerance = 3.0 * 1.04 / 64.0;
        let ips = generate_ips(100_000);
        let hll = filled_sketch(precision, &ips);
        let error = relative_error(hll.estimate(), ips.len());
        assert!(error <= tolerance, "relative error {error:.4}");
    }

    #[test]
    fn test_duplicates_do_not_inflate_estimate() {
        let items = generate_test_items(1_000);
        let mut hll = filled_sketch(14, &items);
        let before = hll.estimate();

        for _ in 0..5 {
            for item in &items {
                hll.add(item);
            }
        }
        assert_eq!(hll.estimate(), before);
    }

    #[test]
    fn test_small_cardinality_is_near_exact() {
        let items = generate_test_items(10);
        let hll = filled_sketch(14, &items);
        assert!(
            (9..=11).contains(&hll.count()),
            "count {} not near 10",
            hll.count()
        );
    }

    #[test]
    fn test_higher_precision_has_smaller_error_bound() {
        let low = HyperLogLog::new(6).unwrap();
        let high = HyperLogLog::new(16).unwrap();
        assert!(high.standard_error() < low.standard_error());
        assert!(high.memory_usage() > low.memory_usage());
    }
}

#[cfg(test)]
mod monotonicity_tests {
    use super::*;

    #[test]
    fn test_estimate_grows_with_distinct_items() {
        let items = generate_test_items(100_000);
        let mut hll = HyperLogLog::new(12).unwrap();
        let mut previous = hll.estimate();
        let mut added = 0;

        for checkpoint in [1_000, 5_000, 20_000, 100_000] {
            for item in &items[added..checkpoint] {
                hll.add(item);
            }
            added = checkpoint;
            let current = hll.estimate();
            assert!(
                current >= previous,
                "estimate dropped from {previous} to {current} at {checkpoint}"
            );
            previous = current;
        }
    }

    #[test]
    fn test_identical_state_identical_estimate() {
        let items = generate_test_items(5_000);
        let a = filled_sketch(10, &items);
        let mut reversed = items.clone();
        reversed.reverse();
        let b = filled_sketch(10, &reversed);

        assert_eq!(a.registers(), b.registers());
        assert_eq!(a.estimate(), b.estimate());
        assert_eq!(a.estimate(), a.estimate());
    }

    #[test]
    fn test_registers_never_decrease() {
        let mut hll = HyperLogLog::new(8).unwrap();
        let mut previous = hll.registers().to_vec();
        for item in generate_test_items(2_000) {
            hll.add(&item);
            for (old, new) in previous.iter().zip(hll.registers()) {
                assert!(new >= old);
            }
            previous = hll.registers().to_vec();
        }
    }
}

#[cfg(test)]
mod edge_case_tests {
    use super::*;

    #[test]
    fn test_empty_string_sets_one_register() {
        let precision = 10;
        let mut hll = HyperLogLog::new(precision).unwrap();
        hll.add("");

        let touched: Vec<usize> = hll
            .registers()
            .iter()
            .enumerate()
            .filter(|(_, r)| **r > 0)
            .map(|(i, _)| i)
            .collect();
        assert_eq!(touched.len(), 1);

        let hash = hash_murmur32(b"");
        let expected_index = (hash & ((1 << precision) - 1)) as usize;
        assert_eq!(touched[0], expected_index);

        // Same register, same value, every time.
        let mut again = HyperLogLog::new(precision).unwrap();
        again.add("");
        assert_eq!(hll.registers(), again.registers());
        assert_eq!(hll.count(), 1);
    }

    #[test]
    fn test_invalid_candidate_rejected() {
        let mut hll = HyperLogLog::new(10).unwrap();
        let result = hll.add_candidate(&Candidate::from(json!(null)));
        assert!(matches!(result, Err(SketchError::InvalidInput(_))));
        assert_eq!(hll.zero_registers(), hll.num_registers());

        hll.add_candidate(&Candidate::from("127.0.0.1")).unwrap();
        assert_eq!(hll.zero_registers(), hll.num_registers() - 1);
    }

    #[test]
    fn test_register_count_matches_precision() {
        for p in 4..=16u8 {
            let hll = HyperLogLog::new(p).unwrap();
            assert_eq!(hll.num_registers(), 1 << p);
            assert_eq!(hll.precision(), p);
        }
    }
}

#[cfg(test)]
mod configuration_tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let config = HyperLogLogConfigBuilder::default().build().unwrap();
        assert_eq!(config.precision, 14);
        assert_eq!(config.alpha_table, AlphaTable::Flajolet);
    }

    #[test]
    fn test_out_of_range_precision_fails_fast() {
        for precision in [0u8, 3, 17, 64] {
            let config = HyperLogLogConfigBuilder::default()
                .precision(precision)
                .build()
                .unwrap();
            match HyperLogLog::with_config(config) {
                Err(SketchError::ConfigurationError(msg)) => {
                    assert!(msg.contains("Precision"), "{msg}")
                }
                other => panic!("Expected ConfigurationError, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_alpha_table_choice_at_small_m() {
        let flajolet = HyperLogLog::with_config(
            HyperLogLogConfigBuilder::default()
                .precision(4)
                .alpha_table(AlphaTable::Flajolet)
                .build()
                .unwrap(),
        )
        .unwrap();
        let asymptotic = HyperLogLog::with_config(
            HyperLogLogConfigBuilder::default()
                .precision(4)
                .alpha_table(AlphaTable::Asymptotic)
                .build()
                .unwrap(),
        )
        .unwrap();

        assert_eq!(flajolet.alpha(), 0.673);
        let expected = 0.7213 / (1.0 + 1.079 / 16.0);
        assert!((asymptotic.alpha() - expected).abs() < 1e-12);
    }

    #[test]
    fn test_alpha_tables_agree_at_large_m() {
        let a = HyperLogLog::with_config(
            HyperLogLogConfigBuilder::default()
                .precision(12)
                .alpha_table(AlphaTable::Asymptotic)
                .build()
                .unwrap(),
        )
        .unwrap();
        let b = HyperLogLog::new(12).unwrap();
        assert_eq!(a.alpha(), b.alpha());
    }
}
