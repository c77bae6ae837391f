//! Contract tests for the allocation engine and the weight table.

use std::collections::BTreeMap;
use std::sync::Arc;
use std::thread;

use taxlens_core::{
    AllocationError, WeightTable, WeightTableError, allocate_fixed, allocate_proportional,
};

fn weights(entries: &[(&str, f64)]) -> BTreeMap<String, f64> {
    entries.iter().map(|&(k, v)| (k.to_string(), v)).collect()
}

#[test]
fn fixed_table_splits_thousand_across_sectors() {
    let allocation = allocate_fixed(1000.0).unwrap();

    assert_eq!(allocation.total, 1000.0);
    assert_eq!(allocation.amounts["Education"], 150.0);
    assert_eq!(allocation.amounts["Healthcare"], 200.0);
    assert_eq!(allocation.amounts["Defense"], 300.0);
    assert_eq!(allocation.amounts["Infrastructure"], 250.0);
    assert_eq!(allocation.amounts["Other"], 100.0);
}

#[test]
fn fixed_table_sum_stays_within_rounding_tolerance() {
    for total in [0.01, 1.0, 33.33, 999.99, 123_456.78] {
        let allocation = allocate_fixed(total).unwrap();
        let sum: f64 = allocation.amounts.values().sum();
        let tolerance = 0.01 * allocation.amounts.len() as f64;
        assert!(
            (sum - total).abs() <= tolerance,
            "total {total}: breakdown sums to {sum}"
        );
    }
}

#[test]
fn proportional_one_to_three_split() {
    let allocation = allocate_proportional(100.0, &weights(&[("A", 1.0), ("B", 3.0)])).unwrap();

    assert_eq!(allocation.amounts["A"], 25.0);
    assert_eq!(allocation.amounts["B"], 75.0);
}

#[test]
fn proportional_thirds_sum_within_tolerance() {
    let table = weights(&[("A", 1.0), ("B", 2.0), ("C", 3.0)]);
    let allocation = allocate_proportional(100.0, &table).unwrap();
    let sum: f64 = allocation.amounts.values().sum();
    assert!((sum - 100.0).abs() <= 0.03, "breakdown sums to {sum}");
}

#[test]
fn proportional_shares_match_weight_ratios() {
    let table = weights(&[("Ports", 5.0), ("Rail", 7.5), ("Roads", 2.5)]);
    let total_weight: f64 = table.values().sum();
    let allocation = allocate_proportional(600.0, &table).unwrap();

    for (category, weight) in &table {
        let expected = 600.0 * weight / total_weight;
        let got = allocation.amounts[category];
        assert!(
            (got - expected).abs() <= 0.005,
            "{category}: expected ~{expected}, got {got}"
        );
    }
}

#[test]
fn allocation_is_deterministic() {
    let table = weights(&[("A", 0.3), ("B", 0.7), ("C", 1.1)]);
    let first = allocate_proportional(777.77, &table).unwrap();
    for _ in 0..10 {
        assert_eq!(first, allocate_proportional(777.77, &table).unwrap());
    }

    let fixed_first = allocate_fixed(777.77).unwrap();
    assert_eq!(fixed_first, allocate_fixed(777.77).unwrap());
}

#[test]
fn non_positive_amounts_are_rejected() {
    for bad in [0.0, -1.0, -0.01] {
        assert!(matches!(
            allocate_fixed(bad),
            Err(AllocationError::InvalidAmount(_))
        ));
        assert!(matches!(
            allocate_proportional(bad, &weights(&[("A", 1.0)])),
            Err(AllocationError::InvalidAmount(_))
        ));
    }
    assert!(matches!(
        allocate_fixed(f64::NAN),
        Err(AllocationError::InvalidAmount(_))
    ));
}

#[test]
fn zero_sum_weights_are_rejected_before_dividing() {
    let table = weights(&[("A", 0.0), ("B", 0.0)]);
    let err = allocate_proportional(100.0, &table).unwrap_err();
    assert_eq!(err, AllocationError::DegenerateWeights);
}

#[test]
fn formatted_breakdown_uses_rupee_strings() {
    let allocation = allocate_proportional(100.0, &weights(&[("A", 1.0), ("B", 3.0)])).unwrap();
    let display = allocation.formatted();
    assert_eq!(display["A"], "₹25.00");
    assert_eq!(display["B"], "₹75.00");
}

#[test]
fn weight_table_rejects_empty_source() {
    assert!(matches!(
        WeightTable::from_entries(Vec::new()),
        Err(WeightTableError::EmptyTable)
    ));
}

#[test]
fn weight_table_rejects_negative_weights() {
    let result = WeightTable::from_entries(weights(&[("A", 1.0), ("B", -2.0)]));
    assert!(matches!(
        result,
        Err(WeightTableError::NegativeWeight { .. })
    ));
}

#[test]
fn weight_table_rejects_zero_sum() {
    let result = WeightTable::from_entries(weights(&[("A", 0.0), ("B", 0.0)]));
    assert!(matches!(result, Err(WeightTableError::DegenerateSum { .. })));
}

#[test]
fn weight_table_load_parses_flat_json_object() {
    let path = std::env::temp_dir().join(format!("taxlens-budget-{}.json", std::process::id()));
    std::fs::write(&path, r#"{"Defence": 4.5, "Health": 0.9, "Railways": 2.4}"#).unwrap();

    let table = WeightTable::load(&path).unwrap();
    let snapshot = table.snapshot();
    assert_eq!(snapshot.len(), 3);
    assert_eq!(snapshot["Railways"], 2.4);

    std::fs::remove_file(&path).ok();
}

#[test]
fn weight_table_load_fails_on_missing_file() {
    let result = WeightTable::load("/nonexistent/taxlens-budget.json");
    assert!(matches!(result, Err(WeightTableError::SourceUnreadable(_))));
}

#[test]
fn weight_table_load_fails_on_malformed_json() {
    let path = std::env::temp_dir().join(format!("taxlens-garbage-{}.json", std::process::id()));
    std::fs::write(&path, "not json").unwrap();

    let result = WeightTable::load(&path);
    assert!(matches!(result, Err(WeightTableError::MalformedData(_))));

    std::fs::remove_file(&path).ok();
}

#[test]
fn replace_rejects_invalid_tables_and_keeps_current_one() {
    let table = WeightTable::from_entries(weights(&[("A", 1.0)])).unwrap();
    assert!(table.replace(weights(&[("A", 0.0)])).is_err());
    assert_eq!(table.snapshot()["A"], 1.0);
}

#[test]
fn snapshots_never_mix_old_and_new_entries() {
    // Every generation of the table sums to 2.0; a reader that saw a mix of
    // generations would observe a different sum.
    let table = Arc::new(WeightTable::from_entries(weights(&[("A", 1.0), ("B", 1.0)])).unwrap());

    let readers: Vec<_> = (0..4)
        .map(|_| {
            let table = Arc::clone(&table);
            thread::spawn(move || {
                for _ in 0..1_000 {
                    let snapshot = table.snapshot();
                    let sum: f64 = snapshot.values().sum();
                    assert_eq!(sum, 2.0);
                }
            })
        })
        .collect();

    for generation in 0..100 {
        let (a, b) = if generation % 2 == 0 { (1.5, 0.5) } else { (1.0, 1.0) };
        table.replace(weights(&[("A", a), ("B", b)])).unwrap();
    }

    for reader in readers {
        reader.join().unwrap();
    }
}
