use carddex_core::record::CardRecord;
use carddex_import::{is_variant_record, merge_records, sort_records};

fn record(number: &str, name: &str) -> CardRecord {
    CardRecord {
        name: name.to_string(),
        ..CardRecord::new(number)
    }
}

#[test]
fn appends_only_records_the_primary_lacks() {
    let primary = vec![record("F-001", "ハグミント"), record("F-013-P", "ラブラビット")];
    let supplementary = vec![
        record("F-013-P", "ラブラビット"),
        record("F-032-P", "フルフルン"),
    ];

    let outcome = merge_records(primary, supplementary, |_| true);

    assert_eq!(outcome.records.len(), 3);
    assert_eq!(outcome.added.len(), 1);
    assert_eq!(outcome.added[0].number, "F-032-P");
}

#[test]
fn promo_notation_matches_existing_parallel_form() {
    // "F-013 (P)" and "F-013-P" share a canonical number, so the
    // supplementary promo spelling must not be appended.
    let primary = vec![record("F-013-P", "ラブラビット")];
    let supplementary = vec![record("F-013 (P)", "ラブラビット")];

    let outcome = merge_records(primary, supplementary, |_| true);

    assert_eq!(outcome.records.len(), 1);
    assert!(outcome.added.is_empty());
}

#[test]
fn supplementary_duplicates_are_appended_once() {
    let primary = vec![];
    let supplementary = vec![
        record("F-023 (P)", "ピョコラッタ"),
        record("F-023-P", "ピョコラッタ"),
    ];

    let outcome = merge_records(primary, supplementary, |_| true);

    assert_eq!(outcome.records.len(), 1);
    assert_eq!(outcome.records[0].number, "F-023 (P)");
}

#[test]
fn variant_predicate_skips_regular_prints() {
    let primary = vec![];
    let supplementary = vec![
        record("F-001", "ハグミント"),
        record("F-023 (P)", "ピョコラッタ"),
        record("F-032-P", "フルフルン"),
    ];

    let outcome = merge_records(primary, supplementary, is_variant_record);

    assert_eq!(outcome.records.len(), 2);
    assert!(outcome.records.iter().all(is_variant_record));
}

#[test]
fn primary_duplicates_pass_through_untouched() {
    // Repairing a duplicated primary is the fix pass's job, not the
    // merge's.
    let primary = vec![record("F-013", "ラブラビット"), record("F-013", "ラブラビット")];
    let outcome = merge_records(primary, vec![], |_| true);
    assert_eq!(outcome.records.len(), 2);
}

#[test]
fn sort_orders_base_promo_parallel_with_stragglers_last() {
    let mut records = vec![
        record("not-a-number", "?"),
        record("F-010", "コハクチョウ"),
        record("F-005-P", "モクモックマ"),
        record("F-005", "モクモックマ"),
        record("F-005 (P)", "モクモックマ"),
    ];

    sort_records(&mut records);

    let numbers: Vec<&str> = records.iter().map(|r| r.number.as_str()).collect();
    assert_eq!(
        numbers,
        ["F-005", "F-005 (P)", "F-005-P", "F-010", "not-a-number"]
    );
}
