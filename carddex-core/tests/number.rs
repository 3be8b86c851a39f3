use carddex_core::number::{CardNumber, NumberError, NumberKind, normalize, sort_key};

#[test]
fn normalize_promo_notation() {
    assert_eq!(normalize("F-001 (P)"), "F-001-P");
    assert_eq!(normalize("F-001-P"), "F-001-P");
}

#[test]
fn normalize_leaves_regular_numbers_alone() {
    assert_eq!(normalize("F-013"), "F-013");
    assert_eq!(normalize("F-102"), "F-102");
}

#[test]
fn normalize_is_idempotent() {
    for input in ["F-001 (P)", "F-001-P", "F-013", "garbage", ""] {
        let once = normalize(input);
        assert_eq!(normalize(&once), once);
    }
}

#[test]
fn parse_regular() {
    let n = CardNumber::parse("F-013").unwrap();
    assert_eq!(n.kind(), &NumberKind::Regular);
    assert_eq!(n.base(), "F-013");
    assert_eq!(n.canonical(), "F-013");
    assert!(!n.is_variant());
}

#[test]
fn parse_promo_reprint() {
    let n = CardNumber::parse("F-023 (P)").unwrap();
    assert_eq!(
        n.kind(),
        &NumberKind::PromoReprint {
            base: "F-023".to_string()
        }
    );
    assert_eq!(n.base(), "F-023");
    assert_eq!(n.canonical(), "F-023-P");
    assert!(n.is_variant());
}

#[test]
fn parse_parallel() {
    let n = CardNumber::parse("F-032-P").unwrap();
    assert_eq!(
        n.kind(),
        &NumberKind::Parallel {
            base: "F-032".to_string()
        }
    );
    assert_eq!(n.canonical(), "F-032-P");
}

#[test]
fn promo_and_parallel_share_a_canonical_form() {
    let promo = CardNumber::parse("F-016 (P)").unwrap();
    let parallel = CardNumber::parse("F-016-P").unwrap();
    assert_eq!(promo.canonical(), parallel.canonical());
}

#[test]
fn both_markers_is_an_error() {
    let err = CardNumber::parse("F-013-P (P)").unwrap_err();
    assert!(matches!(err, NumberError::ConflictingMarkers(_)));

    let err = CardNumber::parse("F-013 (P)-P").unwrap_err();
    assert!(matches!(err, NumberError::ConflictingMarkers(_)));
}

#[test]
fn parse_trims_whitespace() {
    let n = CardNumber::parse("  F-005  ").unwrap();
    assert_eq!(n.raw(), "F-005");
}

#[test]
fn sort_orders_variants_of_one_base_adjacently() {
    let base = sort_key("F-005");
    let promo = sort_key("F-005 (P)");
    let parallel = sort_key("F-005-P");
    assert!(base < promo);
    assert!(promo < parallel);
}

#[test]
fn sort_orders_by_integer_base() {
    assert!(sort_key("F-009") < sort_key("F-010"));
    assert!(sort_key("F-010-P") < sort_key("F-011"));
    // Lexicographic ordering would get this wrong.
    assert!(sort_key("F-002") < sort_key("F-010"));
}

#[test]
fn unparseable_numbers_sort_last() {
    let stray = sort_key("not-a-number");
    assert!(stray.sorts_last());
    assert!(sort_key("F-102") < stray);
    assert!(sort_key("F-102-P") < stray);
}

#[test]
fn full_sort_scenario() {
    let mut numbers = vec!["F-005-P", "F-013", "F-005 (P)", "stray", "F-005", "F-002"];
    numbers.sort_by_key(|n| sort_key(n));
    assert_eq!(
        numbers,
        vec!["F-002", "F-005", "F-005 (P)", "F-005-P", "F-013", "stray"]
    );
}
