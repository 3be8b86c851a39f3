use carddex_core::number::{CardNumber, NumberKind};
use carddex_core::rarity::Rarity;
use carddex_core::record::CardRecord;
use carddex_import::{FixOptions, classify_variant, fix_records, verify_completeness};
use carddex_ref::{OfficialCard, OfficialIndex};

fn official_card(number: &str, name: &str, rarity: &str, card_type: &str) -> OfficialCard {
    OfficialCard {
        card_number: number.to_string(),
        card_name: name.to_string(),
        rarity: rarity.to_string(),
        card_type: card_type.to_string(),
        color: None,
        cost: None,
        power: None,
    }
}

fn record(number: &str, name: &str, rarity: &str) -> CardRecord {
    CardRecord {
        name: name.to_string(),
        rarity: rarity.to_string(),
        ..CardRecord::new(number)
    }
}

fn index(cards: Vec<OfficialCard>) -> OfficialIndex {
    OfficialIndex::from_cards(cards).unwrap()
}

fn rarity(s: &str) -> Rarity {
    s.parse().unwrap()
}

#[test]
fn dedupe_keeps_first_record_per_canonical_number() {
    let official = OfficialIndex::default();
    let records = vec![
        record("F-013 (P)", "ラブラビット", "R"),
        record("F-013-P", "ラブラビット", "R"),
        record("F-001", "ハグミント", "C"),
    ];

    let outcome = fix_records(
        records,
        &official,
        &FixOptions {
            apply_official_names: false,
            fix_image_paths: false,
            ..FixOptions::default()
        },
    );

    assert_eq!(outcome.stats.duplicates_removed, 1);
    assert_eq!(outcome.removed[0].number, "F-013-P");
    assert_eq!(outcome.records.len(), 2);
    assert!(outcome.records.iter().any(|r| r.number == "F-013 (P)"));
}

#[test]
fn official_names_overwrite_mismatches() {
    let official = index(vec![official_card(
        "F-068",
        "デコーレーション",
        "U",
        "フレンド",
    )]);
    let records = vec![record("F-068", "デコ―レーション", "U")];

    let outcome = fix_records(records, &official, &FixOptions::default());

    assert_eq!(outcome.stats.names_fixed, 1);
    assert_eq!(outcome.records[0].name, "デコーレーション");
    assert_eq!(outcome.name_fixes[0].old_name, "デコ―レーション");
    assert_eq!(outcome.name_fixes[0].new_name, "デコーレーション");
}

#[test]
fn image_paths_follow_the_naming_convention() {
    // F-023-P is listed officially, so it is a promo reprint; F-032-P
    // is not listed and carries a parallel rarity.
    let official = index(vec![official_card(
        "F-023-P",
        "ピョコラッタ",
        "C",
        "フレンド",
    )]);
    let records = vec![
        record("F-032", "フルフルン", "SR"),
        record("F-032-P", "フルフルン", "SR-P"),
        record("F-023 (P)", "ピョコラッタ", "C"),
    ];

    let outcome = fix_records(records, &official, &FixOptions::default());

    let paths: Vec<&str> = outcome
        .records
        .iter()
        .map(|r| r.local_image_path.as_deref().unwrap())
        .collect();
    assert_eq!(
        paths,
        [
            "card_images/F-023-P_C.jpg",
            "card_images/F-032_SR.jpg",
            "card_images/F-032_SR-P.jpg",
        ]
    );
    assert!(
        outcome.records[0]
            .image_url
            .as_deref()
            .unwrap()
            .ends_with("/card/F-023-P_C.jpg")
    );
    assert_eq!(outcome.stats.image_paths_fixed, 3);
}

#[test]
fn records_without_parseable_rarity_keep_their_paths() {
    let official = OfficialIndex::default();
    let mut card = record("F-001", "ハグミント", "???");
    card.local_image_path = Some("card_images/custom.jpg".to_string());

    let outcome = fix_records(vec![card], &official, &FixOptions::default());

    assert_eq!(outcome.stats.image_paths_fixed, 0);
    assert_eq!(
        outcome.records[0].local_image_path.as_deref(),
        Some("card_images/custom.jpg")
    );
}

#[test]
fn promo_notation_restore_rewrites_listed_reprints_only() {
    let official = index(vec![official_card(
        "F-023-P",
        "ピョコラッタ",
        "C",
        "フレンド",
    )]);
    let records = vec![
        // Listed under -P with a base rarity: a promo reprint.
        record("F-023-P", "ピョコラッタ", "C"),
        // Parallel rarity: stays in -P form.
        record("F-032-P", "フルフルン", "SR-P"),
    ];

    let outcome = fix_records(
        records,
        &official,
        &FixOptions {
            restore_promo_notation: true,
            ..FixOptions::default()
        },
    );

    assert_eq!(outcome.stats.numbers_rewritten, 1);
    let numbers: Vec<&str> = outcome.records.iter().map(|r| r.number.as_str()).collect();
    assert_eq!(numbers, ["F-023 (P)", "F-032-P"]);
}

#[test]
fn disabled_passes_leave_records_alone() {
    let official = index(vec![official_card("F-001", "ハグミント", "C", "フレンド")]);
    let records = vec![record("F-001", "はぐみんと", "C")];

    let outcome = fix_records(
        records.clone(),
        &official,
        &FixOptions {
            dedupe: false,
            apply_official_names: false,
            fix_image_paths: false,
            restore_promo_notation: false,
        },
    );

    assert_eq!(outcome.records, records);
    assert_eq!(outcome.stats.names_fixed, 0);
}

#[test]
fn classify_listed_parallel_as_promo_reprint() {
    let official = index(vec![official_card(
        "F-023-P",
        "ピョコラッタ",
        "C",
        "フレンド",
    )]);

    let number = CardNumber::parse("F-023-P").unwrap();
    let kind = classify_variant(&number, Some(&rarity("C")), &official);
    assert_eq!(
        kind,
        NumberKind::PromoReprint {
            base: "F-023".to_string()
        }
    );

    // A parallel rarity overrides the listing.
    let kind = classify_variant(&number, Some(&rarity("C-P")), &official);
    assert_eq!(
        kind,
        NumberKind::Parallel {
            base: "F-023".to_string()
        }
    );
}

#[test]
fn completeness_lists_missing_and_extra_numbers() {
    let official = index(vec![
        official_card("F-001", "ハグミント", "C", "フレンド"),
        official_card("F-002", "カチコーチカ", "R", "フレンド"),
    ]);
    let records = vec![
        record("F-002", "カチコーチカ", "R"),
        record("F-150", "トワイラビット", "SR"),
    ];

    let report = verify_completeness(&records, &official);

    assert_eq!(report.missing, ["F-001"]);
    assert_eq!(report.extra, ["F-150"]);
}
