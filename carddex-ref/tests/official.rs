use std::io::Write;

use carddex_ref::{OfficialIndex, RefError, load_official_list};

fn write_temp(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn load_array_shape() {
    let file = write_temp(
        r#"[
            {"card_number": "F-001", "card_name": "バードン", "rarity": "C", "card_type": "ふれんど", "color": "赤", "cost": 1, "power": 1000},
            {"card_number": "F-101-P", "card_name": "オーバル", "rarity": "SEC", "card_type": "ふれんど"}
        ]"#,
    );
    let cards = load_official_list(file.path()).unwrap();
    assert_eq!(cards.len(), 2);
    assert_eq!(cards[0].card_number, "F-001");
    assert_eq!(cards[0].card_name, "バードン");
    assert_eq!(cards[0].power, Some(1000));
    assert_eq!(cards[1].rarity, "SEC");
}

#[test]
fn load_keyed_shape_fills_numbers_from_keys() {
    let file = write_temp(
        r#"{
            "F-013": {"name": "るくそー", "rarity": "R", "type": "ふれんど", "color": "赤", "cost": 4, "power": 5000},
            "F-013-P": {"name": "るくそー", "rarity": "R", "type": "ふれんど"}
        }"#,
    );
    let cards = load_official_list(file.path()).unwrap();
    assert_eq!(cards.len(), 2);
    assert!(cards.iter().any(|c| c.card_number == "F-013"));
    assert!(cards.iter().any(|c| c.card_number == "F-013-P"));
}

#[test]
fn missing_file_is_fatal() {
    let err = load_official_list(std::path::Path::new("no/such/list.json")).unwrap_err();
    assert!(matches!(err, RefError::Io { .. }));
}

#[test]
fn index_is_keyed_by_canonical_number() {
    let file = write_temp(
        r#"[
            {"card_number": "F-023 (P)", "card_name": "ユピ", "rarity": "C", "card_type": "ふれんど"},
            {"card_number": "F-023", "card_name": "ユピ", "rarity": "C", "card_type": "ふれんど"}
        ]"#,
    );
    let index = OfficialIndex::from_cards(load_official_list(file.path()).unwrap()).unwrap();
    assert_eq!(index.len(), 2);
    assert!(index.contains("F-023"));
    // The (P) notation indexes under the canonical -P form.
    assert!(index.contains("F-023-P"));
    assert!(!index.contains("F-023 (P)"));
}

#[test]
fn index_rejects_duplicate_canonical_numbers() {
    let file = write_temp(
        r#"[
            {"card_number": "F-016 (P)", "card_name": "くらげ坊", "rarity": "SR", "card_type": "ふれんど"},
            {"card_number": "F-016-P", "card_name": "くらげ坊", "rarity": "SR", "card_type": "ふれんど"}
        ]"#,
    );
    let err = OfficialIndex::from_cards(load_official_list(file.path()).unwrap()).unwrap_err();
    assert!(matches!(err, RefError::DuplicateNumber(n) if n == "F-016-P"));
}

#[test]
fn index_iterates_in_canonical_order() {
    let file = write_temp(
        r#"[
            {"card_number": "F-101", "card_name": "オーバル", "rarity": "SEC", "card_type": "ふれんど"},
            {"card_number": "F-001", "card_name": "バードン", "rarity": "C", "card_type": "ふれんど"}
        ]"#,
    );
    let index = OfficialIndex::from_cards(load_official_list(file.path()).unwrap()).unwrap();
    let numbers: Vec<&str> = index.numbers().collect();
    assert_eq!(numbers, vec!["F-001", "F-101"]);
}
