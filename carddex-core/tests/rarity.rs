use carddex_core::rarity::{Rarity, RarityError, RarityGrade};

#[test]
fn parse_plain_grades() {
    for (s, grade) in [
        ("C", RarityGrade::Common),
        ("U", RarityGrade::Uncommon),
        ("R", RarityGrade::Rare),
        ("SR", RarityGrade::SuperRare),
        ("SEC", RarityGrade::Secret),
    ] {
        let r: Rarity = s.parse().unwrap();
        assert_eq!(r.grade, grade);
        assert!(!r.parallel);
        assert_eq!(r.to_string(), s);
    }
}

#[test]
fn parse_parallel_suffix() {
    let r: Rarity = "SR-P".parse().unwrap();
    assert_eq!(r.grade, RarityGrade::SuperRare);
    assert!(r.parallel);
    assert_eq!(r.to_string(), "SR-P");
}

#[test]
fn unknown_rarity_is_an_error() {
    let err = "XX".parse::<Rarity>().unwrap_err();
    assert_eq!(err, RarityError::Unknown("XX".to_string()));
}

#[test]
fn base_and_parallel_conversions() {
    let r: Rarity = "R-P".parse().unwrap();
    assert_eq!(r.as_base().to_string(), "R");
    assert_eq!(r.as_base().as_parallel(), r);
}

#[test]
fn serde_round_trip_as_string() {
    let r: Rarity = "SEC-P".parse().unwrap();
    let json = serde_json::to_string(&r).unwrap();
    assert_eq!(json, "\"SEC-P\"");
    let back: Rarity = serde_json::from_str(&json).unwrap();
    assert_eq!(back, r);
}
