use carddex_core::image::{image_file_name, local_image_path};
use carddex_core::number::CardNumber;
use carddex_core::rarity::Rarity;

#[test]
fn regular_card_filename() {
    let n = CardNumber::parse("F-001").unwrap();
    let r: Rarity = "C".parse().unwrap();
    assert_eq!(image_file_name(&n, &r), "F-001_C.jpg");
    assert_eq!(local_image_path(&n, &r), "card_images/F-001_C.jpg");
}

#[test]
fn parallel_suffix_rides_on_the_rarity() {
    let n = CardNumber::parse("F-032-P").unwrap();
    let r: Rarity = "SR-P".parse().unwrap();
    assert_eq!(image_file_name(&n, &r), "F-032_SR-P.jpg");
}

#[test]
fn parallel_filename_marks_rarity_even_from_base_token() {
    // The suffix placement comes from the number's kind, not from
    // whether the rarity string happened to carry it already.
    let n = CardNumber::parse("F-070-P").unwrap();
    let r: Rarity = "R".parse().unwrap();
    assert_eq!(image_file_name(&n, &r), "F-070_R-P.jpg");
}

#[test]
fn promo_reprint_suffix_rides_on_the_number() {
    let n = CardNumber::parse("F-023 (P)").unwrap();
    let r: Rarity = "C".parse().unwrap();
    assert_eq!(image_file_name(&n, &r), "F-023-P_C.jpg");

    // Promo reprints share the base rarity; a stray -P on the rarity
    // token is dropped rather than doubled up.
    let r: Rarity = "C-P".parse().unwrap();
    assert_eq!(image_file_name(&n, &r), "F-023-P_C.jpg");
}
