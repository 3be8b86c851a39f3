//! Card image filename convention.
//!
//! The `-P` token rides on whichever component differs from the base
//! card: a parallel has its own rarity, so the rarity token carries it
//! (`F-032_SR-P.jpg`); a promo reprint shares the base rarity, so the
//! number carries it (`F-023-P_C.jpg`). Regular prints are plain
//! `{number}_{rarity}.jpg`.

use crate::number::{CardNumber, NumberKind};
use crate::rarity::Rarity;

/// Directory under the data root where card images are stored.
pub const IMAGE_DIR: &str = "card_images";

/// Where the official site hosts card scans.
pub const IMAGE_URL_BASE: &str = "https://mememe-tcg.com/assets/images/card";

/// The canonical image filename for a card.
pub fn image_file_name(number: &CardNumber, rarity: &Rarity) -> String {
    image_file_name_with(number.base(), number.kind(), rarity)
}

/// The canonical image filename given an explicit classification.
///
/// Fix passes use this form when a record's surface notation disagrees
/// with its actual kind (an official-listed `-P` number that is really
/// a promo reprint).
pub fn image_file_name_with(base: &str, kind: &NumberKind, rarity: &Rarity) -> String {
    match kind {
        NumberKind::Regular => format!("{base}_{}.jpg", rarity),
        NumberKind::PromoReprint { .. } => format!("{base}-P_{}.jpg", rarity.as_base()),
        NumberKind::Parallel { .. } => format!("{base}_{}.jpg", rarity.as_parallel()),
    }
}

/// The store-relative path for a card image.
pub fn local_image_path(number: &CardNumber, rarity: &Rarity) -> String {
    format!("{IMAGE_DIR}/{}", image_file_name(number, rarity))
}
