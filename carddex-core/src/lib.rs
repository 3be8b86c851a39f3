//! Core data model for the carddex card database.
//!
//! This crate defines the card identifier model (with promo/parallel
//! classification and canonical normalization), the rarity type, the
//! persisted card record schema, and the image filename convention.
//! It has no I/O; loading and persistence live in `carddex-store` and
//! `carddex-ref`.

pub mod image;
pub mod number;
pub mod rarity;
pub mod record;

pub use image::{
    IMAGE_DIR, IMAGE_URL_BASE, image_file_name, image_file_name_with, local_image_path,
};
pub use number::{CardNumber, NumberError, NumberKind, SortKey, normalize, sort_key};
pub use rarity::{Rarity, RarityError, RarityGrade};
pub use record::{CardCost, CardRecord, PowerValue};
