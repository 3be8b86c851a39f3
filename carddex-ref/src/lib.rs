//! Official ground-truth card reference.
//!
//! Loads the official cardlist (a local JSON file or a remote fetch) and
//! indexes it by canonical number for reconciliation. The reference is
//! assumed authoritative over the locally curated store, but it may be
//! incomplete — entries present locally but absent here are
//! informational, not defects.

pub mod error;
pub mod index;
pub mod official;

pub use error::RefError;
pub use index::OfficialIndex;
pub use official::{OfficialCard, fetch_official_list, load_official_list};
