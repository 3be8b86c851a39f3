//! Persisted JSON card store.
//!
//! The store is a single pretty-printed JSON file holding an ordered
//! sequence of card records, rewritten whole on every save. Consistency
//! rests on one rule: a sibling backup copy is written *before* any
//! destructive rewrite, and a backup failure aborts the save before the
//! primary file is touched.

pub mod error;
pub mod store;

pub use error::StoreError;
pub use store::{backup_path, load_records, save_records, save_with_backup};
