//! Load and save the card store file.

use std::fs;
use std::path::{Path, PathBuf};

use carddex_core::CardRecord;

use crate::error::StoreError;

/// Load all card records from a store file.
///
/// A missing or unreadable file is fatal for the invoking batch job;
/// there is no partial-data fallback.
pub fn load_records(path: &Path) -> Result<Vec<CardRecord>, StoreError> {
    let contents = fs::read_to_string(path).map_err(|e| StoreError::io(path, e))?;
    let records: Vec<CardRecord> =
        serde_json::from_str(&contents).map_err(|e| StoreError::json(path, e))?;
    log::debug!("Loaded {} records from {}", records.len(), path.display());
    Ok(records)
}

/// Write records to a store file, pretty-printed, without a backup.
///
/// Non-Latin text is written as-is; serde_json does not ASCII-escape.
pub fn save_records(path: &Path, records: &[CardRecord]) -> Result<(), StoreError> {
    let contents = serde_json::to_string_pretty(records).map_err(|e| StoreError::json(path, e))?;
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|e| StoreError::io(parent, e))?;
    }
    fs::write(path, contents).map_err(|e| StoreError::io(path, e))?;
    Ok(())
}

/// The sibling backup path for a store file: `card_data.json` →
/// `card_data_backup.json`. Each save overwrites the previous backup;
/// there is no rotation.
pub fn backup_path(path: &Path) -> PathBuf {
    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("store");
    path.with_file_name(format!("{stem}_backup.json"))
}

/// Rewrite a store file, copying the current contents to the sibling
/// backup first.
///
/// The backup-then-write ordering is a correctness requirement: if the
/// backup copy fails, the save aborts before the primary is touched.
/// Returns the backup path, or `None` when there was no prior file to
/// back up.
pub fn save_with_backup(
    path: &Path,
    records: &[CardRecord],
) -> Result<Option<PathBuf>, StoreError> {
    let backup = if path.exists() {
        let backup = backup_path(path);
        fs::copy(path, &backup).map_err(|e| StoreError::Backup {
            path: backup.display().to_string(),
            source: e,
        })?;
        log::info!("Backed up {} to {}", path.display(), backup.display());
        Some(backup)
    } else {
        None
    };

    save_records(path, records)?;
    log::info!("Saved {} records to {}", records.len(), path.display());
    Ok(backup)
}
