//! Trust holder snapshot persistence.
//!
//! File format:
//! ```json
//! { "version": 1, "holder": { ... TrustHolder ... } }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TrustError};
use crate::holder::TrustHolder;

// ── File format constants ─────────────────────────────────────────────────────

const SNAPSHOT_FILE_VERSION: u32 = 1;

// ── On-disk structure ─────────────────────────────────────────────────────────

/// Wrapper written to disk for each snapshot.
#[derive(Debug, Serialize, Deserialize)]
struct SnapshotFile {
    /// Format version number.
    version: u32,
    /// The stored holder.
    holder: TrustHolder,
}

// ── Save / load ───────────────────────────────────────────────────────────────

/// Persist a holder snapshot to `path`, overwriting any existing file.
///
/// # Errors
///
/// Returns `TrustError::SerializationError` if serialization fails, or
/// `TrustError::Io` for filesystem errors.
pub fn save_holder(path: impl AsRef<Path>, holder: &TrustHolder) -> Result<()> {
    let file = SnapshotFile {
        version: SNAPSHOT_FILE_VERSION,
        holder: holder.clone(),
    };

    let json = serde_json::to_string_pretty(&file)
        .map_err(|e| TrustError::SerializationError(e.to_string()))?;

    std::fs::write(path.as_ref(), json.as_bytes())?;

    Ok(())
}

/// Load a holder snapshot from `path`.
///
/// # Errors
///
/// Returns `TrustError::NotFound` if no file exists at `path`,
/// `TrustError::InvalidFileFormat` for malformed files or unsupported
/// versions, or `TrustError::Io` for filesystem errors.
pub fn load_holder(path: impl AsRef<Path>) -> Result<TrustHolder> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(TrustError::NotFound(format!(
            "holder snapshot not found: {}",
            path.display()
        )));
    }

    let bytes = std::fs::read(path)?;
    let file: SnapshotFile = serde_json::from_slice(&bytes).map_err(|e| {
        TrustError::InvalidFileFormat(format!(
            "failed to parse snapshot file {}: {e}",
            path.display()
        ))
    })?;

    if file.version != SNAPSHOT_FILE_VERSION {
        return Err(TrustError::InvalidFileFormat(format!(
            "unsupported snapshot version: {}",
            file.version
        )));
    }

    Ok(file.holder)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
