//! Reading the target file and replacing it in one step.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use tempfile::NamedTempFile;
use tracing::{debug, warn};

use crate::error::{PruneError, Result};

/// Read the whole file and decode it as UTF-8.
pub fn read_text(path: &Path) -> Result<String> {
    let bytes = fs::read(path).map_err(|source| PruneError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), bytes = bytes.len(), "Read target");

    String::from_utf8(bytes).map_err(|source| PruneError::Decode {
        path: path.to_path_buf(),
        source,
    })
}

/// Replace `path` with `content` via a sibling temp file and a rename.
///
/// Readers see either the old file or the new one, never a partial write.
/// The original permissions are carried over.
pub fn replace_atomic(path: &Path, content: &str) -> Result<()> {
    let write_err = |source: io::Error| PruneError::Write {
        path: path.to_path_buf(),
        source,
    };

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir).map_err(write_err)?;
    tmp.write_all(content.as_bytes()).map_err(write_err)?;
    tmp.as_file().sync_all().map_err(write_err)?;

    match fs::metadata(path) {
        Ok(meta) => {
            if let Err(e) = fs::set_permissions(tmp.path(), meta.permissions()) {
                warn!(error = %e, "Could not copy permissions onto replacement");
            }
        }
        Err(e) => warn!(error = %e, "Could not stat original before replace"),
    }

    // Dropping the PersistError removes the temp file.
    tmp.persist(path).map_err(|e| write_err(e.error))?;

    debug!(path = %path.display(), bytes = content.len(), "Atomic replace completed");
    Ok(())
}
