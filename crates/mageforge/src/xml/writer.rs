//! Idempotent file output for generated documents

use std::path::Path;

use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::xml::model::Document;

/// Serialize `document` to `path`.
///
/// An existing file is left untouched unless `overwrite` is set; that case
/// is a successful no-op so generation commands can be re-run without
/// clobbering hand-edited output. Returns whether the file was written.
pub fn write_document(document: &Document, path: &Path, overwrite: bool) -> Result<bool> {
    write_text(path, &document.serialize(), overwrite)
}

pub(crate) fn write_text(path: &Path, contents: &str, overwrite: bool) -> Result<bool> {
    if path.exists() && !overwrite {
        debug!(path = %path.display(), "file exists, skipping");
        return Ok(false);
    }

    create_parent_dirs(path)?;
    std::fs::write(path, contents).map_err(|source| Error::io(path, source))?;
    info!(path = %path.display(), "wrote file");
    Ok(true)
}

#[cfg(unix)]
fn create_parent_dirs(path: &Path) -> Result<()> {
    use std::os::unix::fs::DirBuilderExt;

    let Some(dir) = path.parent() else {
        return Ok(());
    };
    if dir.as_os_str().is_empty() || dir.is_dir() {
        return Ok(());
    }
    std::fs::DirBuilder::new()
        .recursive(true)
        .mode(0o755)
        .create(dir)
        .map_err(|source| Error::io(dir, source))
}

#[cfg(not(unix))]
fn create_parent_dirs(path: &Path) -> Result<()> {
    let Some(dir) = path.parent() else {
        return Ok(());
    };
    if dir.as_os_str().is_empty() || dir.is_dir() {
        return Ok(());
    }
    std::fs::create_dir_all(dir).map_err(|source| Error::io(dir, source))
}
