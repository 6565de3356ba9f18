//! Writing krb5.conf files to disk

use crate::model::Configuration;
use crate::writer::{self, ConfigWriter};
use crate::{Error, Result};
use fs2::FileExt;
use std::fs::{self, File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;

/// Create (or truncate) `path` and write `config` into it.
///
/// A failed write leaves the partial file in place; removing it is up to the
/// caller. Use [`write_atomic`] when the target must never be partial.
pub fn write_file(config: &Configuration, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    tracing::debug!("Writing krb5.conf to {}", path.display());

    let file = File::create(path).map_err(|e| Error::io(path, e))?;
    let mut out = ConfigWriter::new(BufWriter::new(file));
    out.write(config).inspect_err(|e| {
        tracing::warn!("Failed to write {}: {}", path.display(), e);
    })?;

    let file = out
        .into_inner()
        .into_inner()
        .map_err(|e| Error::io(path, e.into_error()))?;
    file.sync_all().map_err(|e| Error::io(path, e))?;
    Ok(())
}

/// Write `config` to `path` atomically.
///
/// Renders in memory, writes a locked temp file in the same directory and
/// renames it over `path`. Missing parent directories are created. On failure
/// `path` keeps its previous content.
pub fn write_atomic(config: &Configuration, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    tracing::debug!("Atomically writing krb5.conf to {}", path.display());

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
    }

    let content = writer::to_string(config);

    // Same directory keeps the rename on one filesystem.
    let temp_name = format!(
        ".{}.{}.tmp",
        path.file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_default(),
        std::process::id()
    );
    let temp_path = path.with_file_name(&temp_name);

    let result = write_locked(&temp_path, path, content.as_bytes())
        .and_then(|()| fs::rename(&temp_path, path).map_err(|e| Error::io(path, e)));

    if let Err(e) = &result {
        tracing::warn!("Atomic write to {} failed: {}", path.display(), e);
        let _ = fs::remove_file(&temp_path);
    }
    result
}

fn write_locked(temp_path: &Path, target: &Path, content: &[u8]) -> Result<()> {
    let mut temp_file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(temp_path)
        .map_err(|e| Error::io(temp_path, e))?;

    temp_file.lock_exclusive().map_err(|_| Error::Lock {
        path: target.to_path_buf(),
    })?;

    temp_file
        .write_all(content)
        .map_err(|e| Error::io(temp_path, e))?;
    temp_file.sync_all().map_err(|e| Error::io(temp_path, e))?;

    temp_file.unlock().map_err(|_| Error::Lock {
        path: target.to_path_buf(),
    })?;
    Ok(())
}
