//! Text I/O, atomic writes, and the backed-up writer

use std::fs::{self, OpenOptions};
use std::io::Write;

use fs2::FileExt;

use crate::{Error, NormalizedPath, Result};

/// Suffix of the sibling file holding the original bytes during a backed-up write.
pub const BACKUP_SUFFIX: &str = ".bak";

/// Write content atomically to a file with locking.
///
/// Writes to a temp file in the same directory, then renames it over the
/// destination, so readers never observe a partial write.
pub fn write_atomic(path: &NormalizedPath, content: &[u8]) -> Result<()> {
    let native_path = path.to_native();

    if let Some(parent) = native_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
    }

    let temp_name = format!(
        ".{}.{}.tmp",
        path.file_name().unwrap_or_default(),
        std::process::id()
    );
    let temp_path = native_path.with_file_name(&temp_name);

    let mut temp_file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(&temp_path)
        .map_err(|e| Error::io(&temp_path, e))?;

    temp_file
        .lock_exclusive()
        .map_err(|_| Error::LockFailed {
            path: native_path.clone(),
        })?;

    let written = temp_file
        .write_all(content)
        .and_then(|_| temp_file.sync_all());
    if let Err(e) = written {
        let _ = fs::remove_file(&temp_path);
        return Err(Error::io(&temp_path, e));
    }

    temp_file.unlock().map_err(|_| Error::LockFailed {
        path: native_path.clone(),
    })?;

    fs::rename(&temp_path, &native_path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        Error::io(&native_path, e)
    })
}

/// Read text content from a file.
pub fn read_text(path: &NormalizedPath) -> Result<String> {
    let native_path = path.to_native();
    fs::read_to_string(&native_path).map_err(|e| Error::io(&native_path, e))
}

/// Write text content to a file atomically.
pub fn write_text(path: &NormalizedPath, content: &str) -> Result<()> {
    write_atomic(path, content.as_bytes())
}

/// Copy `from` to `to`, creating the destination's parent directories.
pub fn copy_file(from: &NormalizedPath, to: &NormalizedPath) -> Result<u64> {
    let dest = to.to_native();
    if let Some(parent) = dest.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
    }
    fs::copy(from.to_native(), &dest).map_err(|e| Error::io(from.to_native(), e))
}

/// Overwrite an existing file, keeping a `.bak` copy until the write succeeds.
///
/// On failure the destination is restored from the backup and
/// [`Error::WriteFailed`] is returned.
pub fn write_with_backup(path: &NormalizedPath, content: &str) -> Result<()> {
    write_with_backup_using(path, content, |dest, bytes| write_atomic(dest, bytes))
}

/// [`write_with_backup`] with the overwrite step supplied by the caller.
pub fn write_with_backup_using<F>(path: &NormalizedPath, content: &str, write: F) -> Result<()>
where
    F: FnOnce(&NormalizedPath, &[u8]) -> Result<()>,
{
    let backup = path.with_suffix(BACKUP_SUFFIX);
    tracing::debug!(backup = %backup, "Creating backup");
    fs::copy(path.to_native(), backup.to_native()).map_err(|e| Error::io(path.to_native(), e))?;

    match write(path, content.as_bytes()) {
        Ok(()) => {
            tracing::debug!(path = %path, "Wrote updated file");
            fs::remove_file(backup.to_native()).map_err(|e| Error::io(backup.to_native(), e))?;
            tracing::debug!("Removed backup file");
            Ok(())
        }
        Err(source) => {
            tracing::warn!(path = %path, error = %source, "Write failed, restoring from backup");
            let restored = fs::copy(backup.to_native(), path.to_native()).is_ok();
            if restored {
                let _ = fs::remove_file(backup.to_native());
            } else {
                tracing::warn!(backup = %backup, "Restore failed, backup left in place");
            }
            Err(Error::WriteFailed {
                path: path.to_native(),
                restored,
                source: Box::new(source),
            })
        }
    }
}
