//! Atomic output writes.

use std::fs;
use std::io::Write;
use std::path::Path;

use crate::error::{Error, Result};

/// Replace `path` with `content`.
///
/// The text is written to a temporary file next to `path` and renamed over
/// it, so readers never observe a truncated file. Missing parent
/// directories are created first. A replaced file keeps its permissions;
/// a new file gets the usual `0o666` minus the process umask.
pub fn write_atomic(path: &Path, content: &str) -> Result<()> {
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent).map_err(|e| Error::write(path, e))?;

    let existing = fs::metadata(path).ok().map(|m| m.permissions());

    let mut builder = tempfile::Builder::new();
    // Temporary files are otherwise created owner-only.
    #[cfg(unix)]
    if existing.is_none() {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(fs::Permissions::from_mode(0o666));
    }

    let mut tmp = builder
        .tempfile_in(parent)
        .map_err(|e| Error::write(path, e))?;
    tmp.write_all(content.as_bytes())
        .and_then(|_| tmp.as_file().sync_all())
        .map_err(|e| Error::write(path, e))?;

    if let Some(permissions) = existing {
        tmp.as_file()
            .set_permissions(permissions)
            .map_err(|e| Error::write(path, e))?;
    }

    tmp.persist(path).map_err(|e| Error::write(path, e.error))?;
    Ok(())
}
