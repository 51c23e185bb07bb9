//! Filesystem helpers for writing database copies.

use std::fs;
use std::io;
use std::path::Path;

/// Directory a file at `path` lives in, created if missing.
///
/// A bare file name resolves to the current directory.
pub fn prepare_parent(path: &Path) -> io::Result<&Path> {
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent)?;
    Ok(parent)
}

/// Whether `candidate` names the existing file `existing`.
///
/// Both sides are resolved through symlinks and relative components.
/// `candidate` may not exist yet; then its parent directory is resolved
/// instead and the file name joined back on.
pub fn same_file(existing: &Path, candidate: &Path) -> bool {
    let Ok(existing) = existing.canonicalize() else {
        return false;
    };
    if let Ok(resolved) = candidate.canonicalize() {
        return resolved == existing;
    }

    let Some(name) = candidate.file_name() else {
        return false;
    };
    let parent = match candidate.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    parent
        .canonicalize()
        .map(|dir| dir.join(name) == existing)
        .unwrap_or(false)
}

/// Move `staged` over `destination`.
///
/// Some platforms refuse to rename onto an existing file; in that case the
/// destination is removed and the rename retried once. The staged file is
/// deleted if both attempts fail.
pub fn replace_file(staged: &Path, destination: &Path) -> io::Result<()> {
    let first = match fs::rename(staged, destination) {
        Ok(()) => return Ok(()),
        Err(err) => err,
    };

    let _ = fs::remove_file(destination);
    fs::rename(staged, destination).map_err(|retry| {
        let _ = fs::remove_file(staged);
        io::Error::new(
            retry.kind(),
            format!("Could not replace {} ({}; {})", destination.display(), first, retry),
        )
    })
}
