//! Destination directory and file management for captured frames.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::CaptureError;

/// Upper bound on extension-suffix attempts before the original path is
/// clobbered.
const MAX_COLLISION_SUFFIXES: usize = 8;

/// Ensure `path` exists as a directory, creating it when absent.
///
/// Idempotent. An existing non-directory entry at `path` is an error; no
/// directory is fabricated next to it.
pub fn ensure_dir(path: &Path) -> Result<(), CaptureError> {
    if path.is_dir() {
        return Ok(());
    }
    if path.exists() {
        tracing::error!(
            "capture path '{}' exists but is not a directory",
            path.display()
        );
        return Err(CaptureError::DirectoryUnavailable {
            path: path.to_owned(),
            source: None,
        });
    }
    fs::create_dir_all(path).map_err(|source| {
        tracing::error!(
            "capture path '{}' does not exist and could not be created: {source}",
            path.display()
        );
        CaptureError::DirectoryUnavailable {
            path: path.to_owned(),
            source: Some(source),
        }
    })
}

/// Pick the path an encoded frame will be written to, stepping around
/// existing files.
///
/// Appends the format extension up to eight times looking for a free name.
/// When every candidate is taken the original path is deleted and reused.
pub fn resolve_write_path(path: &Path, extension: &str) -> Result<PathBuf, CaptureError> {
    if !path.exists() {
        return Ok(path.to_owned());
    }
    let mut candidate = path.as_os_str().to_os_string();
    for _ in 0..MAX_COLLISION_SUFFIXES {
        candidate.push(extension);
        let next = PathBuf::from(&candidate);
        if !next.exists() {
            return Ok(next);
        }
    }
    fs::remove_file(path).map_err(|source| CaptureError::WriteFailed {
        path: path.to_owned(),
        source,
    })?;
    Ok(path.to_owned())
}

/// Write encoded frame bytes to disk, applying the collision policy first.
/// Returns the path actually written.
pub fn write_frame(path: &Path, extension: &str, bytes: &[u8]) -> Result<PathBuf, CaptureError> {
    let target = resolve_write_path(path, extension)?;
    fs::write(&target, bytes).map_err(|source| CaptureError::WriteFailed {
        path: target.clone(),
        source,
    })?;
    Ok(target)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ensure_dir_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("captures");
        ensure_dir(&target).expect("first call creates");
        assert!(target.is_dir());
        ensure_dir(&target).expect("second call is a no-op");
    }

    #[test]
    fn ensure_dir_rejects_regular_file() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("captures");
        fs::write(&target, b"not a directory").unwrap();
        let err = ensure_dir(&target).expect_err("file in the way");
        assert!(matches!(err, CaptureError::DirectoryUnavailable { .. }));
        assert!(target.is_file(), "file must be left untouched");
    }

    #[test]
    fn free_path_is_used_unchanged() {
        let dir = tempfile::tempdir().unwrap();
        let base = dir.path().join("shot.PNG");
        let resolved = resolve_write_path(&base, ".PNG").unwrap();
        assert_eq!(resolved, base);
    }

    /// `base` plus `n` extra copies of the extension appended.
    fn suffixed(base: &Path, ext: &str, n: usize) -> PathBuf {
        let mut name = base.as_os_str().to_os_string();
        for _ in 0..n {
            name.push(ext);
        }
        PathBuf::from(name)
    }

    #[test]
    fn seven_collisions_leave_room_for_the_eighth_suffix() {
        let dir = tempfile::tempdir().unwrap();
        let base = dir.path().join("shot.PNG");
        fs::write(&base, b"x").unwrap();
        for n in 1..=7 {
            fs::write(suffixed(&base, ".PNG", n), b"x").unwrap();
        }
        let resolved = resolve_write_path(&base, ".PNG").unwrap();
        assert_eq!(resolved, suffixed(&base, ".PNG", 8));
        assert!(base.exists(), "original must survive");
    }

    #[test]
    fn eight_collisions_clobber_the_original() {
        let dir = tempfile::tempdir().unwrap();
        let base = dir.path().join("shot.PNG");
        fs::write(&base, b"x").unwrap();
        for n in 1..=8 {
            fs::write(suffixed(&base, ".PNG", n), b"x").unwrap();
        }
        let resolved = resolve_write_path(&base, ".PNG").unwrap();
        assert_eq!(resolved, base);
        assert!(!base.exists(), "original is deleted for reuse");
    }

    #[test]
    fn write_frame_returns_the_written_path() {
        let dir = tempfile::tempdir().unwrap();
        let base = dir.path().join("shot.PNG");
        fs::write(&base, b"old").unwrap();
        let written = write_frame(&base, ".PNG", b"new").unwrap();
        assert_eq!(written, suffixed(&base, ".PNG", 1));
        assert_eq!(fs::read(&written).unwrap(), b"new");
    }
}
