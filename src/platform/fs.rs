// IconGen - platform/fs.rs
//
// Filesystem writes for the generated assets: output directory creation and
// whole-file writes. Errors carry the path they failed on.

use crate::util::error::OutputError;
use std::path::{Path, PathBuf};

/// Ensure `dir` exists as a directory, creating missing parents.
///
/// A no-op when the directory is already present. Fails with
/// `NotADirectory` when something other than a directory sits at `dir`.
pub fn ensure_dir(dir: &Path) -> Result<(), OutputError> {
    if dir.is_dir() {
        tracing::debug!(path = %dir.display(), "Output directory already exists");
        return Ok(());
    }
    if dir.exists() {
        return Err(OutputError::NotADirectory {
            path: dir.to_path_buf(),
        });
    }

    std::fs::create_dir_all(dir).map_err(|e| match blocking_file(dir) {
        Some(file) => OutputError::NotADirectory { path: file },
        None => OutputError::CreateDir {
            path: dir.to_path_buf(),
            source: e,
        },
    })?;

    tracing::info!(path = %dir.display(), "Created output directory");
    Ok(())
}

/// The nearest existing ancestor of `dir`, if it is something other than a
/// directory. That is what makes the directory impossible to create.
fn blocking_file(dir: &Path) -> Option<PathBuf> {
    dir.ancestors()
        .skip(1)
        .find(|p| p.exists())
        .filter(|p| !p.is_dir())
        .map(Path::to_path_buf)
}

/// Write `bytes` to `path`, replacing any existing file.
pub fn write_file(path: &Path, bytes: &[u8]) -> Result<(), OutputError> {
    std::fs::write(path, bytes).map_err(|e| OutputError::Write {
        path: path.to_path_buf(),
        source: e,
    })?;
    tracing::debug!(path = %path.display(), bytes = bytes.len(), "File written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_dir_creates_nested() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("a").join("b");
        ensure_dir(&dir).unwrap();
        assert!(dir.is_dir());

        // Second call is a no-op.
        ensure_dir(&dir).unwrap();
    }

    #[test]
    fn test_ensure_dir_rejects_file() {
        let tmp = tempfile::tempdir().unwrap();
        let file = tmp.path().join("icons");
        std::fs::write(&file, b"not a dir").unwrap();

        let result = ensure_dir(&file);
        assert!(
            matches!(result, Err(OutputError::NotADirectory { .. })),
            "expected NotADirectory, got {result:?}"
        );
    }

    #[test]
    fn test_ensure_dir_under_file_reports_blocking_file() {
        let tmp = tempfile::tempdir().unwrap();
        let file = tmp.path().join("blocker");
        std::fs::write(&file, b"plain file").unwrap();

        let result = ensure_dir(&file.join("icons").join("nested"));
        match result {
            Err(OutputError::NotADirectory { path }) => assert_eq!(path, file),
            other => panic!("expected NotADirectory, got {other:?}"),
        }
    }

    #[test]
    fn test_write_file_overwrites() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("out.png");
        write_file(&path, b"first version").unwrap();
        write_file(&path, b"second").unwrap();
        assert_eq!(std::fs::read(&path).unwrap(), b"second");
    }

    #[test]
    fn test_write_file_missing_parent_fails() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("missing").join("out.png");
        let result = write_file(&path, b"data");
        assert!(
            matches!(result, Err(OutputError::Write { .. })),
            "expected Write error, got {result:?}"
        );
    }
}
