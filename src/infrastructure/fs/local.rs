//! Local file writes
//!
//! Output documents are written to a temporary file in the destination
//! directory and renamed over the target, so readers never see a partial file.

use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

/// Write `content` to `path` atomically, creating parent directories.
pub fn write_atomic(path: &Path, content: &[u8]) -> std::io::Result<()> {
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(parent)?;

    let mut tmp = NamedTempFile::new_in(parent)?;
    tmp.write_all(content)?;
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|e| e.error)?;

    tracing::debug!(path = %path.display(), bytes = content.len(), "wrote file");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn write_atomic_new_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("AGENTS.md");

        write_atomic(&path, b"BASE\n").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "BASE\n");
    }

    #[test]
    fn write_atomic_overwrites() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("AGENTS.md");
        fs::write(&path, "Original").unwrap();

        write_atomic(&path, b"Replaced").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "Replaced");
    }

    #[test]
    fn write_atomic_creates_parents() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out/nested/prompt.md");

        write_atomic(&path, b"x").unwrap();

        assert!(path.exists());
    }

    #[test]
    fn no_temp_files_left_behind() {
        let dir = tempdir().unwrap();
        write_atomic(&dir.path().join("a.md"), b"x").unwrap();

        let entries: Vec<_> = fs::read_dir(dir.path()).unwrap().collect();
        assert_eq!(entries.len(), 1);
    }
}
