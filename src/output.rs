//! Output document writing
//!
//! Documents are written to a temporary sibling and renamed into place, so a
//! failed run never leaves a half-written file that looks complete.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Write `contents` to `dir/filename` atomically, creating `dir` if absent.
///
/// Returns the final path of the document.
pub fn write_document(dir: &Path, filename: &str, contents: &str) -> io::Result<PathBuf> {
    fs::create_dir_all(dir)?;
    let path = dir.join(filename);
    let tmp = dir.join(format!("{}.tmp", filename));
    fs::write(&tmp, contents)?;
    fs::rename(&tmp, &path)?;
    Ok(path)
}

/// Resolve the output directory against the invocation root.
pub fn resolve_output_dir(root: &Path, output_dir: &Path) -> PathBuf {
    if output_dir.is_absolute() {
        output_dir.to_path_buf()
    } else {
        root.join(output_dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_creates_output_dir() {
        let dir = TempDir::new().unwrap();
        let out_dir = dir.path().join("ScriptOutput");
        let path = write_document(&out_dir, "CodeSummary.md", "hello").unwrap();
        assert_eq!(fs::read_to_string(path).unwrap(), "hello");
    }

    #[test]
    fn test_overwrites_previous_document() {
        let dir = TempDir::new().unwrap();
        write_document(dir.path(), "out.md", "first").unwrap();
        let path = write_document(dir.path(), "out.md", "second").unwrap();
        assert_eq!(fs::read_to_string(path).unwrap(), "second");
    }

    #[test]
    fn test_no_temp_file_left_behind() {
        let dir = TempDir::new().unwrap();
        write_document(dir.path(), "out.md", "content").unwrap();
        assert!(!dir.path().join("out.md.tmp").exists());
    }
}
