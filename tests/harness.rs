//! Test harness for pare integration tests

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

pub struct TestTree {
    dir: TempDir,
}

impl TestTree {
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        Self { dir }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn add_file(&self, path: &str, content: &str) -> PathBuf {
        let full_path = self.dir.path().join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        fs::write(&full_path, content).expect("Failed to write file");
        full_path
    }

    /// Read the summary document produced by a run in this tree.
    pub fn summary(&self) -> String {
        fs::read_to_string(self.path().join("ScriptOutput/CodeSummary.md"))
            .expect("Failed to read CodeSummary.md")
    }

    /// Read the tree document produced by a run in this tree.
    pub fn tree_document(&self) -> String {
        fs::read_to_string(self.path().join("ScriptOutput/FileAndFolderSummary.md"))
            .expect("Failed to read FileAndFolderSummary.md")
    }
}

pub fn run_pare(dir: &Path, args: &[&str]) -> (String, String, bool) {
    let binary = env!("CARGO_BIN_EXE_pare");
    let output = Command::new(binary)
        .args(args)
        .current_dir(dir)
        .output()
        .expect("Failed to run pare");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let success = output.status.success();

    (stdout, stderr, success)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_harness_creates_temp_dir() {
        let tree = TestTree::new();
        assert!(tree.path().exists());
    }

    #[test]
    fn test_harness_add_file() {
        let tree = TestTree::new();
        let file_path = tree.add_file("src/app.js", "let x = 1;");
        assert!(file_path.exists());
    }
}
