//! Configuration for the summarizer and the tree renderer
//!
//! The original tool hardcoded all of this at build time; here the same
//! values are compile-time defaults that the CLI may override at startup.

use std::collections::HashMap;
use std::path::PathBuf;

use crate::language::Language;

/// Name of the summary document inside the output directory.
pub const SUMMARY_FILENAME: &str = "CodeSummary.md";

/// Name of the rendered tree document inside the output directory.
pub const TREE_FILENAME: &str = "FileAndFolderSummary.md";

/// Default output subdirectory, created under the invocation root.
pub const OUTPUT_DIR: &str = "ScriptOutput";

/// Default depth bound for the tree renderer.
pub const TREE_DEPTH: usize = 2;

/// How ignore-list tokens are matched against entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IgnoreMode {
    /// Token appears anywhere within the file's relative path.
    ///
    /// This is the more permissive variant and deliberately over-matches:
    /// a folder `Migrations2` is excluded because it contains `Migrations`.
    #[default]
    Substring,
    /// Token equals a path component exactly.
    ///
    /// No over-match, but an ignored folder still excludes everything
    /// under it.
    BaseName,
}

/// Configuration for one summary run.
#[derive(Debug, Clone)]
pub struct SummaryConfig {
    /// Extension (with leading dot, lowercased) to language map.
    pub extensions: HashMap<String, Language>,
    /// Literal ignore tokens.
    pub ignore: Vec<String>,
    pub ignore_mode: IgnoreMode,
    /// Remove all whitespace within each kept line.
    pub collapse_whitespace: bool,
    /// Strip comments before normalizing.
    pub strip_comments: bool,
    /// Directory the summary document is written into.
    pub output_dir: PathBuf,
}

impl Default for SummaryConfig {
    fn default() -> Self {
        Self {
            extensions: default_extensions(),
            ignore: default_ignore_list(),
            ignore_mode: IgnoreMode::Substring,
            collapse_whitespace: true,
            strip_comments: true,
            output_dir: PathBuf::from(OUTPUT_DIR),
        }
    }
}

/// Configuration for one tree-rendering run.
#[derive(Debug, Clone)]
pub struct TreeConfig {
    /// Maximum number of levels below each target; `None` = unlimited.
    pub max_depth: Option<usize>,
    /// Folder/file names skipped entirely (exact base-name match).
    pub ignore: Vec<String>,
    pub output_dir: PathBuf,
}

impl Default for TreeConfig {
    fn default() -> Self {
        Self {
            max_depth: Some(TREE_DEPTH),
            ignore: default_tree_ignore_list(),
            output_dir: PathBuf::from(OUTPUT_DIR),
        }
    }
}

/// The supported extensions and their fence tags.
pub fn default_extensions() -> HashMap<String, Language> {
    [
        (".js", Language::JavaScript),
        (".html", Language::Html),
        (".ts", Language::TypeScript),
        (".java", Language::Java),
        (".py", Language::Python),
        (".go", Language::Go),
        (".rb", Language::Ruby),
        (".cpp", Language::Cpp),
        (".c", Language::C),
        (".php", Language::Php),
        (".sh", Language::Bash),
        (".cs", Language::CSharp),
        (".css", Language::Css),
        (".h", Language::Cpp),
        (".hpp", Language::Cpp),
    ]
    .into_iter()
    .map(|(ext, lang)| (ext.to_string(), lang))
    .collect()
}

/// Files and folders excluded from the summary.
pub fn default_ignore_list() -> Vec<String> {
    [
        ".git",
        ".metadata",
        "libraries",
        "gradle",
        ".angular",
        ".vscode",
        "node_modules",
        ".editorconfig",
        ".gitignore",
        "Migrations",
        "Debug",
        "test",
        "libs",
        "angular.json",
        "package-lock.json",
        "package.json",
        "README.md",
        "Dependencies",
        "Connected Services",
        "tsconfig.app.json",
        "tsconfig.json",
        "tsconfig.spec.json",
        "CodeSummary.md",
        ".mvn",
        ".settings",
        "build",
        ".idea",
        ".dart_tool",
        "io",
        "plugins",
        "flutter",
        "windows",
        "ScriptOutput",
        "target",
    ]
    .into_iter()
    .map(str::to_string)
    .collect()
}

/// Names skipped by the tree renderer.
pub fn default_tree_ignore_list() -> Vec<String> {
    [
        ".angular",
        ".vscode",
        "node_modules",
        "Migrations",
        "Debug",
        "Dependencies",
        "Connected Services",
        ".git",
        "ScriptOutput",
        "target",
    ]
    .into_iter()
    .map(str::to_string)
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_extensions_cover_original_map() {
        let map = default_extensions();
        assert_eq!(map.get(".ts"), Some(&Language::TypeScript));
        assert_eq!(map.get(".py"), Some(&Language::Python));
        assert_eq!(map.get(".h"), Some(&Language::Cpp));
        assert_eq!(map.get(".hpp"), Some(&Language::Cpp));
        assert!(!map.contains_key(".txt"));
        assert!(!map.contains_key(".md"));
    }

    #[test]
    fn test_default_ignore_mode_is_substring() {
        assert_eq!(SummaryConfig::default().ignore_mode, IgnoreMode::Substring);
    }

    #[test]
    fn test_tree_defaults() {
        let config = TreeConfig::default();
        assert_eq!(config.max_depth, Some(2));
        assert!(config.ignore.iter().any(|n| n == "node_modules"));
    }
}
