//! File filtering for the summarizer
//!
//! A file is included in the summary iff its extension is in the language map
//! AND no ignore rule matches. The same predicate runs in the pre-scan pass
//! (counting) and in the main pass (processing).

use std::path::Path;

use crate::config::{IgnoreMode, SummaryConfig};
use crate::language::{Language, extension_of};

/// The include/exclude predicate applied to every walked file.
#[derive(Debug, Clone)]
pub struct FileFilter {
    extensions: std::collections::HashMap<String, Language>,
    ignore: Vec<String>,
    mode: IgnoreMode,
}

impl FileFilter {
    pub fn new(config: &SummaryConfig) -> Self {
        Self {
            extensions: config.extensions.clone(),
            ignore: config.ignore.clone(),
            mode: config.ignore_mode,
        }
    }

    /// Classify a file by its path relative to the scan root.
    ///
    /// Returns the language iff the extension is mapped and no ignore rule
    /// matches; `None` means the file is excluded from the summary.
    pub fn classify(&self, rel_path: &Path) -> Option<Language> {
        let ext = extension_of(rel_path)?;
        let lang = *self.extensions.get(&ext)?;
        if self.is_ignored(rel_path) {
            return None;
        }
        Some(lang)
    }

    /// Check the ignore rules against a relative path.
    ///
    /// In substring mode a token matching anywhere in the path excludes the
    /// file, so `Migrations2/x.cs` is excluded by the token `Migrations`.
    /// That over-match mirrors the original behavior and is kept on purpose.
    ///
    /// In base-name mode a token must exactly match a path component, so an
    /// ignored folder excludes everything under it but `Migrations2` is not
    /// caught by `Migrations`.
    pub fn is_ignored(&self, rel_path: &Path) -> bool {
        match self.mode {
            IgnoreMode::Substring => {
                let path_str = rel_path.to_string_lossy();
                self.ignore.iter().any(|token| path_str.contains(token))
            }
            IgnoreMode::BaseName => rel_path.components().any(|component| {
                let name = component.as_os_str().to_string_lossy();
                self.ignore.iter().any(|token| *token == name)
            }),
        }
    }
}
