//! Summary assembly
//!
//! Two passes over the resolved targets: a pre-scan counting the files the
//! filter accepts, then a main pass that reads, strips, normalizes, and
//! appends one fenced block per file. A separator banner is emitted whenever
//! the top-level folder changes between consecutive files. All run state
//! lives in a run-scoped context, and the output document is written
//! unconditionally once the traversal finishes.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::config::{SUMMARY_FILENAME, SummaryConfig};
use crate::filter::FileFilter;
use crate::normalize::normalize_whitespace;
use crate::output::{resolve_output_dir, write_document};
use crate::progress::Reporter;
use crate::strip::strip_comments;
use crate::walker::{self, relative_to, resolve_targets};

/// Counters and folder-tracking state for a single run.
#[derive(Debug, Default)]
struct RunContext {
    total: usize,
    processed: usize,
    last_dir: Option<String>,
}

/// Assembles the summary document for a set of targets.
pub struct Summarizer {
    config: SummaryConfig,
    filter: FileFilter,
}

impl Summarizer {
    pub fn new(config: SummaryConfig) -> Self {
        let filter = FileFilter::new(&config);
        Self { config, filter }
    }

    /// Build the summary and write it into the output directory.
    ///
    /// Returns the path of the written document.
    pub fn run(
        &self,
        root: &Path,
        targets: &[PathBuf],
        reporter: &mut Reporter,
    ) -> io::Result<PathBuf> {
        let summary = self.build(root, targets, reporter)?;
        reporter.writing(SUMMARY_FILENAME)?;
        let out_dir = resolve_output_dir(root, &self.config.output_dir);
        let path = write_document(&out_dir, SUMMARY_FILENAME, &summary)?;
        reporter.done(&path)?;
        Ok(path)
    }

    /// Build the summary document as a string without writing it.
    pub fn build(
        &self,
        root: &Path,
        targets: &[PathBuf],
        reporter: &mut Reporter,
    ) -> io::Result<String> {
        let targets = resolve_targets(root, targets);
        let mut ctx = RunContext::default();

        reporter.scan_started()?;

        // Pre-scan pass: count, read nothing.
        for target in &targets {
            walker::walk_files(target, &mut |path| {
                if self.classify(root, path).is_some() {
                    ctx.total += 1;
                }
            });
        }
        reporter.total_files(ctx.total)?;

        let mut summary = String::new();

        // Main pass: same predicate, now reading contents.
        for target in &targets {
            for entry in walker::walk(target, None, Vec::new()) {
                let entry = match entry {
                    Ok(entry) => entry,
                    Err(err) => {
                        reporter.warn(&err.to_string());
                        continue;
                    }
                };
                if entry.depth() == 0 || !entry.file_type().is_some_and(|t| t.is_file()) {
                    continue;
                }
                let path = entry.path();
                let Some(lang) = self.classify(root, path) else {
                    continue;
                };
                let rel = relative_to(root, path);
                let rel_display = rel.to_string_lossy().replace('\\', "/");

                let content = match fs::read_to_string(path) {
                    Ok(content) => content,
                    Err(err) => {
                        // A file that vanished or is unreadable mid-run is
                        // skipped; the run continues and output is still
                        // written.
                        reporter.warn(&format!("skipping {}: {}", rel_display, err));
                        continue;
                    }
                };

                let current_dir = top_level_dir(&rel);
                if ctx.last_dir.as_deref() != Some(current_dir.as_str()) {
                    if let Some(last) = &ctx.last_dir {
                        summary.push_str(&format!(
                            "\n---\n\nAfter finishing all code summary of {}\n",
                            last
                        ));
                    }
                    ctx.last_dir = Some(current_dir);
                }

                reporter.processing(&rel_display)?;

                let cleaned = if self.config.strip_comments {
                    strip_comments(&content, lang)
                } else {
                    content
                };
                let cleaned = normalize_whitespace(&cleaned, self.config.collapse_whitespace);

                summary.push_str(&format!(
                    "{}:\n```{}\n{}\n```\n\n",
                    rel_display,
                    lang.fence_tag(),
                    cleaned
                ));

                ctx.processed += 1;
                reporter.progress(ctx.processed, ctx.total)?;
            }
        }

        Ok(summary)
    }

    fn classify(&self, root: &Path, path: &Path) -> Option<crate::language::Language> {
        self.filter.classify(&relative_to(root, path))
    }
}

/// First segment of the file's parent path; `.` for root-level files.
fn top_level_dir(rel: &Path) -> String {
    rel.parent()
        .and_then(|p| p.components().next())
        .map(|c| c.as_os_str().to_string_lossy().to_string())
        .unwrap_or_else(|| ".".to_string())
}
