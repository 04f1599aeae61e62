//! Directory traversal
//!
//! Thin wrapper over the `ignore` crate's walker. Standard filters (gitignore
//! and hidden-file handling) are disabled: this tool carries its own ignore
//! list, and hidden entries are matched by it like any other name. Entries
//! come back depth-first, pre-order, children in file-name order, so repeated
//! runs over an unchanged tree traverse it identically.

use std::path::{Path, PathBuf};

use ignore::{DirEntry, Walk, WalkBuilder};

/// Build a walker rooted at `root`.
///
/// `max_depth` bounds descent (`None` = unlimited; the root itself is depth
/// 0). Entries whose base name is in `skip_names` are skipped entirely,
/// including descent into them.
pub fn walk(root: &Path, max_depth: Option<usize>, skip_names: Vec<String>) -> Walk {
    let mut builder = WalkBuilder::new(root);
    builder
        .standard_filters(false)
        .follow_links(false)
        .max_depth(max_depth)
        .sort_by_file_name(|a, b| a.cmp(b));
    if !skip_names.is_empty() {
        builder.filter_entry(move |entry: &DirEntry| {
            entry
                .file_name()
                .to_str()
                .is_none_or(|name| !skip_names.iter().any(|token| token == name))
        });
    }
    builder.build()
}

/// Walk `root` and call `f` once per file, depth-first pre-order.
///
/// Traversal errors (an entry vanishing mid-walk, unreadable directories)
/// are reported to stderr and skipped; the walk continues.
pub fn walk_files(root: &Path, f: &mut impl FnMut(&Path)) {
    for entry in walk(root, None, Vec::new()) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                eprintln!("pare: warning: {}", err);
                continue;
            }
        };
        if entry.depth() == 0 {
            continue;
        }
        if entry.file_type().is_some_and(|t| t.is_file()) {
            f(entry.path());
        }
    }
}

/// Resolve CLI targets against the root, silently dropping non-existent ones.
/// No targets means the root itself.
pub fn resolve_targets(root: &Path, targets: &[PathBuf]) -> Vec<PathBuf> {
    if targets.is_empty() {
        return vec![root.to_path_buf()];
    }
    targets
        .iter()
        .map(|t| if t.is_absolute() { t.clone() } else { root.join(t) })
        .filter(|t| t.exists())
        .collect()
}

/// Path of `path` relative to `root`; `path` unchanged when outside `root`.
pub fn relative_to(root: &Path, path: &Path) -> PathBuf {
    path.strip_prefix(root).unwrap_or(path).to_path_buf()
}
