//! Folder/file tree rendering
//!
//! Collects every entry under the targets up to a depth bound, sorts them by
//! relative path, assembles a true hierarchy (each directory node owning its
//! ordered children), and renders it with box-drawing connectors. The
//! rendered tree is written as one fenced block.

use std::io;
use std::path::{Path, PathBuf};

use crate::config::{TREE_FILENAME, TreeConfig};
use crate::output::{resolve_output_dir, write_document};
use crate::progress::Reporter;
use crate::walker::{self, relative_to, resolve_targets};

/// One visited filesystem entry, before hierarchy assembly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeEntry {
    /// Path relative to the invocation root.
    pub rel: PathBuf,
    /// Levels below the walked target (a target's direct child is 0).
    pub depth: usize,
    pub name: String,
    pub is_dir: bool,
}

#[derive(Debug)]
struct Node {
    name: String,
    is_dir: bool,
    children: Vec<Node>,
}

/// Renders the depth-limited folder/file tree document.
pub struct TreeRenderer {
    config: TreeConfig,
}

impl TreeRenderer {
    pub fn new(config: TreeConfig) -> Self {
        Self { config }
    }

    /// Build the tree document and write it into the output directory.
    pub fn run(
        &self,
        root: &Path,
        targets: &[PathBuf],
        reporter: &mut Reporter,
    ) -> io::Result<PathBuf> {
        let document = self.build(root, targets);
        let out_dir = resolve_output_dir(root, &self.config.output_dir);
        let path = write_document(&out_dir, TREE_FILENAME, &document)?;
        reporter.done(&path)?;
        Ok(path)
    }

    /// Build the fenced tree document as a string without writing it.
    pub fn build(&self, root: &Path, targets: &[PathBuf]) -> String {
        let entries = self.collect(root, targets);
        let forest = build_forest(entries);
        let mut rendered = String::new();
        render_nodes(&forest, "", &mut rendered);
        format!("```\n{}```", rendered)
    }

    /// Walk every target, recording each visited entry.
    pub fn collect(&self, root: &Path, targets: &[PathBuf]) -> Vec<TreeEntry> {
        let targets = resolve_targets(root, targets);
        let mut entries = Vec::new();
        for target in &targets {
            for entry in walker::walk(target, self.config.max_depth, self.config.ignore.clone()) {
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
                let is_dir = entry.file_type().is_some_and(|t| t.is_dir());
                entries.push(TreeEntry {
                    rel: relative_to(root, entry.path()),
                    depth: entry.depth() - 1,
                    name: entry.file_name().to_string_lossy().to_string(),
                    is_dir,
                });
            }
        }
        entries
    }
}

/// Assemble sorted entries into a forest of directory-owned children.
///
/// Entries are sorted component-wise, so every directory immediately
/// precedes its descendants; a single stack pass rebuilds the hierarchy.
/// Entries whose parent was never visited (the targets' own children)
/// become forest roots.
fn build_forest(mut entries: Vec<TreeEntry>) -> Vec<Node> {
    entries.sort_by(|a, b| a.rel.cmp(&b.rel));

    let mut roots: Vec<Node> = Vec::new();
    let mut stack: Vec<(PathBuf, Node)> = Vec::new();

    fn attach(roots: &mut Vec<Node>, stack: &mut [(PathBuf, Node)], node: Node) {
        match stack.last_mut() {
            Some((_, parent)) => parent.children.push(node),
            None => roots.push(node),
        }
    }

    for entry in entries {
        while let Some((path, _)) = stack.last() {
            if entry.rel.starts_with(path) {
                break;
            }
            let (_, node) = stack.pop().unwrap_or_else(|| unreachable!());
            attach(&mut roots, &mut stack, node);
        }
        let node = Node {
            name: entry.name,
            is_dir: entry.is_dir,
            children: Vec::new(),
        };
        if entry.is_dir {
            stack.push((entry.rel, node));
        } else {
            attach(&mut roots, &mut stack, node);
        }
    }
    while let Some((_, node)) = stack.pop() {
        attach(&mut roots, &mut stack, node);
    }
    roots
}

/// Render a level of siblings, extending the ancestor prefix per child.
fn render_nodes(nodes: &[Node], prefix: &str, out: &mut String) {
    for (i, node) in nodes.iter().enumerate() {
        let is_last = i + 1 == nodes.len();
        out.push_str(prefix);
        out.push_str(if is_last { "└── " } else { "├── " });
        out.push_str(&node.name);
        if node.is_dir {
            out.push('/');
        }
        out.push('\n');

        let child_prefix = format!("{}{}", prefix, if is_last { "    " } else { "│   " });
        render_nodes(&node.children, &child_prefix, out);
    }
}
