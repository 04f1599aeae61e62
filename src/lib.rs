//! Pare - condense a codebase into a single comment-free Markdown snapshot

pub mod config;
pub mod filter;
pub mod language;
pub mod normalize;
pub mod output;
pub mod progress;
pub mod strip;
pub mod summary;
pub mod tree;
pub mod walker;

pub use config::{IgnoreMode, SummaryConfig, TreeConfig};
pub use filter::FileFilter;
pub use language::Language;
pub use progress::Reporter;
pub use summary::Summarizer;
pub use tree::TreeRenderer;
