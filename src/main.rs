//! CLI entry point for pare

use std::io::IsTerminal;
use std::path::PathBuf;
use std::process;

use clap::{Parser, ValueEnum};
use pare::config::TREE_DEPTH;
use pare::{IgnoreMode, Reporter, Summarizer, SummaryConfig, TreeConfig, TreeRenderer};

/// Color output mode
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum ColorMode {
    /// Auto-detect based on terminal and environment
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Determine whether to use color output based on mode and environment.
fn should_use_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            // Respect NO_COLOR environment variable (https://no-color.org/)
            if std::env::var_os("NO_COLOR").is_some() {
                return false;
            }
            // Respect FORCE_COLOR environment variable
            if std::env::var_os("FORCE_COLOR").is_some() {
                return true;
            }
            // Respect TERM=dumb
            if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
                return false;
            }
            // Check if stdout is a TTY
            std::io::stdout().is_terminal()
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "pare")]
#[command(about = "Condense a codebase into a single comment-free Markdown snapshot")]
#[command(version)]
struct Args {
    /// Directories to scan (default: current directory)
    targets: Vec<PathBuf>,

    /// Render the folder/file tree instead of the code summary
    #[arg(short = 't', long = "tree")]
    tree: bool,

    /// Tree depth limit; 0 means unlimited
    #[arg(short = 'L', long = "level", default_value_t = TREE_DEPTH)]
    level: usize,

    /// Directory the output documents are written into
    #[arg(short = 'o', long = "output-dir")]
    output_dir: Option<PathBuf>,

    /// Additional ignore tokens (can be used multiple times)
    #[arg(short = 'I', long = "ignore")]
    ignore: Vec<String>,

    /// Match ignore tokens against path components exactly, not as substrings
    #[arg(long = "exact-ignore")]
    exact_ignore: bool,

    /// Keep indentation and inner whitespace in summarized lines
    #[arg(long = "keep-whitespace")]
    keep_whitespace: bool,

    /// Keep comments in summarized files
    #[arg(long = "keep-comments")]
    keep_comments: bool,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,
}

fn main() {
    let args = Args::parse();

    let root = match std::env::current_dir() {
        Ok(dir) => dir,
        Err(e) => {
            eprintln!("pare: cannot determine current directory: {}", e);
            process::exit(1);
        }
    };

    let mut reporter = Reporter::new(should_use_color(args.color));

    let result = if args.tree {
        let mut config = TreeConfig {
            max_depth: if args.level == 0 {
                None
            } else {
                Some(args.level)
            },
            ..TreeConfig::default()
        };
        config.ignore.extend(args.ignore.iter().cloned());
        if let Some(dir) = &args.output_dir {
            config.output_dir = dir.clone();
        }
        TreeRenderer::new(config)
            .run(&root, &args.targets, &mut reporter)
            .map(|_| ())
    } else {
        let mut config = SummaryConfig {
            ignore_mode: if args.exact_ignore {
                IgnoreMode::BaseName
            } else {
                IgnoreMode::Substring
            },
            collapse_whitespace: !args.keep_whitespace,
            strip_comments: !args.keep_comments,
            ..SummaryConfig::default()
        };
        config.ignore.extend(args.ignore.iter().cloned());
        if let Some(dir) = &args.output_dir {
            config.output_dir = dir.clone();
        }
        Summarizer::new(config)
            .run(&root, &args.targets, &mut reporter)
            .map(|_| ())
    };

    if let Err(e) = result {
        eprintln!("pare: error writing output: {}", e);
        process::exit(1);
    }
}
