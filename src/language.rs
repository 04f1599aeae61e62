//! File extension to language classification
//!
//! This module provides a centralized Language enum used both to select
//! comment-stripping rules and to label the fenced blocks in the summary
//! document.

/// Languages the summarizer knows how to label and strip.
///
/// Each variant corresponds to one fence tag in the output document. The
/// comment-stripping rules group these into families; see [`crate::strip`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    JavaScript,
    TypeScript,
    Java,
    C,
    Cpp,
    CSharp,
    Php,
    Go,
    Swift,
    Scala,
    Kotlin,
    Python,
    Ruby,
    Bash,
    Shell,
    Dockerfile,
    Html,
    Xml,
    Vue,
    Svelte,
    Css,
    Scss,
    Less,
    Yaml,
    Ini,
    Toml,
    Sql,
    Json,
    Markdown,
    Text,
}

impl Language {
    /// The tag used both for strip-rule dispatch and the Markdown fence.
    ///
    /// # Examples
    ///
    /// ```
    /// use pare::language::Language;
    ///
    /// assert_eq!(Language::TypeScript.fence_tag(), "typescript");
    /// assert_eq!(Language::JavaScript.fence_tag(), "js");
    /// ```
    pub fn fence_tag(&self) -> &'static str {
        match self {
            Language::JavaScript => "js",
            Language::TypeScript => "typescript",
            Language::Java => "java",
            Language::C => "c",
            Language::Cpp => "cpp",
            Language::CSharp => "csharp",
            Language::Php => "php",
            Language::Go => "go",
            Language::Swift => "swift",
            Language::Scala => "scala",
            Language::Kotlin => "kotlin",
            Language::Python => "python",
            Language::Ruby => "ruby",
            Language::Bash => "bash",
            Language::Shell => "shell",
            Language::Dockerfile => "dockerfile",
            Language::Html => "html",
            Language::Xml => "xml",
            Language::Vue => "vue",
            Language::Svelte => "svelte",
            Language::Css => "css",
            Language::Scss => "scss",
            Language::Less => "less",
            Language::Yaml => "yaml",
            Language::Ini => "ini",
            Language::Toml => "toml",
            Language::Sql => "sql",
            Language::Json => "json",
            Language::Markdown => "markdown",
            Language::Text => "text",
        }
    }
}

/// Extract the lowercased extension of a path, including the leading dot.
///
/// Uses the standard "substring after last dot" rule via `Path::extension`,
/// so dotfiles like `.gitignore` and extensionless names yield `None`.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use pare::language::extension_of;
///
/// assert_eq!(extension_of(Path::new("src/App.TS")), Some(".ts".to_string()));
/// assert_eq!(extension_of(Path::new("Makefile")), None);
/// ```
pub fn extension_of(path: &std::path::Path) -> Option<String> {
    let ext = path.extension()?.to_str()?;
    Some(format!(".{}", ext.to_lowercase()))
}
