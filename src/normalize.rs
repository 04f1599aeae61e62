//! Whitespace normalization
//!
//! Removes blank lines and, optionally, collapses all remaining whitespace
//! within each line. This step is lossy and irreversible by design: the tool
//! summarizes code, it does not format it.

/// Normalize line endings, drop blank lines, optionally collapse whitespace.
///
/// - `\r\n` is normalized to `\n` before splitting.
/// - Any line that is empty after trimming is dropped.
/// - With `collapse` set, every whitespace character inside each remaining
///   line is removed (not just leading/trailing).
/// - The rejoined result is trimmed as a whole.
///
/// # Examples
///
/// ```
/// use pare::normalize::normalize_whitespace;
///
/// assert_eq!(normalize_whitespace("a\r\n\r\n  \r\nb", false), "a\nb");
/// assert_eq!(normalize_whitespace("  foo bar  ", true), "foobar");
/// ```
pub fn normalize_whitespace(content: &str, collapse: bool) -> String {
    let unified = content.replace("\r\n", "\n");
    let lines: Vec<String> = unified
        .split('\n')
        .filter(|line| !line.trim().is_empty())
        .map(|line| {
            if collapse {
                line.chars().filter(|c| !c.is_whitespace()).collect()
            } else {
                line.to_string()
            }
        })
        .collect();
    lines.join("\n").trim().to_string()
}
