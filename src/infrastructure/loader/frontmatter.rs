//! Frontmatter splitting
//!
//! A module file starts with a `---` line (LF or CRLF), holds YAML, and closes
//! the block with a `---` line using the same line ending.

use serde::Deserialize;

/// YAML fields recognised at the top of a module file. Unknown keys are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Frontmatter {
    pub id: String,
    pub desc: String,
    pub priority: i64,
    pub tags: Vec<String>,
    pub requires: Vec<String>,
}

/// Raw YAML and body of a module file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Split<'a> {
    pub yaml: &'a str,
    pub body: &'a str,
}

/// Why a file could not be split
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplitError {
    /// First line is not `---`
    Missing,
    /// No closing `---` line
    Unclosed,
}

const OPENERS: [&str; 2] = ["---\n", "---\r\n"];
const CLOSERS: [&str; 2] = ["\n---\n", "\r\n---\r\n"];

/// Split `content` into its YAML block and body.
///
/// The body loses its leading `\r`/`\n` characters and trailing `\n`
/// characters; nothing else is normalised.
pub fn split_frontmatter(content: &str) -> Result<Split<'_>, SplitError> {
    let opener = OPENERS
        .iter()
        .find(|o| content.starts_with(*o))
        .ok_or(SplitError::Missing)?;

    let rest = &content[opener.len()..];

    let (idx, closer) = CLOSERS
        .iter()
        .find_map(|c| rest.find(c).map(|idx| (idx, c)))
        .ok_or(SplitError::Unclosed)?;

    let yaml = &rest[..idx];
    let body = rest[idx + closer.len()..]
        .trim_start_matches(['\r', '\n'])
        .trim_end_matches('\n');

    Ok(Split { yaml, body })
}
