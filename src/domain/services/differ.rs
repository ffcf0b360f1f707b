//! Differ Domain Service
//!
//! Compares a freshly compiled document with a previously written one, for
//! drift detection (`ppc compile --check`).

use similar::{ChangeTag, TextDiff};

/// Type of change in a diff
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiffTag {
    Delete,
    Insert,
    Equal,
}

impl From<ChangeTag> for DiffTag {
    fn from(tag: ChangeTag) -> Self {
        match tag {
            ChangeTag::Delete => DiffTag::Delete,
            ChangeTag::Insert => DiffTag::Insert,
            ChangeTag::Equal => DiffTag::Equal,
        }
    }
}

/// Result of a diff operation
#[derive(Debug, Clone, Default)]
pub struct DiffResult {
    /// Number of lines added
    pub additions: usize,
    /// Number of lines deleted
    pub deletions: usize,
    /// Unified diff text (empty when there are no changes)
    pub unified: String,
}

impl DiffResult {
    pub fn has_changes(&self) -> bool {
        self.additions > 0 || self.deletions > 0
    }

    /// e.g. "+5, -3"
    pub fn summary(&self) -> String {
        format!("+{}, -{}", self.additions, self.deletions)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Differ;

impl Differ {
    pub fn new() -> Self {
        Self
    }

    /// Line diff from `old` (on disk, labelled `old_label`) to `new` (compiled)
    pub fn diff(&self, old_label: &str, old: &str, new: &str) -> DiffResult {
        let text_diff = TextDiff::from_lines(old, new);

        let mut result = DiffResult::default();
        for change in text_diff.iter_all_changes() {
            match DiffTag::from(change.tag()) {
                DiffTag::Delete => result.deletions += 1,
                DiffTag::Insert => result.additions += 1,
                DiffTag::Equal => {}
            }
        }

        if result.has_changes() {
            result.unified = text_diff
                .unified_diff()
                .context_radius(3)
                .header(old_label, "compiled")
                .to_string();
        }
        result
    }
}
