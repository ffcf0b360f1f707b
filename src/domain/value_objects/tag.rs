//! Keyed tag parsing
//!
//! Module tags are `group:value` pairs. Parsing is strict and does no trimming
//! or case folding; callers decide how to treat malformed tags.

/// A borrowed `group:value` tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct KeyedTag<'a> {
    pub group: &'a str,
    pub value: &'a str,
}

impl<'a> KeyedTag<'a> {
    /// Split a tag into group and value.
    ///
    /// Returns `None` unless there is exactly one `:` with at least one
    /// character on each side.
    pub fn parse(tag: &'a str) -> Option<Self> {
        let (group, value) = tag.split_once(':')?;
        if group.is_empty() || value.is_empty() || value.contains(':') {
            return None;
        }
        Some(Self { group, value })
    }
}
