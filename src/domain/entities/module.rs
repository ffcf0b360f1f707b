//! Module entity - one prompt fragment
//!
//! Modules are the "source code" of a prompt pack: a body of text with a layer,
//! a priority, classified tags and the ids of other modules it requires.
//! A module is an immutable value for the lifetime of a compile; anything a
//! compile learns about it (was it selected, was it pulled in) lives elsewhere.

use std::path::PathBuf;

use crate::domain::value_objects::Layer;

/// A prompt module
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Module {
    /// Unique identifier, e.g. `modes/explore`
    id: String,
    /// Coarse ordering category
    layer: Layer,
    /// Tie-break within a layer (ascending)
    priority: i64,
    /// `group:value` tags
    tags: Vec<String>,
    /// Ids this module pulls in
    requires: Vec<String>,
    /// Text with `{{name}}` placeholders
    body: String,
    /// Human description from frontmatter
    description: Option<String>,
    /// Where the loader read this module from
    source_path: Option<PathBuf>,
}

impl Module {
    /// Create a new module with priority 0, no tags and no requirements
    pub fn new(id: impl Into<String>, layer: Layer, body: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            layer,
            priority: 0,
            tags: Vec::new(),
            requires: Vec::new(),
            body: body.into(),
            description: None,
            source_path: None,
        }
    }

    /// Builder: set the priority
    pub fn with_priority(mut self, priority: i64) -> Self {
        self.priority = priority;
        self
    }

    /// Builder: set the tags
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Builder: set the required module ids
    pub fn with_requires<I, S>(mut self, requires: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.requires = requires.into_iter().map(Into::into).collect();
        self
    }

    /// Builder: set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Builder: set the source path
    pub fn with_source_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.source_path = Some(path.into());
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn layer(&self) -> Layer {
        self.layer
    }

    pub fn priority(&self) -> i64 {
        self.priority
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn requires(&self) -> &[String] {
        &self.requires
    }

    /// Required ids in lexicographic order (the order the expander visits them)
    pub fn sorted_requires(&self) -> Vec<&str> {
        let mut reqs: Vec<&str> = self.requires.iter().map(String::as_str).collect();
        reqs.sort_unstable();
        reqs
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn source_path(&self) -> Option<&PathBuf> {
        self.source_path.as_ref()
    }
}
