//! Rule set entity
//!
//! Declares which tag groups are mutually exclusive across a resolved module set.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleSet {
    /// Groups that may carry at most one distinct value per compile
    #[serde(default)]
    pub exclusive_groups: BTreeSet<String>,
}

impl RuleSet {
    pub fn new<I, S>(exclusive_groups: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            exclusive_groups: exclusive_groups.into_iter().map(Into::into).collect(),
        }
    }

    pub fn is_exclusive(&self, group: &str) -> bool {
        self.exclusive_groups.contains(group)
    }
}
