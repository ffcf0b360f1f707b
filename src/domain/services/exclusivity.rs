//! Exclusivity validator
//!
//! Rejects a resolved module set in which an exclusive tag group carries more
//! than one distinct value. Modules are examined in id order and groups in name
//! order, so the reported conflict never depends on traversal order.

use std::collections::BTreeMap;

use crate::domain::entities::{Module, RuleSet};
use crate::domain::value_objects::KeyedTag;
use crate::error::{ConflictingValue, ResolveError};

/// group -> value -> earliest (by id) module carrying it
type GroupValues<'a> = BTreeMap<&'a str, BTreeMap<&'a str, &'a str>>;

/// Parse every tag of `modules` and check the exclusive groups of `rules`.
///
/// A malformed tag fails first, before any conflict is considered.
pub fn validate_exclusive_groups<'a, I>(modules: I, rules: &RuleSet) -> Result<(), ResolveError>
where
    I: IntoIterator<Item = &'a Module>,
{
    let groups = collect_tag_groups(modules)?;

    let conflict = groups
        .into_iter()
        .find(|(group, values)| rules.is_exclusive(group) && values.len() > 1);

    match conflict {
        Some((group, values)) => {
            tracing::debug!(group, values = values.len(), "exclusive group conflict");
            Err(ResolveError::Conflict {
                group: group.to_string(),
                values: values
                    .into_iter()
                    .map(|(value, module)| ConflictingValue {
                        value: value.to_string(),
                        module: module.to_string(),
                    })
                    .collect(),
            })
        }
        None => Ok(()),
    }
}

fn collect_tag_groups<'a, I>(modules: I) -> Result<GroupValues<'a>, ResolveError>
where
    I: IntoIterator<Item = &'a Module>,
{
    let mut modules: Vec<&Module> = modules.into_iter().collect();
    modules.sort_by(|a, b| a.id().cmp(b.id()));

    let mut groups: GroupValues<'a> = BTreeMap::new();
    for module in modules {
        for tag in module.tags() {
            let parsed = KeyedTag::parse(tag).ok_or_else(|| ResolveError::InvalidTag {
                module: module.id().to_string(),
                tag: tag.clone(),
            })?;
            groups
                .entry(parsed.group)
                .or_default()
                .entry(parsed.value)
                .or_insert(module.id());
        }
    }
    Ok(groups)
}
