//! Selection
//!
//! The user-facing choice of mode, contract, traits and revision budget, and
//! its translation into a `CompileRequest`. Profiles feed in here too.

use std::collections::BTreeMap;

use crate::domain::services::BASE_ID;
use crate::infrastructure::loader::Profile;

use super::compiler::CompileRequest;

/// Module pulled in when a revision budget is set
pub const REVISIONS_POLICY_ID: &str = "policies/revisions";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    pub mode: String,
    pub contract: String,
    /// Full trait module ids, e.g. `traits/terse`
    pub traits: Vec<String>,
    pub revisions: Option<u32>,
    pub vars: BTreeMap<String, String>,
}

/// CLI values layered over a profile
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionOverrides {
    pub mode: Option<String>,
    pub contract: Option<String>,
    pub revisions: Option<u32>,
    pub traits: Vec<String>,
    pub vars: BTreeMap<String, String>,
}

impl Selection {
    pub fn new(mode: impl Into<String>, contract: impl Into<String>) -> Self {
        Self {
            mode: mode.into(),
            contract: contract.into(),
            ..Self::default()
        }
    }

    /// Builder: add a trait id (ignored if already present)
    pub fn with_trait(mut self, id: impl Into<String>) -> Self {
        push_unique(&mut self.traits, id.into());
        self
    }

    pub fn with_revisions(mut self, revisions: u32) -> Self {
        self.revisions = Some(revisions);
        self
    }

    pub fn with_var(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.insert(name.into(), value.into());
        self
    }

    /// Start from a profile, then apply CLI overrides.
    ///
    /// Profile traits come first and CLI traits are appended without
    /// duplicates. CLI vars win over profile vars.
    pub fn from_profile(profile: &Profile, overrides: SelectionOverrides) -> Self {
        let mut traits = Vec::new();
        for id in profile.traits.iter().filter(|t| !t.is_empty()) {
            push_unique(&mut traits, id.clone());
        }
        for id in overrides.traits {
            push_unique(&mut traits, id);
        }

        let mut vars = profile.vars.clone();
        vars.extend(overrides.vars);

        Self {
            mode: overrides.mode.unwrap_or_else(|| profile.mode.clone()),
            contract: overrides
                .contract
                .unwrap_or_else(|| profile.contract.clone()),
            traits,
            revisions: overrides.revisions.or(profile.revisions),
            vars,
        }
    }

    /// `base`, `modes/<mode>`, `contracts/<contract>`, the traits, then
    /// `policies/revisions` when a revision budget is set.
    pub fn root_ids(&self) -> Vec<String> {
        let mut ids = vec![
            BASE_ID.to_string(),
            format!("modes/{}", self.mode),
            format!("contracts/{}", self.contract),
        ];
        for id in &self.traits {
            push_unique(&mut ids, id.clone());
        }
        if self.revisions.is_some() {
            push_unique(&mut ids, REVISIONS_POLICY_ID.to_string());
        }
        ids
    }

    /// `defaults`, then the selection's vars, then `mode` and `revisions`.
    pub fn vars(&self, defaults: &BTreeMap<String, String>) -> BTreeMap<String, String> {
        let mut vars = defaults.clone();
        vars.extend(self.vars.iter().map(|(k, v)| (k.clone(), v.clone())));
        vars.insert("mode".to_string(), self.mode.clone());
        if let Some(n) = self.revisions {
            vars.insert("revisions".to_string(), n.to_string());
        }
        vars
    }

    pub fn to_request(&self, defaults: &BTreeMap<String, String>) -> CompileRequest {
        CompileRequest {
            root_ids: self.root_ids(),
            vars: self.vars(defaults),
        }
    }
}

fn push_unique(ids: &mut Vec<String>, id: String) {
    if !ids.contains(&id) {
        ids.push(id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_ids_in_declared_order() {
        let selection = Selection::new("explore", "markdown")
            .with_trait("traits/terse")
            .with_trait("traits/conservative")
            .with_revisions(2);

        assert_eq!(
            selection.root_ids(),
            vec![
                "base",
                "modes/explore",
                "contracts/markdown",
                "traits/terse",
                "traits/conservative",
                "policies/revisions",
            ]
        );
    }

    #[test]
    fn zero_revisions_still_selects_policy() {
        let selection = Selection::new("ship", "code").with_revisions(0);

        assert!(selection
            .root_ids()
            .contains(&REVISIONS_POLICY_ID.to_string()));
        assert_eq!(
            selection.vars(&BTreeMap::new()).get("revisions").map(String::as_str),
            Some("0")
        );
    }

    #[test]
    fn no_revisions_no_policy() {
        let selection = Selection::new("explore", "markdown");

        assert_eq!(selection.root_ids().len(), 3);
        assert!(!selection.vars(&BTreeMap::new()).contains_key("revisions"));
    }

    #[test]
    fn duplicate_traits_collapse() {
        let selection = Selection::new("explore", "markdown")
            .with_trait("traits/terse")
            .with_trait("traits/terse");

        assert_eq!(selection.traits, vec!["traits/terse"]);
    }

    #[test]
    fn vars_layering() {
        let defaults: BTreeMap<String, String> = [
            ("team".to_string(), "platform".to_string()),
            ("mode".to_string(), "shadowed".to_string()),
        ]
        .into_iter()
        .collect();
        let selection = Selection::new("explore", "markdown").with_var("team", "core");

        let vars = selection.vars(&defaults);

        assert_eq!(vars["team"], "core");
        assert_eq!(vars["mode"], "explore");
    }

    #[test]
    fn profile_with_cli_overrides() {
        let profile = Profile {
            mode: "ship".into(),
            contract: "code".into(),
            revisions: Some(1),
            traits: vec!["traits/conservative".into()],
            vars: [("audience".to_string(), "ops".to_string())]
                .into_iter()
                .collect(),
        };
        let overrides = SelectionOverrides {
            contract: Some("markdown".into()),
            revisions: Some(3),
            traits: vec!["traits/terse".into(), "traits/conservative".into()],
            vars: [("audience".to_string(), "devs".to_string())]
                .into_iter()
                .collect(),
            ..Default::default()
        };

        let selection = Selection::from_profile(&profile, overrides);

        assert_eq!(selection.mode, "ship");
        assert_eq!(selection.contract, "markdown");
        assert_eq!(selection.revisions, Some(3));
        assert_eq!(
            selection.traits,
            vec!["traits/conservative", "traits/terse"]
        );
        assert_eq!(selection.vars["audience"], "devs");
    }

    #[test]
    fn profile_values_kept_without_overrides() {
        let profile = Profile {
            mode: "build".into(),
            contract: "code".into(),
            revisions: Some(2),
            ..Default::default()
        };

        let selection = Selection::from_profile(&profile, SelectionOverrides::default());

        assert_eq!(selection.mode, "build");
        assert_eq!(selection.contract, "code");
        assert_eq!(selection.revisions, Some(2));
    }

    #[test]
    fn to_request_carries_roots_and_vars() {
        let request = Selection::new("explore", "markdown").to_request(&BTreeMap::new());

        assert_eq!(request.root_ids[1], "modes/explore");
        assert_eq!(request.vars["mode"], "explore");
    }
}
