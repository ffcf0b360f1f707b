//! Property tests for rendering and hashing.

use std::collections::BTreeMap;

use proptest::prelude::*;

use ppc::domain::services::{render, substitute_vars};
use ppc::{ContentHash, Layer, Module};

fn body() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z0-9 {}\n]{0,40}").unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: a document ends in exactly one newline.
    #[test]
    fn property_single_trailing_newline(bodies in proptest::collection::vec(body(), 0..6)) {
        let modules: Vec<Module> = bodies
            .into_iter()
            .map(|b| Module::new("m", Layer::Base, b))
            .collect();

        let doc = render(&modules, &BTreeMap::new());

        prop_assert!(doc.ends_with('\n'));
        prop_assert!(doc == "\n" || !doc.ends_with("\n\n"));
    }

    /// PROPERTY: text without `{{` is never changed by substitution.
    #[test]
    fn property_no_placeholder_no_change(
        text in "[A-Za-z0-9 }\n]{0,60}",
        value in "[a-z]{0,8}",
    ) {
        let vars: BTreeMap<String, String> = [("x".to_string(), value)].into();
        prop_assert_eq!(substitute_vars(&text, &vars), text);
    }

    /// PROPERTY: rendering and hashing are pure.
    #[test]
    fn property_render_is_deterministic(bodies in proptest::collection::vec(body(), 1..6)) {
        let modules: Vec<Module> = bodies
            .into_iter()
            .map(|b| Module::new("m", Layer::Base, b))
            .collect();
        let vars: BTreeMap<String, String> = [("mode".to_string(), "x".to_string())].into();

        let first = render(&modules, &vars);
        let second = render(&modules, &vars);

        prop_assert_eq!(&first, &second);
        prop_assert_eq!(ContentHash::from_content(&first), ContentHash::from_content(&second));
    }
}
