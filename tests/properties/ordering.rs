//! Property tests for deterministic ordering.

use proptest::prelude::*;

use ppc::domain::services::sort_modules;
use ppc::{Layer, Module};

fn layer() -> impl Strategy<Value = Layer> {
    prop::sample::select(Layer::ALL.to_vec())
}

fn modules() -> impl Strategy<Value = Vec<Module>> {
    proptest::collection::btree_map("[a-z]{1,6}", (layer(), -5i64..5), 0..20).prop_map(|map| {
        map.into_iter()
            .map(|(id, (layer, priority))| Module::new(id, layer, "").with_priority(priority))
            .collect()
    })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: output is sorted by (layer, priority, id).
    #[test]
    fn property_sorted_by_layer_priority_id(modules in modules()) {
        let sorted = sort_modules(&modules);

        for pair in sorted.windows(2) {
            let a = (pair[0].layer(), pair[0].priority(), pair[0].id());
            let b = (pair[1].layer(), pair[1].priority(), pair[1].id());
            prop_assert!(a < b);
        }
    }

    /// PROPERTY: input order never affects the result.
    #[test]
    fn property_input_order_is_irrelevant(
        modules in modules().prop_shuffle(),
    ) {
        let mut reversed: Vec<&Module> = modules.iter().collect();
        reversed.reverse();

        let a: Vec<&str> = sort_modules(&modules).iter().map(|m| m.id()).collect();
        let b: Vec<&str> = sort_modules(reversed).iter().map(|m| m.id()).collect();

        prop_assert_eq!(a, b);
    }
}
