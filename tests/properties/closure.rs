//! Property tests for requires expansion.

use std::collections::BTreeSet;

use proptest::prelude::*;

use ppc::domain::services::expand_requires;
use ppc::{Layer, Module, ModuleRegistry};

fn id(i: usize) -> String {
    format!("m{i:02}")
}

/// Acyclic registry: module `i` may only require modules with a larger index.
fn dag() -> impl Strategy<Value = ModuleRegistry> {
    (1usize..16).prop_flat_map(|n| {
        proptest::collection::vec(proptest::collection::vec(any::<bool>(), n), n).prop_map(
            move |edges| {
                (0..n)
                    .map(|i| {
                        let requires: Vec<String> =
                            ((i + 1)..n).filter(|&j| edges[i][j]).map(id).collect();
                        Module::new(id(i), Layer::Base, "").with_requires(requires)
                    })
                    .collect::<ModuleRegistry>()
            },
        )
    })
}

fn roots_for(registry: &ModuleRegistry, picks: &[prop::sample::Index]) -> Vec<String> {
    let ids: Vec<&str> = registry.ids().collect();
    picks.iter().map(|p| p.get(&ids).to_string()).collect()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: every id appears once and every requirement precedes its dependent.
    #[test]
    fn property_closure_is_complete_and_post_ordered(
        registry in dag(),
        picks in proptest::collection::vec(any::<prop::sample::Index>(), 1..5),
    ) {
        let roots = roots_for(&registry, &picks);
        let closure = expand_requires(roots.as_slice(), &registry).unwrap();

        let unique: BTreeSet<&String> = closure.order.iter().collect();
        prop_assert_eq!(unique.len(), closure.order.len());

        for root in &roots {
            prop_assert!(closure.contains(root));
        }

        for (pos, member) in closure.order.iter().enumerate() {
            let module = registry.get(member).unwrap();
            for required in module.requires() {
                let at = closure.order.iter().position(|m| m == required);
                prop_assert!(at.is_some_and(|at| at < pos));
            }
        }
    }

    /// PROPERTY: the order roots are listed in never changes the closure.
    #[test]
    fn property_root_order_is_irrelevant(
        registry in dag(),
        picks in proptest::collection::vec(any::<prop::sample::Index>(), 1..5),
    ) {
        let roots = roots_for(&registry, &picks);
        let mut reversed = roots.clone();
        reversed.reverse();

        let forward = expand_requires(roots.as_slice(), &registry).unwrap();
        let backward = expand_requires(reversed.as_slice(), &registry).unwrap();

        prop_assert_eq!(forward, backward);
    }

    /// PROPERTY: a back edge anywhere on a path is reported, never looped on.
    #[test]
    fn property_cycles_terminate(n in 2usize..10, back in any::<prop::sample::Index>()) {
        let target = back.index(n);
        let registry: ModuleRegistry = (0..n)
            .map(|i| {
                let next = if i + 1 < n { id(i + 1) } else { id(target) };
                Module::new(id(i), Layer::Base, "").with_requires([next])
            })
            .collect();

        let err = expand_requires(&[id(0)][..], &registry).unwrap_err();

        prop_assert!(err.cycle_path().is_some());
    }
}
