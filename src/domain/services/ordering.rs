//! Deterministic module ordering
//!
//! Orders modules by (layer, priority, id). The id makes it a strict total
//! order, so the result never depends on discovery or request order.

use std::cmp::Ordering;

use crate::domain::entities::Module;

/// Compare two modules by (layer, priority, id)
pub fn compare_modules(a: &Module, b: &Module) -> Ordering {
    a.layer()
        .cmp(&b.layer())
        .then_with(|| a.priority().cmp(&b.priority()))
        .then_with(|| a.id().cmp(b.id()))
}

/// Return `modules` in final document order
pub fn sort_modules<'a, I>(modules: I) -> Vec<&'a Module>
where
    I: IntoIterator<Item = &'a Module>,
{
    let mut sorted: Vec<&Module> = modules.into_iter().collect();
    sorted.sort_by(|a, b| compare_modules(a, b));
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::Layer;

    fn ids(modules: &[&Module]) -> Vec<String> {
        modules.iter().map(|m| m.id().to_string()).collect()
    }

    #[test]
    fn layer_first() {
        let modules = [
            Module::new("b", Layer::Traits, "").with_priority(-100),
            Module::new("a", Layer::Contracts, "").with_priority(-1000),
            Module::new("c", Layer::Base, "").with_priority(100),
        ];

        let sorted = sort_modules(&modules);

        assert_eq!(ids(&sorted), vec!["c", "b", "a"]);
    }

    #[test]
    fn priority_within_layer() {
        let modules = [
            Module::new("b", Layer::Base, "").with_priority(50),
            Module::new("a", Layer::Base, "").with_priority(0),
            Module::new("c", Layer::Base, "").with_priority(25),
        ];

        let sorted = sort_modules(&modules);

        let priorities: Vec<_> = sorted.iter().map(|m| m.priority()).collect();
        assert_eq!(priorities, vec![0, 25, 50]);
    }

    #[test]
    fn negative_priorities_sort_first() {
        let modules = [
            Module::new("a", Layer::Policies, "").with_priority(0),
            Module::new("b", Layer::Policies, "").with_priority(-3),
        ];

        assert_eq!(ids(&sort_modules(&modules)), vec!["b", "a"]);
    }

    #[test]
    fn id_breaks_ties() {
        let modules = [
            Module::new("c", Layer::Base, "").with_priority(10),
            Module::new("a", Layer::Base, "").with_priority(10),
            Module::new("b", Layer::Base, "").with_priority(10),
        ];

        assert_eq!(ids(&sort_modules(&modules)), vec!["a", "b", "c"]);
    }

    #[test]
    fn input_order_is_irrelevant() {
        let forward = [
            Module::new("base", Layer::Base, ""),
            Module::new("modes/explore", Layer::Modes, ""),
            Module::new("contracts/markdown", Layer::Contracts, ""),
        ];
        let mut backward = forward.clone();
        backward.reverse();

        assert_eq!(ids(&sort_modules(&forward)), ids(&sort_modules(&backward)));
    }

    #[test]
    fn distinct_modules_never_compare_equal() {
        let a = Module::new("a", Layer::Base, "");
        let b = Module::new("b", Layer::Base, "");
        assert_ne!(compare_modules(&a, &b), Ordering::Equal);
        assert_eq!(compare_modules(&a, &a), Ordering::Equal);
    }
}
