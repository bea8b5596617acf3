//! Property-based tests for the collector.
//!
//! Hierarchies are generated at runtime, so their descriptors are leaked to obtain the `'static`
//! lifetime the derive macro gets for free.

use std::collections::HashSet;

use fieldwalk::{ClassDescriptor, FieldCollector};
use proptest::prelude::*;

fn leak_str(s: String) -> &'static str {
    Box::leak(s.into_boxed_str())
}

/// Build a chain from `levels` (root first) and return the leaf descriptor.
fn build_chain(levels: &[Vec<String>]) -> &'static ClassDescriptor {
    let mut parent: Option<&'static ClassDescriptor> = None;
    for (depth, fields) in levels.iter().enumerate() {
        let fields: Vec<&'static str> = fields.iter().cloned().map(leak_str).collect();
        let fields: &'static [&'static str] = Box::leak(fields.into_boxed_slice());
        let name = leak_str(format!("Level{depth}"));
        parent = Some(Box::leak(Box::new(ClassDescriptor::new(name, fields, parent))));
    }
    parent.expect("at least one level")
}

fn hierarchy() -> impl Strategy<Value = Vec<Vec<String>>> {
    // A small alphabet so names collide across levels (shadowing) often.
    let field = "[a-f]{1,2}";
    prop::collection::vec(prop::collection::vec(field, 0..5), 1..6)
}

proptest! {
    /// Property: the result is exactly the union of every level's declared fields.
    #[test]
    fn result_is_union_of_levels(levels in hierarchy()) {
        let leaf = build_chain(&levels);
        let names = FieldCollector::new().collect_class(leaf).unwrap();
        let expected: HashSet<String> = levels.iter().flatten().cloned().collect();
        prop_assert_eq!(names, expected);
    }

    /// Property: the walk visits every level exactly once, subclass first.
    #[test]
    fn chain_depth_matches_levels(levels in hierarchy()) {
        let leaf = build_chain(&levels);
        prop_assert_eq!(leaf.depth(), levels.len());
        let names: Vec<_> = leaf.ancestors().map(|c| c.name().to_string()).collect();
        let expected: Vec<_> = (0..levels.len()).rev().map(|d| format!("Level{d}")).collect();
        prop_assert_eq!(names, expected);
    }

    /// Property: collecting twice yields equal results.
    #[test]
    fn collection_is_deterministic(levels in hierarchy()) {
        let leaf = build_chain(&levels);
        let collector = FieldCollector::new();
        prop_assert_eq!(
            collector.collect_class(leaf).unwrap(),
            collector.collect_class(leaf).unwrap()
        );
    }
}
