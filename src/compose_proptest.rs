//! Property-based tests for overlay composition.

use proptest::prelude::*;

use crate::config::LintConfig;
use crate::features::Feature;
use crate::overlays;

fn any_feature() -> impl Strategy<Value = Feature> {
    prop_oneof![
        Just(Feature::React),
        Just(Feature::Flow),
        Just(Feature::Webpack),
        Just(Feature::Browser),
    ]
}

fn has_no_duplicates(list: &[String]) -> bool {
    let mut seen = list.to_vec();
    seen.sort_unstable();
    seen.dedup();
    seen.len() == list.len()
}

proptest! {
    /// Any feature sequence, repeats included, composes without duplicating
    /// an extends or plugins identifier.
    #[test]
    fn compose_never_duplicates_identifiers(
        features in prop::collection::vec(any_feature(), 0..8)
    ) {
        let config = overlays::compose(LintConfig::base(), &features);
        prop_assert!(has_no_duplicates(&config.extends));
        prop_assert!(has_no_duplicates(&config.plugins));
    }

    /// Re-applying any overlay on top of an arbitrary composition changes
    /// nothing.
    #[test]
    fn reapplying_an_overlay_is_idempotent(
        features in prop::collection::vec(any_feature(), 0..6),
        repeated in any_feature()
    ) {
        let once = overlays::apply(
            overlays::compose(LintConfig::base(), &features),
            repeated,
        );
        let twice = overlays::apply(once.clone(), repeated);
        prop_assert_eq!(twice, once);
    }

    /// The base document is never mutated in place: composing from a fresh
    /// base always starts from the same state.
    #[test]
    fn compose_is_deterministic(
        features in prop::collection::vec(any_feature(), 0..6)
    ) {
        let first = overlays::compose(LintConfig::base(), &features);
        let second = overlays::compose(LintConfig::base(), &features);
        prop_assert_eq!(first, second);
    }
}
