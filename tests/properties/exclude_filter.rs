//! Property tests for prefix exclusion.

use proptest::prelude::*;

use revship::ExcludeFilter;

fn relative_path() -> impl Strategy<Value = String> {
    let segment = proptest::string::string_regex("[a-z0-9._-]{1,8}").unwrap();
    proptest::collection::vec(segment, 1..=4).prop_map(|segments| segments.join("/"))
}

fn prefix() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-z0-9._/-]{0,10}").unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 96,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: The order prefixes are given in never changes the outcome.
    #[test]
    fn property_order_independent(
        prefixes in proptest::collection::vec(prefix(), 0..6),
        path in relative_path(),
    ) {
        let forward = ExcludeFilter::new(prefixes.iter().cloned());
        let reversed = ExcludeFilter::new(prefixes.iter().rev().cloned());
        prop_assert_eq!(forward.is_excluded(&path), reversed.is_excluded(&path));
        prop_assert_eq!(forward, reversed);
    }

    /// PROPERTY: A path is excluded iff some prefix starts it.
    #[test]
    fn property_matches_plain_prefix_semantics(
        prefixes in proptest::collection::vec(prefix(), 0..6),
        path in relative_path(),
    ) {
        let filter = ExcludeFilter::new(prefixes.iter().cloned());
        let expected = prefixes
            .iter()
            .any(|p| path.starts_with(p.as_str()));
        prop_assert_eq!(filter.is_excluded(&path), expected);
        prop_assert_eq!(filter.matching_prefix(&path).is_some(), expected);
    }

    /// PROPERTY: Every path below an excluded directory is excluded.
    #[test]
    fn property_directory_prefix_covers_children(
        dir in relative_path(),
        child in relative_path(),
    ) {
        let filter = ExcludeFilter::new([format!("{}/", dir)]);
        let child_path = format!("{}/{}", dir, child);
        prop_assert!(filter.is_excluded(&child_path));
    }
}
