//! Property tests for the exclusion set invariant.

use std::path::Path;

use proptest::prelude::*;

use ferry::ExclusionSet;

fn extras_strategy() -> impl Strategy<Value = Vec<String>> {
    let pattern = proptest::string::string_regex("[a-z0-9.*_-]{1,12}").unwrap();
    proptest::collection::vec(pattern, 0..5)
}

/// Extras as an operator might actually type them, negation included.
fn raw_extras_strategy() -> impl Strategy<Value = Vec<String>> {
    let pattern = proptest::string::string_regex("!?[a-z0-9.*_-]{1,12}").unwrap();
    proptest::collection::vec(pattern, 0..5)
}

fn relative_path_strategy() -> impl Strategy<Value = String> {
    let segment = proptest::string::string_regex("[a-z0-9._-]{1,12}").unwrap();
    proptest::collection::vec(segment, 1..=4).prop_map(|segments| segments.join("/"))
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: extras either build a set that keeps the baseline matching,
    /// or (when negated) are rejected outright. No input defeats the baseline.
    #[test]
    fn baseline_survives_any_extras(extras in raw_extras_strategy()) {
        match ExclusionSet::with_extras(&extras) {
            Ok(set) => {
                prop_assert!(extras.iter().all(|e| !e.starts_with('!')));
                prop_assert!(set.contains(".git"));
                prop_assert!(set.contains(".env"));
                prop_assert!(set.is_excluded(Path::new(".env"), false));
                prop_assert!(set.is_excluded(Path::new(".git/config"), false));
            }
            Err(_) => {
                prop_assert!(extras.iter().any(|e| e.starts_with('!')));
            }
        }
    }

    /// PROPERTY: matching never panics on arbitrary relative paths.
    #[test]
    fn matching_never_panics(extras in extras_strategy(), path in relative_path_strategy()) {
        let set = ExclusionSet::with_extras(&extras).unwrap();
        let _ = set.is_excluded(Path::new(&path), false);
        let _ = set.is_excluded(Path::new(&path), true);
    }

    /// PROPERTY: exclusion decisions are stable across set rebuilds.
    #[test]
    fn decisions_are_deterministic(extras in extras_strategy(), path in relative_path_strategy()) {
        let first = ExclusionSet::with_extras(&extras).unwrap();
        let second = ExclusionSet::with_extras(&extras).unwrap();
        prop_assert_eq!(
            first.is_excluded(Path::new(&path), false),
            second.is_excluded(Path::new(&path), false)
        );
    }
}
