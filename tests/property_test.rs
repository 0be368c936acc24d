// Copyright (c) 2026 shaneyale (shaneyale86@gmail.com)
// All rights reserved.

use etag_validator::{any_matches, generate, Algorithm, Strength};
use proptest::prelude::*;

fn algorithm() -> impl Strategy<Value = Algorithm> {
    prop_oneof![
        Just(Algorithm::Sha256),
        Just(Algorithm::Sha1),
        Just(Algorithm::Md5),
    ]
}

fn strength() -> impl Strategy<Value = Strength> {
    prop_oneof![Just(Strength::Strong), Just(Strength::Weak)]
}

#[cfg(test)]
mod property_tests {
    use super::*;

    proptest! {
        #[test]
        fn prop_generate_is_deterministic(
            body in proptest::collection::vec(any::<u8>(), 0..512),
            algorithm in algorithm(),
            strength in strength(),
        ) {
            prop_assert_eq!(
                generate(&body, algorithm, strength),
                generate(&body, algorithm, strength)
            );
        }

        #[test]
        fn prop_generated_tag_matches_itself_and_its_weak_form(
            body in proptest::collection::vec(any::<u8>(), 0..256),
            algorithm in algorithm(),
        ) {
            let strong = generate(&body, algorithm, Strength::Strong);
            let weak = generate(&body, algorithm, Strength::Weak);
            prop_assert!(any_matches(strong.as_str(), weak.as_str()));
            prop_assert!(any_matches(weak.as_str(), strong.as_str()));
        }

        #[test]
        fn prop_weak_strong_symmetry(id in "[a-zA-Z0-9]{1,32}") {
            let strong = format!("\"{}\"", id);
            let weak = format!("W/\"{}\"", id);
            prop_assert!(any_matches(&strong, &weak));
            prop_assert!(any_matches(&weak, &strong));
        }

        #[test]
        fn prop_wildcard_always_matches(server in ".*") {
            prop_assert!(any_matches("*", &server));
        }

        #[test]
        fn prop_empty_never_matches(server in ".*") {
            prop_assert!(!any_matches("", &server));
        }

        #[test]
        fn prop_list_matches_when_member_present(
            ids in proptest::collection::vec("[a-f0-9]{4,16}", 1..6),
            pick in any::<prop::sample::Index>(),
        ) {
            let raw = ids
                .iter()
                .map(|id| format!("\"{}\"", id))
                .collect::<Vec<_>>()
                .join(", ");
            let target = format!("\"{}\"", ids[pick.index(ids.len())]);
            prop_assert!(any_matches(&raw, &target));
            prop_assert!(!any_matches(&raw, "\"not-hex-zz\""));
        }
    }
}
