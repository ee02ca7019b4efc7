//! Property-based tests for phase rendering.
//!
//! These tests use proptest to check that file layout and lookup-table
//! selection hold for arbitrary indices, not just the default ranges.

#[cfg(test)]
mod proptest_tests {
    use crate::phases::backend::{method_for, METHODS};
    use crate::phases::docs::{topic_for, TOPICS};
    use crate::phases::refinement::{choose_message, SCOPES, SUBJECTS, TYPES};
    use crate::phases::ContentKind;
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn any_kind() -> impl Strategy<Value = ContentKind> {
        prop::sample::select(ContentKind::ALL.to_vec())
    }

    // ============================================================================
    // path layout property tests
    // ============================================================================

    proptest! {
        /// Property: distinct (kind, index) pairs never share a path
        #[test]
        fn paths_are_injective(
            a_kind in any_kind(),
            a_index in 0u32..100_000,
            b_kind in any_kind(),
            b_index in 0u32..100_000,
        ) {
            prop_assume!((a_kind, a_index) != (b_kind, b_index));
            prop_assert_ne!(a_kind.path(a_index), b_kind.path(b_index));
        }

        /// Property: every path lives under its kind's directory
        #[test]
        fn paths_stay_in_kind_directory(kind in any_kind(), index in 0u32..100_000) {
            let path = kind.path(index);
            prop_assert!(path.starts_with(kind.directory()));
            prop_assert!(path.is_relative());
        }

        /// Property: rendering is deterministic
        #[test]
        fn render_is_deterministic(kind in any_kind(), index in 0u32..10_000) {
            prop_assert_eq!(kind.render(index), kind.render(index));
        }
    }

    // ============================================================================
    // lookup table property tests
    // ============================================================================

    proptest! {
        /// Property: documentation topics repeat every TOPICS.len() pages
        #[test]
        fn topic_is_periodic(index in 0u32..1_000_000) {
            prop_assert_eq!(topic_for(index), topic_for(index + TOPICS.len() as u32));
            prop_assert_eq!(topic_for(index), TOPICS[index as usize % TOPICS.len()]);
        }

        /// Property: route methods repeat every METHODS.len() routes
        #[test]
        fn method_is_periodic(index in 0u32..1_000_000) {
            prop_assert_eq!(method_for(index), method_for(index + METHODS.len() as u32));
        }

        /// Property: the documentation commit names the selected topic
        #[test]
        fn documentation_message_names_topic(index in 0u32..10_000) {
            let artifact = ContentKind::Documentation.render(index);
            let expected = format!("docs: add {} documentation part {}", topic_for(index), index);
            prop_assert_eq!(artifact.message.to_string(), expected);
        }

        /// Property: refinement messages come from the candidate sets for any seed
        #[test]
        fn refinement_choices_are_bounded(seed in any::<u64>()) {
            let mut rng = StdRng::seed_from_u64(seed);
            let message = choose_message(&mut rng);
            prop_assert!(TYPES.contains(&message.kind));
            prop_assert!(SCOPES.contains(&message.scope.as_str()));
            prop_assert!(SUBJECTS.contains(&message.subject.as_str()));
        }
    }
}
