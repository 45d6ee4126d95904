use engram_core::models::{Message, Role};
use engram_reformulation::QueryReformulator;
use proptest::prelude::*;

/// Queries built only from words outside the pronoun set.
fn non_pronoun_query() -> impl Strategy<Value = String> {
    proptest::collection::vec(
        prop_oneof![
            Just("compare"),
            Just("rust"),
            Just("python"),
            Just("databases"),
            Just("explain"),
            Just("frameworks"),
        ],
        1..6,
    )
    .prop_map(|words| words.join(" "))
}

fn history_strategy() -> impl Strategy<Value = Vec<Message>> {
    proptest::collection::vec(
        ("[a-zA-Z ]{0,40}", proptest::bool::ANY).prop_map(|(content, is_user)| {
            let role = if is_user { Role::User } else { Role::Assistant };
            Message::new(role, content)
        }),
        0..10,
    )
}

proptest! {
    #[test]
    fn non_matching_query_is_identity(
        query in non_pronoun_query(),
        history in history_strategy(),
    ) {
        let reformulator = QueryReformulator::default();
        prop_assert_eq!(reformulator.reformulate(&query, &history), query);
    }

    #[test]
    fn empty_history_is_identity(query in ".{0,80}") {
        let reformulator = QueryReformulator::default();
        prop_assert_eq!(reformulator.reformulate(&query, &[]), query);
    }

    #[test]
    fn rewrite_always_preserves_query_as_suffix(
        topic in "[a-zA-Z ]{1,150}",
        query in "What about (it|them|this)\\?",
    ) {
        let reformulator = QueryReformulator::default();
        let history = vec![Message::new(Role::User, topic)];
        let result = reformulator.reformulate(&query, &history);
        prop_assert!(result.ends_with(&query));
    }

    #[test]
    fn topic_prefix_never_exceeds_100_chars(
        topic in "[a-zA-Z]{101,200}",
    ) {
        let reformulator = QueryReformulator::default();
        let history = vec![Message::new(Role::User, topic.clone())];
        let result = reformulator.reformulate("What about it?", &history);
        // Between "Regarding " and ": What about it?" sits the topic.
        let rewritten = result
            .strip_prefix("Regarding ")
            .and_then(|r| r.strip_suffix(": What about it?"))
            .expect("query with pronoun and user history is rewritten");
        prop_assert_eq!(rewritten.chars().count(), 100);
        prop_assert_eq!(rewritten, &topic[..100]);
    }
}
