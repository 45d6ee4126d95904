use engram_core::models::Role;
use engram_memory::ConversationMemory;
use proptest::prelude::*;

fn role_strategy() -> impl Strategy<Value = Role> {
    prop_oneof![Just(Role::User), Just(Role::Assistant)]
}

proptest! {
    #[test]
    fn buffer_never_exceeds_capacity(
        max_history in 1usize..20,
        contents in proptest::collection::vec(".{0,30}", 0..60),
    ) {
        let mut memory = ConversationMemory::with_max_history(max_history);
        for content in &contents {
            memory.add_message(Role::User, content.clone());
            prop_assert!(memory.len() <= max_history);
        }
    }

    #[test]
    fn buffer_holds_most_recent_messages_in_order(
        max_history in 1usize..20,
        contents in proptest::collection::vec("[a-z]{1,10}", 1..60),
    ) {
        let mut memory = ConversationMemory::with_max_history(max_history);
        for content in &contents {
            memory.add_message(Role::User, content.clone());
        }
        let expected: Vec<_> = contents
            .iter()
            .rev()
            .take(max_history)
            .rev()
            .cloned()
            .collect();
        let held: Vec<_> = memory
            .get_history(None)
            .into_iter()
            .map(|m| m.content)
            .collect();
        prop_assert_eq!(held, expected);
    }

    #[test]
    fn window_returns_min_of_n_and_len(
        n in 0usize..40,
        count in 0usize..30,
    ) {
        let mut memory = ConversationMemory::default();
        for i in 0..count {
            memory.add_message(Role::User, format!("m{i}"));
        }
        let window = memory.get_context_window(n);
        prop_assert_eq!(window.len(), n.min(count));
        // Chronological order: timestamps never decrease.
        for pair in window.windows(2) {
            prop_assert!(pair[0].timestamp <= pair[1].timestamp);
        }
    }

    #[test]
    fn history_none_equals_history_of_len(
        roles in proptest::collection::vec(role_strategy(), 0..30),
    ) {
        let mut memory = ConversationMemory::default();
        for (i, role) in roles.iter().enumerate() {
            memory.add_message(*role, format!("m{i}"));
        }
        let all = memory.get_history(None);
        let sized = memory.get_history(Some(memory.len()));
        prop_assert_eq!(all, sized);
    }
}
