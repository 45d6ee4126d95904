//! ConversationMemory — the bounded message buffer.

use std::collections::VecDeque;

use engram_core::config::MemoryConfig;
use engram_core::models::{Message, Role};

/// Bounded, ordered conversation log.
///
/// Messages are appended at the back; once the buffer exceeds
/// `max_history`, the oldest messages are evicted from the front.
/// Each instance owns its buffer, so independent pipelines never interfere.
#[derive(Debug, Clone)]
pub struct ConversationMemory {
    max_history: usize,
    messages: VecDeque<Message>,
}

impl ConversationMemory {
    /// Create a memory with the given configuration.
    pub fn new(config: MemoryConfig) -> Self {
        Self {
            max_history: config.max_history,
            messages: VecDeque::new(),
        }
    }

    /// Create a memory with an explicit capacity.
    pub fn with_max_history(max_history: usize) -> Self {
        Self::new(MemoryConfig { max_history })
    }

    /// The configured capacity.
    pub fn max_history(&self) -> usize {
        self.max_history
    }

    /// Append a message stamped with the current time, evicting from the
    /// front until the buffer fits `max_history` again.
    pub fn add_message(&mut self, role: Role, content: impl Into<String>) {
        self.messages.push_back(Message::new(role, content));
        while self.messages.len() > self.max_history {
            self.messages.pop_front();
        }
    }

    /// Cloned snapshot of the last `max_messages` entries in chronological
    /// order, or the full buffer when `None`. Over-large requests clamp
    /// silently to the buffer length.
    pub fn get_history(&self, max_messages: Option<usize>) -> Vec<Message> {
        match max_messages {
            None => self.messages.iter().cloned().collect(),
            Some(n) => {
                let skip = self.messages.len().saturating_sub(n);
                self.messages.iter().skip(skip).cloned().collect()
            }
        }
    }

    /// The last `n` messages in chronological order — the view handed to
    /// query reformulation.
    pub fn get_context_window(&self, n: usize) -> Vec<Message> {
        self.get_history(Some(n))
    }

    /// Empty the buffer. Subsequent adds start a fresh sequence.
    pub fn clear(&mut self) {
        self.messages.clear();
    }

    /// Render the full buffer as `"<Label>: <content>"` lines joined by
    /// newlines, chronological. Empty buffer renders as the empty string.
    pub fn summarize_history(&self) -> String {
        self.messages
            .iter()
            .map(|m| format!("{}: {}", m.role.label(), m.content))
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

impl Default for ConversationMemory {
    fn default() -> Self {
        Self::new(MemoryConfig::default())
    }
}
