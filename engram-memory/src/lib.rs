//! # engram-memory
//!
//! Bounded, ordered log of conversation messages with FIFO eviction
//! and windowed views. All mutation is in-process, single-owner; no I/O.

mod buffer;

pub use buffer::ConversationMemory;
