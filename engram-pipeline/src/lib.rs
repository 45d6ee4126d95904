//! # engram-pipeline
//!
//! End-to-end orchestration of one conversational retrieval turn:
//! context window → reformulation → search → response synthesis →
//! history recording.

mod engine;

pub use engine::ConversationalPipeline;
