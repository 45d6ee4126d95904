//! # engram-reformulation
//!
//! Deterministic, rule-based query rewriting. A follow-up query containing
//! a pronoun is prefixed with the most recent user topic so it stands alone
//! for retrieval. Purely lexical: it can over-trigger (pronoun present but
//! unambiguous) and under-trigger (ambiguous reference without a listed
//! pronoun).

mod rewriter;

pub use rewriter::QueryReformulator;
