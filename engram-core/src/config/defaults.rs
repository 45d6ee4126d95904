//! Default values backing the `Default` impls of the config structs.

pub use crate::constants::{
    DEFAULT_CONTEXT_WINDOW, DEFAULT_MAX_HISTORY, DEFAULT_MODEL_NAME, DEFAULT_PIPELINE_TOP_K,
    DEFAULT_SEARCH_TOP_K,
};
