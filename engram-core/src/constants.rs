/// Engram system version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Maximum number of messages retained in conversation memory.
pub const DEFAULT_MAX_HISTORY: usize = 50;

/// Number of recent messages fed to query reformulation.
pub const DEFAULT_CONTEXT_WINDOW: usize = 10;

/// Default result count for a retriever search.
pub const DEFAULT_SEARCH_TOP_K: usize = 5;

/// Default result count for a pipeline query.
pub const DEFAULT_PIPELINE_TOP_K: usize = 3;

/// Topic prefix length (characters) used when rewriting a follow-up query.
pub const TOPIC_PREFIX_CHARS: usize = 100;

/// Number of top sources concatenated into a response.
pub const RESPONSE_SOURCE_LIMIT: usize = 2;

/// Response returned when no source matches a query.
pub const EMPTY_INDEX_RESPONSE: &str = "No relevant information found.";

/// Embedding model identifier handed opaquely to the provider.
pub const DEFAULT_MODEL_NAME: &str = "all-MiniLM-L6-v2";
