pub mod conversation_turn;
pub mod message;
pub mod scored_document;

pub use conversation_turn::ConversationTurn;
pub use message::{Message, Role};
pub use scored_document::ScoredDocument;
