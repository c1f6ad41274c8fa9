pub mod chat_data;
pub mod message;

// Re-export per comodità
pub use chat_data::{ChatDataItem, PLACEHOLDER_CIPHERTEXT};
pub use message::ArchivedMessage;
