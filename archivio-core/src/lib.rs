//! archivio-core: tipi condivisi tra mock server e driver (corpus, DTO HTTP, record di chat, decoder).
//! Niente I/O: solo modelli serde e funzioni pure.

pub mod decoder;
pub mod error;
pub mod models;
pub mod protocol;
pub mod utils;

// Re-export utili per ridurre i percorsi nei crate server/driver
pub use decoder::{decode_batch, ChatDecoder, DecodeError, DecodedBatch, PlaintextDecoder};
pub use error::{ApiError, ERRCODE_INVALID_ACCESS_TOKEN, ERRCODE_OK};
pub use models::{
    chat_data::{ChatDataItem, PLACEHOLDER_CIPHERTEXT},
    message::{ArchivedMessage, ImageBody, MessageAction, MessagePayload, TextBody},
};
pub use protocol::http::{AccessTokenResponse, ChatDataRequest, ChatDataResponse};
pub use protocol::webhook::GroupMessage;
pub use utils::{is_exhausted, new_trace_id, next_cursor, now_unix};
