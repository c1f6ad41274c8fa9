pub mod http;
pub mod webhook;

// Re-export comodi
pub use http::{AccessTokenResponse, ChatDataRequest, ChatDataResponse};
pub use webhook::GroupMessage;
