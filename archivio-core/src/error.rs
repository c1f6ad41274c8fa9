use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const ERRCODE_OK: i64 = 0;
/// Token assente o diverso da quello emesso.
pub const ERRCODE_INVALID_ACCESS_TOKEN: i64 = 40014;

/// Envelope di errore dell'API di archivio: codice numerico + messaggio.
/// Gli errori viaggiano nel body (HTTP 200), mai come status code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[error("errcode {errcode}: {errmsg}")]
pub struct ApiError {
    pub errcode: i64,
    pub errmsg: String,
}

impl ApiError {
    pub fn ok() -> Self {
        Self { errcode: ERRCODE_OK, errmsg: "ok".to_string() }
    }

    pub fn invalid_access_token() -> Self {
        Self {
            errcode: ERRCODE_INVALID_ACCESS_TOKEN,
            errmsg: "invalid access_token".to_string(),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.errcode == ERRCODE_OK
    }
}
