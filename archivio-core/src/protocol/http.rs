use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{error::ApiError, models::ChatDataItem};
/*
    dto per l'API di archivio (gettoken / getchatdata).
    I nomi dei campi seguono l'API reale, quindi niente rename_all.
*/

pub const DEFAULT_FETCH_LIMIT: u64 = 10;

// Token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessTokenResponse {
    pub errcode: i64,
    pub errmsg: String,
    pub access_token: String,
    /// Solo informativo: la scadenza non viene mai applicata.
    pub expires_in: u64,
}

// Fetch: `seq` è il limite inferiore esclusivo, `limit` il massimo di record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatDataRequest {
    #[serde(default)]
    pub seq: u64,
    #[serde(default = "default_limit")]
    pub limit: u64,
}

fn default_limit() -> u64 {
    DEFAULT_FETCH_LIMIT
}

impl Default for ChatDataRequest {
    fn default() -> Self {
        Self { seq: 0, limit: DEFAULT_FETCH_LIMIT }
    }
}

impl ChatDataRequest {
    /// Parsing tollerante del body: JSON non valido, campi mancanti o non interi
    /// non negativi ricadono sui default campo per campo. Non fallisce mai.
    pub fn from_lenient_json(body: &[u8]) -> Self {
        let value: Value = match serde_json::from_slice(body) {
            Ok(v) => v,
            Err(_) => return Self::default(),
        };
        Self {
            seq: value.get("seq").and_then(Value::as_u64).unwrap_or(0),
            limit: value
                .get("limit")
                .and_then(Value::as_u64)
                .unwrap_or(DEFAULT_FETCH_LIMIT),
        }
    }
}

/// Risposta di getchatdata. In caso di errore ci sono solo `errcode`/`errmsg`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatDataResponse {
    pub errcode: i64,
    pub errmsg: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chatdata: Option<Vec<ChatDataItem>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_seq: Option<u64>,
}

impl ChatDataResponse {
    pub fn page(chatdata: Vec<ChatDataItem>, next_seq: u64) -> Self {
        let ok = ApiError::ok();
        Self {
            errcode: ok.errcode,
            errmsg: ok.errmsg,
            chatdata: Some(chatdata),
            next_seq: Some(next_seq),
        }
    }

    pub fn error(err: ApiError) -> Self {
        Self { errcode: err.errcode, errmsg: err.errmsg, chatdata: None, next_seq: None }
    }

    /// `Err` con l'envelope di errore se `errcode` non è 0.
    pub fn into_result(self) -> Result<Self, ApiError> {
        let status = ApiError { errcode: self.errcode, errmsg: self.errmsg.clone() };
        if status.is_ok() {
            Ok(self)
        } else {
            Err(status)
        }
    }
}
