use serde::{Deserialize, Serialize};

use super::message::ArchivedMessage;

/// Valore inerte messo nel campo cifrato: nessuno deve provare a decifrarlo.
pub const PLACEHOLDER_CIPHERTEXT: &str = "mock_encrypted_content_ignored";

/// Record di `chatdata`: payload cifrato più, opzionalmente, il plaintext già pronto.
///
/// Il mock valorizza sempre `decrypt_chat_msg` (decode-bypass): un consumer che
/// usa il plaintext quando presente non esegue mai la decifratura.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatDataItem {
    #[serde(rename = "seq")]
    pub sequence: u64,
    #[serde(rename = "msgid")]
    pub message_id: String,
    #[serde(rename = "encrypt_chat_msg")]
    pub encrypted_payload: String,
    #[serde(rename = "decrypt_chat_msg", default, skip_serializing_if = "Option::is_none")]
    pub decrypted_payload: Option<String>,
}

impl ChatDataItem {
    /// Costruisce il record con il messaggio serializzato così com'è nel campo in chiaro.
    pub fn with_plaintext(message: &ArchivedMessage) -> Result<Self, serde_json::Error> {
        Ok(Self {
            sequence: message.sequence,
            message_id: message.message_id.clone(),
            encrypted_payload: PLACEHOLDER_CIPHERTEXT.to_string(),
            decrypted_payload: Some(serde_json::to_string(message)?),
        })
    }
}
