//! Decodifica dei record `chatdata` in messaggi.
//!
//! Il consumer dipende da [`ChatDecoder`], non dai dettagli del payload cifrato.
//! Nei test si usa [`PlaintextDecoder`], che legge il campo in chiaro iniettato
//! dal mock (decode-bypass) e non decifra mai nulla: è un contratto di fixture,
//! non un comportamento del sistema reale.

use thiserror::Error;

use crate::models::{ArchivedMessage, ChatDataItem};

#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("seq {seq}: no plaintext, the encrypted payload needs a real decoder")]
    Encrypted { seq: u64 },
    #[error("seq {seq}: invalid plaintext: {source}")]
    Malformed {
        seq: u64,
        #[source]
        source: serde_json::Error,
    },
    #[error("seq {seq}: plaintext carries seq {found}")]
    SequenceMismatch { seq: u64, found: u64 },
}

/// Capacità di trasformare un record di archivio nel messaggio originale.
pub trait ChatDecoder: Send + Sync {
    fn decode(&self, item: &ChatDataItem) -> Result<ArchivedMessage, DecodeError>;
}

/// Decoder identità: usa `decrypt_chat_msg` se presente, altrimenti fallisce.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlaintextDecoder;

impl ChatDecoder for PlaintextDecoder {
    fn decode(&self, item: &ChatDataItem) -> Result<ArchivedMessage, DecodeError> {
        let plain = item
            .decrypted_payload
            .as_deref()
            .filter(|s| !s.trim().is_empty())
            .ok_or(DecodeError::Encrypted { seq: item.sequence })?;
        let message: ArchivedMessage = serde_json::from_str(plain)
            .map_err(|source| DecodeError::Malformed { seq: item.sequence, source })?;
        if message.sequence != item.sequence {
            return Err(DecodeError::SequenceMismatch { seq: item.sequence, found: message.sequence });
        }
        Ok(message)
    }
}

/// Esito della decodifica di una pagina: i record falliti non bloccano gli altri.
#[derive(Debug, Default)]
pub struct DecodedBatch {
    pub messages: Vec<ArchivedMessage>,
    pub failures: Vec<DecodeError>,
}

pub fn decode_batch<D: ChatDecoder + ?Sized>(decoder: &D, items: &[ChatDataItem]) -> DecodedBatch {
    let mut batch = DecodedBatch::default();
    for item in items {
        match decoder.decode(item) {
            Ok(m) => batch.messages.push(m),
            Err(e) => batch.failures.push(e),
        }
    }
    batch
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PLACEHOLDER_CIPHERTEXT;

    fn sample() -> ArchivedMessage {
        ArchivedMessage::text(1001, "msg_001", "user_zhangsan", "group_001", 1_700_000_000, "ciao")
    }

    #[test]
    fn plaintext_decoder_uses_injected_field() {
        let item = ChatDataItem::with_plaintext(&sample()).expect("serialize");
        let decoded = PlaintextDecoder.decode(&item).expect("decode");
        assert_eq!(decoded, sample());
    }

    #[test]
    fn missing_or_blank_plaintext_is_reported_as_encrypted() {
        let mut item = ChatDataItem::with_plaintext(&sample()).expect("serialize");
        item.decrypted_payload = None;
        assert!(matches!(PlaintextDecoder.decode(&item), Err(DecodeError::Encrypted { seq: 1001 })));

        item.decrypted_payload = Some("   ".to_string());
        assert!(matches!(PlaintextDecoder.decode(&item), Err(DecodeError::Encrypted { seq: 1001 })));
    }

    #[test]
    fn garbage_plaintext_is_malformed() {
        let item = ChatDataItem {
            sequence: 7,
            message_id: "msg_x".to_string(),
            encrypted_payload: PLACEHOLDER_CIPHERTEXT.to_string(),
            decrypted_payload: Some("{not json".to_string()),
        };
        assert!(matches!(PlaintextDecoder.decode(&item), Err(DecodeError::Malformed { seq: 7, .. })));
    }

    #[test]
    fn plaintext_for_another_sequence_is_rejected() {
        let mut item = ChatDataItem::with_plaintext(&sample()).expect("serialize");
        item.sequence = 1002;
        assert!(matches!(
            PlaintextDecoder.decode(&item),
            Err(DecodeError::SequenceMismatch { seq: 1002, found: 1001 })
        ));
    }

    #[test]
    fn batch_collects_failures_without_aborting() {
        let good = ChatDataItem::with_plaintext(&sample()).expect("serialize");
        let mut bad = good.clone();
        bad.sequence = 1005;
        bad.decrypted_payload = None;

        let batch = decode_batch(&PlaintextDecoder, &[bad, good]);
        assert_eq!(batch.messages.len(), 1);
        assert_eq!(batch.failures.len(), 1);
    }
}
