use serde::{Deserialize, Serialize};

/// Messaggio di chat archiviato, nel formato JSON dell'API di archivio
/// (è quello che finisce serializzato dentro `decrypt_chat_msg`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArchivedMessage {
    #[serde(rename = "seq")]
    pub sequence: u64,
    #[serde(rename = "msgid")]
    pub message_id: String,
    pub action: MessageAction,
    #[serde(rename = "from")]
    pub sender: String,
    #[serde(rename = "tolist")]
    pub recipients: Vec<String>,
    #[serde(rename = "roomid")]
    pub room_id: String,
    #[serde(rename = "msgtime")]
    pub timestamp: i64, // unix seconds
    /// `msgtype` + corpo del tipo corrispondente (`text` o `image`).
    #[serde(flatten)]
    pub payload: MessagePayload,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MessageAction {
    #[serde(rename = "send")]
    Send,
}

/// Contenuto del messaggio, discriminato da `msgtype`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "msgtype")]
pub enum MessagePayload {
    #[serde(rename = "text")]
    Text { text: TextBody },
    #[serde(rename = "image")]
    Image { image: ImageBody },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextBody {
    pub content: String,
}

/// Riferimento a un media: il file vero si scarica dall'endpoint media.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageBody {
    #[serde(rename = "sdkfileid")]
    pub file_reference: String,
    #[serde(rename = "md5")]
    pub checksum: String,
    #[serde(rename = "filesize")]
    pub size_bytes: u64,
}

impl ArchivedMessage {
    /// Messaggio di testo inviato in una room; i destinatari sono la room stessa.
    pub fn text(
        sequence: u64,
        message_id: &str,
        sender: &str,
        room_id: &str,
        timestamp: i64,
        content: &str,
    ) -> Self {
        Self::new(
            sequence,
            message_id,
            sender,
            room_id,
            timestamp,
            MessagePayload::Text { text: TextBody { content: content.to_string() } },
        )
    }

    pub fn image(
        sequence: u64,
        message_id: &str,
        sender: &str,
        room_id: &str,
        timestamp: i64,
        image: ImageBody,
    ) -> Self {
        Self::new(sequence, message_id, sender, room_id, timestamp, MessagePayload::Image { image })
    }

    fn new(
        sequence: u64,
        message_id: &str,
        sender: &str,
        room_id: &str,
        timestamp: i64,
        payload: MessagePayload,
    ) -> Self {
        Self {
            sequence,
            message_id: message_id.to_string(),
            action: MessageAction::Send,
            sender: sender.to_string(),
            recipients: vec![room_id.to_string()],
            room_id: room_id.to_string(),
            timestamp,
            payload,
        }
    }

    /// Valore di `msgtype` sul wire.
    pub fn message_type(&self) -> &'static str {
        match self.payload {
            MessagePayload::Text { .. } => "text",
            MessagePayload::Image { .. } => "image",
        }
    }
}
