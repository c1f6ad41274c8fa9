//! Stato di processo del mock: corpus immutabile, token statico, blob media.
//! Costruito una volta all'avvio e passato agli handler tramite `AppState`.

use anyhow::bail;
use archivio_core::{
    next_cursor, AccessTokenResponse, ApiError, ArchivedMessage, ChatDataItem, ChatDataRequest,
    ChatDataResponse, ImageBody,
};

pub const MOCK_ACCESS_TOKEN: &str = "mock_access_token_123456";
pub const TOKEN_EXPIRES_IN: u64 = 7200;
pub const FIXTURE_ROOM: &str = "group_001";

/// GIF 1x1 trasparente restituita per qualsiasi richiesta media.
pub const PLACEHOLDER_GIF: &[u8] = b"\x47\x49\x46\x38\x39\x61\x01\x00\x01\x00\x80\x00\x00\xff\xff\xff\x00\x00\x00\x2c\x00\x00\x00\x00\x01\x00\x01\x00\x00\x02\x02\x44\x01\x00\x3b";

/// Messaggi ordinati per `sequence` strettamente crescente (i buchi sono ammessi).
#[derive(Debug, Clone)]
pub struct Corpus {
    messages: Vec<ArchivedMessage>,
}

impl Corpus {
    pub fn new(messages: Vec<ArchivedMessage>) -> anyhow::Result<Self> {
        for pair in messages.windows(2) {
            if pair[1].sequence <= pair[0].sequence {
                bail!(
                    "corpus not strictly increasing: seq {} after {}",
                    pair[1].sequence,
                    pair[0].sequence
                );
            }
        }
        Ok(Self { messages })
    }

    /// Al massimo `limit` messaggi con `sequence > after`, in ordine crescente.
    pub fn after(&self, after: u64, limit: u64) -> &[ArchivedMessage] {
        let start = self.messages.partition_point(|m| m.sequence <= after);
        let limit = usize::try_from(limit).unwrap_or(usize::MAX);
        let end = start.saturating_add(limit).min(self.messages.len());
        &self.messages[start..end]
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

#[derive(Debug, Clone)]
pub struct Fixture {
    access_token: String,
    expires_in: u64,
    corpus: Corpus,
    media: &'static [u8],
}

impl Fixture {
    pub fn new(access_token: &str, corpus: Corpus) -> Self {
        Self {
            access_token: access_token.to_string(),
            expires_in: TOKEN_EXPIRES_IN,
            corpus,
            media: PLACEHOLDER_GIF,
        }
    }

    /// Il corpus standard: tre messaggi nella stessa room, `msgtime` a partire da `base_time`.
    pub fn standard(base_time: i64) -> anyhow::Result<Self> {
        let corpus = Corpus::new(vec![
            ArchivedMessage::text(
                1001,
                "msg_001",
                "user_zhangsan",
                FIXTURE_ROOM,
                base_time,
                "你好，我家里的网络坏了，怎么报修？",
            ),
            ArchivedMessage::text(
                1002,
                "msg_002",
                "user_lisi",
                FIXTURE_ROOM,
                base_time + 1,
                "今天天气真好",
            ),
            ArchivedMessage::image(
                1003,
                "msg_003",
                "user_wangwu",
                FIXTURE_ROOM,
                base_time + 2,
                ImageBody {
                    file_reference: "mock_image_file_id_123".to_string(),
                    checksum: "md5_value".to_string(),
                    size_bytes: 1024,
                },
            ),
        ])?;
        Ok(Self::new(MOCK_ACCESS_TOKEN, corpus))
    }

    pub fn corpus(&self) -> &Corpus {
        &self.corpus
    }

    /// Sempre lo stesso token: nessuna scadenza, nessuna rotazione.
    pub fn issue_token(&self) -> AccessTokenResponse {
        let ok = ApiError::ok();
        AccessTokenResponse {
            errcode: ok.errcode,
            errmsg: ok.errmsg,
            access_token: self.access_token.clone(),
            expires_in: self.expires_in,
        }
    }

    pub fn accepts(&self, token: Option<&str>) -> bool {
        token == Some(self.access_token.as_str())
    }

    /// Pagina di chatdata dopo `req.seq`. Token errato -> 40014 senza dati.
    pub fn fetch_chat_data(
        &self,
        token: Option<&str>,
        req: ChatDataRequest,
    ) -> Result<ChatDataResponse, serde_json::Error> {
        if !self.accepts(token) {
            return Ok(ChatDataResponse::error(ApiError::invalid_access_token()));
        }
        let batch = self.corpus.after(req.seq, req.limit);
        let chatdata = batch
            .iter()
            .map(ChatDataItem::with_plaintext)
            .collect::<Result<Vec<_>, _>>()?;
        let next_seq = next_cursor(batch.last().map(|m| m.sequence), req.seq);
        Ok(ChatDataResponse::page(chatdata, next_seq))
    }

    /// Il riferimento viene ignorato: il blob è sempre lo stesso.
    pub fn media(&self) -> &'static [u8] {
        self.media
    }
}
