//! Consumer di prova per l'API di archivio: token, paginazione a cursore
//! e decodifica tramite un [`ChatDecoder`] intercambiabile.

use archivio_core::{
    decode_batch, is_exhausted, AccessTokenResponse, ApiError, ArchivedMessage, ChatDataRequest,
    ChatDataResponse, ChatDecoder, DecodeError,
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProbeError {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("archive api error: {0}")]
    Api(#[from] ApiError),
    #[error(transparent)]
    Decode(#[from] DecodeError),
}

/// Risultato di un drain: messaggi decodificati e cursore finale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Drained {
    pub messages: Vec<ArchivedMessage>,
    pub last_seq: u64,
    pub pages: usize,
}

pub struct ArchiveProbe<'a> {
    client: reqwest::Client,
    base_url: String,
    decoder: &'a dyn ChatDecoder,
    page_size: u64,
}

impl<'a> ArchiveProbe<'a> {
    pub fn new(base_url: &str, decoder: &'a dyn ChatDecoder, page_size: u64) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            decoder,
            page_size,
        }
    }

    pub async fn token(&self) -> Result<String, ProbeError> {
        let resp: AccessTokenResponse = self
            .client
            .get(format!("{}/cgi-bin/gettoken", self.base_url))
            .send()
            .await?
            .json()
            .await?;
        let status = ApiError { errcode: resp.errcode, errmsg: resp.errmsg };
        if !status.is_ok() {
            return Err(status.into());
        }
        Ok(resp.access_token)
    }

    /// Una pagina dopo `seq`; un `errcode` diverso da 0 diventa `ProbeError::Api`.
    pub async fn fetch_page(&self, token: &str, seq: u64) -> Result<ChatDataResponse, ProbeError> {
        let resp: ChatDataResponse = self
            .client
            .post(format!("{}/cgi-bin/msgaudit/getchatdata", self.base_url))
            .query(&[("access_token", token)])
            .json(&ChatDataRequest { seq, limit: self.page_size })
            .send()
            .await?
            .json()
            .await?;
        Ok(resp.into_result()?)
    }

    /// Scarica tutto ciò che segue `from` finché `next_seq` smette di avanzare.
    pub async fn drain(&self, from: u64) -> Result<Drained, ProbeError> {
        let token = self.token().await?;
        let mut cursor = from;
        let mut messages = Vec::new();
        let mut pages = 0;
        loop {
            let page = self.fetch_page(&token, cursor).await?;
            pages += 1;
            let batch = decode_batch(self.decoder, page.chatdata.as_deref().unwrap_or_default());
            if let Some(err) = batch.failures.into_iter().next() {
                return Err(err.into());
            }
            messages.extend(batch.messages);

            let next = page.next_seq.unwrap_or(cursor);
            tracing::debug!(cursor, next, pages, "archive page fetched");
            if is_exhausted(next, cursor) {
                break;
            }
            cursor = next;
        }
        Ok(Drained { messages, last_seq: cursor, pages })
    }

    /// Scarica il media associato a un riferimento (il mock lo ignora).
    pub async fn media(&self, reference: &str) -> Result<Vec<u8>, ProbeError> {
        let bytes = self
            .client
            .get(format!("{}/cgi-bin/media/get", self.base_url))
            .query(&[("media_id", reference)])
            .send()
            .await?
            .error_for_status()?
            .bytes()
            .await?;
        Ok(bytes.to_vec())
    }
}
