use axum::{
    body::Bytes,
    extract::{Extension, Query},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use archivio_core::{AccessTokenResponse, ChatDataRequest, ChatDataResponse};
use std::collections::HashMap;
use std::sync::Arc;

use crate::AppState;

/// Handler per GET /cgi-bin/gettoken
pub async fn get_token(Extension(state): Extension<Arc<AppState>>) -> Json<AccessTokenResponse> {
    tracing::info!("issuing access token");
    Json(state.fixture.issue_token())
}

/// Handler per POST /cgi-bin/msgaudit/getchatdata?access_token=...
///
/// Il body viene letto come byte grezzi e interpretato in modo tollerante:
/// un body malformato non produce mai un 4xx.
pub async fn get_chat_data(
    Extension(state): Extension<Arc<AppState>>,
    Query(params): Query<HashMap<String, String>>,
    body: Bytes,
) -> Result<Json<ChatDataResponse>, (StatusCode, String)> {
    let token = params.get("access_token").map(String::as_str);
    if !state.fixture.accepts(token) {
        tracing::warn!("getchatdata rejected: invalid access_token");
    }
    let req = ChatDataRequest::from_lenient_json(&body);
    let resp = state
        .fixture
        .fetch_chat_data(token, req)
        // serializzare un messaggio del corpus non dovrebbe mai fallire
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, format!("serialize chat data: {}", e)))?;
    if let Some(items) = &resp.chatdata {
        tracing::info!(
            seq = req.seq,
            limit = req.limit,
            returned = items.len(),
            next_seq = resp.next_seq,
            "getchatdata served"
        );
    }
    Ok(Json(resp))
}

/// Handler per GET /cgi-bin/media/get: il riferimento richiesto è ignorato.
pub async fn get_media(
    Extension(state): Extension<Arc<AppState>>,
    Query(params): Query<HashMap<String, String>>,
) -> impl IntoResponse {
    tracing::debug!(?params, "serving placeholder media");
    (
        [(header::CONTENT_TYPE, "image/gif")],
        Bytes::from_static(state.fixture.media()),
    )
}
