use axum::{routing::{get, post}, Router, Extension};
use std::sync::Arc;

use crate::{AppState, health};
use crate::controllers;

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(|Extension(state): Extension<Arc<AppState>>| async move {
            health(&state).await
        }))
        .route("/cgi-bin/gettoken", get(controllers::get_token))
        .route("/cgi-bin/msgaudit/getchatdata", post(controllers::get_chat_data))
        .route("/cgi-bin/media/get", get(controllers::get_media))
        .layer(Extension(state))
}
