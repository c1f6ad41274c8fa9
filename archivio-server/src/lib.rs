use anyhow::Context;
use axum::http::StatusCode;
use std::net::SocketAddr;

pub mod controllers;
pub mod fixture;
pub mod routes;

pub use fixture::{Corpus, Fixture, MOCK_ACCESS_TOKEN};

pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:5000";

/// Stato condiviso dagli handler: solo dati in lettura, quindi niente lock.
#[derive(Clone)]
pub struct AppState {
    pub fixture: Fixture,
}

impl AppState {
    pub fn new(fixture: Fixture) -> Self {
        Self { fixture }
    }
}

/// Indirizzo di binding da BIND_ADDR, altrimenti il default del mock.
pub fn bind_addr_from_env() -> anyhow::Result<SocketAddr> {
    let bind = std::env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());
    bind.parse()
        .with_context(|| format!("parse BIND_ADDR {:?}", bind))
}

/// Il mock non ha dipendenze esterne: se risponde, è sano.
pub async fn health(state: &AppState) -> StatusCode {
    if state.fixture.corpus().is_empty() {
        StatusCode::SERVICE_UNAVAILABLE
    } else {
        StatusCode::OK
    }
}
