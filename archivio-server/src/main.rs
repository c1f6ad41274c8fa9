use anyhow::Context;
use std::sync::Arc;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

// ri-utilizziamo le funzioni e strutture definite in lib.rs
use archivio_core::now_unix;
use archivio_server::{bind_addr_from_env, routes, AppState, Fixture};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    // Corpus e token vengono creati una sola volta, all'avvio
    let fixture = Fixture::standard(now_unix()).context("build fixture corpus")?;
    tracing::info!(messages = fixture.corpus().len(), "fixture ready");
    let state = Arc::new(AppState::new(fixture));
    let app = routes::router(state);

    let addr = bind_addr_from_env()?;
    println!("Starting mock archive server on http://{}", addr);
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("bind tcp listener")?;
    axum::serve(listener, app.into_make_service())
        .await
        .context("server shutdown")?;

    Ok(())
}
