use anyhow::Result;
use axum::{
    http::{header, HeaderMap, StatusCode},
    routing::post,
    Extension, Json, Router,
};
use serde_json::json;
use std::sync::{Arc, Mutex};
use tokio::net::TcpListener;

use archivio_core::GroupMessage;
use archivio_driver::{repair_script, Driver, Outcome, ResponseBody};

const WEBHOOK_PATH: &str = "/api/wechat/webhook";

#[derive(Default)]
struct Received {
    turns: Vec<GroupMessage>,
    content_types: Vec<String>,
}

type Shared = Arc<Mutex<Received>>;

async fn spawn_http_server(app: Router) -> Result<(String, tokio::sync::oneshot::Sender<()>)> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel::<()>();
    tokio::spawn(async move {
        let server = axum::serve(listener, app).with_graceful_shutdown(async move {
            let _ = shutdown_rx.await;
        });
        let _ = server.await;
    });
    Ok((format!("http://{addr}{WEBHOOK_PATH}"), shutdown_tx))
}

// Webhook finto che registra i turni ricevuti e risponde in JSON
async fn spawn_recording_webhook() -> Result<(String, Shared, tokio::sync::oneshot::Sender<()>)> {
    async fn webhook(
        Extension(state): Extension<Shared>,
        headers: HeaderMap,
        Json(turn): Json<GroupMessage>,
    ) -> Json<serde_json::Value> {
        let mut received = state.lock().expect("recording lock poisoned");
        let content_type = headers
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();
        received.content_types.push(content_type);
        received.turns.push(turn);
        Json(json!({ "received": received.turns.len() }))
    }

    let state: Shared = Arc::default();
    let app = Router::new()
        .route(WEBHOOK_PATH, post(webhook))
        .layer(Extension(state.clone()));
    let (url, shutdown) = spawn_http_server(app).await?;
    Ok((url, state, shutdown))
}

#[tokio::test]
async fn script_reaches_webhook_in_order() -> Result<()> {
    let (url, state, _shutdown) = spawn_recording_webhook().await?;
    let driver = Driver::new(&url)?;

    let outcomes = driver.run_script(&repair_script()).await;

    assert_eq!(outcomes.len(), 4);
    for (i, outcome) in outcomes.iter().enumerate() {
        assert_eq!(
            outcome,
            &Outcome::Responded { status: 200, body: ResponseBody::Json(json!({ "received": i + 1 })) }
        );
    }

    let received = state.lock().expect("recording lock poisoned");
    let expected: Vec<GroupMessage> = repair_script().into_iter().map(|s| s.turn).collect();
    assert_eq!(received.turns, expected);
    assert!(received
        .content_types
        .iter()
        .all(|ct| ct == "application/json; charset=utf-8"));

    // il secondo turno arriva subito dopo il primo, dallo stesso mittente e gruppo
    assert!(received.turns[2].same_thread(&received.turns[1]));
    assert!(!received.turns[2].same_thread(&received.turns[0]));
    assert!(!received.turns[2].same_thread(&received.turns[3]));
    Ok(())
}

#[tokio::test]
async fn plain_text_response_is_kept_raw() -> Result<()> {
    let app = Router::new().route(WEBHOOK_PATH, post(|| async { (StatusCode::ACCEPTED, "ok, ricevuto") }));
    let (url, _shutdown) = spawn_http_server(app).await?;
    let driver = Driver::new(&url)?;

    let turn = GroupMessage::new("user_test_03", "group_01", "收到，辛苦了");
    let outcome = driver.run_scenario("4. Noise/Chat", &turn).await;

    assert_eq!(
        outcome,
        Outcome::Responded { status: 202, body: ResponseBody::Text("ok, ricevuto".to_string()) }
    );
    Ok(())
}

#[tokio::test]
async fn error_status_is_reported_not_raised() -> Result<()> {
    let app = Router::new().route(
        WEBHOOK_PATH,
        post(|| async { (StatusCode::INTERNAL_SERVER_ERROR, Json(json!({ "error": "boom" }))) }),
    );
    let (url, _shutdown) = spawn_http_server(app).await?;
    let driver = Driver::new(&url)?;

    let outcomes = driver.run_script(&repair_script()[..1]).await;
    assert_eq!(
        outcomes,
        vec![Outcome::Responded { status: 500, body: ResponseBody::Json(json!({ "error": "boom" })) }]
    );
    Ok(())
}

// Connessione rifiutata: ogni scenario fallisce ma lo script arriva in fondo
#[tokio::test]
async fn transport_failures_do_not_abort_the_script() -> Result<()> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    drop(listener);
    let driver = Driver::new(&format!("http://{addr}{WEBHOOK_PATH}"))?;

    let outcomes = driver.run_script(&repair_script()).await;

    assert_eq!(outcomes.len(), 4);
    assert!(outcomes.iter().all(Outcome::is_failed));
    Ok(())
}
