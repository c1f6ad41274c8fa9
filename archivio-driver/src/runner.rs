use anyhow::Context;
use archivio_core::{new_trace_id, GroupMessage};
use reqwest::header::CONTENT_TYPE;
use serde_json::Value;
use tracing::Instrument;

use crate::scenario::Scenario;

const JSON_UTF8: &str = "application/json; charset=utf-8";

/// Corpo della risposta del webhook: JSON se parsabile, altrimenti testo grezzo.
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseBody {
    Json(Value),
    Text(String),
}

/// Esito di uno scenario. Un errore di trasporto non interrompe lo script.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Responded { status: u16, body: ResponseBody },
    Failed { error: String },
}

impl Outcome {
    pub fn is_failed(&self) -> bool {
        matches!(self, Outcome::Failed { .. })
    }
}

pub struct Driver {
    client: reqwest::Client,
    webhook_url: String,
    trace_id: String,
}

impl Driver {
    pub fn new(webhook_url: &str) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .build()
            .context("build http client")?;
        Ok(Self { client, webhook_url: webhook_url.to_string(), trace_id: new_trace_id() })
    }

    pub fn trace_id(&self) -> &str {
        &self.trace_id
    }

    /// Invia un turno e stampa payload, status e risposta. Non fallisce mai:
    /// ogni errore diventa `Outcome::Failed` e viene stampato.
    pub async fn run_scenario(&self, name: &str, payload: &GroupMessage) -> Outcome {
        println!("\n=== Test: {} ===", name);
        let body = match serde_json::to_string(payload) {
            Ok(b) => b,
            Err(e) => return report_failure(format!("serialize payload: {}", e)),
        };
        println!("Payload: {}", body);

        let span = tracing::info_span!("scenario", scenario = name, trace_id = %self.trace_id);
        let sent = self
            .client
            .post(&self.webhook_url)
            .header(CONTENT_TYPE, JSON_UTF8)
            .header("X-Trace-Id", &self.trace_id)
            .body(body)
            .send()
            .instrument(span.clone())
            .await;
        let response = match sent {
            Ok(r) => r,
            Err(e) => return report_failure(e.to_string()),
        };

        let status = response.status().as_u16();
        println!("Status Code: {}", status);
        let text = match response.text().instrument(span.clone()).await {
            Ok(t) => t,
            Err(e) => return report_failure(format!("read response: {}", e)),
        };
        let body = parse_body(text);
        match &body {
            ResponseBody::Json(v) => match serde_json::to_string_pretty(v) {
                Ok(pretty) => println!("Response: {}", pretty),
                Err(_) => println!("Response: {}", v),
            },
            ResponseBody::Text(t) => println!("Response Text: {}", t),
        }
        span.in_scope(|| tracing::info!(status, "scenario completed"));
        Outcome::Responded { status, body }
    }

    /// Esegue gli scenari in sequenza, rispettando le pause.
    pub async fn run_script(&self, script: &[Scenario]) -> Vec<Outcome> {
        let mut outcomes = Vec::with_capacity(script.len());
        for scenario in script {
            if !scenario.pause_before.is_zero() {
                tokio::time::sleep(scenario.pause_before).await;
            }
            outcomes.push(self.run_scenario(scenario.name, &scenario.turn).await);
        }
        outcomes
    }
}

fn parse_body(text: String) -> ResponseBody {
    match serde_json::from_str::<Value>(&text) {
        Ok(v) => ResponseBody::Json(v),
        Err(_) => ResponseBody::Text(text),
    }
}

fn report_failure(error: String) -> Outcome {
    println!("Error: {}", error);
    tracing::warn!(%error, "scenario failed, moving on");
    Outcome::Failed { error }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_json_body_falls_back_to_text() {
        assert_eq!(parse_body("ok, ricevuto".to_string()), ResponseBody::Text("ok, ricevuto".to_string()));
        assert_eq!(parse_body("".to_string()), ResponseBody::Text(String::new()));
    }

    #[test]
    fn json_body_is_parsed() {
        assert_eq!(
            parse_body(r#"{"intent":"REPAIR"}"#.to_string()),
            ResponseBody::Json(serde_json::json!({"intent": "REPAIR"}))
        );
    }
}
