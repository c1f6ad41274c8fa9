use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use archivio_driver::{repair_script, Driver, WEBHOOK_URL};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let driver = Driver::new(WEBHOOK_URL)?;
    tracing::info!(url = WEBHOOK_URL, trace_id = driver.trace_id(), "replaying repair script");
    // gli esiti sono già stampati: l'exit code non dipende dagli scenari
    let outcomes = driver.run_script(&repair_script()).await;
    let failed = outcomes.iter().filter(|o| o.is_failed()).count();
    tracing::info!(total = outcomes.len(), failed, "script finished");
    Ok(())
}
