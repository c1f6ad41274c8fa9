//! archivio-driver: riproduce una conversazione a turni contro il webhook sotto test
//! e, per verificare il mock, ne consuma l'archivio come farebbe il consumer.

pub mod probe;
pub mod runner;
pub mod scenario;

pub use probe::{ArchiveProbe, Drained, ProbeError};
pub use runner::{Driver, Outcome, ResponseBody};
pub use scenario::{repair_script, Scenario};

/// Webhook del sistema sotto test (fisso, nessuna configurazione da env).
pub const WEBHOOK_URL: &str = "http://localhost:8080/api/wechat/webhook";
