use uuid::Uuid;

/// Genera un nuovo trace id (UUIDv4) per correlare i log di una esecuzione.
pub fn new_trace_id() -> String {
    Uuid::new_v4().to_string()
}
