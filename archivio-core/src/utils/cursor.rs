/// Cursore da restituire dopo un batch: seq dell'ultimo record,
/// oppure quello richiesto se il batch è vuoto (nessun avanzamento).
pub fn next_cursor(last_in_batch: Option<u64>, requested: u64) -> u64 {
    last_in_batch.unwrap_or(requested)
}

/// Fine dello stream: il server non ha fatto avanzare il cursore inviato.
pub fn is_exhausted(next_seq: u64, sent: u64) -> bool {
    next_seq <= sent
}
