use time::OffsetDateTime;

/// Istante corrente in secondi unix (UTC), il formato di `msgtime`.
pub fn now_unix() -> i64 {
    OffsetDateTime::now_utc().unix_timestamp()
}
