use std::time::{SystemTime, UNIX_EPOCH};

/// Seed from the digits of the current UTC time of day, read as `HHMMSS`.
pub fn seed_from_clock() -> u64 {
    let secs = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or_default();
    seed_from_time_of_day(secs)
}

/// `HHMMSS` as a decimal number for a timestamp in seconds.
pub fn seed_from_time_of_day(secs: u64) -> u64 {
    let of_day = secs % 86_400;
    let (hours, minutes, seconds) = (of_day / 3600, of_day % 3600 / 60, of_day % 60);
    hours * 10_000 + minutes * 100 + seconds
}
