use tracing::trace;

/// Positive values below this are taken to be seconds, not milliseconds.
/// Read as milliseconds it is 2001-09-09, well before any stored profile.
pub const SECONDS_CUTOFF: i64 = 1_000_000_000_000;

/// Normalize a timestamp that may be in seconds to milliseconds.
pub fn normalize_to_millis(timestamp: i64) -> i64 {
    if timestamp > 0 && timestamp < SECONDS_CUTOFF {
        let millis = timestamp.saturating_mul(1000);
        trace!(timestamp, millis, "Converted seconds timestamp to millis");
        return millis;
    }
    timestamp
}
