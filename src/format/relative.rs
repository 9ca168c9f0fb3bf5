use serde::Serialize;
use tracing::trace;

use crate::catalog::{StringCatalog, TimeUnit};
use crate::clock::Clock;
use crate::timestamp::normalize_to_millis;

pub const MINUTE_MILLIS: i64 = 60_000;
pub const HOUR_MILLIS: i64 = 60 * MINUTE_MILLIS;
pub const DAY_MILLIS: i64 = 24 * HOUR_MILLIS;

/// Elapsed time below this is counted in minutes, at or above it in hours.
pub const MINUTES_LIMIT_MILLIS: i64 = 50 * MINUTE_MILLIS;
pub const YESTERDAY_START_MILLIS: i64 = DAY_MILLIS;
pub const YESTERDAY_END_MILLIS: i64 = 2 * DAY_MILLIS;

/// Which label rule a timestamp falls under, with the floored count for
/// the pluralized rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "bucket", content = "count", rename_all = "snake_case")]
pub enum Bucket {
    /// In the future, or not a positive timestamp.
    Invalid,
    JustNow,
    Minutes(u64),
    Hours(u64),
    Yesterday,
    Days(u64),
}

/// A rendered label together with the bucket it came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RelativeLabel {
    pub label: String,
    #[serde(flatten)]
    pub bucket: Bucket,
}

/// Classify `timestamp_millis` relative to `now_millis`.
pub fn classify(timestamp_millis: i64, now_millis: i64) -> Bucket {
    if timestamp_millis > now_millis || timestamp_millis <= 0 {
        return Bucket::Invalid;
    }

    // Both operands are positive here, so this cannot overflow or go negative.
    let elapsed = now_millis - timestamp_millis;
    let count = |unit_millis: i64| (elapsed / unit_millis) as u64;

    if elapsed < MINUTE_MILLIS {
        Bucket::JustNow
    } else if elapsed < MINUTES_LIMIT_MILLIS {
        Bucket::Minutes(count(MINUTE_MILLIS))
    } else if elapsed < YESTERDAY_START_MILLIS {
        // 50..60 minutes floors to "0 hours". Kept as-is until the intended
        // wording for that window is settled.
        Bucket::Hours(count(HOUR_MILLIS))
    } else if elapsed < YESTERDAY_END_MILLIS {
        Bucket::Yesterday
    } else {
        Bucket::Days(count(DAY_MILLIS))
    }
}

/// Render the "time ago" label for `timestamp_millis`.
///
/// Returns an empty string for future or non-positive timestamps, which
/// callers treat as "nothing to display".
pub fn format_relative<S: StringCatalog + ?Sized>(
    timestamp_millis: i64,
    now_millis: i64,
    catalog: &S,
) -> String {
    let bucket = classify(timestamp_millis, now_millis);
    trace!(timestamp_millis, now_millis, ?bucket, "Classified timestamp");
    render(bucket, catalog)
}

/// Render an already classified bucket.
pub fn render<S: StringCatalog + ?Sized>(bucket: Bucket, catalog: &S) -> String {
    match bucket {
        Bucket::Invalid => String::new(),
        Bucket::JustNow => catalog.just_now(),
        Bucket::Yesterday => catalog.yesterday(),
        Bucket::Minutes(n) => catalog.time_ago(&catalog.quantity(TimeUnit::Minute, n)),
        Bucket::Hours(n) => catalog.time_ago(&catalog.quantity(TimeUnit::Hour, n)),
        Bucket::Days(n) => catalog.time_ago(&catalog.quantity(TimeUnit::Day, n)),
    }
}

/// Formats timestamps against a clock instead of an explicit "now".
///
/// Each of `classify`, `format` and `format_last_used` reads the clock on its
/// own; use `describe` when the bucket and the label must agree.
#[derive(Debug, Clone)]
pub struct RelativeTimeFormatter<C> {
    clock: C,
    normalize_seconds: bool,
}

impl<C: Clock> RelativeTimeFormatter<C> {
    pub fn new(clock: C) -> Self {
        Self {
            clock,
            normalize_seconds: true,
        }
    }

    /// Whether timestamps that look like seconds are scaled to milliseconds first.
    pub fn normalize_seconds(mut self, enabled: bool) -> Self {
        self.normalize_seconds = enabled;
        self
    }

    pub fn now_millis(&self) -> i64 {
        self.clock.now_millis()
    }

    pub fn classify(&self, timestamp: i64) -> Bucket {
        classify(self.prepare(timestamp), self.clock.now_millis())
    }

    pub fn format<S: StringCatalog + ?Sized>(&self, timestamp: i64, catalog: &S) -> String {
        format_relative(self.prepare(timestamp), self.clock.now_millis(), catalog)
    }

    /// Classify and render from a single clock read.
    pub fn describe<S: StringCatalog + ?Sized>(
        &self,
        timestamp: i64,
        catalog: &S,
    ) -> RelativeLabel {
        let bucket = classify(self.prepare(timestamp), self.clock.now_millis());
        RelativeLabel {
            label: render(bucket, catalog),
            bucket,
        }
    }

    pub fn format_last_used<S: StringCatalog + ?Sized>(
        &self,
        timestamp: i64,
        catalog: &S,
    ) -> String {
        super::last_used::format_last_used(
            self.prepare(timestamp),
            self.clock.now_millis(),
            catalog,
        )
    }

    fn prepare(&self, timestamp: i64) -> i64 {
        if self.normalize_seconds {
            normalize_to_millis(timestamp)
        } else {
            timestamp
        }
    }
}
