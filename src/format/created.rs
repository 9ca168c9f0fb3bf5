use chrono::{Locale, TimeZone, Utc};
use tracing::{debug, warn};

use crate::catalog::StringCatalog;

/// Day-month-year, e.g. "05 Mar 2024".
pub const DEFAULT_DATE_PATTERN: &str = "%d %b %Y";

/// Formats an absolute timestamp as a calendar date.
pub trait DateFormatter {
    fn format_date(&self, timestamp_millis: i64, locale: &str) -> String;
}

/// `DateFormatter` backed by chrono's strftime and locale tables, in UTC.
#[derive(Debug, Clone)]
pub struct ChronoDateFormatter {
    pattern: String,
}

impl ChronoDateFormatter {
    pub fn new(pattern: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
        }
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }
}

impl Default for ChronoDateFormatter {
    fn default() -> Self {
        Self::new(DEFAULT_DATE_PATTERN)
    }
}

/// Resolve a locale name such as `en_US` or `fr-FR`, falling back to POSIX.
pub fn resolve_locale(name: &str) -> Locale {
    let normalized = name.replace('-', "_");
    match Locale::try_from(normalized.as_str()) {
        Ok(locale) => locale,
        Err(_) => {
            warn!(locale = name, "Unknown locale, falling back to POSIX");
            Locale::POSIX
        }
    }
}

impl DateFormatter for ChronoDateFormatter {
    fn format_date(&self, timestamp_millis: i64, locale: &str) -> String {
        let Some(dt) = Utc.timestamp_millis_opt(timestamp_millis).single() else {
            debug!(timestamp_millis, "Timestamp out of range for date formatting");
            return String::new();
        };
        dt.format_localized(&self.pattern, resolve_locale(locale))
            .to_string()
    }
}

/// Render the "created on" label for a profile creation timestamp.
pub fn format_created_on<D, S>(
    timestamp_millis: i64,
    locale: &str,
    dates: &D,
    catalog: &S,
) -> String
where
    D: DateFormatter + ?Sized,
    S: StringCatalog + ?Sized,
{
    let date = dates.format_date(timestamp_millis, locale);
    catalog.created_on(&date)
}
