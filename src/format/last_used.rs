use crate::catalog::StringCatalog;

use super::relative::format_relative;

/// Render "Last used 5 minutes ago". With no displayable relative time the
/// prefix is returned on its own.
pub fn format_last_used<S: StringCatalog + ?Sized>(
    timestamp_millis: i64,
    now_millis: i64,
    catalog: &S,
) -> String {
    let prefix = catalog.last_used();
    let relative = format_relative(timestamp_millis, now_millis, catalog);
    if relative.is_empty() {
        return prefix;
    }
    format!("{prefix} {relative}")
}
