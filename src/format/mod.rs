pub mod created;
pub mod last_used;
pub mod relative;

pub use created::{ChronoDateFormatter, DateFormatter, format_created_on};
pub use last_used::format_last_used;
pub use relative::{Bucket, RelativeLabel, RelativeTimeFormatter, classify, format_relative};
