pub mod error;
pub mod templates;

pub use error::CatalogError;
pub use templates::{Catalog, Plural, Plurals};

/// Unit a pluralized elapsed-time phrase is expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimeUnit {
    Minute,
    Hour,
    Day,
}

/// Supplies every phrase the formatters render.
///
/// Implementations own localization and pluralization; the formatters only
/// decide which phrase to ask for.
pub trait StringCatalog {
    fn just_now(&self) -> String;

    fn yesterday(&self) -> String;

    /// Unit phrase for `count`, e.g. "5 minutes". Must accept any count, including 0.
    fn quantity(&self, unit: TimeUnit, count: u64) -> String;

    /// Wrap a unit phrase into a full sentence, e.g. "5 minutes ago".
    fn time_ago(&self, phrase: &str) -> String;

    /// Embed an already formatted date, e.g. "Created on 05 Mar 2024".
    fn created_on(&self, date: &str) -> String;

    fn last_used(&self) -> String;
}
