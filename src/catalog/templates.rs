use serde::{Deserialize, Deserializer, Serialize};
use std::path::Path;
use tracing::debug;

use super::{CatalogError, StringCatalog, TimeUnit};

const COUNT: &str = "{count}";
const PHRASE: &str = "{phrase}";
const DATE: &str = "{date}";

/// Phrase templates for the formatters. Defaults to English.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default = "default_just_now")]
    pub just_now: String,
    #[serde(default = "default_yesterday")]
    pub yesterday: String,
    #[serde(default = "default_time_ago")]
    pub time_ago: String,
    #[serde(default = "default_created_on")]
    pub created_on: String,
    #[serde(default = "default_last_used")]
    pub last_used: String,
    #[serde(default)]
    pub plurals: Plurals,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Plurals {
    #[serde(default = "default_minutes", deserialize_with = "minutes_or_default")]
    pub minutes: Plural,
    #[serde(default = "default_hours", deserialize_with = "hours_or_default")]
    pub hours: Plural,
    #[serde(default = "default_days", deserialize_with = "days_or_default")]
    pub days: Plural,
}

/// One/other plural forms. `{count}` is replaced with the number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Plural {
    pub one: String,
    pub other: String,
}

impl Plural {
    fn new(one: &str, other: &str) -> Self {
        Self {
            one: one.to_string(),
            other: other.to_string(),
        }
    }

    pub fn render(&self, count: u64) -> String {
        let template = if count == 1 { &self.one } else { &self.other };
        template.replace(COUNT, &count.to_string())
    }
}

/// A plural table as written in a catalog file; either form may be left out.
#[derive(Deserialize)]
struct PartialPlural {
    one: Option<String>,
    other: Option<String>,
}

impl PartialPlural {
    fn or(self, fallback: Plural) -> Plural {
        Plural {
            one: self.one.unwrap_or(fallback.one),
            other: self.other.unwrap_or(fallback.other),
        }
    }
}

fn minutes_or_default<'de, D: Deserializer<'de>>(d: D) -> Result<Plural, D::Error> {
    Ok(PartialPlural::deserialize(d)?.or(default_minutes()))
}
fn hours_or_default<'de, D: Deserializer<'de>>(d: D) -> Result<Plural, D::Error> {
    Ok(PartialPlural::deserialize(d)?.or(default_hours()))
}
fn days_or_default<'de, D: Deserializer<'de>>(d: D) -> Result<Plural, D::Error> {
    Ok(PartialPlural::deserialize(d)?.or(default_days()))
}

fn default_just_now() -> String {
    "just now".to_string()
}
fn default_yesterday() -> String {
    "yesterday".to_string()
}
fn default_time_ago() -> String {
    "{phrase} ago".to_string()
}
fn default_created_on() -> String {
    "Created on {date}".to_string()
}
fn default_last_used() -> String {
    "Last used".to_string()
}
fn default_minutes() -> Plural {
    Plural::new("{count} minute", "{count} minutes")
}
fn default_hours() -> Plural {
    Plural::new("{count} hour", "{count} hours")
}
fn default_days() -> Plural {
    Plural::new("{count} day", "{count} days")
}

impl Default for Catalog {
    fn default() -> Self {
        Self {
            just_now: default_just_now(),
            yesterday: default_yesterday(),
            time_ago: default_time_ago(),
            created_on: default_created_on(),
            last_used: default_last_used(),
            plurals: Plurals::default(),
        }
    }
}

impl Default for Plurals {
    fn default() -> Self {
        Self {
            minutes: default_minutes(),
            hours: default_hours(),
            days: default_days(),
        }
    }
}

impl Catalog {
    /// Load a catalog from a TOML file. Keys left out keep their English default.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path).map_err(|source| CatalogError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::parse(&content, path)?;
        debug!(path = %path.display(), "Loaded catalog");
        Ok(catalog)
    }

    pub fn from_toml(content: &str) -> Result<Self, CatalogError> {
        Self::parse(content, Path::new("<inline>"))
    }

    fn parse(content: &str, path: &Path) -> Result<Self, CatalogError> {
        let catalog: Catalog = toml::from_str(content).map_err(|source| CatalogError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Check that every template carries the placeholder it is rendered with.
    /// Singular forms may spell the number out ("a minute"), so only the
    /// plural forms must contain `{count}`.
    pub fn validate(&self) -> Result<(), CatalogError> {
        let checks: [(&'static str, &str, &'static str); 5] = [
            ("time_ago", &self.time_ago, PHRASE),
            ("created_on", &self.created_on, DATE),
            ("plurals.minutes.other", &self.plurals.minutes.other, COUNT),
            ("plurals.hours.other", &self.plurals.hours.other, COUNT),
            ("plurals.days.other", &self.plurals.days.other, COUNT),
        ];

        for (key, template, placeholder) in checks {
            if !template.contains(placeholder) {
                return Err(CatalogError::MissingPlaceholder { key, placeholder });
            }
        }
        Ok(())
    }

    fn plural(&self, unit: TimeUnit) -> &Plural {
        match unit {
            TimeUnit::Minute => &self.plurals.minutes,
            TimeUnit::Hour => &self.plurals.hours,
            TimeUnit::Day => &self.plurals.days,
        }
    }
}

impl StringCatalog for Catalog {
    fn just_now(&self) -> String {
        self.just_now.clone()
    }

    fn yesterday(&self) -> String {
        self.yesterday.clone()
    }

    fn quantity(&self, unit: TimeUnit, count: u64) -> String {
        self.plural(unit).render(count)
    }

    fn time_ago(&self, phrase: &str) -> String {
        self.time_ago.replace(PHRASE, phrase)
    }

    fn created_on(&self, date: &str) -> String {
        self.created_on.replace(DATE, date)
    }

    fn last_used(&self) -> String {
        self.last_used.clone()
    }
}
