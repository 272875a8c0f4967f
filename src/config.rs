//! Configuration
//!
//! Layered settings for the lookup service and the vocabulary generator.
//! Sources, lowest precedence first: built-in defaults, `docbot.toml` in the
//! working directory (or an explicit file), `DOCBOT__*` environment variables.

pub mod facade;
mod merge;
pub mod sources;

pub use facade::ConfigLoader;

use crate::error::DocbotError;
use crate::logging::LoggingConfig;
use chrono::{DateTime, FixedOffset, Offset, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

pub(crate) const DEFAULT_URL_TEMPLATE: &str = "https://docs.python.org/3/library/{module}.html";
pub(crate) const DEFAULT_SLOTS_DIR: &str = "res/slots";
pub(crate) const DEFAULT_ZONE: &str = "America/Los_Angeles";

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DocbotConfig {
    #[serde(default)]
    pub docs: DocsConfig,

    #[serde(default)]
    pub slots: SlotsConfig,

    #[serde(default)]
    pub timezone: TimezoneConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Where documentation pages come from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocsConfig {
    /// URL with a `{module}` placeholder
    #[serde(default = "default_url_template")]
    pub url_template: String,

    /// Upper bound for a single page fetch; unset means wait indefinitely
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl DocsConfig {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

impl Default for DocsConfig {
    fn default() -> Self {
        Self {
            url_template: default_url_template(),
            timeout_secs: None,
        }
    }
}

fn default_url_template() -> String {
    DEFAULT_URL_TEMPLATE.to_string()
}

/// Vocabulary generator paths.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlotsConfig {
    /// Directory holding raw value files and generated slot JSON
    #[serde(default = "default_slots_dir")]
    pub dir: PathBuf,
}

impl Default for SlotsConfig {
    fn default() -> Self {
        Self {
            dir: default_slots_dir(),
        }
    }
}

fn default_slots_dir() -> PathBuf {
    PathBuf::from(DEFAULT_SLOTS_DIR)
}

/// Zone used to render log timestamps.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimezoneConfig {
    /// IANA zone name such as `America/Los_Angeles`, or a fixed `+HH:MM` offset
    #[serde(default = "default_zone")]
    pub zone: String,
}

impl Default for TimezoneConfig {
    fn default() -> Self {
        Self {
            zone: default_zone(),
        }
    }
}

fn default_zone() -> String {
    DEFAULT_ZONE.to_string()
}

impl TimezoneConfig {
    /// Parse the configured zone.
    pub fn log_zone(&self) -> Result<LogZone, DocbotError> {
        parse_log_zone(&self.zone)
    }
}

/// A named zone follows its daylight-saving rules; a fixed offset never moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogZone {
    Named(Tz),
    Fixed(FixedOffset),
}

impl LogZone {
    /// Offset in effect at `instant`.
    pub fn offset_at(&self, instant: DateTime<Utc>) -> FixedOffset {
        match self {
            LogZone::Named(tz) => instant.with_timezone(tz).offset().fix(),
            LogZone::Fixed(offset) => *offset,
        }
    }

    /// `instant` as RFC 3339 in this zone.
    pub fn to_rfc3339(&self, instant: DateTime<Utc>) -> String {
        instant
            .with_timezone(&self.offset_at(instant))
            .to_rfc3339()
    }
}

/// Offsets are tried first so `UTC` and `Z` stay fixed; anything else must be
/// an IANA zone name.
pub fn parse_log_zone(raw: &str) -> Result<LogZone, DocbotError> {
    if let Ok(offset) = parse_utc_offset(raw) {
        return Ok(LogZone::Fixed(offset));
    }
    raw.trim()
        .parse::<Tz>()
        .map(LogZone::Named)
        .map_err(|_| DocbotError::ConfigError(format!("Invalid timezone: {}", raw)))
}

/// Parse `Z`, `+HH:MM`, `-HH:MM` or `+HHMM` into a fixed offset.
pub fn parse_utc_offset(raw: &str) -> Result<FixedOffset, DocbotError> {
    let invalid = || DocbotError::ConfigError(format!("Invalid UTC offset: {}", raw));

    let raw = raw.trim();
    if raw.eq_ignore_ascii_case("z") || raw.eq_ignore_ascii_case("utc") {
        return FixedOffset::east_opt(0).ok_or_else(invalid);
    }

    let (sign, rest) = match raw.chars().next() {
        Some('+') => (1, &raw[1..]),
        Some('-') => (-1, &raw[1..]),
        _ => return Err(invalid()),
    };
    let (hours, minutes) = match rest.split_once(':') {
        Some((h, m)) => (h, m),
        None if rest.len() == 4 && rest.is_ascii() => rest.split_at(2),
        None => (rest, "0"),
    };
    let hours: i32 = hours.parse().map_err(|_| invalid())?;
    let minutes: i32 = minutes.parse().map_err(|_| invalid())?;
    if hours > 23 || minutes > 59 {
        return Err(invalid());
    }

    FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60)).ok_or_else(invalid)
}
