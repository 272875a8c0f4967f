//! Base builder carrying the built-in defaults.

use crate::config::{DEFAULT_SLOTS_DIR, DEFAULT_URL_TEMPLATE, DEFAULT_ZONE};
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError};

/// Builder seeded with defaults; every later source overrides these.
pub fn builder_with_defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    Config::builder()
        .set_default("docs.url_template", DEFAULT_URL_TEMPLATE)?
        .set_default("slots.dir", DEFAULT_SLOTS_DIR)?
        .set_default("timezone.zone", DEFAULT_ZONE)
}
