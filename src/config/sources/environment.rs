//! Environment variable source: DOCBOT_* prefix with __ separator

use config::builder::DefaultState;
use config::ConfigBuilder;
use config::ConfigError;
use config::Environment;

/// Add environment variable overlay to builder.
/// Uses DOCBOT__ prefix and __ as separator for nested keys,
/// e.g. `DOCBOT__DOCS__TIMEOUT_SECS=10`.
pub fn add_to_builder(
    builder: ConfigBuilder<DefaultState>,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    let builder = builder.add_source(
        Environment::with_prefix("DOCBOT")
            .separator("__")
            .try_parsing(true),
    );
    Ok(builder)
}
