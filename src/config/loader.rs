//! Configuration loading from disk.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::config::clock::Clock;
use crate::config::schema::SiteConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ValidationError::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Load and validate configuration from a TOML file.
///
/// Sections missing from the file resolve against the built-in profile.
/// The copyright `{year}` placeholder is stamped from `clock` before
/// validation, so the returned value is fully resolved and immutable from
/// the caller's perspective.
pub fn load_config(path: &Path, clock: &dyn Clock) -> Result<SiteConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    let mut config: SiteConfig = toml::from_str(&content)?;
    config.footer.stamp_year(clock.year());

    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}
