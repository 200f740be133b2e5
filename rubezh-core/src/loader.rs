//! Embedded configuration loader

use crate::config::LanguageConfig;
use crate::error::Result;

/// The Russian configuration shipped with the crate
const RUSSIAN_CONFIG: &str = include_str!("../configs/russian.toml");

/// Parse and validate the embedded Russian configuration
///
/// Useful as a starting point for callers that want to extend the
/// abbreviation sets before building a custom engine.
pub fn embedded_config() -> Result<LanguageConfig> {
    let config: LanguageConfig = toml::from_str(RUSSIAN_CONFIG)?;
    config.validate()?;
    Ok(config)
}
