//! High-level configuration API

use crate::error::{ApiError, Result};

/// High-level configuration for the segmenter
///
/// The rule table and the built-in exception sets are fixed; the only
/// supported extension point is injecting additional abbreviations at
/// construction time.
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub(crate) extra_abbreviations: Vec<String>,
}

impl Config {
    /// Create a builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Abbreviations added on top of the built-in set
    pub fn extra_abbreviations(&self) -> &[String] {
        &self.extra_abbreviations
    }
}

/// Configuration builder
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Add one abbreviation (stored without the trailing period)
    pub fn abbreviation(mut self, abbreviation: impl Into<String>) -> Self {
        self.config.extra_abbreviations.push(abbreviation.into());
        self
    }

    /// Add several abbreviations
    pub fn abbreviations<I, S>(mut self, abbreviations: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config
            .extra_abbreviations
            .extend(abbreviations.into_iter().map(Into::into));
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<Config> {
        for abbreviation in &self.config.extra_abbreviations {
            if abbreviation.trim().is_empty() {
                return Err(ApiError::Config("empty abbreviation".to_string()));
            }
            if abbreviation.trim_end().ends_with('.') {
                return Err(ApiError::Config(format!(
                    "abbreviation '{abbreviation}' must be given without the trailing period"
                )));
            }
        }

        Ok(self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_collects_abbreviations() {
        let config = Config::builder()
            .abbreviation("мгу")
            .abbreviations(["спб", "тчк"])
            .build()
            .unwrap();
        assert_eq!(config.extra_abbreviations(), ["мгу", "спб", "тчк"]);
    }

    #[test]
    fn test_empty_abbreviation_rejected() {
        assert!(Config::builder().abbreviation("  ").build().is_err());
    }

    #[test]
    fn test_trailing_period_rejected() {
        assert!(Config::builder().abbreviation("мгу.").build().is_err());
    }
}
