//! Configuration management for Mint.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

use cardmint_common::CardmintError;
use cardmint_common::constants::{
    DEFAULT_ATTEMPT_MULTIPLIER, DEFAULT_LISTEN_ADDR, DEFAULT_LOOKUP_BASE_URL,
    DEFAULT_LOOKUP_TIMEOUT_SECS, DEFAULT_RANDOM_YEAR_MAX, DEFAULT_RANDOM_YEAR_MIN,
};

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// HTTP listen address
    #[serde(default = "default_listen_addr")]
    pub listen_addr: String,

    /// BIN lookup configuration
    #[serde(default)]
    pub lookup: LookupConfig,

    /// Generator configuration
    #[serde(default)]
    pub generator: GeneratorConfig,
}

/// BIN-lookup-specific configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LookupConfig {
    /// Lookup service base URL
    #[serde(default = "default_lookup_base_url")]
    pub base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_lookup_timeout")]
    pub timeout_secs: u64,
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            base_url: default_lookup_base_url(),
            timeout_secs: default_lookup_timeout(),
        }
    }
}

/// Generator-specific configuration
#[derive(Debug, Clone, Deserialize)]
pub struct GeneratorConfig {
    /// Resolution attempts allowed per requested card
    #[serde(default = "default_attempt_multiplier")]
    pub attempt_multiplier: u32,

    /// Lowest two-digit year for randomized expiries
    #[serde(default = "default_random_year_min")]
    pub random_year_min: u8,

    /// Highest two-digit year for randomized expiries
    #[serde(default = "default_random_year_max")]
    pub random_year_max: u8,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            attempt_multiplier: default_attempt_multiplier(),
            random_year_min: default_random_year_min(),
            random_year_max: default_random_year_max(),
        }
    }
}

impl GeneratorConfig {
    /// Reject settings the assembler or expiry randomizer cannot honor.
    pub fn validate(&self) -> Result<(), CardmintError> {
        if self.attempt_multiplier == 0 {
            return Err(CardmintError::Config(
                "attempt_multiplier must be positive".to_string(),
            ));
        }

        if self.random_year_min > self.random_year_max || self.random_year_max > 99 {
            return Err(CardmintError::Config(format!(
                "invalid random year range {}..={}",
                self.random_year_min, self.random_year_max
            )));
        }

        Ok(())
    }
}

// Default value functions
fn default_listen_addr() -> String {
    DEFAULT_LISTEN_ADDR.to_string()
}
fn default_lookup_base_url() -> String {
    DEFAULT_LOOKUP_BASE_URL.to_string()
}
fn default_lookup_timeout() -> u64 {
    DEFAULT_LOOKUP_TIMEOUT_SECS
}
fn default_attempt_multiplier() -> u32 {
    DEFAULT_ATTEMPT_MULTIPLIER
}
fn default_random_year_min() -> u8 {
    DEFAULT_RANDOM_YEAR_MIN
}
fn default_random_year_max() -> u8 {
    DEFAULT_RANDOM_YEAR_MAX
}

impl AppConfig {
    /// Load configuration from file, with CLI overrides
    pub fn load(config_path: &str, args: &super::Args) -> Result<Self> {
        let mut config = if Path::new(config_path).exists() {
            let settings = config::Config::builder()
                .add_source(config::File::with_name(config_path))
                .build()
                .context("Failed to load config file")?;

            settings
                .try_deserialize()
                .context("Failed to parse config")?
        } else {
            // Use defaults if config file doesn't exist
            tracing::warn!("Config file not found, using defaults");
            Self::default()
        };

        // Apply CLI overrides
        if let Some(ref listen) = args.listen {
            config.listen_addr = listen.clone();
        }
        if let Some(ref lookup_url) = args.lookup_url {
            config.lookup.base_url = lookup_url.clone();
        }

        Ok(config)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            listen_addr: default_listen_addr(),
            lookup: LookupConfig::default(),
            generator: GeneratorConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_usable() {
        let config = AppConfig::default();

        assert_eq!(config.listen_addr, DEFAULT_LISTEN_ADDR);
        assert_eq!(config.lookup.base_url, DEFAULT_LOOKUP_BASE_URL);
        assert!(config.generator.validate().is_ok());
    }

    #[test]
    fn test_generator_validation_rejects_bad_ranges() {
        let zero_budget = GeneratorConfig {
            attempt_multiplier: 0,
            ..Default::default()
        };
        assert!(zero_budget.validate().is_err());

        let inverted = GeneratorConfig {
            random_year_min: 30,
            random_year_max: 23,
            ..Default::default()
        };
        assert!(inverted.validate().is_err());
    }
}
