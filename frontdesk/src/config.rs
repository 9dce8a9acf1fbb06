//! Configuration system for frontdesk.
//!
//! Configuration is merged from multiple sources with the following
//! precedence (highest to lowest):
//!
//! 1. Programmatic overrides (via `ConfigBuilder::with_config`)
//! 2. Environment variables (`FRONTDESK_*`)
//! 3. A YAML configuration file (`frontdesk.yaml`)
//! 4. Built-in defaults
//!
//! # Examples
//!
//! ```
//! use frontdesk::config::ConfigBuilder;
//!
//! let config = ConfigBuilder::new()
//!     .skip_files()
//!     .skip_env()
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.hotel_name(), "Hotel Luchadores");
//! ```

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::manager::DEFAULT_HOTEL_NAME;
use crate::pricing::PricingPolicy;

/// Default configuration file name, looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "frontdesk.yaml";

/// Complete configuration structure.
///
/// All fields are optional; unset fields fall back to built-in defaults.
///
/// # Examples
///
/// ```
/// use frontdesk::config::{Config, PricingConfig};
///
/// let config = Config {
///     hotel: Some("Hotel Paradiso".to_string()),
///     pricing: Some(PricingConfig {
///         base_price_per_guest: Some(25.0),
///         breakfast_multiplier: None,
///     }),
/// };
/// assert_eq!(config.hotel_name(), "Hotel Paradiso");
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Hotel name stamped on every reservation.
    pub hotel: Option<String>,

    /// Pricing settings.
    pub pricing: Option<PricingConfig>,
}

/// Pricing configuration.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct PricingConfig {
    /// Base price charged per guest per night.
    pub base_price_per_guest: Option<f64>,

    /// Multiplier applied to the total when breakfast is selected.
    pub breakfast_multiplier: Option<f64>,
}

impl Config {
    /// Returns the configured hotel name, or the built-in default.
    #[must_use]
    pub fn hotel_name(&self) -> &str {
        self.hotel.as_deref().unwrap_or(DEFAULT_HOTEL_NAME)
    }

    /// Returns the pricing policy assembled from this configuration,
    /// filling unset fields from the built-in defaults.
    #[must_use]
    pub fn pricing_policy(&self) -> PricingPolicy {
        let defaults = PricingPolicy::default();
        let pricing = self.pricing.unwrap_or_default();
        PricingPolicy::new(
            pricing
                .base_price_per_guest
                .unwrap_or(defaults.base_price_per_guest),
            pricing
                .breakfast_multiplier
                .unwrap_or(defaults.breakfast_multiplier),
        )
    }

    /// Overlays `other` on top of `self`: set fields in `other` win.
    fn merge(mut self, other: Self) -> Self {
        if other.hotel.is_some() {
            self.hotel = other.hotel;
        }
        if let Some(other_pricing) = other.pricing {
            let mut pricing = self.pricing.unwrap_or_default();
            if other_pricing.base_price_per_guest.is_some() {
                pricing.base_price_per_guest = other_pricing.base_price_per_guest;
            }
            if other_pricing.breakfast_multiplier.is_some() {
                pricing.breakfast_multiplier = other_pricing.breakfast_multiplier;
            }
            self.pricing = Some(pricing);
        }
        self
    }

    /// Validates the resolved configuration.
    ///
    /// # Errors
    ///
    /// Returns a validation error if the hotel name is empty after
    /// trimming, or if any pricing value is not strictly positive.
    pub fn validate(&self) -> Result<()> {
        if let Some(ref hotel) = self.hotel {
            if hotel.trim().is_empty() {
                return Err(Error::Validation {
                    field: "hotel".into(),
                    message: "hotel name must be non-empty after trimming whitespace".into(),
                });
            }
        }

        if let Some(pricing) = self.pricing {
            if let Some(base) = pricing.base_price_per_guest {
                if base <= 0.0 {
                    return Err(Error::Validation {
                        field: "pricing.base_price_per_guest".into(),
                        message: format!("must be strictly positive, got {base}"),
                    });
                }
            }
            if let Some(multiplier) = pricing.breakfast_multiplier {
                if multiplier <= 0.0 {
                    return Err(Error::Validation {
                        field: "pricing.breakfast_multiplier".into(),
                        message: format!("must be strictly positive, got {multiplier}"),
                    });
                }
            }
        }

        Ok(())
    }
}

/// Builder assembling configuration from files, environment, and
/// programmatic overrides.
///
/// # Examples
///
/// Loading from an explicit file:
///
/// ```no_run
/// use frontdesk::config::ConfigBuilder;
/// use std::path::Path;
///
/// let config = ConfigBuilder::new()
///     .with_config_path(Path::new("frontdesk.yaml"))
///     .build()
///     .unwrap();
/// ```
///
/// Programmatic configuration:
///
/// ```
/// use frontdesk::config::{Config, ConfigBuilder};
///
/// let custom = Config {
///     hotel: Some("Hotel Paradiso".to_string()),
///     ..Default::default()
/// };
///
/// let config = ConfigBuilder::new()
///     .skip_files()
///     .skip_env()
///     .with_config(custom)
///     .build()
///     .unwrap();
///
/// assert_eq!(config.hotel_name(), "Hotel Paradiso");
/// ```
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    config_path: Option<PathBuf>,
    overrides: Option<Config>,
    skip_files: bool,
    skip_env: bool,
}

impl ConfigBuilder {
    /// Creates a new builder with default behavior (files and environment
    /// both consulted).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets an explicit configuration file path.
    ///
    /// When set, the file must exist; without it, a missing
    /// `frontdesk.yaml` in the working directory is simply skipped.
    #[must_use]
    pub fn with_config_path(mut self, path: impl AsRef<Path>) -> Self {
        self.config_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Applies programmatic overrides with the highest precedence.
    #[must_use]
    pub fn with_config(mut self, config: Config) -> Self {
        self.overrides = Some(config);
        self
    }

    /// Skips configuration file discovery.
    #[must_use]
    pub const fn skip_files(mut self) -> Self {
        self.skip_files = true;
        self
    }

    /// Skips environment variable overrides.
    #[must_use]
    pub const fn skip_env(mut self) -> Self {
        self.skip_env = true;
        self
    }

    /// Resolves the final configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if an explicitly requested file cannot be read or
    /// parsed, if an environment variable cannot be parsed, or if the
    /// merged configuration fails validation.
    pub fn build(self) -> Result<Config> {
        let mut config = Config::default();

        if !self.skip_files {
            if let Some(file_config) = self.load_file_config()? {
                config = config.merge(file_config);
            }
        }

        if !self.skip_env {
            config = config.merge(env_config()?);
        }

        if let Some(overrides) = self.overrides {
            config = config.merge(overrides);
        }

        config.validate()?;
        Ok(config)
    }

    /// Loads the configuration file, if one applies.
    fn load_file_config(&self) -> Result<Option<Config>> {
        let path = match &self.config_path {
            Some(explicit) => explicit.clone(),
            None => {
                let default = PathBuf::from(CONFIG_FILE_NAME);
                if !default.exists() {
                    return Ok(None);
                }
                default
            }
        };

        let contents = fs::read_to_string(&path)?;
        let config: Config = serde_yaml::from_str(&contents)?;
        Ok(Some(config))
    }
}

/// Reads configuration overrides from `FRONTDESK_*` environment variables.
fn env_config() -> Result<Config> {
    let mut config = Config::default();

    if let Ok(hotel) = env::var("FRONTDESK_HOTEL") {
        config.hotel = Some(hotel);
    }

    let mut pricing = PricingConfig::default();
    if let Ok(value) = env::var("FRONTDESK_BASE_PRICE") {
        pricing.base_price_per_guest = Some(parse_env_f64("FRONTDESK_BASE_PRICE", &value)?);
    }
    if let Ok(value) = env::var("FRONTDESK_BREAKFAST_MULTIPLIER") {
        pricing.breakfast_multiplier =
            Some(parse_env_f64("FRONTDESK_BREAKFAST_MULTIPLIER", &value)?);
    }
    if pricing != PricingConfig::default() {
        config.pricing = Some(pricing);
    }

    Ok(config)
}

fn parse_env_f64(name: &str, value: &str) -> Result<f64> {
    value.parse().map_err(|_| Error::Validation {
        field: name.to_string(),
        message: format!("expected a number, got '{value}'"),
    })
}
