//! Calendar configuration, read from TOML.
//!
//! ```toml
//! builtin_overrides = true
//! cache_new_year = true
//!
//! [[new_year_overrides]]
//! year = 2024
//! moment = "13-04-2024 22:17"
//! ```

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::khmer::NewYearCalculator;
use crate::khmer::new_year::builtin_overrides;
use crate::moment::Moment;

/// Errors raised while loading a [`CalendarConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config")]
    Toml(#[from] toml::de::Error),

    #[error("invalid New Year override for {year}")]
    InvalidOverride {
        year: i32,
        #[source]
        source: crate::error::Error,
    },

    #[error("New Year override {moment} does not fall in {year}")]
    OverrideYearMismatch { year: i32, moment: Moment },
}

/// Top-level calendar configuration.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct CalendarConfig {
    /// Start from the published New Year table.
    #[serde(default = "default_true")]
    pub builtin_overrides: bool,

    /// Memoise computed New Year moments.
    #[serde(default = "default_true")]
    pub cache_new_year: bool,

    /// Extra New Year moments; these win over the built-in table.
    #[serde(default)]
    pub new_year_overrides: Vec<NewYearOverride>,
}

/// One published New Year moment.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct NewYearOverride {
    pub year: i32,
    /// `DD-MM-YYYY HH:MM`
    pub moment: String,
}

fn default_true() -> bool {
    true
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            builtin_overrides: true,
            cache_new_year: true,
            new_year_overrides: Vec::new(),
        }
    }
}

impl CalendarConfig {
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let s = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_owned(),
            source,
        })?;
        Self::from_toml_str(&s)
    }

    /// The effective override table.
    pub fn overrides(&self) -> Result<BTreeMap<i32, Moment>, ConfigError> {
        let mut table = if self.builtin_overrides {
            builtin_overrides()
        } else {
            BTreeMap::new()
        };
        for entry in &self.new_year_overrides {
            let moment = Moment::parse_dmy_hm(&entry.moment).map_err(|source| ConfigError::InvalidOverride {
                year: entry.year,
                source,
            })?;
            if moment.year() != entry.year {
                return Err(ConfigError::OverrideYearMismatch {
                    year: entry.year,
                    moment,
                });
            }
            table.insert(entry.year, moment);
        }
        Ok(table)
    }

    /// Builds a [`NewYearCalculator`] from this configuration.
    pub fn calculator(&self) -> Result<NewYearCalculator, ConfigError> {
        Ok(NewYearCalculator::with_overrides(self.overrides()?, self.cache_new_year))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_uses_defaults() {
        let config = CalendarConfig::from_toml_str("").unwrap();
        assert_eq!(CalendarConfig::default(), config);
        assert_eq!(builtin_overrides(), config.overrides().unwrap());
    }

    #[test]
    fn extra_overrides_win() {
        let config = CalendarConfig::from_toml_str(
            r#"
            cache_new_year = false

            [[new_year_overrides]]
            year = 2015
            moment = "14-04-2015 15:00"

            [[new_year_overrides]]
            year = 2024
            moment = "13-04-2024 22:17"
            "#,
        )
        .unwrap();
        let calendar = config.calculator().unwrap();
        assert!(calendar.cache().is_none());
        assert_eq!("2015-04-14 15:00:00", calendar.moment_for(2015).unwrap().to_string());
        assert_eq!("2024-04-13 22:17:00", calendar.moment_for(2024).unwrap().to_string());
    }

    #[test]
    fn builtin_table_can_be_dropped() {
        let config = CalendarConfig::from_toml_str("builtin_overrides = false").unwrap();
        assert!(config.overrides().unwrap().is_empty());
    }

    #[test]
    fn rejects_bad_input() {
        assert!(matches!(
            CalendarConfig::from_toml_str("colour = true"),
            Err(ConfigError::Toml(_))
        ));

        let config = CalendarConfig::from_toml_str(
            r#"
            [[new_year_overrides]]
            year = 2024
            moment = "2024-04-13 22:17"
            "#,
        )
        .unwrap();
        assert!(matches!(
            config.overrides(),
            Err(ConfigError::InvalidOverride { year: 2024, .. })
        ));

        let config = CalendarConfig::from_toml_str(
            r#"
            [[new_year_overrides]]
            year = 2025
            moment = "13-04-2024 22:17"
            "#,
        )
        .unwrap();
        assert!(matches!(
            config.overrides(),
            Err(ConfigError::OverrideYearMismatch { year: 2025, .. })
        ));
    }

    #[test]
    fn missing_file() {
        let err = CalendarConfig::load(Path::new("/nonexistent/chhankitek.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
