use crate::config::{ConfigError, ExclusionPaths, parse_exclusion_paths};
use serde::Deserialize;

/// Startup configuration for [`HeaderScrutiny`](crate::HeaderScrutiny).
///
/// `exclusion_paths: None` means every request is scrutinized.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScrutinyOptions {
    pub exclusion_paths: Option<ExclusionPaths>,
}

impl ScrutinyOptions {
    /// Builds options from the raw `exclusion-paths` parameter as read from the
    /// hosting framework. An absent parameter disables exclusions, a present one
    /// must yield at least one path.
    pub fn from_parameter(raw: Option<&str>) -> Result<Self, ConfigError> {
        let exclusion_paths = raw.map(parse_exclusion_paths).transpose()?;
        Ok(Self { exclusion_paths })
    }
}

/// Serialized form of the options, as found in a configuration file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct ScrutinyConfig {
    #[serde(default)]
    pub exclusion_paths: Option<String>,
}

impl TryFrom<ScrutinyConfig> for ScrutinyOptions {
    type Error = ConfigError;

    fn try_from(config: ScrutinyConfig) -> Result<Self, Self::Error> {
        Self::from_parameter(config.exclusion_paths.as_deref())
    }
}

#[cfg(test)]
#[path = "options_test.rs"]
mod options_test;
