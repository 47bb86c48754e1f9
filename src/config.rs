use crate::constants::parameter;
use regex_automata::meta::BuildError;
use std::ops::Deref;
use thiserror::Error;

/// Errors raised while building the scrutiny configuration. All of them are
/// fatal to initialization.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("When specified, {} must have at least one value", parameter::EXCLUSION_PATHS)]
    EmptyExclusionPaths,
    #[error("path matcher requires at least one path")]
    EmptyPathList,
    #[error("failed to compile exclusion path pattern")]
    Pattern(#[source] Box<BuildError>),
}

/// Ordered, non-empty list of exclusion paths, each starting with `/`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExclusionPaths(Vec<String>);

impl ExclusionPaths {
    /// Normalizes every value (trimmed, empty values dropped, `/` prepended
    /// when missing) and fails when nothing is left.
    pub fn new<I, S>(paths: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let values: Vec<String> = paths
            .into_iter()
            .filter_map(|path| normalize_path(path.as_ref()))
            .collect();

        if values.is_empty() {
            return Err(ConfigError::EmptyExclusionPaths);
        }

        Ok(Self(values))
    }

    pub fn into_inner(self) -> Vec<String> {
        self.0
    }
}

impl Deref for ExclusionPaths {
    type Target = [String];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<'a> IntoIterator for &'a ExclusionPaths {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Parses the `exclusion-paths` parameter: values separated by runs of commas
/// and/or whitespace.
pub fn parse_exclusion_paths(raw: &str) -> Result<ExclusionPaths, ConfigError> {
    ExclusionPaths::new(raw.split(is_path_delimiter))
}

fn is_path_delimiter(ch: char) -> bool {
    matches!(ch, ',' | ' ' | '\t' | '\n' | '\x0B' | '\x0C' | '\r')
}

fn normalize_path(value: &str) -> Option<String> {
    let value = value.trim();
    if value.is_empty() {
        None
    } else if value.starts_with('/') {
        Some(value.to_owned())
    } else {
        Some(format!("/{value}"))
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;
