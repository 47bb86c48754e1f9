use crate::config::ConfigError;
use crate::context::RequestContext;
use crate::result::ScrutinyError;
use crate::util::decode_uri;
use indexmap::IndexSet;
use regex_automata::meta::Regex;
use tracing::debug;

/// Compiled set of exclusion path prefixes.
///
/// A request matches when its context-relative, decoded path starts with one
/// of the configured paths. Matching is case-sensitive and does not require a
/// segment boundary after the prefix, so `/a-path` also matches `/a-pathXYZ`.
#[derive(Debug, Clone)]
pub struct PathMatcher {
    paths: IndexSet<String>,
    pattern: Regex,
}

impl PathMatcher {
    pub fn new<I, S>(paths: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let paths: IndexSet<String> = paths
            .into_iter()
            .map(|path| decode_uri(path.as_ref()).into_owned())
            .collect();

        if paths.is_empty() {
            return Err(ConfigError::EmptyPathList);
        }

        let alternation = paths
            .iter()
            .map(|path| regex_syntax::escape(path))
            .collect::<Vec<_>>()
            .join("|");
        let pattern = Regex::new(&format!("^(?:{alternation})"))
            .map_err(|err| ConfigError::Pattern(Box::new(err)))?;

        debug!(paths = ?paths, "compiled exclusion path matcher");

        Ok(Self { paths, pattern })
    }

    pub fn matches(&self, request: &RequestContext<'_>) -> Result<bool, ScrutinyError> {
        let path = decode_uri(request.path);
        let context_path = decode_uri(request.context_path);

        match path.strip_prefix(&*context_path) {
            Some(relative) => Ok(self.pattern.is_match(relative)),
            None => Err(ScrutinyError::ContextPathMismatch {
                path: path.to_string(),
                context_path: context_path.to_string(),
            }),
        }
    }

    /// Decoded exclusion paths, in configuration order.
    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.paths.iter().map(String::as_str)
    }
}

#[cfg(test)]
#[path = "path_matcher_test.rs"]
mod path_matcher_test;
