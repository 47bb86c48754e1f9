pub mod constants;
mod config;
mod context;
mod headers;
mod options;
mod path_matcher;
mod result;
mod scrutiny;
mod util;

pub use config::{ConfigError, ExclusionPaths, parse_exclusion_paths};
pub use context::RequestContext;
pub use headers::HeaderSource;
pub use options::{ScrutinyConfig, ScrutinyOptions};
pub use path_matcher::PathMatcher;
pub use result::{Rejection, RejectionReason, ScrutinyDecision, ScrutinyError};
pub use scrutiny::HeaderScrutiny;
pub use util::decode_uri;
