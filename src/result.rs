use crate::constants::response;
use std::fmt;
use thiserror::Error;

/// Overall decision returned by [`HeaderScrutiny`](crate::HeaderScrutiny).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScrutinyDecision {
    Accepted,
    Rejected(Rejection),
}

impl ScrutinyDecision {
    pub fn is_accepted(&self) -> bool {
        matches!(self, ScrutinyDecision::Accepted)
    }

    /// Status and body the pipeline must answer with, `None` when the request
    /// continues unmodified.
    pub fn response(&self) -> Option<(u16, &'static str)> {
        match self {
            ScrutinyDecision::Accepted => None,
            ScrutinyDecision::Rejected(rejection) => {
                Some((rejection.status(), rejection.message()))
            }
        }
    }
}

/// A denied request. The reason is kept for logging and tests only; the
/// client always sees the same status and message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rejection {
    reason: RejectionReason,
}

impl Rejection {
    pub(crate) fn new(reason: RejectionReason) -> Self {
        Self { reason }
    }

    pub fn reason(&self) -> &RejectionReason {
        &self.reason
    }

    pub fn status(&self) -> u16 {
        response::FORBIDDEN_STATUS
    }

    pub fn message(&self) -> &'static str {
        response::FORBIDDEN_MESSAGE
    }
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Internal cause of a [`Rejection`]. Never sent to the client.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RejectionReason {
    #[error("header {name} has more than one value")]
    MultipleHeaderValues { name: &'static str },
    #[error("header {name} is empty")]
    EmptyHeader { name: &'static str },
    #[error("request has no Host header")]
    MissingHost,
    #[error("effective host is empty")]
    EmptyHost,
    #[error("host in header {name} does not match the effective host")]
    HostMismatch { name: &'static str },
}

/// Errors that can be produced during evaluation. They signal a mismatch
/// between the hosting framework and the request it hands over, not an attack.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ScrutinyError {
    #[error("Path \"{path}\" must start with context path \"{context_path}\"")]
    ContextPathMismatch { path: String, context_path: String },
}
