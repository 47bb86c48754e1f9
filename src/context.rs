use crate::headers::HeaderSource;
use std::fmt;

/// Borrowed snapshot of the request metadata the scrutiny needs.
///
/// `path` is the full request path and `context_path` the base path the hosting
/// framework mounts the application under. Both may be percent-encoded.
/// `authority` is the host taken from the request target (the HTTP/2
/// `:authority` pseudo-header); it is only consulted when no `Host` header is
/// present.
#[derive(Clone, Copy)]
pub struct RequestContext<'a> {
    pub path: &'a str,
    pub context_path: &'a str,
    pub authority: Option<&'a str>,
    pub headers: &'a dyn HeaderSource,
}

impl<'a> RequestContext<'a> {
    /// Snapshot for an application mounted at the root context.
    pub fn new(path: &'a str, headers: &'a dyn HeaderSource) -> Self {
        Self {
            path,
            context_path: "",
            authority: None,
            headers,
        }
    }

    pub fn with_context_path(mut self, context_path: &'a str) -> Self {
        self.context_path = context_path;
        self
    }

    pub fn with_authority(mut self, authority: &'a str) -> Self {
        self.authority = Some(authority);
        self
    }

    pub fn from_http<B>(request: &'a http::Request<B>) -> Self {
        Self {
            authority: request.uri().host(),
            ..Self::new(request.uri().path(), request.headers())
        }
    }
}

impl fmt::Debug for RequestContext<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RequestContext")
            .field("path", &self.path)
            .field("context_path", &self.context_path)
            .field("authority", &self.authority)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[path = "context_test.rs"]
mod context_test;
