use crate::config::ConfigError;
use crate::constants::header;
use crate::context::RequestContext;
use crate::headers::single_header;
use crate::options::ScrutinyOptions;
use crate::path_matcher::PathMatcher;
use crate::result::{Rejection, RejectionReason, ScrutinyDecision, ScrutinyError};
use crate::util::host_only;
use http::Uri;
use tracing::{debug, trace};

/// Rejects requests whose `Origin` or `Referer` names a host other than the
/// effective host of the request.
///
/// Built once at startup and shared read-only by every request.
#[derive(Debug, Clone)]
pub struct HeaderScrutiny {
    exclusions: Option<PathMatcher>,
}

impl HeaderScrutiny {
    pub fn new(options: ScrutinyOptions) -> Result<Self, ConfigError> {
        let exclusions = options
            .exclusion_paths
            .map(|paths| PathMatcher::new(&paths))
            .transpose()?;

        Ok(Self { exclusions })
    }

    pub fn exclusions(&self) -> Option<&PathMatcher> {
        self.exclusions.as_ref()
    }

    pub fn evaluate(
        &self,
        request: &RequestContext<'_>,
    ) -> Result<ScrutinyDecision, ScrutinyError> {
        if self.is_excluded(request)? {
            trace!(path = request.path, "request path excluded from header scrutiny");
            return Ok(ScrutinyDecision::Accepted);
        }

        match Self::check_request_headers(request) {
            Ok(()) => Ok(ScrutinyDecision::Accepted),
            Err(reason) => {
                debug!(path = request.path, %reason, "request rejected by header scrutiny");
                Ok(ScrutinyDecision::Rejected(Rejection::new(reason)))
            }
        }
    }

    fn is_excluded(&self, request: &RequestContext<'_>) -> Result<bool, ScrutinyError> {
        match &self.exclusions {
            Some(matcher) => matcher.matches(request),
            None => Ok(false),
        }
    }

    fn check_request_headers(request: &RequestContext<'_>) -> Result<(), RejectionReason> {
        for name in [header::ORIGIN, header::REFERER] {
            if let Some(value) = single_header(request.headers, name)? {
                Self::validate_uri_header(request, name, value)?;
            }
        }
        Ok(())
    }

    fn validate_uri_header(
        request: &RequestContext<'_>,
        name: &'static str,
        value: &str,
    ) -> Result<(), RejectionReason> {
        if value.trim().is_empty() {
            return Err(RejectionReason::EmptyHeader { name });
        }

        let host_header = Self::effective_host(request)?;
        if host_header.trim().is_empty() {
            return Err(RejectionReason::EmptyHost);
        }

        let uri = parse_reference(value);
        let uri_host = uri.as_ref().and_then(Uri::host);

        let expected = host_only(host_header);
        match uri_host {
            Some(host) if !expected.is_empty() && host == expected => Ok(()),
            _ => Err(RejectionReason::HostMismatch { name }),
        }
    }

    /// `Host` is mandatory and must be single even when `X-Forwarded-Host`
    /// overrides it. `authority` stands in for a missing `Host` header.
    fn effective_host<'a>(request: &RequestContext<'a>) -> Result<&'a str, RejectionReason> {
        let forwarded = single_header(request.headers, header::X_FORWARDED_HOST)?;
        let host = single_header(request.headers, header::HOST)?
            .or(request.authority)
            .ok_or(RejectionReason::MissingHost)?;

        Ok(forwarded.unwrap_or(host))
    }
}

/// Parses an `Origin`/`Referer` value into a URI carrying an authority.
/// Unparsable values and values without a scheme yield `None`; network-path
/// references (`//host/path`) are resolved against `http`.
fn parse_reference(value: &str) -> Option<Uri> {
    let uri = match value.strip_prefix("//") {
        Some(rest) => format!("http://{rest}").parse::<Uri>(),
        None => value.parse::<Uri>(),
    }
    .ok()?;

    uri.scheme()?;
    Some(uri)
}

#[cfg(test)]
#[path = "scrutiny_test.rs"]
mod scrutiny_test;
