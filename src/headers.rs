use crate::result::RejectionReason;
use http::HeaderMap;

/// Read-only access to the request headers supplied by the hosting framework.
///
/// Implementations must return every value present for `name`, matching the
/// name case-insensitively, in the order they appear on the request.
pub trait HeaderSource {
    fn header_values(&self, name: &str) -> Vec<&str>;
}

impl HeaderSource for HeaderMap {
    fn header_values(&self, name: &str) -> Vec<&str> {
        // Opaque (non visible-ASCII) values surface as empty so they get rejected.
        self.get_all(name)
            .iter()
            .map(|value| value.to_str().unwrap_or_default())
            .collect()
    }
}

impl HeaderSource for Vec<(String, String)> {
    fn header_values(&self, name: &str) -> Vec<&str> {
        values_from_pairs(self.iter().map(|(k, v)| (k.as_str(), v.as_str())), name)
    }
}

impl HeaderSource for Vec<(&str, &str)> {
    fn header_values(&self, name: &str) -> Vec<&str> {
        values_from_pairs(self.iter().copied(), name)
    }
}

impl<const N: usize> HeaderSource for [(&str, &str); N] {
    fn header_values(&self, name: &str) -> Vec<&str> {
        values_from_pairs(self.iter().copied(), name)
    }
}

fn values_from_pairs<'a, I>(pairs: I, name: &str) -> Vec<&'a str>
where
    I: Iterator<Item = (&'a str, &'a str)>,
{
    pairs
        .filter(|(key, _)| key.eq_ignore_ascii_case(name))
        .map(|(_, value)| value)
        .collect()
}

/// Looks up a header that must appear at most once. A repeated header is
/// treated as an attack.
pub(crate) fn single_header<'a>(
    headers: &'a dyn HeaderSource,
    name: &'static str,
) -> Result<Option<&'a str>, RejectionReason> {
    match headers.header_values(name).as_slice() {
        [] => Ok(None),
        [value] => Ok(Some(*value)),
        _ => Err(RejectionReason::MultipleHeaderValues { name }),
    }
}

#[cfg(test)]
#[path = "headers_test.rs"]
mod headers_test;
