use percent_encoding::percent_decode_str;
use std::borrow::Cow;

/// Decodes a URI component the way form decoding does: `+` becomes a space
/// and `%XX` escapes are decoded. Invalid UTF-8 is replaced lossily and
/// malformed escapes are kept verbatim.
#[doc(hidden)]
pub fn decode_uri(value: &str) -> Cow<'_, str> {
    if !value.contains(['+', '%']) {
        return Cow::Borrowed(value);
    }

    let spaced = value.replace('+', " ");
    Cow::Owned(percent_decode_str(&spaced).decode_utf8_lossy().into_owned())
}

/// Strips a trailing `:port` from a `Host` style value. Bracketed IPv6
/// literals keep their brackets.
pub(crate) fn host_only(authority: &str) -> &str {
    if authority.starts_with('[') {
        return match authority.find(']') {
            Some(end) => &authority[..=end],
            None => authority,
        };
    }

    authority
        .split_once(':')
        .map_or(authority, |(host, _)| host)
}

#[cfg(test)]
#[path = "util_test.rs"]
mod util_test;
