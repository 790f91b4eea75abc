use http::header::{AsHeaderName, HeaderMap};
use std::borrow::Cow;

/// Header value as text. Lookups are case-insensitive; bytes that are not
/// valid UTF-8 are replaced rather than failing the lookup.
pub(crate) fn header_str<K: AsHeaderName>(headers: &HeaderMap, name: K) -> Option<Cow<'_, str>> {
    headers
        .get(name)
        .map(|v| String::from_utf8_lossy(v.as_bytes()))
}
