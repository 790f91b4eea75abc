use super::AcceptedLocale;
use indexmap::IndexMap;
use serde::Serialize;
use serde_yaml::Value;
use std::fmt;

/// Everything derived from one request's `User-Agent` and `Accept-Language`
/// headers.
///
/// Fields the classifier could not determine are `None`, never an empty
/// string. `version` is only ever set together with `browser`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassificationResult {
    #[serde(rename = "string")]
    pub(crate) raw: String,
    pub(crate) platform: Option<String>,
    pub(crate) browser: Option<String>,
    pub(crate) version: Option<String>,
    pub(crate) language: Option<String>,
    pub(crate) locale: String,
    #[serde(rename = "accepted_languages")]
    pub(crate) accepted_locales: Vec<AcceptedLocale>,
    #[serde(skip)]
    pub(crate) crawler: bool,
}

impl ClassificationResult {
    /// The raw `User-Agent` value, empty when the header was missing.
    pub fn raw(&self) -> &str {
        &self.raw
    }
    pub fn platform(&self) -> Option<&str> {
        self.platform.as_deref()
    }
    pub fn browser(&self) -> Option<&str> {
        self.browser.as_deref()
    }
    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }
    /// Language token declared inside the `User-Agent` string itself. It is
    /// independent of, and may disagree with, [`locale`](Self::locale).
    pub fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }
    /// Best-guess `language_REGION` locale, or the configured default.
    pub fn locale(&self) -> &str {
        &self.locale
    }
    /// `Accept-Language` entries ranked by weight, ties in header order.
    pub fn accepted_locales(&self) -> &[AcceptedLocale] {
        &self.accepted_locales
    }

    /// Whether a browser was recognised at all.
    pub fn is_known(&self) -> bool {
        self.browser.is_some()
    }

    /// Whether the recognised browser is a crawler.
    pub fn is_crawler(&self) -> bool {
        self.crawler
    }

    /// The header value to forward, i.e. the raw `User-Agent` string.
    pub fn to_header(&self) -> &str {
        &self.raw
    }

    /// Map view with the keys `string`, `platform`, `browser`, `version`,
    /// `language`, `locale` and `accepted_languages`. Absent fields map to
    /// null; accepted languages are `[tag, weight]` pairs.
    pub fn to_dict(&self) -> IndexMap<&'static str, Value> {
        fn opt(v: &Option<String>) -> Value {
            v.as_ref().map_or(Value::Null, |s| Value::String(s.clone()))
        }

        let accepted = self
            .accepted_locales
            .iter()
            .map(|l| {
                Value::Sequence(vec![
                    Value::String(l.tag.clone()),
                    Value::Number(l.weight.into()),
                ])
            })
            .collect();

        IndexMap::from([
            ("string", Value::String(self.raw.clone())),
            ("platform", opt(&self.platform)),
            ("browser", opt(&self.browser)),
            ("version", opt(&self.version)),
            ("language", opt(&self.language)),
            ("locale", Value::String(self.locale.clone())),
            ("accepted_languages", Value::Sequence(accepted)),
        ])
    }
}

impl fmt::Display for ClassificationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}
