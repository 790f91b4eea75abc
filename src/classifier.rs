use super::accept_language::rank_accept_language;
use super::error::Result;
use super::helpers::header_str;
use super::language::LanguageTokenExtractor;
use super::locale::{resolve_locale, DEFAULT_LOCALE};
use super::pattern_table::PatternTable;
use super::types::*;
use http::header::{HeaderMap, ACCEPT_LANGUAGE, USER_AGENT};
use std::borrow::Cow;
use std::sync::{Arc, OnceLock};

static SHARED: OnceLock<Arc<UserAgentClassifier>> = OnceLock::new();

/// Turns `User-Agent` and `Accept-Language` header values into a
/// [`ClassificationResult`].
///
/// A classifier is immutable once built and can be shared across threads;
/// every call is pure and never fails.
pub struct UserAgentClassifier {
    table: Cow<'static, PatternTable>,
    language: LanguageTokenExtractor,
}

impl UserAgentClassifier {
    /// Classifier over the process-wide built-in pattern table.
    pub fn new() -> Result<Self> {
        Ok(Self {
            table: Cow::Borrowed(PatternTable::shared()),
            language: LanguageTokenExtractor::new()?,
        })
    }

    /// Classifier over a custom pattern table.
    pub fn with_table(table: PatternTable) -> Result<Self> {
        Ok(Self {
            table: Cow::Owned(table),
            language: LanguageTokenExtractor::new()?,
        })
    }

    /// The process-wide classifier over the built-in table.
    pub fn shared() -> Arc<UserAgentClassifier> {
        SHARED
            .get_or_init(|| Arc::new(Self::new().expect("built-in language pattern compiles")))
            .clone()
    }

    pub fn table(&self) -> &PatternTable {
        &self.table
    }

    /// Classify a request's headers, falling back to `en_US` as locale.
    pub fn classify_headers(&self, headers: &HeaderMap) -> ClassificationResult {
        self.classify_headers_with_default(headers, DEFAULT_LOCALE)
    }

    /// Classify a request's headers with a caller-supplied default locale.
    pub fn classify_headers_with_default(
        &self,
        headers: &HeaderMap,
        default_locale: &str,
    ) -> ClassificationResult {
        let user_agent = header_str(headers, USER_AGENT);
        let accept_language = header_str(headers, ACCEPT_LANGUAGE);
        self.classify_with_default(
            user_agent.as_deref(),
            accept_language.as_deref(),
            default_locale,
        )
    }

    /// Classify raw header values, falling back to `en_US` as locale.
    pub fn classify(
        &self,
        user_agent: Option<&str>,
        accept_language: Option<&str>,
    ) -> ClassificationResult {
        self.classify_with_default(user_agent, accept_language, DEFAULT_LOCALE)
    }

    /// Classify raw header values with a caller-supplied default locale.
    pub fn classify_with_default(
        &self,
        user_agent: Option<&str>,
        accept_language: Option<&str>,
        default_locale: &str,
    ) -> ClassificationResult {
        let raw = user_agent.unwrap_or_default();

        let (platform, browser, language) = if raw.is_empty() {
            (None, None, None)
        } else {
            (
                self.table.match_platform(raw),
                self.table.match_browser(raw),
                self.language.extract(raw),
            )
        };

        let accepted_locales = rank_accept_language(accept_language);
        let locale = resolve_locale(&accepted_locales, default_locale);

        tracing::trace!(
            user_agent = raw,
            platform,
            browser = browser.map(|b| b.name),
            version = browser.and_then(|b| b.version),
            language,
            %locale,
            "classified user agent"
        );

        ClassificationResult {
            raw: raw.to_string(),
            platform: platform.map(str::to_string),
            browser: browser.map(|b| b.name.to_string()),
            version: browser.and_then(|b| b.version).map(str::to_string),
            language: language.map(str::to_string),
            locale,
            accepted_locales,
            crawler: browser.map_or(false, |b| self.table.is_crawler(b.name)),
        }
    }
}
