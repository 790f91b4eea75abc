use super::error::Result;
use regex::Regex;

/// A two-letter word, optionally followed by `-` and another two-letter word,
/// either right before a `;` (after `;` or whitespace) or enclosed by
/// brackets/parentheses/semicolons on both sides.
const LANGUAGE_PATTERN: &str = r"(?:;\s*|\s+)(\b\w{2}\b(?:-\b\w{2}\b)?)\s*;|(?:\(|\[|;)\s*(\b\w{2}\b(?:-\b\w{2}\b)?)\s*(?:\]|\)|;)";

/// Pulls the declared language token (e.g. `en-US` in `(X11; U; en-US; ...)`)
/// out of a raw `User-Agent` string.
///
/// The heuristic is deliberately loose: it takes the first short
/// bracketed/semicolon-delimited token, which need not agree with the
/// `Accept-Language` header.
pub struct LanguageTokenExtractor {
    regex: Regex,
}

impl LanguageTokenExtractor {
    pub fn new() -> Result<Self> {
        Ok(Self {
            regex: Regex::new(LANGUAGE_PATTERN)?,
        })
    }

    pub fn extract<'a>(&self, user_agent: &'a str) -> Option<&'a str> {
        if user_agent.is_empty() {
            return None;
        }
        let caps = self.regex.captures(user_agent)?;
        caps.get(1).or_else(|| caps.get(2)).map(|m| m.as_str())
    }
}
