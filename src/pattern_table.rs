use super::db;
use super::error::Result;
use super::parser::CompiledParser;
use super::parser_data::*;
use super::rules::{Rule, BROWSER_RULES, CRAWLER_LABELS, PLATFORM_RULES};
use super::types::BrowserMatch;
use std::path::Path;
use std::sync::OnceLock;

/// Version token scan, anchored right after the browser-token match:
/// separator characters, then a token of digits, dots and letters that starts
/// with a digit and is at least two characters long.
const VERSION_PATTERN: &str = r"(?i)\A[/\sa-z(]*(\d+[.\da-z]+)?";

static BUILTIN: OnceLock<PatternTable> = OnceLock::new();

/// Ordered platform and browser rules, compiled once and read-only afterwards.
///
/// Lookups are first-match-wins over the rule order the table was built with.
#[derive(Clone)]
pub struct PatternTable {
    platform_parser: CompiledParser<PlatformData>,
    browser_parser: CompiledParser<BrowserData>,
    version_regex: regex::Regex,
}

impl PatternTable {
    /// Compile the built-in rule tables.
    pub fn builtin() -> Result<Self> {
        Self::build(
            rule_pairs(PLATFORM_RULES),
            rule_pairs(BROWSER_RULES),
            CRAWLER_LABELS.iter().map(|c| c.to_string()).collect(),
        )
    }

    /// The process-wide built-in table, compiled on first use.
    pub fn shared() -> &'static PatternTable {
        BUILTIN.get_or_init(|| Self::builtin().expect("built-in rule tables compile"))
    }

    /// Build a table from a YAML rule file's contents.
    ///
    /// The file holds two ordered `label: pattern` mappings, `platforms` and
    /// `browsers`, and an optional `crawlers` list of browser labels.
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let file: db::RuleFile = serde_yaml::from_str(yaml)?;
        Self::build(
            file.platforms.into_iter().collect(),
            file.browsers.into_iter().collect(),
            file.crawlers,
        )
    }

    /// Load and build a table from a YAML rule file on disk.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    fn build(
        platforms: Vec<(String, String)>,
        browsers: Vec<(String, String)>,
        crawlers: Vec<String>,
    ) -> Result<Self> {
        let (platform_parser, browser_parser) = rayon::join(
            || {
                CompiledParser::build(
                    platforms
                        .into_iter()
                        .map(|(label, pattern)| (pattern, PlatformData { label })),
                )
            },
            || {
                CompiledParser::build(browsers.into_iter().map(|(label, pattern)| {
                    let crawler = crawlers.contains(&label);
                    (pattern, BrowserData { label, crawler })
                }))
            },
        );
        let platform_parser = platform_parser?;
        let browser_parser = browser_parser?;

        tracing::debug!(
            platforms = platform_parser.len(),
            browsers = browser_parser.len(),
            "pattern table ready"
        );

        Ok(Self {
            platform_parser,
            browser_parser,
            version_regex: regex::Regex::new(VERSION_PATTERN)?,
        })
    }

    /// Label of the first platform rule matching anywhere in `text`.
    pub fn match_platform<'a>(&'a self, text: &str) -> Option<&'a str> {
        self.platform_parser
            .match_first(text)
            .map(|m| m.data.label.as_str())
    }

    /// Label of the first browser rule matching anywhere in `text`, plus the
    /// version token that follows it, if any.
    pub fn match_browser<'a>(&'a self, text: &'a str) -> Option<BrowserMatch<'a>> {
        let m = self.browser_parser.match_first(text)?;
        let version = self
            .version_regex
            .captures(&text[m.end..])
            .and_then(|caps| caps.get(1))
            .map(|v| v.as_str());

        Some(BrowserMatch {
            name: m.data.label.as_str(),
            version,
        })
    }

    /// Whether `label` is a browser label flagged as a crawler.
    pub fn is_crawler(&self, label: &str) -> bool {
        self.browser_parser
            .data()
            .any(|b| b.crawler && b.label == label)
    }

    /// Platform labels in rule order.
    pub fn platforms(&self) -> impl Iterator<Item = &str> {
        self.platform_parser.data().map(|p| p.label.as_str())
    }

    /// Browser labels in rule order.
    pub fn browsers(&self) -> impl Iterator<Item = &str> {
        self.browser_parser.data().map(|b| b.label.as_str())
    }
}

fn rule_pairs(rules: &[Rule]) -> Vec<(String, String)> {
    rules
        .iter()
        .map(|r| (r.label.to_string(), r.pattern.to_string()))
        .collect()
}
