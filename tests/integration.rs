use fixtures::fixtures;
use http::{HeaderMap, HeaderValue, Request};
use serde::Deserialize;
use std::sync::{Arc, OnceLock};
use tower::{Layer, Service};
use useragent::{
    ClassificationResult, Config, PatternTable, UserAgentClassifier, UserAgentLayer,
    DEFAULT_LOCALE,
};

// Global classifier instance that is initialized once
static CLASSIFIER_INSTANCE: OnceLock<Arc<UserAgentClassifier>> = OnceLock::new();

fn classifier() -> Arc<UserAgentClassifier> {
    CLASSIFIER_INSTANCE
        .get_or_init(|| {
            let t = std::time::Instant::now();
            let c = UserAgentClassifier::new().expect("failed to build classifier");
            eprintln!("classifier built in {:?}", t.elapsed());
            Arc::new(c)
        })
        .clone()
}

// ---------------------------------------------------------------------------
// Classification fixtures
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ClassificationFixture {
    user_agent: String,
    #[serde(default)]
    accept_language: Option<String>,
    #[serde(default)]
    default_locale: Option<String>,
    platform: Option<String>,
    browser: Option<String>,
    #[serde(default)]
    crawler: bool,
    version: Option<String>,
    language: Option<String>,
    locale: String,
    #[serde(default)]
    accepted: Vec<(String, f64)>,
}

impl ClassificationFixture {
    fn headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        if !self.user_agent.is_empty() {
            headers.insert("user-agent", HeaderValue::from_str(&self.user_agent).unwrap());
        }
        if let Some(al) = &self.accept_language {
            headers.insert("accept-language", HeaderValue::from_str(al).unwrap());
        }
        headers
    }
}

#[fixtures(["tests/fixtures/*.yml"])]
#[test]
fn test_classification_fixtures(path: &std::path::Path) {
    let c = classifier();
    let content = std::fs::read_to_string(path).unwrap();
    let fixtures: Vec<ClassificationFixture> = serde_yaml::from_str(&content).unwrap();
    assert!(!fixtures.is_empty(), "no fixtures in {}", path.display());

    for f in &fixtures {
        let default_locale = f.default_locale.as_deref().unwrap_or(DEFAULT_LOCALE);
        let result = c.classify_headers_with_default(&f.headers(), default_locale);
        let ua = &f.user_agent;

        assert_eq!(result.raw(), ua);
        assert_eq!(result.platform(), f.platform.as_deref(), "platform for UA: {ua}");
        assert_eq!(result.browser(), f.browser.as_deref(), "browser for UA: {ua}");
        assert_eq!(result.version(), f.version.as_deref(), "version for UA: {ua}");
        assert_eq!(result.language(), f.language.as_deref(), "language for UA: {ua}");
        assert_eq!(result.is_crawler(), f.crawler, "crawler flag for UA: {ua}");
        assert_eq!(result.locale(), f.locale, "locale for UA: {ua}");

        let accepted: Vec<(String, f64)> = result
            .accepted_locales()
            .iter()
            .map(|l| (l.tag.clone(), l.weight))
            .collect();
        assert_eq!(accepted, f.accepted, "accepted locales for UA: {ua}");

        // The raw-value entry point agrees with the header map one.
        let direct = c.classify_with_default(
            Some(ua.as_str()),
            f.accept_language.as_deref(),
            default_locale,
        );
        assert_eq!(direct, result, "classify vs classify_headers for UA: {ua}");
    }
}

// ---------------------------------------------------------------------------
// Custom rule tables and configuration
// ---------------------------------------------------------------------------

const EDGE: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
                    (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36 Edg/120.0.2210.91";
const HEADLESS: &str = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 \
                        (KHTML, like Gecko) HeadlessChrome/120.0.0.0 Safari/537.36";

#[test]
fn test_rule_file() {
    let table = PatternTable::from_file("tests/rules/custom.yml").unwrap();
    assert_eq!(
        table.browsers().collect::<Vec<_>>(),
        ["samsung", "edge", "headless", "chrome", "bingbot"]
    );

    let c = UserAgentClassifier::with_table(table).unwrap();

    let edge = c.classify(Some(EDGE), None);
    assert_eq!(edge.platform(), None);
    assert_eq!(edge.browser(), Some("edge"));
    assert_eq!(edge.version(), Some("120.0.2210.91"));
    assert!(!edge.is_crawler());

    let headless = c.classify(Some(HEADLESS), None);
    assert_eq!(headless.platform(), Some("linux"));
    assert_eq!(headless.browser(), Some("headless"));
    assert_eq!(headless.version(), Some("120.0.0.0"));
    assert!(headless.is_crawler());

    // The built-in table sees the same strings differently.
    let builtin = classifier().classify(Some(EDGE), None);
    assert_eq!(builtin.platform(), Some("windows"));
    assert_eq!(builtin.browser(), Some("chrome"));
}

#[test]
fn test_config_file() {
    let config = Config::from_file("tests/rules/config.yml").unwrap();
    assert_eq!(config.default_locale, "en_GB");

    let c = config.build_classifier().unwrap();
    let result = c.classify_with_default(Some(HEADLESS), Some("en"), &config.default_locale);
    assert_eq!(result.browser(), Some("headless"));
    assert_eq!(result.locale(), "en_GB");
}

// ---------------------------------------------------------------------------
// Request hook
// ---------------------------------------------------------------------------

#[derive(Clone)]
struct Handler;

impl Service<Request<String>> for Handler {
    type Response = String;
    type Error = std::convert::Infallible;
    type Future = std::future::Ready<Result<String, Self::Error>>;

    fn poll_ready(
        &mut self,
        _: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        std::task::Poll::Ready(Ok(()))
    }

    fn call(&mut self, req: Request<String>) -> Self::Future {
        let ua = req
            .extensions()
            .get::<ClassificationResult>()
            .expect("classification attached before dispatch");
        std::future::ready(Ok(format!(
            "{}/{}/{}",
            ua.platform().unwrap_or("-"),
            ua.browser().unwrap_or("-"),
            ua.locale()
        )))
    }
}

#[test]
fn test_layer_attaches_result_per_request() {
    let config = Config::from_yaml_str("default_locale: es_ES").unwrap();
    let mut svc = UserAgentLayer::from_config(&config).unwrap().layer(Handler);

    let first = Request::builder()
        .header("user-agent", HEADLESS)
        .header("accept-language", "fr-CA, fr;q=0.8")
        .body(String::new())
        .unwrap();
    assert_eq!(
        svc.call(first).into_inner().unwrap(),
        "linux/chrome/fr_CA"
    );

    let second = Request::new(String::new());
    assert_eq!(svc.call(second).into_inner().unwrap(), "-/-/es_ES");
}

#[test]
fn test_shared_across_threads() {
    let c = classifier();
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let c = c.clone();
            std::thread::spawn(move || {
                let al = format!("en-GB;q=0.{i}, de-DE;q=0.5");
                c.classify(Some(EDGE), Some(&al)).locale().to_string()
            })
        })
        .collect();

    let locales: Vec<String> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(locales, ["de_DE", "de_DE", "de_DE", "de_DE"]);
}
