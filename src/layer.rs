use super::classifier::UserAgentClassifier;
use super::config::Config;
use super::error::Result;
use super::locale::DEFAULT_LOCALE;
use http::Request;
use std::sync::Arc;
use std::task::{Context, Poll};
use tower::{Layer, Service};

/// A [`Layer`] that classifies every inbound request before it reaches the
/// wrapped service.
///
/// The [`ClassificationResult`](crate::ClassificationResult) is stored in the
/// request extensions; handlers read it back with
/// `req.extensions().get::<ClassificationResult>()`.
#[derive(Clone)]
pub struct UserAgentLayer {
    classifier: Arc<UserAgentClassifier>,
    default_locale: Arc<str>,
}

impl UserAgentLayer {
    /// Layer over the shared built-in classifier with `en_US` as default locale.
    pub fn new() -> Self {
        Self::with_classifier(UserAgentClassifier::shared(), DEFAULT_LOCALE)
    }

    pub fn with_classifier(classifier: Arc<UserAgentClassifier>, default_locale: &str) -> Self {
        Self {
            classifier,
            default_locale: default_locale.into(),
        }
    }

    /// Layer for a loaded [`Config`]: its default locale and rule table.
    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self::with_classifier(
            config.build_classifier()?,
            &config.default_locale,
        ))
    }
}

impl Default for UserAgentLayer {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> Layer<S> for UserAgentLayer {
    type Service = UserAgentService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        UserAgentService {
            inner,
            classifier: self.classifier.clone(),
            default_locale: self.default_locale.clone(),
        }
    }
}

/// Service produced by [`UserAgentLayer`].
#[derive(Clone)]
pub struct UserAgentService<S> {
    inner: S,
    classifier: Arc<UserAgentClassifier>,
    default_locale: Arc<str>,
}

impl<S, B> Service<Request<B>> for UserAgentService<S>
where
    S: Service<Request<B>>,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = S::Future;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<std::result::Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, mut req: Request<B>) -> Self::Future {
        let result = self
            .classifier
            .classify_headers_with_default(req.headers(), &self.default_locale);
        req.extensions_mut().insert(result);
        self.inner.call(req)
    }
}
