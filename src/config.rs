use super::classifier::UserAgentClassifier;
use super::error::{Error, Result};
use super::locale::{is_locale_tag, DEFAULT_LOCALE};
use super::pattern_table::PatternTable;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Environment variable that overrides [`Config::default_locale`].
pub const DEFAULT_LOCALE_ENV: &str = "DEFAULT_LOCALE";

/// Classifier configuration.
///
/// ```yaml
/// default_locale: de_DE
/// rules: /etc/useragent/rules.yml
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Locale used when `Accept-Language` yields no `language_REGION` tag.
    pub default_locale: String,
    /// Optional YAML rule file replacing the built-in pattern table.
    pub rules: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_locale: DEFAULT_LOCALE.to_string(),
            rules: None,
        }
    }
}

impl Config {
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Config = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    /// Apply `DEFAULT_LOCALE` from the environment when it is set and non-empty.
    pub fn with_env_overrides(self) -> Result<Self> {
        self.with_overrides(std::env::var(DEFAULT_LOCALE_ENV).ok())
    }

    fn with_overrides(mut self, default_locale: Option<String>) -> Result<Self> {
        if let Some(locale) = default_locale.filter(|l| !l.is_empty()) {
            self.default_locale = locale;
        }
        self.validate()?;
        Ok(self)
    }

    fn validate(&self) -> Result<()> {
        if is_locale_tag(&self.default_locale) {
            Ok(())
        } else {
            Err(Error::InvalidLocale(self.default_locale.clone()))
        }
    }

    /// Build the classifier this configuration describes: the shared built-in
    /// one, or one over the configured rule file.
    pub fn build_classifier(&self) -> Result<Arc<UserAgentClassifier>> {
        match &self.rules {
            Some(path) => {
                tracing::debug!(rules = %path.display(), "loading rule file");
                let table = PatternTable::from_file(path)?;
                Ok(Arc::new(UserAgentClassifier::with_table(table)?))
            }
            None => Ok(UserAgentClassifier::shared()),
        }
    }
}
