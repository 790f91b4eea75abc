mod accept_language;
mod classifier;
mod config;
mod db;
mod error;
mod helpers;
mod language;
mod layer;
mod literal;
mod locale;
mod parser;
mod parser_data;
mod pattern_table;
pub mod rules;
mod types;

pub use accept_language::rank_accept_language;
pub use classifier::UserAgentClassifier;
pub use config::{Config, DEFAULT_LOCALE_ENV};
pub use error::{Error, Result};
pub use language::LanguageTokenExtractor;
pub use layer::{UserAgentLayer, UserAgentService};
pub use locale::{resolve_locale, DEFAULT_LOCALE};
pub use pattern_table::PatternTable;
pub use types::*;
