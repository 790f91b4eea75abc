mod accepted_locale;
mod browser_match;
mod classification;

pub use accepted_locale::*;
pub use browser_match::*;
pub use classification::*;
