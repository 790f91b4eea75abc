use super::types::AcceptedLocale;

pub const DEFAULT_LOCALE: &str = "en_US";

/// Pick the first ranked tag that splits into exactly two non-empty parts on
/// `-`/`_` and normalise it to `language_REGION`. Single-part tags such as
/// `en` are skipped regardless of their weight. Falls back to `default`.
pub fn resolve_locale(accepted: &[AcceptedLocale], default: &str) -> String {
    accepted
        .iter()
        .find_map(|l| normalize_tag(&l.tag))
        .unwrap_or_else(|| default.to_string())
}

fn normalize_tag(tag: &str) -> Option<String> {
    let mut parts = tag.split(['-', '_']);
    match (parts.next(), parts.next(), parts.next()) {
        (Some(lang), Some(region), None) if !lang.is_empty() && !region.is_empty() => {
            Some(format!("{}_{}", lang.to_lowercase(), region.to_uppercase()))
        }
        _ => None,
    }
}

/// Whether `locale` has the `xx_YY` shape expected of a default locale.
pub(crate) fn is_locale_tag(locale: &str) -> bool {
    match locale.split_once('_') {
        Some((lang, region)) => {
            lang.len() == 2
                && region.len() == 2
                && lang.bytes().all(|b| b.is_ascii_lowercase())
                && region.bytes().all(|b| b.is_ascii_uppercase())
        }
        None => false,
    }
}
