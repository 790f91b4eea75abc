use super::types::AcceptedLocale;

/// Parse an `Accept-Language` value into entries ranked by weight.
///
/// Entries without a `q=` parameter weigh `1.0`; a `q=` value that does not
/// parse weighs `0.0` and sorts last instead of being dropped. Weights are
/// clamped to `[0.0, 1.0]`. The sort is stable, so equal weights keep their
/// header order.
pub fn rank_accept_language(header: Option<&str>) -> Vec<AcceptedLocale> {
    let Some(header) = header else {
        return Vec::new();
    };

    let mut locales: Vec<AcceptedLocale> = header
        .split(',')
        .filter_map(|entry| {
            let mut parts = entry.trim().split(';');
            let tag = parts.next().unwrap_or_default().trim();
            if tag.is_empty() {
                return None;
            }
            let weight = match parts.next() {
                Some(param) if param.starts_with("q=") => parse_weight(&param[2..]),
                _ => 1.0,
            };
            Some(AcceptedLocale::new(tag, weight))
        })
        .collect();

    locales.sort_by(|a, b| b.weight.total_cmp(&a.weight));
    locales
}

fn parse_weight(value: &str) -> f64 {
    match value.trim().parse::<f64>() {
        Ok(w) if w.is_nan() => 0.0,
        Ok(w) => w.clamp(0.0, 1.0),
        Err(_) => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ranked(header: &str) -> Vec<(String, f64)> {
        rank_accept_language(Some(header))
            .into_iter()
            .map(|l| (l.tag, l.weight))
            .collect()
    }

    #[test]
    fn absent_or_empty() {
        assert!(rank_accept_language(None).is_empty());
        assert!(rank_accept_language(Some("")).is_empty());
        assert!(rank_accept_language(Some(" , ,")).is_empty());
    }

    #[test]
    fn sorts_by_weight() {
        assert_eq!(
            ranked("fr;q=0.5, en-US, de;q=0.8"),
            vec![
                ("en-US".to_string(), 1.0),
                ("de".to_string(), 0.8),
                ("fr".to_string(), 0.5),
            ]
        );
    }

    #[test]
    fn equal_weights_keep_header_order() {
        let tags: Vec<String> = ranked("da;q=0.7, en-GB;q=0.7, en, fr;q=0.7")
            .into_iter()
            .map(|(t, _)| t)
            .collect();
        assert_eq!(tags, ["en", "da", "en-GB", "fr"]);
    }

    #[test]
    fn malformed_weight_sorts_last() {
        assert_eq!(
            ranked("de;q=abc, en;q=0.1, fr"),
            vec![
                ("fr".to_string(), 1.0),
                ("en".to_string(), 0.1),
                ("de".to_string(), 0.0),
            ]
        );
        assert_eq!(ranked("de;q=")[0].1, 0.0);
        assert_eq!(ranked("de;q=NaN")[0].1, 0.0);
    }

    #[test]
    fn weights_are_clamped() {
        assert_eq!(ranked("de;q=7")[0].1, 1.0);
        assert_eq!(ranked("de;q=-1")[0].1, 0.0);
    }

    #[test]
    fn non_q_parameter_keeps_implicit_weight() {
        assert_eq!(ranked("en;level=1;q=0.2"), vec![("en".to_string(), 1.0)]);
    }

    #[test]
    fn wildcard_is_kept() {
        assert_eq!(
            ranked("*;q=0.1, it"),
            vec![("it".to_string(), 1.0), ("*".to_string(), 0.1)]
        );
    }
}
