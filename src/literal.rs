use regex_syntax::{hir::literal::Extractor, parse};

/// Extract the prefix literals every match of `pattern` has to start with, for
/// use as Aho-Corasick prefilter keys.
///
/// Returns `None` when the rule cannot be prefiltered and must be tried on
/// every input: the pattern does not parse with `regex_syntax` (PCRE-only
/// syntax), its prefix set is infinite, or any literal is shorter than
/// `min_len` bytes or not plain ASCII. Dropping a single short literal would
/// make the set incomplete, so one bad literal disqualifies the whole rule.
pub(crate) fn extract_literals(pattern: &str, min_len: usize) -> Option<Vec<String>> {
    let hir = parse(pattern).ok()?;

    let mut extractor = Extractor::new();
    extractor.kind(regex_syntax::hir::literal::ExtractKind::Prefix);

    let seq = extractor.extract(&hir);
    let mut literals = Vec::new();
    for lit in seq.literals()? {
        let s = std::str::from_utf8(lit.as_bytes()).ok()?;
        if s.len() < min_len || !s.is_ascii() {
            return None;
        }
        let s = s.to_ascii_lowercase();
        if !literals.contains(&s) {
            literals.push(s);
        }
    }

    if literals.is_empty() {
        None
    } else {
        Some(literals)
    }
}
