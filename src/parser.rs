use aho_corasick::AhoCorasick;
use rayon::prelude::*;

use crate::error::Result;
use crate::literal::extract_literals;

/// Prefilter literals shorter than this make a rule "always candidate".
const MIN_LITERAL_LEN: usize = 2;

/// Build the full case-insensitive regex string for a rule pattern.
pub(crate) fn full_pattern(pattern: &str) -> String {
    format!("(?i)(?:{})", pattern)
}

// ---------------------------------------------------------------------------
// CompiledRegex: unified enum over regex::Regex and fancy_regex::Regex
// ---------------------------------------------------------------------------

/// One compiled rule pattern. Patterns the `regex` crate accepts use it
/// directly; the rest (look-around, backreferences) fall back to fancy_regex.
#[derive(Clone)]
pub(crate) enum CompiledRegex {
    Standard(regex::Regex),
    Fancy(fancy_regex::Regex),
}

impl CompiledRegex {
    pub fn compile(pattern: &str) -> Result<Self> {
        let full = full_pattern(pattern);
        match regex::Regex::new(&full) {
            Ok(re) => Ok(Self::Standard(re)),
            Err(_) => Ok(Self::Fancy(fancy_regex::Regex::new(&full)?)),
        }
    }

    pub fn is_fancy(&self) -> bool {
        matches!(self, Self::Fancy(_))
    }

    /// Byte span of the leftmost match. A fancy_regex runtime error (e.g.
    /// backtrack limit) counts as no match.
    pub fn find(&self, text: &str) -> Option<(usize, usize)> {
        match self {
            Self::Standard(re) => re.find(text).map(|m| (m.start(), m.end())),
            Self::Fancy(re) => re
                .find(text)
                .ok()
                .flatten()
                .map(|m| (m.start(), m.end())),
        }
    }
}

// ---------------------------------------------------------------------------
// Shared result types
// ---------------------------------------------------------------------------

/// Result of a successful match.
pub(crate) struct MatchResult<'a, T> {
    pub data: &'a T,
    /// Byte offset just past the matched rule text.
    pub end: usize,
}

#[derive(Clone)]
struct CompiledEntry<T> {
    regex: CompiledRegex,
    data: T,
}

// ---------------------------------------------------------------------------
// CompiledParser: ordered, first-match-wins rule list
// ---------------------------------------------------------------------------

/// Core matching engine: Aho-Corasick literal prefilter + ordered regex scan.
///
/// `T` is the associated data for each entry (e.g. a platform label).
#[derive(Clone)]
pub(crate) struct CompiledParser<T> {
    entries: Vec<CompiledEntry<T>>,
    /// Automaton over the prefix literals of every prefilterable entry.
    prefilter: Option<AhoCorasick>,
    /// Maps Aho-Corasick pattern id → entry index.
    literal_owner: Vec<usize>,
    /// Entries that have to be tried on every input.
    always: Vec<bool>,
}

impl<T> CompiledParser<T> {
    /// Build a CompiledParser from an iterator of (regex_pattern, data) pairs.
    /// Entry order is preserved and decides which rule wins.
    pub fn build(items: impl IntoIterator<Item = (String, T)>) -> Result<Self> {
        let (patterns, data): (Vec<String>, Vec<T>) = items.into_iter().unzip();

        // Phase 1: literal extraction, done on the raw pattern.
        let literals: Vec<Option<Vec<String>>> = patterns
            .par_iter()
            .map(|pattern| extract_literals(pattern, MIN_LITERAL_LEN))
            .collect();

        // Phase 2: compile every pattern in parallel; order survives collect.
        let regexes: Vec<CompiledRegex> = patterns
            .par_iter()
            .map(|pattern| {
                let regex = CompiledRegex::compile(pattern)?;
                if regex.is_fancy() {
                    tracing::warn!(%pattern, "rule needs fancy-regex fallback");
                }
                Ok(regex)
            })
            .collect::<Result<Vec<_>>>()?;

        let entries: Vec<CompiledEntry<T>> = regexes
            .into_iter()
            .zip(data)
            .map(|(regex, data)| CompiledEntry { regex, data })
            .collect();

        // Phase 3: prefilter automaton.
        let mut keys: Vec<String> = Vec::new();
        let mut literal_owner: Vec<usize> = Vec::new();
        let mut always: Vec<bool> = Vec::with_capacity(entries.len());

        for (idx, lits) in literals.into_iter().enumerate() {
            match lits {
                Some(lits) => {
                    always.push(false);
                    for lit in lits {
                        keys.push(lit);
                        literal_owner.push(idx);
                    }
                }
                None => always.push(true),
            }
        }

        let prefilter = if keys.is_empty() {
            None
        } else {
            Some(
                AhoCorasick::builder()
                    .ascii_case_insensitive(true)
                    .build(&keys)?,
            )
        };

        tracing::debug!(
            entries = entries.len(),
            fancy = entries.iter().filter(|e| e.regex.is_fancy()).count(),
            literals = keys.len(),
            always = always.iter().filter(|a| **a).count(),
            "compiled rule list"
        );

        Ok(Self {
            entries,
            prefilter,
            literal_owner,
            always,
        })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Iterate over the entry data in rule order.
    pub fn data(&self) -> impl Iterator<Item = &T> {
        self.entries.iter().map(|e| &e.data)
    }

    /// Find the first matching entry (preserving rule order).
    pub fn match_first<'a>(&'a self, text: &str) -> Option<MatchResult<'a, T>> {
        if text.is_empty() {
            return None;
        }

        // The prefilter folds ASCII case only; non-ASCII input could match
        // through Unicode case folding, so every entry is tried then.
        let candidates = match &self.prefilter {
            Some(ac) if text.is_ascii() => {
                let mut candidates = self.always.clone();
                for m in ac.find_overlapping_iter(text) {
                    candidates[self.literal_owner[m.pattern().as_usize()]] = true;
                }
                Some(candidates)
            }
            _ => None,
        };

        self.entries
            .iter()
            .enumerate()
            .filter(|(idx, _)| candidates.as_ref().map_or(true, |c| c[*idx]))
            .find_map(|(_, entry)| {
                entry.regex.find(text).map(|(_, end)| MatchResult {
                    data: &entry.data,
                    end,
                })
            })
    }
}
