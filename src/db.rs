use indexmap::IndexMap;
use serde::Deserialize;

// ---------------------------------------------------------------------------
// Rule files
//
// Format: two top-level mappings  label → pattern, plus an optional list of
// crawler labels.
//
//   platforms:
//     chromeos: cros
//     iphone: iphone|ios
//   browsers:
//     google: googlebot
//   crawlers: [google]
// ---------------------------------------------------------------------------

/// Raw deserialization target for a rule file.
/// Uses IndexMap to preserve YAML insertion order (first-match-wins).
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct RuleFile {
    #[serde(default)]
    pub platforms: IndexMap<String, String>,
    #[serde(default)]
    pub browsers: IndexMap<String, String>,
    #[serde(default)]
    pub crawlers: Vec<String>,
}
