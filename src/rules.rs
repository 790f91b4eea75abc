//! Built-in rule tables.
//!
//! Order matters: the first rule whose pattern matches wins, there is no
//! scoring. Patterns are compiled case-insensitively and searched anywhere in
//! the user-agent string.

/// A `(label, pattern)` pair of the built-in tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rule {
    pub label: &'static str,
    pub pattern: &'static str,
}

const fn rule(label: &'static str, pattern: &'static str) -> Rule {
    Rule { label, pattern }
}

/// Bumped whenever a built-in rule is added, removed or reordered.
pub const RULES_VERSION: u32 = 1;

pub const PLATFORM_RULES: &[Rule] = &[
    rule("chromeos", "cros"),
    rule("iphone", "iphone|ios"),
    rule("ipad", "ipad"),
    rule("macos", r"darwin|mac|os\s*x"),
    rule("windows", "win"),
    rule("android", "android"),
    rule("linux", r"x11|lin(\b|ux)?"),
    rule("solaris", "(sun|i86)os"),
    rule("wii", r"nintendo\s+wii"),
    rule("irix", "irix"),
    rule("hpux", "hp-?ux"),
    rule("aix", "aix"),
    rule("sco", "sco|unix_sv"),
    rule("bsd", "bsd"),
    rule("amiga", "amiga"),
    rule("blackberry", "blackberry|playbook"),
    rule("symbian", "symbian"),
];

pub const BROWSER_RULES: &[Rule] = &[
    rule("google", "googlebot"),
    rule("msn", "msnbot"),
    rule("yahoo", "yahoo"),
    rule("ask", "ask jeeves"),
    rule("aol", r"aol|america\s+online\s+browser"),
    rule("opera", "opera"),
    rule("chrome", "chrome"),
    rule("firefox", "firefox|firebird|phoenix|iceweasel"),
    rule("galeon", "galeon"),
    rule("safari", "safari|version"),
    rule("webkit", "webkit"),
    rule("camino", "camino"),
    rule("konqueror", "konqueror"),
    rule("kmeleon", "k-meleon"),
    rule("netscape", "netscape"),
    rule("msie", r"msie|microsoft\s+internet\s+explorer|trident/.+? rv:"),
    rule("lynx", "lynx"),
    rule("links", "links"),
    rule("seamonkey", "seamonkey|mozilla"),
];

/// Browser labels that identify crawlers rather than interactive browsers.
pub const CRAWLER_LABELS: &[&str] = &["google", "msn", "yahoo", "ask"];
