/// A browser rule hit: the rule label and the version token after it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BrowserMatch<'a> {
    pub name: &'a str,
    pub version: Option<&'a str>,
}
