// ---------------------------------------------------------------------------
// Internal data structs carried inside CompiledParser<T>
// ---------------------------------------------------------------------------

#[derive(Clone)]
pub(crate) struct PlatformData {
    pub label: String,
}

#[derive(Clone)]
pub(crate) struct BrowserData {
    pub label: String,
    pub crawler: bool,
}
