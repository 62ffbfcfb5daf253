/// Configuration for the post store.
///
/// The url selects which store a process talks to, e.g. `memory://quill`
/// for the server and `memory://quill-test` for the test suite. Each open
/// of a `memory://` url yields a fresh, isolated collection.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    pub url: String,
}

impl StoreConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }

    /// Namespace portion of the url, used for logging.
    pub fn namespace(&self) -> &str {
        self.url
            .split_once("://")
            .map(|(_, rest)| rest)
            .unwrap_or(self.url.as_str())
    }
}
