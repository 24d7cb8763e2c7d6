use std::time::Duration;

/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Options for fetching a page
#[derive(Debug, Clone, PartialEq)]
pub struct FetchOptions {
    /// Overall request timeout
    pub timeout: Duration,

    /// User-Agent header sent with the request
    pub user_agent: String,

    /// Retry once with `http://` prepended when the URL has no scheme
    pub retry_without_scheme: bool,
}

impl FetchOptions {
    /// Create options with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method: set the request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Builder method: set the User-Agent header
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Builder method: enable or disable the schema-less URL retry
    pub fn retry_without_scheme(mut self, retry: bool) -> Self {
        self.retry_without_scheme = retry;
        self
    }
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: concat!("scrapeo/", env!("CARGO_PKG_VERSION")).to_string(),
            retry_without_scheme: true,
        }
    }
}
