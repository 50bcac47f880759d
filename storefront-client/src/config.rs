//! Client configuration

/// Default API prefix of the storefront backend
pub const DEFAULT_API_PREFIX: &str = "/api/v1";

/// Default product listing page size
pub const DEFAULT_PAGE_SIZE: u32 = 12;

/// Client configuration for connecting to the storefront backend
///
/// # Environment
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | STOREFRONT_API_URL | http://localhost:8000 | Backend base URL |
/// | STOREFRONT_API_TOKEN | (none) | Bearer token |
/// | STOREFRONT_TIMEOUT_SECS | 30 | Request timeout |
/// | STOREFRONT_PAGE_SIZE | 12 | Listing page size |
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Server base URL (e.g., "http://localhost:8000")
    pub base_url: String,

    /// Path prefix of every API route
    pub api_prefix: String,

    /// Bearer token for authentication
    pub token: Option<String>,

    /// Request timeout in seconds
    pub timeout_secs: u64,

    /// Items per page for product listings
    pub page_size: u32,
}

impl ClientConfig {
    /// Create a new client configuration
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_prefix: DEFAULT_API_PREFIX.to_string(),
            token: None,
            timeout_secs: 30,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    /// Load configuration from environment variables
    ///
    /// Missing or unparsable values fall back to the defaults.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            base_url: std::env::var("STOREFRONT_API_URL").unwrap_or(defaults.base_url),
            api_prefix: defaults.api_prefix,
            token: std::env::var("STOREFRONT_API_TOKEN")
                .ok()
                .filter(|t| !t.is_empty()),
            timeout_secs: std::env::var("STOREFRONT_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.timeout_secs),
            page_size: std::env::var("STOREFRONT_PAGE_SIZE")
                .ok()
                .and_then(|v| v.parse().ok())
                .filter(|&n: &u32| n > 0)
                .unwrap_or(defaults.page_size),
        }
    }

    /// Set the API prefix
    pub fn with_api_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.api_prefix = prefix.into();
        self
    }

    /// Set the bearer token
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout_secs = seconds;
        self
    }

    /// Set the listing page size (zero is ignored)
    pub fn with_page_size(mut self, page_size: u32) -> Self {
        if page_size > 0 {
            self.page_size = page_size;
        }
        self
    }

    /// Base URL joined with the API prefix, without trailing slash
    pub fn api_url(&self) -> String {
        join_url(&self.base_url, &self.api_prefix)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new("http://localhost:8000")
    }
}

/// Join two URL fragments with exactly one `/` between them
pub(crate) fn join_url(base: &str, path: &str) -> String {
    let base = base.trim_end_matches('/');
    let path = path.trim_matches('/');
    if path.is_empty() {
        base.to_string()
    } else {
        format!("{}/{}", base, path)
    }
}
