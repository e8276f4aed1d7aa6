use std::time::Duration;

use http::HeaderMap;
use url::Url;

use super::auth::Credentials;

/// User agent sent when none is configured.
pub const DEFAULT_USER_AGENT: &str = concat!("sdkforge/", env!("CARGO_PKG_VERSION"), "/rust");

/// Request timeout used when none is configured.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);

/// Client-wide settings applied to every request.
///
/// Usually created through [`ApiClientBuilder`](super::ApiClientBuilder).
#[derive(Debug, Clone, PartialEq)]
pub struct Configuration {
    /// Server URL, operation paths are appended to it.
    pub base_path: Url,
    /// `User-Agent` header value, omitted when `None`.
    pub user_agent: Option<String>,
    /// Headers added to every request before the operation headers.
    pub default_headers: HeaderMap,
    /// Credentials looked up by the operation authentication scheme.
    pub credentials: Credentials,
    /// Per-request timeout, `None` leaves it to the HTTP client.
    pub timeout: Option<Duration>,
}

impl Configuration {
    /// Creates a configuration with the default user agent and timeout.
    pub fn new(base_path: Url) -> Self {
        Self {
            base_path,
            user_agent: Some(DEFAULT_USER_AGENT.to_string()),
            default_headers: HeaderMap::new(),
            credentials: Credentials::default(),
            timeout: Some(DEFAULT_TIMEOUT),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_use_defaults() {
        let config = Configuration::new(Url::parse("https://api.example.com").unwrap());

        assert!(
            config
                .user_agent
                .as_deref()
                .is_some_and(|ua| ua.starts_with("sdkforge/") && ua.ends_with("/rust"))
        );
        assert_eq!(config.timeout, Some(Duration::from_secs(15)));
        assert_eq!(config.credentials, Credentials::default());
    }
}
