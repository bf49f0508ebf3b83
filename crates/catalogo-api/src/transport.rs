// Shared transport configuration for building reqwest::Client instances.
//
// The catalog API needs no TLS overrides or cookies; only the optional
// timeout and the user agent are configurable.

use std::time::Duration;

use crate::error::Error;

const DEFAULT_USER_AGENT: &str = concat!("catalogo/", env!("CARGO_PKG_VERSION"));

/// Shared transport configuration for building HTTP clients.
#[derive(Debug, Clone)]
pub struct TransportConfig {
    /// Request timeout. `None` keeps the platform default (no timeout).
    pub timeout: Option<Duration>,
    pub user_agent: String,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            timeout: None,
            user_agent: DEFAULT_USER_AGENT.to_owned(),
        }
    }
}

impl TransportConfig {
    /// Set a request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Build a `reqwest::Client` from this config.
    pub fn build_client(&self) -> Result<reqwest::Client, Error> {
        let mut builder = reqwest::Client::builder().user_agent(self.user_agent.as_str());

        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }

        builder
            .build()
            .map_err(|e| Error::ClientBuild(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_has_no_timeout() {
        let config = TransportConfig::default();
        assert!(config.timeout.is_none());
        assert!(config.user_agent.starts_with("catalogo/"));
    }

    #[test]
    fn with_timeout_sets_value() {
        let config = TransportConfig::default().with_timeout(Duration::from_secs(5));
        assert_eq!(config.timeout, Some(Duration::from_secs(5)));
        assert!(config.build_client().is_ok());
    }
}
