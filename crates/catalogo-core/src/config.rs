// ── Runtime catalog configuration ──
//
// Describes which API to talk to and how to page through it. Never
// touches disk: the CLI builds a `CatalogConfig` from its profile and
// hands it to `Catalog`.

use std::time::Duration;

use catalogo_api::TransportConfig;
use url::Url;

/// Default page size of the product list.
pub const DEFAULT_ITEMS_PER_PAGE: u32 = 5;

/// Configuration for one product catalog API.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogConfig {
    /// Collection endpoint, e.g. `https://example.com/api/products`.
    pub base_url: Url,
    pub items_per_page: u32,
    /// Initial value of the active-only filter.
    pub active_only: bool,
    /// Request timeout. `None` means no timeout.
    pub timeout: Option<Duration>,
}

impl CatalogConfig {
    pub fn new(base_url: Url) -> Self {
        Self {
            base_url,
            items_per_page: DEFAULT_ITEMS_PER_PAGE,
            active_only: false,
            timeout: None,
        }
    }

    pub(crate) fn transport(&self) -> TransportConfig {
        let transport = TransportConfig::default();
        match self.timeout {
            Some(timeout) => transport.with_timeout(timeout),
            None => transport,
        }
    }
}
