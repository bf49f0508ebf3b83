use thiserror::Error;

/// Top-level error type for the `catalogo-api` crate.
///
/// Covers every failure mode of a single request against the product API.
/// `catalogo-core` maps these into user-facing failure kinds.
#[derive(Debug, Error)]
pub enum Error {
    // ── Transport ───────────────────────────────────────────────────
    /// HTTP transport error (connection refused, DNS failure, timeout, etc.)
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// A path segment that cannot be sent as-is (`.`, `..` or empty).
    #[error("Invalid path segment: {0:?}")]
    InvalidPathSegment(String),

    /// Building the underlying `reqwest::Client` failed.
    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(String),

    // ── API ─────────────────────────────────────────────────────────
    /// The server answered with a non-2xx status.
    #[error("HTTP {status}: {message}")]
    Http { status: u16, message: String },

    // ── Data ────────────────────────────────────────────────────────
    /// JSON deserialization failed, with the raw body for debugging.
    #[error("Deserialization error: {message}")]
    Deserialization { message: String, body: String },
}

impl Error {
    /// Returns `true` when no HTTP response was received at all.
    pub fn is_network(&self) -> bool {
        matches!(self, Self::Transport(e) if e.is_connect() || e.is_timeout() || e.is_request())
    }

    /// Returns `true` if this is a "not found" error.
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::Http { status: 404, .. } => true,
            Self::Transport(e) => e.status() == Some(reqwest::StatusCode::NOT_FOUND),
            _ => false,
        }
    }

    /// HTTP status code, if the server responded.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            Self::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}
