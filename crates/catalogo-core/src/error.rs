// ── Core error types ──
//
// Errors surfaced by catalog operations. Consumers never see reqwest or
// serde errors directly; `From<catalogo_api::Error>` folds them into the
// failure kinds the coordinator reports.

use strum::Display;
use thiserror::Error;

use crate::validation::ValidationError;

/// Coarse failure classification shared by every operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "snake_case")]
pub enum FailureKind {
    /// No response at all: connection refused, DNS, timeout.
    NetworkFailure,
    /// The server answered with a non-2xx status.
    HttpError,
    /// Rejected locally before any request was made.
    ValidationFailure,
    Cancelled,
    Other,
}

/// Unified error type for the core crate.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Network ──────────────────────────────────────────────────────
    #[error("Cannot connect to catalog API at {url}: {reason}")]
    Network { url: String, reason: String },

    #[error("Request to catalog API timed out")]
    Timeout,

    // ── API ──────────────────────────────────────────────────────────
    #[error("Catalog API returned HTTP {status}: {message}")]
    Http { status: u16, message: String },

    #[error("Unexpected response from catalog API: {message}")]
    InvalidResponse { message: String },

    // ── Local ────────────────────────────────────────────────────────
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Operation cancelled")]
    Cancelled,

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Internal error: {0}")]
    Internal(String),
}

impl CoreError {
    pub fn kind(&self) -> FailureKind {
        match self {
            Self::Network { .. } | Self::Timeout => FailureKind::NetworkFailure,
            Self::Http { .. } => FailureKind::HttpError,
            Self::Validation(_) => FailureKind::ValidationFailure,
            Self::Cancelled => FailureKind::Cancelled,
            Self::InvalidResponse { .. } | Self::Config { .. } | Self::Internal(_) => {
                FailureKind::Other
            }
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Http { status: 404, .. })
    }
}

// ── Conversion from transport-layer errors ───────────────────────────

impl From<catalogo_api::Error> for CoreError {
    fn from(err: catalogo_api::Error) -> Self {
        match err {
            catalogo_api::Error::Transport(ref e) => {
                if e.is_timeout() {
                    CoreError::Timeout
                } else if let Some(status) = e.status() {
                    CoreError::Http {
                        status: status.as_u16(),
                        message: e.to_string(),
                    }
                } else {
                    CoreError::Network {
                        url: e.url().map(ToString::to_string).unwrap_or_default(),
                        reason: e.to_string(),
                    }
                }
            }
            catalogo_api::Error::Http { status, message } => CoreError::Http { status, message },
            catalogo_api::Error::Deserialization { message, .. } => {
                CoreError::InvalidResponse { message }
            }
            catalogo_api::Error::InvalidUrl(e) => CoreError::Config {
                message: format!("Invalid URL: {e}"),
            },
            catalogo_api::Error::InvalidPathSegment(segment) => CoreError::Config {
                message: format!("Invalid product id: {segment:?}"),
            },
            catalogo_api::Error::ClientBuild(message) => CoreError::Config { message },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::Field;

    #[test]
    fn http_error_keeps_status() {
        let err = CoreError::from(catalogo_api::Error::Http {
            status: 404,
            message: "missing".into(),
        });
        assert_eq!(err.kind(), FailureKind::HttpError);
        assert!(err.is_not_found());
    }

    #[test]
    fn validation_kind() {
        let err = CoreError::from(ValidationError::Required { field: Field::Id });
        assert_eq!(err.kind(), FailureKind::ValidationFailure);
    }

    #[test]
    fn bad_url_is_config_error() {
        let err = CoreError::from(catalogo_api::Error::InvalidUrl(
            url::ParseError::RelativeUrlWithoutBase,
        ));
        assert_eq!(err.kind(), FailureKind::Other);
        assert!(matches!(err, CoreError::Config { .. }));
    }
}
