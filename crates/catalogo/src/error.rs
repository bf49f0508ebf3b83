//! CLI error types with miette diagnostics.
//!
//! Maps `CoreError` and `ConfigError` into user-facing errors with
//! actionable help text.

use miette::Diagnostic;
use thiserror::Error;

use catalogo_config::ConfigError;
use catalogo_core::CoreError;

/// Process exit codes.
pub mod exit_code {
    pub const GENERAL: i32 = 1;
    pub const USAGE: i32 = 2;
    pub const NOT_FOUND: i32 = 4;
    pub const CONNECTION: i32 = 7;
    pub const TIMEOUT: i32 = 8;
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    // ── Connection ───────────────────────────────────────────────────

    #[error("Could not connect to the product API at {url}")]
    #[diagnostic(
        code(catalogo::connection_failed),
        help(
            "Check that the API is running and reachable.\n\
             Reason: {reason}"
        )
    )]
    ConnectionFailed { url: String, reason: String },

    #[error("Request timed out")]
    #[diagnostic(
        code(catalogo::timeout),
        help("Increase the timeout with --timeout or check the API's responsiveness.")
    )]
    Timeout,

    // ── Resources ────────────────────────────────────────────────────

    #[error("Product not found: {message}")]
    #[diagnostic(
        code(catalogo::not_found),
        help("Run: catalogo products list to see available products")
    )]
    NotFound { message: String },

    // ── API ──────────────────────────────────────────────────────────

    #[error("API error (HTTP {status}): {message}")]
    #[diagnostic(code(catalogo::api_error))]
    ApiError { status: u16, message: String },

    #[error("Unexpected response from the product API: {message}")]
    #[diagnostic(code(catalogo::invalid_response))]
    InvalidResponse { message: String },

    // ── Validation ───────────────────────────────────────────────────

    #[error("{message}")]
    #[diagnostic(code(catalogo::invalid_input), help("{reason}"))]
    InvalidInput { message: String, reason: String },

    #[error("Invalid value for {field}: {reason}")]
    #[diagnostic(code(catalogo::validation))]
    Validation { field: String, reason: String },

    // ── Configuration ────────────────────────────────────────────────

    #[error("Profile '{name}' not found in configuration")]
    #[diagnostic(
        code(catalogo::profile_not_found),
        help(
            "Available profiles: {available}\n\
             Create one with: catalogo config init"
        )
    )]
    ProfileNotFound { name: String, available: String },

    #[error("No product API configured")]
    #[diagnostic(
        code(catalogo::no_config),
        help(
            "Create a config with: catalogo config init\n\
             Or pass --base-url / set CATALOGO_BASE_URL.\n\
             Expected at: {path}"
        )
    )]
    NoConfig { path: String },

    #[error(transparent)]
    #[diagnostic(code(catalogo::config))]
    Config(ConfigError),

    // ── Interactive ──────────────────────────────────────────────────

    #[error("Destructive operation '{action}' requires confirmation")]
    #[diagnostic(
        code(catalogo::confirmation_required),
        help("Use --yes (-y) to skip confirmation in non-interactive contexts.")
    )]
    NonInteractiveRequiresYes { action: String },

    #[error("Operation cancelled")]
    #[diagnostic(code(catalogo::cancelled))]
    Cancelled,

    // ── IO / Internal ────────────────────────────────────────────────

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Internal error: {0}")]
    #[diagnostic(code(catalogo::internal))]
    Internal(String),
}

impl CliError {
    /// Map this error to an exit code for process termination.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::ConnectionFailed { .. } => exit_code::CONNECTION,
            Self::Timeout => exit_code::TIMEOUT,
            Self::NotFound { .. } => exit_code::NOT_FOUND,
            Self::InvalidInput { .. }
            | Self::Validation { .. }
            | Self::NonInteractiveRequiresYes { .. } => exit_code::USAGE,
            _ => exit_code::GENERAL,
        }
    }
}

// ── ConfigError → CliError mapping ───────────────────────────────────

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::Validation { field, reason } => CliError::Validation { field, reason },
            other => CliError::Config(other),
        }
    }
}

// ── CoreError → CliError mapping ─────────────────────────────────────

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Network { url, reason } => CliError::ConnectionFailed { url, reason },
            CoreError::Timeout => CliError::Timeout,
            CoreError::Http {
                status: 404,
                message,
            } => CliError::NotFound { message },
            CoreError::Http { status, message } => CliError::ApiError { status, message },
            CoreError::InvalidResponse { message } => CliError::InvalidResponse { message },
            CoreError::Validation(e) => CliError::InvalidInput {
                message: e.user_message(),
                reason: e.to_string(),
            },
            CoreError::Cancelled => CliError::Cancelled,
            CoreError::Config { message } => CliError::Validation {
                field: "config".into(),
                reason: message,
            },
            CoreError::Internal(message) => CliError::Internal(message),
        }
    }
}
