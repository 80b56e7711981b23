//! Error types for the Centavo CLI

use std::time::Duration;
use thiserror::Error;

/// Result type alias for Centavo operations
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for the application
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Session(#[from] SessionError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Calc(#[from] CalcError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Interactive prompt error: {0}")]
    Dialoguer(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Operation failed: {0}")]
    Other(String),
}

impl From<dialoguer::Error> for Error {
    fn from(err: dialoguer::Error) -> Self {
        Error::Dialoguer(err.to_string())
    }
}

/// API-related errors
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Not signed in or session expired. Run `centavo login` to sign in.")]
    Unauthorized,

    #[error("Authentication failed: {0}")]
    AuthFailed(String),

    #[error("Access denied. You don't have permission to access this resource.")]
    Forbidden,

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Rate limit exceeded. Retry after {0:?}")]
    RateLimit(Duration),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Server error: {0}")]
    ServerError(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Invalid API response: {0}")]
    InvalidResponse(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ApiError::Network("Request timed out".to_string())
        } else if err.is_connect() {
            ApiError::Network("Failed to connect to API".to_string())
        } else {
            ApiError::Network(err.to_string())
        }
    }
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration file not found. Run `centavo config set-host <URL>` to create one.")]
    NotFound,

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Failed to save configuration: {0}")]
    SaveError(String),
}

impl From<serde_yaml::Error> for ConfigError {
    fn from(err: serde_yaml::Error) -> Self {
        ConfigError::ParseError(err.to_string())
    }
}

/// Local session store errors
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Could not determine home directory for the session store")]
    NoHome,

    #[error("Session store error: {0}")]
    Storage(String),

    #[error("Session store I/O error: {0}")]
    Io(String),
}

impl From<rusqlite::Error> for SessionError {
    fn from(err: rusqlite::Error) -> Self {
        SessionError::Storage(err.to_string())
    }
}

/// Rejected user input
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("Amount is required")]
    MissingAmount,

    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    #[error("Amount must be greater than zero")]
    NonPositiveAmount,

    #[error("Description is required")]
    MissingDescription,

    #[error("Description is too short (minimum {0} characters)")]
    DescriptionTooShort(usize),

    #[error("Category is required")]
    MissingCategory,

    #[error("Invalid date '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("Email is required")]
    MissingEmail,

    #[error("Invalid email address: {0}")]
    InvalidEmail(String),

    #[error("Password is required")]
    MissingPassword,

    #[error("Password is too short (minimum {0} characters)")]
    PasswordTooShort(usize),

    #[error("Passwords do not match")]
    PasswordMismatch,

    #[error("Name is required")]
    MissingName,

    #[error("Name is too short (minimum {0} characters)")]
    NameTooShort(usize),

    #[error("Receipt file not found: {0}")]
    ReceiptNotFound(String),
}

/// Calculator input outside the domain of a formula
#[derive(Debug, Error, PartialEq)]
pub enum CalcError {
    #[error("Compounding periods per year must be positive (got {0})")]
    InvalidCompoundingPeriods(i64),

    #[error("Loan term must be at least one year")]
    ZeroLoanTerm,

    #[error("Term of {years} years exceeds the {max} year limit")]
    TermTooLong { years: u32, max: u32 },

    #[error("{0} must be a finite number")]
    NonFinite(&'static str),
}
