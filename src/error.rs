/// Error handling module for the dashboard API.
///
/// This module defines the error types used throughout the crate. Request
/// errors are rendered straight back to the HTTP caller, while subprocess
/// errors only ever reach the log because the caller has already received
/// its acknowledgment by the time they occur.
///
/// # Example
///
/// ```
/// use dashboard_api::error::{Error, Result};
///
/// fn describe(result: Result<()>) -> String {
///     match result {
///         Ok(_) => "accepted".to_string(),
///         Err(Error::MissingParameters) => "resubmit with service and url".to_string(),
///         Err(Error::InvalidJson(detail)) => format!("bad body: {}", detail),
///         Err(e) => format!("other error: {}", e),
///     }
/// }
/// ```
use thiserror::Error;

/// Errors that can occur in the dashboard API.
#[derive(Error, Debug)]
pub enum Error {
    /// A required autostart parameter is absent or empty.
    ///
    /// This error occurs when:
    /// - `service` is missing from the query string or JSON body
    /// - `url` is missing from the query string or JSON body
    /// - Either value is present but empty
    #[error("Missing required parameters: service and url")]
    MissingParameters,

    /// The POST body could not be read as JSON.
    ///
    /// The payload carries the parser detail for logging; it is never shown
    /// to the caller.
    #[error("Invalid JSON in request body")]
    InvalidJson(String),

    /// No route matches the request path and method.
    #[error("Not found")]
    RouteNotFound,

    /// The autostart subprocess could not be spawned.
    ///
    /// This error occurs when:
    /// - The interpreter does not exist
    /// - The interpreter is not executable
    /// - The working directory does not exist
    #[error("Failed to launch process: {0}")]
    Launch(String),

    /// The autostart subprocess ran but did not exit successfully.
    #[error("Process failed: {0}")]
    ProcessFailed(String),

    /// Configuration values fail validation checks.
    #[error("Invalid configuration: {0}")]
    ConfigInvalid(String),

    /// The listening socket could not be bound.
    #[error("Failed to bind server: {0}")]
    Bind(String),

    /// A response payload could not be serialized.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Any other error not covered by the above categories.
    #[error("Other error: {0}")]
    Other(String),
}

/// Result type for dashboard API operations.
pub type Result<T> = std::result::Result<T, Error>;
