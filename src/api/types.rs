//! Type definitions for the HTTP API.
//!
//! This module contains the JSON payloads the router sends back and the
//! loosely-typed parameters it reads from callers.

use crate::error::{Error, Result};
use crate::runner::StartRequest;
use chrono::{SecondsFormat, Utc};
use serde::Serialize;
use serde_json::Value;

/// Endpoint descriptions listed in not-found responses
pub const AVAILABLE_ENDPOINTS: [&str; 3] = [
    "GET /health",
    "GET /autostart?service=<name>&url=<url>",
    "POST /autostart (JSON body with service and url)",
];

/// JSON body of every API response.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ResponsePayload {
    /// Health status
    Health {
        /// Always "healthy"
        status: String,
        /// ISO-8601 UTC time the response was built
        timestamp: String,
    },

    /// Acknowledgment that a start request was dispatched
    Starting {
        /// Always "starting"
        status: String,
        /// Requested service
        service: String,
        /// Requested target url
        url: String,
        /// Human-readable progress message
        message: String,
    },

    /// Unknown route, with the endpoints that do exist
    NotFound {
        /// Error message
        error: String,
        /// Endpoint descriptions
        #[serde(rename = "availableEndpoints")]
        available_endpoints: Vec<String>,
    },

    /// Any other request error
    Error {
        /// Error message
        error: String,
    },
}

impl ResponsePayload {
    pub fn health() -> Self {
        Self::Health {
            status: "healthy".to_string(),
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }

    pub fn starting(request: &StartRequest) -> Self {
        Self::Starting {
            status: "starting".to_string(),
            service: request.service.clone(),
            url: request.url.clone(),
            message: request.starting_message(),
        }
    }

    pub fn not_found(error: &Error) -> Self {
        Self::NotFound {
            error: error.to_string(),
            available_endpoints: AVAILABLE_ENDPOINTS.iter().map(|e| e.to_string()).collect(),
        }
    }

    pub fn error(error: &Error) -> Self {
        Self::Error {
            error: error.to_string(),
        }
    }
}

/// Raw autostart parameters as supplied by the caller.
///
/// `url` is the target url handed to the script, not the request url.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AutostartParams {
    pub service: Option<String>,
    pub url: Option<String>,
}

impl AutostartParams {
    /// Read parameters from a JSON request body.
    ///
    /// Unparseable JSON and a bare `null` are rejected. Any other value is
    /// read as an object; fields that are absent or not strings stay `None`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidJson`] if the body is not usable JSON.
    pub fn from_json_body(body: &[u8]) -> Result<Self> {
        let value: Value =
            serde_json::from_slice(body).map_err(|e| Error::InvalidJson(e.to_string()))?;

        if value.is_null() {
            return Err(Error::InvalidJson("body is null".to_string()));
        }

        let field = |name: &str| value.get(name).and_then(Value::as_str).map(str::to_string);

        Ok(Self {
            service: field("service"),
            url: field("url"),
        })
    }

    /// Validate into a start request.
    pub fn into_request(self) -> Result<StartRequest> {
        StartRequest::from_params(self.service, self.url)
    }
}
