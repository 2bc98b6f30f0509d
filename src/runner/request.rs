use crate::error::{Error, Result};
use std::fmt;
use uuid::Uuid;

/// Unique identifier for one autostart invocation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InvocationId(Uuid);

impl InvocationId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for InvocationId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for InvocationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A validated request to start a service.
///
/// Both fields are guaranteed non-empty; construct through
/// [`StartRequest::from_params`] to get that check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartRequest {
    /// Service the script should start
    pub service: String,
    /// Address the service should become reachable at
    pub url: String,
}

impl StartRequest {
    /// Build a request from optional caller-supplied parameters.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingParameters`] if either value is absent or empty.
    pub fn from_params(service: Option<String>, url: Option<String>) -> Result<Self> {
        match (service, url) {
            (Some(service), Some(url)) if !service.is_empty() && !url.is_empty() => {
                Ok(Self { service, url })
            }
            _ => Err(Error::MissingParameters),
        }
    }

    /// Message sent back with the "starting" acknowledgment
    pub fn starting_message(&self) -> String {
        format!("Starting service {}...", self.service)
    }
}
