use std::fmt;

use thiserror::Error;

use crate::models::{ResourceIdentity, ResourceKind};

/// Error payload returned by a data-plane or control-plane transport
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    pub status: Option<u16>,
    pub error_code: Option<String>,
    pub message: String,
}

impl ApiError {
    pub fn new<S: Into<String>>(status: u16, error_code: Option<&str>, message: S) -> Self {
        Self {
            status: Some(status),
            error_code: error_code.map(str::to_string),
            message: message.into(),
        }
    }

    /// An error that never reached the service (connection, DNS, ...)
    pub fn transport<S: Into<String>>(message: S) -> Self {
        Self {
            status: None,
            error_code: None,
            message: message.into(),
        }
    }

    pub fn not_found<S: Into<String>>(error_code: &str, message: S) -> Self {
        Self::new(404, Some(error_code), message)
    }

    pub fn conflict<S: Into<String>>(error_code: &str, message: S) -> Self {
        Self::new(409, Some(error_code), message)
    }

    pub fn is_not_found(&self) -> bool {
        self.status == Some(404)
    }

    pub fn is_conflict(&self) -> bool {
        self.status == Some(409)
    }

    /// Whether the rendered error text contains `fragment`
    pub fn mentions(&self, fragment: &str) -> bool {
        self.to_string().contains(fragment)
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(status) = self.status {
            write!(f, "HTTP {}: ", status)?;
        }
        if let Some(code) = &self.error_code {
            write!(f, "{}: ", code)?;
        }
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ApiError {}

/// Convert Azure Core errors into the transport payload
impl From<azure_core::Error> for ApiError {
    fn from(error: azure_core::Error) -> Self {
        match error.as_http_error() {
            Some(http_error) => Self {
                status: Some(u16::from(http_error.status())),
                error_code: http_error.error_code().map(str::to_string),
                message: error.to_string(),
            },
            None => Self::transport(error.to_string()),
        }
    }
}

/// A canonical value the resource manager cannot represent
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field} {value} is larger than the resource manager accepts ({max})", max = i32::MAX)]
pub struct ValueOutOfRange {
    pub field: &'static str,
    pub value: u32,
}

/// Main error type for storage-shim operations
#[derive(Debug, Error)]
pub enum ShimError {
    #[error("{action} {kind} {identity}: {source}")]
    Api {
        action: &'static str,
        kind: ResourceKind,
        identity: String,
        #[source]
        source: ApiError,
    },

    #[error("timed out waiting for {kind} {identity} to finish deleting (last state: '{last_state}', target: '{target}'): {reason}")]
    DeleteTimeout {
        kind: ResourceKind,
        identity: String,
        last_state: &'static str,
        target: &'static str,
        reason: String,
    },

    #[error("creating {kind} {identity}: context deadline exceeded")]
    DeadlineExceeded { kind: ResourceKind, identity: String },

    #[error("creating {kind} {identity}: context is missing a timeout")]
    MissingDeadline { kind: ResourceKind, identity: String },

    #[error("{kind} {identity}: a resource group name is required by the resource manager")]
    MissingResourceGroup { kind: ResourceKind, identity: String },

    #[error("{action} {kind} {identity}: {source}")]
    InvalidValue {
        action: &'static str,
        kind: ResourceKind,
        identity: String,
        #[source]
        source: ValueOutOfRange,
    },

    #[error("{action} {kind} {identity}: unsupported: {reason}")]
    Unsupported {
        action: &'static str,
        kind: ResourceKind,
        identity: String,
        reason: String,
    },

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Configuration loading error: {0}")]
    ConfigLoadError(#[from] config::ConfigError),
}

impl ShimError {
    pub fn api(
        action: &'static str,
        kind: ResourceKind,
        identity: &impl fmt::Display,
        source: ApiError,
    ) -> Self {
        Self::Api {
            action,
            kind,
            identity: identity.to_string(),
            source,
        }
    }

    pub fn missing_deadline(kind: ResourceKind, identity: &ResourceIdentity) -> Self {
        Self::MissingDeadline {
            kind,
            identity: identity.to_string(),
        }
    }

    pub fn deadline_exceeded(kind: ResourceKind, identity: &ResourceIdentity) -> Self {
        Self::DeadlineExceeded {
            kind,
            identity: identity.to_string(),
        }
    }

    pub fn missing_resource_group(kind: ResourceKind, identity: &impl fmt::Display) -> Self {
        Self::MissingResourceGroup {
            kind,
            identity: identity.to_string(),
        }
    }

    pub fn invalid_value(
        action: &'static str,
        kind: ResourceKind,
        identity: &impl fmt::Display,
        source: ValueOutOfRange,
    ) -> Self {
        Self::InvalidValue {
            action,
            kind,
            identity: identity.to_string(),
            source,
        }
    }

    pub fn unsupported<S: Into<String>>(
        action: &'static str,
        kind: ResourceKind,
        identity: &impl fmt::Display,
        reason: S,
    ) -> Self {
        Self::Unsupported {
            action,
            kind,
            identity: identity.to_string(),
            reason: reason.into(),
        }
    }

    pub fn config<S: Into<String>>(msg: S) -> Self {
        Self::ConfigError(msg.into())
    }

    /// Whether a create ran out of time, while waiting on a delete or not
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::DeleteTimeout { .. } | Self::DeadlineExceeded { .. })
    }

    /// The transport payload behind a wrapped backend error
    pub fn api_error(&self) -> Option<&ApiError> {
        match self {
            Self::Api { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Result type alias for storage-shim operations
pub type Result<T> = std::result::Result<T, ShimError>;

/// Turn a "not found" transport error into `Ok(None)`
pub fn not_found_as_none<T>(
    result: std::result::Result<T, ApiError>,
) -> std::result::Result<Option<T>, ApiError> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(e) if e.is_not_found() => Ok(None),
        Err(e) => Err(e),
    }
}
