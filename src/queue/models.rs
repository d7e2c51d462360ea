//! Queue data models
//!
//! Per-queue properties plus the account-wide queue service settings
//! (storage analytics logging, metrics and CORS).

use serde::{Deserialize, Serialize};

use crate::models::MetaData;

/// Properties of an existing queue
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueueProperties {
    pub metadata: MetaData,
}

/// Request for creating a queue
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueueCreateInput {
    pub metadata: MetaData,
}

/// Queue service settings shared by every queue of an account.
///
/// `None` for a section means the backend reports no setting for it (or
/// cannot express it); on update it leaves the section untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueueServiceProperties {
    pub logging: Option<LoggingConfig>,
    pub hour_metrics: Option<MetricsConfig>,
    pub minute_metrics: Option<MetricsConfig>,
    pub cors: Vec<CorsRule>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub version: String,
    pub delete: bool,
    pub read: bool,
    pub write: bool,
    pub retention_policy: RetentionPolicy,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricsConfig {
    pub version: String,
    pub enabled: bool,
    /// Only meaningful when `enabled` is set
    pub include_apis: Option<bool>,
    pub retention_policy: RetentionPolicy,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RetentionPolicy {
    pub enabled: bool,
    pub days: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorsRule {
    pub allowed_origins: Vec<String>,
    pub allowed_methods: Vec<String>,
    pub allowed_headers: Vec<String>,
    pub exposed_headers: Vec<String>,
    pub max_age_in_seconds: u32,
}

impl QueueServiceProperties {
    /// Whether any section beyond CORS is set
    pub fn has_analytics(&self) -> bool {
        self.logging.is_some() || self.hour_metrics.is_some() || self.minute_metrics.is_some()
    }
}
