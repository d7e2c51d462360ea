//! File share data models

use serde::{Deserialize, Serialize};

use crate::models::{MetaData, SignedIdentifier};

/// Properties of an existing file share
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShareProperties {
    pub metadata: MetaData,
    pub quota_gb: u32,
    pub acls: Vec<SignedIdentifier>,
}

/// Request for creating a file share
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShareCreateInput {
    pub quota_gb: u32,
    pub metadata: MetaData,
}

/// Quota and metadata as the data-plane reports them for a share
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShareQuotaAndMetaData {
    pub quota_gb: u32,
    pub metadata: MetaData,
}
