//! Blob container data models

use serde::{Deserialize, Serialize};

use crate::models::{AccessLevel, MetaData};

/// Properties of an existing blob container
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContainerProperties {
    pub access_level: AccessLevel,
    pub metadata: MetaData,
    pub has_legal_hold: bool,
    pub has_immutability_policy: bool,
}

/// Request for creating a blob container
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContainerCreateInput {
    pub access_level: AccessLevel,
    pub metadata: MetaData,
}
