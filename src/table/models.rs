//! Table data models

use serde::{Deserialize, Serialize};

use crate::models::SignedIdentifier;

/// Properties of an existing table. Tables carry no metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableProperties {
    pub acls: Vec<SignedIdentifier>,
}
