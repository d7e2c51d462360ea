//! Resource manager (control-plane) representation
//!
//! Wire models of the account-management API and the pure mapping
//! between them and the canonical values used by the contracts.

pub mod mapper;
pub mod models;

use crate::error::{Result, ShimError};
use crate::models::{AccountIdentity, ResourceIdentity, ResourceKind};

/// The resource group the resource manager needs for `id`
pub(crate) fn require_resource_group(
    kind: ResourceKind,
    id: &ResourceIdentity,
) -> Result<&str> {
    id.resource_group()
        .ok_or_else(|| ShimError::missing_resource_group(kind, id))
}

/// The resource group the resource manager needs for account-wide calls
pub(crate) fn require_account_resource_group(
    kind: ResourceKind,
    account: &AccountIdentity,
) -> Result<&str> {
    account
        .resource_group()
        .ok_or_else(|| ShimError::missing_resource_group(kind, account))
}
