//! Shares through the resource manager

use async_trait::async_trait;
use std::sync::Arc;
use tracing::trace;

use super::models::{ShareCreateInput, ShareProperties};
use super::StorageShares;
use crate::context::OperationContext;
use crate::error::{not_found_as_none, ApiError, Result, ShimError};
use crate::models::{MetaData, ResourceIdentity, ResourceKind, SignedIdentifier};
use crate::resource_manager::mapper::{acls_to_arm, metadata_to_arm, quota_to_arm, share_from_arm};
use crate::resource_manager::models as arm;
use crate::resource_manager::require_resource_group;

const KIND: ResourceKind = ResourceKind::Share;

/// Authenticated client for the file shares resource manager API
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ShareResourceManagerClient: Send + Sync {
    async fn create(
        &self,
        resource_group: &str,
        account_name: &str,
        share_name: &str,
        share: arm::FileShare,
    ) -> std::result::Result<arm::FileShare, ApiError>;

    async fn delete(
        &self,
        resource_group: &str,
        account_name: &str,
        share_name: &str,
        include_snapshots: bool,
    ) -> std::result::Result<(), ApiError>;

    async fn get(
        &self,
        resource_group: &str,
        account_name: &str,
        share_name: &str,
    ) -> std::result::Result<arm::FileShare, ApiError>;

    async fn update(
        &self,
        resource_group: &str,
        account_name: &str,
        share_name: &str,
        share: arm::FileShare,
    ) -> std::result::Result<arm::FileShare, ApiError>;
}

pub struct ResourceManagerShares {
    client: Arc<dyn ShareResourceManagerClient>,
}

impl ResourceManagerShares {
    pub fn new(client: Arc<dyn ShareResourceManagerClient>) -> Self {
        Self { client }
    }

    async fn patch(
        &self,
        action: &'static str,
        id: &ResourceIdentity,
        properties: arm::FileShareProperties,
    ) -> Result<()> {
        let resource_group = require_resource_group(KIND, id)?;
        let share = arm::FileShare {
            properties: Some(properties),
            ..Default::default()
        };

        self.client
            .update(resource_group, &id.account_name, &id.name, share)
            .await
            .map(|_| ())
            .map_err(|e| ShimError::api(action, KIND, id, e))
    }
}

#[async_trait]
impl StorageShares for ResourceManagerShares {
    async fn create(
        &self,
        _ctx: &OperationContext,
        id: &ResourceIdentity,
        input: &ShareCreateInput,
    ) -> Result<()> {
        let resource_group = require_resource_group(KIND, id)?;
        trace!(share = %id, quota_gb = input.quota_gb, "creating share");

        let quota = quota_to_arm(input.quota_gb)
            .map_err(|e| ShimError::invalid_value("creating", KIND, id, e))?;
        let share = arm::FileShare {
            properties: Some(arm::FileShareProperties {
                metadata: Some(metadata_to_arm(&input.metadata)),
                share_quota: Some(quota),
                ..Default::default()
            }),
            ..Default::default()
        };

        self.client
            .create(resource_group, &id.account_name, &id.name, share)
            .await
            .map(|_| ())
            .map_err(|e| ShimError::api("creating", KIND, id, e))
    }

    async fn delete(&self, id: &ResourceIdentity) -> Result<()> {
        let resource_group = require_resource_group(KIND, id)?;
        match self
            .client
            .delete(resource_group, &id.account_name, &id.name, true)
            .await
        {
            Ok(()) => Ok(()),
            Err(e) if e.is_not_found() => Ok(()),
            Err(e) => Err(ShimError::api("deleting", KIND, id, e)),
        }
    }

    async fn exists(&self, id: &ResourceIdentity) -> Result<bool> {
        let props = self.get(id).await?;
        Ok(props.is_some())
    }

    async fn get(&self, id: &ResourceIdentity) -> Result<Option<ShareProperties>> {
        let resource_group = require_resource_group(KIND, id)?;
        let share = not_found_as_none(
            self.client
                .get(resource_group, &id.account_name, &id.name)
                .await,
        )
        .map_err(|e| ShimError::api("retrieving", KIND, id, e))?;

        Ok(share.map(share_from_arm))
    }

    async fn update_metadata(&self, id: &ResourceIdentity, metadata: &MetaData) -> Result<()> {
        let properties = arm::FileShareProperties {
            metadata: Some(metadata_to_arm(metadata)),
            ..Default::default()
        };
        self.patch("updating metadata of", id, properties).await
    }

    async fn update_quota(&self, id: &ResourceIdentity, quota_gb: u32) -> Result<()> {
        let quota = quota_to_arm(quota_gb)
            .map_err(|e| ShimError::invalid_value("updating quota of", KIND, id, e))?;
        let properties = arm::FileShareProperties {
            share_quota: Some(quota),
            ..Default::default()
        };
        self.patch("updating quota of", id, properties).await
    }

    async fn update_acls(&self, id: &ResourceIdentity, acls: &[SignedIdentifier]) -> Result<()> {
        let properties = arm::FileShareProperties {
            signed_identifiers: Some(acls_to_arm(acls)),
            ..Default::default()
        };
        self.patch("updating ACLs of", id, properties).await
    }
}
