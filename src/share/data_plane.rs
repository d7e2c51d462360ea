//! Shares through the file service endpoint

use async_trait::async_trait;
use futures::future::try_join;
use std::sync::Arc;
use tracing::trace;

use super::models::{ShareCreateInput, ShareProperties, ShareQuotaAndMetaData};
use super::StorageShares;
use crate::config::WaitSettings;
use crate::context::OperationContext;
use crate::error::{ApiError, Result, ShimError};
use crate::models::{MetaData, ResourceIdentity, ResourceKind, SignedIdentifier};
use crate::utils::conflict::{create_waiting_on_delete, SHARE_BEING_DELETED};

const KIND: ResourceKind = ResourceKind::Share;

/// Authenticated client for the file service of a storage account
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ShareDataPlaneClient: Send + Sync {
    async fn create(
        &self,
        account_name: &str,
        share_name: &str,
        input: &ShareCreateInput,
    ) -> std::result::Result<(), ApiError>;

    async fn delete(
        &self,
        account_name: &str,
        share_name: &str,
        delete_snapshots: bool,
    ) -> std::result::Result<(), ApiError>;

    async fn get_properties(
        &self,
        account_name: &str,
        share_name: &str,
    ) -> std::result::Result<ShareQuotaAndMetaData, ApiError>;

    async fn get_acls(
        &self,
        account_name: &str,
        share_name: &str,
    ) -> std::result::Result<Vec<SignedIdentifier>, ApiError>;

    async fn set_metadata(
        &self,
        account_name: &str,
        share_name: &str,
        metadata: &MetaData,
    ) -> std::result::Result<(), ApiError>;

    async fn set_quota(
        &self,
        account_name: &str,
        share_name: &str,
        quota_gb: u32,
    ) -> std::result::Result<(), ApiError>;

    async fn set_acls(
        &self,
        account_name: &str,
        share_name: &str,
        acls: &[SignedIdentifier],
    ) -> std::result::Result<(), ApiError>;
}

pub struct DataPlaneShares {
    client: Arc<dyn ShareDataPlaneClient>,
    wait: WaitSettings,
}

impl DataPlaneShares {
    pub fn new(client: Arc<dyn ShareDataPlaneClient>) -> Self {
        Self {
            client,
            wait: WaitSettings::default(),
        }
    }

    pub fn with_wait_settings(mut self, wait: WaitSettings) -> Self {
        self.wait = wait;
        self
    }
}

#[async_trait]
impl StorageShares for DataPlaneShares {
    async fn create(
        &self,
        ctx: &OperationContext,
        id: &ResourceIdentity,
        input: &ShareCreateInput,
    ) -> Result<()> {
        trace!(share = %id, quota_gb = input.quota_gb, "creating share");
        create_waiting_on_delete(ctx, KIND, id, &self.wait, SHARE_BEING_DELETED, || {
            self.client.create(&id.account_name, &id.name, input)
        })
        .await
    }

    async fn delete(&self, id: &ResourceIdentity) -> Result<()> {
        match self.client.delete(&id.account_name, &id.name, true).await {
            Ok(()) => Ok(()),
            Err(e) if e.is_not_found() => Ok(()),
            Err(e) => Err(ShimError::api("deleting", KIND, id, e)),
        }
    }

    async fn exists(&self, id: &ResourceIdentity) -> Result<bool> {
        match self.client.get_properties(&id.account_name, &id.name).await {
            Ok(_) => Ok(true),
            Err(e) if e.is_not_found() => Ok(false),
            Err(e) => Err(ShimError::api("checking existence of", KIND, id, e)),
        }
    }

    async fn get(&self, id: &ResourceIdentity) -> Result<Option<ShareProperties>> {
        let fetched = try_join(
            self.client.get_properties(&id.account_name, &id.name),
            self.client.get_acls(&id.account_name, &id.name),
        )
        .await;

        match fetched {
            Ok((props, acls)) => Ok(Some(ShareProperties {
                metadata: props.metadata,
                quota_gb: props.quota_gb,
                acls,
            })),
            Err(e) if e.is_not_found() => Ok(None),
            Err(e) => Err(ShimError::api("retrieving", KIND, id, e)),
        }
    }

    async fn update_metadata(&self, id: &ResourceIdentity, metadata: &MetaData) -> Result<()> {
        self.client
            .set_metadata(&id.account_name, &id.name, metadata)
            .await
            .map_err(|e| ShimError::api("updating metadata of", KIND, id, e))
    }

    async fn update_quota(&self, id: &ResourceIdentity, quota_gb: u32) -> Result<()> {
        self.client
            .set_quota(&id.account_name, &id.name, quota_gb)
            .await
            .map_err(|e| ShimError::api("updating quota of", KIND, id, e))
    }

    async fn update_acls(&self, id: &ResourceIdentity, acls: &[SignedIdentifier]) -> Result<()> {
        self.client
            .set_acls(&id.account_name, &id.name, acls)
            .await
            .map_err(|e| ShimError::api("updating ACLs of", KIND, id, e))
    }
}
