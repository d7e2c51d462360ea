//! Queues through the queue service endpoint

use async_trait::async_trait;
use std::sync::Arc;
use tracing::trace;

use super::models::{QueueCreateInput, QueueProperties, QueueServiceProperties};
use super::StorageQueues;
use crate::context::OperationContext;
use crate::error::{not_found_as_none, ApiError, Result, ShimError};
use crate::models::{AccountIdentity, MetaData, ResourceIdentity, ResourceKind};

const KIND: ResourceKind = ResourceKind::Queue;

/// Authenticated client for the queue service of a storage account
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait QueueDataPlaneClient: Send + Sync {
    async fn create(
        &self,
        account_name: &str,
        queue_name: &str,
        metadata: &MetaData,
    ) -> std::result::Result<(), ApiError>;

    async fn delete(&self, account_name: &str, queue_name: &str)
        -> std::result::Result<(), ApiError>;

    async fn get_metadata(
        &self,
        account_name: &str,
        queue_name: &str,
    ) -> std::result::Result<MetaData, ApiError>;

    async fn set_metadata(
        &self,
        account_name: &str,
        queue_name: &str,
        metadata: &MetaData,
    ) -> std::result::Result<(), ApiError>;

    async fn get_service_properties(
        &self,
        account_name: &str,
    ) -> std::result::Result<QueueServiceProperties, ApiError>;

    async fn set_service_properties(
        &self,
        account_name: &str,
        properties: &QueueServiceProperties,
    ) -> std::result::Result<(), ApiError>;
}

pub struct DataPlaneQueues {
    client: Arc<dyn QueueDataPlaneClient>,
}

impl DataPlaneQueues {
    pub fn new(client: Arc<dyn QueueDataPlaneClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl StorageQueues for DataPlaneQueues {
    async fn create(
        &self,
        _ctx: &OperationContext,
        id: &ResourceIdentity,
        input: &QueueCreateInput,
    ) -> Result<()> {
        trace!(queue = %id, "creating queue");
        self.client
            .create(&id.account_name, &id.name, &input.metadata)
            .await
            .map_err(|e| ShimError::api("creating", KIND, id, e))
    }

    async fn delete(&self, id: &ResourceIdentity) -> Result<()> {
        match self.client.delete(&id.account_name, &id.name).await {
            Ok(()) => Ok(()),
            Err(e) if e.is_not_found() => Ok(()),
            Err(e) => Err(ShimError::api("deleting", KIND, id, e)),
        }
    }

    async fn exists(&self, id: &ResourceIdentity) -> Result<bool> {
        let props = self.get(id).await?;
        Ok(props.is_some())
    }

    async fn get(&self, id: &ResourceIdentity) -> Result<Option<QueueProperties>> {
        let metadata = not_found_as_none(self.client.get_metadata(&id.account_name, &id.name).await)
            .map_err(|e| ShimError::api("retrieving", KIND, id, e))?;

        Ok(metadata.map(|metadata| QueueProperties { metadata }))
    }

    async fn update_metadata(&self, id: &ResourceIdentity, metadata: &MetaData) -> Result<()> {
        self.client
            .set_metadata(&id.account_name, &id.name, metadata)
            .await
            .map_err(|e| ShimError::api("updating metadata of", KIND, id, e))
    }

    async fn get_service_properties(
        &self,
        account: &AccountIdentity,
    ) -> Result<QueueServiceProperties> {
        self.client
            .get_service_properties(&account.account_name)
            .await
            .map_err(|e| ShimError::api("retrieving service properties of", KIND, account, e))
    }

    async fn update_service_properties(
        &self,
        account: &AccountIdentity,
        properties: &QueueServiceProperties,
    ) -> Result<()> {
        self.client
            .set_service_properties(&account.account_name, properties)
            .await
            .map_err(|e| ShimError::api("updating service properties of", KIND, account, e))
    }
}
