//! Queues through the resource manager

use async_trait::async_trait;
use std::sync::Arc;
use tracing::trace;

use super::models::{QueueCreateInput, QueueProperties, QueueServiceProperties};
use super::StorageQueues;
use crate::context::OperationContext;
use crate::error::{not_found_as_none, ApiError, Result, ShimError};
use crate::models::{AccountIdentity, MetaData, ResourceIdentity, ResourceKind};
use crate::resource_manager::mapper::{
    metadata_to_arm, queue_from_arm, queue_service_from_arm, queue_service_to_arm,
};
use crate::resource_manager::models as arm;
use crate::resource_manager::{require_account_resource_group, require_resource_group};

const KIND: ResourceKind = ResourceKind::Queue;

/// Authenticated client for the queue services resource manager API
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait QueueResourceManagerClient: Send + Sync {
    async fn create(
        &self,
        resource_group: &str,
        account_name: &str,
        queue_name: &str,
        queue: arm::StorageQueue,
    ) -> std::result::Result<arm::StorageQueue, ApiError>;

    async fn delete(
        &self,
        resource_group: &str,
        account_name: &str,
        queue_name: &str,
    ) -> std::result::Result<(), ApiError>;

    async fn get(
        &self,
        resource_group: &str,
        account_name: &str,
        queue_name: &str,
    ) -> std::result::Result<arm::StorageQueue, ApiError>;

    async fn update(
        &self,
        resource_group: &str,
        account_name: &str,
        queue_name: &str,
        queue: arm::StorageQueue,
    ) -> std::result::Result<arm::StorageQueue, ApiError>;

    async fn get_service_properties(
        &self,
        resource_group: &str,
        account_name: &str,
    ) -> std::result::Result<arm::QueueServiceProperties, ApiError>;

    async fn set_service_properties(
        &self,
        resource_group: &str,
        account_name: &str,
        properties: arm::QueueServiceProperties,
    ) -> std::result::Result<arm::QueueServiceProperties, ApiError>;
}

pub struct ResourceManagerQueues {
    client: Arc<dyn QueueResourceManagerClient>,
}

impl ResourceManagerQueues {
    pub fn new(client: Arc<dyn QueueResourceManagerClient>) -> Self {
        Self { client }
    }

    fn queue_with_metadata(metadata: &MetaData) -> arm::StorageQueue {
        arm::StorageQueue {
            properties: Some(arm::QueueProperties {
                metadata: Some(metadata_to_arm(metadata)),
                ..Default::default()
            }),
            ..Default::default()
        }
    }
}

#[async_trait]
impl StorageQueues for ResourceManagerQueues {
    async fn create(
        &self,
        _ctx: &OperationContext,
        id: &ResourceIdentity,
        input: &QueueCreateInput,
    ) -> Result<()> {
        let resource_group = require_resource_group(KIND, id)?;
        trace!(queue = %id, "creating queue");

        self.client
            .create(
                resource_group,
                &id.account_name,
                &id.name,
                Self::queue_with_metadata(&input.metadata),
            )
            .await
            .map(|_| ())
            .map_err(|e| ShimError::api("creating", KIND, id, e))
    }

    async fn delete(&self, id: &ResourceIdentity) -> Result<()> {
        let resource_group = require_resource_group(KIND, id)?;
        match self.client.delete(resource_group, &id.account_name, &id.name).await {
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
        let resource_group = require_resource_group(KIND, id)?;
        let queue = not_found_as_none(
            self.client
                .get(resource_group, &id.account_name, &id.name)
                .await,
        )
        .map_err(|e| ShimError::api("retrieving", KIND, id, e))?;

        Ok(queue.map(queue_from_arm))
    }

    async fn update_metadata(&self, id: &ResourceIdentity, metadata: &MetaData) -> Result<()> {
        let resource_group = require_resource_group(KIND, id)?;
        self.client
            .update(
                resource_group,
                &id.account_name,
                &id.name,
                Self::queue_with_metadata(metadata),
            )
            .await
            .map(|_| ())
            .map_err(|e| ShimError::api("updating metadata of", KIND, id, e))
    }

    async fn get_service_properties(
        &self,
        account: &AccountIdentity,
    ) -> Result<QueueServiceProperties> {
        let resource_group = require_account_resource_group(KIND, account)?;
        self.client
            .get_service_properties(resource_group, &account.account_name)
            .await
            .map(queue_service_from_arm)
            .map_err(|e| ShimError::api("retrieving service properties of", KIND, account, e))
    }

    async fn update_service_properties(
        &self,
        account: &AccountIdentity,
        properties: &QueueServiceProperties,
    ) -> Result<()> {
        const ACTION: &str = "updating service properties of";

        let resource_group = require_account_resource_group(KIND, account)?;
        if properties.has_analytics() {
            return Err(ShimError::unsupported(
                ACTION,
                KIND,
                account,
                "logging and metrics cannot be managed through the resource manager",
            ));
        }
        let service = queue_service_to_arm(properties)
            .map_err(|e| ShimError::invalid_value(ACTION, KIND, account, e))?;

        self.client
            .set_service_properties(resource_group, &account.account_name, service)
            .await
            .map(|_| ())
            .map_err(|e| ShimError::api(ACTION, KIND, account, e))
    }
}
