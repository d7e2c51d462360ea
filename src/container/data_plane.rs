//! Containers through the blob service endpoint

use async_trait::async_trait;
use std::sync::Arc;
use tracing::trace;

use super::models::{ContainerCreateInput, ContainerProperties};
use super::StorageContainers;
use crate::config::WaitSettings;
use crate::context::OperationContext;
use crate::error::{not_found_as_none, ApiError, Result, ShimError};
use crate::models::{AccessLevel, MetaData, ResourceIdentity, ResourceKind};
use crate::utils::conflict::{create_waiting_on_delete, CONTAINER_BEING_DELETED};

const KIND: ResourceKind = ResourceKind::Container;

/// Authenticated client for the blob service of a storage account
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContainerDataPlaneClient: Send + Sync {
    async fn create(
        &self,
        account_name: &str,
        container_name: &str,
        input: &ContainerCreateInput,
    ) -> std::result::Result<(), ApiError>;

    async fn delete(
        &self,
        account_name: &str,
        container_name: &str,
    ) -> std::result::Result<(), ApiError>;

    async fn get_properties(
        &self,
        account_name: &str,
        container_name: &str,
    ) -> std::result::Result<ContainerProperties, ApiError>;

    async fn set_access_level(
        &self,
        account_name: &str,
        container_name: &str,
        level: AccessLevel,
    ) -> std::result::Result<(), ApiError>;

    async fn set_metadata(
        &self,
        account_name: &str,
        container_name: &str,
        metadata: &MetaData,
    ) -> std::result::Result<(), ApiError>;
}

pub struct DataPlaneContainers {
    client: Arc<dyn ContainerDataPlaneClient>,
    wait: WaitSettings,
}

impl DataPlaneContainers {
    pub fn new(client: Arc<dyn ContainerDataPlaneClient>) -> Self {
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
impl StorageContainers for DataPlaneContainers {
    async fn create(
        &self,
        ctx: &OperationContext,
        id: &ResourceIdentity,
        input: &ContainerCreateInput,
    ) -> Result<()> {
        trace!(container = %id, access_level = %input.access_level, "creating container");
        create_waiting_on_delete(ctx, KIND, id, &self.wait, CONTAINER_BEING_DELETED, || {
            self.client.create(&id.account_name, &id.name, input)
        })
        .await
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

    async fn get(&self, id: &ResourceIdentity) -> Result<Option<ContainerProperties>> {
        not_found_as_none(self.client.get_properties(&id.account_name, &id.name).await)
            .map_err(|e| ShimError::api("retrieving", KIND, id, e))
    }

    async fn update_access_level(&self, id: &ResourceIdentity, level: AccessLevel) -> Result<()> {
        self.client
            .set_access_level(&id.account_name, &id.name, level)
            .await
            .map_err(|e| ShimError::api("updating access level of", KIND, id, e))
    }

    async fn update_metadata(&self, id: &ResourceIdentity, metadata: &MetaData) -> Result<()> {
        self.client
            .set_metadata(&id.account_name, &id.name, metadata)
            .await
            .map_err(|e| ShimError::api("updating metadata of", KIND, id, e))
    }
}
