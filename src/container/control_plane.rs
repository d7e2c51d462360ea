//! Containers through the resource manager

use async_trait::async_trait;
use std::sync::Arc;
use tracing::trace;

use super::models::{ContainerCreateInput, ContainerProperties};
use super::StorageContainers;
use crate::context::OperationContext;
use crate::error::{not_found_as_none, ApiError, Result, ShimError};
use crate::models::{AccessLevel, MetaData, ResourceIdentity, ResourceKind};
use crate::resource_manager::mapper::{access_level_to_arm, container_from_arm, metadata_to_arm};
use crate::resource_manager::models as arm;
use crate::resource_manager::require_resource_group;

const KIND: ResourceKind = ResourceKind::Container;

/// Authenticated client for the blob containers resource manager API
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContainerResourceManagerClient: Send + Sync {
    async fn create(
        &self,
        resource_group: &str,
        account_name: &str,
        container_name: &str,
        container: arm::BlobContainer,
    ) -> std::result::Result<arm::BlobContainer, ApiError>;

    async fn delete(
        &self,
        resource_group: &str,
        account_name: &str,
        container_name: &str,
    ) -> std::result::Result<(), ApiError>;

    async fn get(
        &self,
        resource_group: &str,
        account_name: &str,
        container_name: &str,
    ) -> std::result::Result<arm::BlobContainer, ApiError>;

    /// Patch the properties that are set on `container`
    async fn update(
        &self,
        resource_group: &str,
        account_name: &str,
        container_name: &str,
        container: arm::BlobContainer,
    ) -> std::result::Result<arm::BlobContainer, ApiError>;
}

pub struct ResourceManagerContainers {
    client: Arc<dyn ContainerResourceManagerClient>,
}

impl ResourceManagerContainers {
    pub fn new(client: Arc<dyn ContainerResourceManagerClient>) -> Self {
        Self { client }
    }

    async fn patch(
        &self,
        action: &'static str,
        id: &ResourceIdentity,
        properties: arm::ContainerProperties,
    ) -> Result<()> {
        let resource_group = require_resource_group(KIND, id)?;
        let container = arm::BlobContainer {
            properties: Some(properties),
            ..Default::default()
        };

        self.client
            .update(resource_group, &id.account_name, &id.name, container)
            .await
            .map(|_| ())
            .map_err(|e| ShimError::api(action, KIND, id, e))
    }
}

#[async_trait]
impl StorageContainers for ResourceManagerContainers {
    async fn create(
        &self,
        _ctx: &OperationContext,
        id: &ResourceIdentity,
        input: &ContainerCreateInput,
    ) -> Result<()> {
        let resource_group = require_resource_group(KIND, id)?;
        trace!(container = %id, access_level = %input.access_level, "creating container");

        let container = arm::BlobContainer {
            properties: Some(arm::ContainerProperties {
                public_access: Some(access_level_to_arm(input.access_level)),
                metadata: Some(metadata_to_arm(&input.metadata)),
                ..Default::default()
            }),
            ..Default::default()
        };

        self.client
            .create(resource_group, &id.account_name, &id.name, container)
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

    async fn get(&self, id: &ResourceIdentity) -> Result<Option<ContainerProperties>> {
        let resource_group = require_resource_group(KIND, id)?;
        let container = not_found_as_none(
            self.client
                .get(resource_group, &id.account_name, &id.name)
                .await,
        )
        .map_err(|e| ShimError::api("retrieving", KIND, id, e))?;

        Ok(container.map(container_from_arm))
    }

    async fn update_access_level(&self, id: &ResourceIdentity, level: AccessLevel) -> Result<()> {
        let properties = arm::ContainerProperties {
            public_access: Some(access_level_to_arm(level)),
            ..Default::default()
        };
        self.patch("updating access level of", id, properties).await
    }

    async fn update_metadata(&self, id: &ResourceIdentity, metadata: &MetaData) -> Result<()> {
        // an empty map is still sent so existing keys are cleared
        let properties = arm::ContainerProperties {
            metadata: Some(metadata_to_arm(metadata)),
            ..Default::default()
        };
        self.patch("updating metadata of", id, properties).await
    }
}
