//! Tables through the resource manager

use async_trait::async_trait;
use std::sync::Arc;
use tracing::trace;

use super::models::TableProperties;
use super::StorageTables;
use crate::context::OperationContext;
use crate::error::{not_found_as_none, ApiError, Result, ShimError};
use crate::models::{ResourceIdentity, ResourceKind, SignedIdentifier};
use crate::resource_manager::mapper::{acls_to_arm, table_from_arm};
use crate::resource_manager::models as arm;
use crate::resource_manager::require_resource_group;

const KIND: ResourceKind = ResourceKind::Table;

/// Authenticated client for the table services resource manager API
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TableResourceManagerClient: Send + Sync {
    async fn create(
        &self,
        resource_group: &str,
        account_name: &str,
        table_name: &str,
        table: arm::Table,
    ) -> std::result::Result<arm::Table, ApiError>;

    async fn delete(
        &self,
        resource_group: &str,
        account_name: &str,
        table_name: &str,
    ) -> std::result::Result<(), ApiError>;

    async fn get(
        &self,
        resource_group: &str,
        account_name: &str,
        table_name: &str,
    ) -> std::result::Result<arm::Table, ApiError>;

    async fn update(
        &self,
        resource_group: &str,
        account_name: &str,
        table_name: &str,
        table: arm::Table,
    ) -> std::result::Result<arm::Table, ApiError>;
}

pub struct ResourceManagerTables {
    client: Arc<dyn TableResourceManagerClient>,
}

impl ResourceManagerTables {
    pub fn new(client: Arc<dyn TableResourceManagerClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl StorageTables for ResourceManagerTables {
    async fn create(&self, _ctx: &OperationContext, id: &ResourceIdentity) -> Result<()> {
        let resource_group = require_resource_group(KIND, id)?;
        trace!(table = %id, "creating table");

        self.client
            .create(resource_group, &id.account_name, &id.name, arm::Table::default())
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

    async fn get(&self, id: &ResourceIdentity) -> Result<Option<TableProperties>> {
        let resource_group = require_resource_group(KIND, id)?;
        let table = not_found_as_none(
            self.client
                .get(resource_group, &id.account_name, &id.name)
                .await,
        )
        .map_err(|e| ShimError::api("retrieving", KIND, id, e))?;

        Ok(table.map(table_from_arm))
    }

    async fn get_acls(&self, id: &ResourceIdentity) -> Result<Option<Vec<SignedIdentifier>>> {
        let props = self.get(id).await?;
        Ok(props.map(|props| props.acls))
    }

    async fn update_acls(&self, id: &ResourceIdentity, acls: &[SignedIdentifier]) -> Result<()> {
        let resource_group = require_resource_group(KIND, id)?;
        let table = arm::Table {
            properties: Some(arm::TableProperties {
                signed_identifiers: Some(acls_to_arm(acls)),
                ..Default::default()
            }),
            ..Default::default()
        };

        self.client
            .update(resource_group, &id.account_name, &id.name, table)
            .await
            .map(|_| ())
            .map_err(|e| ShimError::api("updating ACLs of", KIND, id, e))
    }
}
