//! Tables through the table service endpoint

use async_trait::async_trait;
use std::sync::Arc;
use tracing::trace;

use super::models::TableProperties;
use super::StorageTables;
use crate::context::OperationContext;
use crate::error::{not_found_as_none, ApiError, Result, ShimError};
use crate::models::{ResourceIdentity, ResourceKind, SignedIdentifier};

const KIND: ResourceKind = ResourceKind::Table;

/// Authenticated client for the table service of a storage account
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TableDataPlaneClient: Send + Sync {
    async fn create(&self, account_name: &str, table_name: &str)
        -> std::result::Result<(), ApiError>;

    async fn delete(&self, account_name: &str, table_name: &str)
        -> std::result::Result<(), ApiError>;

    /// Dedicated existence check of the table service
    async fn exists(&self, account_name: &str, table_name: &str)
        -> std::result::Result<bool, ApiError>;

    async fn get_acls(
        &self,
        account_name: &str,
        table_name: &str,
    ) -> std::result::Result<Vec<SignedIdentifier>, ApiError>;

    async fn set_acls(
        &self,
        account_name: &str,
        table_name: &str,
        acls: &[SignedIdentifier],
    ) -> std::result::Result<(), ApiError>;
}

pub struct DataPlaneTables {
    client: Arc<dyn TableDataPlaneClient>,
}

impl DataPlaneTables {
    pub fn new(client: Arc<dyn TableDataPlaneClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl StorageTables for DataPlaneTables {
    async fn create(&self, _ctx: &OperationContext, id: &ResourceIdentity) -> Result<()> {
        trace!(table = %id, "creating table");
        self.client
            .create(&id.account_name, &id.name)
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
        match self.client.exists(&id.account_name, &id.name).await {
            Ok(exists) => Ok(exists),
            Err(e) if e.is_not_found() => Ok(false),
            Err(e) => Err(ShimError::api("checking existence of", KIND, id, e)),
        }
    }

    async fn get(&self, id: &ResourceIdentity) -> Result<Option<TableProperties>> {
        let acls = self.get_acls(id).await?;
        Ok(acls.map(|acls| TableProperties { acls }))
    }

    async fn get_acls(&self, id: &ResourceIdentity) -> Result<Option<Vec<SignedIdentifier>>> {
        not_found_as_none(self.client.get_acls(&id.account_name, &id.name).await)
            .map_err(|e| ShimError::api("retrieving ACLs of", KIND, id, e))
    }

    async fn update_acls(&self, id: &ResourceIdentity, acls: &[SignedIdentifier]) -> Result<()> {
        self.client
            .set_acls(&id.account_name, &id.name, acls)
            .await
            .map_err(|e| ShimError::api("updating ACLs of", KIND, id, e))
    }
}
