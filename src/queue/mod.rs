//! Storage queues
//!
//! The queue contract, including the account-wide queue service
//! properties, and its data-plane and resource manager implementations.

pub mod control_plane;
pub mod data_plane;
pub mod models;

use async_trait::async_trait;

use crate::context::OperationContext;
use crate::error::Result;
use crate::models::{AccountIdentity, MetaData, ResourceIdentity};

pub use control_plane::{QueueResourceManagerClient, ResourceManagerQueues};
pub use data_plane::{DataPlaneQueues, QueueDataPlaneClient};
pub use models::*;

/// Operations every queue backend provides
#[async_trait]
pub trait StorageQueues: Send + Sync {
    async fn create(
        &self,
        ctx: &OperationContext,
        id: &ResourceIdentity,
        input: &QueueCreateInput,
    ) -> Result<()>;

    /// Delete the queue; succeeds when it is already gone
    async fn delete(&self, id: &ResourceIdentity) -> Result<()>;

    async fn exists(&self, id: &ResourceIdentity) -> Result<bool>;

    /// `None` when the queue does not exist
    async fn get(&self, id: &ResourceIdentity) -> Result<Option<QueueProperties>>;

    /// Replace all metadata with `metadata`
    async fn update_metadata(&self, id: &ResourceIdentity, metadata: &MetaData) -> Result<()>;

    /// Queue service settings of `account`
    async fn get_service_properties(
        &self,
        account: &AccountIdentity,
    ) -> Result<QueueServiceProperties>;

    async fn update_service_properties(
        &self,
        account: &AccountIdentity,
        properties: &QueueServiceProperties,
    ) -> Result<()>;
}
