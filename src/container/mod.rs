//! Blob containers
//!
//! The container contract and its data-plane and resource manager
//! implementations.

pub mod control_plane;
pub mod data_plane;
pub mod models;

use async_trait::async_trait;

use crate::context::OperationContext;
use crate::error::Result;
use crate::models::{AccessLevel, MetaData, ResourceIdentity};

pub use control_plane::{ContainerResourceManagerClient, ResourceManagerContainers};
pub use data_plane::{ContainerDataPlaneClient, DataPlaneContainers};
pub use models::*;

/// Operations every container backend provides
#[async_trait]
pub trait StorageContainers: Send + Sync {
    /// Create the container. Needs a deadline in `ctx`.
    async fn create(
        &self,
        ctx: &OperationContext,
        id: &ResourceIdentity,
        input: &ContainerCreateInput,
    ) -> Result<()>;

    /// Delete the container; succeeds when it is already gone
    async fn delete(&self, id: &ResourceIdentity) -> Result<()>;

    async fn exists(&self, id: &ResourceIdentity) -> Result<bool>;

    /// `None` when the container does not exist
    async fn get(&self, id: &ResourceIdentity) -> Result<Option<ContainerProperties>>;

    async fn update_access_level(&self, id: &ResourceIdentity, level: AccessLevel) -> Result<()>;

    /// Replace all metadata with `metadata`
    async fn update_metadata(&self, id: &ResourceIdentity, metadata: &MetaData) -> Result<()>;
}
