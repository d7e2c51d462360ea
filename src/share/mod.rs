//! File shares
//!
//! The share contract and its data-plane and resource manager
//! implementations. Deleting a share always removes its snapshots.

pub mod control_plane;
pub mod data_plane;
pub mod models;

use async_trait::async_trait;

use crate::context::OperationContext;
use crate::error::Result;
use crate::models::{MetaData, ResourceIdentity, SignedIdentifier};

pub use control_plane::{ResourceManagerShares, ShareResourceManagerClient};
pub use data_plane::{DataPlaneShares, ShareDataPlaneClient};
pub use models::*;

/// Operations every share backend provides
#[async_trait]
pub trait StorageShares: Send + Sync {
    /// Create the share. Needs a deadline in `ctx`.
    async fn create(
        &self,
        ctx: &OperationContext,
        id: &ResourceIdentity,
        input: &ShareCreateInput,
    ) -> Result<()>;

    /// Delete the share and its snapshots; succeeds when it is already gone
    async fn delete(&self, id: &ResourceIdentity) -> Result<()>;

    async fn exists(&self, id: &ResourceIdentity) -> Result<bool>;

    /// `None` when the share does not exist
    async fn get(&self, id: &ResourceIdentity) -> Result<Option<ShareProperties>>;

    /// Replace all metadata with `metadata`
    async fn update_metadata(&self, id: &ResourceIdentity, metadata: &MetaData) -> Result<()>;

    async fn update_quota(&self, id: &ResourceIdentity, quota_gb: u32) -> Result<()>;

    /// Replace the stored access policies with `acls`
    async fn update_acls(&self, id: &ResourceIdentity, acls: &[SignedIdentifier]) -> Result<()>;
}
