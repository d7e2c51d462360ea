//! Tables
//!
//! The table contract and its data-plane and resource manager
//! implementations. Tables have no metadata, only stored access policies.

pub mod control_plane;
pub mod data_plane;
pub mod models;

use async_trait::async_trait;

use crate::context::OperationContext;
use crate::error::Result;
use crate::models::{ResourceIdentity, SignedIdentifier};

pub use control_plane::{ResourceManagerTables, TableResourceManagerClient};
pub use data_plane::{DataPlaneTables, TableDataPlaneClient};
pub use models::*;

/// Operations every table backend provides
#[async_trait]
pub trait StorageTables: Send + Sync {
    async fn create(&self, ctx: &OperationContext, id: &ResourceIdentity) -> Result<()>;

    /// Delete the table; succeeds when it is already gone
    async fn delete(&self, id: &ResourceIdentity) -> Result<()>;

    async fn exists(&self, id: &ResourceIdentity) -> Result<bool>;

    /// `None` when the table does not exist
    async fn get(&self, id: &ResourceIdentity) -> Result<Option<TableProperties>>;

    /// `None` when the table does not exist
    async fn get_acls(&self, id: &ResourceIdentity) -> Result<Option<Vec<SignedIdentifier>>>;

    /// Replace the stored access policies with `acls`
    async fn update_acls(&self, id: &ResourceIdentity, acls: &[SignedIdentifier]) -> Result<()>;
}
