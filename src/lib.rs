//! storage-shim - uniform management of Azure Storage sub-resources
//!
//! Containers, queues, shares and tables can be managed either through the
//! storage account's data-plane endpoints or through the resource manager.
//! Each resource kind has one contract trait with an implementation per
//! backend, so callers get the same create/read/update/delete behaviour
//! whichever backend they pick.

pub mod config;
pub mod container;
pub mod context;
pub mod error;
pub mod models;
pub mod queue;
pub mod resource_manager;
pub mod share;
pub mod table;
pub mod utils;

// Re-export commonly used types
pub use context::OperationContext;
pub use error::{ApiError, Result, ShimError, ValueOutOfRange};
pub use models::{
    AccessLevel, AccessPolicy, AccountIdentity, MetaData, ResourceIdentity, ResourceKind,
    SignedIdentifier,
};
