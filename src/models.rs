//! Data models shared by every resource kind
//!
//! Identities, access levels and ACL entries used at the contract
//! boundary. Values here are already in canonical form: maps and lists
//! are never absent, only empty.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Free-form resource metadata
pub type MetaData = HashMap<String, String>;

/// The kind of storage sub-resource an operation targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResourceKind {
    Container,
    Queue,
    Share,
    Table,
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ResourceKind::Container => "container",
            ResourceKind::Queue => "queue",
            ResourceKind::Share => "share",
            ResourceKind::Table => "table",
        };
        f.write_str(name)
    }
}

/// Identifies one sub-resource inside a storage account.
///
/// The resource group is only used by the resource manager backend; the
/// data-plane accepts and ignores it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResourceIdentity {
    pub account_name: String,
    pub resource_group: Option<String>,
    pub name: String,
}

impl ResourceIdentity {
    pub fn new<A, G, N>(account_name: A, resource_group: G, name: N) -> Self
    where
        A: Into<String>,
        G: Into<String>,
        N: Into<String>,
    {
        Self {
            account_name: account_name.into(),
            resource_group: Some(resource_group.into()),
            name: name.into(),
        }
    }

    /// Identity without a resource group, enough for the data-plane
    pub fn data_plane<A: Into<String>, N: Into<String>>(account_name: A, name: N) -> Self {
        Self {
            account_name: account_name.into(),
            resource_group: None,
            name: name.into(),
        }
    }

    /// The resource group, if one was given and is not blank
    pub fn resource_group(&self) -> Option<&str> {
        self.resource_group
            .as_deref()
            .filter(|rg| !rg.trim().is_empty())
    }
}

impl fmt::Display for ResourceIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.resource_group() {
            Some(rg) => write!(f, "{}/{}/{}", rg, self.account_name, self.name),
            None => write!(f, "{}/{}", self.account_name, self.name),
        }
    }
}

/// Identifies a storage account, for settings that apply account-wide
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AccountIdentity {
    pub account_name: String,
    pub resource_group: Option<String>,
}

impl AccountIdentity {
    pub fn new<A: Into<String>, G: Into<String>>(account_name: A, resource_group: G) -> Self {
        Self {
            account_name: account_name.into(),
            resource_group: Some(resource_group.into()),
        }
    }

    pub fn data_plane<A: Into<String>>(account_name: A) -> Self {
        Self {
            account_name: account_name.into(),
            resource_group: None,
        }
    }

    /// The resource group, if one was given and is not blank
    pub fn resource_group(&self) -> Option<&str> {
        self.resource_group
            .as_deref()
            .filter(|rg| !rg.trim().is_empty())
    }
}

impl fmt::Display for AccountIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.resource_group() {
            Some(rg) => write!(f, "{}/{}", rg, self.account_name),
            None => f.write_str(&self.account_name),
        }
    }
}

impl From<&ResourceIdentity> for AccountIdentity {
    fn from(id: &ResourceIdentity) -> Self {
        Self {
            account_name: id.account_name.clone(),
            resource_group: id.resource_group.clone(),
        }
    }
}

/// Anonymous read access level of a blob container
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AccessLevel {
    #[default]
    Private,
    Blob,
    Container,
}

impl fmt::Display for AccessLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AccessLevel::Private => "private",
            AccessLevel::Blob => "blob",
            AccessLevel::Container => "container",
        };
        f.write_str(name)
    }
}

/// One stored access policy entry of a share or table ACL
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignedIdentifier {
    pub id: String,
    pub access_policy: AccessPolicy,
}

/// Validity window and permissions of a stored access policy.
///
/// Timestamps are ISO-8601 strings and are passed through untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessPolicy {
    pub start: String,
    pub expiry: String,
    pub permission: String,
}

impl SignedIdentifier {
    pub fn new<I, S, E, P>(id: I, start: S, expiry: E, permission: P) -> Self
    where
        I: Into<String>,
        S: Into<String>,
        E: Into<String>,
        P: Into<String>,
    {
        Self {
            id: id.into(),
            access_policy: AccessPolicy {
                start: start.into(),
                expiry: expiry.into(),
                permission: permission.into(),
            },
        }
    }
}
