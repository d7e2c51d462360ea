//! In-memory storage account shared by the backend integration tests
//!
//! One fake account implements the data-plane and the resource manager
//! transports of every resource kind over the same state, so a value
//! written through one backend can be read back through the other.

#![allow(dead_code)]

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use storage_shim::container::{
    ContainerCreateInput, ContainerDataPlaneClient, ContainerProperties,
    ContainerResourceManagerClient,
};
use storage_shim::queue::{QueueDataPlaneClient, QueueResourceManagerClient, QueueServiceProperties};
use storage_shim::resource_manager::models as arm;
use storage_shim::share::{
    ShareCreateInput, ShareDataPlaneClient, ShareProperties, ShareQuotaAndMetaData,
    ShareResourceManagerClient,
};
use storage_shim::table::{TableDataPlaneClient, TableResourceManagerClient};
use storage_shim::{AccessLevel, AccessPolicy, ApiError, MetaData, ResourceKind, SignedIdentifier};

type Key = (String, String);

fn key(account_name: &str, name: &str) -> Key {
    (account_name.to_string(), name.to_string())
}

#[derive(Default)]
struct State {
    containers: HashMap<Key, ContainerProperties>,
    queues: HashMap<Key, MetaData>,
    shares: HashMap<Key, ShareProperties>,
    tables: HashMap<Key, Vec<SignedIdentifier>>,
    queue_services: HashMap<String, QueueServiceProperties>,
    /// Create attempts still rejected because a delete is propagating
    deleting: HashMap<(ResourceKind, Key), usize>,
    create_attempts: HashMap<ResourceKind, usize>,
    deleted_snapshots: Vec<Key>,
    /// How long a data-plane create takes to answer
    create_latency: Duration,
}

impl State {
    fn delete_in_progress(&mut self, kind: ResourceKind, key: &Key) -> bool {
        let entry = (kind, key.clone());
        let Some(remaining) = self.deleting.get_mut(&entry) else {
            return false;
        };
        if *remaining > 0 {
            *remaining -= 1;
            return true;
        }
        self.deleting.remove(&entry);
        false
    }

    fn count_create(&mut self, kind: ResourceKind) {
        *self.create_attempts.entry(kind).or_default() += 1;
    }
}

#[derive(Default)]
pub struct FakeStorageAccount {
    state: Mutex<State>,
}

impl FakeStorageAccount {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    fn lock(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap()
    }

    /// Remove the resource and reject the next `conflicting_attempts`
    /// data-plane creates of the same name as still being deleted.
    pub fn begin_slow_delete(
        &self,
        kind: ResourceKind,
        account_name: &str,
        name: &str,
        conflicting_attempts: usize,
    ) {
        let mut state = self.lock();
        let k = key(account_name, name);
        match kind {
            ResourceKind::Container => {
                state.containers.remove(&k);
            }
            ResourceKind::Share => {
                state.shares.remove(&k);
            }
            ResourceKind::Queue => {
                state.queues.remove(&k);
            }
            ResourceKind::Table => {
                state.tables.remove(&k);
            }
        }
        state.deleting.insert((kind, k), conflicting_attempts);
    }

    pub fn set_create_latency(&self, latency: Duration) {
        self.lock().create_latency = latency;
    }

    /// Wait out the configured latency without holding the lock
    async fn answer_create_later(&self) {
        let latency = self.lock().create_latency;
        if !latency.is_zero() {
            tokio::time::sleep(latency).await;
        }
    }

    pub fn create_attempts(&self, kind: ResourceKind) -> usize {
        self.lock().create_attempts.get(&kind).copied().unwrap_or_default()
    }

    pub fn seed_container_metadata(&self, account_name: &str, name: &str, metadata: MetaData) {
        let mut state = self.lock();
        let props = state.containers.entry(key(account_name, name)).or_default();
        props.metadata = metadata;
    }

    pub fn set_legal_hold(&self, account_name: &str, name: &str, has_legal_hold: bool) {
        let mut state = self.lock();
        if let Some(props) = state.containers.get_mut(&key(account_name, name)) {
            props.has_legal_hold = has_legal_hold;
        }
    }

    pub fn snapshots_deleted_for(&self, account_name: &str, name: &str) -> bool {
        self.lock().deleted_snapshots.contains(&key(account_name, name))
    }

    fn create_container(
        &self,
        account_name: &str,
        name: &str,
        access_level: AccessLevel,
        metadata: MetaData,
        honour_pending_delete: bool,
    ) -> Result<(), ApiError> {
        let mut state = self.lock();
        state.count_create(ResourceKind::Container);
        let k = key(account_name, name);

        if honour_pending_delete && state.delete_in_progress(ResourceKind::Container, &k) {
            return Err(ApiError::conflict(
                "ContainerBeingDeleted",
                "The specified container is being deleted. Try operation later.",
            ));
        }
        if state.containers.contains_key(&k) {
            return Err(ApiError::conflict(
                "ContainerAlreadyExists",
                "The specified container already exists.",
            ));
        }

        state.containers.insert(
            k,
            ContainerProperties {
                access_level,
                metadata,
                has_legal_hold: false,
                has_immutability_policy: false,
            },
        );
        Ok(())
    }

    fn with_container<T>(
        &self,
        account_name: &str,
        name: &str,
        f: impl FnOnce(&mut ContainerProperties) -> T,
    ) -> Result<T, ApiError> {
        let mut state = self.lock();
        state
            .containers
            .get_mut(&key(account_name, name))
            .map(f)
            .ok_or_else(|| {
                ApiError::not_found("ContainerNotFound", "The specified container does not exist.")
            })
    }

    fn remove_container(&self, account_name: &str, name: &str) -> Result<(), ApiError> {
        self.lock()
            .containers
            .remove(&key(account_name, name))
            .map(|_| ())
            .ok_or_else(|| {
                ApiError::not_found("ContainerNotFound", "The specified container does not exist.")
            })
    }

    fn create_queue(&self, account_name: &str, name: &str, metadata: MetaData) -> Result<(), ApiError> {
        let mut state = self.lock();
        state.count_create(ResourceKind::Queue);
        let k = key(account_name, name);
        if state.queues.contains_key(&k) {
            return Err(ApiError::conflict("QueueAlreadyExists", "The specified queue already exists."));
        }
        state.queues.insert(k, metadata);
        Ok(())
    }

    fn with_queue<T>(
        &self,
        account_name: &str,
        name: &str,
        f: impl FnOnce(&mut MetaData) -> T,
    ) -> Result<T, ApiError> {
        let mut state = self.lock();
        state
            .queues
            .get_mut(&key(account_name, name))
            .map(f)
            .ok_or_else(|| ApiError::not_found("QueueNotFound", "The specified queue does not exist."))
    }

    fn remove_queue(&self, account_name: &str, name: &str) -> Result<(), ApiError> {
        self.lock()
            .queues
            .remove(&key(account_name, name))
            .map(|_| ())
            .ok_or_else(|| ApiError::not_found("QueueNotFound", "The specified queue does not exist."))
    }

    fn create_share(
        &self,
        account_name: &str,
        name: &str,
        quota_gb: u32,
        metadata: MetaData,
        honour_pending_delete: bool,
    ) -> Result<(), ApiError> {
        let mut state = self.lock();
        state.count_create(ResourceKind::Share);
        let k = key(account_name, name);

        if honour_pending_delete && state.delete_in_progress(ResourceKind::Share, &k) {
            return Err(ApiError::conflict(
                "ShareBeingDeleted",
                "The specified share is being deleted. Try operation later.",
            ));
        }
        if state.shares.contains_key(&k) {
            return Err(ApiError::conflict("ShareAlreadyExists", "The specified share already exists."));
        }

        state.shares.insert(
            k,
            ShareProperties {
                metadata,
                quota_gb,
                acls: Vec::new(),
            },
        );
        Ok(())
    }

    fn with_share<T>(
        &self,
        account_name: &str,
        name: &str,
        f: impl FnOnce(&mut ShareProperties) -> T,
    ) -> Result<T, ApiError> {
        let mut state = self.lock();
        state
            .shares
            .get_mut(&key(account_name, name))
            .map(f)
            .ok_or_else(|| ApiError::not_found("ShareNotFound", "The specified share does not exist."))
    }

    fn remove_share(&self, account_name: &str, name: &str, with_snapshots: bool) -> Result<(), ApiError> {
        let mut state = self.lock();
        let k = key(account_name, name);
        state
            .shares
            .remove(&k)
            .ok_or_else(|| ApiError::not_found("ShareNotFound", "The specified share does not exist."))?;
        if with_snapshots {
            state.deleted_snapshots.push(k);
        }
        Ok(())
    }

    fn create_table(&self, account_name: &str, name: &str) -> Result<(), ApiError> {
        let mut state = self.lock();
        state.count_create(ResourceKind::Table);
        let k = key(account_name, name);
        if state.tables.contains_key(&k) {
            return Err(ApiError::conflict("TableAlreadyExists", "The table specified already exists."));
        }
        state.tables.insert(k, Vec::new());
        Ok(())
    }

    fn with_table<T>(
        &self,
        account_name: &str,
        name: &str,
        f: impl FnOnce(&mut Vec<SignedIdentifier>) -> T,
    ) -> Result<T, ApiError> {
        let mut state = self.lock();
        state
            .tables
            .get_mut(&key(account_name, name))
            .map(f)
            .ok_or_else(|| ApiError::not_found("TableNotFound", "The table specified does not exist."))
    }

    fn remove_table(&self, account_name: &str, name: &str) -> Result<(), ApiError> {
        self.lock()
            .tables
            .remove(&key(account_name, name))
            .map(|_| ())
            .ok_or_else(|| ApiError::not_found("TableNotFound", "The table specified does not exist."))
    }
}

// The resource manager reports empty collections and false flags as null
// and writes metadata as nullable values; these helpers play that part.

fn nullable_metadata(metadata: &MetaData) -> Option<arm::NullableMetaData> {
    if metadata.is_empty() {
        return None;
    }
    Some(
        metadata
            .iter()
            .map(|(k, v)| {
                let value = if v.is_empty() { None } else { Some(v.clone()) };
                (k.clone(), value)
            })
            .collect(),
    )
}

fn plain_metadata(metadata: arm::NullableMetaData) -> MetaData {
    metadata
        .into_iter()
        .map(|(k, v)| (k, v.unwrap_or_default()))
        .collect()
}

fn null_if_false(flag: bool) -> Option<bool> {
    flag.then_some(true)
}

fn wire_acls(acls: &[SignedIdentifier]) -> Option<Vec<arm::SignedIdentifier>> {
    if acls.is_empty() {
        return None;
    }
    Some(
        acls.iter()
            .map(|acl| arm::SignedIdentifier {
                id: Some(acl.id.clone()),
                access_policy: Some(arm::AccessPolicy {
                    start_time: Some(acl.access_policy.start.clone()),
                    expiry_time: Some(acl.access_policy.expiry.clone()),
                    permission: Some(acl.access_policy.permission.clone()),
                }),
            })
            .collect(),
    )
}

fn stored_acls(acls: Vec<arm::SignedIdentifier>) -> Vec<SignedIdentifier> {
    acls.into_iter()
        .map(|acl| {
            let policy = acl.access_policy.unwrap_or_default();
            SignedIdentifier {
                id: acl.id.unwrap_or_default(),
                access_policy: AccessPolicy {
                    start: policy.start_time.unwrap_or_default(),
                    expiry: policy.expiry_time.unwrap_or_default(),
                    permission: policy.permission.unwrap_or_default(),
                },
            }
        })
        .collect()
}

fn wire_access(level: AccessLevel) -> Option<arm::PublicAccess> {
    match level {
        AccessLevel::Private => None,
        AccessLevel::Blob => Some(arm::PublicAccess::Blob),
        AccessLevel::Container => Some(arm::PublicAccess::Container),
    }
}

fn stored_access(access: Option<arm::PublicAccess>) -> AccessLevel {
    match access {
        Some(arm::PublicAccess::Blob) => AccessLevel::Blob,
        Some(arm::PublicAccess::Container) => AccessLevel::Container,
        _ => AccessLevel::Private,
    }
}

#[async_trait]
impl ContainerDataPlaneClient for FakeStorageAccount {
    async fn create(
        &self,
        account_name: &str,
        container_name: &str,
        input: &ContainerCreateInput,
    ) -> Result<(), ApiError> {
        self.answer_create_later().await;
        self.create_container(
            account_name,
            container_name,
            input.access_level,
            input.metadata.clone(),
            true,
        )
    }

    async fn delete(&self, account_name: &str, container_name: &str) -> Result<(), ApiError> {
        self.remove_container(account_name, container_name)
    }

    async fn get_properties(
        &self,
        account_name: &str,
        container_name: &str,
    ) -> Result<ContainerProperties, ApiError> {
        self.with_container(account_name, container_name, |props| props.clone())
    }

    async fn set_access_level(
        &self,
        account_name: &str,
        container_name: &str,
        level: AccessLevel,
    ) -> Result<(), ApiError> {
        self.with_container(account_name, container_name, |props| props.access_level = level)
    }

    async fn set_metadata(
        &self,
        account_name: &str,
        container_name: &str,
        metadata: &MetaData,
    ) -> Result<(), ApiError> {
        self.with_container(account_name, container_name, |props| {
            props.metadata = metadata.clone()
        })
    }
}

#[async_trait]
impl ContainerResourceManagerClient for FakeStorageAccount {
    async fn create(
        &self,
        _resource_group: &str,
        account_name: &str,
        container_name: &str,
        container: arm::BlobContainer,
    ) -> Result<arm::BlobContainer, ApiError> {
        let props = container.properties.clone().unwrap_or_default();
        self.create_container(
            account_name,
            container_name,
            stored_access(props.public_access),
            props.metadata.map(plain_metadata).unwrap_or_default(),
            false,
        )?;
        Ok(container)
    }

    async fn delete(
        &self,
        _resource_group: &str,
        account_name: &str,
        container_name: &str,
    ) -> Result<(), ApiError> {
        // the resource manager answers 204 for a container that is not there
        let _ = self.remove_container(account_name, container_name);
        Ok(())
    }

    async fn get(
        &self,
        _resource_group: &str,
        account_name: &str,
        container_name: &str,
    ) -> Result<arm::BlobContainer, ApiError> {
        let props = self.with_container(account_name, container_name, |props| props.clone())?;
        Ok(arm::BlobContainer {
            id: None,
            name: Some(container_name.to_string()),
            properties: Some(arm::ContainerProperties {
                public_access: wire_access(props.access_level),
                metadata: nullable_metadata(&props.metadata),
                has_legal_hold: null_if_false(props.has_legal_hold),
                has_immutability_policy: null_if_false(props.has_immutability_policy),
            }),
        })
    }

    async fn update(
        &self,
        _resource_group: &str,
        account_name: &str,
        container_name: &str,
        container: arm::BlobContainer,
    ) -> Result<arm::BlobContainer, ApiError> {
        let patch = container.properties.clone().unwrap_or_default();
        self.with_container(account_name, container_name, |props| {
            if let Some(access) = patch.public_access {
                props.access_level = stored_access(Some(access));
            }
            if let Some(metadata) = patch.metadata {
                props.metadata = plain_metadata(metadata);
            }
        })?;
        Ok(container)
    }
}

#[async_trait]
impl QueueDataPlaneClient for FakeStorageAccount {
    async fn create(&self, account_name: &str, queue_name: &str, metadata: &MetaData) -> Result<(), ApiError> {
        self.create_queue(account_name, queue_name, metadata.clone())
    }

    async fn delete(&self, account_name: &str, queue_name: &str) -> Result<(), ApiError> {
        self.remove_queue(account_name, queue_name)
    }

    async fn get_metadata(&self, account_name: &str, queue_name: &str) -> Result<MetaData, ApiError> {
        self.with_queue(account_name, queue_name, |metadata| metadata.clone())
    }

    async fn set_metadata(
        &self,
        account_name: &str,
        queue_name: &str,
        metadata: &MetaData,
    ) -> Result<(), ApiError> {
        self.with_queue(account_name, queue_name, |stored| *stored = metadata.clone())
    }

    async fn get_service_properties(&self, account_name: &str) -> Result<QueueServiceProperties, ApiError> {
        Ok(self
            .lock()
            .queue_services
            .get(account_name)
            .cloned()
            .unwrap_or_default())
    }

    async fn set_service_properties(
        &self,
        account_name: &str,
        properties: &QueueServiceProperties,
    ) -> Result<(), ApiError> {
        self.lock()
            .queue_services
            .insert(account_name.to_string(), properties.clone());
        Ok(())
    }
}

#[async_trait]
impl QueueResourceManagerClient for FakeStorageAccount {
    async fn create(
        &self,
        _resource_group: &str,
        account_name: &str,
        queue_name: &str,
        queue: arm::StorageQueue,
    ) -> Result<arm::StorageQueue, ApiError> {
        let metadata = queue
            .properties
            .clone()
            .and_then(|p| p.metadata)
            .map(plain_metadata)
            .unwrap_or_default();
        self.create_queue(account_name, queue_name, metadata)?;
        Ok(queue)
    }

    async fn delete(&self, _resource_group: &str, account_name: &str, queue_name: &str) -> Result<(), ApiError> {
        self.remove_queue(account_name, queue_name)
    }

    async fn get(
        &self,
        _resource_group: &str,
        account_name: &str,
        queue_name: &str,
    ) -> Result<arm::StorageQueue, ApiError> {
        let metadata = self.with_queue(account_name, queue_name, |metadata| metadata.clone())?;
        Ok(arm::StorageQueue {
            id: None,
            name: Some(queue_name.to_string()),
            properties: Some(arm::QueueProperties {
                metadata: nullable_metadata(&metadata),
                approximate_message_count: Some(0),
            }),
        })
    }

    async fn update(
        &self,
        _resource_group: &str,
        account_name: &str,
        queue_name: &str,
        queue: arm::StorageQueue,
    ) -> Result<arm::StorageQueue, ApiError> {
        let patch = queue.properties.clone().and_then(|p| p.metadata);
        self.with_queue(account_name, queue_name, |stored| {
            if let Some(metadata) = patch {
                *stored = plain_metadata(metadata);
            }
        })?;
        Ok(queue)
    }

    async fn get_service_properties(
        &self,
        _resource_group: &str,
        account_name: &str,
    ) -> Result<arm::QueueServiceProperties, ApiError> {
        let service = self
            .lock()
            .queue_services
            .get(account_name)
            .cloned()
            .unwrap_or_default();

        let rules: Vec<arm::CorsRule> = service
            .cors
            .iter()
            .map(|rule| arm::CorsRule {
                allowed_origins: Some(rule.allowed_origins.clone()),
                allowed_methods: Some(rule.allowed_methods.clone()),
                allowed_headers: Some(rule.allowed_headers.clone()),
                exposed_headers: Some(rule.exposed_headers.clone()),
                max_age_in_seconds: Some(rule.max_age_in_seconds as i32),
            })
            .collect();

        Ok(arm::QueueServiceProperties {
            properties: Some(arm::QueueServicePropertiesInner {
                cors: Some(arm::CorsRules {
                    cors_rules: (!rules.is_empty()).then_some(rules),
                }),
            }),
        })
    }

    async fn set_service_properties(
        &self,
        _resource_group: &str,
        account_name: &str,
        properties: arm::QueueServiceProperties,
    ) -> Result<arm::QueueServiceProperties, ApiError> {
        let rules = properties
            .properties
            .clone()
            .and_then(|p| p.cors)
            .and_then(|c| c.cors_rules)
            .unwrap_or_default();

        let mut state = self.lock();
        let service = state
            .queue_services
            .entry(account_name.to_string())
            .or_default();
        service.cors = rules
            .into_iter()
            .map(|rule| storage_shim::queue::CorsRule {
                allowed_origins: rule.allowed_origins.unwrap_or_default(),
                allowed_methods: rule.allowed_methods.unwrap_or_default(),
                allowed_headers: rule.allowed_headers.unwrap_or_default(),
                exposed_headers: rule.exposed_headers.unwrap_or_default(),
                max_age_in_seconds: rule.max_age_in_seconds.unwrap_or_default() as u32,
            })
            .collect();
        Ok(properties)
    }
}

#[async_trait]
impl ShareDataPlaneClient for FakeStorageAccount {
    async fn create(&self, account_name: &str, share_name: &str, input: &ShareCreateInput) -> Result<(), ApiError> {
        self.answer_create_later().await;
        self.create_share(account_name, share_name, input.quota_gb, input.metadata.clone(), true)
    }

    async fn delete(&self, account_name: &str, share_name: &str, delete_snapshots: bool) -> Result<(), ApiError> {
        self.remove_share(account_name, share_name, delete_snapshots)
    }

    async fn get_properties(
        &self,
        account_name: &str,
        share_name: &str,
    ) -> Result<ShareQuotaAndMetaData, ApiError> {
        self.with_share(account_name, share_name, |props| ShareQuotaAndMetaData {
            quota_gb: props.quota_gb,
            metadata: props.metadata.clone(),
        })
    }

    async fn get_acls(&self, account_name: &str, share_name: &str) -> Result<Vec<SignedIdentifier>, ApiError> {
        self.with_share(account_name, share_name, |props| props.acls.clone())
    }

    async fn set_metadata(&self, account_name: &str, share_name: &str, metadata: &MetaData) -> Result<(), ApiError> {
        self.with_share(account_name, share_name, |props| props.metadata = metadata.clone())
    }

    async fn set_quota(&self, account_name: &str, share_name: &str, quota_gb: u32) -> Result<(), ApiError> {
        self.with_share(account_name, share_name, |props| props.quota_gb = quota_gb)
    }

    async fn set_acls(
        &self,
        account_name: &str,
        share_name: &str,
        acls: &[SignedIdentifier],
    ) -> Result<(), ApiError> {
        self.with_share(account_name, share_name, |props| props.acls = acls.to_vec())
    }
}

#[async_trait]
impl ShareResourceManagerClient for FakeStorageAccount {
    async fn create(
        &self,
        _resource_group: &str,
        account_name: &str,
        share_name: &str,
        share: arm::FileShare,
    ) -> Result<arm::FileShare, ApiError> {
        let props = share.properties.clone().unwrap_or_default();
        self.create_share(
            account_name,
            share_name,
            props.share_quota.unwrap_or_default() as u32,
            props.metadata.map(plain_metadata).unwrap_or_default(),
            false,
        )?;
        Ok(share)
    }

    async fn delete(
        &self,
        _resource_group: &str,
        account_name: &str,
        share_name: &str,
        include_snapshots: bool,
    ) -> Result<(), ApiError> {
        self.remove_share(account_name, share_name, include_snapshots)
    }

    async fn get(
        &self,
        _resource_group: &str,
        account_name: &str,
        share_name: &str,
    ) -> Result<arm::FileShare, ApiError> {
        let props = self.with_share(account_name, share_name, |props| props.clone())?;
        Ok(arm::FileShare {
            id: None,
            name: Some(share_name.to_string()),
            properties: Some(arm::FileShareProperties {
                metadata: nullable_metadata(&props.metadata),
                share_quota: Some(props.quota_gb as i32),
                signed_identifiers: wire_acls(&props.acls),
            }),
        })
    }

    async fn update(
        &self,
        _resource_group: &str,
        account_name: &str,
        share_name: &str,
        share: arm::FileShare,
    ) -> Result<arm::FileShare, ApiError> {
        let patch = share.properties.clone().unwrap_or_default();
        self.with_share(account_name, share_name, |props| {
            if let Some(metadata) = patch.metadata {
                props.metadata = plain_metadata(metadata);
            }
            if let Some(quota) = patch.share_quota {
                props.quota_gb = quota as u32;
            }
            if let Some(acls) = patch.signed_identifiers {
                props.acls = stored_acls(acls);
            }
        })?;
        Ok(share)
    }
}

#[async_trait]
impl TableDataPlaneClient for FakeStorageAccount {
    async fn create(&self, account_name: &str, table_name: &str) -> Result<(), ApiError> {
        self.create_table(account_name, table_name)
    }

    async fn delete(&self, account_name: &str, table_name: &str) -> Result<(), ApiError> {
        self.remove_table(account_name, table_name)
    }

    async fn exists(&self, account_name: &str, table_name: &str) -> Result<bool, ApiError> {
        Ok(self.lock().tables.contains_key(&key(account_name, table_name)))
    }

    async fn get_acls(&self, account_name: &str, table_name: &str) -> Result<Vec<SignedIdentifier>, ApiError> {
        self.with_table(account_name, table_name, |acls| acls.clone())
    }

    async fn set_acls(
        &self,
        account_name: &str,
        table_name: &str,
        acls: &[SignedIdentifier],
    ) -> Result<(), ApiError> {
        self.with_table(account_name, table_name, |stored| *stored = acls.to_vec())
    }
}

#[async_trait]
impl TableResourceManagerClient for FakeStorageAccount {
    async fn create(
        &self,
        _resource_group: &str,
        account_name: &str,
        table_name: &str,
        table: arm::Table,
    ) -> Result<arm::Table, ApiError> {
        self.create_table(account_name, table_name)?;
        Ok(table)
    }

    async fn delete(&self, _resource_group: &str, account_name: &str, table_name: &str) -> Result<(), ApiError> {
        self.remove_table(account_name, table_name)
    }

    async fn get(
        &self,
        _resource_group: &str,
        account_name: &str,
        table_name: &str,
    ) -> Result<arm::Table, ApiError> {
        let acls = self.with_table(account_name, table_name, |acls| acls.clone())?;
        Ok(arm::Table {
            id: None,
            name: Some(table_name.to_string()),
            properties: Some(arm::TableProperties {
                table_name: Some(table_name.to_string()),
                signed_identifiers: wire_acls(&acls),
            }),
        })
    }

    async fn update(
        &self,
        _resource_group: &str,
        account_name: &str,
        table_name: &str,
        table: arm::Table,
    ) -> Result<arm::Table, ApiError> {
        let patch = table.properties.clone().and_then(|p| p.signed_identifiers);
        self.with_table(account_name, table_name, |stored| {
            if let Some(acls) = patch {
                *stored = stored_acls(acls);
            }
        })?;
        Ok(table)
    }
}
