//! Translation between canonical values and resource manager wire models
//!
//! Reads never fail: nulls become empty collections, empty strings, `0`
//! or `false`, and unknown access levels fold to the most restrictive
//! level. Writes box every value into the nullable form and fail on
//! numbers the wire format cannot hold.

use crate::container::models::ContainerProperties;
use crate::error::ValueOutOfRange;
use crate::models::{AccessLevel, AccessPolicy, MetaData, SignedIdentifier};
use crate::queue::models::{CorsRule, QueueProperties, QueueServiceProperties};
use crate::resource_manager::models as arm;
use crate::share::models::ShareProperties;
use crate::table::models::TableProperties;

pub fn access_level_to_arm(level: AccessLevel) -> arm::PublicAccess {
    match level {
        AccessLevel::Private => arm::PublicAccess::None,
        AccessLevel::Blob => arm::PublicAccess::Blob,
        AccessLevel::Container => arm::PublicAccess::Container,
    }
}

pub fn access_level_from_arm(access: Option<arm::PublicAccess>) -> AccessLevel {
    match access {
        Some(arm::PublicAccess::Blob) => AccessLevel::Blob,
        Some(arm::PublicAccess::Container) => AccessLevel::Container,
        Some(arm::PublicAccess::None) | Some(arm::PublicAccess::Unknown) | None => {
            AccessLevel::Private
        }
    }
}

pub fn metadata_to_arm(metadata: &MetaData) -> arm::NullableMetaData {
    metadata
        .iter()
        .map(|(key, value)| (key.clone(), Some(value.clone())))
        .collect()
}

/// A null value keeps its key with an empty string
pub fn metadata_from_arm(metadata: Option<arm::NullableMetaData>) -> MetaData {
    metadata
        .unwrap_or_default()
        .into_iter()
        .map(|(key, value)| (key, value.unwrap_or_default()))
        .collect()
}

pub fn flag_from_arm(flag: Option<bool>) -> bool {
    flag.unwrap_or(false)
}

fn to_wire_int(field: &'static str, value: u32) -> Result<i32, ValueOutOfRange> {
    i32::try_from(value).map_err(|_| ValueOutOfRange { field, value })
}

pub fn quota_to_arm(quota_gb: u32) -> Result<i32, ValueOutOfRange> {
    to_wire_int("share quota", quota_gb)
}

pub fn quota_from_arm(quota: Option<i32>) -> u32 {
    quota
        .and_then(|q| u32::try_from(q).ok())
        .unwrap_or_default()
}

pub fn acls_to_arm(acls: &[SignedIdentifier]) -> Vec<arm::SignedIdentifier> {
    acls.iter()
        .map(|acl| arm::SignedIdentifier {
            id: Some(acl.id.clone()),
            access_policy: Some(arm::AccessPolicy {
                start_time: Some(acl.access_policy.start.clone()),
                expiry_time: Some(acl.access_policy.expiry.clone()),
                permission: Some(acl.access_policy.permission.clone()),
            }),
        })
        .collect()
}

pub fn acls_from_arm(acls: Option<Vec<arm::SignedIdentifier>>) -> Vec<SignedIdentifier> {
    acls.unwrap_or_default()
        .into_iter()
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

pub fn container_from_arm(container: arm::BlobContainer) -> ContainerProperties {
    let props = container.properties.unwrap_or_default();
    ContainerProperties {
        access_level: access_level_from_arm(props.public_access),
        metadata: metadata_from_arm(props.metadata),
        has_legal_hold: flag_from_arm(props.has_legal_hold),
        has_immutability_policy: flag_from_arm(props.has_immutability_policy),
    }
}

pub fn queue_from_arm(queue: arm::StorageQueue) -> QueueProperties {
    let props = queue.properties.unwrap_or_default();
    QueueProperties {
        metadata: metadata_from_arm(props.metadata),
    }
}

pub fn share_from_arm(share: arm::FileShare) -> ShareProperties {
    let props = share.properties.unwrap_or_default();
    ShareProperties {
        metadata: metadata_from_arm(props.metadata),
        quota_gb: quota_from_arm(props.share_quota),
        acls: acls_from_arm(props.signed_identifiers),
    }
}

pub fn table_from_arm(table: arm::Table) -> TableProperties {
    let props = table.properties.unwrap_or_default();
    TableProperties {
        acls: acls_from_arm(props.signed_identifiers),
    }
}

pub fn cors_rules_to_arm(rules: &[CorsRule]) -> Result<Vec<arm::CorsRule>, ValueOutOfRange> {
    rules
        .iter()
        .map(|rule| {
            Ok(arm::CorsRule {
                allowed_origins: Some(rule.allowed_origins.clone()),
                allowed_methods: Some(rule.allowed_methods.clone()),
                allowed_headers: Some(rule.allowed_headers.clone()),
                exposed_headers: Some(rule.exposed_headers.clone()),
                max_age_in_seconds: Some(to_wire_int("CORS max age", rule.max_age_in_seconds)?),
            })
        })
        .collect()
}

pub fn cors_rules_from_arm(rules: Option<Vec<arm::CorsRule>>) -> Vec<CorsRule> {
    rules
        .unwrap_or_default()
        .into_iter()
        .map(|rule| CorsRule {
            allowed_origins: rule.allowed_origins.unwrap_or_default(),
            allowed_methods: rule.allowed_methods.unwrap_or_default(),
            allowed_headers: rule.allowed_headers.unwrap_or_default(),
            exposed_headers: rule.exposed_headers.unwrap_or_default(),
            max_age_in_seconds: rule
                .max_age_in_seconds
                .and_then(|age| u32::try_from(age).ok())
                .unwrap_or_default(),
        })
        .collect()
}

/// Logging and metrics have no resource manager representation and are
/// reported as absent.
pub fn queue_service_from_arm(service: arm::QueueServiceProperties) -> QueueServiceProperties {
    let cors = service
        .properties
        .and_then(|props| props.cors)
        .and_then(|cors| cors.cors_rules);

    QueueServiceProperties {
        logging: None,
        hour_metrics: None,
        minute_metrics: None,
        cors: cors_rules_from_arm(cors),
    }
}

pub fn queue_service_to_arm(
    service: &QueueServiceProperties,
) -> Result<arm::QueueServiceProperties, ValueOutOfRange> {
    Ok(arm::QueueServiceProperties {
        properties: Some(arm::QueueServicePropertiesInner {
            cors: Some(arm::CorsRules {
                cors_rules: Some(cors_rules_to_arm(&service.cors)?),
            }),
        }),
    })
}
