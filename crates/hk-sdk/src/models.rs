//! Housekeeping API payloads.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Every request and response body is wrapped in `{"data": ...}`.
#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct Envelope<T> {
    pub data: T,
}

/// A realm as reported by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Realm {
    pub realm_name: String,
    pub jwt_public_key_pem: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub replication_class: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub replication_factor: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub datacenter_replication_factors: Option<HashMap<String, u32>>,
}

/// Realm creation request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewRealm {
    pub realm_name: String,
    pub jwt_public_key_pem: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub replication_factor: Option<u32>,
}
