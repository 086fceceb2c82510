//! Structured phone/email contact entries.
//!
//! Stored as JSON list columns; insertion order is preserved and the
//! server does not deduplicate (callers deduplicate client-side).

use serde::{Deserialize, Serialize};

/// One entry in a phone contact list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhoneContact {
    /// Display label, e.g. "Office" or "Mobile".
    #[serde(default)]
    pub label: String,
    pub number: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extension: Option<String>,
}

/// One entry in an email contact list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmailContact {
    #[serde(default)]
    pub label: String,
    pub address: String,
}
