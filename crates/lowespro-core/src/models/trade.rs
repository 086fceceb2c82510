//! Trade model and payloads.
//!
//! Trades are create-only in steady state: users add new ones ad hoc by
//! typing a custom value. Names are unique, enforced by the database.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::{ValidationError, Validator};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trade {
    pub id: String,
    pub name: String,
    /// Set for the trades seeded at first migration.
    pub is_default: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NewTrade {
    pub name: String,
    pub is_default: bool,
}

impl NewTrade {
    pub fn validate(&self) -> Result<(), ValidationError> {
        let mut v = Validator::new();
        v.require("name", &self.name);
        v.finish()
    }
}
