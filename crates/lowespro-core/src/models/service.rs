//! Service model and payloads.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::{ValidationError, Validator};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    /// Optional shallow hierarchy; flat in the common case.
    pub parent_id: Option<String>,
    /// Number of vendors whose service list contains this name.
    #[serde(default)]
    pub vendor_count: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NewService {
    pub name: String,
    pub description: Option<String>,
    pub parent_id: Option<String>,
}

impl NewService {
    pub fn validate(&self) -> Result<(), ValidationError> {
        let mut v = Validator::new();
        v.require("name", &self.name);
        v.finish()
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ServicePatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub parent_id: Option<String>,
}

impl ServicePatch {
    pub fn validate(&self) -> Result<(), ValidationError> {
        let mut v = Validator::new();
        v.require_if_present("name", self.name.as_deref());
        v.finish()
    }

    pub fn apply(self, service: &mut Service) {
        if let Some(v) = self.name {
            service.name = v;
        }
        if let Some(v) = self.description {
            service.description = Some(v);
        }
        if let Some(v) = self.parent_id {
            service.parent_id = Some(v);
        }
    }
}
