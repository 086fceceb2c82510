//! Category model and payloads.
//!
//! Categories form a tree via `parentId`. Depth is conventionally three
//! levels but not enforced by a constraint. `vendorCount` is recomputed
//! on read, never stored.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::{ValidationError, Validator};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub parent_id: Option<String>,
    /// Tree depth as text, defaulted to "1" (original schema quirk, kept).
    pub level: String,
    /// Number of vendors whose category list contains this name.
    #[serde(default)]
    pub vendor_count: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NewCategory {
    pub name: String,
    pub description: Option<String>,
    pub parent_id: Option<String>,
    pub level: Option<String>,
}

impl NewCategory {
    pub fn validate(&self) -> Result<(), ValidationError> {
        let mut v = Validator::new();
        v.require("name", &self.name);
        v.finish()
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CategoryPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub parent_id: Option<String>,
    pub level: Option<String>,
}

impl CategoryPatch {
    pub fn validate(&self) -> Result<(), ValidationError> {
        let mut v = Validator::new();
        v.require_if_present("name", self.name.as_deref());
        v.finish()
    }

    pub fn apply(self, category: &mut Category) {
        if let Some(v) = self.name {
            category.name = v;
        }
        if let Some(v) = self.description {
            category.description = Some(v);
        }
        if let Some(v) = self.parent_id {
            category.parent_id = Some(v);
        }
        if let Some(v) = self.level {
            category.level = v;
        }
    }
}
