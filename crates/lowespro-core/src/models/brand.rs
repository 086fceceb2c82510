//! Brand model and payloads.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::{ValidationError, Validator};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Brand {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub is_generic: bool,
    pub industry: Option<String>,
    pub logo: Option<String>,
    pub website: Option<String>,
    /// Links to a brand template defining category hierarchies.
    pub template_id: Option<String>,
    pub parent_brand_id: Option<String>,
    /// Number of vendors whose brand list contains this id.
    #[serde(default)]
    pub vendor_count: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NewBrand {
    pub name: String,
    pub description: Option<String>,
    pub is_generic: bool,
    pub industry: Option<String>,
    pub logo: Option<String>,
    pub website: Option<String>,
    pub template_id: Option<String>,
    pub parent_brand_id: Option<String>,
}

impl NewBrand {
    pub fn validate(&self) -> Result<(), ValidationError> {
        let mut v = Validator::new();
        v.require("name", &self.name);
        v.finish()
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BrandPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub is_generic: Option<bool>,
    pub industry: Option<String>,
    pub logo: Option<String>,
    pub website: Option<String>,
    pub template_id: Option<String>,
    pub parent_brand_id: Option<String>,
}

impl BrandPatch {
    pub fn validate(&self) -> Result<(), ValidationError> {
        let mut v = Validator::new();
        v.require_if_present("name", self.name.as_deref());
        v.finish()
    }

    pub fn apply(self, brand: &mut Brand) {
        if let Some(v) = self.name {
            brand.name = v;
        }
        if let Some(v) = self.description {
            brand.description = Some(v);
        }
        if let Some(v) = self.is_generic {
            brand.is_generic = v;
        }
        if let Some(v) = self.industry {
            brand.industry = Some(v);
        }
        if let Some(v) = self.logo {
            brand.logo = Some(v);
        }
        if let Some(v) = self.website {
            brand.website = Some(v);
        }
        if let Some(v) = self.template_id {
            brand.template_id = Some(v);
        }
        if let Some(v) = self.parent_brand_id {
            brand.parent_brand_id = Some(v);
        }
    }
}
