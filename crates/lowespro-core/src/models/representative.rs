//! Sales representative model and payloads.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::{ValidationError, Validator};
use crate::models::contact::{EmailContact, PhoneContact};

/// A vendor's sales representative. Belongs to one vendor, or none.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Representative {
    pub id: String,
    pub name: String,
    pub position: Option<String>,
    pub vendor_id: Option<String>,
    /// Snapshot of the vendor's company name taken at creation (or when
    /// vendorId changes). Not kept in sync with later vendor renames.
    pub vendor_name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub phone_contacts: Vec<PhoneContact>,
    pub email_contacts: Vec<EmailContact>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Insert payload. `vendorName` is never accepted from the client;
/// the server snapshots it from the referenced vendor.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NewRepresentative {
    pub name: String,
    pub position: Option<String>,
    pub vendor_id: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub phone_contacts: Vec<PhoneContact>,
    pub email_contacts: Vec<EmailContact>,
}

impl NewRepresentative {
    pub fn validate(&self) -> Result<(), ValidationError> {
        let mut v = Validator::new();
        v.require("name", &self.name);
        v.finish()
    }
}

/// Partial update payload. Supplying `vendorId` re-snapshots `vendorName`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RepresentativePatch {
    pub name: Option<String>,
    pub position: Option<String>,
    pub vendor_id: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub phone_contacts: Option<Vec<PhoneContact>>,
    pub email_contacts: Option<Vec<EmailContact>>,
}

impl RepresentativePatch {
    pub fn validate(&self) -> Result<(), ValidationError> {
        let mut v = Validator::new();
        v.require_if_present("name", self.name.as_deref());
        v.finish()
    }

    /// Merge the supplied fields over an existing row. The caller is
    /// responsible for re-snapshotting `vendor_name` when `vendor_id`
    /// was supplied.
    pub fn apply(self, rep: &mut Representative) {
        if let Some(v) = self.name {
            rep.name = v;
        }
        if let Some(v) = self.position {
            rep.position = Some(v);
        }
        if let Some(v) = self.vendor_id {
            rep.vendor_id = Some(v);
        }
        if let Some(v) = self.phone {
            rep.phone = Some(v);
        }
        if let Some(v) = self.email {
            rep.email = Some(v);
        }
        if let Some(v) = self.phone_contacts {
            rep.phone_contacts = v;
        }
        if let Some(v) = self.email_contacts {
            rep.email_contacts = v;
        }
    }
}
