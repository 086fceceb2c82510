//! Vendor model and payloads.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::{ValidationError, Validator};
use crate::models::contact::{EmailContact, PhoneContact};

/// A construction-material vendor.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vendor {
    pub id: String,
    /// Server-assigned, unique, never reassigned (`V#00001` style).
    pub vendor_number: String,
    pub company_name: String,
    pub phone: Option<String>,
    pub fax: Option<String>,
    pub email: Option<String>,
    pub website: Option<String>,
    pub address: Option<String>,
    pub notes: Option<String>,
    /// Category names, insertion order preserved.
    pub categories: Vec<String>,
    /// Brand ids, insertion order preserved.
    pub brands: Vec<String>,
    /// Service names, insertion order preserved.
    pub services: Vec<String>,
    pub phone_contacts: Vec<PhoneContact>,
    pub email_contacts: Vec<EmailContact>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Insert payload: excludes id, vendorNumber, and timestamps.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NewVendor {
    pub company_name: String,
    pub phone: Option<String>,
    pub fax: Option<String>,
    pub email: Option<String>,
    pub website: Option<String>,
    pub address: Option<String>,
    pub notes: Option<String>,
    pub categories: Vec<String>,
    pub brands: Vec<String>,
    pub services: Vec<String>,
    pub phone_contacts: Vec<PhoneContact>,
    pub email_contacts: Vec<EmailContact>,
}

impl NewVendor {
    pub fn validate(&self) -> Result<(), ValidationError> {
        let mut v = Validator::new();
        v.require("companyName", &self.company_name);
        v.finish()
    }
}

/// Partial update payload: absent fields are left unchanged.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VendorPatch {
    pub company_name: Option<String>,
    pub phone: Option<String>,
    pub fax: Option<String>,
    pub email: Option<String>,
    pub website: Option<String>,
    pub address: Option<String>,
    pub notes: Option<String>,
    pub categories: Option<Vec<String>>,
    pub brands: Option<Vec<String>>,
    pub services: Option<Vec<String>>,
    pub phone_contacts: Option<Vec<PhoneContact>>,
    pub email_contacts: Option<Vec<EmailContact>>,
}

impl VendorPatch {
    pub fn validate(&self) -> Result<(), ValidationError> {
        let mut v = Validator::new();
        v.require_if_present("companyName", self.company_name.as_deref());
        v.finish()
    }

    /// Merge the supplied fields over an existing row.
    pub fn apply(self, vendor: &mut Vendor) {
        if let Some(v) = self.company_name {
            vendor.company_name = v;
        }
        if let Some(v) = self.phone {
            vendor.phone = Some(v);
        }
        if let Some(v) = self.fax {
            vendor.fax = Some(v);
        }
        if let Some(v) = self.email {
            vendor.email = Some(v);
        }
        if let Some(v) = self.website {
            vendor.website = Some(v);
        }
        if let Some(v) = self.address {
            vendor.address = Some(v);
        }
        if let Some(v) = self.notes {
            vendor.notes = Some(v);
        }
        if let Some(v) = self.categories {
            vendor.categories = v;
        }
        if let Some(v) = self.brands {
            vendor.brands = v;
        }
        if let Some(v) = self.services {
            vendor.services = v;
        }
        if let Some(v) = self.phone_contacts {
            vendor.phone_contacts = v;
        }
        if let Some(v) = self.email_contacts {
            vendor.email_contacts = v;
        }
    }
}
