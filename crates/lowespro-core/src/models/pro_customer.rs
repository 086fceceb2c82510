//! Pro customer model and payloads.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::{ValidationError, Validator};
use crate::models::contact::{EmailContact, PhoneContact};

/// A professional customer. Sub-entities for contacts and managed
/// properties live behind their own resources and are not modeled here.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProCustomer {
    pub id: String,
    pub business_name: String,
    pub contact_name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub notes: Option<String>,
    /// Trade names, insertion order preserved.
    pub trades: Vec<String>,
    /// Preferred brand ids, insertion order preserved.
    pub preferred_brands: Vec<String>,
    pub ordering_preferences: Option<String>,
    pub phone_contacts: Vec<PhoneContact>,
    pub email_contacts: Vec<EmailContact>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NewProCustomer {
    pub business_name: String,
    pub contact_name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub notes: Option<String>,
    pub trades: Vec<String>,
    pub preferred_brands: Vec<String>,
    pub ordering_preferences: Option<String>,
    pub phone_contacts: Vec<PhoneContact>,
    pub email_contacts: Vec<EmailContact>,
}

impl NewProCustomer {
    pub fn validate(&self) -> Result<(), ValidationError> {
        let mut v = Validator::new();
        v.require("businessName", &self.business_name);
        v.finish()
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProCustomerPatch {
    pub business_name: Option<String>,
    pub contact_name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub notes: Option<String>,
    pub trades: Option<Vec<String>>,
    pub preferred_brands: Option<Vec<String>>,
    pub ordering_preferences: Option<String>,
    pub phone_contacts: Option<Vec<PhoneContact>>,
    pub email_contacts: Option<Vec<EmailContact>>,
}

impl ProCustomerPatch {
    pub fn validate(&self) -> Result<(), ValidationError> {
        let mut v = Validator::new();
        v.require_if_present("businessName", self.business_name.as_deref());
        v.finish()
    }

    pub fn apply(self, customer: &mut ProCustomer) {
        if let Some(v) = self.business_name {
            customer.business_name = v;
        }
        if let Some(v) = self.contact_name {
            customer.contact_name = Some(v);
        }
        if let Some(v) = self.phone {
            customer.phone = Some(v);
        }
        if let Some(v) = self.email {
            customer.email = Some(v);
        }
        if let Some(v) = self.address {
            customer.address = Some(v);
        }
        if let Some(v) = self.notes {
            customer.notes = Some(v);
        }
        if let Some(v) = self.trades {
            customer.trades = v;
        }
        if let Some(v) = self.preferred_brands {
            customer.preferred_brands = v;
        }
        if let Some(v) = self.ordering_preferences {
            customer.ordering_preferences = Some(v);
        }
        if let Some(v) = self.phone_contacts {
            customer.phone_contacts = v;
        }
        if let Some(v) = self.email_contacts {
            customer.email_contacts = v;
        }
    }
}
