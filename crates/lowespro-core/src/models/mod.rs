//! Domain models and inbound payload types.
//!
//! Each resource module defines three shapes: the full row struct
//! (serialized with the camelCase wire names the original API used),
//! a `New*` insert payload (server-assigned fields excluded), and a
//! `*Patch` partial payload where every field is optional and absent
//! means "leave unchanged".

pub mod brand;
pub mod category;
pub mod contact;
pub mod pro_customer;
pub mod representative;
pub mod service;
pub mod trade;
pub mod vendor;

pub use brand::{Brand, BrandPatch, NewBrand};
pub use category::{Category, CategoryPatch, NewCategory};
pub use contact::{EmailContact, PhoneContact};
pub use pro_customer::{NewProCustomer, ProCustomer, ProCustomerPatch};
pub use representative::{NewRepresentative, Representative, RepresentativePatch};
pub use service::{NewService, Service, ServicePatch};
pub use trade::{NewTrade, Trade};
pub use vendor::{NewVendor, Vendor, VendorPatch};
