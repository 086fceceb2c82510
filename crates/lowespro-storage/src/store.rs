//! Store — the storage facade the HTTP layer talks to.
//!
//! Owns the connection pool and enforces the cross-row rules that plain
//! queries cannot: vendor-number assignment, reference checks, the
//! category child-delete guard, and representative name snapshots.
//! Writes go through the single writer connection; list and get
//! operations use the read pool.

use std::collections::BTreeMap;
use std::path::Path;

use lowespro_core::models::{
    Brand, BrandPatch, Category, CategoryPatch, NewBrand, NewCategory, NewProCustomer,
    NewRepresentative, NewService, NewTrade, NewVendor, ProCustomer, ProCustomerPatch,
    Representative, RepresentativePatch, Service, ServicePatch, Trade, Vendor, VendorPatch,
};
use lowespro_core::{format_vendor_number, new_id, utc_now, StorageError, StorageResult};
use rusqlite::Connection;
use serde::Serialize;
use tracing::debug;

use crate::migrations;
use crate::pool::ConnectionPool;
use crate::queries::{
    brands, categories, pro_customers, representatives, services, trades, vendors,
};

/// Snapshot returned by the debug endpoint.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DebugInfo {
    pub schema_version: u32,
    pub row_counts: BTreeMap<String, i64>,
}

pub struct Store {
    pool: ConnectionPool,
}

impl Store {
    /// Open a file-backed store and run pending migrations.
    pub fn open(path: &Path, read_pool_size: usize) -> StorageResult<Self> {
        let pool = ConnectionPool::open(path, read_pool_size)?;
        pool.with_writer(|conn| migrations::migrate(conn).map(|_| ()))?;
        Ok(Self { pool })
    }

    /// Open an in-memory store (for testing).
    pub fn open_in_memory() -> StorageResult<Self> {
        let pool = ConnectionPool::open_in_memory()?;
        pool.with_writer(|conn| migrations::migrate(conn).map(|_| ()))?;
        Ok(Self { pool })
    }

    // ---- vendors ----

    /// Create a vendor. The vendor number is claimed from the sequence
    /// counter in the same transaction as the insert, so concurrent
    /// creates can never observe or reuse the same number.
    pub fn create_vendor(&self, new: NewVendor) -> StorageResult<Vendor> {
        self.pool.with_writer(|conn| {
            let tx = conn.unchecked_transaction().map_err(StorageError::sqlite)?;
            let seq = vendors::next_vendor_number(&tx)?;
            let now = utc_now();
            let vendor = Vendor {
                id: new_id(),
                vendor_number: format_vendor_number(seq),
                company_name: new.company_name,
                phone: new.phone,
                fax: new.fax,
                email: new.email,
                website: new.website,
                address: new.address,
                notes: new.notes,
                categories: new.categories,
                brands: new.brands,
                services: new.services,
                phone_contacts: new.phone_contacts,
                email_contacts: new.email_contacts,
                created_at: now,
                updated_at: now,
            };
            vendors::insert_vendor(&tx, &vendor)?;
            tx.commit().map_err(StorageError::sqlite)?;
            debug!(id = %vendor.id, number = %vendor.vendor_number, "vendor created");
            Ok(vendor)
        })
    }

    pub fn list_vendors(&self, search: Option<&str>) -> StorageResult<Vec<Vendor>> {
        self.pool.with_reader(|conn| vendors::list_vendors(conn, search))
    }

    pub fn get_vendor(&self, id: &str) -> StorageResult<Vendor> {
        self.pool
            .with_reader(|conn| vendors::get_vendor(conn, id))?
            .ok_or(StorageError::NotFound { resource: "Vendor" })
    }

    pub fn patch_vendor(&self, id: &str, patch: VendorPatch) -> StorageResult<Vendor> {
        self.pool.with_writer(|conn| {
            let mut vendor = vendors::get_vendor(conn, id)?
                .ok_or(StorageError::NotFound { resource: "Vendor" })?;
            patch.apply(&mut vendor);
            vendor.updated_at = utc_now();
            vendors::update_vendor(conn, &vendor)?;
            Ok(vendor)
        })
    }

    /// Full replacement. Identity fields (id, vendorNumber, createdAt)
    /// are preserved; everything else is taken from the payload.
    pub fn replace_vendor(&self, id: &str, new: NewVendor) -> StorageResult<Vendor> {
        self.pool.with_writer(|conn| {
            let existing = vendors::get_vendor(conn, id)?
                .ok_or(StorageError::NotFound { resource: "Vendor" })?;
            let vendor = Vendor {
                id: existing.id,
                vendor_number: existing.vendor_number,
                company_name: new.company_name,
                phone: new.phone,
                fax: new.fax,
                email: new.email,
                website: new.website,
                address: new.address,
                notes: new.notes,
                categories: new.categories,
                brands: new.brands,
                services: new.services,
                phone_contacts: new.phone_contacts,
                email_contacts: new.email_contacts,
                created_at: existing.created_at,
                updated_at: utc_now(),
            };
            vendors::update_vendor(conn, &vendor)?;
            Ok(vendor)
        })
    }

    pub fn delete_vendor(&self, id: &str) -> StorageResult<Vendor> {
        self.pool.with_writer(|conn| {
            let vendor = vendors::get_vendor(conn, id)?
                .ok_or(StorageError::NotFound { resource: "Vendor" })?;
            vendors::delete_vendor(conn, id)?;
            Ok(vendor)
        })
    }

    pub fn count_vendors(&self) -> StorageResult<i64> {
        self.pool.with_reader(vendors::count_vendors)
    }

    // ---- representatives ----

    /// Look up the company name for a vendor reference, rejecting ids
    /// that do not resolve.
    fn snapshot_vendor_name(
        conn: &Connection,
        vendor_id: Option<&str>,
    ) -> StorageResult<Option<String>> {
        match vendor_id {
            Some(vid) => {
                let vendor = vendors::get_vendor(conn, vid)?.ok_or(
                    StorageError::InvalidReference { field: "vendorId", resource: "Vendor" },
                )?;
                Ok(Some(vendor.company_name))
            }
            None => Ok(None),
        }
    }

    pub fn create_representative(
        &self,
        new: NewRepresentative,
    ) -> StorageResult<Representative> {
        self.pool.with_writer(|conn| {
            let vendor_name = Self::snapshot_vendor_name(conn, new.vendor_id.as_deref())?;
            let now = utc_now();
            let rep = Representative {
                id: new_id(),
                name: new.name,
                position: new.position,
                vendor_id: new.vendor_id,
                vendor_name,
                phone: new.phone,
                email: new.email,
                phone_contacts: new.phone_contacts,
                email_contacts: new.email_contacts,
                created_at: now,
                updated_at: now,
            };
            representatives::insert_representative(conn, &rep)?;
            Ok(rep)
        })
    }

    pub fn list_representatives(
        &self,
        search: Option<&str>,
        vendor_id: Option<&str>,
    ) -> StorageResult<Vec<Representative>> {
        self.pool
            .with_reader(|conn| representatives::list_representatives(conn, search, vendor_id))
    }

    pub fn get_representative(&self, id: &str) -> StorageResult<Representative> {
        self.pool
            .with_reader(|conn| representatives::get_representative(conn, id))?
            .ok_or(StorageError::NotFound { resource: "Representative" })
    }

    pub fn patch_representative(
        &self,
        id: &str,
        patch: RepresentativePatch,
    ) -> StorageResult<Representative> {
        self.pool.with_writer(|conn| {
            let mut rep = representatives::get_representative(conn, id)?
                .ok_or(StorageError::NotFound { resource: "Representative" })?;
            let revalidate = patch.vendor_id.is_some();
            patch.apply(&mut rep);
            if revalidate {
                rep.vendor_name = Self::snapshot_vendor_name(conn, rep.vendor_id.as_deref())?;
            }
            rep.updated_at = utc_now();
            representatives::update_representative(conn, &rep)?;
            Ok(rep)
        })
    }

    pub fn replace_representative(
        &self,
        id: &str,
        new: NewRepresentative,
    ) -> StorageResult<Representative> {
        self.pool.with_writer(|conn| {
            let existing = representatives::get_representative(conn, id)?
                .ok_or(StorageError::NotFound { resource: "Representative" })?;
            let vendor_name = Self::snapshot_vendor_name(conn, new.vendor_id.as_deref())?;
            let rep = Representative {
                id: existing.id,
                name: new.name,
                position: new.position,
                vendor_id: new.vendor_id,
                vendor_name,
                phone: new.phone,
                email: new.email,
                phone_contacts: new.phone_contacts,
                email_contacts: new.email_contacts,
                created_at: existing.created_at,
                updated_at: utc_now(),
            };
            representatives::update_representative(conn, &rep)?;
            Ok(rep)
        })
    }

    pub fn delete_representative(&self, id: &str) -> StorageResult<Representative> {
        self.pool.with_writer(|conn| {
            let rep = representatives::get_representative(conn, id)?
                .ok_or(StorageError::NotFound { resource: "Representative" })?;
            representatives::delete_representative(conn, id)?;
            Ok(rep)
        })
    }

    // ---- categories ----

    /// `id` is the row being updated (None on create); a parent equal to
    /// it would make the category its own child and permanently
    /// undeletable under the child-delete guard.
    fn check_category_parent(
        conn: &Connection,
        id: Option<&str>,
        parent_id: Option<&str>,
    ) -> StorageResult<()> {
        if let Some(pid) = parent_id {
            if id == Some(pid) {
                return Err(StorageError::SelfReference { field: "parentId" });
            }
            categories::get_category(conn, pid)?.ok_or(StorageError::InvalidReference {
                field: "parentId",
                resource: "Category",
            })?;
        }
        Ok(())
    }

    pub fn create_category(&self, new: NewCategory) -> StorageResult<Category> {
        self.pool.with_writer(|conn| {
            Self::check_category_parent(conn, None, new.parent_id.as_deref())?;
            let now = utc_now();
            let category = Category {
                id: new_id(),
                name: new.name,
                description: new.description,
                parent_id: new.parent_id,
                level: new.level.unwrap_or_else(|| "1".to_string()),
                vendor_count: 0,
                created_at: now,
                updated_at: now,
            };
            categories::insert_category(conn, &category)?;
            Ok(category)
        })
    }

    pub fn list_categories(
        &self,
        search: Option<&str>,
        parent_id: Option<&str>,
    ) -> StorageResult<Vec<Category>> {
        self.pool
            .with_reader(|conn| categories::list_categories(conn, search, parent_id))
    }

    pub fn get_category(&self, id: &str) -> StorageResult<Category> {
        self.pool
            .with_reader(|conn| categories::get_category(conn, id))?
            .ok_or(StorageError::NotFound { resource: "Category" })
    }

    pub fn patch_category(&self, id: &str, patch: CategoryPatch) -> StorageResult<Category> {
        self.pool.with_writer(|conn| {
            let mut category = categories::get_category(conn, id)?
                .ok_or(StorageError::NotFound { resource: "Category" })?;
            if patch.parent_id.is_some() {
                Self::check_category_parent(conn, Some(id), patch.parent_id.as_deref())?;
            }
            patch.apply(&mut category);
            category.updated_at = utc_now();
            categories::update_category(conn, &category)?;
            // Re-read for a fresh vendor_count under the new name.
            categories::get_category(conn, id)?
                .ok_or(StorageError::NotFound { resource: "Category" })
        })
    }

    pub fn replace_category(&self, id: &str, new: NewCategory) -> StorageResult<Category> {
        self.pool.with_writer(|conn| {
            let existing = categories::get_category(conn, id)?
                .ok_or(StorageError::NotFound { resource: "Category" })?;
            Self::check_category_parent(conn, Some(id), new.parent_id.as_deref())?;
            let category = Category {
                id: existing.id,
                name: new.name,
                description: new.description,
                parent_id: new.parent_id,
                level: new.level.unwrap_or_else(|| "1".to_string()),
                vendor_count: 0,
                created_at: existing.created_at,
                updated_at: utc_now(),
            };
            categories::update_category(conn, &category)?;
            categories::get_category(conn, id)?
                .ok_or(StorageError::NotFound { resource: "Category" })
        })
    }

    /// Delete a category. Refused while other categories still point at
    /// it as their parent.
    pub fn delete_category(&self, id: &str) -> StorageResult<Category> {
        self.pool.with_writer(|conn| {
            let category = categories::get_category(conn, id)?
                .ok_or(StorageError::NotFound { resource: "Category" })?;
            let children = categories::count_children(conn, id)?;
            if children > 0 {
                return Err(StorageError::CategoryHasChildren { children });
            }
            categories::delete_category(conn, id)?;
            Ok(category)
        })
    }

    // ---- services ----

    fn check_service_parent(
        conn: &Connection,
        id: Option<&str>,
        parent_id: Option<&str>,
    ) -> StorageResult<()> {
        if let Some(pid) = parent_id {
            if id == Some(pid) {
                return Err(StorageError::SelfReference { field: "parentId" });
            }
            services::get_service(conn, pid)?.ok_or(StorageError::InvalidReference {
                field: "parentId",
                resource: "Service",
            })?;
        }
        Ok(())
    }

    pub fn create_service(&self, new: NewService) -> StorageResult<Service> {
        self.pool.with_writer(|conn| {
            Self::check_service_parent(conn, None, new.parent_id.as_deref())?;
            let now = utc_now();
            let service = Service {
                id: new_id(),
                name: new.name,
                description: new.description,
                parent_id: new.parent_id,
                vendor_count: 0,
                created_at: now,
                updated_at: now,
            };
            services::insert_service(conn, &service)?;
            Ok(service)
        })
    }

    pub fn list_services(&self, search: Option<&str>) -> StorageResult<Vec<Service>> {
        self.pool.with_reader(|conn| services::list_services(conn, search))
    }

    pub fn get_service(&self, id: &str) -> StorageResult<Service> {
        self.pool
            .with_reader(|conn| services::get_service(conn, id))?
            .ok_or(StorageError::NotFound { resource: "Service" })
    }

    pub fn patch_service(&self, id: &str, patch: ServicePatch) -> StorageResult<Service> {
        self.pool.with_writer(|conn| {
            let mut service = services::get_service(conn, id)?
                .ok_or(StorageError::NotFound { resource: "Service" })?;
            if patch.parent_id.is_some() {
                Self::check_service_parent(conn, Some(id), patch.parent_id.as_deref())?;
            }
            patch.apply(&mut service);
            service.updated_at = utc_now();
            services::update_service(conn, &service)?;
            services::get_service(conn, id)?
                .ok_or(StorageError::NotFound { resource: "Service" })
        })
    }

    pub fn replace_service(&self, id: &str, new: NewService) -> StorageResult<Service> {
        self.pool.with_writer(|conn| {
            let existing = services::get_service(conn, id)?
                .ok_or(StorageError::NotFound { resource: "Service" })?;
            Self::check_service_parent(conn, Some(id), new.parent_id.as_deref())?;
            let service = Service {
                id: existing.id,
                name: new.name,
                description: new.description,
                parent_id: new.parent_id,
                vendor_count: 0,
                created_at: existing.created_at,
                updated_at: utc_now(),
            };
            services::update_service(conn, &service)?;
            services::get_service(conn, id)?
                .ok_or(StorageError::NotFound { resource: "Service" })
        })
    }

    pub fn delete_service(&self, id: &str) -> StorageResult<Service> {
        self.pool.with_writer(|conn| {
            let service = services::get_service(conn, id)?
                .ok_or(StorageError::NotFound { resource: "Service" })?;
            services::delete_service(conn, id)?;
            Ok(service)
        })
    }

    // ---- brands ----

    fn check_brand_parent(
        conn: &Connection,
        id: Option<&str>,
        parent_id: Option<&str>,
    ) -> StorageResult<()> {
        if let Some(pid) = parent_id {
            if id == Some(pid) {
                return Err(StorageError::SelfReference { field: "parentBrandId" });
            }
            brands::get_brand(conn, pid)?.ok_or(StorageError::InvalidReference {
                field: "parentBrandId",
                resource: "Brand",
            })?;
        }
        Ok(())
    }

    pub fn create_brand(&self, new: NewBrand) -> StorageResult<Brand> {
        self.pool.with_writer(|conn| {
            Self::check_brand_parent(conn, None, new.parent_brand_id.as_deref())?;
            let now = utc_now();
            let brand = Brand {
                id: new_id(),
                name: new.name,
                description: new.description,
                is_generic: new.is_generic,
                industry: new.industry,
                logo: new.logo,
                website: new.website,
                template_id: new.template_id,
                parent_brand_id: new.parent_brand_id,
                vendor_count: 0,
                created_at: now,
                updated_at: now,
            };
            brands::insert_brand(conn, &brand)?;
            Ok(brand)
        })
    }

    pub fn list_brands(
        &self,
        search: Option<&str>,
        industry: Option<&str>,
    ) -> StorageResult<Vec<Brand>> {
        self.pool.with_reader(|conn| brands::list_brands(conn, search, industry))
    }

    pub fn get_brand(&self, id: &str) -> StorageResult<Brand> {
        self.pool
            .with_reader(|conn| brands::get_brand(conn, id))?
            .ok_or(StorageError::NotFound { resource: "Brand" })
    }

    pub fn patch_brand(&self, id: &str, patch: BrandPatch) -> StorageResult<Brand> {
        self.pool.with_writer(|conn| {
            let mut brand = brands::get_brand(conn, id)?
                .ok_or(StorageError::NotFound { resource: "Brand" })?;
            if patch.parent_brand_id.is_some() {
                Self::check_brand_parent(conn, Some(id), patch.parent_brand_id.as_deref())?;
            }
            patch.apply(&mut brand);
            brand.updated_at = utc_now();
            brands::update_brand(conn, &brand)?;
            Ok(brand)
        })
    }

    pub fn replace_brand(&self, id: &str, new: NewBrand) -> StorageResult<Brand> {
        self.pool.with_writer(|conn| {
            let existing = brands::get_brand(conn, id)?
                .ok_or(StorageError::NotFound { resource: "Brand" })?;
            Self::check_brand_parent(conn, Some(id), new.parent_brand_id.as_deref())?;
            let brand = Brand {
                id: existing.id,
                name: new.name,
                description: new.description,
                is_generic: new.is_generic,
                industry: new.industry,
                logo: new.logo,
                website: new.website,
                template_id: new.template_id,
                parent_brand_id: new.parent_brand_id,
                vendor_count: existing.vendor_count,
                created_at: existing.created_at,
                updated_at: utc_now(),
            };
            brands::update_brand(conn, &brand)?;
            Ok(brand)
        })
    }

    pub fn delete_brand(&self, id: &str) -> StorageResult<Brand> {
        self.pool.with_writer(|conn| {
            let brand = brands::get_brand(conn, id)?
                .ok_or(StorageError::NotFound { resource: "Brand" })?;
            brands::delete_brand(conn, id)?;
            Ok(brand)
        })
    }

    // ---- pro customers ----

    pub fn create_pro_customer(&self, new: NewProCustomer) -> StorageResult<ProCustomer> {
        self.pool.with_writer(|conn| {
            let now = utc_now();
            let customer = ProCustomer {
                id: new_id(),
                business_name: new.business_name,
                contact_name: new.contact_name,
                phone: new.phone,
                email: new.email,
                address: new.address,
                notes: new.notes,
                trades: new.trades,
                preferred_brands: new.preferred_brands,
                ordering_preferences: new.ordering_preferences,
                phone_contacts: new.phone_contacts,
                email_contacts: new.email_contacts,
                created_at: now,
                updated_at: now,
            };
            pro_customers::insert_pro_customer(conn, &customer)?;
            Ok(customer)
        })
    }

    pub fn list_pro_customers(&self, search: Option<&str>) -> StorageResult<Vec<ProCustomer>> {
        self.pool
            .with_reader(|conn| pro_customers::list_pro_customers(conn, search))
    }

    pub fn get_pro_customer(&self, id: &str) -> StorageResult<ProCustomer> {
        self.pool
            .with_reader(|conn| pro_customers::get_pro_customer(conn, id))?
            .ok_or(StorageError::NotFound { resource: "Pro customer" })
    }

    pub fn patch_pro_customer(
        &self,
        id: &str,
        patch: ProCustomerPatch,
    ) -> StorageResult<ProCustomer> {
        self.pool.with_writer(|conn| {
            let mut customer = pro_customers::get_pro_customer(conn, id)?
                .ok_or(StorageError::NotFound { resource: "Pro customer" })?;
            patch.apply(&mut customer);
            customer.updated_at = utc_now();
            pro_customers::update_pro_customer(conn, &customer)?;
            Ok(customer)
        })
    }

    pub fn replace_pro_customer(
        &self,
        id: &str,
        new: NewProCustomer,
    ) -> StorageResult<ProCustomer> {
        self.pool.with_writer(|conn| {
            let existing = pro_customers::get_pro_customer(conn, id)?
                .ok_or(StorageError::NotFound { resource: "Pro customer" })?;
            let customer = ProCustomer {
                id: existing.id,
                business_name: new.business_name,
                contact_name: new.contact_name,
                phone: new.phone,
                email: new.email,
                address: new.address,
                notes: new.notes,
                trades: new.trades,
                preferred_brands: new.preferred_brands,
                ordering_preferences: new.ordering_preferences,
                phone_contacts: new.phone_contacts,
                email_contacts: new.email_contacts,
                created_at: existing.created_at,
                updated_at: utc_now(),
            };
            pro_customers::update_pro_customer(conn, &customer)?;
            Ok(customer)
        })
    }

    pub fn delete_pro_customer(&self, id: &str) -> StorageResult<ProCustomer> {
        self.pool.with_writer(|conn| {
            let customer = pro_customers::get_pro_customer(conn, id)?
                .ok_or(StorageError::NotFound { resource: "Pro customer" })?;
            pro_customers::delete_pro_customer(conn, id)?;
            Ok(customer)
        })
    }

    // ---- trades ----

    pub fn create_trade(&self, new: NewTrade) -> StorageResult<Trade> {
        self.pool.with_writer(|conn| {
            let trade = Trade {
                id: new_id(),
                name: new.name,
                is_default: new.is_default,
                created_at: utc_now(),
            };
            trades::insert_trade(conn, &trade)?;
            Ok(trade)
        })
    }

    pub fn list_trades(&self, search: Option<&str>) -> StorageResult<Vec<Trade>> {
        self.pool.with_reader(|conn| trades::list_trades(conn, search))
    }

    pub fn get_trade(&self, id: &str) -> StorageResult<Trade> {
        self.pool
            .with_reader(|conn| trades::get_trade(conn, id))?
            .ok_or(StorageError::NotFound { resource: "Trade" })
    }

    pub fn delete_trade(&self, id: &str) -> StorageResult<Trade> {
        self.pool.with_writer(|conn| {
            let trade = trades::get_trade(conn, id)?
                .ok_or(StorageError::NotFound { resource: "Trade" })?;
            trades::delete_trade(conn, id)?;
            Ok(trade)
        })
    }

    // ---- health & debug ----

    /// Liveness probe: round-trips a trivial query through a reader.
    pub fn ping(&self) -> StorageResult<()> {
        self.pool.with_reader(|conn| {
            conn.query_row("SELECT 1", [], |row| row.get::<_, i64>(0))
                .map_err(StorageError::sqlite)?;
            Ok(())
        })
    }

    /// Schema version and per-table row counts.
    pub fn debug_info(&self) -> StorageResult<DebugInfo> {
        self.pool.with_reader(|conn| {
            let schema_version = migrations::schema_version(conn)?;
            let row_counts = BTreeMap::from([
                ("vendors".to_string(), vendors::count_vendors(conn)?),
                ("representatives".to_string(), representatives::count_representatives(conn)?),
                ("categories".to_string(), categories::count_categories(conn)?),
                ("services".to_string(), services::count_services(conn)?),
                ("brands".to_string(), brands::count_brands(conn)?),
                ("pro_customers".to_string(), pro_customers::count_pro_customers(conn)?),
                ("trades".to_string(), trades::count_trades(conn)?),
            ]);
            Ok(DebugInfo { schema_version, row_counts })
        })
    }
}
