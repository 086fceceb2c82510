//! End-to-end tests of the Store facade against a real database.

use lowespro_core::models::{
    BrandPatch, CategoryPatch, EmailContact, NewBrand, NewCategory, NewProCustomer,
    NewRepresentative, NewService, NewTrade, NewVendor, PhoneContact, ProCustomerPatch,
    RepresentativePatch, VendorPatch,
};
use lowespro_core::StorageError;
use lowespro_storage::Store;

fn store() -> Store {
    Store::open_in_memory().unwrap()
}

fn new_vendor(name: &str) -> NewVendor {
    NewVendor {
        company_name: name.to_string(),
        ..Default::default()
    }
}

#[test]
fn test_vendor_crud_roundtrip() {
    let store = store();

    let created = store
        .create_vendor(NewVendor {
            company_name: "Acme Supply".to_string(),
            phone: Some("555-0100".to_string()),
            categories: vec!["Lumber".to_string(), "Hardware".to_string()],
            ..Default::default()
        })
        .unwrap();
    assert_eq!(created.vendor_number, "V#00001");

    let fetched = store.get_vendor(&created.id).unwrap();
    assert_eq!(fetched.company_name, "Acme Supply");
    assert_eq!(fetched.phone.as_deref(), Some("555-0100"));
    assert_eq!(fetched.categories, vec!["Lumber", "Hardware"]);
    assert_eq!(fetched.created_at, created.created_at);
    assert_eq!(fetched.updated_at, created.updated_at);

    let deleted = store.delete_vendor(&created.id).unwrap();
    assert_eq!(deleted.id, created.id);
    assert!(matches!(
        store.get_vendor(&created.id),
        Err(StorageError::NotFound { resource: "Vendor" })
    ));
}

#[test]
fn test_vendor_patch_merges_and_refreshes_updated_at() {
    let store = store();
    let created = store.create_vendor(new_vendor("Acme Supply")).unwrap();

    // Timestamps have microsecond precision; make sure the clock moves.
    std::thread::sleep(std::time::Duration::from_millis(2));

    let patched = store
        .patch_vendor(
            &created.id,
            VendorPatch {
                notes: Some("preferred supplier".to_string()),
                ..Default::default()
            },
        )
        .unwrap();

    assert_eq!(patched.company_name, "Acme Supply");
    assert_eq!(patched.notes.as_deref(), Some("preferred supplier"));
    assert_eq!(patched.created_at, created.created_at);
    assert!(patched.updated_at > created.updated_at);
}

#[test]
fn test_vendor_replace_resets_unsupplied_fields() {
    let store = store();
    let created = store
        .create_vendor(NewVendor {
            company_name: "Acme Supply".to_string(),
            notes: Some("old notes".to_string()),
            categories: vec!["Lumber".to_string()],
            ..Default::default()
        })
        .unwrap();

    let replaced = store
        .replace_vendor(&created.id, new_vendor("Acme Supply Co"))
        .unwrap();

    assert_eq!(replaced.id, created.id);
    assert_eq!(replaced.vendor_number, created.vendor_number);
    assert_eq!(replaced.created_at, created.created_at);
    assert_eq!(replaced.company_name, "Acme Supply Co");
    assert_eq!(replaced.notes, None);
    assert!(replaced.categories.is_empty());
}

#[test]
fn test_vendor_search_is_case_insensitive() {
    let store = store();
    store.create_vendor(new_vendor("Acme Supply")).unwrap();
    store.create_vendor(new_vendor("Borealis Tools")).unwrap();

    let hits = store.list_vendors(Some("ACME")).unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].company_name, "Acme Supply");

    // Vendor numbers are searchable too.
    let by_number = store.list_vendors(Some("v#0000")).unwrap();
    assert_eq!(by_number.len(), 2);
}

#[test]
fn test_vendor_contact_lists_preserve_order() {
    let store = store();
    let contacts = vec![
        PhoneContact {
            label: "Office".to_string(),
            number: "555-0100".to_string(),
            extension: Some("12".to_string()),
        },
        PhoneContact {
            label: "Mobile".to_string(),
            number: "555-0101".to_string(),
            extension: None,
        },
    ];
    let emails = vec![EmailContact {
        label: "Sales".to_string(),
        address: "sales@acme.test".to_string(),
    }];

    let created = store
        .create_vendor(NewVendor {
            company_name: "Acme Supply".to_string(),
            phone_contacts: contacts.clone(),
            email_contacts: emails.clone(),
            ..Default::default()
        })
        .unwrap();

    let fetched = store.get_vendor(&created.id).unwrap();
    assert_eq!(fetched.phone_contacts, contacts);
    assert_eq!(fetched.email_contacts, emails);
}

#[test]
fn test_representative_snapshots_vendor_name() {
    let store = store();
    let vendor = store.create_vendor(new_vendor("Acme Supply")).unwrap();

    let rep = store
        .create_representative(NewRepresentative {
            name: "Jordan Fields".to_string(),
            vendor_id: Some(vendor.id.clone()),
            ..Default::default()
        })
        .unwrap();
    assert_eq!(rep.vendor_name.as_deref(), Some("Acme Supply"));

    // The snapshot does not follow later vendor renames.
    store
        .patch_vendor(
            &vendor.id,
            VendorPatch {
                company_name: Some("Acme Supply Co".to_string()),
                ..Default::default()
            },
        )
        .unwrap();
    let fetched = store.get_representative(&rep.id).unwrap();
    assert_eq!(fetched.vendor_name.as_deref(), Some("Acme Supply"));

    // Re-pointing vendorId re-snapshots.
    let other = store.create_vendor(new_vendor("Borealis Tools")).unwrap();
    let moved = store
        .patch_representative(
            &rep.id,
            RepresentativePatch {
                vendor_id: Some(other.id.clone()),
                ..Default::default()
            },
        )
        .unwrap();
    assert_eq!(moved.vendor_name.as_deref(), Some("Borealis Tools"));
}

#[test]
fn test_representative_rejects_unknown_vendor() {
    let store = store();
    let err = store
        .create_representative(NewRepresentative {
            name: "Jordan Fields".to_string(),
            vendor_id: Some("nope".to_string()),
            ..Default::default()
        })
        .unwrap_err();
    assert!(matches!(
        err,
        StorageError::InvalidReference { field: "vendorId", resource: "Vendor" }
    ));
}

#[test]
fn test_representative_vendor_link_cleared_on_vendor_delete() {
    let store = store();
    let vendor = store.create_vendor(new_vendor("Acme Supply")).unwrap();
    let rep = store
        .create_representative(NewRepresentative {
            name: "Jordan Fields".to_string(),
            vendor_id: Some(vendor.id.clone()),
            ..Default::default()
        })
        .unwrap();

    store.delete_vendor(&vendor.id).unwrap();

    let orphaned = store.get_representative(&rep.id).unwrap();
    assert_eq!(orphaned.vendor_id, None);
}

#[test]
fn test_category_delete_blocked_while_children_exist() {
    let store = store();
    let parent = store
        .create_category(NewCategory { name: "Lumber".to_string(), ..Default::default() })
        .unwrap();
    let child = store
        .create_category(NewCategory {
            name: "Plywood".to_string(),
            parent_id: Some(parent.id.clone()),
            level: Some("2".to_string()),
            ..Default::default()
        })
        .unwrap();

    let err = store.delete_category(&parent.id).unwrap_err();
    assert!(matches!(err, StorageError::CategoryHasChildren { children: 1 }));
    assert!(store.get_category(&parent.id).is_ok());

    // Deleting the child first unblocks the parent.
    store.delete_category(&child.id).unwrap();
    store.delete_category(&parent.id).unwrap();
}

#[test]
fn test_category_cannot_become_its_own_parent() {
    let store = store();
    let category = store
        .create_category(NewCategory { name: "Lumber".to_string(), ..Default::default() })
        .unwrap();

    let err = store
        .patch_category(
            &category.id,
            CategoryPatch { parent_id: Some(category.id.clone()), ..Default::default() },
        )
        .unwrap_err();
    assert!(matches!(err, StorageError::SelfReference { field: "parentId" }));

    // Replace path refuses the same payload.
    let err = store
        .replace_category(
            &category.id,
            NewCategory {
                name: "Lumber".to_string(),
                parent_id: Some(category.id.clone()),
                ..Default::default()
            },
        )
        .unwrap_err();
    assert!(matches!(err, StorageError::SelfReference { .. }));

    // The row never counted itself as a child, so it stays deletable.
    store.delete_category(&category.id).unwrap();
}

#[test]
fn test_brand_cannot_become_its_own_parent() {
    let store = store();
    let brand = store
        .create_brand(NewBrand { name: "StrongBolt".to_string(), ..Default::default() })
        .unwrap();

    let err = store
        .patch_brand(
            &brand.id,
            BrandPatch { parent_brand_id: Some(brand.id.clone()), ..Default::default() },
        )
        .unwrap_err();
    assert!(matches!(err, StorageError::SelfReference { field: "parentBrandId" }));
}

#[test]
fn test_category_rejects_unknown_parent() {
    let store = store();
    let err = store
        .create_category(NewCategory {
            name: "Plywood".to_string(),
            parent_id: Some("missing".to_string()),
            ..Default::default()
        })
        .unwrap_err();
    assert!(matches!(
        err,
        StorageError::InvalidReference { field: "parentId", resource: "Category" }
    ));
}

#[test]
fn test_category_vendor_count_recomputed_on_read() {
    let store = store();
    let category = store
        .create_category(NewCategory { name: "Lumber".to_string(), ..Default::default() })
        .unwrap();
    assert_eq!(category.vendor_count, 0);

    let vendor = store
        .create_vendor(NewVendor {
            company_name: "Acme Supply".to_string(),
            categories: vec!["Lumber".to_string()],
            ..Default::default()
        })
        .unwrap();
    assert_eq!(store.get_category(&category.id).unwrap().vendor_count, 1);

    // Dropping the reference takes effect immediately.
    store
        .patch_vendor(
            &vendor.id,
            VendorPatch { categories: Some(Vec::new()), ..Default::default() },
        )
        .unwrap();
    assert_eq!(store.get_category(&category.id).unwrap().vendor_count, 0);
}

#[test]
fn test_brand_vendor_count_matches_on_id() {
    let store = store();
    let brand = store
        .create_brand(NewBrand { name: "StrongBolt".to_string(), ..Default::default() })
        .unwrap();

    store
        .create_vendor(NewVendor {
            company_name: "Acme Supply".to_string(),
            brands: vec![brand.id.clone()],
            ..Default::default()
        })
        .unwrap();

    assert_eq!(store.get_brand(&brand.id).unwrap().vendor_count, 1);
}

#[test]
fn test_service_crud_and_search() {
    let store = store();
    let service = store
        .create_service(NewService { name: "Delivery".to_string(), ..Default::default() })
        .unwrap();
    store
        .create_service(NewService { name: "Installation".to_string(), ..Default::default() })
        .unwrap();

    let hits = store.list_services(Some("deliv")).unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].id, service.id);
}

#[test]
fn test_brand_industry_filter() {
    let store = store();
    store
        .create_brand(NewBrand {
            name: "StrongBolt".to_string(),
            industry: Some("Fasteners".to_string()),
            ..Default::default()
        })
        .unwrap();
    store
        .create_brand(NewBrand {
            name: "GlowCoat".to_string(),
            industry: Some("Paint".to_string()),
            ..Default::default()
        })
        .unwrap();

    let hits = store.list_brands(None, Some("Paint")).unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].name, "GlowCoat");
}

#[test]
fn test_pro_customer_patch_merge() {
    let store = store();
    let created = store
        .create_pro_customer(NewProCustomer {
            business_name: "Fields Construction".to_string(),
            trades: vec!["Plumber".to_string()],
            ..Default::default()
        })
        .unwrap();

    let patched = store
        .patch_pro_customer(
            &created.id,
            ProCustomerPatch {
                notes: Some("net-30 terms".to_string()),
                ..Default::default()
            },
        )
        .unwrap();
    assert_eq!(patched.business_name, "Fields Construction");
    assert_eq!(patched.trades, vec!["Plumber"]);
    assert_eq!(patched.notes.as_deref(), Some("net-30 terms"));
}

#[test]
fn test_default_trades_seeded_and_listed() {
    let store = store();
    let trades = store.list_trades(None).unwrap();
    assert_eq!(trades.len(), 10);
    assert!(trades.iter().all(|t| t.is_default));
    assert!(trades.iter().any(|t| t.name == "Electrician"));
}

#[test]
fn test_duplicate_trade_name_rejected() {
    let store = store();
    store
        .create_trade(NewTrade { name: "Welder".to_string(), is_default: false })
        .unwrap();

    let err = store
        .create_trade(NewTrade { name: "Welder".to_string(), is_default: false })
        .unwrap_err();
    match err {
        StorageError::DuplicateName { resource, name } => {
            assert_eq!(resource, "Trade");
            assert_eq!(name, "Welder");
        }
        other => panic!("expected DuplicateName, got {other:?}"),
    }

    // Seeded defaults collide too.
    assert!(store
        .create_trade(NewTrade { name: "Plumber".to_string(), is_default: false })
        .is_err());
}

#[test]
fn test_delete_missing_rows_report_not_found() {
    let store = store();
    assert!(matches!(
        store.delete_vendor("missing"),
        Err(StorageError::NotFound { resource: "Vendor" })
    ));
    assert!(matches!(
        store.delete_trade("missing"),
        Err(StorageError::NotFound { resource: "Trade" })
    ));
}

#[test]
fn test_list_newest_first() {
    let store = store();
    store.create_vendor(new_vendor("First")).unwrap();
    std::thread::sleep(std::time::Duration::from_millis(2));
    store.create_vendor(new_vendor("Second")).unwrap();

    let all = store.list_vendors(None).unwrap();
    assert_eq!(all.len(), 2);
    assert_eq!(all[0].company_name, "Second");
    assert_eq!(all[1].company_name, "First");
}

#[test]
fn test_debug_info_reports_counts() {
    let store = store();
    store.create_vendor(new_vendor("Acme Supply")).unwrap();

    let info = store.debug_info().unwrap();
    assert_eq!(info.schema_version, 1);
    assert_eq!(info.row_counts["vendors"], 1);
    assert_eq!(info.row_counts["trades"], 10);
    assert_eq!(info.row_counts.len(), 7);
}

#[test]
fn test_ping() {
    let store = store();
    store.ping().unwrap();
}

#[test]
fn test_file_backed_store_persists_across_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("lowespro.db");

    let id = {
        let store = Store::open(&path, 1).unwrap();
        store.create_vendor(new_vendor("Acme Supply")).unwrap().id
    };

    let reopened = Store::open(&path, 1).unwrap();
    let vendor = reopened.get_vendor(&id).unwrap();
    assert_eq!(vendor.company_name, "Acme Supply");
    // Seeding must not duplicate on reopen.
    assert_eq!(reopened.list_trades(None).unwrap().len(), 10);
}
