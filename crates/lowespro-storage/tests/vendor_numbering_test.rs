//! Vendor-number assignment: dense, ordered, and race-free.

use std::collections::HashSet;
use std::sync::Arc;

use lowespro_core::models::NewVendor;
use lowespro_storage::Store;

fn vendor(name: &str) -> NewVendor {
    NewVendor { company_name: name.to_string(), ..Default::default() }
}

#[test]
fn test_numbers_assigned_sequentially() {
    let store = Store::open_in_memory().unwrap();
    for i in 1..=12 {
        let v = store.create_vendor(vendor(&format!("Vendor {i}"))).unwrap();
        assert_eq!(v.vendor_number, format!("V#{i:05}"));
    }
}

#[test]
fn test_numbers_not_reused_after_delete() {
    let store = Store::open_in_memory().unwrap();
    let first = store.create_vendor(vendor("First")).unwrap();
    assert_eq!(first.vendor_number, "V#00001");

    store.delete_vendor(&first.id).unwrap();

    let second = store.create_vendor(vendor("Second")).unwrap();
    assert_eq!(second.vendor_number, "V#00002");
}

#[test]
fn test_concurrent_creates_get_unique_numbers() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("numbering.db");
    let store = Arc::new(Store::open(&path, 2).unwrap());

    let mut handles = Vec::new();
    for t in 0..8 {
        let store = Arc::clone(&store);
        handles.push(std::thread::spawn(move || {
            let mut numbers = Vec::new();
            for i in 0..10 {
                let v = store.create_vendor(vendor(&format!("T{t} V{i}"))).unwrap();
                numbers.push(v.vendor_number);
            }
            numbers
        }));
    }

    let mut seen = HashSet::new();
    for handle in handles {
        for number in handle.join().unwrap() {
            assert!(seen.insert(number.clone()), "duplicate vendor number {number}");
        }
    }
    assert_eq!(seen.len(), 80);
    assert!(seen.contains("V#00001"));
    assert!(seen.contains("V#00080"));
}
