//! Opaque row identifiers and vendor-number formatting.

use uuid::Uuid;

/// Generate a new opaque row id (uuid v4, simple hex form).
pub fn new_id() -> String {
    Uuid::new_v4().simple().to_string()
}

/// Format a vendor sequence value as the customer-facing vendor number,
/// e.g. `1` → `V#00001`. Values past 99999 widen rather than wrap.
pub fn format_vendor_number(seq: i64) -> String {
    format!("V#{seq:05}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_id_is_unique_and_opaque() {
        let a = new_id();
        let b = new_id();
        assert_ne!(a, b);
        assert_eq!(a.len(), 32);
        assert!(a.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_vendor_number_zero_padding() {
        assert_eq!(format_vendor_number(1), "V#00001");
        assert_eq!(format_vendor_number(42), "V#00042");
        assert_eq!(format_vendor_number(99999), "V#99999");
        assert_eq!(format_vendor_number(100000), "V#100000");
    }
}
