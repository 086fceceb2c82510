//! Payload validation errors.
//!
//! Validation failures are reported to API callers as one aggregated
//! message string, so the error type carries the per-field messages and
//! joins them for display.

/// An aggregated payload validation failure.
#[derive(Debug, thiserror::Error)]
#[error("{}", .errors.join("; "))]
pub struct ValidationError {
    pub errors: Vec<String>,
}

/// Collects per-field validation failures for an inbound payload.
#[derive(Debug, Default)]
pub struct Validator {
    errors: Vec<String>,
}

impl Validator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Require a non-blank string value. `field` uses the wire (camelCase) name.
    pub fn require(&mut self, field: &str, value: &str) {
        if value.trim().is_empty() {
            self.errors.push(format!("{field} is required"));
        }
    }

    /// Require a non-blank value when the field was supplied at all.
    /// Used by patch payloads: absent is fine, present-but-blank is not.
    pub fn require_if_present(&mut self, field: &str, value: Option<&str>) {
        if let Some(v) = value {
            self.require(field, v);
        }
    }

    /// Push an arbitrary failure message.
    pub fn fail(&mut self, message: impl Into<String>) {
        self.errors.push(message.into());
    }

    pub fn finish(self) -> Result<(), ValidationError> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(ValidationError { errors: self.errors })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_validator_passes() {
        assert!(Validator::new().finish().is_ok());
    }

    #[test]
    fn test_blank_required_field_fails() {
        let mut v = Validator::new();
        v.require("companyName", "  ");
        let err = v.finish().unwrap_err();
        assert_eq!(err.to_string(), "companyName is required");
    }

    #[test]
    fn test_messages_aggregate_in_order() {
        let mut v = Validator::new();
        v.require("name", "");
        v.fail("vendorId does not reference an existing Vendor");
        let err = v.finish().unwrap_err();
        assert_eq!(
            err.to_string(),
            "name is required; vendorId does not reference an existing Vendor"
        );
    }

    #[test]
    fn test_require_if_present_ignores_absent() {
        let mut v = Validator::new();
        v.require_if_present("name", None);
        assert!(v.finish().is_ok());

        let mut v = Validator::new();
        v.require_if_present("name", Some(""));
        assert!(v.finish().is_err());
    }
}
