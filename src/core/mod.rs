//! Core business logic modules.
//!
//! All domain rules live here, behind plain async functions that take a
//! `&DatabaseConnection`. The HTTP layer stays thin by delegating every
//! decision to these modules.

/// Admin and customer accounts, password hashing, sessions
pub mod account;

/// Shop cart aggregation and checkout
pub mod cart;

/// Fabric catalogue and readymade product management
pub mod catalog;

/// Contact enquiry intake and admin review
pub mod enquiry;

/// Paid-transition event broadcasting
pub mod events;

/// Invoice generation and payment status
pub mod invoice;

/// Order lifecycle
pub mod order;

/// Sales records and dashboard analytics
pub mod sales;

/// Employee records
pub mod staff;

/// Vendor registry
pub mod vendor;

/// Payment obligations to vendors
pub mod vendor_payment;

/// Builds a human-facing document number like `INV-20260830-3F9A12BC`:
/// prefix, date of issue, and an 8-character uppercase random suffix.
#[must_use]
pub(crate) fn document_number(prefix: &str) -> String {
    let date = chrono::Utc::now().format("%Y%m%d");
    let suffix = uuid::Uuid::new_v4().simple().to_string()[..8].to_uppercase();
    format!("{prefix}-{date}-{suffix}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_number_shape() {
        let number = document_number("VP");
        let parts: Vec<&str> = number.split('-').collect();
        assert_eq!(parts.len(), 3);
        assert_eq!(parts[0], "VP");
        assert_eq!(parts[1].len(), 8);
        assert_eq!(parts[2].len(), 8);
        assert_eq!(parts[2], parts[2].to_uppercase());
    }

    #[test]
    fn test_document_numbers_are_unique() {
        let a = document_number("INV");
        let b = document_number("INV");
        assert_ne!(a, b);
    }
}
