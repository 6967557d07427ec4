//! Input validation utilities

use validator::ValidationError;

use crate::constants::{offer_sizes, property_types};

/// Validate an offer size code against the catalog
pub fn validate_offer_size(size: &str) -> Result<(), ValidationError> {
    if offer_sizes::ALL.contains(&size) {
        Ok(())
    } else {
        let mut error = ValidationError::new("invalid_size");
        error.message = Some("Size must be one of ST, 1BR, 2BR, 3BR, MBR".into());
        Err(error)
    }
}

/// Validate an offer property type code against the catalog
pub fn validate_property_type(property_type: &str) -> Result<(), ValidationError> {
    if property_types::ALL.contains(&property_type) {
        Ok(())
    } else {
        let mut error = ValidationError::new("invalid_property_type");
        error.message = Some("Property type must be H or APT".into());
        Err(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_offer_size() {
        assert!(validate_offer_size("ST").is_ok());
        assert!(validate_offer_size("1BR").is_ok());
        assert!(validate_offer_size("MBR").is_ok());
        assert!(validate_offer_size("4BR").is_err());
        assert!(validate_offer_size("studio").is_err()); // codes are case-sensitive
    }

    #[test]
    fn test_validate_property_type() {
        assert!(validate_property_type("H").is_ok());
        assert!(validate_property_type("APT").is_ok());
        assert!(validate_property_type("house").is_err());
        assert!(validate_property_type("").is_err());
    }
}
