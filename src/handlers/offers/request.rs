//! Offer request DTOs
//!
//! `author` is not accepted as input anywhere: it is set server-side at
//! creation and immutable afterwards.

use serde::Deserialize;
use validator::Validate;

use crate::constants::MAX_OFFER_ADDRESS_LENGTH;
use crate::utils::validation::{validate_offer_size, validate_property_type};

/// Create offer request; every field has a model default
#[derive(Debug, Deserialize, Validate)]
pub struct CreateOfferRequest {
    #[validate(length(max = MAX_OFFER_ADDRESS_LENGTH))]
    pub address: Option<String>,

    /// Size code: ST, 1BR, 2BR, 3BR, or MBR
    #[validate(custom(function = "validate_offer_size"))]
    pub size: Option<String>,

    /// Property type code: H or APT
    #[validate(custom(function = "validate_property_type"))]
    pub property_type: Option<String>,

    /// Monthly price, non-negative
    #[validate(range(min = 0))]
    pub price: Option<i32>,

    pub sharing: Option<bool>,

    pub text: Option<String>,
}

/// Update offer request; omitted fields are left unchanged
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateOfferRequest {
    #[validate(length(max = MAX_OFFER_ADDRESS_LENGTH))]
    pub address: Option<String>,

    #[validate(custom(function = "validate_offer_size"))]
    pub size: Option<String>,

    #[validate(custom(function = "validate_property_type"))]
    pub property_type: Option<String>,

    #[validate(range(min = 0))]
    pub price: Option<i32>,

    pub sharing: Option<bool>,

    pub text: Option<String>,
}
