//! Utility functions

pub mod validation;

pub use validation::{validate_offer_size, validate_property_type};
