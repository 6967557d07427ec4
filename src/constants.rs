//! Application-wide constants
//!
//! This module contains all constant values used throughout the application.
//! Constants are grouped by their purpose for better organization.

// =============================================================================
// SERVER DEFAULTS
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 8080;

// =============================================================================
// DATABASE DEFAULTS
// =============================================================================

/// Default maximum database connections in the pool
pub const DEFAULT_DATABASE_MAX_CONNECTIONS: u32 = 20;

// =============================================================================
// AUTHENTICATION DEFAULTS
// =============================================================================

/// Default JWT token expiry in hours
pub const DEFAULT_JWT_EXPIRY_HOURS: i64 = 24;

// =============================================================================
// OFFER CATALOG
// =============================================================================

/// Offer size identifiers (stored codes)
pub mod offer_sizes {
    pub const STUDIO: &str = "ST";
    pub const ONE_BEDROOM: &str = "1BR";
    pub const TWO_BEDROOMS: &str = "2BR";
    pub const THREE_BEDROOMS: &str = "3BR";
    pub const MORE_BEDROOMS: &str = "MBR";

    /// All accepted size codes
    pub const ALL: &[&str] = &[STUDIO, ONE_BEDROOM, TWO_BEDROOMS, THREE_BEDROOMS, MORE_BEDROOMS];
}

/// Offer property type identifiers (stored codes)
pub mod property_types {
    pub const HOUSE: &str = "H";
    pub const APARTMENT: &str = "APT";

    /// All accepted property type codes
    pub const ALL: &[&str] = &[HOUSE, APARTMENT];
}

/// Default offer size when none is supplied
pub const DEFAULT_OFFER_SIZE: &str = offer_sizes::ONE_BEDROOM;

/// Default offer property type when none is supplied
pub const DEFAULT_PROPERTY_TYPE: &str = property_types::APARTMENT;

/// Maximum offer address length
pub const MAX_OFFER_ADDRESS_LENGTH: u64 = 100;

// =============================================================================
// TASK SETTINGS
// =============================================================================

/// Maximum task title length
pub const MAX_TASK_TITLE_LENGTH: u64 = 200;

/// Priority assigned when a create request omits it
pub const DEFAULT_TASK_PRIORITY: i32 = 1;
