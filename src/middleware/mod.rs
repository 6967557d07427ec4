//! HTTP middleware

pub mod auth;

pub use auth::{AuthenticatedUser, optional_auth_middleware};
