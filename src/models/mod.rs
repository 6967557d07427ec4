//! Domain models
//!
//! This module contains all domain models used throughout the application.

pub mod answer;
pub mod offer;
pub mod question;
pub mod quiz;
pub mod task;
pub mod user;

pub use answer::*;
pub use offer::*;
pub use question::*;
pub use quiz::*;
pub use task::*;
pub use user::*;
