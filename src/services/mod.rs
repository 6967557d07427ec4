//! Business logic services

pub mod auth_service;
pub mod offer_service;
pub mod quiz_service;
pub mod task_service;
pub mod user_service;

pub use auth_service::AuthService;
pub use offer_service::OfferService;
pub use quiz_service::QuizService;
pub use task_service::TaskService;
pub use user_service::UserService;
