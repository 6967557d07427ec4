//! Database repositories
//!
//! Repositories handle all direct database interactions.

pub mod offer_repo;
pub mod quiz_repo;
pub mod task_repo;
pub mod user_repo;

pub use offer_repo::OfferRepository;
pub use quiz_repo::QuizRepository;
pub use task_repo::TaskRepository;
pub use user_repo::UserRepository;
