//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in promo-core.
//! Each repository handles database operations for a specific domain entity.

mod admin;
mod application;
mod category;
mod company;
mod error;
mod influencer;
mod profile;
mod task;
mod video;

pub use admin::PgAdminRepository;
pub use application::PgApplicationRepository;
pub use category::PgCategoryRepository;
pub use company::PgCompanyRepository;
pub use influencer::PgInfluencerRepository;
pub use profile::PgProfileRepository;
pub use task::PgTaskRepository;
pub use video::PgVideoRepository;
