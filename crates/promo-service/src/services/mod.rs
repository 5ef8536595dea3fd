//! Business logic services
//!
//! This module contains all service layer implementations that handle
//! business logic, validation, and orchestration of domain operations.

pub mod admin;
pub mod application;
pub mod auth;
pub mod catalog;
pub mod company;
pub mod context;
pub mod error;
pub mod influencer;
pub mod media;
pub mod profile;
pub mod task;
pub mod verification;

// Re-export all services for convenience
pub use admin::AdminService;
pub use application::ApplicationService;
pub use auth::AuthService;
pub use catalog::CatalogService;
pub use company::CompanyService;
pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use influencer::InfluencerService;
pub use media::MediaService;
pub use profile::ProfileService;
pub use task::TaskService;
pub use verification::VerificationService;
