//! # promo-core
//!
//! Domain layer containing entities, value objects, and repository traits.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{
    permissions, AdminLog, AdminPermission, ApplicationStatus, Company, Influencer,
    InfluencerStatus, SystemStats, Task, TaskApplication, TaskCategory, TaskStatus, UserProfile,
    UserRole, Video, VideoStatus,
};
pub use error::DomainError;
pub use traits::{
    AcceptOutcome, AdminRepository, ApplicationRepository, CategoryRepository, CompanyRepository,
    InfluencerRepository, PageQuery, Paged, ProfileRepository, RepoResult, TaskRepository,
    VideoQuery, VideoRepository, VideoSort,
};
pub use value_objects::{Snowflake, SnowflakeGenerator, SnowflakeParseError};
