//! Axum extractors for request handling
//!
//! Custom extractors for authentication, validation, and pagination.

mod auth;
mod pagination;
mod path;
mod validated;

pub use auth::AuthUser;
pub use pagination::{Pagination, PaginationParams};
pub use path::{ApplicationIdPath, TaskIdPath, UserIdPath, VideoIdPath};
pub use validated::ValidatedJson;
