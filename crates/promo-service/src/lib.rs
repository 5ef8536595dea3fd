//! # promo-service
//!
//! Application layer containing business logic, services, DTOs, and the
//! outbound gateway adapters (SMS, email, image host).

pub mod dto;
pub mod gateways;
pub mod services;

// Re-export the service layer and DTOs at the crate root
pub use dto::*;
pub use services::*;
