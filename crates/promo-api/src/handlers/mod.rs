//! Route handlers
//!
//! All HTTP request handlers organized by domain.

pub mod admin;
pub mod applications;
pub mod auth;
pub mod catalog;
pub mod companies;
pub mod health;
pub mod influencers;
pub mod tasks;
pub mod uploads;
pub mod users;
pub mod verification;
