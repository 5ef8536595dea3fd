//! Entity to model mappers
//!
//! Conversions between domain entities (promo-core) and database models.
//! `From<Model> for Entity` converts database rows to domain objects;
//! inserts bind entity fields directly in the repositories.

mod admin;
mod application;
mod category;
mod company;
mod influencer;
mod profile;
mod task;
mod video;
