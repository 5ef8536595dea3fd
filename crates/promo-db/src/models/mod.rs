//! Database models - SQLx-compatible structs for PostgreSQL tables

mod admin;
mod application;
mod category;
mod company;
mod influencer;
mod profile;
mod task;
mod video;

pub use admin::{AdminLogModel, AdminPermissionModel, SystemStatsModel};
pub use application::ApplicationModel;
pub use category::CategoryModel;
pub use company::CompanyModel;
pub use influencer::InfluencerModel;
pub use profile::ProfileModel;
pub use task::TaskModel;
pub use video::VideoModel;
