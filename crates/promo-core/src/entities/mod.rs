//! Domain entities - core business objects

mod admin;
mod application;
mod category;
mod company;
mod influencer;
mod profile;
mod task;
mod video;

pub use admin::{permissions, AdminLog, AdminPermission, SystemStats};
pub use application::{ApplicationStatus, TaskApplication};
pub use category::TaskCategory;
pub use company::Company;
pub use influencer::{Influencer, InfluencerStatus};
pub use profile::{UserProfile, UserRole};
pub use task::{Task, TaskStatus};
pub use video::{Video, VideoStatus};
