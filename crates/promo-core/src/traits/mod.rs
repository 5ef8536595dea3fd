//! Repository traits (ports)

mod repositories;

pub use repositories::{
    AcceptOutcome, AdminRepository, ApplicationRepository, CategoryRepository, CompanyRepository,
    InfluencerRepository, PageQuery, Paged, ProfileRepository, RepoResult, TaskRepository,
    VideoQuery, VideoRepository, VideoSort,
};
