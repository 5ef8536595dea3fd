//! Entity to DTO mappers
//!
//! Implements `From` conversions from domain entities to response DTOs.

use promo_core::entities::{
    AdminLog, Company, Influencer, SystemStats, Task, TaskApplication, TaskCategory, UserProfile,
    Video,
};
use promo_core::Snowflake;

use super::responses::{
    AdminLogResponse, ApplicationResponse, CategoryResponse, CompanyResponse, CurrentUserResponse,
    InfluencerResponse, StatsResponse, TaskResponse, VideoResponse,
};

// ============================================================================
// Profile Mappers
// ============================================================================

impl From<&UserProfile> for CurrentUserResponse {
    fn from(profile: &UserProfile) -> Self {
        Self {
            id: profile.user_id.to_string(),
            email: profile.email.clone(),
            phone: profile.phone.clone(),
            user_type: profile.user_type.as_str().to_string(),
            created_at: profile.created_at,
        }
    }
}

impl From<UserProfile> for CurrentUserResponse {
    fn from(profile: UserProfile) -> Self {
        Self::from(&profile)
    }
}

// ============================================================================
// Influencer Mappers
// ============================================================================

impl From<&Influencer> for InfluencerResponse {
    fn from(influencer: &Influencer) -> Self {
        Self {
            id: influencer.user_id.to_string(),
            nickname: influencer.nickname.clone(),
            tiktok_handle: influencer.tiktok_handle.clone(),
            tiktok_url: influencer.tiktok_url.clone(),
            bio: influencer.bio.clone(),
            location: influencer.location.clone(),
            categories: influencer.categories.clone(),
            tags: influencer.tags.clone(),
            hourly_rate: influencer.hourly_rate,
            experience_years: influencer.experience_years,
            is_verified: influencer.is_verified,
            is_approved: influencer.is_approved,
            status: influencer.status.as_str().to_string(),
            follower_count: influencer.follower_count,
            rating: influencer.rating,
            rating_count: influencer.rating_count,
            created_at: influencer.created_at,
        }
    }
}

impl From<Influencer> for InfluencerResponse {
    fn from(influencer: Influencer) -> Self {
        Self::from(&influencer)
    }
}

// ============================================================================
// Company Mappers
// ============================================================================

impl From<&Company> for CompanyResponse {
    fn from(company: &Company) -> Self {
        Self {
            id: company.user_id.to_string(),
            company_name: company.company_name.clone(),
            contact_name: company.contact_name.clone(),
            contact_email: company.contact_email.clone(),
            contact_phone: company.contact_phone.clone(),
            website: company.website.clone(),
            description: company.description.clone(),
            logo_url: company.logo_url.clone(),
            is_verified: company.is_verified,
            created_at: company.created_at,
        }
    }
}

impl From<Company> for CompanyResponse {
    fn from(company: Company) -> Self {
        Self::from(&company)
    }
}

// ============================================================================
// Task Mappers
// ============================================================================

impl From<&Task> for TaskResponse {
    fn from(task: &Task) -> Self {
        Self {
            id: task.id.to_string(),
            company_id: task.company_id.to_string(),
            title: task.title.clone(),
            description: task.description.clone(),
            category: task.category.clone(),
            status: task.status.as_str().to_string(),
            budget_min: task.budget_min,
            budget_max: task.budget_max,
            max_applicants: task.max_applicants,
            current_applicants: task.current_applicants,
            selected_influencer_id: task.selected_influencer_id.map(|id| id.to_string()),
            deadline: task.deadline,
            created_at: task.created_at,
            updated_at: task.updated_at,
        }
    }
}

impl From<Task> for TaskResponse {
    fn from(task: Task) -> Self {
        Self::from(&task)
    }
}

// ============================================================================
// Application Mappers
// ============================================================================

impl From<&TaskApplication> for ApplicationResponse {
    fn from(application: &TaskApplication) -> Self {
        Self {
            id: application.id.to_string(),
            task_id: application.task_id.to_string(),
            influencer_id: application.influencer_id.to_string(),
            status: application.status.as_str().to_string(),
            proposed_rate: application.proposed_rate,
            message: application.message.clone(),
            created_at: application.created_at,
            updated_at: application.updated_at,
        }
    }
}

impl From<TaskApplication> for ApplicationResponse {
    fn from(application: TaskApplication) -> Self {
        Self::from(&application)
    }
}

// ============================================================================
// Catalog Mappers
// ============================================================================

impl From<&TaskCategory> for CategoryResponse {
    fn from(category: &TaskCategory) -> Self {
        Self {
            id: category.id.to_string(),
            name: category.name.clone(),
            description: category.description.clone(),
            sort_order: category.sort_order,
        }
    }
}

impl From<TaskCategory> for CategoryResponse {
    fn from(category: TaskCategory) -> Self {
        Self::from(&category)
    }
}

impl From<&Video> for VideoResponse {
    fn from(video: &Video) -> Self {
        Self {
            id: video.id.to_string(),
            title: video.title.clone(),
            creator_name: video.creator_name.clone(),
            category: video.category.clone(),
            cover_url: video.cover_url.clone(),
            video_url: video.video_url.clone(),
            play_count: video.play_count,
            like_count: video.like_count,
            featured: video.featured,
            created_at: video.created_at,
        }
    }
}

impl From<Video> for VideoResponse {
    fn from(video: Video) -> Self {
        Self::from(&video)
    }
}

// ============================================================================
// Admin Mappers
// ============================================================================

impl From<&AdminLog> for AdminLogResponse {
    fn from(log: &AdminLog) -> Self {
        Self {
            id: log.id.to_string(),
            admin_id: log.admin_id.to_string(),
            action: log.action.clone(),
            target_table: log.target_table.clone(),
            target_id: log.target_id.map(|id: Snowflake| id.to_string()),
            detail: log.detail.clone(),
            created_at: log.created_at,
        }
    }
}

impl From<AdminLog> for AdminLogResponse {
    fn from(log: AdminLog) -> Self {
        Self::from(&log)
    }
}

impl From<&SystemStats> for StatsResponse {
    fn from(stats: &SystemStats) -> Self {
        Self {
            total_users: stats.total_users,
            total_influencers: stats.total_influencers,
            total_companies: stats.total_companies,
            open_tasks: stats.open_tasks,
            in_progress_tasks: stats.in_progress_tasks,
            completed_tasks: stats.completed_tasks,
            total_applications: stats.total_applications,
            refreshed_at: stats.refreshed_at,
        }
    }
}

impl From<SystemStats> for StatsResponse {
    fn from(stats: SystemStats) -> Self {
        Self::from(&stats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use promo_core::entities::UserRole;

    #[test]
    fn test_profile_mapper_serializes_id_as_string() {
        let profile = UserProfile::new(
            Snowflake::new(12345),
            "creator@example.com".to_string(),
            UserRole::Influencer,
        );
        let response = CurrentUserResponse::from(&profile);
        assert_eq!(response.id, "12345");
        assert_eq!(response.user_type, "influencer");
    }

    #[test]
    fn test_task_mapper_carries_selection() {
        let mut task = Task::new(
            Snowflake::new(1),
            Snowflake::new(2),
            "Unboxing short".to_string(),
            "30 second unboxing clip".to_string(),
            100,
            500,
            3,
        );
        task.selected_influencer_id = Some(Snowflake::new(77));
        let response = TaskResponse::from(&task);
        assert_eq!(response.selected_influencer_id.as_deref(), Some("77"));
        assert_eq!(response.status, "open");
    }

    #[test]
    fn test_admin_log_mapper() {
        let log = AdminLog::new(
            Snowflake::new(1),
            Snowflake::new(2),
            "approve_influencer",
            "influencers",
            Some(Snowflake::new(3)),
        )
        .with_detail(serde_json::json!({"approved": true}));
        let response = AdminLogResponse::from(&log);
        assert_eq!(response.target_id.as_deref(), Some("3"));
        assert!(response.detail.is_some());
    }
}
