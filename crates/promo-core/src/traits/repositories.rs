//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation. Services depend on these traits only, so
//! tests can substitute in-memory fakes.

use async_trait::async_trait;

use crate::entities::{
    AdminLog, AdminPermission, Company, Influencer, SystemStats, Task, TaskApplication,
    TaskCategory, TaskStatus, UserProfile, Video,
};
use crate::error::DomainError;
use crate::value_objects::Snowflake;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

/// Offset pagination for list queries
#[derive(Debug, Clone, Copy)]
pub struct PageQuery {
    pub page: i64,
    pub limit: i64,
}

impl Default for PageQuery {
    fn default() -> Self {
        Self { page: 1, limit: 20 }
    }
}

impl PageQuery {
    pub fn new(page: i64, limit: i64) -> Self {
        Self {
            page: page.max(1),
            limit: limit.clamp(1, 100),
        }
    }

    /// Row offset for the SQL query
    pub fn offset(&self) -> i64 {
        (self.page - 1) * self.limit
    }
}

/// A page of rows plus the unpaged total
#[derive(Debug, Clone)]
pub struct Paged<T> {
    pub items: Vec<T>,
    pub total: i64,
}

// ============================================================================
// Profile Repository
// ============================================================================

#[async_trait]
pub trait ProfileRepository: Send + Sync {
    /// Find profile by account ID
    async fn find_by_id(&self, user_id: Snowflake) -> RepoResult<Option<UserProfile>>;

    /// Find profile by email
    async fn find_by_email(&self, email: &str) -> RepoResult<Option<UserProfile>>;

    /// Check if email is already taken
    async fn email_exists(&self, email: &str) -> RepoResult<bool>;

    /// Create an influencer account: profile row plus influencer row, atomically
    async fn create_influencer_account(
        &self,
        profile: &UserProfile,
        influencer: &Influencer,
        password_hash: &str,
    ) -> RepoResult<()>;

    /// Create a company account: profile row plus company row, atomically
    async fn create_company_account(
        &self,
        profile: &UserProfile,
        company: &Company,
        password_hash: &str,
    ) -> RepoResult<()>;

    /// Update the mutable profile fields (phone)
    async fn update(&self, profile: &UserProfile) -> RepoResult<()>;

    /// Get password hash for authentication
    async fn get_password_hash(&self, user_id: Snowflake) -> RepoResult<Option<String>>;

    /// Update password hash
    async fn update_password(&self, user_id: Snowflake, password_hash: &str) -> RepoResult<()>;
}

// ============================================================================
// Influencer Repository
// ============================================================================

#[async_trait]
pub trait InfluencerRepository: Send + Sync {
    /// Find influencer profile by owner account
    async fn find_by_user(&self, user_id: Snowflake) -> RepoResult<Option<Influencer>>;

    /// List approved, non-suspended influencers for the public catalog
    async fn list_public(&self, page: PageQuery) -> RepoResult<Paged<Influencer>>;

    /// Update the self-service editable fields
    async fn update(&self, influencer: &Influencer) -> RepoResult<()>;
}

// ============================================================================
// Company Repository
// ============================================================================

#[async_trait]
pub trait CompanyRepository: Send + Sync {
    /// Find company profile by owner account
    async fn find_by_user(&self, user_id: Snowflake) -> RepoResult<Option<Company>>;

    /// Update the self-service editable fields
    async fn update(&self, company: &Company) -> RepoResult<()>;
}

// ============================================================================
// Task Repository
// ============================================================================

#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Find task by ID
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Task>>;

    /// List open tasks for the public catalog
    async fn list_open(&self, page: PageQuery) -> RepoResult<Paged<Task>>;

    /// List all tasks posted by a company
    async fn list_by_company(&self, company_id: Snowflake) -> RepoResult<Vec<Task>>;

    /// Create a new task
    async fn create(&self, task: &Task) -> RepoResult<()>;

    /// Update editable task fields (title, description, budget, deadline)
    async fn update(&self, task: &Task) -> RepoResult<()>;

    /// Move the task to a new lifecycle status
    async fn set_status(&self, id: Snowflake, status: TaskStatus) -> RepoResult<()>;
}

// ============================================================================
// Application Repository
// ============================================================================

/// Outcome of the transactional accept operation
#[derive(Debug, Clone)]
pub struct AcceptOutcome {
    pub application: TaskApplication,
    pub task: Task,
    /// True when the application was already accepted and nothing changed
    pub already_accepted: bool,
}

#[async_trait]
pub trait ApplicationRepository: Send + Sync {
    /// Find application by ID
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<TaskApplication>>;

    /// List applications on a task, newest first
    async fn find_by_task(&self, task_id: Snowflake) -> RepoResult<Vec<TaskApplication>>;

    /// List an influencer's applications, newest first
    async fn find_by_influencer(&self, influencer_id: Snowflake)
        -> RepoResult<Vec<TaskApplication>>;

    /// Insert a pending application and bump the task applicant counter,
    /// atomically. A duplicate (task, influencer) pair surfaces as
    /// [`DomainError::AlreadyApplied`]; a full or non-open task as
    /// [`DomainError::TaskFull`] / [`DomainError::TaskClosed`].
    async fn apply(&self, application: &TaskApplication) -> RepoResult<TaskApplication>;

    /// Accept one application in a single transaction: the target becomes
    /// `accepted`, every other pending application on the task becomes
    /// `refused`, and the task records the selection and moves to
    /// `in_progress`. Re-invoking on an already-accepted application is a
    /// no-op that reports `already_accepted`.
    async fn accept(&self, application_id: Snowflake) -> RepoResult<AcceptOutcome>;

    /// Move a pending application to `refused`
    async fn reject(&self, application_id: Snowflake) -> RepoResult<TaskApplication>;

    /// Move a pending application to `withdrawn` and release its applicant
    /// slot, atomically
    async fn withdraw(&self, application_id: Snowflake) -> RepoResult<TaskApplication>;
}

// ============================================================================
// Category Repository
// ============================================================================

#[async_trait]
pub trait CategoryRepository: Send + Sync {
    /// List active categories in sort order
    async fn list_active(&self) -> RepoResult<Vec<TaskCategory>>;
}

// ============================================================================
// Video Repository
// ============================================================================

/// Sort orders for the public video list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VideoSort {
    #[default]
    Newest,
    MostPlayed,
    MostLiked,
}

/// Filters for the public video list
#[derive(Debug, Clone, Default)]
pub struct VideoQuery {
    pub page: PageQuery,
    pub category: Option<String>,
    pub search: Option<String>,
    pub featured_only: bool,
    pub sort: VideoSort,
}

#[async_trait]
pub trait VideoRepository: Send + Sync {
    /// List published videos with filters
    async fn list(&self, query: &VideoQuery) -> RepoResult<Paged<Video>>;

    /// Find a published video by ID
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Video>>;

    /// The featured strip for the landing page
    async fn featured(&self, limit: i64) -> RepoResult<Vec<Video>>;
}

// ============================================================================
// Admin Repository
// ============================================================================

#[async_trait]
pub trait AdminRepository: Send + Sync {
    /// Append an audit log row
    async fn record_log(&self, log: &AdminLog) -> RepoResult<()>;

    /// Flip the influencer approval flag, writing the audit row in the
    /// same transaction
    async fn set_influencer_approval(
        &self,
        log: &AdminLog,
        influencer_id: Snowflake,
        approved: bool,
    ) -> RepoResult<()>;

    /// Flip the influencer verification badge, with the audit row in the
    /// same transaction
    async fn set_influencer_verification(
        &self,
        log: &AdminLog,
        influencer_id: Snowflake,
        verified: bool,
    ) -> RepoResult<()>;

    /// Flip the company verification badge, with the audit row in the
    /// same transaction
    async fn set_company_verification(
        &self,
        log: &AdminLog,
        company_id: Snowflake,
        verified: bool,
    ) -> RepoResult<()>;

    /// Hard delete a task and its applications, with the audit row in the
    /// same transaction. The only hard delete in the system.
    async fn delete_task(&self, log: &AdminLog, task_id: Snowflake) -> RepoResult<()>;

    /// Page through the audit log, newest first
    async fn list_logs(&self, page: PageQuery) -> RepoResult<Paged<AdminLog>>;

    /// Check a seeded permission grant
    async fn has_permission(&self, user_id: Snowflake, permission: &str) -> RepoResult<bool>;

    /// List permission grants for an admin account
    async fn list_permissions(&self, user_id: Snowflake) -> RepoResult<Vec<AdminPermission>>;

    /// Latest stats snapshot, if one has been computed
    async fn latest_stats(&self) -> RepoResult<Option<SystemStats>>;

    /// Recompute and persist a fresh stats snapshot
    async fn refresh_stats(&self) -> RepoResult<SystemStats>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_query_clamps() {
        let page = PageQuery::new(0, 500);
        assert_eq!(page.page, 1);
        assert_eq!(page.limit, 100);
        assert_eq!(page.offset(), 0);
    }

    #[test]
    fn test_page_query_offset() {
        let page = PageQuery::new(3, 20);
        assert_eq!(page.offset(), 40);
    }
}
