//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output.
//! Snowflake IDs are serialized as strings for JavaScript compatibility.

use chrono::{DateTime, Utc};
use serde::Serialize;

// ============================================================================
// Common Response Types
// ============================================================================

/// Generic API response wrapper
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

/// Paginated response with offset pagination
#[derive(Debug, Serialize)]
pub struct PagedResponse<T> {
    pub data: Vec<T>,
    pub pagination: PaginationMeta,
}

impl<T> PagedResponse<T> {
    pub fn new(data: Vec<T>, page: i64, limit: i64, total: i64) -> Self {
        Self {
            data,
            pagination: PaginationMeta { page, limit, total },
        }
    }
}

/// Pagination metadata
#[derive(Debug, Serialize)]
pub struct PaginationMeta {
    pub page: i64,
    pub limit: i64,
    /// Total rows across all pages
    pub total: i64,
}

// ============================================================================
// Auth Responses
// ============================================================================

/// Authentication response with tokens
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
    pub expires_in: i64,
    pub user: CurrentUserResponse,
}

impl AuthResponse {
    pub fn new(
        access_token: String,
        refresh_token: String,
        expires_in: i64,
        user: CurrentUserResponse,
    ) -> Self {
        Self {
            access_token,
            refresh_token,
            token_type: "Bearer".to_string(),
            expires_in,
            user,
        }
    }
}

/// Current authenticated account (includes email and role)
#[derive(Debug, Clone, Serialize)]
pub struct CurrentUserResponse {
    pub id: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub user_type: String,
    pub created_at: DateTime<Utc>,
}

/// Current account plus its role row, for `GET /users/@me`
#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    #[serde(flatten)]
    pub user: CurrentUserResponse,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub influencer: Option<InfluencerResponse>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<CompanyResponse>,
}

// ============================================================================
// Influencer Responses
// ============================================================================

/// Influencer profile
#[derive(Debug, Clone, Serialize)]
pub struct InfluencerResponse {
    pub id: String,
    pub nickname: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tiktok_handle: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tiktok_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    pub categories: Vec<String>,
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hourly_rate: Option<i64>,
    pub experience_years: i32,
    pub is_verified: bool,
    pub is_approved: bool,
    pub status: String,
    pub follower_count: i64,
    pub rating: f64,
    pub rating_count: i32,
    pub created_at: DateTime<Utc>,
}

// ============================================================================
// Company Responses
// ============================================================================

/// Company profile
#[derive(Debug, Clone, Serialize)]
pub struct CompanyResponse {
    pub id: String,
    pub company_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<String>,
    pub is_verified: bool,
    pub created_at: DateTime<Utc>,
}

// ============================================================================
// Task Responses
// ============================================================================

/// Task detail
#[derive(Debug, Clone, Serialize)]
pub struct TaskResponse {
    pub id: String,
    pub company_id: String,
    pub title: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    pub status: String,
    pub budget_min: i64,
    pub budget_max: i64,
    pub max_applicants: i32,
    pub current_applicants: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected_influencer_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deadline: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// ============================================================================
// Application Responses
// ============================================================================

/// One application row
#[derive(Debug, Clone, Serialize)]
pub struct ApplicationResponse {
    pub id: String,
    pub task_id: String,
    pub influencer_id: String,
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proposed_rate: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Result of accepting an application: the accepted row plus the task
/// as it stands after the selection
#[derive(Debug, Serialize)]
pub struct AcceptResponse {
    pub application: ApplicationResponse,
    pub task: TaskResponse,
    /// True when the application had been accepted before this call
    pub already_accepted: bool,
}

// ============================================================================
// Catalog Responses
// ============================================================================

/// Task category
#[derive(Debug, Clone, Serialize)]
pub struct CategoryResponse {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub sort_order: i32,
}

/// Showcase video
#[derive(Debug, Clone, Serialize)]
pub struct VideoResponse {
    pub id: String,
    pub title: String,
    pub creator_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_url: Option<String>,
    pub video_url: String,
    pub play_count: i64,
    pub like_count: i64,
    pub featured: bool,
    pub created_at: DateTime<Utc>,
}

// ============================================================================
// Verification Responses
// ============================================================================

/// Acknowledgement that a code was dispatched
#[derive(Debug, Serialize)]
pub struct CodeSentResponse {
    pub target: String,
    pub channel: String,
    pub expires_in_secs: u64,
}

/// Result of a code confirmation
#[derive(Debug, Serialize)]
pub struct CodeConfirmedResponse {
    pub verified: bool,
}

// ============================================================================
// Media Responses
// ============================================================================

/// Hosted URL after a successful image upload
#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub url: String,
}

// ============================================================================
// Admin Responses
// ============================================================================

/// One admin audit log row
#[derive(Debug, Clone, Serialize)]
pub struct AdminLogResponse {
    pub id: String,
    pub admin_id: String,
    pub action: String,
    pub target_table: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<serde_json::Value>,
    pub created_at: DateTime<Utc>,
}

/// Platform-wide aggregate counts
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    pub total_users: i64,
    pub total_influencers: i64,
    pub total_companies: i64,
    pub open_tasks: i64,
    pub in_progress_tasks: i64,
    pub completed_tasks: i64,
    pub total_applications: i64,
    pub refreshed_at: DateTime<Utc>,
}

// ============================================================================
// Health Responses
// ============================================================================

/// Liveness response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

impl HealthResponse {
    /// Liveness payload with the crate version
    #[must_use]
    pub fn healthy() -> Self {
        Self {
            status: "ok".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

/// Per-dependency readiness checks
#[derive(Debug, Serialize)]
pub struct HealthChecks {
    pub database: bool,
    pub redis: bool,
}

/// Readiness response
#[derive(Debug, Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub checks: HealthChecks,
}

impl ReadinessResponse {
    /// Build the readiness payload from dependency checks
    #[must_use]
    pub fn ready(database: bool, redis: bool) -> Self {
        let status = if database && redis { "ready" } else { "degraded" };
        Self {
            status: status.to_string(),
            checks: HealthChecks { database, redis },
        }
    }
}
