//! Admin surface database models

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for admin_logs table
#[derive(Debug, Clone, FromRow)]
pub struct AdminLogModel {
    pub id: i64,
    pub admin_id: i64,
    pub action: String,
    pub target_table: String,
    pub target_id: Option<i64>,
    pub detail: Option<serde_json::Value>,
    pub created_at: DateTime<Utc>,
}

/// Database model for admin_permissions table
#[derive(Debug, Clone, FromRow)]
pub struct AdminPermissionModel {
    pub user_id: i64,
    pub permission: String,
    pub granted_at: DateTime<Utc>,
}

/// Database model for system_stats snapshots
#[derive(Debug, Clone, FromRow)]
pub struct SystemStatsModel {
    pub total_users: i64,
    pub total_influencers: i64,
    pub total_companies: i64,
    pub open_tasks: i64,
    pub in_progress_tasks: i64,
    pub completed_tasks: i64,
    pub total_applications: i64,
    pub refreshed_at: DateTime<Utc>,
}
