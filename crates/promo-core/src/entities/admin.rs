//! Admin records - action log, permission grants, and aggregate stats

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::value_objects::Snowflake;

/// One audited admin action
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminLog {
    pub id: Snowflake,
    pub admin_id: Snowflake,
    pub action: String,
    pub target_table: String,
    pub target_id: Option<Snowflake>,
    pub detail: Option<serde_json::Value>,
    pub created_at: DateTime<Utc>,
}

impl AdminLog {
    pub fn new(
        id: Snowflake,
        admin_id: Snowflake,
        action: impl Into<String>,
        target_table: impl Into<String>,
        target_id: Option<Snowflake>,
    ) -> Self {
        Self {
            id,
            admin_id,
            action: action.into(),
            target_table: target_table.into(),
            target_id,
            detail: None,
            created_at: Utc::now(),
        }
    }

    pub fn with_detail(mut self, detail: serde_json::Value) -> Self {
        self.detail = Some(detail);
        self
    }
}

/// A permission string granted to an admin account, seeded at deployment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminPermission {
    pub user_id: Snowflake,
    pub permission: String,
    pub granted_at: DateTime<Utc>,
}

/// Well-known admin permission strings
pub mod permissions {
    pub const MANAGE_INFLUENCERS: &str = "manage_influencers";
    pub const MANAGE_COMPANIES: &str = "manage_companies";
    pub const MANAGE_TASKS: &str = "manage_tasks";
    pub const VIEW_STATS: &str = "view_stats";
}

/// Snapshot of platform-wide aggregate counts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SystemStats {
    pub total_users: i64,
    pub total_influencers: i64,
    pub total_companies: i64,
    pub open_tasks: i64,
    pub in_progress_tasks: i64,
    pub completed_tasks: i64,
    pub total_applications: i64,
    pub refreshed_at: DateTime<Utc>,
}

impl SystemStats {
    /// An all-zero snapshot for a fresh deployment
    pub fn empty() -> Self {
        Self {
            total_users: 0,
            total_influencers: 0,
            total_companies: 0,
            open_tasks: 0,
            in_progress_tasks: 0,
            completed_tasks: 0,
            total_applications: 0,
            refreshed_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_with_detail() {
        let log = AdminLog::new(
            Snowflake::new(1),
            Snowflake::new(2),
            "approve_influencer",
            "influencers",
            Some(Snowflake::new(3)),
        )
        .with_detail(serde_json::json!({"approved": true}));

        assert_eq!(log.action, "approve_influencer");
        assert!(log.detail.is_some());
    }
}
