//! Task application database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for task_applications table
#[derive(Debug, Clone, FromRow)]
pub struct ApplicationModel {
    pub id: i64,
    pub task_id: i64,
    pub influencer_id: i64,
    pub status: String,
    pub proposed_rate: Option<i64>,
    pub message: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
