//! Task database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for tasks table
#[derive(Debug, Clone, FromRow)]
pub struct TaskModel {
    pub id: i64,
    pub company_id: i64,
    pub title: String,
    pub description: String,
    pub category: Option<String>,
    pub status: String,
    pub budget_min: i64,
    pub budget_max: i64,
    pub max_applicants: i32,
    pub current_applicants: i32,
    pub selected_influencer_id: Option<i64>,
    pub advance_amount: Option<i64>,
    pub settlement_amount: Option<i64>,
    pub deadline: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
