//! Task category database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for task_categories table
#[derive(Debug, Clone, FromRow)]
pub struct CategoryModel {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub sort_order: i32,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}
