//! User profile database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for user_profiles table
#[derive(Debug, Clone, FromRow)]
pub struct ProfileModel {
    pub user_id: i64,
    pub email: String,
    pub phone: Option<String>,
    pub user_type: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
