//! Influencer database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for influencers table
#[derive(Debug, Clone, FromRow)]
pub struct InfluencerModel {
    pub user_id: i64,
    pub nickname: String,
    pub real_name: Option<String>,
    pub tiktok_handle: Option<String>,
    pub tiktok_url: Option<String>,
    pub bio: Option<String>,
    pub location: Option<String>,
    pub categories: Vec<String>,
    pub tags: Vec<String>,
    pub hourly_rate: Option<i64>,
    pub experience_years: i32,
    pub is_verified: bool,
    pub is_approved: bool,
    pub status: String,
    pub follower_count: i64,
    pub rating: f64,
    pub rating_count: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
