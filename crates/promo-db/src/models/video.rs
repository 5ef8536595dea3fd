//! Video database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for videos table
#[derive(Debug, Clone, FromRow)]
pub struct VideoModel {
    pub id: i64,
    pub title: String,
    pub creator_name: String,
    pub category: Option<String>,
    pub cover_url: Option<String>,
    pub video_url: String,
    pub play_count: i64,
    pub like_count: i64,
    pub featured: bool,
    pub status: String,
    pub created_at: DateTime<Utc>,
}
