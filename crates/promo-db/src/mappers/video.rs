//! Video entity <-> model mapper

use promo_core::entities::{Video, VideoStatus};
use promo_core::value_objects::Snowflake;

use crate::models::VideoModel;

/// Convert VideoModel to Video entity
impl From<VideoModel> for Video {
    fn from(model: VideoModel) -> Self {
        Video {
            id: Snowflake::new(model.id),
            title: model.title,
            creator_name: model.creator_name,
            category: model.category,
            cover_url: model.cover_url,
            video_url: model.video_url,
            play_count: model.play_count,
            like_count: model.like_count,
            featured: model.featured,
            // status is CHECK constrained at the schema level
            status: VideoStatus::parse(&model.status).unwrap_or(VideoStatus::Hidden),
            created_at: model.created_at,
        }
    }
}
