//! Influencer entity <-> model mapper

use promo_core::entities::{Influencer, InfluencerStatus};
use promo_core::value_objects::Snowflake;

use crate::models::InfluencerModel;

/// Convert InfluencerModel to Influencer entity
impl From<InfluencerModel> for Influencer {
    fn from(model: InfluencerModel) -> Self {
        Influencer {
            user_id: Snowflake::new(model.user_id),
            nickname: model.nickname,
            real_name: model.real_name,
            tiktok_handle: model.tiktok_handle,
            tiktok_url: model.tiktok_url,
            bio: model.bio,
            location: model.location,
            categories: model.categories,
            tags: model.tags,
            hourly_rate: model.hourly_rate,
            experience_years: model.experience_years,
            is_verified: model.is_verified,
            is_approved: model.is_approved,
            // status is CHECK constrained at the schema level
            status: InfluencerStatus::parse(&model.status).unwrap_or(InfluencerStatus::Active),
            follower_count: model.follower_count,
            rating: model.rating,
            rating_count: model.rating_count,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
