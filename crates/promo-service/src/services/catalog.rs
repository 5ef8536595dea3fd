//! Catalog service - the public, unauthenticated read surface
//!
//! Videos, categories, influencers, and open tasks. The list endpoints
//! degrade to built-in fallback data with a successful response when the
//! database is unreachable, so the public pages never show a 500.

use promo_core::{DomainError, PageQuery, Snowflake, VideoQuery};
use tracing::{instrument, warn};

use crate::dto::{
    CategoryResponse, InfluencerResponse, PagedResponse, TaskResponse, VideoResponse,
};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Catalog service
pub struct CatalogService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> CatalogService<'a> {
    /// Create a new CatalogService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// List published videos with filters, falling back to the built-in
    /// list when the database is unreachable
    #[instrument(skip(self))]
    pub async fn list_videos(
        &self,
        query: VideoQuery,
    ) -> ServiceResult<PagedResponse<VideoResponse>> {
        match self.ctx.video_repo().list(&query).await {
            Ok(paged) => Ok(PagedResponse::new(
                paged.items.iter().map(VideoResponse::from).collect(),
                query.page.page,
                query.page.limit,
                paged.total,
            )),
            Err(DomainError::DatabaseError(reason)) => {
                warn!(%reason, "Video list degraded to fallback data");
                let items = fallback::videos();
                let total = items.len() as i64;
                Ok(PagedResponse::new(
                    items,
                    query.page.page,
                    query.page.limit,
                    total,
                ))
            }
            Err(e) => Err(ServiceError::from(e)),
        }
    }

    /// The featured strip for the landing page
    #[instrument(skip(self))]
    pub async fn featured_videos(&self, limit: i64) -> ServiceResult<Vec<VideoResponse>> {
        match self.ctx.video_repo().featured(limit).await {
            Ok(videos) => Ok(videos.iter().map(VideoResponse::from).collect()),
            Err(DomainError::DatabaseError(reason)) => {
                warn!(%reason, "Featured videos degraded to fallback data");
                Ok(fallback::videos()
                    .into_iter()
                    .filter(|v| v.featured)
                    .take(limit.max(0) as usize)
                    .collect())
            }
            Err(e) => Err(ServiceError::from(e)),
        }
    }

    /// Video detail; 404 when missing or hidden
    #[instrument(skip(self))]
    pub async fn get_video(&self, id: Snowflake) -> ServiceResult<VideoResponse> {
        let video = self
            .ctx
            .video_repo()
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Video", id.to_string()))?;
        Ok(VideoResponse::from(&video))
    }

    /// Active task categories, falling back to the built-in list when the
    /// database is unreachable
    #[instrument(skip(self))]
    pub async fn list_categories(&self) -> ServiceResult<Vec<CategoryResponse>> {
        match self.ctx.category_repo().list_active().await {
            Ok(categories) => Ok(categories.iter().map(CategoryResponse::from).collect()),
            Err(DomainError::DatabaseError(reason)) => {
                warn!(%reason, "Category list degraded to fallback data");
                Ok(fallback::categories())
            }
            Err(e) => Err(ServiceError::from(e)),
        }
    }

    /// Public influencer catalog (approved + active only), falling back to
    /// the built-in list when the database is unreachable
    #[instrument(skip(self))]
    pub async fn list_influencers(
        &self,
        page: PageQuery,
    ) -> ServiceResult<PagedResponse<InfluencerResponse>> {
        match self.ctx.influencer_repo().list_public(page).await {
            Ok(paged) => Ok(PagedResponse::new(
                paged.items.iter().map(InfluencerResponse::from).collect(),
                page.page,
                page.limit,
                paged.total,
            )),
            Err(DomainError::DatabaseError(reason)) => {
                warn!(%reason, "Influencer list degraded to fallback data");
                let items = fallback::influencers();
                let total = items.len() as i64;
                Ok(PagedResponse::new(items, page.page, page.limit, total))
            }
            Err(e) => Err(ServiceError::from(e)),
        }
    }

    /// Public influencer detail; only approved, listed profiles resolve
    #[instrument(skip(self))]
    pub async fn get_influencer(&self, user_id: Snowflake) -> ServiceResult<InfluencerResponse> {
        let influencer = self
            .ctx
            .influencer_repo()
            .find_by_user(user_id)
            .await?
            .filter(promo_core::Influencer::is_listed)
            .ok_or_else(|| ServiceError::not_found("Influencer", user_id.to_string()))?;
        Ok(InfluencerResponse::from(&influencer))
    }

    /// Open tasks for the public board
    #[instrument(skip(self))]
    pub async fn list_open_tasks(
        &self,
        page: PageQuery,
    ) -> ServiceResult<PagedResponse<TaskResponse>> {
        let paged = self.ctx.task_repo().list_open(page).await?;
        Ok(PagedResponse::new(
            paged.items.iter().map(TaskResponse::from).collect(),
            page.page,
            page.limit,
            paged.total,
        ))
    }

    /// Task detail
    #[instrument(skip(self))]
    pub async fn get_task(&self, id: Snowflake) -> ServiceResult<TaskResponse> {
        let task = self
            .ctx
            .task_repo()
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Task", id.to_string()))?;
        Ok(TaskResponse::from(&task))
    }
}

/// Built-in catalog data served when the database is down. Matches the
/// seeded category table so the public pages render something sensible.
mod fallback {
    use chrono::{TimeZone, Utc};

    use crate::dto::{CategoryResponse, InfluencerResponse, VideoResponse};

    const SEEDED_CATEGORIES: &[(&str, &str, i32)] = &[
        ("beauty", "Beauty and cosmetics promotion", 1),
        ("fashion", "Apparel and accessories", 2),
        ("food", "Restaurants and food products", 3),
        ("tech", "Gadgets and software", 4),
        ("fitness", "Sports and wellness", 5),
        ("lifestyle", "General lifestyle content", 6),
    ];

    pub fn categories() -> Vec<CategoryResponse> {
        SEEDED_CATEGORIES
            .iter()
            .map(|(name, description, sort_order)| CategoryResponse {
                id: sort_order.to_string(),
                name: (*name).to_string(),
                description: Some((*description).to_string()),
                sort_order: *sort_order,
            })
            .collect()
    }

    pub fn videos() -> Vec<VideoResponse> {
        let created_at = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).single();
        let created_at = created_at.unwrap_or_else(Utc::now);

        vec![
            VideoResponse {
                id: "1".to_string(),
                title: "Morning skincare routine".to_string(),
                creator_name: "glow_mia".to_string(),
                category: Some("beauty".to_string()),
                cover_url: None,
                video_url: "https://cdn.example.com/fallback/skincare.mp4".to_string(),
                play_count: 12_400,
                like_count: 980,
                featured: true,
                created_at,
            },
            VideoResponse {
                id: "2".to_string(),
                title: "Street food tour".to_string(),
                creator_name: "foodie_lu".to_string(),
                category: Some("food".to_string()),
                cover_url: None,
                video_url: "https://cdn.example.com/fallback/streetfood.mp4".to_string(),
                play_count: 8_700,
                like_count: 640,
                featured: true,
                created_at,
            },
            VideoResponse {
                id: "3".to_string(),
                title: "Budget phone unboxing".to_string(),
                creator_name: "techtalk_dan".to_string(),
                category: Some("tech".to_string()),
                cover_url: None,
                video_url: "https://cdn.example.com/fallback/unboxing.mp4".to_string(),
                play_count: 5_100,
                like_count: 320,
                featured: false,
                created_at,
            },
        ]
    }

    pub fn influencers() -> Vec<InfluencerResponse> {
        let created_at = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).single();
        let created_at = created_at.unwrap_or_else(Utc::now);

        vec![
            InfluencerResponse {
                id: "1".to_string(),
                nickname: "glow_mia".to_string(),
                tiktok_handle: Some("@glow_mia".to_string()),
                tiktok_url: None,
                bio: Some("Skincare and makeup tutorials".to_string()),
                location: Some("Shanghai".to_string()),
                categories: vec!["beauty".to_string()],
                tags: vec!["skincare".to_string(), "makeup".to_string()],
                hourly_rate: Some(200),
                experience_years: 3,
                is_verified: true,
                is_approved: true,
                status: "active".to_string(),
                follower_count: 120_000,
                rating: 4.8,
                rating_count: 35,
                created_at,
            },
            InfluencerResponse {
                id: "2".to_string(),
                nickname: "foodie_lu".to_string(),
                tiktok_handle: Some("@foodie_lu".to_string()),
                tiktok_url: None,
                bio: Some("Street food from every city".to_string()),
                location: Some("Chengdu".to_string()),
                categories: vec!["food".to_string()],
                tags: vec!["streetfood".to_string()],
                hourly_rate: Some(150),
                experience_years: 2,
                is_verified: false,
                is_approved: true,
                status: "active".to_string(),
                follower_count: 86_000,
                rating: 4.6,
                rating_count: 21,
                created_at,
            },
        ]
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_fallback_categories_match_seed_order() {
            let categories = categories();
            assert_eq!(categories.len(), 6);
            assert_eq!(categories[0].name, "beauty");
            assert_eq!(categories[5].sort_order, 6);
        }

        #[test]
        fn test_fallback_videos_have_featured_entries() {
            assert!(videos().iter().any(|v| v.featured));
        }
    }
}
