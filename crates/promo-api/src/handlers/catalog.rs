//! Public catalog handlers
//!
//! Video showcase and task category endpoints. List endpoints degrade to
//! built-in fallback data when the database is unreachable.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use promo_core::{PageQuery, VideoQuery, VideoSort};
use promo_service::{CatalogService, CategoryResponse, PagedResponse, VideoResponse};
use serde::Deserialize;

use crate::extractors::VideoIdPath;
use crate::response::{ApiError, ApiResult};
use crate::state::AppState;

/// Number of videos in the home-page featured strip
const FEATURED_LIMIT: i64 = 8;

/// Query parameters for the video list
#[derive(Debug, Deserialize)]
pub struct VideoListParams {
    #[serde(default)]
    pub page: Option<i64>,
    #[serde(default)]
    pub limit: Option<i64>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub search: Option<String>,
    #[serde(default)]
    pub featured: Option<bool>,
    #[serde(default)]
    pub sort: Option<String>,
}

impl TryFrom<VideoListParams> for VideoQuery {
    type Error = ApiError;

    fn try_from(params: VideoListParams) -> Result<Self, Self::Error> {
        let defaults = PageQuery::default();
        let sort = match params.sort.as_deref() {
            None | Some("newest") => VideoSort::Newest,
            Some("most_played") => VideoSort::MostPlayed,
            Some("most_liked") => VideoSort::MostLiked,
            Some(other) => {
                return Err(ApiError::invalid_query(format!(
                    "Unknown sort '{other}', expected newest, most_played or most_liked"
                )))
            }
        };

        Ok(VideoQuery {
            page: PageQuery::new(
                params.page.unwrap_or(defaults.page),
                params.limit.unwrap_or(defaults.limit),
            ),
            category: params.category,
            search: params.search,
            featured_only: params.featured.unwrap_or(false),
            sort,
        })
    }
}

/// Public video list with filters
///
/// GET /videos
pub async fn list_videos(
    State(state): State<AppState>,
    Query(params): Query<VideoListParams>,
) -> ApiResult<Json<PagedResponse<VideoResponse>>> {
    let query = VideoQuery::try_from(params)?;
    let service = CatalogService::new(state.service_context());
    let response = service.list_videos(query).await?;
    Ok(Json(response))
}

/// Featured videos for the landing page
///
/// GET /videos/featured
pub async fn featured_videos(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<VideoResponse>>> {
    let service = CatalogService::new(state.service_context());
    let response = service.featured_videos(FEATURED_LIMIT).await?;
    Ok(Json(response))
}

/// Video detail
///
/// GET /videos/{video_id}
pub async fn get_video(
    State(state): State<AppState>,
    Path(path): Path<VideoIdPath>,
) -> ApiResult<Json<VideoResponse>> {
    let video_id = path.video_id()?;
    let service = CatalogService::new(state.service_context());
    let response = service.get_video(video_id).await?;
    Ok(Json(response))
}

/// Active task categories
///
/// GET /categories
pub async fn list_categories(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<CategoryResponse>>> {
    let service = CatalogService::new(state.service_context());
    let response = service.list_categories().await?;
    Ok(Json(response))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_video_params_defaults() {
        let params = VideoListParams {
            page: None,
            limit: None,
            category: None,
            search: None,
            featured: None,
            sort: None,
        };
        let query = VideoQuery::try_from(params).unwrap();
        assert_eq!(query.page.page, 1);
        assert!(!query.featured_only);
        assert_eq!(query.sort, VideoSort::Newest);
    }

    #[test]
    fn test_video_params_rejects_unknown_sort() {
        let params = VideoListParams {
            page: None,
            limit: None,
            category: None,
            search: None,
            featured: None,
            sort: Some("loudest".to_string()),
        };
        assert!(VideoQuery::try_from(params).is_err());
    }
}
