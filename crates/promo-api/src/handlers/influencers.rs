//! Influencer handlers
//!
//! Self-service influencer profile management plus the public directory.

use axum::{
    extract::{Path, State},
    Json,
};
use promo_service::{
    CatalogService, InfluencerResponse, InfluencerService, PagedResponse, UpdateInfluencerRequest,
};

use crate::extractors::{AuthUser, Pagination, UserIdPath, ValidatedJson};
use crate::response::ApiResult;
use crate::state::AppState;

/// Get the current account's influencer profile
///
/// GET /influencers/@me
pub async fn get_own_profile(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<InfluencerResponse>> {
    let service = InfluencerService::new(state.service_context());
    let response = service.get_own(auth.user_id).await?;
    Ok(Json(response))
}

/// Update the current account's influencer profile
///
/// PATCH /influencers/@me
pub async fn update_own_profile(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<UpdateInfluencerRequest>,
) -> ApiResult<Json<InfluencerResponse>> {
    let service = InfluencerService::new(state.service_context());
    let response = service.update(auth.user_id, request).await?;
    Ok(Json(response))
}

/// Public influencer directory (approved and active only)
///
/// GET /influencers
pub async fn list_influencers(
    State(state): State<AppState>,
    Pagination(page): Pagination,
) -> ApiResult<Json<PagedResponse<InfluencerResponse>>> {
    let service = CatalogService::new(state.service_context());
    let response = service.list_influencers(page).await?;
    Ok(Json(response))
}

/// Public influencer detail
///
/// GET /influencers/{user_id}
pub async fn get_influencer(
    State(state): State<AppState>,
    Path(path): Path<UserIdPath>,
) -> ApiResult<Json<InfluencerResponse>> {
    let user_id = path.user_id()?;
    let service = CatalogService::new(state.service_context());
    let response = service.get_influencer(user_id).await?;
    Ok(Json(response))
}
