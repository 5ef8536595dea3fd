//! Application handlers
//!
//! Accept/reject on the company side, withdraw and own-list on the
//! influencer side.

use axum::{
    extract::{Path, State},
    Json,
};
use promo_service::{AcceptResponse, ApplicationResponse, ApplicationService};

use crate::extractors::{ApplicationIdPath, AuthUser};
use crate::response::ApiResult;
use crate::state::AppState;

/// List the influencer's own applications
///
/// GET /applications/@me
pub async fn list_own_applications(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<Vec<ApplicationResponse>>> {
    let service = ApplicationService::new(state.service_context());
    let response = service.list_own(auth.user_id).await?;
    Ok(Json(response))
}

/// Accept an application. Idempotent: re-accepting the already selected
/// application returns success with `already_accepted` set.
///
/// POST /applications/{application_id}/accept
pub async fn accept_application(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(path): Path<ApplicationIdPath>,
) -> ApiResult<Json<AcceptResponse>> {
    let application_id = path.application_id()?;
    let service = ApplicationService::new(state.service_context());
    let response = service.accept(auth.user_id, application_id).await?;
    Ok(Json(response))
}

/// Reject a pending application
///
/// POST /applications/{application_id}/reject
pub async fn reject_application(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(path): Path<ApplicationIdPath>,
) -> ApiResult<Json<ApplicationResponse>> {
    let application_id = path.application_id()?;
    let service = ApplicationService::new(state.service_context());
    let response = service.reject(auth.user_id, application_id).await?;
    Ok(Json(response))
}

/// Withdraw the influencer's own pending application
///
/// DELETE /applications/{application_id}
pub async fn withdraw_application(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(path): Path<ApplicationIdPath>,
) -> ApiResult<Json<ApplicationResponse>> {
    let application_id = path.application_id()?;
    let service = ApplicationService::new(state.service_context());
    let response = service.withdraw(auth.user_id, application_id).await?;
    Ok(Json(response))
}
