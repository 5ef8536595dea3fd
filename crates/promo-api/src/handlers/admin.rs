//! Admin handlers
//!
//! Moderation surface. Every mutation is written together with an audit
//! log row in one transaction by the service layer.

use axum::{
    extract::{Path, State},
    Json,
};
use promo_service::{AdminLogResponse, AdminService, PagedResponse, StatsResponse};

use crate::extractors::{AuthUser, Pagination, TaskIdPath, UserIdPath};
use crate::response::{ApiResult, NoContent};
use crate::state::AppState;

/// Latest system stats snapshot
///
/// GET /admin/stats
pub async fn get_stats(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<StatsResponse>> {
    let service = AdminService::new(state.service_context());
    let response = service.stats(auth.user_id, auth.role).await?;
    Ok(Json(response))
}

/// Recompute the system stats snapshot
///
/// POST /admin/stats/refresh
pub async fn refresh_stats(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<StatsResponse>> {
    let service = AdminService::new(state.service_context());
    let response = service.refresh_stats(auth.user_id, auth.role).await?;
    Ok(Json(response))
}

/// Paged admin action log, newest first
///
/// GET /admin/logs
pub async fn list_logs(
    State(state): State<AppState>,
    auth: AuthUser,
    Pagination(page): Pagination,
) -> ApiResult<Json<PagedResponse<AdminLogResponse>>> {
    let service = AdminService::new(state.service_context());
    let response = service.list_logs(auth.user_id, auth.role, page).await?;
    Ok(Json(response))
}

/// Approval flag body
#[derive(Debug, serde::Deserialize)]
pub struct ApprovalBody {
    pub approved: bool,
}

/// Verification flag body
#[derive(Debug, serde::Deserialize)]
pub struct VerificationBody {
    pub verified: bool,
}

/// Set or clear an influencer's approval flag
///
/// POST /admin/influencers/{user_id}/approve
pub async fn set_influencer_approval(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(path): Path<UserIdPath>,
    Json(body): Json<ApprovalBody>,
) -> ApiResult<NoContent> {
    let influencer_id = path.user_id()?;
    let service = AdminService::new(state.service_context());
    service
        .set_influencer_approval(auth.user_id, auth.role, influencer_id, body.approved)
        .await?;
    Ok(NoContent)
}

/// Set or clear an influencer's verification flag
///
/// POST /admin/influencers/{user_id}/verify
pub async fn set_influencer_verification(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(path): Path<UserIdPath>,
    Json(body): Json<VerificationBody>,
) -> ApiResult<NoContent> {
    let influencer_id = path.user_id()?;
    let service = AdminService::new(state.service_context());
    service
        .set_influencer_verification(auth.user_id, auth.role, influencer_id, body.verified)
        .await?;
    Ok(NoContent)
}

/// Set or clear a company's verification flag
///
/// POST /admin/companies/{user_id}/verify
pub async fn set_company_verification(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(path): Path<UserIdPath>,
    Json(body): Json<VerificationBody>,
) -> ApiResult<NoContent> {
    let company_id = path.user_id()?;
    let service = AdminService::new(state.service_context());
    service
        .set_company_verification(auth.user_id, auth.role, company_id, body.verified)
        .await?;
    Ok(NoContent)
}

/// Hard-delete a task and its applications
///
/// DELETE /admin/tasks/{task_id}
pub async fn delete_task(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(path): Path<TaskIdPath>,
) -> ApiResult<NoContent> {
    let task_id = path.task_id()?;
    let service = AdminService::new(state.service_context());
    service.delete_task(auth.user_id, auth.role, task_id).await?;
    Ok(NoContent)
}
