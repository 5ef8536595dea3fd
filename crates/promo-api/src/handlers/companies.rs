//! Company handlers
//!
//! Self-service company profile management and the company's own tasks.

use axum::{extract::State, Json};
use promo_service::{CompanyResponse, CompanyService, TaskResponse, TaskService, UpdateCompanyRequest};

use crate::extractors::{AuthUser, ValidatedJson};
use crate::response::ApiResult;
use crate::state::AppState;

/// Get the current account's company profile
///
/// GET /companies/@me
pub async fn get_own_profile(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<CompanyResponse>> {
    let service = CompanyService::new(state.service_context());
    let response = service.get_own(auth.user_id).await?;
    Ok(Json(response))
}

/// Update the current account's company profile
///
/// PATCH /companies/@me
pub async fn update_own_profile(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<UpdateCompanyRequest>,
) -> ApiResult<Json<CompanyResponse>> {
    let service = CompanyService::new(state.service_context());
    let response = service.update(auth.user_id, request).await?;
    Ok(Json(response))
}

/// List the company's own tasks in every status
///
/// GET /companies/@me/tasks
pub async fn list_own_tasks(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<Vec<TaskResponse>>> {
    let service = TaskService::new(state.service_context());
    let response = service.list_own(auth.user_id).await?;
    Ok(Json(response))
}
