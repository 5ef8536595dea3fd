//! Task handlers
//!
//! Public task board reads plus company-side task management.

use axum::{
    extract::{Path, State},
    Json,
};
use promo_service::{
    ApplicationResponse, ApplicationService, ApplyRequest, CatalogService, CreateTaskRequest,
    PagedResponse, TaskResponse, TaskService, UpdateTaskRequest,
};

use crate::extractors::{AuthUser, Pagination, TaskIdPath, ValidatedJson};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// Public open-task board
///
/// GET /tasks
pub async fn list_open_tasks(
    State(state): State<AppState>,
    Pagination(page): Pagination,
) -> ApiResult<Json<PagedResponse<TaskResponse>>> {
    let service = CatalogService::new(state.service_context());
    let response = service.list_open_tasks(page).await?;
    Ok(Json(response))
}

/// Public task detail
///
/// GET /tasks/{task_id}
pub async fn get_task(
    State(state): State<AppState>,
    Path(path): Path<TaskIdPath>,
) -> ApiResult<Json<TaskResponse>> {
    let task_id = path.task_id()?;
    let service = CatalogService::new(state.service_context());
    let response = service.get_task(task_id).await?;
    Ok(Json(response))
}

/// Post a new task (company accounts only)
///
/// POST /tasks
pub async fn create_task(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<CreateTaskRequest>,
) -> ApiResult<Created<Json<TaskResponse>>> {
    let service = TaskService::new(state.service_context());
    let response = service.create(auth.user_id, request).await?;
    Ok(Created(Json(response)))
}

/// Update an owned task
///
/// PATCH /tasks/{task_id}
pub async fn update_task(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(path): Path<TaskIdPath>,
    ValidatedJson(request): ValidatedJson<UpdateTaskRequest>,
) -> ApiResult<Json<TaskResponse>> {
    let task_id = path.task_id()?;
    let service = TaskService::new(state.service_context());
    let response = service.update(auth.user_id, task_id, request).await?;
    Ok(Json(response))
}

/// Cancel an owned task
///
/// POST /tasks/{task_id}/cancel
pub async fn cancel_task(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(path): Path<TaskIdPath>,
) -> ApiResult<Json<TaskResponse>> {
    let task_id = path.task_id()?;
    let service = TaskService::new(state.service_context());
    let response = service.cancel(auth.user_id, task_id).await?;
    Ok(Json(response))
}

/// Mark an in-progress owned task completed
///
/// POST /tasks/{task_id}/complete
pub async fn complete_task(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(path): Path<TaskIdPath>,
) -> ApiResult<Json<TaskResponse>> {
    let task_id = path.task_id()?;
    let service = TaskService::new(state.service_context());
    let response = service.complete(auth.user_id, task_id).await?;
    Ok(Json(response))
}

/// Apply to an open task (influencer accounts only)
///
/// POST /tasks/{task_id}/applications
pub async fn apply_to_task(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(path): Path<TaskIdPath>,
    ValidatedJson(request): ValidatedJson<ApplyRequest>,
) -> ApiResult<Created<Json<ApplicationResponse>>> {
    let task_id = path.task_id()?;
    let service = ApplicationService::new(state.service_context());
    let response = service.apply(auth.user_id, task_id, request).await?;
    Ok(Created(Json(response)))
}

/// List applications for a task (task owner or admin only)
///
/// GET /tasks/{task_id}/applications
pub async fn list_task_applications(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(path): Path<TaskIdPath>,
) -> ApiResult<Json<Vec<ApplicationResponse>>> {
    let task_id = path.task_id()?;
    let service = ApplicationService::new(state.service_context());
    let response = service
        .list_for_task(auth.user_id, auth.role, task_id)
        .await?;
    Ok(Json(response))
}
