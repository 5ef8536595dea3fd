//! Account profile handlers
//!
//! Endpoints for the authenticated account's own profile.

use axum::{extract::State, Json};
use promo_service::{
    ChangePasswordRequest, CurrentUserResponse, ProfileResponse, ProfileService,
    UpdateProfileRequest,
};

use crate::extractors::{AuthUser, ValidatedJson};
use crate::response::{ApiResult, NoContent};
use crate::state::AppState;

/// Get the current account with its role row
///
/// GET /users/@me
pub async fn get_current_user(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<ProfileResponse>> {
    let service = ProfileService::new(state.service_context());
    let response = service.me(auth.user_id).await?;
    Ok(Json(response))
}

/// Update the current account profile
///
/// PATCH /users/@me
pub async fn update_current_user(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<UpdateProfileRequest>,
) -> ApiResult<Json<CurrentUserResponse>> {
    let service = ProfileService::new(state.service_context());
    let response = service.update(auth.user_id, request).await?;
    Ok(Json(response))
}

/// Change the account password. Revokes all refresh tokens.
///
/// PUT /users/@me/password
pub async fn change_password(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<ChangePasswordRequest>,
) -> ApiResult<NoContent> {
    let service = ProfileService::new(state.service_context());
    service.change_password(auth.user_id, request).await?;
    Ok(NoContent)
}
