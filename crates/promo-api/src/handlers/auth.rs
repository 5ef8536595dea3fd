//! Authentication handlers
//!
//! Endpoints for registration, login, logout, and token refresh.

use axum::{extract::State, Json};
use promo_service::{
    AuthResponse, AuthService, LoginRequest, RefreshTokenRequest, RegisterCompanyRequest,
    RegisterInfluencerRequest,
};

use crate::extractors::{AuthUser, ValidatedJson};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// Register a new influencer account
///
/// POST /auth/register/influencer
pub async fn register_influencer(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<RegisterInfluencerRequest>,
) -> ApiResult<Created<Json<AuthResponse>>> {
    let service = AuthService::new(state.service_context());
    let response = service.register_influencer(request).await?;
    Ok(Created(Json(response)))
}

/// Register a new company account
///
/// POST /auth/register/company
pub async fn register_company(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<RegisterCompanyRequest>,
) -> ApiResult<Created<Json<AuthResponse>>> {
    let service = AuthService::new(state.service_context());
    let response = service.register_company(request).await?;
    Ok(Created(Json(response)))
}

/// Login with email and password
///
/// POST /auth/login
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<LoginRequest>,
) -> ApiResult<Json<AuthResponse>> {
    let service = AuthService::new(state.service_context());
    let response = service.login(request).await?;
    Ok(Json(response))
}

/// Refresh access token (rotates the refresh token)
///
/// POST /auth/refresh
pub async fn refresh_token(
    State(state): State<AppState>,
    Json(request): Json<RefreshTokenRequest>,
) -> ApiResult<Json<AuthResponse>> {
    let service = AuthService::new(state.service_context());
    let response = service.refresh_tokens(request).await?;
    Ok(Json(response))
}

/// Logout request body
#[derive(Debug, serde::Deserialize, Default)]
pub struct LogoutRequestBody {
    pub refresh_token: Option<String>,
}

/// Logout. With a refresh token in the body only that session is revoked,
/// otherwise all sessions of the account are.
///
/// POST /auth/logout
pub async fn logout(
    State(state): State<AppState>,
    auth: AuthUser,
    body: Option<Json<LogoutRequestBody>>,
) -> ApiResult<NoContent> {
    let service = AuthService::new(state.service_context());
    let refresh_token = body.and_then(|b| b.0.refresh_token);
    service.logout(auth.user_id, refresh_token).await?;
    Ok(NoContent)
}
