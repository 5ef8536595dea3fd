//! Verification code handlers
//!
//! Server-generated SMS/email codes with Redis-backed storage.

use axum::{extract::State, Json};
use promo_service::{
    CodeConfirmedResponse, CodeSentResponse, ConfirmCodeRequest, SendEmailCodeRequest,
    SendSmsCodeRequest, VerificationService,
};

use crate::extractors::ValidatedJson;
use crate::response::ApiResult;
use crate::state::AppState;

/// Send an SMS verification code
///
/// POST /verification/sms
pub async fn send_sms_code(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<SendSmsCodeRequest>,
) -> ApiResult<Json<CodeSentResponse>> {
    let service = VerificationService::new(state.service_context());
    let response = service.send_sms_code(&request.phone).await?;
    Ok(Json(response))
}

/// Send an email verification code
///
/// POST /verification/email
pub async fn send_email_code(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<SendEmailCodeRequest>,
) -> ApiResult<Json<CodeSentResponse>> {
    let service = VerificationService::new(state.service_context());
    let response = service.send_email_code(&request.email).await?;
    Ok(Json(response))
}

/// Confirm a previously sent code. Exact match only; success consumes
/// the code.
///
/// POST /verification/confirm
pub async fn confirm_code(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<ConfirmCodeRequest>,
) -> ApiResult<Json<CodeConfirmedResponse>> {
    let service = VerificationService::new(state.service_context());
    let response = service.confirm(&request.target, &request.code).await?;
    Ok(Json(response))
}
