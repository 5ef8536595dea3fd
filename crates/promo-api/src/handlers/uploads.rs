//! Upload handlers
//!
//! Multipart image upload forwarded to the third-party image host.

use axum::{
    extract::{Multipart, State},
    Json,
};
use promo_service::gateways::UploadedImage;
use promo_service::{MediaService, UploadResponse};

use crate::extractors::AuthUser;
use crate::response::{ApiError, ApiResult, Created};
use crate::state::AppState;

/// Upload an image and return the hosted URL
///
/// POST /uploads/images
pub async fn upload_image(
    State(state): State<AppState>,
    auth: AuthUser,
    mut multipart: Multipart,
) -> ApiResult<Created<Json<UploadResponse>>> {
    let image = extract_image(&mut multipart).await?;

    let service = MediaService::new(state.service_context());
    let response = service.upload_image(auth.user_id, image).await?;
    Ok(Created(Json(response)))
}

/// Pull the first file field out of the multipart body
async fn extract_image(multipart: &mut Multipart) -> Result<UploadedImage, ApiError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::invalid_body(e.to_string()))?
    {
        let Some(file_name) = field.file_name().map(ToString::to_string) else {
            continue;
        };
        let content_type = field
            .content_type()
            .map(ToString::to_string)
            .unwrap_or_else(|| "application/octet-stream".to_string());
        let bytes = field
            .bytes()
            .await
            .map_err(|e| ApiError::invalid_body(e.to_string()))?;

        return Ok(UploadedImage {
            file_name,
            content_type,
            bytes: bytes.to_vec(),
        });
    }

    Err(ApiError::invalid_body("Missing file field"))
}
