//! Media service
//!
//! Forwards authenticated image uploads (avatars, logos, ID photos) to the
//! third-party image host and returns the hosted URL.

use promo_core::Snowflake;
use tracing::{info, instrument};

use crate::dto::UploadResponse;
use crate::gateways::UploadedImage;

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

const ALLOWED_CONTENT_TYPES: &[&str] = &["image/jpeg", "image/png", "image/webp", "image/gif"];

/// Media service
pub struct MediaService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> MediaService<'a> {
    /// Create a new MediaService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Upload an image on behalf of the acting account
    #[instrument(skip(self, image), fields(file_name = %image.file_name, size = image.bytes.len()))]
    pub async fn upload_image(
        &self,
        user_id: Snowflake,
        image: UploadedImage,
    ) -> ServiceResult<UploadResponse> {
        if image.bytes.is_empty() {
            return Err(ServiceError::validation("Empty file"));
        }

        if !ALLOWED_CONTENT_TYPES.contains(&image.content_type.as_str()) {
            return Err(ServiceError::validation(format!(
                "Unsupported content type: {}",
                image.content_type
            )));
        }

        let limit = self.ctx.max_upload_bytes();
        if image.bytes.len() as u64 > limit {
            return Err(ServiceError::validation(format!(
                "File exceeds the {limit} byte upload limit"
            )));
        }

        let url = self.ctx.image_host_gateway().upload(image).await?;

        info!(user_id = %user_id, "Image uploaded");

        Ok(UploadResponse { url })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allowed_content_types() {
        assert!(ALLOWED_CONTENT_TYPES.contains(&"image/png"));
        assert!(!ALLOWED_CONTENT_TYPES.contains(&"application/pdf"));
    }
}
