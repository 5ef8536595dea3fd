//! Image host gateway adapter
//!
//! Forwards an uploaded file to the third-party image host as multipart
//! form data and returns the hosted URL from the response body.

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::{instrument, warn};

use promo_common::{AppError, AppResult, ImageHostConfig};

use super::{ImageHostGateway, UploadedImage};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Reqwest-backed image host adapter
pub struct HttpImageHostGateway {
    client: Client,
    endpoint: Option<Endpoint>,
    max_file_size_bytes: usize,
}

struct Endpoint {
    base_url: String,
    api_key: String,
}

#[derive(Deserialize)]
struct UploadResponse {
    url: String,
}

impl HttpImageHostGateway {
    /// Build the adapter from config. Missing credentials leave the gateway
    /// in a disabled state that reports `NotConfigured` on use.
    pub fn from_config(config: &ImageHostConfig) -> AppResult<Self> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(AppError::internal)?;

        let endpoint = match (&config.base_url, &config.api_key) {
            (Some(base_url), Some(api_key)) => Some(Endpoint {
                base_url: base_url.clone(),
                api_key: api_key.clone(),
            }),
            _ => None,
        };

        Ok(Self {
            client,
            endpoint,
            max_file_size_bytes: config.max_file_size_mb as usize * 1024 * 1024,
        })
    }
}

#[async_trait]
impl ImageHostGateway for HttpImageHostGateway {
    #[instrument(skip(self, image), fields(file_name = %image.file_name, size = image.bytes.len()))]
    async fn upload(&self, image: UploadedImage) -> AppResult<String> {
        let Some(endpoint) = &self.endpoint else {
            return Err(AppError::NotConfigured("image host"));
        };

        if image.bytes.len() > self.max_file_size_bytes {
            return Err(AppError::Validation(format!(
                "file exceeds the {} byte limit",
                self.max_file_size_bytes
            )));
        }

        let part = Part::bytes(image.bytes)
            .file_name(image.file_name)
            .mime_str(&image.content_type)
            .map_err(|e| AppError::Validation(format!("invalid content type: {e}")))?;
        let form = Form::new().part("file", part);

        let response = self
            .client
            .post(format!("{}/upload", endpoint.base_url))
            .bearer_auth(&endpoint.api_key)
            .multipart(form)
            .send()
            .await
            .map_err(|e| AppError::external(format!("image host: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(status = %status, body = %body, "Image host rejected upload");
            return Err(AppError::external(format!("image host returned {status}")));
        }

        let parsed: UploadResponse = response
            .json()
            .await
            .map_err(|e| AppError::external(format!("image host: {e}")))?;

        Ok(parsed.url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_credentials_disables_gateway() {
        let config = ImageHostConfig {
            base_url: None,
            api_key: None,
            max_file_size_mb: 5,
        };
        let gateway = HttpImageHostGateway::from_config(&config).unwrap();
        assert!(gateway.endpoint.is_none());
        assert_eq!(gateway.max_file_size_bytes, 5 * 1024 * 1024);
    }
}
