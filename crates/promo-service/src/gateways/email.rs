//! Transactional email gateway adapter
//!
//! JSON POST to the provider's send endpoint with a bearer API key from
//! config. No retries: a failed send surfaces immediately.

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use std::time::Duration;
use tracing::{instrument, warn};

use promo_common::{AppError, AppResult, EmailConfig};

use super::EmailGateway;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Reqwest-backed transactional email adapter
pub struct HttpEmailGateway {
    client: Client,
    endpoint: Option<Endpoint>,
    sender: String,
}

struct Endpoint {
    base_url: String,
    api_key: String,
}

#[derive(Serialize)]
struct SendMailBody<'a> {
    from: &'a str,
    to: &'a str,
    subject: &'a str,
    text: String,
}

impl HttpEmailGateway {
    /// Build the adapter from config. Missing credentials leave the gateway
    /// in a disabled state that reports `NotConfigured` on use.
    pub fn from_config(config: &EmailConfig) -> AppResult<Self> {
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
            sender: config.sender.clone(),
        })
    }
}

#[async_trait]
impl EmailGateway for HttpEmailGateway {
    #[instrument(skip(self, code))]
    async fn send_code(&self, email: &str, code: &str) -> AppResult<()> {
        let Some(endpoint) = &self.endpoint else {
            return Err(AppError::NotConfigured("email"));
        };

        let body = SendMailBody {
            from: &self.sender,
            to: email,
            subject: "Your verification code",
            text: format!("Your verification code is {code}. Valid for 5 minutes."),
        };

        let response = self
            .client
            .post(format!("{}/messages", endpoint.base_url))
            .bearer_auth(&endpoint.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| AppError::external(format!("email gateway: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(status = %status, body = %body, "Email gateway rejected send");
            return Err(AppError::external(format!(
                "email gateway returned {status}"
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_credentials_disables_gateway() {
        let config = EmailConfig {
            base_url: None,
            api_key: None,
            sender: "noreply@example.com".to_string(),
        };
        let gateway = HttpEmailGateway::from_config(&config).unwrap();
        assert!(gateway.endpoint.is_none());
    }
}
