//! Smsbao SMS gateway adapter
//!
//! The provider takes a GET request with the account name, the MD5-hashed
//! password, the destination number, and the message body. A response body
//! beginning with `0` means accepted; anything else is a provider error code.

use async_trait::async_trait;
use md5::{Digest, Md5};
use reqwest::Client;
use std::time::Duration;
use tracing::{instrument, warn};

use promo_common::{AppError, AppResult, SmsConfig};

use super::SmsGateway;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Reqwest-backed Smsbao adapter
pub struct SmsbaoGateway {
    client: Client,
    base_url: String,
    credentials: Option<Credentials>,
}

struct Credentials {
    username: String,
    password_md5: String,
}

impl SmsbaoGateway {
    /// Build the adapter from config. Missing credentials leave the gateway
    /// in a disabled state that reports `NotConfigured` on use.
    pub fn from_config(config: &SmsConfig) -> AppResult<Self> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(AppError::internal)?;

        let credentials = match (&config.username, &config.password) {
            (Some(username), Some(password)) => Some(Credentials {
                username: username.clone(),
                password_md5: md5_hex(password),
            }),
            _ => None,
        };

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
            credentials,
        })
    }
}

#[async_trait]
impl SmsGateway for SmsbaoGateway {
    #[instrument(skip(self, code))]
    async fn send_code(&self, phone: &str, code: &str) -> AppResult<()> {
        let Some(credentials) = &self.credentials else {
            return Err(AppError::NotConfigured("sms"));
        };

        let content = format!("Your verification code is {code}. Valid for 5 minutes.");

        let response = self
            .client
            .get(format!("{}/sms", self.base_url))
            .query(&[
                ("u", credentials.username.as_str()),
                ("p", credentials.password_md5.as_str()),
                ("m", phone),
                ("c", content.as_str()),
            ])
            .send()
            .await
            .map_err(|e| AppError::external(format!("sms gateway: {e}")))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| AppError::external(format!("sms gateway: {e}")))?;

        if !status.is_success() || !body.starts_with('0') {
            warn!(status = %status, body = %body, "SMS gateway rejected send");
            return Err(AppError::external(format!(
                "sms gateway returned {status}: {body}"
            )));
        }

        Ok(())
    }
}

/// Lowercase hex MD5 digest, as the provider expects
fn md5_hex(input: &str) -> String {
    let digest = Md5::digest(input.as_bytes());
    let mut out = String::with_capacity(digest.len() * 2);
    for byte in digest {
        use std::fmt::Write;
        let _ = write!(out, "{byte:02x}");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_md5_hex_known_vector() {
        assert_eq!(md5_hex("abc"), "900150983cd24fb0d6963f7d28e17f72");
    }

    #[test]
    fn test_missing_credentials_disables_gateway() {
        let config = SmsConfig {
            base_url: "https://api.smsbao.com".to_string(),
            username: None,
            password: None,
        };
        let gateway = SmsbaoGateway::from_config(&config).unwrap();
        assert!(gateway.credentials.is_none());
    }
}
