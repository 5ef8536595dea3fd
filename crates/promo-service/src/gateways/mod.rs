//! Outbound gateway ports and their reqwest-backed adapters
//!
//! Services depend on the traits only, so tests can substitute fakes and a
//! deployment without credentials degrades to a typed "not configured" error
//! instead of a panic.

mod email;
mod image_host;
mod sms;

use async_trait::async_trait;
use promo_common::AppResult;

pub use email::HttpEmailGateway;
pub use image_host::HttpImageHostGateway;
pub use sms::SmsbaoGateway;

/// Outbound SMS delivery
#[async_trait]
pub trait SmsGateway: Send + Sync {
    /// Deliver a verification code to a phone number
    async fn send_code(&self, phone: &str, code: &str) -> AppResult<()>;
}

/// Outbound transactional email delivery
#[async_trait]
pub trait EmailGateway: Send + Sync {
    /// Deliver a verification code to an email address
    async fn send_code(&self, email: &str, code: &str) -> AppResult<()>;
}

/// An uploaded file ready to forward to the image host
#[derive(Debug, Clone)]
pub struct UploadedImage {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

/// Third-party image hosting
#[async_trait]
pub trait ImageHostGateway: Send + Sync {
    /// Forward an image and return the hosted URL
    async fn upload(&self, image: UploadedImage) -> AppResult<String>;
}
