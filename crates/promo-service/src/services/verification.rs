//! Verification service
//!
//! Server-side verification codes: the code is generated here, stored in
//! Redis, and dispatched through the SMS or email gateway. The client never
//! sees the expected value.

use promo_cache::{StoreOutcome, VerificationChannel, VerifyOutcome};
use rand::Rng;
use tracing::{info, instrument, warn};

use crate::dto::{CodeConfirmedResponse, CodeSentResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Verification service
pub struct VerificationService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> VerificationService<'a> {
    /// Create a new VerificationService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Generate and dispatch an SMS verification code
    #[instrument(skip(self))]
    pub async fn send_sms_code(&self, phone: &str) -> ServiceResult<CodeSentResponse> {
        self.send(VerificationChannel::Sms, phone).await
    }

    /// Generate and dispatch an email verification code
    #[instrument(skip(self))]
    pub async fn send_email_code(&self, email: &str) -> ServiceResult<CodeSentResponse> {
        self.send(VerificationChannel::Email, email).await
    }

    /// Confirm a submitted code against the stored one. Exact string match;
    /// success consumes the code.
    #[instrument(skip(self, code))]
    pub async fn confirm(&self, target: &str, code: &str) -> ServiceResult<CodeConfirmedResponse> {
        let channel = infer_channel(target);

        let outcome = self
            .ctx
            .verification_code_store()
            .verify_code(channel, target, code)
            .await
            .map_err(|e| ServiceError::internal(e.to_string()))?;

        match outcome {
            VerifyOutcome::Verified => {
                info!(channel = channel.as_str(), "Verification code confirmed");
                Ok(CodeConfirmedResponse { verified: true })
            }
            VerifyOutcome::Mismatch { attempts_left } => Err(ServiceError::validation(format!(
                "Incorrect code, {attempts_left} attempts left"
            ))),
            VerifyOutcome::Expired => Err(ServiceError::validation(
                "No outstanding code for this target",
            )),
            VerifyOutcome::TooManyAttempts => {
                warn!(channel = channel.as_str(), "Verification attempts exhausted");
                Err(ServiceError::App(promo_common::AppError::RateLimitExceeded))
            }
        }
    }

    async fn send(
        &self,
        channel: VerificationChannel,
        target: &str,
    ) -> ServiceResult<CodeSentResponse> {
        let code = generate_code();

        let outcome = self
            .ctx
            .verification_code_store()
            .store_code(channel, target, &code)
            .await
            .map_err(|e| ServiceError::internal(e.to_string()))?;

        if let StoreOutcome::Throttled { retry_after_secs } = outcome {
            return Err(ServiceError::RateLimited { retry_after_secs });
        }

        // A failed gateway call drops the stored code so the next request
        // is not throttled against a code that was never delivered
        let sent = match channel {
            VerificationChannel::Sms => self.ctx.sms_gateway().send_code(target, &code).await,
            VerificationChannel::Email => self.ctx.email_gateway().send_code(target, &code).await,
        };

        if let Err(e) = sent {
            let _ = self
                .ctx
                .verification_code_store()
                .invalidate(channel, target)
                .await;
            return Err(ServiceError::from(e));
        }

        info!(channel = channel.as_str(), "Verification code dispatched");

        Ok(CodeSentResponse {
            target: target.to_string(),
            channel: channel.as_str().to_string(),
            expires_in_secs: self.ctx.verification_code_store().ttl_seconds(),
        })
    }
}

/// A target containing `@` is an email address, anything else a phone number
fn infer_channel(target: &str) -> VerificationChannel {
    if target.contains('@') {
        VerificationChannel::Email
    } else {
        VerificationChannel::Sms
    }
}

/// Random zero-padded 6-digit code
fn generate_code() -> String {
    let n: u32 = rand::thread_rng().gen_range(0..1_000_000);
    format!("{n:06}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_code_is_six_digits() {
        for _ in 0..100 {
            let code = generate_code();
            assert_eq!(code.len(), 6);
            assert!(code.chars().all(|c| c.is_ascii_digit()));
        }
    }

    #[test]
    fn test_infer_channel() {
        assert_eq!(infer_channel("user@example.com"), VerificationChannel::Email);
        assert_eq!(infer_channel("13800138000"), VerificationChannel::Sms);
    }
}
