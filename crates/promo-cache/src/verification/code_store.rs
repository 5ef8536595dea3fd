//! Verification code storage in Redis.
//!
//! Codes are generated and compared on the server only; the client never
//! sees the expected value. Each code expires after a short TTL, allows a
//! bounded number of attempts, and resends to the same target are
//! throttled.

use crate::pool::{RedisPool, RedisResult};
use serde::{Deserialize, Serialize};

/// Key prefix for stored codes
const CODE_PREFIX: &str = "verify_code:";

/// Key prefix for the resend throttle markers
const THROTTLE_PREFIX: &str = "verify_throttle:";

/// Default TTL for a code (5 minutes)
const DEFAULT_CODE_TTL: u64 = 300;

/// Default attempt budget per code
const DEFAULT_MAX_ATTEMPTS: u32 = 5;

/// Default minimum interval between sends to the same target
const DEFAULT_RESEND_INTERVAL: u64 = 60;

/// Delivery channel for a verification code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerificationChannel {
    Sms,
    Email,
}

impl VerificationChannel {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sms => "sms",
            Self::Email => "email",
        }
    }
}

/// Stored code state
#[derive(Debug, Clone, Serialize, Deserialize)]
struct StoredCode {
    code: String,
    attempts: u32,
    created_at: i64,
}

/// Outcome of storing a fresh code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreOutcome {
    /// Code stored; caller should dispatch it
    Stored,
    /// A code was sent too recently
    Throttled { retry_after_secs: i64 },
}

/// Outcome of checking a submitted code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerifyOutcome {
    /// Code matched and was consumed
    Verified,
    /// Code did not match; attempts remain
    Mismatch { attempts_left: u32 },
    /// No code outstanding (never sent, expired, or already consumed)
    Expired,
    /// Attempt budget exhausted; the code was invalidated
    TooManyAttempts,
}

/// Redis-backed store for one-time verification codes
#[derive(Clone)]
pub struct VerificationCodeStore {
    pool: RedisPool,
    ttl_seconds: u64,
    max_attempts: u32,
    resend_interval_secs: u64,
}

impl VerificationCodeStore {
    /// Create a store with default policy
    #[must_use]
    pub fn new(pool: RedisPool) -> Self {
        Self {
            pool,
            ttl_seconds: DEFAULT_CODE_TTL,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            resend_interval_secs: DEFAULT_RESEND_INTERVAL,
        }
    }

    /// Create a store with explicit policy values
    #[must_use]
    pub fn with_policy(
        pool: RedisPool,
        ttl_seconds: u64,
        max_attempts: u32,
        resend_interval_secs: u64,
    ) -> Self {
        Self {
            pool,
            ttl_seconds,
            max_attempts,
            resend_interval_secs,
        }
    }

    /// Configured code lifetime in seconds
    #[must_use]
    pub fn ttl_seconds(&self) -> u64 {
        self.ttl_seconds
    }

    fn code_key(channel: VerificationChannel, target: &str) -> String {
        format!("{CODE_PREFIX}{}:{target}", channel.as_str())
    }

    fn throttle_key(channel: VerificationChannel, target: &str) -> String {
        format!("{THROTTLE_PREFIX}{}:{target}", channel.as_str())
    }

    /// Store a fresh code for the target, unless a recent send is still
    /// inside the throttle window. Overwrites any outstanding code.
    pub async fn store_code(
        &self,
        channel: VerificationChannel,
        target: &str,
        code: &str,
    ) -> RedisResult<StoreOutcome> {
        let throttle_key = Self::throttle_key(channel, target);

        if let Some(remaining) = self.pool.ttl(&throttle_key).await? {
            if remaining > 0 {
                return Ok(StoreOutcome::Throttled {
                    retry_after_secs: remaining,
                });
            }
        }

        let stored = StoredCode {
            code: code.to_string(),
            attempts: 0,
            created_at: chrono::Utc::now().timestamp(),
        };

        let code_key = Self::code_key(channel, target);
        self.pool
            .set(&code_key, &stored, Some(self.ttl_seconds))
            .await?;
        self.pool
            .set(&throttle_key, &1u8, Some(self.resend_interval_secs))
            .await?;

        tracing::debug!(
            channel = channel.as_str(),
            target = %target,
            "Stored verification code"
        );

        Ok(StoreOutcome::Stored)
    }

    /// Check a submitted code against the stored one.
    ///
    /// The comparison is an exact string match; a code differing by
    /// whitespace does not verify. On success the code is consumed.
    pub async fn verify_code(
        &self,
        channel: VerificationChannel,
        target: &str,
        submitted: &str,
    ) -> RedisResult<VerifyOutcome> {
        let code_key = Self::code_key(channel, target);

        let Some(mut stored) = self.pool.get_value::<StoredCode>(&code_key).await? else {
            return Ok(VerifyOutcome::Expired);
        };

        if stored.code == submitted {
            self.pool.delete(&code_key).await?;
            tracing::debug!(
                channel = channel.as_str(),
                target = %target,
                "Verification code consumed"
            );
            return Ok(VerifyOutcome::Verified);
        }

        stored.attempts += 1;
        if stored.attempts >= self.max_attempts {
            self.pool.delete(&code_key).await?;
            tracing::warn!(
                channel = channel.as_str(),
                target = %target,
                "Verification code invalidated after too many attempts"
            );
            return Ok(VerifyOutcome::TooManyAttempts);
        }

        // Preserve the remaining TTL while bumping the attempt counter
        let remaining = self
            .pool
            .ttl(&code_key)
            .await?
            .filter(|t| *t > 0)
            .map_or(self.ttl_seconds, |t| t as u64);
        self.pool.set(&code_key, &stored, Some(remaining)).await?;

        Ok(VerifyOutcome::Mismatch {
            attempts_left: self.max_attempts - stored.attempts,
        })
    }

    /// Drop any outstanding code for the target
    pub async fn invalidate(
        &self,
        channel: VerificationChannel,
        target: &str,
    ) -> RedisResult<bool> {
        let code_key = Self::code_key(channel, target);
        self.pool.delete(&code_key).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_generation() {
        assert_eq!(
            VerificationCodeStore::code_key(VerificationChannel::Sms, "13800000000"),
            "verify_code:sms:13800000000"
        );
        assert_eq!(
            VerificationCodeStore::throttle_key(VerificationChannel::Email, "a@b.com"),
            "verify_throttle:email:a@b.com"
        );
    }

    #[test]
    fn test_channel_as_str() {
        assert_eq!(VerificationChannel::Sms.as_str(), "sms");
        assert_eq!(VerificationChannel::Email.as_str(), "email");
    }
}
