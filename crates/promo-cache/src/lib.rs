//! # promo-cache
//!
//! Redis caching layer for authentication sessions and verification codes.
//!
//! ## Features
//!
//! - **Connection Pool**: Managed Redis connection pool with deadpool
//! - **Session Storage**: Refresh token lifecycle with per-user revocation
//! - **Verification Codes**: One-time SMS/email codes with TTL, attempt
//!   budget, and resend throttling
//!
//! ## Example
//!
//! ```ignore
//! use promo_cache::{RedisPool, RedisPoolConfig, RefreshTokenStore, VerificationCodeStore};
//!
//! let pool = RedisPool::new(RedisPoolConfig::default())?;
//!
//! let tokens = RefreshTokenStore::new(pool.clone());
//! let codes = VerificationCodeStore::new(pool);
//! ```

pub mod pool;
pub mod session;
pub mod verification;

// Re-export pool types
pub use pool::{
    create_shared_pool, RedisPool, RedisPoolConfig, RedisPoolError, RedisResult, SharedRedisPool,
};

// Re-export session types
pub use session::{RefreshTokenData, RefreshTokenStore};

// Re-export verification types
pub use verification::{StoreOutcome, VerificationChannel, VerificationCodeStore, VerifyOutcome};
