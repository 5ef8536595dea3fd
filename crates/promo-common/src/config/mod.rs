//! Configuration structs

mod app_config;

pub use app_config::{
    AppConfig, AppSettings, ConfigError, CorsConfig, DatabaseConfig, EmailConfig, Environment,
    ImageHostConfig, JwtConfig, RateLimitConfig, RedisConfig, ServerConfig, SmsConfig,
    SnowflakeConfig, VerificationConfig,
};
