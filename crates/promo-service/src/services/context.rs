//! Service context - dependency container for services
//!
//! Holds all repositories, cache stores, outbound gateways, and the other
//! dependencies needed by services.

use std::sync::Arc;

use promo_cache::{RefreshTokenStore, SharedRedisPool, VerificationCodeStore};
use promo_common::auth::JwtService;
use promo_common::{ImageHostConfig, VerificationConfig};
use promo_core::traits::{
    AdminRepository, ApplicationRepository, CategoryRepository, CompanyRepository,
    InfluencerRepository, ProfileRepository, TaskRepository, VideoRepository,
};
use promo_core::SnowflakeGenerator;
use promo_db::PgPool;

use crate::gateways::{EmailGateway, ImageHostGateway, SmsGateway};

/// Service context containing all dependencies
///
/// This is the main dependency container that gets passed to all services.
/// It provides access to:
/// - Database repositories
/// - Redis cache stores (refresh tokens, verification codes)
/// - Outbound gateways (SMS, email, image host)
/// - JWT service for authentication
/// - Snowflake generator for ID generation
#[derive(Clone)]
pub struct ServiceContext {
    // Database pool
    pool: PgPool,

    // Redis pool
    redis_pool: SharedRedisPool,

    // Repositories
    profile_repo: Arc<dyn ProfileRepository>,
    influencer_repo: Arc<dyn InfluencerRepository>,
    company_repo: Arc<dyn CompanyRepository>,
    task_repo: Arc<dyn TaskRepository>,
    application_repo: Arc<dyn ApplicationRepository>,
    category_repo: Arc<dyn CategoryRepository>,
    video_repo: Arc<dyn VideoRepository>,
    admin_repo: Arc<dyn AdminRepository>,

    // Cache stores
    refresh_token_store: RefreshTokenStore,
    verification_code_store: VerificationCodeStore,

    // Outbound gateways
    sms_gateway: Arc<dyn SmsGateway>,
    email_gateway: Arc<dyn EmailGateway>,
    image_host_gateway: Arc<dyn ImageHostGateway>,

    // Services
    jwt_service: Arc<JwtService>,
    snowflake_generator: Arc<SnowflakeGenerator>,

    // Upload policy
    max_upload_bytes: u64,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        pool: PgPool,
        redis_pool: SharedRedisPool,
        verification: &VerificationConfig,
        image_host: &ImageHostConfig,
        profile_repo: Arc<dyn ProfileRepository>,
        influencer_repo: Arc<dyn InfluencerRepository>,
        company_repo: Arc<dyn CompanyRepository>,
        task_repo: Arc<dyn TaskRepository>,
        application_repo: Arc<dyn ApplicationRepository>,
        category_repo: Arc<dyn CategoryRepository>,
        video_repo: Arc<dyn VideoRepository>,
        admin_repo: Arc<dyn AdminRepository>,
        sms_gateway: Arc<dyn SmsGateway>,
        email_gateway: Arc<dyn EmailGateway>,
        image_host_gateway: Arc<dyn ImageHostGateway>,
        jwt_service: Arc<JwtService>,
        snowflake_generator: Arc<SnowflakeGenerator>,
    ) -> Self {
        // Clone the inner RedisPool from the Arc
        let inner_pool = (*redis_pool).clone();
        let refresh_token_store = RefreshTokenStore::new(inner_pool.clone());
        let verification_code_store = VerificationCodeStore::with_policy(
            inner_pool,
            verification.code_ttl_secs,
            verification.max_attempts,
            verification.resend_interval_secs,
        );

        Self {
            pool,
            redis_pool,
            profile_repo,
            influencer_repo,
            company_repo,
            task_repo,
            application_repo,
            category_repo,
            video_repo,
            admin_repo,
            refresh_token_store,
            verification_code_store,
            sms_gateway,
            email_gateway,
            image_host_gateway,
            jwt_service,
            snowflake_generator,
            max_upload_bytes: image_host.max_file_size_bytes(),
        }
    }

    // === Pools ===

    /// Get the PostgreSQL connection pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Get the Redis connection pool
    pub fn redis_pool(&self) -> &SharedRedisPool {
        &self.redis_pool
    }

    // === Repositories ===

    /// Get the profile repository
    pub fn profile_repo(&self) -> &dyn ProfileRepository {
        self.profile_repo.as_ref()
    }

    /// Get the influencer repository
    pub fn influencer_repo(&self) -> &dyn InfluencerRepository {
        self.influencer_repo.as_ref()
    }

    /// Get the company repository
    pub fn company_repo(&self) -> &dyn CompanyRepository {
        self.company_repo.as_ref()
    }

    /// Get the task repository
    pub fn task_repo(&self) -> &dyn TaskRepository {
        self.task_repo.as_ref()
    }

    /// Get the application repository
    pub fn application_repo(&self) -> &dyn ApplicationRepository {
        self.application_repo.as_ref()
    }

    /// Get the category repository
    pub fn category_repo(&self) -> &dyn CategoryRepository {
        self.category_repo.as_ref()
    }

    /// Get the video repository
    pub fn video_repo(&self) -> &dyn VideoRepository {
        self.video_repo.as_ref()
    }

    /// Get the admin repository
    pub fn admin_repo(&self) -> &dyn AdminRepository {
        self.admin_repo.as_ref()
    }

    // === Cache Stores ===

    /// Get the refresh token store
    pub fn refresh_token_store(&self) -> &RefreshTokenStore {
        &self.refresh_token_store
    }

    /// Get the verification code store
    pub fn verification_code_store(&self) -> &VerificationCodeStore {
        &self.verification_code_store
    }

    // === Gateways ===

    /// Get the SMS gateway
    pub fn sms_gateway(&self) -> &dyn SmsGateway {
        self.sms_gateway.as_ref()
    }

    /// Get the email gateway
    pub fn email_gateway(&self) -> &dyn EmailGateway {
        self.email_gateway.as_ref()
    }

    /// Get the image host gateway
    pub fn image_host_gateway(&self) -> &dyn ImageHostGateway {
        self.image_host_gateway.as_ref()
    }

    // === Services ===

    /// Get the JWT service
    pub fn jwt_service(&self) -> &JwtService {
        self.jwt_service.as_ref()
    }

    /// Get the snowflake ID generator
    pub fn snowflake_generator(&self) -> &SnowflakeGenerator {
        self.snowflake_generator.as_ref()
    }

    /// Generate a new Snowflake ID
    pub fn generate_id(&self) -> promo_core::Snowflake {
        self.snowflake_generator.generate()
    }

    /// Upload size cap in bytes
    pub fn max_upload_bytes(&self) -> u64 {
        self.max_upload_bytes
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("pool", &"PgPool")
            .field("redis_pool", &"SharedRedisPool")
            .field("repositories", &"...")
            .field("cache_stores", &"...")
            .field("gateways", &"...")
            .finish()
    }
}

/// Builder for creating ServiceContext with custom configuration
pub struct ServiceContextBuilder {
    pool: Option<PgPool>,
    redis_pool: Option<SharedRedisPool>,
    verification: VerificationConfig,
    image_host: ImageHostConfig,
    profile_repo: Option<Arc<dyn ProfileRepository>>,
    influencer_repo: Option<Arc<dyn InfluencerRepository>>,
    company_repo: Option<Arc<dyn CompanyRepository>>,
    task_repo: Option<Arc<dyn TaskRepository>>,
    application_repo: Option<Arc<dyn ApplicationRepository>>,
    category_repo: Option<Arc<dyn CategoryRepository>>,
    video_repo: Option<Arc<dyn VideoRepository>>,
    admin_repo: Option<Arc<dyn AdminRepository>>,
    sms_gateway: Option<Arc<dyn SmsGateway>>,
    email_gateway: Option<Arc<dyn EmailGateway>>,
    image_host_gateway: Option<Arc<dyn ImageHostGateway>>,
    jwt_service: Option<Arc<JwtService>>,
    snowflake_generator: Option<Arc<SnowflakeGenerator>>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self {
            pool: None,
            redis_pool: None,
            verification: VerificationConfig::default(),
            image_host: ImageHostConfig::default(),
            profile_repo: None,
            influencer_repo: None,
            company_repo: None,
            task_repo: None,
            application_repo: None,
            category_repo: None,
            video_repo: None,
            admin_repo: None,
            sms_gateway: None,
            email_gateway: None,
            image_host_gateway: None,
            jwt_service: None,
            snowflake_generator: None,
        }
    }

    pub fn pool(mut self, pool: PgPool) -> Self {
        self.pool = Some(pool);
        self
    }

    pub fn redis_pool(mut self, redis_pool: SharedRedisPool) -> Self {
        self.redis_pool = Some(redis_pool);
        self
    }

    pub fn verification(mut self, config: VerificationConfig) -> Self {
        self.verification = config;
        self
    }

    pub fn image_host(mut self, config: ImageHostConfig) -> Self {
        self.image_host = config;
        self
    }

    pub fn profile_repo(mut self, repo: Arc<dyn ProfileRepository>) -> Self {
        self.profile_repo = Some(repo);
        self
    }

    pub fn influencer_repo(mut self, repo: Arc<dyn InfluencerRepository>) -> Self {
        self.influencer_repo = Some(repo);
        self
    }

    pub fn company_repo(mut self, repo: Arc<dyn CompanyRepository>) -> Self {
        self.company_repo = Some(repo);
        self
    }

    pub fn task_repo(mut self, repo: Arc<dyn TaskRepository>) -> Self {
        self.task_repo = Some(repo);
        self
    }

    pub fn application_repo(mut self, repo: Arc<dyn ApplicationRepository>) -> Self {
        self.application_repo = Some(repo);
        self
    }

    pub fn category_repo(mut self, repo: Arc<dyn CategoryRepository>) -> Self {
        self.category_repo = Some(repo);
        self
    }

    pub fn video_repo(mut self, repo: Arc<dyn VideoRepository>) -> Self {
        self.video_repo = Some(repo);
        self
    }

    pub fn admin_repo(mut self, repo: Arc<dyn AdminRepository>) -> Self {
        self.admin_repo = Some(repo);
        self
    }

    pub fn sms_gateway(mut self, gateway: Arc<dyn SmsGateway>) -> Self {
        self.sms_gateway = Some(gateway);
        self
    }

    pub fn email_gateway(mut self, gateway: Arc<dyn EmailGateway>) -> Self {
        self.email_gateway = Some(gateway);
        self
    }

    pub fn image_host_gateway(mut self, gateway: Arc<dyn ImageHostGateway>) -> Self {
        self.image_host_gateway = Some(gateway);
        self
    }

    pub fn jwt_service(mut self, service: Arc<JwtService>) -> Self {
        self.jwt_service = Some(service);
        self
    }

    pub fn snowflake_generator(mut self, generator: Arc<SnowflakeGenerator>) -> Self {
        self.snowflake_generator = Some(generator);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any required dependency is missing
    pub fn build(self) -> super::error::ServiceResult<ServiceContext> {
        use super::error::ServiceError;

        Ok(ServiceContext::new(
            self.pool
                .ok_or_else(|| ServiceError::validation("pool is required"))?,
            self.redis_pool
                .ok_or_else(|| ServiceError::validation("redis_pool is required"))?,
            &self.verification,
            &self.image_host,
            self.profile_repo
                .ok_or_else(|| ServiceError::validation("profile_repo is required"))?,
            self.influencer_repo
                .ok_or_else(|| ServiceError::validation("influencer_repo is required"))?,
            self.company_repo
                .ok_or_else(|| ServiceError::validation("company_repo is required"))?,
            self.task_repo
                .ok_or_else(|| ServiceError::validation("task_repo is required"))?,
            self.application_repo
                .ok_or_else(|| ServiceError::validation("application_repo is required"))?,
            self.category_repo
                .ok_or_else(|| ServiceError::validation("category_repo is required"))?,
            self.video_repo
                .ok_or_else(|| ServiceError::validation("video_repo is required"))?,
            self.admin_repo
                .ok_or_else(|| ServiceError::validation("admin_repo is required"))?,
            self.sms_gateway
                .ok_or_else(|| ServiceError::validation("sms_gateway is required"))?,
            self.email_gateway
                .ok_or_else(|| ServiceError::validation("email_gateway is required"))?,
            self.image_host_gateway
                .ok_or_else(|| ServiceError::validation("image_host_gateway is required"))?,
            self.jwt_service
                .ok_or_else(|| ServiceError::validation("jwt_service is required"))?,
            self.snowflake_generator
                .ok_or_else(|| ServiceError::validation("snowflake_generator is required"))?,
        ))
    }
}

impl Default for ServiceContextBuilder {
    fn default() -> Self {
        Self::new()
    }
}
