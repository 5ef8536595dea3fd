//! Server setup and initialization
//!
//! Provides the main application builder and server runner.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use promo_cache::{RedisPool, RedisPoolConfig};
use promo_common::{AppConfig, AppError, JwtService};
use promo_core::SnowflakeGenerator;
use promo_db::{
    create_lazy_pool, PgAdminRepository, PgApplicationRepository, PgCategoryRepository,
    PgCompanyRepository, PgInfluencerRepository, PgProfileRepository, PgTaskRepository,
    PgVideoRepository,
};
use promo_service::gateways::{HttpEmailGateway, HttpImageHostGateway, SmsbaoGateway};
use promo_service::ServiceContextBuilder;
use tokio::net::TcpListener;
use tracing::{info, warn};

use crate::middleware::{apply_health_middleware, apply_middleware};
use crate::routes::{create_router, health_routes};
use crate::state::AppState;

/// Build the complete Axum application with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    let config = state.config().clone();
    let api = apply_middleware(
        create_router(),
        &config.rate_limit,
        &config.cors,
        config.app.env.is_production(),
    );
    let health = apply_health_middleware(health_routes());
    api.merge(health).with_state(state)
}

/// Initialize all dependencies and create AppState
pub fn create_app_state(config: AppConfig) -> Result<AppState, AppError> {
    // Create database pool. The pool is lazy: connections are made at query
    // time, so a missing or unreachable database still boots the server and
    // the public catalog degrades to its fallback data.
    let db_config = match &config.database {
        Some(db) => promo_db::DatabaseConfig {
            url: db.url.clone(),
            max_connections: db.max_connections,
            min_connections: db.min_connections,
            ..Default::default()
        },
        None => {
            warn!("No database configured; catalog endpoints serve fallback data only");
            promo_db::DatabaseConfig::default()
        }
    };
    let pool = create_lazy_pool(&db_config).map_err(|e| AppError::Database(e.to_string()))?;
    info!("PostgreSQL pool created");

    // Create Redis pool
    let redis_config = RedisPoolConfig::from(&config.redis);
    let redis_pool = RedisPool::new(redis_config).map_err(|e| AppError::Cache(e.to_string()))?;
    let shared_redis = Arc::new(redis_pool);

    // Create JWT service
    let jwt_service = Arc::new(JwtService::new(
        &config.jwt.secret,
        config.jwt.access_token_expiry,
        config.jwt.refresh_token_expiry,
    ));

    // Create Snowflake generator
    let snowflake_generator = Arc::new(SnowflakeGenerator::new(config.snowflake.worker_id));

    // Create repositories
    let profile_repo = Arc::new(PgProfileRepository::new(pool.clone()));
    let influencer_repo = Arc::new(PgInfluencerRepository::new(pool.clone()));
    let company_repo = Arc::new(PgCompanyRepository::new(pool.clone()));
    let task_repo = Arc::new(PgTaskRepository::new(pool.clone()));
    let application_repo = Arc::new(PgApplicationRepository::new(pool.clone()));
    let category_repo = Arc::new(PgCategoryRepository::new(pool.clone()));
    let video_repo = Arc::new(PgVideoRepository::new(pool.clone()));
    let admin_repo = Arc::new(PgAdminRepository::new(pool.clone()));

    // Create outbound gateways (credentials come from config; absent
    // credentials leave the feature responding 503)
    let sms_gateway = Arc::new(SmsbaoGateway::from_config(&config.sms)?);
    let email_gateway = Arc::new(HttpEmailGateway::from_config(&config.email)?);
    let image_host_gateway = Arc::new(HttpImageHostGateway::from_config(&config.image_host)?);

    // Build service context
    let service_context = ServiceContextBuilder::new()
        .pool(pool)
        .redis_pool(shared_redis)
        .verification(config.verification.clone())
        .image_host(config.image_host.clone())
        .profile_repo(profile_repo)
        .influencer_repo(influencer_repo)
        .company_repo(company_repo)
        .task_repo(task_repo)
        .application_repo(application_repo)
        .category_repo(category_repo)
        .video_repo(video_repo)
        .admin_repo(admin_repo)
        .sms_gateway(sms_gateway)
        .email_gateway(email_gateway)
        .image_host_gateway(image_host_gateway)
        .jwt_service(jwt_service)
        .snowflake_generator(snowflake_generator)
        .build()
        .map_err(|e| AppError::Config(e.to_string()))?;

    Ok(AppState::new(service_context, config))
}

/// Run the HTTP server
pub async fn run_server(app: Router, addr: SocketAddr) -> Result<(), AppError> {
    info!("Starting HTTP server on {}", addr);

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| AppError::Config(format!("Failed to bind to {}: {}", addr, e)))?;

    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::Config(format!("Server error: {}", e)))?;

    Ok(())
}

/// Run the complete server with configuration
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let addr = SocketAddr::from(([0, 0, 0, 0], config.api.port));

    // Create app state
    let state = create_app_state(config)?;

    // Build application
    let app = create_app(state);

    // Run server
    run_server(app, addr).await
}
