//! Route definitions
//!
//! All API routes organized by domain and mounted under /api/v1.

use axum::{
    routing::{delete, get, patch, post, put},
    Router,
};

use crate::handlers::{
    admin, applications, auth, catalog, companies, health, influencers, tasks, uploads, users,
    verification,
};
use crate::state::AppState;

/// Create the main API router with all routes (excluding health for separate middleware handling)
pub fn create_router() -> Router<AppState> {
    Router::new().nest("/api/v1", api_v1_routes())
}

/// Health check routes (exported separately to bypass rate limiting)
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// API v1 routes
fn api_v1_routes() -> Router<AppState> {
    Router::new()
        .merge(auth_routes())
        .merge(user_routes())
        .merge(influencer_routes())
        .merge(company_routes())
        .merge(task_routes())
        .merge(application_routes())
        .merge(catalog_routes())
        .merge(verification_routes())
        .merge(upload_routes())
        .merge(admin_routes())
}

/// Authentication routes
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/register/influencer", post(auth::register_influencer))
        .route("/auth/register/company", post(auth::register_company))
        .route("/auth/login", post(auth::login))
        .route("/auth/refresh", post(auth::refresh_token))
        .route("/auth/logout", post(auth::logout))
}

/// Account profile routes
fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users/@me", get(users::get_current_user))
        .route("/users/@me", patch(users::update_current_user))
        .route("/users/@me/password", put(users::change_password))
}

/// Influencer routes (own profile plus the public directory)
fn influencer_routes() -> Router<AppState> {
    Router::new()
        .route("/influencers", get(influencers::list_influencers))
        .route("/influencers/@me", get(influencers::get_own_profile))
        .route("/influencers/@me", patch(influencers::update_own_profile))
        .route("/influencers/:user_id", get(influencers::get_influencer))
}

/// Company routes
fn company_routes() -> Router<AppState> {
    Router::new()
        .route("/companies/@me", get(companies::get_own_profile))
        .route("/companies/@me", patch(companies::update_own_profile))
        .route("/companies/@me/tasks", get(companies::list_own_tasks))
}

/// Task routes (public board plus company-side management)
fn task_routes() -> Router<AppState> {
    Router::new()
        .route("/tasks", get(tasks::list_open_tasks))
        .route("/tasks", post(tasks::create_task))
        .route("/tasks/:task_id", get(tasks::get_task))
        .route("/tasks/:task_id", patch(tasks::update_task))
        .route("/tasks/:task_id/cancel", post(tasks::cancel_task))
        .route("/tasks/:task_id/complete", post(tasks::complete_task))
        .route("/tasks/:task_id/applications", post(tasks::apply_to_task))
        .route("/tasks/:task_id/applications", get(tasks::list_task_applications))
}

/// Application routes
fn application_routes() -> Router<AppState> {
    Router::new()
        .route("/applications/@me", get(applications::list_own_applications))
        .route(
            "/applications/:application_id/accept",
            post(applications::accept_application),
        )
        .route(
            "/applications/:application_id/reject",
            post(applications::reject_application),
        )
        .route(
            "/applications/:application_id",
            delete(applications::withdraw_application),
        )
}

/// Public catalog routes
fn catalog_routes() -> Router<AppState> {
    Router::new()
        .route("/videos", get(catalog::list_videos))
        .route("/videos/featured", get(catalog::featured_videos))
        .route("/videos/:video_id", get(catalog::get_video))
        .route("/categories", get(catalog::list_categories))
}

/// Verification code routes
fn verification_routes() -> Router<AppState> {
    Router::new()
        .route("/verification/sms", post(verification::send_sms_code))
        .route("/verification/email", post(verification::send_email_code))
        .route("/verification/confirm", post(verification::confirm_code))
}

/// Upload routes
fn upload_routes() -> Router<AppState> {
    Router::new().route("/uploads/images", post(uploads::upload_image))
}

/// Admin routes
fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/admin/stats", get(admin::get_stats))
        .route("/admin/stats/refresh", post(admin::refresh_stats))
        .route("/admin/logs", get(admin::list_logs))
        .route(
            "/admin/influencers/:user_id/approve",
            post(admin::set_influencer_approval),
        )
        .route(
            "/admin/influencers/:user_id/verify",
            post(admin::set_influencer_verification),
        )
        .route(
            "/admin/companies/:user_id/verify",
            post(admin::set_company_verification),
        )
        .route("/admin/tasks/:task_id", delete(admin::delete_task))
}
