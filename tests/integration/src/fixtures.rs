//! Test fixtures and data generators
//!
//! Provides reusable test data for integration tests.

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
pub fn unique_suffix() -> u64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// Influencer sign-up request
#[derive(Debug, Serialize)]
pub struct RegisterInfluencerRequest {
    pub email: String,
    pub password: String,
    pub nickname: String,
    pub phone: Option<String>,
}

impl RegisterInfluencerRequest {
    pub fn unique() -> Self {
        let suffix = unique_suffix();
        Self {
            email: format!("influencer{suffix}@example.com"),
            password: "TestPass123!".to_string(),
            nickname: format!("creator{suffix}"),
            phone: None,
        }
    }
}

/// Company sign-up request
#[derive(Debug, Serialize)]
pub struct RegisterCompanyRequest {
    pub email: String,
    pub password: String,
    pub company_name: String,
    pub phone: Option<String>,
}

impl RegisterCompanyRequest {
    pub fn unique() -> Self {
        let suffix = unique_suffix();
        Self {
            email: format!("company{suffix}@example.com"),
            password: "TestPass123!".to_string(),
            company_name: format!("Test Brand {suffix}"),
            phone: None,
        }
    }
}

/// Login request
#[derive(Debug, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl LoginRequest {
    pub fn new(email: &str, password: &str) -> Self {
        Self {
            email: email.to_string(),
            password: password.to_string(),
        }
    }
}

/// Auth response
#[derive(Debug, Deserialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
    pub user: UserResponse,
}

/// Account payload inside auth responses
#[derive(Debug, Deserialize)]
pub struct UserResponse {
    pub id: String,
    pub email: String,
    pub user_type: String,
    pub created_at: String,
}

/// Create task request
#[derive(Debug, Serialize)]
pub struct CreateTaskRequest {
    pub title: String,
    pub description: String,
    pub category: Option<String>,
    pub budget_min: i64,
    pub budget_max: i64,
    pub max_applicants: i32,
    pub deadline: Option<String>,
}

impl CreateTaskRequest {
    pub fn unique() -> Self {
        let suffix = unique_suffix();
        Self {
            title: format!("Promo campaign {suffix}"),
            description: "Short-form video placement for a product launch".to_string(),
            category: Some("beauty".to_string()),
            budget_min: 100,
            budget_max: 500,
            max_applicants: 10,
            deadline: None,
        }
    }
}

/// Task response
#[derive(Debug, Deserialize)]
pub struct TaskResponse {
    pub id: String,
    pub company_id: String,
    pub title: String,
    pub status: String,
    pub max_applicants: i32,
    pub current_applicants: i32,
    pub selected_influencer_id: Option<String>,
}

/// Application request
#[derive(Debug, Serialize)]
pub struct ApplyRequest {
    pub proposed_rate: Option<i64>,
    pub message: Option<String>,
}

impl ApplyRequest {
    pub fn simple() -> Self {
        Self {
            proposed_rate: Some(150),
            message: Some("Happy to feature this in my next video".to_string()),
        }
    }
}

/// Application response
#[derive(Debug, Deserialize)]
pub struct ApplicationResponse {
    pub id: String,
    pub task_id: String,
    pub influencer_id: String,
    pub status: String,
}

/// Accept response
#[derive(Debug, Deserialize)]
pub struct AcceptResponse {
    pub application: ApplicationResponse,
    pub task: TaskResponse,
    pub already_accepted: bool,
}

/// Verification code send response
#[derive(Debug, Deserialize)]
pub struct CodeSentResponse {
    pub target: String,
    pub channel: String,
    pub expires_in_secs: u64,
}

/// Category response
#[derive(Debug, Deserialize)]
pub struct CategoryResponse {
    pub id: String,
    pub name: String,
    pub sort_order: i32,
}

/// Paged list envelope
#[derive(Debug, Deserialize)]
pub struct PagedResponse<T> {
    pub data: Vec<T>,
    pub pagination: PaginationMeta,
}

/// Pagination metadata
#[derive(Debug, Deserialize)]
pub struct PaginationMeta {
    pub page: i64,
    pub limit: i64,
    pub total: i64,
}
