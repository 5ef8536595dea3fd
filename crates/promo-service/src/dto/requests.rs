//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize` and `Validate` for input validation.

use serde::Deserialize;
use validator::Validate;

// ============================================================================
// Auth Requests
// ============================================================================

/// Influencer sign-up request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterInfluencerRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 8, max = 128, message = "Password must be 8-128 characters"))]
    pub password: String,

    #[validate(length(min = 2, max = 50, message = "Nickname must be 2-50 characters"))]
    pub nickname: String,

    pub phone: Option<String>,
}

/// Company sign-up request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterCompanyRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 8, max = 128, message = "Password must be 8-128 characters"))]
    pub password: String,

    #[validate(length(min = 2, max = 100, message = "Company name must be 2-100 characters"))]
    pub company_name: String,

    pub phone: Option<String>,
}

/// Login request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    pub password: String,
}

/// Token refresh request
#[derive(Debug, Clone, Deserialize)]
pub struct RefreshTokenRequest {
    pub refresh_token: String,
}

/// Logout request (optional refresh token to revoke)
#[derive(Debug, Clone, Deserialize, Default)]
pub struct LogoutRequest {
    pub refresh_token: Option<String>,
}

// ============================================================================
// Profile Requests
// ============================================================================

/// Update the account profile (contact phone)
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateProfileRequest {
    #[validate(length(max = 20, message = "Phone must be at most 20 characters"))]
    pub phone: Option<String>,
}

/// Change password request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ChangePasswordRequest {
    pub current_password: String,

    #[validate(length(min = 8, max = 128, message = "Password must be 8-128 characters"))]
    pub new_password: String,
}

// ============================================================================
// Influencer Requests
// ============================================================================

/// Self-service influencer profile update
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateInfluencerRequest {
    #[validate(length(min = 2, max = 50, message = "Nickname must be 2-50 characters"))]
    pub nickname: Option<String>,

    #[validate(length(max = 50, message = "Real name must be at most 50 characters"))]
    pub real_name: Option<String>,

    #[validate(length(max = 100, message = "Handle must be at most 100 characters"))]
    pub tiktok_handle: Option<String>,

    #[validate(url(message = "Invalid URL"))]
    pub tiktok_url: Option<String>,

    #[validate(length(max = 1000, message = "Bio must be at most 1000 characters"))]
    pub bio: Option<String>,

    #[validate(length(max = 100, message = "Location must be at most 100 characters"))]
    pub location: Option<String>,

    pub categories: Option<Vec<String>>,

    pub tags: Option<Vec<String>>,

    #[validate(range(min = 0, message = "Rate must not be negative"))]
    pub hourly_rate: Option<i64>,

    #[validate(range(min = 0, max = 80, message = "Experience must be 0-80 years"))]
    pub experience_years: Option<i32>,
}

// ============================================================================
// Company Requests
// ============================================================================

/// Self-service company profile update
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateCompanyRequest {
    #[validate(length(min = 2, max = 100, message = "Company name must be 2-100 characters"))]
    pub company_name: Option<String>,

    #[validate(length(max = 50, message = "Contact name must be at most 50 characters"))]
    pub contact_name: Option<String>,

    #[validate(email(message = "Invalid email format"))]
    pub contact_email: Option<String>,

    #[validate(length(max = 20, message = "Phone must be at most 20 characters"))]
    pub contact_phone: Option<String>,

    #[validate(url(message = "Invalid URL"))]
    pub website: Option<String>,

    #[validate(length(max = 2000, message = "Description must be at most 2000 characters"))]
    pub description: Option<String>,

    #[validate(url(message = "Invalid URL"))]
    pub logo_url: Option<String>,
}

// ============================================================================
// Task Requests
// ============================================================================

/// Create task request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateTaskRequest {
    #[validate(length(min = 2, max = 200, message = "Title must be 2-200 characters"))]
    pub title: String,

    #[validate(length(min = 10, max = 5000, message = "Description must be 10-5000 characters"))]
    pub description: String,

    pub category: Option<String>,

    #[validate(range(min = 0, message = "Budget must not be negative"))]
    pub budget_min: i64,

    #[validate(range(min = 0, message = "Budget must not be negative"))]
    pub budget_max: i64,

    #[validate(range(min = 1, max = 1000, message = "Applicant cap must be 1-1000"))]
    pub max_applicants: i32,

    pub deadline: Option<chrono::DateTime<chrono::Utc>>,
}

/// Update task request (editable fields only)
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateTaskRequest {
    #[validate(length(min = 2, max = 200, message = "Title must be 2-200 characters"))]
    pub title: Option<String>,

    #[validate(length(min = 10, max = 5000, message = "Description must be 10-5000 characters"))]
    pub description: Option<String>,

    pub category: Option<String>,

    #[validate(range(min = 0, message = "Budget must not be negative"))]
    pub budget_min: Option<i64>,

    #[validate(range(min = 0, message = "Budget must not be negative"))]
    pub budget_max: Option<i64>,

    pub deadline: Option<chrono::DateTime<chrono::Utc>>,
}

// ============================================================================
// Application Requests
// ============================================================================

/// Apply to a task
#[derive(Debug, Clone, Deserialize, Validate, Default)]
pub struct ApplyRequest {
    #[validate(range(min = 0, message = "Rate must not be negative"))]
    pub proposed_rate: Option<i64>,

    #[validate(length(max = 2000, message = "Message must be at most 2000 characters"))]
    pub message: Option<String>,
}

// ============================================================================
// Verification Requests
// ============================================================================

/// Request an SMS verification code
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SendSmsCodeRequest {
    #[validate(length(min = 5, max = 20, message = "Phone must be 5-20 characters"))]
    pub phone: String,
}

/// Request an email verification code
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SendEmailCodeRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
}

/// Confirm a previously sent code. The channel is inferred from the target:
/// an address containing `@` is treated as email, anything else as a phone.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ConfirmCodeRequest {
    #[validate(length(min = 1, message = "Target is required"))]
    pub target: String,

    #[validate(length(min = 1, message = "Code is required"))]
    pub code: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[test]
    fn test_register_influencer_validation() {
        let request = RegisterInfluencerRequest {
            email: "not-an-email".to_string(),
            password: "short".to_string(),
            nickname: "x".to_string(),
            phone: None,
        };
        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("email"));
        assert!(errors.field_errors().contains_key("password"));
        assert!(errors.field_errors().contains_key("nickname"));
    }

    #[test]
    fn test_create_task_validation() {
        let request = CreateTaskRequest {
            title: "Unboxing short".to_string(),
            description: "30 second unboxing clip".to_string(),
            category: None,
            budget_min: 100,
            budget_max: 500,
            max_applicants: 3,
            deadline: None,
        };
        assert!(request.validate().is_ok());
    }
}
