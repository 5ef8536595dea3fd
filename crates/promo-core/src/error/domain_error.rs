//! Domain errors - error types for the domain layer

use thiserror::Error;

use crate::entities::ApplicationStatus;
use crate::value_objects::Snowflake;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("Profile not found: {0}")]
    ProfileNotFound(Snowflake),

    #[error("Influencer not found: {0}")]
    InfluencerNotFound(Snowflake),

    #[error("Company not found: {0}")]
    CompanyNotFound(Snowflake),

    #[error("Task not found: {0}")]
    TaskNotFound(Snowflake),

    #[error("Application not found: {0}")]
    ApplicationNotFound(Snowflake),

    #[error("Video not found: {0}")]
    VideoNotFound(Snowflake),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Invalid email format")]
    InvalidEmail,

    #[error("Password too weak: {0}")]
    WeakPassword(String),

    #[error("Invalid budget range: min {min} exceeds max {max}")]
    InvalidBudgetRange { min: i64, max: i64 },

    // =========================================================================
    // Authorization Errors
    // =========================================================================
    #[error("Missing permission: {0}")]
    MissingPermission(String),

    #[error("Not the task owner")]
    NotTaskOwner,

    #[error("Not the application owner")]
    NotApplicationOwner,

    #[error("Admin role required")]
    AdminRequired,

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("Email already in use")]
    EmailAlreadyExists,

    #[error("Already applied to this task")]
    AlreadyApplied,

    #[error("Task is not accepting applications")]
    TaskClosed,

    #[error("Task has reached its applicant limit")]
    TaskFull,

    #[error("Invalid application transition: {from:?} -> {to:?}")]
    InvalidTransition {
        from: ApplicationStatus,
        to: ApplicationStatus,
    },

    // =========================================================================
    // Business Rule Violations
    // =========================================================================
    #[error("Influencer profile is not approved for applications")]
    InfluencerNotApproved,

    #[error("Influencer profile is suspended")]
    InfluencerSuspended,

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Cache error: {0}")]
    CacheError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            // Not Found
            Self::ProfileNotFound(_) => "UNKNOWN_PROFILE",
            Self::InfluencerNotFound(_) => "UNKNOWN_INFLUENCER",
            Self::CompanyNotFound(_) => "UNKNOWN_COMPANY",
            Self::TaskNotFound(_) => "UNKNOWN_TASK",
            Self::ApplicationNotFound(_) => "UNKNOWN_APPLICATION",
            Self::VideoNotFound(_) => "UNKNOWN_VIDEO",

            // Validation
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::InvalidEmail => "INVALID_EMAIL",
            Self::WeakPassword(_) => "WEAK_PASSWORD",
            Self::InvalidBudgetRange { .. } => "INVALID_BUDGET_RANGE",

            // Authorization
            Self::MissingPermission(_) => "MISSING_PERMISSIONS",
            Self::NotTaskOwner => "NOT_TASK_OWNER",
            Self::NotApplicationOwner => "NOT_APPLICATION_OWNER",
            Self::AdminRequired => "ADMIN_REQUIRED",

            // Conflict
            Self::EmailAlreadyExists => "EMAIL_ALREADY_EXISTS",
            Self::AlreadyApplied => "ALREADY_APPLIED",
            Self::TaskClosed => "TASK_CLOSED",
            Self::TaskFull => "TASK_FULL",
            Self::InvalidTransition { .. } => "INVALID_TRANSITION",

            // Business Rules
            Self::InfluencerNotApproved => "INFLUENCER_NOT_APPROVED",
            Self::InfluencerSuspended => "INFLUENCER_SUSPENDED",

            // Infrastructure
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::CacheError(_) => "CACHE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::ProfileNotFound(_)
                | Self::InfluencerNotFound(_)
                | Self::CompanyNotFound(_)
                | Self::TaskNotFound(_)
                | Self::ApplicationNotFound(_)
                | Self::VideoNotFound(_)
        )
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::ValidationError(_)
                | Self::InvalidEmail
                | Self::WeakPassword(_)
                | Self::InvalidBudgetRange { .. }
        )
    }

    /// Check if this is an authorization error
    pub fn is_authorization(&self) -> bool {
        matches!(
            self,
            Self::MissingPermission(_)
                | Self::NotTaskOwner
                | Self::NotApplicationOwner
                | Self::AdminRequired
        )
    }

    /// Check if this is a conflict error
    pub fn is_conflict(&self) -> bool {
        matches!(
            self,
            Self::EmailAlreadyExists
                | Self::AlreadyApplied
                | Self::TaskClosed
                | Self::TaskFull
                | Self::InvalidTransition { .. }
                | Self::InfluencerNotApproved
                | Self::InfluencerSuspended
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        let err = DomainError::TaskNotFound(Snowflake::new(1));
        assert_eq!(err.code(), "UNKNOWN_TASK");

        let err = DomainError::AlreadyApplied;
        assert_eq!(err.code(), "ALREADY_APPLIED");
    }

    #[test]
    fn test_is_not_found() {
        assert!(DomainError::TaskNotFound(Snowflake::new(1)).is_not_found());
        assert!(DomainError::ApplicationNotFound(Snowflake::new(1)).is_not_found());
        assert!(!DomainError::AlreadyApplied.is_not_found());
    }

    #[test]
    fn test_is_conflict() {
        assert!(DomainError::AlreadyApplied.is_conflict());
        assert!(DomainError::TaskFull.is_conflict());
        let transition = DomainError::InvalidTransition {
            from: ApplicationStatus::Refused,
            to: ApplicationStatus::Accepted,
        };
        assert!(transition.is_conflict());
        assert!(!DomainError::NotTaskOwner.is_conflict());
    }

    #[test]
    fn test_is_authorization() {
        assert!(DomainError::NotTaskOwner.is_authorization());
        assert!(DomainError::AdminRequired.is_authorization());
        assert!(!DomainError::TaskClosed.is_authorization());
    }

    #[test]
    fn test_error_display() {
        let err = DomainError::TaskNotFound(Snowflake::new(123));
        assert_eq!(err.to_string(), "Task not found: 123");

        let err = DomainError::InvalidBudgetRange { min: 500, max: 100 };
        assert_eq!(
            err.to_string(),
            "Invalid budget range: min 500 exceeds max 100"
        );
    }
}
