//! Path parameter extractors
//!
//! Type-safe extraction of Snowflake IDs from path parameters.

use promo_core::Snowflake;

use crate::response::ApiError;

/// Path parameters with task_id
#[derive(Debug, serde::Deserialize)]
pub struct TaskIdPath {
    pub task_id: String,
}

impl TaskIdPath {
    /// Parse task_id as Snowflake
    pub fn task_id(&self) -> Result<Snowflake, ApiError> {
        self.task_id
            .parse()
            .map_err(|_| ApiError::invalid_path("Invalid task_id format"))
    }
}

/// Path parameters with application_id
#[derive(Debug, serde::Deserialize)]
pub struct ApplicationIdPath {
    pub application_id: String,
}

impl ApplicationIdPath {
    /// Parse application_id as Snowflake
    pub fn application_id(&self) -> Result<Snowflake, ApiError> {
        self.application_id
            .parse()
            .map_err(|_| ApiError::invalid_path("Invalid application_id format"))
    }
}

/// Path parameters with user_id
#[derive(Debug, serde::Deserialize)]
pub struct UserIdPath {
    pub user_id: String,
}

impl UserIdPath {
    /// Parse user_id as Snowflake
    pub fn user_id(&self) -> Result<Snowflake, ApiError> {
        self.user_id
            .parse()
            .map_err(|_| ApiError::invalid_path("Invalid user_id format"))
    }
}

/// Path parameters with video_id
#[derive(Debug, serde::Deserialize)]
pub struct VideoIdPath {
    pub video_id: String,
}

impl VideoIdPath {
    /// Parse video_id as Snowflake
    pub fn video_id(&self) -> Result<Snowflake, ApiError> {
        self.video_id
            .parse()
            .map_err(|_| ApiError::invalid_path("Invalid video_id format"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_id_parsing() {
        let path = TaskIdPath {
            task_id: "123456789".to_string(),
        };
        assert!(path.task_id().is_ok());

        let bad = TaskIdPath {
            task_id: "not-a-number".to_string(),
        };
        assert!(bad.task_id().is_err());
    }
}
