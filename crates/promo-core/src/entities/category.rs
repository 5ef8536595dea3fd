//! Task category entity

use chrono::{DateTime, Utc};

use crate::value_objects::Snowflake;

/// A category tasks and videos are filed under
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskCategory {
    pub id: Snowflake,
    pub name: String,
    pub description: Option<String>,
    pub sort_order: i32,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl TaskCategory {
    pub fn new(id: Snowflake, name: String, sort_order: i32) -> Self {
        Self {
            id,
            name,
            description: None,
            sort_order,
            is_active: true,
            created_at: Utc::now(),
        }
    }
}
