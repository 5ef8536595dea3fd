//! Task entity - a brand-posted promotional work order

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::value_objects::Snowflake;

/// Lifecycle state of a task
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    Open,
    InProgress,
    Completed,
    Cancelled,
}

impl TaskStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::InProgress => "in_progress",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "open" => Some(Self::Open),
            "in_progress" => Some(Self::InProgress),
            "completed" => Some(Self::Completed),
            "cancelled" => Some(Self::Cancelled),
            _ => None,
        }
    }

    /// Terminal states accept no further lifecycle transitions
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed | Self::Cancelled)
    }
}

/// A promotional work order owned by a company
#[derive(Debug, Clone, PartialEq)]
pub struct Task {
    pub id: Snowflake,
    pub company_id: Snowflake,
    pub title: String,
    pub description: String,
    pub category: Option<String>,
    pub status: TaskStatus,
    /// Budget range in whole currency units
    pub budget_min: i64,
    pub budget_max: i64,
    pub max_applicants: i32,
    pub current_applicants: i32,
    /// Set when one application is accepted
    pub selected_influencer_id: Option<Snowflake>,
    /// Advance payment already made by the company, if any
    pub advance_amount: Option<i64>,
    /// Final settlement amount, filled at completion
    pub settlement_amount: Option<i64>,
    pub deadline: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Task {
    /// Create a new open task
    pub fn new(
        id: Snowflake,
        company_id: Snowflake,
        title: String,
        description: String,
        budget_min: i64,
        budget_max: i64,
        max_applicants: i32,
    ) -> Self {
        let now = Utc::now();
        Self {
            id,
            company_id,
            title,
            description,
            category: None,
            status: TaskStatus::Open,
            budget_min,
            budget_max,
            max_applicants,
            current_applicants: 0,
            selected_influencer_id: None,
            advance_amount: None,
            settlement_amount: None,
            deadline: None,
            created_at: now,
            updated_at: now,
        }
    }

    #[inline]
    pub fn is_open(&self) -> bool {
        self.status == TaskStatus::Open
    }

    /// Whether another application fits under the applicant cap
    pub fn has_capacity(&self) -> bool {
        self.current_applicants < self.max_applicants
    }

    /// Whether the given company owns this task
    pub fn is_owned_by(&self, company_id: Snowflake) -> bool {
        self.company_id == company_id
    }

    /// Whether the task still accepts new applications
    pub fn accepts_applications(&self) -> bool {
        self.is_open() && self.has_capacity()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task() -> Task {
        Task::new(
            Snowflake::new(10),
            Snowflake::new(20),
            "Unboxing short".to_string(),
            "30s unboxing clip for a phone case".to_string(),
            100,
            500,
            3,
        )
    }

    #[test]
    fn test_new_task_accepts_applications() {
        let t = task();
        assert!(t.is_open());
        assert!(t.accepts_applications());
    }

    #[test]
    fn test_full_task_rejects_applications() {
        let mut t = task();
        t.current_applicants = t.max_applicants;
        assert!(t.is_open());
        assert!(!t.accepts_applications());
    }

    #[test]
    fn test_terminal_status() {
        assert!(TaskStatus::Completed.is_terminal());
        assert!(TaskStatus::Cancelled.is_terminal());
        assert!(!TaskStatus::Open.is_terminal());
        assert!(!TaskStatus::InProgress.is_terminal());
    }

    #[test]
    fn test_status_roundtrip() {
        for status in [
            TaskStatus::Open,
            TaskStatus::InProgress,
            TaskStatus::Completed,
            TaskStatus::Cancelled,
        ] {
            assert_eq!(TaskStatus::parse(status.as_str()), Some(status));
        }
    }
}
