//! Task application entity - an influencer's bid on a task
//!
//! State machine: `pending -> {accepted, refused, withdrawn}`, all terminal.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::value_objects::Snowflake;

/// Lifecycle state of an application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApplicationStatus {
    Pending,
    Accepted,
    Refused,
    Withdrawn,
}

impl ApplicationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Accepted => "accepted",
            Self::Refused => "refused",
            Self::Withdrawn => "withdrawn",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "pending" => Some(Self::Pending),
            "accepted" => Some(Self::Accepted),
            "refused" => Some(Self::Refused),
            "withdrawn" => Some(Self::Withdrawn),
            _ => None,
        }
    }

    /// Only `pending` may transition; every other state is terminal
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Self::Pending)
    }
}

/// One influencer's bid on one task, unique per (task, influencer) pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskApplication {
    pub id: Snowflake,
    pub task_id: Snowflake,
    pub influencer_id: Snowflake,
    pub status: ApplicationStatus,
    /// Rate the influencer proposes, in whole currency units
    pub proposed_rate: Option<i64>,
    pub message: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TaskApplication {
    /// Create a new pending application
    pub fn new(id: Snowflake, task_id: Snowflake, influencer_id: Snowflake) -> Self {
        let now = Utc::now();
        Self {
            id,
            task_id,
            influencer_id,
            status: ApplicationStatus::Pending,
            proposed_rate: None,
            message: None,
            created_at: now,
            updated_at: now,
        }
    }

    #[inline]
    pub fn is_pending(&self) -> bool {
        self.status == ApplicationStatus::Pending
    }

    /// Whether a transition to `target` is legal from the current state
    pub fn can_transition_to(&self, target: ApplicationStatus) -> bool {
        self.status == ApplicationStatus::Pending && target != ApplicationStatus::Pending
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn application() -> TaskApplication {
        TaskApplication::new(Snowflake::new(1), Snowflake::new(2), Snowflake::new(3))
    }

    #[test]
    fn test_new_application_is_pending() {
        assert!(application().is_pending());
    }

    #[test]
    fn test_pending_transitions() {
        let app = application();
        assert!(app.can_transition_to(ApplicationStatus::Accepted));
        assert!(app.can_transition_to(ApplicationStatus::Refused));
        assert!(app.can_transition_to(ApplicationStatus::Withdrawn));
        assert!(!app.can_transition_to(ApplicationStatus::Pending));
    }

    #[test]
    fn test_terminal_states_do_not_transition() {
        let mut app = application();
        app.status = ApplicationStatus::Accepted;
        assert!(!app.can_transition_to(ApplicationStatus::Refused));

        app.status = ApplicationStatus::Withdrawn;
        assert!(!app.can_transition_to(ApplicationStatus::Accepted));
    }

    #[test]
    fn test_status_roundtrip() {
        for status in [
            ApplicationStatus::Pending,
            ApplicationStatus::Accepted,
            ApplicationStatus::Refused,
            ApplicationStatus::Withdrawn,
        ] {
            assert_eq!(ApplicationStatus::parse(status.as_str()), Some(status));
        }
        assert_eq!(ApplicationStatus::parse("rejected"), None);
    }
}
