//! Influencer entity - a creator profile that applies to promotional tasks

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::value_objects::Snowflake;

/// Account standing of an influencer profile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InfluencerStatus {
    Active,
    Inactive,
    Suspended,
}

impl InfluencerStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
            Self::Suspended => "suspended",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "active" => Some(Self::Active),
            "inactive" => Some(Self::Inactive),
            "suspended" => Some(Self::Suspended),
            _ => None,
        }
    }
}

/// Influencer profile, keyed by the owning account
#[derive(Debug, Clone, PartialEq)]
pub struct Influencer {
    pub user_id: Snowflake,
    pub nickname: String,
    pub real_name: Option<String>,
    pub tiktok_handle: Option<String>,
    pub tiktok_url: Option<String>,
    pub bio: Option<String>,
    pub location: Option<String>,
    /// Content categories the creator works in (unordered)
    pub categories: Vec<String>,
    /// Free-form tags (unordered)
    pub tags: Vec<String>,
    /// Asking rate in whole currency units per hour
    pub hourly_rate: Option<i64>,
    pub experience_years: i32,
    pub is_verified: bool,
    pub is_approved: bool,
    pub status: InfluencerStatus,
    pub follower_count: i64,
    pub rating: f64,
    pub rating_count: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Influencer {
    /// Create a fresh, unapproved influencer profile
    pub fn new(user_id: Snowflake, nickname: String) -> Self {
        let now = Utc::now();
        Self {
            user_id,
            nickname,
            real_name: None,
            tiktok_handle: None,
            tiktok_url: None,
            bio: None,
            location: None,
            categories: Vec::new(),
            tags: Vec::new(),
            hourly_rate: None,
            experience_years: 0,
            is_verified: false,
            is_approved: false,
            status: InfluencerStatus::Active,
            follower_count: 0,
            rating: 0.0,
            rating_count: 0,
            created_at: now,
            updated_at: now,
        }
    }

    /// Whether this profile may apply to tasks
    pub fn can_apply(&self) -> bool {
        self.is_approved && self.status == InfluencerStatus::Active
    }

    /// Whether this profile appears in the public catalog
    pub fn is_listed(&self) -> bool {
        self.is_approved && self.status != InfluencerStatus::Suspended
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_profile_cannot_apply() {
        let influencer = Influencer::new(Snowflake::new(1), "dancequeen".to_string());
        assert!(!influencer.can_apply());
    }

    #[test]
    fn test_approved_active_can_apply() {
        let mut influencer = Influencer::new(Snowflake::new(1), "dancequeen".to_string());
        influencer.is_approved = true;
        assert!(influencer.can_apply());

        influencer.status = InfluencerStatus::Suspended;
        assert!(!influencer.can_apply());
        assert!(!influencer.is_listed());
    }

    #[test]
    fn test_status_roundtrip() {
        for status in [
            InfluencerStatus::Active,
            InfluencerStatus::Inactive,
            InfluencerStatus::Suspended,
        ] {
            assert_eq!(InfluencerStatus::parse(status.as_str()), Some(status));
        }
        assert_eq!(InfluencerStatus::parse("banned"), None);
    }
}
