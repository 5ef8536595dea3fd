//! User profile entity - classifies an authenticated account by role

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::value_objects::Snowflake;

/// Role attached to an authenticated account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Influencer,
    Company,
    Admin,
}

impl UserRole {
    /// Database/wire representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Influencer => "influencer",
            Self::Company => "company",
            Self::Admin => "admin",
        }
    }

    /// Parse from the database representation
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "influencer" => Some(Self::Influencer),
            "company" => Some(Self::Company),
            "admin" => Some(Self::Admin),
            _ => None,
        }
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Account profile row, 1:1 with the auth identity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserProfile {
    pub user_id: Snowflake,
    pub email: String,
    pub phone: Option<String>,
    pub user_type: UserRole,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl UserProfile {
    /// Create a new profile with required fields
    pub fn new(user_id: Snowflake, email: String, user_type: UserRole) -> Self {
        let now = Utc::now();
        Self {
            user_id,
            email,
            phone: None,
            user_type,
            created_at: now,
            updated_at: now,
        }
    }

    #[inline]
    pub fn is_admin(&self) -> bool {
        self.user_type == UserRole::Admin
    }

    #[inline]
    pub fn is_influencer(&self) -> bool {
        self.user_type == UserRole::Influencer
    }

    #[inline]
    pub fn is_company(&self) -> bool {
        self.user_type == UserRole::Company
    }

    /// Update the contact phone number
    pub fn set_phone(&mut self, phone: Option<String>) {
        self.phone = phone;
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_roundtrip() {
        for role in [UserRole::Influencer, UserRole::Company, UserRole::Admin] {
            assert_eq!(UserRole::parse(role.as_str()), Some(role));
        }
        assert_eq!(UserRole::parse("moderator"), None);
    }

    #[test]
    fn test_role_predicates() {
        let profile = UserProfile::new(
            Snowflake::new(1),
            "brand@example.com".to_string(),
            UserRole::Company,
        );
        assert!(profile.is_company());
        assert!(!profile.is_admin());
        assert!(!profile.is_influencer());
    }

    #[test]
    fn test_set_phone_touches_updated_at() {
        let mut profile = UserProfile::new(
            Snowflake::new(1),
            "creator@example.com".to_string(),
            UserRole::Influencer,
        );
        let before = profile.updated_at;
        profile.set_phone(Some("13800138000".to_string()));
        assert_eq!(profile.phone.as_deref(), Some("13800138000"));
        assert!(profile.updated_at >= before);
    }
}
