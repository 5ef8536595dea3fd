//! Company entity - a brand account that posts promotional tasks

use chrono::{DateTime, Utc};

use crate::value_objects::Snowflake;

/// Company profile, keyed by the owning account
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Company {
    pub user_id: Snowflake,
    pub company_name: String,
    pub contact_name: Option<String>,
    pub contact_email: Option<String>,
    pub contact_phone: Option<String>,
    pub website: Option<String>,
    pub description: Option<String>,
    pub logo_url: Option<String>,
    pub is_verified: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Company {
    /// Create a fresh, unverified company profile
    pub fn new(user_id: Snowflake, company_name: String) -> Self {
        let now = Utc::now();
        Self {
            user_id,
            company_name,
            contact_name: None,
            contact_email: None,
            contact_phone: None,
            website: None,
            description: None,
            logo_url: None,
            is_verified: false,
            created_at: now,
            updated_at: now,
        }
    }

    /// Update the hosted logo URL
    pub fn set_logo(&mut self, logo_url: Option<String>) {
        self.logo_url = logo_url;
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_company_is_unverified() {
        let company = Company::new(Snowflake::new(7), "Acme Media".to_string());
        assert!(!company.is_verified);
        assert!(company.logo_url.is_none());
    }
}
