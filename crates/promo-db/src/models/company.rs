//! Company database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for companies table
#[derive(Debug, Clone, FromRow)]
pub struct CompanyModel {
    pub user_id: i64,
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
