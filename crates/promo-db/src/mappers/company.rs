//! Company entity <-> model mapper

use promo_core::entities::Company;
use promo_core::value_objects::Snowflake;

use crate::models::CompanyModel;

/// Convert CompanyModel to Company entity
impl From<CompanyModel> for Company {
    fn from(model: CompanyModel) -> Self {
        Company {
            user_id: Snowflake::new(model.user_id),
            company_name: model.company_name,
            contact_name: model.contact_name,
            contact_email: model.contact_email,
            contact_phone: model.contact_phone,
            website: model.website,
            description: model.description,
            logo_url: model.logo_url,
            is_verified: model.is_verified,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
