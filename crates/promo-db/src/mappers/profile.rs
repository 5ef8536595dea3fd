//! UserProfile entity <-> model mapper

use promo_core::entities::{UserProfile, UserRole};
use promo_core::value_objects::Snowflake;

use crate::models::ProfileModel;

/// Convert ProfileModel to UserProfile entity
impl From<ProfileModel> for UserProfile {
    fn from(model: ProfileModel) -> Self {
        UserProfile {
            user_id: Snowflake::new(model.user_id),
            email: model.email,
            phone: model.phone,
            // user_type is CHECK constrained at the schema level
            user_type: UserRole::parse(&model.user_type).unwrap_or(UserRole::Influencer),
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
