//! TaskCategory entity <-> model mapper

use promo_core::entities::TaskCategory;
use promo_core::value_objects::Snowflake;

use crate::models::CategoryModel;

/// Convert CategoryModel to TaskCategory entity
impl From<CategoryModel> for TaskCategory {
    fn from(model: CategoryModel) -> Self {
        TaskCategory {
            id: Snowflake::new(model.id),
            name: model.name,
            description: model.description,
            sort_order: model.sort_order,
            is_active: model.is_active,
            created_at: model.created_at,
        }
    }
}
