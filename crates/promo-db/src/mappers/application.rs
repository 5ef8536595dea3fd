//! TaskApplication entity <-> model mapper

use promo_core::entities::{ApplicationStatus, TaskApplication};
use promo_core::value_objects::Snowflake;

use crate::models::ApplicationModel;

/// Convert ApplicationModel to TaskApplication entity
impl From<ApplicationModel> for TaskApplication {
    fn from(model: ApplicationModel) -> Self {
        TaskApplication {
            id: Snowflake::new(model.id),
            task_id: Snowflake::new(model.task_id),
            influencer_id: Snowflake::new(model.influencer_id),
            // status is CHECK constrained at the schema level
            status: ApplicationStatus::parse(&model.status).unwrap_or(ApplicationStatus::Pending),
            proposed_rate: model.proposed_rate,
            message: model.message,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
