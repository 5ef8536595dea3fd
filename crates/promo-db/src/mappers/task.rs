//! Task entity <-> model mapper

use promo_core::entities::{Task, TaskStatus};
use promo_core::value_objects::Snowflake;

use crate::models::TaskModel;

/// Convert TaskModel to Task entity
impl From<TaskModel> for Task {
    fn from(model: TaskModel) -> Self {
        Task {
            id: Snowflake::new(model.id),
            company_id: Snowflake::new(model.company_id),
            title: model.title,
            description: model.description,
            category: model.category,
            // status is CHECK constrained at the schema level
            status: TaskStatus::parse(&model.status).unwrap_or(TaskStatus::Open),
            budget_min: model.budget_min,
            budget_max: model.budget_max,
            max_applicants: model.max_applicants,
            current_applicants: model.current_applicants,
            selected_influencer_id: model.selected_influencer_id.map(Snowflake::new),
            advance_amount: model.advance_amount,
            settlement_amount: model.settlement_amount,
            deadline: model.deadline,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
