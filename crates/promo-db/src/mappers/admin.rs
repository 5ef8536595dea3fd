//! Admin surface entity <-> model mappers

use promo_core::entities::{AdminLog, AdminPermission, SystemStats};
use promo_core::value_objects::Snowflake;

use crate::models::{AdminLogModel, AdminPermissionModel, SystemStatsModel};

/// Convert AdminLogModel to AdminLog entity
impl From<AdminLogModel> for AdminLog {
    fn from(model: AdminLogModel) -> Self {
        AdminLog {
            id: Snowflake::new(model.id),
            admin_id: Snowflake::new(model.admin_id),
            action: model.action,
            target_table: model.target_table,
            target_id: model.target_id.map(Snowflake::new),
            detail: model.detail,
            created_at: model.created_at,
        }
    }
}

/// Convert AdminPermissionModel to AdminPermission entity
impl From<AdminPermissionModel> for AdminPermission {
    fn from(model: AdminPermissionModel) -> Self {
        AdminPermission {
            user_id: Snowflake::new(model.user_id),
            permission: model.permission,
            granted_at: model.granted_at,
        }
    }
}

/// Convert SystemStatsModel to SystemStats entity
impl From<SystemStatsModel> for SystemStats {
    fn from(model: SystemStatsModel) -> Self {
        SystemStats {
            total_users: model.total_users,
            total_influencers: model.total_influencers,
            total_companies: model.total_companies,
            open_tasks: model.open_tasks,
            in_progress_tasks: model.in_progress_tasks,
            completed_tasks: model.completed_tasks,
            total_applications: model.total_applications,
            refreshed_at: model.refreshed_at,
        }
    }
}
