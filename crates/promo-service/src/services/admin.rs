//! Admin service
//!
//! The moderated surface: stats, audit log, approval/verification flags,
//! and the single hard delete. Every mutation goes through an
//! `AdminRepository` method that writes the audit row transactionally.
//! Access requires the admin role plus a seeded permission grant.

use promo_core::entities::{permissions, AdminLog, UserRole};
use promo_core::{DomainError, PageQuery, Snowflake};
use tracing::{info, instrument};

use crate::dto::{AdminLogResponse, PagedResponse, StatsResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Admin service
pub struct AdminService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AdminService<'a> {
    /// Create a new AdminService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Latest stats snapshot, computing one if none exists yet
    #[instrument(skip(self))]
    pub async fn stats(&self, admin_id: Snowflake, role: UserRole) -> ServiceResult<StatsResponse> {
        self.require(admin_id, role, permissions::VIEW_STATS).await?;

        let stats = match self.ctx.admin_repo().latest_stats().await? {
            Some(stats) => stats,
            None => self.ctx.admin_repo().refresh_stats().await?,
        };

        Ok(StatsResponse::from(&stats))
    }

    /// Recompute and persist a fresh stats snapshot
    #[instrument(skip(self))]
    pub async fn refresh_stats(
        &self,
        admin_id: Snowflake,
        role: UserRole,
    ) -> ServiceResult<StatsResponse> {
        self.require(admin_id, role, permissions::VIEW_STATS).await?;

        let stats = self.ctx.admin_repo().refresh_stats().await?;

        info!(admin_id = %admin_id, "Stats snapshot refreshed");

        Ok(StatsResponse::from(&stats))
    }

    /// Page through the audit log, newest first
    #[instrument(skip(self))]
    pub async fn list_logs(
        &self,
        admin_id: Snowflake,
        role: UserRole,
        page: PageQuery,
    ) -> ServiceResult<PagedResponse<AdminLogResponse>> {
        self.require(admin_id, role, permissions::VIEW_STATS).await?;

        let paged = self.ctx.admin_repo().list_logs(page).await?;

        Ok(PagedResponse::new(
            paged.items.iter().map(AdminLogResponse::from).collect(),
            page.page,
            page.limit,
            paged.total,
        ))
    }

    /// Set the influencer approval flag
    #[instrument(skip(self))]
    pub async fn set_influencer_approval(
        &self,
        admin_id: Snowflake,
        role: UserRole,
        influencer_id: Snowflake,
        approved: bool,
    ) -> ServiceResult<()> {
        self.require(admin_id, role, permissions::MANAGE_INFLUENCERS)
            .await?;

        let action = if approved {
            "approve_influencer"
        } else {
            "revoke_influencer_approval"
        };
        let log = AdminLog::new(
            self.ctx.generate_id(),
            admin_id,
            action,
            "influencers",
            Some(influencer_id),
        )
        .with_detail(serde_json::json!({ "approved": approved }));

        self.ctx
            .admin_repo()
            .set_influencer_approval(&log, influencer_id, approved)
            .await?;

        info!(admin_id = %admin_id, influencer_id = %influencer_id, approved, "Influencer approval changed");

        Ok(())
    }

    /// Set the influencer verification badge
    #[instrument(skip(self))]
    pub async fn set_influencer_verification(
        &self,
        admin_id: Snowflake,
        role: UserRole,
        influencer_id: Snowflake,
        verified: bool,
    ) -> ServiceResult<()> {
        self.require(admin_id, role, permissions::MANAGE_INFLUENCERS)
            .await?;

        let action = if verified {
            "verify_influencer"
        } else {
            "revoke_influencer_verification"
        };
        let log = AdminLog::new(
            self.ctx.generate_id(),
            admin_id,
            action,
            "influencers",
            Some(influencer_id),
        )
        .with_detail(serde_json::json!({ "verified": verified }));

        self.ctx
            .admin_repo()
            .set_influencer_verification(&log, influencer_id, verified)
            .await?;

        info!(admin_id = %admin_id, influencer_id = %influencer_id, verified, "Influencer verification changed");

        Ok(())
    }

    /// Set the company verification badge
    #[instrument(skip(self))]
    pub async fn set_company_verification(
        &self,
        admin_id: Snowflake,
        role: UserRole,
        company_id: Snowflake,
        verified: bool,
    ) -> ServiceResult<()> {
        self.require(admin_id, role, permissions::MANAGE_COMPANIES)
            .await?;

        let action = if verified {
            "verify_company"
        } else {
            "revoke_company_verification"
        };
        let log = AdminLog::new(
            self.ctx.generate_id(),
            admin_id,
            action,
            "companies",
            Some(company_id),
        )
        .with_detail(serde_json::json!({ "verified": verified }));

        self.ctx
            .admin_repo()
            .set_company_verification(&log, company_id, verified)
            .await?;

        info!(admin_id = %admin_id, company_id = %company_id, verified, "Company verification changed");

        Ok(())
    }

    /// Hard delete a task and its applications
    #[instrument(skip(self))]
    pub async fn delete_task(
        &self,
        admin_id: Snowflake,
        role: UserRole,
        task_id: Snowflake,
    ) -> ServiceResult<()> {
        self.require(admin_id, role, permissions::MANAGE_TASKS)
            .await?;

        let log = AdminLog::new(
            self.ctx.generate_id(),
            admin_id,
            "delete_task",
            "tasks",
            Some(task_id),
        );

        self.ctx.admin_repo().delete_task(&log, task_id).await?;

        info!(admin_id = %admin_id, task_id = %task_id, "Task deleted");

        Ok(())
    }

    /// Role and permission guard. The role comes from the token claims,
    /// the grant from the seeded `admin_permissions` rows.
    async fn require(
        &self,
        admin_id: Snowflake,
        role: UserRole,
        permission: &str,
    ) -> ServiceResult<()> {
        if role != UserRole::Admin {
            return Err(ServiceError::from(DomainError::AdminRequired));
        }

        if !self
            .ctx
            .admin_repo()
            .has_permission(admin_id, permission)
            .await?
        {
            return Err(ServiceError::from(DomainError::MissingPermission(
                permission.to_string(),
            )));
        }

        Ok(())
    }
}
