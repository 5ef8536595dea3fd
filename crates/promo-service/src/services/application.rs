//! Application service
//!
//! Orchestrates the application lifecycle: apply, accept, reject, withdraw.
//! The atomic pieces (counter maintenance, single-winner selection) live in
//! the repository; this layer adds the role and ownership guards.

use promo_core::entities::{InfluencerStatus, TaskApplication, UserRole};
use promo_core::{DomainError, Snowflake, Task};
use tracing::{info, instrument};

use crate::dto::{AcceptResponse, ApplicationResponse, ApplyRequest, TaskResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Application service
pub struct ApplicationService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ApplicationService<'a> {
    /// Create a new ApplicationService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Apply to a task as the acting influencer
    #[instrument(skip(self, request))]
    pub async fn apply(
        &self,
        influencer_id: Snowflake,
        task_id: Snowflake,
        request: ApplyRequest,
    ) -> ServiceResult<ApplicationResponse> {
        let influencer = self
            .ctx
            .influencer_repo()
            .find_by_user(influencer_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Influencer", influencer_id.to_string()))?;

        if influencer.status == InfluencerStatus::Suspended {
            return Err(ServiceError::from(DomainError::InfluencerSuspended));
        }
        if !influencer.can_apply() {
            return Err(ServiceError::from(DomainError::InfluencerNotApproved));
        }

        let mut application =
            TaskApplication::new(self.ctx.generate_id(), task_id, influencer_id);
        application.proposed_rate = request.proposed_rate;
        application.message = request.message;

        // The repository enforces open/capacity/uniqueness atomically
        let created = self.ctx.application_repo().apply(&application).await?;

        info!(
            application_id = %created.id,
            task_id = %task_id,
            influencer_id = %influencer_id,
            "Application submitted"
        );

        Ok(ApplicationResponse::from(&created))
    }

    /// Accept one application on a task the acting company owns. Accepting
    /// an already-accepted application is an idempotent no-op.
    #[instrument(skip(self))]
    pub async fn accept(
        &self,
        company_id: Snowflake,
        application_id: Snowflake,
    ) -> ServiceResult<AcceptResponse> {
        self.owned_application_task(company_id, application_id)
            .await?;

        let outcome = self.ctx.application_repo().accept(application_id).await?;

        if outcome.already_accepted {
            info!(application_id = %application_id, "Accept repeated, no-op");
        } else {
            info!(
                application_id = %application_id,
                task_id = %outcome.task.id,
                "Application accepted"
            );
        }

        Ok(AcceptResponse {
            application: ApplicationResponse::from(&outcome.application),
            task: TaskResponse::from(&outcome.task),
            already_accepted: outcome.already_accepted,
        })
    }

    /// Refuse a pending application on a task the acting company owns
    #[instrument(skip(self))]
    pub async fn reject(
        &self,
        company_id: Snowflake,
        application_id: Snowflake,
    ) -> ServiceResult<ApplicationResponse> {
        self.owned_application_task(company_id, application_id)
            .await?;

        let application = self.ctx.application_repo().reject(application_id).await?;

        info!(application_id = %application_id, "Application refused");

        Ok(ApplicationResponse::from(&application))
    }

    /// Withdraw the acting influencer's own pending application
    #[instrument(skip(self))]
    pub async fn withdraw(
        &self,
        influencer_id: Snowflake,
        application_id: Snowflake,
    ) -> ServiceResult<ApplicationResponse> {
        let application = self
            .ctx
            .application_repo()
            .find_by_id(application_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Application", application_id.to_string()))?;

        if application.influencer_id != influencer_id {
            return Err(ServiceError::from(DomainError::NotApplicationOwner));
        }

        let withdrawn = self.ctx.application_repo().withdraw(application_id).await?;

        info!(application_id = %application_id, "Application withdrawn");

        Ok(ApplicationResponse::from(&withdrawn))
    }

    /// List applications on a task. Restricted to the task owner or an
    /// admin account; application lists are never public.
    #[instrument(skip(self))]
    pub async fn list_for_task(
        &self,
        acting_user: Snowflake,
        role: UserRole,
        task_id: Snowflake,
    ) -> ServiceResult<Vec<ApplicationResponse>> {
        let task = self
            .ctx
            .task_repo()
            .find_by_id(task_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Task", task_id.to_string()))?;

        if role != UserRole::Admin && !task.is_owned_by(acting_user) {
            return Err(ServiceError::from(DomainError::NotTaskOwner));
        }

        let applications = self.ctx.application_repo().find_by_task(task_id).await?;
        Ok(applications.iter().map(ApplicationResponse::from).collect())
    }

    /// List the acting influencer's own applications
    #[instrument(skip(self))]
    pub async fn list_own(
        &self,
        influencer_id: Snowflake,
    ) -> ServiceResult<Vec<ApplicationResponse>> {
        let applications = self
            .ctx
            .application_repo()
            .find_by_influencer(influencer_id)
            .await?;
        Ok(applications.iter().map(ApplicationResponse::from).collect())
    }

    /// Resolve the application's task and verify company ownership
    async fn owned_application_task(
        &self,
        company_id: Snowflake,
        application_id: Snowflake,
    ) -> ServiceResult<Task> {
        let application = self
            .ctx
            .application_repo()
            .find_by_id(application_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Application", application_id.to_string()))?;

        let task = self
            .ctx
            .task_repo()
            .find_by_id(application.task_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Task", application.task_id.to_string()))?;

        if !task.is_owned_by(company_id) {
            return Err(ServiceError::from(DomainError::NotTaskOwner));
        }

        Ok(task)
    }
}
