//! Task service
//!
//! Company-side task management: create, edit, cancel, complete. The only
//! status moves here are the company-driven ones; selection happens through
//! the application service and hard delete through the admin service.

use promo_core::entities::TaskStatus;
use promo_core::{DomainError, Snowflake, Task};
use tracing::{info, instrument};

use crate::dto::{CreateTaskRequest, TaskResponse, UpdateTaskRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Task service
pub struct TaskService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> TaskService<'a> {
    /// Create a new TaskService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Create a new open task owned by the acting company
    #[instrument(skip(self, request), fields(title = %request.title))]
    pub async fn create(
        &self,
        company_id: Snowflake,
        request: CreateTaskRequest,
    ) -> ServiceResult<TaskResponse> {
        // Only accounts with a company row may post tasks
        self.ctx
            .company_repo()
            .find_by_user(company_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Company", company_id.to_string()))?;

        if request.budget_min > request.budget_max {
            return Err(ServiceError::from(DomainError::InvalidBudgetRange {
                min: request.budget_min,
                max: request.budget_max,
            }));
        }

        let mut task = Task::new(
            self.ctx.generate_id(),
            company_id,
            request.title,
            request.description,
            request.budget_min,
            request.budget_max,
            request.max_applicants,
        );
        task.category = request.category;
        task.deadline = request.deadline;

        self.ctx.task_repo().create(&task).await?;

        info!(task_id = %task.id, company_id = %company_id, "Task created");

        Ok(TaskResponse::from(&task))
    }

    /// Edit an open task's descriptive fields
    #[instrument(skip(self, request))]
    pub async fn update(
        &self,
        company_id: Snowflake,
        task_id: Snowflake,
        request: UpdateTaskRequest,
    ) -> ServiceResult<TaskResponse> {
        let mut task = self.owned_task(company_id, task_id).await?;

        if !task.is_open() {
            return Err(ServiceError::from(DomainError::TaskClosed));
        }

        if let Some(title) = request.title {
            task.title = title;
        }
        if let Some(description) = request.description {
            task.description = description;
        }
        if let Some(category) = request.category {
            task.category = Some(category);
        }
        if let Some(min) = request.budget_min {
            task.budget_min = min;
        }
        if let Some(max) = request.budget_max {
            task.budget_max = max;
        }
        if let Some(deadline) = request.deadline {
            task.deadline = Some(deadline);
        }
        if task.budget_min > task.budget_max {
            return Err(ServiceError::from(DomainError::InvalidBudgetRange {
                min: task.budget_min,
                max: task.budget_max,
            }));
        }
        task.updated_at = chrono::Utc::now();

        self.ctx.task_repo().update(&task).await?;

        info!(task_id = %task_id, "Task updated");

        Ok(TaskResponse::from(&task))
    }

    /// Cancel a task that is not yet finished
    #[instrument(skip(self))]
    pub async fn cancel(
        &self,
        company_id: Snowflake,
        task_id: Snowflake,
    ) -> ServiceResult<TaskResponse> {
        self.transition(company_id, task_id, TaskStatus::Cancelled)
            .await
    }

    /// Mark an in-progress task completed
    #[instrument(skip(self))]
    pub async fn complete(
        &self,
        company_id: Snowflake,
        task_id: Snowflake,
    ) -> ServiceResult<TaskResponse> {
        let task = self.owned_task(company_id, task_id).await?;

        if task.status != TaskStatus::InProgress {
            return Err(ServiceError::conflict(format!(
                "Cannot complete a task in status {}",
                task.status.as_str()
            )));
        }

        self.transition(company_id, task_id, TaskStatus::Completed)
            .await
    }

    /// List every task posted by the acting company
    #[instrument(skip(self))]
    pub async fn list_own(&self, company_id: Snowflake) -> ServiceResult<Vec<TaskResponse>> {
        let tasks = self.ctx.task_repo().list_by_company(company_id).await?;
        Ok(tasks.iter().map(TaskResponse::from).collect())
    }

    async fn transition(
        &self,
        company_id: Snowflake,
        task_id: Snowflake,
        target: TaskStatus,
    ) -> ServiceResult<TaskResponse> {
        let mut task = self.owned_task(company_id, task_id).await?;

        if task.status.is_terminal() {
            return Err(ServiceError::conflict(format!(
                "Cannot move a task from {} to {}",
                task.status.as_str(),
                target.as_str()
            )));
        }

        self.ctx.task_repo().set_status(task_id, target).await?;
        task.status = target;
        task.updated_at = chrono::Utc::now();

        info!(task_id = %task_id, status = target.as_str(), "Task status changed");

        Ok(TaskResponse::from(&task))
    }

    async fn owned_task(&self, company_id: Snowflake, task_id: Snowflake) -> ServiceResult<Task> {
        let task = self
            .ctx
            .task_repo()
            .find_by_id(task_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Task", task_id.to_string()))?;

        if !task.is_owned_by(company_id) {
            return Err(ServiceError::from(DomainError::NotTaskOwner));
        }

        Ok(task)
    }
}
