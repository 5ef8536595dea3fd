//! PostgreSQL implementation of ApplicationRepository
//!
//! The apply/accept/withdraw operations run inside transactions with the
//! task row locked, so the applicant counter and the selection outcome
//! stay consistent under concurrent requests.

use async_trait::async_trait;
use sqlx::{PgPool, Postgres, Transaction};
use tracing::instrument;

use promo_core::entities::{ApplicationStatus, Task, TaskApplication};
use promo_core::error::DomainError;
use promo_core::traits::{AcceptOutcome, ApplicationRepository, RepoResult};
use promo_core::value_objects::Snowflake;

use crate::models::{ApplicationModel, TaskModel};

use super::error::{application_not_found, map_db_error, map_unique_violation, task_not_found};

const APPLICATION_COLUMNS: &str =
    "id, task_id, influencer_id, status, proposed_rate, message, created_at, updated_at";

const TASK_COLUMNS: &str = "id, company_id, title, description, category, status, \
     budget_min, budget_max, max_applicants, current_applicants, selected_influencer_id, \
     advance_amount, settlement_amount, deadline, created_at, updated_at";

/// PostgreSQL implementation of ApplicationRepository
#[derive(Clone)]
pub struct PgApplicationRepository {
    pool: PgPool,
}

impl PgApplicationRepository {
    /// Create a new PgApplicationRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Lock a task row for the duration of the transaction
    async fn lock_task(
        tx: &mut Transaction<'_, Postgres>,
        task_id: Snowflake,
    ) -> RepoResult<TaskModel> {
        let sql = format!("SELECT {TASK_COLUMNS} FROM tasks WHERE id = $1 FOR UPDATE");
        sqlx::query_as::<_, TaskModel>(&sql)
            .bind(task_id.into_inner())
            .fetch_optional(&mut **tx)
            .await
            .map_err(map_db_error)?
            .ok_or_else(|| task_not_found(task_id))
    }
}

#[async_trait]
impl ApplicationRepository for PgApplicationRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<TaskApplication>> {
        let sql = format!("SELECT {APPLICATION_COLUMNS} FROM task_applications WHERE id = $1");
        let result = sqlx::query_as::<_, ApplicationModel>(&sql)
            .bind(id.into_inner())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(result.map(TaskApplication::from))
    }

    #[instrument(skip(self))]
    async fn find_by_task(&self, task_id: Snowflake) -> RepoResult<Vec<TaskApplication>> {
        let sql = format!(
            "SELECT {APPLICATION_COLUMNS} FROM task_applications \
             WHERE task_id = $1 ORDER BY created_at DESC, id DESC"
        );
        let rows = sqlx::query_as::<_, ApplicationModel>(&sql)
            .bind(task_id.into_inner())
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(rows.into_iter().map(TaskApplication::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_by_influencer(
        &self,
        influencer_id: Snowflake,
    ) -> RepoResult<Vec<TaskApplication>> {
        let sql = format!(
            "SELECT {APPLICATION_COLUMNS} FROM task_applications \
             WHERE influencer_id = $1 ORDER BY created_at DESC, id DESC"
        );
        let rows = sqlx::query_as::<_, ApplicationModel>(&sql)
            .bind(influencer_id.into_inner())
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(rows.into_iter().map(TaskApplication::from).collect())
    }

    #[instrument(skip(self))]
    async fn apply(&self, application: &TaskApplication) -> RepoResult<TaskApplication> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        let task = Self::lock_task(&mut tx, application.task_id).await?;

        if task.status != "open" {
            return Err(DomainError::TaskClosed);
        }
        if task.current_applicants >= task.max_applicants {
            return Err(DomainError::TaskFull);
        }

        let sql = format!(
            "INSERT INTO task_applications (id, task_id, influencer_id, status, proposed_rate, \
             message, created_at, updated_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8) \
             RETURNING {APPLICATION_COLUMNS}"
        );
        let inserted = sqlx::query_as::<_, ApplicationModel>(&sql)
            .bind(application.id.into_inner())
            .bind(application.task_id.into_inner())
            .bind(application.influencer_id.into_inner())
            .bind(application.status.as_str())
            .bind(application.proposed_rate)
            .bind(&application.message)
            .bind(application.created_at)
            .bind(application.updated_at)
            .fetch_one(&mut *tx)
            .await
            .map_err(|e| map_unique_violation(e, || DomainError::AlreadyApplied))?;

        sqlx::query(
            r"
            UPDATE tasks
            SET current_applicants = current_applicants + 1, updated_at = NOW()
            WHERE id = $1
            ",
        )
        .bind(application.task_id.into_inner())
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        tx.commit().await.map_err(map_db_error)?;

        Ok(TaskApplication::from(inserted))
    }

    #[instrument(skip(self))]
    async fn accept(&self, application_id: Snowflake) -> RepoResult<AcceptOutcome> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        // Resolve the task before taking any row locks, then lock the task
        // first. Every write path in this repository locks task before
        // application rows, so concurrent accepts on siblings of the same
        // task serialize instead of deadlocking.
        let task_id: i64 =
            sqlx::query_scalar("SELECT task_id FROM task_applications WHERE id = $1")
                .bind(application_id.into_inner())
                .fetch_optional(&mut *tx)
                .await
                .map_err(map_db_error)?
                .ok_or_else(|| application_not_found(application_id))?;

        let task = Self::lock_task(&mut tx, Snowflake::new(task_id)).await?;

        let sql = format!(
            "SELECT {APPLICATION_COLUMNS} FROM task_applications WHERE id = $1 FOR UPDATE"
        );
        let target = sqlx::query_as::<_, ApplicationModel>(&sql)
            .bind(application_id.into_inner())
            .fetch_optional(&mut *tx)
            .await
            .map_err(map_db_error)?
            .ok_or_else(|| application_not_found(application_id))?;

        // Re-accepting the winner is a no-op, not an error
        if target.status == "accepted" {
            tx.commit().await.map_err(map_db_error)?;
            return Ok(AcceptOutcome {
                application: TaskApplication::from(target),
                task: Task::from(task),
                already_accepted: true,
            });
        }

        if target.status != "pending" {
            let from = ApplicationStatus::parse(&target.status)
                .unwrap_or(ApplicationStatus::Refused);
            return Err(DomainError::InvalidTransition {
                from,
                to: ApplicationStatus::Accepted,
            });
        }

        if task.status != "open" {
            return Err(DomainError::TaskClosed);
        }

        let sql = format!(
            "UPDATE task_applications SET status = 'accepted', updated_at = NOW() \
             WHERE id = $1 RETURNING {APPLICATION_COLUMNS}"
        );
        let accepted = sqlx::query_as::<_, ApplicationModel>(&sql)
            .bind(application_id.into_inner())
            .fetch_one(&mut *tx)
            .await
            .map_err(map_db_error)?;

        sqlx::query(
            r"
            UPDATE task_applications
            SET status = 'refused', updated_at = NOW()
            WHERE task_id = $1 AND id <> $2 AND status = 'pending'
            ",
        )
        .bind(target.task_id)
        .bind(application_id.into_inner())
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        let sql = format!(
            "UPDATE tasks \
             SET status = 'in_progress', selected_influencer_id = $2, updated_at = NOW() \
             WHERE id = $1 RETURNING {TASK_COLUMNS}"
        );
        let updated_task = sqlx::query_as::<_, TaskModel>(&sql)
            .bind(target.task_id)
            .bind(target.influencer_id)
            .fetch_one(&mut *tx)
            .await
            .map_err(map_db_error)?;

        tx.commit().await.map_err(map_db_error)?;

        Ok(AcceptOutcome {
            application: TaskApplication::from(accepted),
            task: Task::from(updated_task),
            already_accepted: false,
        })
    }

    #[instrument(skip(self))]
    async fn reject(&self, application_id: Snowflake) -> RepoResult<TaskApplication> {
        let sql = format!(
            "UPDATE task_applications SET status = 'refused', updated_at = NOW() \
             WHERE id = $1 AND status = 'pending' RETURNING {APPLICATION_COLUMNS}"
        );
        let updated = sqlx::query_as::<_, ApplicationModel>(&sql)
            .bind(application_id.into_inner())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_error)?;

        match updated {
            Some(model) => Ok(TaskApplication::from(model)),
            None => {
                // Distinguish a missing row from a non-pending one
                let existing = self.find_by_id(application_id).await?;
                match existing {
                    Some(app) => Err(DomainError::InvalidTransition {
                        from: app.status,
                        to: ApplicationStatus::Refused,
                    }),
                    None => Err(application_not_found(application_id)),
                }
            }
        }
    }

    #[instrument(skip(self))]
    async fn withdraw(&self, application_id: Snowflake) -> RepoResult<TaskApplication> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        // Same lock order as apply and accept: task first, then the row
        let task_id: i64 =
            sqlx::query_scalar("SELECT task_id FROM task_applications WHERE id = $1")
                .bind(application_id.into_inner())
                .fetch_optional(&mut *tx)
                .await
                .map_err(map_db_error)?
                .ok_or_else(|| application_not_found(application_id))?;

        Self::lock_task(&mut tx, Snowflake::new(task_id)).await?;

        let sql = format!(
            "SELECT {APPLICATION_COLUMNS} FROM task_applications WHERE id = $1 FOR UPDATE"
        );
        let target = sqlx::query_as::<_, ApplicationModel>(&sql)
            .bind(application_id.into_inner())
            .fetch_optional(&mut *tx)
            .await
            .map_err(map_db_error)?
            .ok_or_else(|| application_not_found(application_id))?;

        if target.status != "pending" {
            let from = ApplicationStatus::parse(&target.status)
                .unwrap_or(ApplicationStatus::Withdrawn);
            return Err(DomainError::InvalidTransition {
                from,
                to: ApplicationStatus::Withdrawn,
            });
        }

        let sql = format!(
            "UPDATE task_applications SET status = 'withdrawn', updated_at = NOW() \
             WHERE id = $1 RETURNING {APPLICATION_COLUMNS}"
        );
        let withdrawn = sqlx::query_as::<_, ApplicationModel>(&sql)
            .bind(application_id.into_inner())
            .fetch_one(&mut *tx)
            .await
            .map_err(map_db_error)?;

        // Withdrawal releases the applicant slot
        sqlx::query(
            r"
            UPDATE tasks
            SET current_applicants = GREATEST(current_applicants - 1, 0), updated_at = NOW()
            WHERE id = $1
            ",
        )
        .bind(target.task_id)
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        tx.commit().await.map_err(map_db_error)?;

        Ok(TaskApplication::from(withdrawn))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PgApplicationRepository>();
    }
}
