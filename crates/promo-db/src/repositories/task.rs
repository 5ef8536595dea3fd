//! PostgreSQL implementation of TaskRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use promo_core::entities::{Task, TaskStatus};
use promo_core::traits::{PageQuery, Paged, RepoResult, TaskRepository};
use promo_core::value_objects::Snowflake;

use crate::models::TaskModel;

use super::error::{map_db_error, task_not_found};

const TASK_COLUMNS: &str = "id, company_id, title, description, category, status, \
     budget_min, budget_max, max_applicants, current_applicants, selected_influencer_id, \
     advance_amount, settlement_amount, deadline, created_at, updated_at";

/// PostgreSQL implementation of TaskRepository
#[derive(Clone)]
pub struct PgTaskRepository {
    pool: PgPool,
}

impl PgTaskRepository {
    /// Create a new PgTaskRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TaskRepository for PgTaskRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Task>> {
        let sql = format!("SELECT {TASK_COLUMNS} FROM tasks WHERE id = $1");
        let result = sqlx::query_as::<_, TaskModel>(&sql)
            .bind(id.into_inner())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(result.map(Task::from))
    }

    #[instrument(skip(self))]
    async fn list_open(&self, page: PageQuery) -> RepoResult<Paged<Task>> {
        let total =
            sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM tasks WHERE status = 'open'")
                .fetch_one(&self.pool)
                .await
                .map_err(map_db_error)?;

        let sql = format!(
            "SELECT {TASK_COLUMNS} FROM tasks \
             WHERE status = 'open' \
             ORDER BY created_at DESC, id DESC \
             LIMIT $1 OFFSET $2"
        );
        let rows = sqlx::query_as::<_, TaskModel>(&sql)
            .bind(page.limit)
            .bind(page.offset())
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(Paged {
            items: rows.into_iter().map(Task::from).collect(),
            total,
        })
    }

    #[instrument(skip(self))]
    async fn list_by_company(&self, company_id: Snowflake) -> RepoResult<Vec<Task>> {
        let sql = format!(
            "SELECT {TASK_COLUMNS} FROM tasks \
             WHERE company_id = $1 \
             ORDER BY created_at DESC, id DESC"
        );
        let rows = sqlx::query_as::<_, TaskModel>(&sql)
            .bind(company_id.into_inner())
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(rows.into_iter().map(Task::from).collect())
    }

    #[instrument(skip(self))]
    async fn create(&self, task: &Task) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO tasks (id, company_id, title, description, category, status,
                               budget_min, budget_max, max_applicants, current_applicants,
                               selected_influencer_id, advance_amount, settlement_amount,
                               deadline, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16)
            ",
        )
        .bind(task.id.into_inner())
        .bind(task.company_id.into_inner())
        .bind(&task.title)
        .bind(&task.description)
        .bind(&task.category)
        .bind(task.status.as_str())
        .bind(task.budget_min)
        .bind(task.budget_max)
        .bind(task.max_applicants)
        .bind(task.current_applicants)
        .bind(task.selected_influencer_id.map(Snowflake::into_inner))
        .bind(task.advance_amount)
        .bind(task.settlement_amount)
        .bind(task.deadline)
        .bind(task.created_at)
        .bind(task.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn update(&self, task: &Task) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE tasks
            SET title = $2, description = $3, category = $4, budget_min = $5, budget_max = $6,
                max_applicants = $7, advance_amount = $8, settlement_amount = $9,
                deadline = $10, updated_at = NOW()
            WHERE id = $1
            ",
        )
        .bind(task.id.into_inner())
        .bind(&task.title)
        .bind(&task.description)
        .bind(&task.category)
        .bind(task.budget_min)
        .bind(task.budget_max)
        .bind(task.max_applicants)
        .bind(task.advance_amount)
        .bind(task.settlement_amount)
        .bind(task.deadline)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(task_not_found(task.id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn set_status(&self, id: Snowflake, status: TaskStatus) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE tasks
            SET status = $2, updated_at = NOW()
            WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .bind(status.as_str())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(task_not_found(id));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PgTaskRepository>();
    }
}
