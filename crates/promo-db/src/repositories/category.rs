//! PostgreSQL implementation of CategoryRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use promo_core::entities::TaskCategory;
use promo_core::traits::{CategoryRepository, RepoResult};

use crate::models::CategoryModel;

use super::error::map_db_error;

/// PostgreSQL implementation of CategoryRepository
#[derive(Clone)]
pub struct PgCategoryRepository {
    pool: PgPool,
}

impl PgCategoryRepository {
    /// Create a new PgCategoryRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CategoryRepository for PgCategoryRepository {
    #[instrument(skip(self))]
    async fn list_active(&self) -> RepoResult<Vec<TaskCategory>> {
        let rows = sqlx::query_as::<_, CategoryModel>(
            r"
            SELECT id, name, description, sort_order, is_active, created_at
            FROM task_categories
            WHERE is_active = TRUE
            ORDER BY sort_order, id
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(TaskCategory::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PgCategoryRepository>();
    }
}
