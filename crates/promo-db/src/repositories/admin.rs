//! PostgreSQL implementation of AdminRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use promo_core::entities::{AdminLog, AdminPermission, SystemStats};
use promo_core::traits::{AdminRepository, PageQuery, Paged, RepoResult};
use promo_core::value_objects::Snowflake;

use crate::models::{AdminLogModel, AdminPermissionModel, SystemStatsModel};

use super::error::{company_not_found, influencer_not_found, map_db_error, task_not_found};

/// PostgreSQL implementation of AdminRepository
#[derive(Clone)]
pub struct PgAdminRepository {
    pool: PgPool,
}

impl PgAdminRepository {
    /// Create a new PgAdminRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Append an audit row inside an open transaction.
async fn insert_log(
    tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
    log: &AdminLog,
) -> RepoResult<()> {
    sqlx::query(
        r"
        INSERT INTO admin_logs (id, admin_id, action, target_table, target_id, detail, created_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        ",
    )
    .bind(log.id.into_inner())
    .bind(log.admin_id.into_inner())
    .bind(&log.action)
    .bind(&log.target_table)
    .bind(log.target_id.map(Snowflake::into_inner))
    .bind(&log.detail)
    .bind(log.created_at)
    .execute(&mut **tx)
    .await
    .map_err(map_db_error)?;

    Ok(())
}

#[async_trait]
impl AdminRepository for PgAdminRepository {
    #[instrument(skip(self))]
    async fn record_log(&self, log: &AdminLog) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO admin_logs (id, admin_id, action, target_table, target_id, detail, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            ",
        )
        .bind(log.id.into_inner())
        .bind(log.admin_id.into_inner())
        .bind(&log.action)
        .bind(&log.target_table)
        .bind(log.target_id.map(Snowflake::into_inner))
        .bind(&log.detail)
        .bind(log.created_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self, log))]
    async fn set_influencer_approval(
        &self,
        log: &AdminLog,
        influencer_id: Snowflake,
        approved: bool,
    ) -> RepoResult<()> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        let result = sqlx::query(
            "UPDATE influencers SET is_approved = $2, updated_at = NOW() WHERE user_id = $1",
        )
        .bind(influencer_id.into_inner())
        .bind(approved)
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(influencer_not_found(influencer_id));
        }

        insert_log(&mut tx, log).await?;
        tx.commit().await.map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self, log))]
    async fn set_influencer_verification(
        &self,
        log: &AdminLog,
        influencer_id: Snowflake,
        verified: bool,
    ) -> RepoResult<()> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        let result = sqlx::query(
            "UPDATE influencers SET is_verified = $2, updated_at = NOW() WHERE user_id = $1",
        )
        .bind(influencer_id.into_inner())
        .bind(verified)
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(influencer_not_found(influencer_id));
        }

        insert_log(&mut tx, log).await?;
        tx.commit().await.map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self, log))]
    async fn set_company_verification(
        &self,
        log: &AdminLog,
        company_id: Snowflake,
        verified: bool,
    ) -> RepoResult<()> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        let result = sqlx::query(
            "UPDATE companies SET is_verified = $2, updated_at = NOW() WHERE user_id = $1",
        )
        .bind(company_id.into_inner())
        .bind(verified)
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(company_not_found(company_id));
        }

        insert_log(&mut tx, log).await?;
        tx.commit().await.map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self, log))]
    async fn delete_task(&self, log: &AdminLog, task_id: Snowflake) -> RepoResult<()> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        sqlx::query("DELETE FROM task_applications WHERE task_id = $1")
            .bind(task_id.into_inner())
            .execute(&mut *tx)
            .await
            .map_err(map_db_error)?;

        let result = sqlx::query("DELETE FROM tasks WHERE id = $1")
            .bind(task_id.into_inner())
            .execute(&mut *tx)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(task_not_found(task_id));
        }

        insert_log(&mut tx, log).await?;
        tx.commit().await.map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn list_logs(&self, page: PageQuery) -> RepoResult<Paged<AdminLog>> {
        let total = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM admin_logs")
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)?;

        let rows = sqlx::query_as::<_, AdminLogModel>(
            r"
            SELECT id, admin_id, action, target_table, target_id, detail, created_at
            FROM admin_logs
            ORDER BY created_at DESC, id DESC
            LIMIT $1 OFFSET $2
            ",
        )
        .bind(page.limit)
        .bind(page.offset())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(Paged {
            items: rows.into_iter().map(AdminLog::from).collect(),
            total,
        })
    }

    #[instrument(skip(self))]
    async fn has_permission(&self, user_id: Snowflake, permission: &str) -> RepoResult<bool> {
        let result = sqlx::query_scalar::<_, bool>(
            r"
            SELECT EXISTS(
                SELECT 1 FROM admin_permissions
                WHERE user_id = $1 AND permission = $2
            )
            ",
        )
        .bind(user_id.into_inner())
        .bind(permission)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result)
    }

    #[instrument(skip(self))]
    async fn list_permissions(&self, user_id: Snowflake) -> RepoResult<Vec<AdminPermission>> {
        let rows = sqlx::query_as::<_, AdminPermissionModel>(
            r"
            SELECT user_id, permission, granted_at
            FROM admin_permissions
            WHERE user_id = $1
            ORDER BY permission
            ",
        )
        .bind(user_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(AdminPermission::from).collect())
    }

    #[instrument(skip(self))]
    async fn latest_stats(&self) -> RepoResult<Option<SystemStats>> {
        let result = sqlx::query_as::<_, SystemStatsModel>(
            r"
            SELECT total_users, total_influencers, total_companies, open_tasks,
                   in_progress_tasks, completed_tasks, total_applications, refreshed_at
            FROM system_stats
            ORDER BY refreshed_at DESC
            LIMIT 1
            ",
        )
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(SystemStats::from))
    }

    #[instrument(skip(self))]
    async fn refresh_stats(&self) -> RepoResult<SystemStats> {
        let snapshot = sqlx::query_as::<_, SystemStatsModel>(
            r"
            INSERT INTO system_stats (total_users, total_influencers, total_companies,
                                      open_tasks, in_progress_tasks, completed_tasks,
                                      total_applications, refreshed_at)
            SELECT
                (SELECT COUNT(*) FROM user_profiles),
                (SELECT COUNT(*) FROM influencers),
                (SELECT COUNT(*) FROM companies),
                (SELECT COUNT(*) FROM tasks WHERE status = 'open'),
                (SELECT COUNT(*) FROM tasks WHERE status = 'in_progress'),
                (SELECT COUNT(*) FROM tasks WHERE status = 'completed'),
                (SELECT COUNT(*) FROM task_applications),
                NOW()
            RETURNING total_users, total_influencers, total_companies, open_tasks,
                      in_progress_tasks, completed_tasks, total_applications, refreshed_at
            ",
        )
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(SystemStats::from(snapshot))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PgAdminRepository>();
    }
}
