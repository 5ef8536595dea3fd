//! PostgreSQL implementation of InfluencerRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use promo_core::entities::Influencer;
use promo_core::traits::{InfluencerRepository, PageQuery, Paged, RepoResult};
use promo_core::value_objects::Snowflake;

use crate::models::InfluencerModel;

use super::error::{influencer_not_found, map_db_error};

const INFLUENCER_COLUMNS: &str = "user_id, nickname, real_name, tiktok_handle, tiktok_url, \
     bio, location, categories, tags, hourly_rate, experience_years, is_verified, is_approved, \
     status, follower_count, rating, rating_count, created_at, updated_at";

/// PostgreSQL implementation of InfluencerRepository
#[derive(Clone)]
pub struct PgInfluencerRepository {
    pool: PgPool,
}

impl PgInfluencerRepository {
    /// Create a new PgInfluencerRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl InfluencerRepository for PgInfluencerRepository {
    #[instrument(skip(self))]
    async fn find_by_user(&self, user_id: Snowflake) -> RepoResult<Option<Influencer>> {
        let sql = format!("SELECT {INFLUENCER_COLUMNS} FROM influencers WHERE user_id = $1");
        let result = sqlx::query_as::<_, InfluencerModel>(&sql)
            .bind(user_id.into_inner())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(result.map(Influencer::from))
    }

    #[instrument(skip(self))]
    async fn list_public(&self, page: PageQuery) -> RepoResult<Paged<Influencer>> {
        let total = sqlx::query_scalar::<_, i64>(
            r"
            SELECT COUNT(*) FROM influencers
            WHERE is_approved = TRUE AND status = 'active'
            ",
        )
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        let sql = format!(
            "SELECT {INFLUENCER_COLUMNS} FROM influencers \
             WHERE is_approved = TRUE AND status = 'active' \
             ORDER BY follower_count DESC, user_id DESC \
             LIMIT $1 OFFSET $2"
        );
        let rows = sqlx::query_as::<_, InfluencerModel>(&sql)
            .bind(page.limit)
            .bind(page.offset())
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(Paged {
            items: rows.into_iter().map(Influencer::from).collect(),
            total,
        })
    }

    #[instrument(skip(self))]
    async fn update(&self, influencer: &Influencer) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE influencers
            SET nickname = $2, real_name = $3, tiktok_handle = $4, tiktok_url = $5,
                bio = $6, location = $7, categories = $8, tags = $9,
                hourly_rate = $10, experience_years = $11, updated_at = NOW()
            WHERE user_id = $1
            ",
        )
        .bind(influencer.user_id.into_inner())
        .bind(&influencer.nickname)
        .bind(&influencer.real_name)
        .bind(&influencer.tiktok_handle)
        .bind(&influencer.tiktok_url)
        .bind(&influencer.bio)
        .bind(&influencer.location)
        .bind(&influencer.categories)
        .bind(&influencer.tags)
        .bind(influencer.hourly_rate)
        .bind(influencer.experience_years)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(influencer_not_found(influencer.user_id));
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
        assert_send_sync::<PgInfluencerRepository>();
    }
}
