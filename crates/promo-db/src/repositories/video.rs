//! PostgreSQL implementation of VideoRepository

use async_trait::async_trait;
use sqlx::{PgPool, Postgres, QueryBuilder};
use tracing::instrument;

use promo_core::entities::Video;
use promo_core::traits::{Paged, RepoResult, VideoQuery, VideoRepository, VideoSort};
use promo_core::value_objects::Snowflake;

use crate::models::VideoModel;

use super::error::map_db_error;

const VIDEO_COLUMNS: &str = "id, title, creator_name, category, cover_url, video_url, \
     play_count, like_count, featured, status, created_at";

/// PostgreSQL implementation of VideoRepository
#[derive(Clone)]
pub struct PgVideoRepository {
    pool: PgPool,
}

impl PgVideoRepository {
    /// Create a new PgVideoRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Append shared WHERE clauses for the public list
    fn push_filters<'a>(builder: &mut QueryBuilder<'a, Postgres>, query: &'a VideoQuery) {
        builder.push(" WHERE status = 'published'");

        if let Some(category) = &query.category {
            builder.push(" AND category = ").push_bind(category);
        }
        if let Some(search) = &query.search {
            builder
                .push(" AND (title ILIKE ")
                .push_bind(format!("%{search}%"))
                .push(" OR creator_name ILIKE ")
                .push_bind(format!("%{search}%"))
                .push(")");
        }
        if query.featured_only {
            builder.push(" AND featured = TRUE");
        }
    }
}

#[async_trait]
impl VideoRepository for PgVideoRepository {
    #[instrument(skip(self))]
    async fn list(&self, query: &VideoQuery) -> RepoResult<Paged<Video>> {
        let mut count_builder = QueryBuilder::new("SELECT COUNT(*) FROM videos");
        Self::push_filters(&mut count_builder, query);
        let total: i64 = count_builder
            .build_query_scalar()
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)?;

        let mut builder = QueryBuilder::new(format!("SELECT {VIDEO_COLUMNS} FROM videos"));
        Self::push_filters(&mut builder, query);

        builder.push(match query.sort {
            VideoSort::Newest => " ORDER BY created_at DESC, id DESC",
            VideoSort::MostPlayed => " ORDER BY play_count DESC, id DESC",
            VideoSort::MostLiked => " ORDER BY like_count DESC, id DESC",
        });
        builder
            .push(" LIMIT ")
            .push_bind(query.page.limit)
            .push(" OFFSET ")
            .push_bind(query.page.offset());

        let rows: Vec<VideoModel> = builder
            .build_query_as()
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(Paged {
            items: rows.into_iter().map(Video::from).collect(),
            total,
        })
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Video>> {
        let sql = format!(
            "SELECT {VIDEO_COLUMNS} FROM videos WHERE id = $1 AND status = 'published'"
        );
        let result = sqlx::query_as::<_, VideoModel>(&sql)
            .bind(id.into_inner())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(result.map(Video::from))
    }

    #[instrument(skip(self))]
    async fn featured(&self, limit: i64) -> RepoResult<Vec<Video>> {
        let sql = format!(
            "SELECT {VIDEO_COLUMNS} FROM videos \
             WHERE status = 'published' AND featured = TRUE \
             ORDER BY created_at DESC, id DESC \
             LIMIT $1"
        );
        let rows = sqlx::query_as::<_, VideoModel>(&sql)
            .bind(limit)
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(rows.into_iter().map(Video::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PgVideoRepository>();
    }
}
