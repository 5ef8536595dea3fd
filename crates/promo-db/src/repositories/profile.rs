//! PostgreSQL implementation of ProfileRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use promo_core::entities::{Company, Influencer, UserProfile};
use promo_core::error::DomainError;
use promo_core::traits::{ProfileRepository, RepoResult};
use promo_core::value_objects::Snowflake;

use crate::models::ProfileModel;

use super::error::{map_db_error, map_unique_violation, profile_not_found};

/// PostgreSQL implementation of ProfileRepository
#[derive(Clone)]
pub struct PgProfileRepository {
    pool: PgPool,
}

impl PgProfileRepository {
    /// Create a new PgProfileRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProfileRepository for PgProfileRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, user_id: Snowflake) -> RepoResult<Option<UserProfile>> {
        let result = sqlx::query_as::<_, ProfileModel>(
            r"
            SELECT user_id, email, phone, user_type, password_hash, created_at, updated_at
            FROM user_profiles
            WHERE user_id = $1
            ",
        )
        .bind(user_id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(UserProfile::from))
    }

    #[instrument(skip(self))]
    async fn find_by_email(&self, email: &str) -> RepoResult<Option<UserProfile>> {
        let result = sqlx::query_as::<_, ProfileModel>(
            r"
            SELECT user_id, email, phone, user_type, password_hash, created_at, updated_at
            FROM user_profiles
            WHERE email = $1
            ",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(UserProfile::from))
    }

    #[instrument(skip(self))]
    async fn email_exists(&self, email: &str) -> RepoResult<bool> {
        let result = sqlx::query_scalar::<_, bool>(
            r"
            SELECT EXISTS(SELECT 1 FROM user_profiles WHERE email = $1)
            ",
        )
        .bind(email)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result)
    }

    #[instrument(skip(self, password_hash))]
    async fn create_influencer_account(
        &self,
        profile: &UserProfile,
        influencer: &Influencer,
        password_hash: &str,
    ) -> RepoResult<()> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        sqlx::query(
            r"
            INSERT INTO user_profiles (user_id, email, phone, user_type, password_hash, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            ",
        )
        .bind(profile.user_id.into_inner())
        .bind(&profile.email)
        .bind(&profile.phone)
        .bind(profile.user_type.as_str())
        .bind(password_hash)
        .bind(profile.created_at)
        .bind(profile.updated_at)
        .execute(&mut *tx)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::EmailAlreadyExists))?;

        sqlx::query(
            r"
            INSERT INTO influencers (user_id, nickname, real_name, tiktok_handle, tiktok_url,
                                     bio, location, categories, tags, hourly_rate,
                                     experience_years, is_verified, is_approved, status,
                                     follower_count, rating, rating_count, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, $17, $18, $19)
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
        .bind(influencer.is_verified)
        .bind(influencer.is_approved)
        .bind(influencer.status.as_str())
        .bind(influencer.follower_count)
        .bind(influencer.rating)
        .bind(influencer.rating_count)
        .bind(influencer.created_at)
        .bind(influencer.updated_at)
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        tx.commit().await.map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self, password_hash))]
    async fn create_company_account(
        &self,
        profile: &UserProfile,
        company: &Company,
        password_hash: &str,
    ) -> RepoResult<()> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        sqlx::query(
            r"
            INSERT INTO user_profiles (user_id, email, phone, user_type, password_hash, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            ",
        )
        .bind(profile.user_id.into_inner())
        .bind(&profile.email)
        .bind(&profile.phone)
        .bind(profile.user_type.as_str())
        .bind(password_hash)
        .bind(profile.created_at)
        .bind(profile.updated_at)
        .execute(&mut *tx)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::EmailAlreadyExists))?;

        sqlx::query(
            r"
            INSERT INTO companies (user_id, company_name, contact_name, contact_email, contact_phone,
                                   website, description, logo_url, is_verified, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            ",
        )
        .bind(company.user_id.into_inner())
        .bind(&company.company_name)
        .bind(&company.contact_name)
        .bind(&company.contact_email)
        .bind(&company.contact_phone)
        .bind(&company.website)
        .bind(&company.description)
        .bind(&company.logo_url)
        .bind(company.is_verified)
        .bind(company.created_at)
        .bind(company.updated_at)
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        tx.commit().await.map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn update(&self, profile: &UserProfile) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE user_profiles
            SET phone = $2, updated_at = NOW()
            WHERE user_id = $1
            ",
        )
        .bind(profile.user_id.into_inner())
        .bind(&profile.phone)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(profile_not_found(profile.user_id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn get_password_hash(&self, user_id: Snowflake) -> RepoResult<Option<String>> {
        let result = sqlx::query_scalar::<_, String>(
            r"
            SELECT password_hash FROM user_profiles WHERE user_id = $1
            ",
        )
        .bind(user_id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result)
    }

    #[instrument(skip(self, password_hash))]
    async fn update_password(&self, user_id: Snowflake, password_hash: &str) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE user_profiles
            SET password_hash = $2, updated_at = NOW()
            WHERE user_id = $1
            ",
        )
        .bind(user_id.into_inner())
        .bind(password_hash)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(profile_not_found(user_id));
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
        assert_send_sync::<PgProfileRepository>();
    }
}
