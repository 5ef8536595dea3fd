//! PostgreSQL implementation of CompanyRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use promo_core::entities::Company;
use promo_core::traits::{CompanyRepository, RepoResult};
use promo_core::value_objects::Snowflake;

use crate::models::CompanyModel;

use super::error::{company_not_found, map_db_error};

/// PostgreSQL implementation of CompanyRepository
#[derive(Clone)]
pub struct PgCompanyRepository {
    pool: PgPool,
}

impl PgCompanyRepository {
    /// Create a new PgCompanyRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CompanyRepository for PgCompanyRepository {
    #[instrument(skip(self))]
    async fn find_by_user(&self, user_id: Snowflake) -> RepoResult<Option<Company>> {
        let result = sqlx::query_as::<_, CompanyModel>(
            r"
            SELECT user_id, company_name, contact_name, contact_email, contact_phone,
                   website, description, logo_url, is_verified, created_at, updated_at
            FROM companies
            WHERE user_id = $1
            ",
        )
        .bind(user_id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Company::from))
    }

    #[instrument(skip(self))]
    async fn update(&self, company: &Company) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE companies
            SET company_name = $2, contact_name = $3, contact_email = $4, contact_phone = $5,
                website = $6, description = $7, logo_url = $8, updated_at = NOW()
            WHERE user_id = $1
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
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(company_not_found(company.user_id));
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
        assert_send_sync::<PgCompanyRepository>();
    }
}
