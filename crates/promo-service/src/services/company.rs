//! Company service
//!
//! Self-service company profile management.

use promo_core::Snowflake;
use tracing::{info, instrument};

use crate::dto::{CompanyResponse, UpdateCompanyRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Company service
pub struct CompanyService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> CompanyService<'a> {
    /// Create a new CompanyService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Get the company profile owned by an account
    #[instrument(skip(self))]
    pub async fn get_own(&self, user_id: Snowflake) -> ServiceResult<CompanyResponse> {
        let company = self
            .ctx
            .company_repo()
            .find_by_user(user_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Company", user_id.to_string()))?;

        Ok(CompanyResponse::from(&company))
    }

    /// Apply a self-service edit. The verification flag belongs to the
    /// admin surface.
    #[instrument(skip(self, request))]
    pub async fn update(
        &self,
        user_id: Snowflake,
        request: UpdateCompanyRequest,
    ) -> ServiceResult<CompanyResponse> {
        let mut company = self
            .ctx
            .company_repo()
            .find_by_user(user_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Company", user_id.to_string()))?;

        if let Some(name) = request.company_name {
            company.company_name = name;
        }
        if let Some(contact_name) = request.contact_name {
            company.contact_name = Some(contact_name);
        }
        if let Some(contact_email) = request.contact_email {
            company.contact_email = Some(contact_email);
        }
        if let Some(contact_phone) = request.contact_phone {
            company.contact_phone = Some(contact_phone);
        }
        if let Some(website) = request.website {
            company.website = Some(website);
        }
        if let Some(description) = request.description {
            company.description = Some(description);
        }
        if let Some(logo_url) = request.logo_url {
            company.logo_url = Some(logo_url);
        }
        company.updated_at = chrono::Utc::now();

        self.ctx.company_repo().update(&company).await?;

        info!(user_id = %user_id, "Company profile updated");

        Ok(CompanyResponse::from(&company))
    }
}
