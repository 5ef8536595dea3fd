//! Profile service
//!
//! Resolves the current account with its role row and handles
//! self-service profile mutations.

use promo_common::auth::{hash_password, validate_password_strength, verify_password};
use promo_core::entities::UserRole;
use promo_core::Snowflake;
use tracing::{info, instrument, warn};

use crate::dto::{
    ChangePasswordRequest, CompanyResponse, CurrentUserResponse, InfluencerResponse,
    ProfileResponse, UpdateProfileRequest,
};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Profile service
pub struct ProfileService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ProfileService<'a> {
    /// Create a new ProfileService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Resolve the current account with its role row. The role comes only
    /// from the `user_type` column; admins carry no role row.
    #[instrument(skip(self))]
    pub async fn me(&self, user_id: Snowflake) -> ServiceResult<ProfileResponse> {
        let profile = self
            .ctx
            .profile_repo()
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", user_id.to_string()))?;

        let mut response = ProfileResponse {
            user: CurrentUserResponse::from(&profile),
            influencer: None,
            company: None,
        };

        match profile.user_type {
            UserRole::Influencer => {
                response.influencer = self
                    .ctx
                    .influencer_repo()
                    .find_by_user(user_id)
                    .await?
                    .map(|i| InfluencerResponse::from(&i));
            }
            UserRole::Company => {
                response.company = self
                    .ctx
                    .company_repo()
                    .find_by_user(user_id)
                    .await?
                    .map(|c| CompanyResponse::from(&c));
            }
            UserRole::Admin => {}
        }

        Ok(response)
    }

    /// Update the mutable profile fields
    #[instrument(skip(self, request))]
    pub async fn update(
        &self,
        user_id: Snowflake,
        request: UpdateProfileRequest,
    ) -> ServiceResult<CurrentUserResponse> {
        let mut profile = self
            .ctx
            .profile_repo()
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", user_id.to_string()))?;

        profile.set_phone(request.phone);
        self.ctx.profile_repo().update(&profile).await?;

        info!(user_id = %user_id, "Profile updated");

        Ok(CurrentUserResponse::from(&profile))
    }

    /// Change the account password after verifying the current one.
    /// All refresh tokens are revoked so existing sessions must log in again.
    #[instrument(skip(self, request))]
    pub async fn change_password(
        &self,
        user_id: Snowflake,
        request: ChangePasswordRequest,
    ) -> ServiceResult<()> {
        validate_password_strength(&request.new_password).map_err(ServiceError::from)?;

        let current_hash = self
            .ctx
            .profile_repo()
            .get_password_hash(user_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", user_id.to_string()))?;

        let is_valid = verify_password(&request.current_password, &current_hash)
            .map_err(|e| ServiceError::internal(e.to_string()))?;

        if !is_valid {
            warn!(user_id = %user_id, "Password change rejected: wrong current password");
            return Err(ServiceError::App(promo_common::AppError::InvalidCredentials));
        }

        let new_hash = hash_password(&request.new_password)
            .map_err(|e| ServiceError::internal(e.to_string()))?;
        self.ctx
            .profile_repo()
            .update_password(user_id, &new_hash)
            .await?;

        self.ctx
            .refresh_token_store()
            .revoke_all_for_user(user_id)
            .await
            .map_err(|e| ServiceError::internal(e.to_string()))?;

        info!(user_id = %user_id, "Password changed");
        Ok(())
    }
}
