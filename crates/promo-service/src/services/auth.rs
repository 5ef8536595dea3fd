//! Authentication service
//!
//! Handles influencer/company registration, login, token refresh, and logout.

use promo_cache::RefreshTokenData;
use promo_common::auth::{hash_password, validate_password_strength, verify_password};
use promo_core::entities::{Company, Influencer, UserProfile, UserRole};
use promo_core::Snowflake;
use tracing::{info, instrument, warn};

use crate::dto::{
    AuthResponse, CurrentUserResponse, LoginRequest, RefreshTokenRequest, RegisterCompanyRequest,
    RegisterInfluencerRequest,
};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Authentication service
pub struct AuthService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AuthService<'a> {
    /// Create a new AuthService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Register a new influencer account. The profile row and the
    /// influencer row are created in one transaction.
    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn register_influencer(
        &self,
        request: RegisterInfluencerRequest,
    ) -> ServiceResult<AuthResponse> {
        validate_password_strength(&request.password).map_err(ServiceError::from)?;

        if self.ctx.profile_repo().email_exists(&request.email).await? {
            return Err(ServiceError::conflict("Email already registered"));
        }

        let password_hash =
            hash_password(&request.password).map_err(|e| ServiceError::internal(e.to_string()))?;

        let user_id = self.ctx.generate_id();
        let mut profile = UserProfile::new(user_id, request.email, UserRole::Influencer);
        profile.phone = request.phone;
        let influencer = Influencer::new(user_id, request.nickname);

        self.ctx
            .profile_repo()
            .create_influencer_account(&profile, &influencer, &password_hash)
            .await?;

        info!(user_id = %user_id, "Influencer registered");

        self.issue_tokens(&profile).await
    }

    /// Register a new company account. The profile row and the company row
    /// are created in one transaction.
    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn register_company(
        &self,
        request: RegisterCompanyRequest,
    ) -> ServiceResult<AuthResponse> {
        validate_password_strength(&request.password).map_err(ServiceError::from)?;

        if self.ctx.profile_repo().email_exists(&request.email).await? {
            return Err(ServiceError::conflict("Email already registered"));
        }

        let password_hash =
            hash_password(&request.password).map_err(|e| ServiceError::internal(e.to_string()))?;

        let user_id = self.ctx.generate_id();
        let mut profile = UserProfile::new(user_id, request.email, UserRole::Company);
        profile.phone = request.phone;
        let company = Company::new(user_id, request.company_name);

        self.ctx
            .profile_repo()
            .create_company_account(&profile, &company, &password_hash)
            .await?;

        info!(user_id = %user_id, "Company registered");

        self.issue_tokens(&profile).await
    }

    /// Login with email and password
    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn login(&self, request: LoginRequest) -> ServiceResult<AuthResponse> {
        let profile = self
            .ctx
            .profile_repo()
            .find_by_email(&request.email)
            .await?
            .ok_or_else(|| {
                warn!("Login failed: unknown email");
                ServiceError::App(promo_common::AppError::InvalidCredentials)
            })?;

        let password_hash = self
            .ctx
            .profile_repo()
            .get_password_hash(profile.user_id)
            .await?
            .ok_or_else(|| {
                warn!(user_id = %profile.user_id, "Login failed: no password hash");
                ServiceError::App(promo_common::AppError::InvalidCredentials)
            })?;

        let is_valid = verify_password(&request.password, &password_hash)
            .map_err(|e| ServiceError::internal(e.to_string()))?;

        if !is_valid {
            warn!(user_id = %profile.user_id, "Login failed: invalid password");
            return Err(ServiceError::App(promo_common::AppError::InvalidCredentials));
        }

        info!(user_id = %profile.user_id, "User logged in");

        self.issue_tokens(&profile).await
    }

    /// Refresh the token pair using a refresh token. The old refresh token
    /// is revoked and a new one stored (rotation).
    #[instrument(skip(self, request))]
    pub async fn refresh_tokens(&self, request: RefreshTokenRequest) -> ServiceResult<AuthResponse> {
        let refresh_data = self
            .ctx
            .refresh_token_store()
            .validate(&request.refresh_token)
            .await
            .map_err(|e| ServiceError::internal(e.to_string()))?
            .ok_or(ServiceError::App(promo_common::AppError::InvalidToken))?;

        let profile = self
            .ctx
            .profile_repo()
            .find_by_id(refresh_data.user_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", refresh_data.user_id.to_string()))?;

        self.ctx
            .refresh_token_store()
            .revoke(&request.refresh_token)
            .await
            .map_err(|e| ServiceError::internal(e.to_string()))?;

        info!(user_id = %profile.user_id, "Tokens refreshed");

        self.issue_tokens(&profile).await
    }

    /// Logout by revoking one refresh token, or all of the user's tokens
    /// when none is given
    #[instrument(skip(self, refresh_token))]
    pub async fn logout(
        &self,
        user_id: Snowflake,
        refresh_token: Option<String>,
    ) -> ServiceResult<()> {
        if let Some(token) = refresh_token {
            self.ctx
                .refresh_token_store()
                .revoke(&token)
                .await
                .map_err(|e| ServiceError::internal(e.to_string()))?;
        } else {
            self.ctx
                .refresh_token_store()
                .revoke_all_for_user(user_id)
                .await
                .map_err(|e| ServiceError::internal(e.to_string()))?;
        }

        info!(user_id = %user_id, "User logged out");
        Ok(())
    }

    /// Validate an access token and return the account ID and role
    #[instrument(skip(self, token))]
    pub async fn validate_token(&self, token: &str) -> ServiceResult<(Snowflake, UserRole)> {
        let claims = self
            .ctx
            .jwt_service()
            .validate_access_token(token)
            .map_err(ServiceError::from)?;

        let user_id = claims.user_id().map_err(ServiceError::from)?;
        Ok((user_id, claims.role))
    }

    /// Mint a token pair for the profile and persist the refresh token
    async fn issue_tokens(&self, profile: &UserProfile) -> ServiceResult<AuthResponse> {
        let token_pair = self
            .ctx
            .jwt_service()
            .generate_token_pair(profile.user_id, profile.user_type)
            .map_err(|e| ServiceError::internal(e.to_string()))?;

        let refresh_data = RefreshTokenData::new(profile.user_id);
        self.ctx
            .refresh_token_store()
            .store(&token_pair.refresh_token, &refresh_data)
            .await
            .map_err(|e| ServiceError::internal(e.to_string()))?;

        Ok(AuthResponse::new(
            token_pair.access_token,
            token_pair.refresh_token,
            token_pair.expires_in,
            CurrentUserResponse::from(profile),
        ))
    }
}
