//! Influencer service
//!
//! Self-service influencer profile management. The public catalog listing
//! lives in the catalog service.

use promo_core::Snowflake;
use tracing::{info, instrument};

use crate::dto::{InfluencerResponse, UpdateInfluencerRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Influencer service
pub struct InfluencerService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> InfluencerService<'a> {
    /// Create a new InfluencerService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Get the influencer profile owned by an account
    #[instrument(skip(self))]
    pub async fn get_own(&self, user_id: Snowflake) -> ServiceResult<InfluencerResponse> {
        let influencer = self
            .ctx
            .influencer_repo()
            .find_by_user(user_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Influencer", user_id.to_string()))?;

        Ok(InfluencerResponse::from(&influencer))
    }

    /// Apply a self-service edit. Approval, verification, and suspension
    /// flags are not touchable here; those belong to the admin surface.
    #[instrument(skip(self, request))]
    pub async fn update(
        &self,
        user_id: Snowflake,
        request: UpdateInfluencerRequest,
    ) -> ServiceResult<InfluencerResponse> {
        let mut influencer = self
            .ctx
            .influencer_repo()
            .find_by_user(user_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Influencer", user_id.to_string()))?;

        if let Some(nickname) = request.nickname {
            influencer.nickname = nickname;
        }
        if let Some(real_name) = request.real_name {
            influencer.real_name = Some(real_name);
        }
        if let Some(handle) = request.tiktok_handle {
            influencer.tiktok_handle = Some(handle);
        }
        if let Some(url) = request.tiktok_url {
            influencer.tiktok_url = Some(url);
        }
        if let Some(bio) = request.bio {
            influencer.bio = Some(bio);
        }
        if let Some(location) = request.location {
            influencer.location = Some(location);
        }
        if let Some(categories) = request.categories {
            influencer.categories = categories;
        }
        if let Some(tags) = request.tags {
            influencer.tags = tags;
        }
        if let Some(rate) = request.hourly_rate {
            influencer.hourly_rate = Some(rate);
        }
        if let Some(years) = request.experience_years {
            influencer.experience_years = years;
        }
        influencer.updated_at = chrono::Utc::now();

        self.ctx.influencer_repo().update(&influencer).await?;

        info!(user_id = %user_id, "Influencer profile updated");

        Ok(InfluencerResponse::from(&influencer))
    }
}
