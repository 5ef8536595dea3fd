//! Pagination extractor
//!
//! Extracts page/limit pagination parameters from query strings.

use axum::{
    async_trait,
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use promo_core::PageQuery;
use serde::Deserialize;

use crate::response::ApiError;

/// Raw pagination query parameters
#[derive(Debug, Deserialize)]
pub struct PaginationParams {
    #[serde(default)]
    pub page: Option<i64>,
    #[serde(default)]
    pub limit: Option<i64>,
}

/// Validated pagination. `PageQuery::new` clamps page to >= 1 and limit to 1-100.
#[derive(Debug, Clone)]
pub struct Pagination(pub PageQuery);

impl From<PaginationParams> for Pagination {
    fn from(params: PaginationParams) -> Self {
        let defaults = PageQuery::default();
        Pagination(PageQuery::new(
            params.page.unwrap_or(defaults.page),
            params.limit.unwrap_or(defaults.limit),
        ))
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for Pagination
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(params) = Query::<PaginationParams>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::invalid_query(e.to_string()))?;

        Ok(Pagination::from(params))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_applied() {
        let Pagination(query) = Pagination::from(PaginationParams {
            page: None,
            limit: None,
        });
        assert_eq!(query.page, 1);
        assert_eq!(query.limit, 20);
    }

    #[test]
    fn test_limit_clamped() {
        let Pagination(query) = Pagination::from(PaginationParams {
            page: Some(0),
            limit: Some(500),
        });
        assert_eq!(query.page, 1);
        assert_eq!(query.limit, 100);
    }
}
