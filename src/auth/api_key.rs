use axum::{
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};

use crate::{error::ApiError, state::AppState};

/// Shared-secret header check for endpoints guarded by `x-api-key`.
/// A missing or mismatched key is rejected with 400, matching the
/// upstream API's behavior rather than 401.
pub struct ApiKey;

#[derive(Clone)]
pub struct ExpectedApiKey(pub String);

impl FromRef<AppState> for ExpectedApiKey {
    fn from_ref(state: &AppState) -> Self {
        ExpectedApiKey(state.config.api_key.clone())
    }
}

#[axum::async_trait]
impl<S> FromRequestParts<S> for ApiKey
where
    S: Send + Sync,
    ExpectedApiKey: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let ExpectedApiKey(expected) = ExpectedApiKey::from_ref(state);
        let provided = parts
            .headers
            .get("x-api-key")
            .and_then(|v| v.to_str().ok())
            .ok_or(ApiError::InvalidApiKey)?;
        if provided != expected {
            return Err(ApiError::InvalidApiKey);
        }
        Ok(ApiKey)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request;

    async fn extract(header: Option<&str>) -> Result<ApiKey, ApiError> {
        let mut builder = Request::builder().uri("/users/1");
        if let Some(value) = header {
            builder = builder.header("x-api-key", value);
        }
        let (mut parts, _) = builder.body(()).unwrap().into_parts();
        let expected = ExpectedApiKey("mysecretkey".into());
        ApiKey::from_request_parts(&mut parts, &expected).await
    }

    #[tokio::test]
    async fn accepts_matching_key() {
        assert!(extract(Some("mysecretkey")).await.is_ok());
    }

    #[tokio::test]
    async fn rejects_wrong_key() {
        assert!(matches!(
            extract(Some("wrong")).await,
            Err(ApiError::InvalidApiKey)
        ));
    }

    #[tokio::test]
    async fn rejects_missing_key() {
        assert!(matches!(extract(None).await, Err(ApiError::InvalidApiKey)));
    }
}
