use axum::{
    extract::{FromRequestParts, OriginalUri, Path},
    http::request::Parts,
};
use serde_json::{Map, Value};

use crate::error::{ApiError, AppError};

/// Integer id taken from the last path segment.
///
/// A segment that is not an integer means the route does not match, so it is
/// answered the same way as an unknown path. That includes digit strings too
/// large for an `i32`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourceId(pub i32);

impl<S> FromRequestParts<S> for ResourceId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Path::<i32>::from_request_parts(parts, state).await {
            Ok(Path(id)) => Ok(ResourceId(id)),
            Err(rejection) => {
                // Nested routers see the URI with their prefix stripped.
                let uri = parts
                    .extensions
                    .get::<OriginalUri>()
                    .map(|original| &original.0)
                    .unwrap_or(&parts.uri);
                tracing::debug!(error = %rejection, uri = %uri, "unparseable id");
                Err(not_found_path(uri.path()).into())
            }
        }
    }
}

pub fn not_found_path(path: &str) -> ApiError {
    let mut payload = Map::new();
    payload.insert("path".to_string(), Value::String(path.to_string()));
    ApiError::not_found("Not Found").with_payload(payload)
}
