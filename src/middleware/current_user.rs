use axum::{extract::FromRequestParts, http::request::Parts};

use crate::{error::AppError, state::AppState};

/// Identity the favorites routes act on.
///
/// There is no authentication: every request resolves to the user configured
/// through `CURRENT_USER_ID`. Handlers still receive it as an explicit
/// parameter so a real identity source can replace this extractor alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrentUser {
    pub user_id: i32,
}

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = AppError;

    async fn from_request_parts(
        _parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        Ok(CurrentUser {
            user_id: state.current_user_id,
        })
    }
}
