use axum::{Json, Router, extract::State, routing::get};

use crate::{
    dto::favorites::UserFavorites,
    error::AppResult,
    middleware::current_user::CurrentUser,
    models::UserSummary,
    services::user_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_users))
        .route("/favorites", get(list_favorites))
}

#[utoipa::path(
    get,
    path = "/users",
    responses(
        (status = 200, description = "List users", body = Vec<UserSummary>)
    ),
    tag = "Users"
)]
pub async fn list_users(State(state): State<AppState>) -> AppResult<Json<Vec<UserSummary>>> {
    let items = user_service::list_users(&state).await?;
    Ok(Json(items))
}

#[utoipa::path(
    get,
    path = "/users/favorites",
    responses(
        (status = 200, description = "Favorites of the current user", body = UserFavorites),
        (status = 404, description = "User not found")
    ),
    tag = "Users"
)]
pub async fn list_favorites(
    State(state): State<AppState>,
    user: CurrentUser,
) -> AppResult<Json<UserFavorites>> {
    let favorites = user_service::list_favorites(&state, &user).await?;
    Ok(Json(favorites))
}
