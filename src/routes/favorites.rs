use axum::{Json, Router, extract::State, routing::post};

use crate::{
    error::AppResult,
    middleware::current_user::CurrentUser,
    response::MessageResponse,
    routes::params::ResourceId,
    services::favorite_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/planet/{id}",
            post(add_favorite_planet).delete(remove_favorite_planet),
        )
        .route(
            "/people/{id}",
            post(add_favorite_people).delete(remove_favorite_people),
        )
}

#[utoipa::path(
    post,
    path = "/favorite/planet/{id}",
    params(
        ("id" = i32, Path, description = "Planet ID")
    ),
    responses(
        (status = 200, description = "Added to favorites", body = MessageResponse),
        (status = 404, description = "User not found")
    ),
    tag = "Favorites"
)]
pub async fn add_favorite_planet(
    State(state): State<AppState>,
    user: CurrentUser,
    ResourceId(planet_id): ResourceId,
) -> AppResult<Json<MessageResponse>> {
    let body = favorite_service::add_favorite_planet(&state, &user, planet_id).await?;
    Ok(Json(body))
}

#[utoipa::path(
    post,
    path = "/favorite/people/{id}",
    params(
        ("id" = i32, Path, description = "Person ID")
    ),
    responses(
        (status = 200, description = "Added to favorites", body = MessageResponse),
        (status = 404, description = "User not found")
    ),
    tag = "Favorites"
)]
pub async fn add_favorite_people(
    State(state): State<AppState>,
    user: CurrentUser,
    ResourceId(people_id): ResourceId,
) -> AppResult<Json<MessageResponse>> {
    let body = favorite_service::add_favorite_people(&state, &user, people_id).await?;
    Ok(Json(body))
}

#[utoipa::path(
    delete,
    path = "/favorite/planet/{id}",
    params(
        ("id" = i32, Path, description = "Planet ID")
    ),
    responses(
        (status = 200, description = "Removed from favorites", body = MessageResponse),
        (status = 404, description = "User or favorite not found")
    ),
    tag = "Favorites"
)]
pub async fn remove_favorite_planet(
    State(state): State<AppState>,
    user: CurrentUser,
    ResourceId(planet_id): ResourceId,
) -> AppResult<Json<MessageResponse>> {
    let body = favorite_service::remove_favorite_planet(&state, &user, planet_id).await?;
    Ok(Json(body))
}

#[utoipa::path(
    delete,
    path = "/favorite/people/{id}",
    params(
        ("id" = i32, Path, description = "Person ID")
    ),
    responses(
        (status = 200, description = "Removed from favorites", body = MessageResponse),
        (status = 404, description = "User or favorite not found")
    ),
    tag = "Favorites"
)]
pub async fn remove_favorite_people(
    State(state): State<AppState>,
    user: CurrentUser,
    ResourceId(people_id): ResourceId,
) -> AppResult<Json<MessageResponse>> {
    let body = favorite_service::remove_favorite_people(&state, &user, people_id).await?;
    Ok(Json(body))
}
