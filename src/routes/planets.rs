use axum::{Json, Router, extract::State, routing::get};

use crate::{
    error::AppResult,
    models::Planet,
    routes::params::ResourceId,
    services::planet_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_planets))
        .route("/{id}", get(get_planet))
}

#[utoipa::path(
    get,
    path = "/planets",
    responses(
        (status = 200, description = "List planets", body = Vec<Planet>)
    ),
    tag = "Planets"
)]
pub async fn list_planets(State(state): State<AppState>) -> AppResult<Json<Vec<Planet>>> {
    let items = planet_service::list_planets(&state).await?;
    Ok(Json(items))
}

#[utoipa::path(
    get,
    path = "/planets/{id}",
    params(
        ("id" = i32, Path, description = "Planet ID")
    ),
    responses(
        (status = 200, description = "Get planet", body = Planet),
        (status = 404, description = "Planet not found"),
    ),
    tag = "Planets"
)]
pub async fn get_planet(
    ResourceId(id): ResourceId,
    State(state): State<AppState>,
) -> AppResult<Json<Planet>> {
    let planet = planet_service::get_planet(&state, id).await?;
    Ok(Json(planet))
}
