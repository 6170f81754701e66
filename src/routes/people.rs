use axum::{Json, Router, extract::State, routing::get};

use crate::{
    error::AppResult,
    models::Person,
    routes::params::ResourceId,
    services::people_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_people))
        .route("/{id}", get(get_person))
}

#[utoipa::path(
    get,
    path = "/people",
    responses(
        (status = 200, description = "List people", body = Vec<Person>)
    ),
    tag = "People"
)]
pub async fn list_people(State(state): State<AppState>) -> AppResult<Json<Vec<Person>>> {
    let items = people_service::list_people(&state).await?;
    Ok(Json(items))
}

#[utoipa::path(
    get,
    path = "/people/{id}",
    params(
        ("id" = i32, Path, description = "Person ID")
    ),
    responses(
        (status = 200, description = "Get person", body = Person),
        (status = 404, description = "Person not found"),
    ),
    tag = "People"
)]
pub async fn get_person(
    ResourceId(id): ResourceId,
    State(state): State<AppState>,
) -> AppResult<Json<Person>> {
    let person = people_service::get_person(&state, id).await?;
    Ok(Json(person))
}
