use axum::{Router, http::Uri, routing::get};

use crate::{error::AppError, state::AppState};

pub mod doc;
pub mod favorites;
pub mod health;
pub mod params;
pub mod people;
pub mod planets;
pub mod sitemap;
pub mod users;

// Build the API router without binding state; it will be provided at the top level.
pub fn create_api_router() -> Router<AppState> {
    Router::new()
        .route("/", get(sitemap::sitemap))
        .route("/health", get(health::health_check))
        .nest("/people", people::router())
        .nest("/planets", planets::router())
        .nest("/users", users::router())
        .nest("/favorite", favorites::router())
        .merge(doc::scalar_docs())
        .fallback(not_found)
}

async fn not_found(uri: Uri) -> AppError {
    params::not_found_path(uri.path()).into()
}
