use utoipa::{OpenApi, openapi::OpenApi as OpenApiSpec};
use utoipa_scalar::{Scalar, Servable};

use crate::{
    dto::favorites::{FavoritePeopleRef, FavoritePlanetRef, UserFavorites},
    models::{Person, Planet, UserSummary},
    response::MessageResponse,
    routes::{favorites, health, people, planets, sitemap, users},
};

#[derive(OpenApi)]
#[openapi(
    paths(
        sitemap::sitemap,
        health::health_check,
        people::list_people,
        people::get_person,
        planets::list_planets,
        planets::get_planet,
        users::list_users,
        users::list_favorites,
        favorites::add_favorite_planet,
        favorites::add_favorite_people,
        favorites::remove_favorite_planet,
        favorites::remove_favorite_people
    ),
    components(
        schemas(
            Person,
            Planet,
            UserSummary,
            UserFavorites,
            FavoritePlanetRef,
            FavoritePeopleRef,
            MessageResponse,
            health::HealthData
        )
    ),
    tags(
        (name = "Sitemap", description = "Listing of registered endpoints"),
        (name = "Health", description = "Health check endpoint"),
        (name = "People", description = "People endpoints"),
        (name = "Planets", description = "Planet endpoints"),
        (name = "Users", description = "User endpoints"),
        (name = "Favorites", description = "Favorite endpoints"),
    )
)]
pub struct ApiDoc;

pub const DOCS_PATH: &str = "/docs";

pub fn scalar_docs() -> Scalar<OpenApiSpec> {
    Scalar::with_url(DOCS_PATH, ApiDoc::openapi())
}
