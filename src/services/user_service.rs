use sea_orm::{EntityTrait, ModelTrait, QueryOrder};

use crate::{
    dto::favorites::{FavoritePeopleRef, FavoritePlanetRef, UserFavorites},
    entity::{
        favorite_people, favorite_planets,
        users::{self, Entity as Users},
    },
    error::{ApiError, AppResult},
    middleware::current_user::CurrentUser,
    models::UserSummary,
    state::AppState,
};

pub async fn list_users(state: &AppState) -> AppResult<Vec<UserSummary>> {
    let items = Users::find()
        .order_by_asc(users::Column::Id)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(UserSummary::from)
        .collect();
    Ok(items)
}

/// Load the current user's row, or fail with 404 when it does not exist.
pub async fn require_user(state: &AppState, user: &CurrentUser) -> AppResult<users::Model> {
    Users::find_by_id(user.user_id)
        .one(&state.orm)
        .await?
        .ok_or_else(|| ApiError::not_found("User not found").into())
}

pub async fn list_favorites(state: &AppState, user: &CurrentUser) -> AppResult<UserFavorites> {
    let owner = require_user(state, user).await?;

    let favorite_planets = owner
        .find_related(favorite_planets::Entity)
        .order_by_asc(favorite_planets::Column::Id)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(FavoritePlanetRef::from)
        .collect();

    let favorite_people = owner
        .find_related(favorite_people::Entity)
        .order_by_asc(favorite_people::Column::Id)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(FavoritePeopleRef::from)
        .collect();

    Ok(UserFavorites {
        favorite_planets,
        favorite_people,
    })
}
