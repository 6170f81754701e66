use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ColumnTrait, EntityTrait, ModelTrait, QueryFilter,
    QueryOrder, Set,
};

use crate::{
    entity::{favorite_people, favorite_planets},
    error::{ApiError, AppResult},
    middleware::current_user::CurrentUser,
    response::MessageResponse,
    services::user_service::require_user,
    state::AppState,
};

/// The planet id is stored as given, whether or not such a planet exists.
pub async fn add_favorite_planet(
    state: &AppState,
    user: &CurrentUser,
    planet_id: i32,
) -> AppResult<MessageResponse> {
    let owner = require_user(state, user).await?;

    let favorite = favorite_planets::ActiveModel {
        id: NotSet,
        user_id: Set(owner.id),
        planet_id: Set(planet_id),
    }
    .insert(&state.orm)
    .await?;

    tracing::info!(
        user_id = owner.id,
        planet_id,
        favorite_id = favorite.id,
        "favorite planet added"
    );

    Ok(MessageResponse::new("Planet added to favorites"))
}

pub async fn add_favorite_people(
    state: &AppState,
    user: &CurrentUser,
    people_id: i32,
) -> AppResult<MessageResponse> {
    let owner = require_user(state, user).await?;

    let favorite = favorite_people::ActiveModel {
        id: NotSet,
        user_id: Set(owner.id),
        people_id: Set(people_id),
    }
    .insert(&state.orm)
    .await?;

    tracing::info!(
        user_id = owner.id,
        people_id,
        favorite_id = favorite.id,
        "favorite people added"
    );

    Ok(MessageResponse::new("People added to favorites"))
}

/// Removes one matching row per call, the oldest first.
pub async fn remove_favorite_planet(
    state: &AppState,
    user: &CurrentUser,
    planet_id: i32,
) -> AppResult<MessageResponse> {
    let owner = require_user(state, user).await?;

    let favorite = favorite_planets::Entity::find()
        .filter(favorite_planets::Column::UserId.eq(owner.id))
        .filter(favorite_planets::Column::PlanetId.eq(planet_id))
        .order_by_asc(favorite_planets::Column::Id)
        .one(&state.orm)
        .await?
        .ok_or_else(|| ApiError::not_found("Favorite planet not found"))?;

    let favorite_id = favorite.id;
    favorite.delete(&state.orm).await?;

    tracing::info!(
        user_id = owner.id,
        planet_id,
        favorite_id,
        "favorite planet removed"
    );

    Ok(MessageResponse::new("Planet removed from favorites"))
}

pub async fn remove_favorite_people(
    state: &AppState,
    user: &CurrentUser,
    people_id: i32,
) -> AppResult<MessageResponse> {
    let owner = require_user(state, user).await?;

    let favorite = favorite_people::Entity::find()
        .filter(favorite_people::Column::UserId.eq(owner.id))
        .filter(favorite_people::Column::PeopleId.eq(people_id))
        .order_by_asc(favorite_people::Column::Id)
        .one(&state.orm)
        .await?
        .ok_or_else(|| ApiError::not_found("Favorite people not found"))?;

    let favorite_id = favorite.id;
    favorite.delete(&state.orm).await?;

    tracing::info!(
        user_id = owner.id,
        people_id,
        favorite_id,
        "favorite people removed"
    );

    Ok(MessageResponse::new("People removed from favorites"))
}
