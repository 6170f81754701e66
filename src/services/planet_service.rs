use sea_orm::{EntityTrait, QueryOrder};

use crate::{
    entity::planets::{Column, Entity as Planets},
    error::{ApiError, AppResult},
    models::Planet,
    state::AppState,
};

pub async fn list_planets(state: &AppState) -> AppResult<Vec<Planet>> {
    let items = Planets::find()
        .order_by_asc(Column::Id)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(Planet::from)
        .collect();
    Ok(items)
}

pub async fn get_planet(state: &AppState, id: i32) -> AppResult<Planet> {
    let planet = Planets::find_by_id(id)
        .one(&state.orm)
        .await?
        .ok_or_else(|| ApiError::not_found("Planet not found"))?;
    Ok(Planet::from(planet))
}
