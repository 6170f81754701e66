use sea_orm::{EntityTrait, QueryOrder};

use crate::{
    entity::people::{Column, Entity as People},
    error::{ApiError, AppResult},
    models::Person,
    state::AppState,
};

pub async fn list_people(state: &AppState) -> AppResult<Vec<Person>> {
    let items = People::find()
        .order_by_asc(Column::Id)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(Person::from)
        .collect();
    Ok(items)
}

pub async fn get_person(state: &AppState, id: i32) -> AppResult<Person> {
    let person = People::find_by_id(id)
        .one(&state.orm)
        .await?
        .ok_or_else(|| ApiError::not_found("Person not found"))?;
    Ok(Person::from(person))
}
