use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::entity::{favorite_people, favorite_planets};

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone, PartialEq, Eq)]
pub struct FavoritePlanetRef {
    pub planet_id: i32,
}

impl From<favorite_planets::Model> for FavoritePlanetRef {
    fn from(model: favorite_planets::Model) -> Self {
        Self {
            planet_id: model.planet_id,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone, PartialEq, Eq)]
pub struct FavoritePeopleRef {
    pub people_id: i32,
}

impl From<favorite_people::Model> for FavoritePeopleRef {
    fn from(model: favorite_people::Model) -> Self {
        Self {
            people_id: model.people_id,
        }
    }
}

/// Everything the current user has favorited, in insertion order.
#[derive(Debug, Serialize, Deserialize, ToSchema, Clone, PartialEq, Eq)]
pub struct UserFavorites {
    pub favorite_planets: Vec<FavoritePlanetRef>,
    pub favorite_people: Vec<FavoritePeopleRef>,
}
