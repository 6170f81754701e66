use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::entity::{people, planets, users};

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone, PartialEq, Eq)]
pub struct Planet {
    pub id: i32,
    pub name: String,
}

impl From<planets::Model> for Planet {
    fn from(model: planets::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone, PartialEq, Eq)]
pub struct Person {
    pub id: i32,
    pub name: String,
}

impl From<people::Model> for Person {
    fn from(model: people::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
        }
    }
}

/// Public view of a user. Email and password never leave the service.
#[derive(Debug, Serialize, Deserialize, ToSchema, Clone, PartialEq, Eq)]
pub struct UserSummary {
    pub id: i32,
    pub username: String,
}

impl From<users::Model> for UserSummary {
    fn from(model: users::Model) -> Self {
        Self {
            id: model.id,
            username: model.username,
        }
    }
}
