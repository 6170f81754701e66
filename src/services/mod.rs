pub mod favorite_service;
pub mod people_service;
pub mod planet_service;
pub mod user_service;
