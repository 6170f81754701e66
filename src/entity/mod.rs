pub mod favorite_people;
pub mod favorite_planets;
pub mod people;
pub mod planets;
pub mod users;

pub use favorite_people::Entity as FavoritePeople;
pub use favorite_planets::Entity as FavoritePlanets;
pub use people::Entity as People;
pub use planets::Entity as Planets;
pub use users::Entity as Users;
