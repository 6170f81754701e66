use argon2::{
    Argon2, PasswordHasher,
    password_hash::{SaltString, rand_core::OsRng},
};
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ColumnTrait, DatabaseConnection, EntityTrait,
    QueryFilter, Set,
};
use starwars_blog_api::{
    config::AppConfig,
    db::{create_orm_conn, run_migrations},
    entity::{people, planets, users},
};

const PLANETS: &[&str] = &[
    "Tatooine",
    "Alderaan",
    "Yavin IV",
    "Hoth",
    "Dagobah",
    "Bespin",
    "Endor",
    "Naboo",
];

const PEOPLE: &[&str] = &[
    "Luke Skywalker",
    "C-3PO",
    "R2-D2",
    "Darth Vader",
    "Leia Organa",
    "Obi-Wan Kenobi",
];

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = AppConfig::from_env()?;

    let orm = create_orm_conn(&config.database_url).await?;
    // Ensure migrations are applied.
    run_migrations(&orm).await?;

    let user_id = ensure_user(&orm, "luke", "luke@example.com", "usetheforce").await?;
    seed_planets(&orm).await?;
    seed_people(&orm).await?;

    println!("Seed completed. Current user ID: {user_id}");
    Ok(())
}

async fn ensure_user(
    orm: &DatabaseConnection,
    username: &str,
    email: &str,
    password: &str,
) -> anyhow::Result<i32> {
    if let Some(existing) = users::Entity::find()
        .filter(users::Column::Email.eq(email))
        .one(orm)
        .await?
    {
        println!("User {email} already present");
        return Ok(existing.id);
    }

    let salt = SaltString::generate(&mut OsRng);
    let password_hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| anyhow::anyhow!(e.to_string()))?
        .to_string();

    let user = users::ActiveModel {
        id: NotSet,
        username: Set(username.to_string()),
        email: Set(email.to_string()),
        password: Set(password_hash),
        is_active: Set(true),
    }
    .insert(orm)
    .await?;

    println!("Created user {email}");
    Ok(user.id)
}

async fn seed_planets(orm: &DatabaseConnection) -> anyhow::Result<()> {
    for name in PLANETS {
        let exists = planets::Entity::find()
            .filter(planets::Column::Name.eq(*name))
            .one(orm)
            .await?
            .is_some();
        if exists {
            continue;
        }
        planets::ActiveModel {
            id: NotSet,
            name: Set(name.to_string()),
        }
        .insert(orm)
        .await?;
    }

    println!("Seeded planets");
    Ok(())
}

async fn seed_people(orm: &DatabaseConnection) -> anyhow::Result<()> {
    for name in PEOPLE {
        let exists = people::Entity::find()
            .filter(people::Column::Name.eq(*name))
            .one(orm)
            .await?
            .is_some();
        if exists {
            continue;
        }
        people::ActiveModel {
            id: NotSet,
            name: Set(name.to_string()),
        }
        .insert(orm)
        .await?;
    }

    println!("Seeded people");
    Ok(())
}
