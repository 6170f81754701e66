mod common;

use axum::http::StatusCode;
use starwars_blog_api::{
    dto::favorites::{FavoritePeopleRef, FavoritePlanetRef},
    error::AppError,
    middleware::current_user::CurrentUser,
    services::{favorite_service, user_service},
};

use common::{create_user, seed_people, seed_planets, setup_state};

// Favorites are scoped to whichever identity the handler is given.
#[tokio::test]
async fn favorites_follow_the_given_user() -> anyhow::Result<()> {
    let state = setup_state().await?;
    let luke = create_user(&state, "luke").await?;
    let leia = create_user(&state, "leia").await?;
    seed_planets(&state, 2).await?;
    seed_people(&state, 2).await?;

    let luke = CurrentUser { user_id: luke };
    let leia = CurrentUser { user_id: leia };

    favorite_service::add_favorite_planet(&state, &luke, 1).await?;
    favorite_service::add_favorite_people(&state, &luke, 2).await?;
    favorite_service::add_favorite_planet(&state, &leia, 2).await?;

    let luke_favs = user_service::list_favorites(&state, &luke).await?;
    assert_eq!(
        luke_favs.favorite_planets,
        vec![FavoritePlanetRef { planet_id: 1 }]
    );
    assert_eq!(
        luke_favs.favorite_people,
        vec![FavoritePeopleRef { people_id: 2 }]
    );

    let leia_favs = user_service::list_favorites(&state, &leia).await?;
    assert_eq!(
        leia_favs.favorite_planets,
        vec![FavoritePlanetRef { planet_id: 2 }]
    );
    assert!(leia_favs.favorite_people.is_empty());

    // Leia never favorited planet 1.
    let err = favorite_service::remove_favorite_planet(&state, &leia, 1)
        .await
        .unwrap_err();
    assert_not_found(err, "Favorite planet not found");

    Ok(())
}

#[tokio::test]
async fn favorites_keep_insertion_order() -> anyhow::Result<()> {
    let state = setup_state().await?;
    let user = CurrentUser {
        user_id: create_user(&state, "han").await?,
    };
    seed_planets(&state, 3).await?;

    for planet_id in [3, 1, 2] {
        favorite_service::add_favorite_planet(&state, &user, planet_id).await?;
    }

    let favorites = user_service::list_favorites(&state, &user).await?;
    let ids: Vec<i32> = favorites
        .favorite_planets
        .iter()
        .map(|fav| fav.planet_id)
        .collect();
    assert_eq!(ids, vec![3, 1, 2]);
    Ok(())
}

#[tokio::test]
async fn unknown_user_is_rejected_before_any_write() -> anyhow::Result<()> {
    let state = setup_state().await?;
    seed_planets(&state, 1).await?;
    let ghost = CurrentUser { user_id: 99 };

    let err = favorite_service::add_favorite_planet(&state, &ghost, 1)
        .await
        .unwrap_err();
    assert_not_found(err, "User not found");

    let err = user_service::list_favorites(&state, &ghost)
        .await
        .unwrap_err();
    assert_not_found(err, "User not found");
    Ok(())
}

fn assert_not_found(err: AppError, message: &str) {
    match err {
        AppError::Api(api) => {
            assert_eq!(api.status, StatusCode::NOT_FOUND);
            assert_eq!(api.message, message);
        }
        other => panic!("expected a 404 api error, got {other:?}"),
    }
}
