#![allow(dead_code)]

use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
    response::Response,
};
use sea_orm::{ActiveModelTrait, ActiveValue::NotSet, ConnectOptions, Database, Set};
use serde_json::Value;
use starwars_blog_api::{
    app::{App, create_app},
    db::run_migrations,
    entity::{people, planets, users},
    state::AppState,
};
use tower::ServiceExt;

/// Fresh in-memory database with the schema applied. A single pooled
/// connection keeps every query on the same database.
pub async fn setup_state() -> anyhow::Result<AppState> {
    let mut options = ConnectOptions::new("sqlite::memory:");
    options
        .max_connections(1)
        .min_connections(1)
        .sqlx_logging(false);
    let orm = Database::connect(options).await?;
    run_migrations(&orm).await?;
    Ok(AppState::new(orm, 1))
}

/// State plus the application exactly as the server runs it.
pub async fn setup_app() -> anyhow::Result<(AppState, App)> {
    let state = setup_state().await?;
    let app = create_app(state.clone());
    Ok((state, app))
}

pub async fn create_user(state: &AppState, username: &str) -> anyhow::Result<i32> {
    let user = users::ActiveModel {
        id: NotSet,
        username: Set(username.to_string()),
        email: Set(format!("{username}@example.com")),
        password: Set("dummy".into()),
        is_active: Set(true),
    }
    .insert(&state.orm)
    .await?;
    Ok(user.id)
}

pub async fn create_planet(state: &AppState, name: &str) -> anyhow::Result<i32> {
    let planet = planets::ActiveModel {
        id: NotSet,
        name: Set(name.to_string()),
    }
    .insert(&state.orm)
    .await?;
    Ok(planet.id)
}

pub async fn create_person(state: &AppState, name: &str) -> anyhow::Result<i32> {
    let person = people::ActiveModel {
        id: NotSet,
        name: Set(name.to_string()),
    }
    .insert(&state.orm)
    .await?;
    Ok(person.id)
}

pub async fn seed_planets(state: &AppState, count: usize) -> anyhow::Result<Vec<i32>> {
    let mut ids = Vec::with_capacity(count);
    for n in 1..=count {
        ids.push(create_planet(state, &format!("Planet {n}")).await?);
    }
    Ok(ids)
}

pub async fn seed_people(state: &AppState, count: usize) -> anyhow::Result<Vec<i32>> {
    let mut ids = Vec::with_capacity(count);
    for n in 1..=count {
        ids.push(create_person(state, &format!("Person {n}")).await?);
    }
    Ok(ids)
}

pub async fn call(app: &App, request: Request<Body>) -> anyhow::Result<Response> {
    Ok(app.clone().oneshot(request).await?)
}

pub async fn send_raw(
    app: &App,
    method: Method,
    uri: &str,
) -> anyhow::Result<(StatusCode, String)> {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())?;
    let response = call(app, request).await?;
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await?;
    Ok((status, String::from_utf8(bytes.to_vec())?))
}

pub async fn send(app: &App, method: Method, uri: &str) -> anyhow::Result<(StatusCode, Value)> {
    let (status, text) = send_raw(app, method, uri).await?;
    let body = if text.is_empty() {
        Value::Null
    } else {
        serde_json::from_str(&text)?
    };
    Ok((status, body))
}
