use std::time::Duration;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use tracing::{info, instrument, warn};

use crate::{
    auth::{api_key::ApiKey, dto::is_valid_email, password::hash_password},
    cache::get_or_populate,
    error::ApiError,
    notify::spawn_notification,
    state::AppState,
    users::{
        dto::{CreateUserRequest, CreatedUser, Pagination, UserSnapshot},
        repo::User,
    },
};

pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users/", get(list_users).post(create_user))
        .route("/users/:user_id", get(get_user).delete(delete_user))
}

fn cache_key(id: i64) -> String {
    format!("user:{id}")
}

#[instrument(skip(state))]
pub async fn list_users(
    State(state): State<AppState>,
    Query(page): Query<Pagination>,
) -> Result<Json<Vec<User>>, ApiError> {
    let users = state
        .users
        .list(page.skip.max(0), page.limit.clamp(0, 100))
        .await?;
    Ok(Json(users))
}

/// Cache-aside read: serve the snapshot from Redis when present, otherwise
/// load the row, derive status, populate the cache with the configured TTL
/// and return. Cache outages degrade to plain database reads.
#[instrument(skip(state, _api_key))]
pub async fn get_user(
    State(state): State<AppState>,
    _api_key: ApiKey,
    Path(user_id): Path<i64>,
) -> Result<Json<UserSnapshot>, ApiError> {
    if user_id < 0 {
        return Err(ApiError::Validation(
            "User ID must be a non-negative integer".into(),
        ));
    }

    let ttl = Duration::from_secs(state.config.cache_ttl_seconds);
    let users = state.users.clone();
    let snapshot = get_or_populate(&*state.cache, &cache_key(user_id), ttl, move || async move {
        let user = users.find_by_id(user_id).await?;
        Ok(user.map(|u| UserSnapshot::from_user(&u)))
    })
    .await?
    .ok_or(ApiError::NotFound("User"))?;

    Ok(Json(snapshot))
}

#[instrument(skip(state, payload))]
pub async fn create_user(
    State(state): State<AppState>,
    Json(mut payload): Json<CreateUserRequest>,
) -> Result<Json<CreatedUser>, ApiError> {
    payload.email = payload.email.trim().to_lowercase();

    if !is_valid_email(&payload.email) {
        warn!(email = %payload.email, "invalid email");
        return Err(ApiError::Validation("Invalid email".into()));
    }
    if payload.password.len() < 8 {
        warn!("password too short");
        return Err(ApiError::Validation("Password too short".into()));
    }

    if state.users.find_by_email(&payload.email).await?.is_some() {
        warn!(email = %payload.email, "email already registered");
        return Err(ApiError::Conflict("Email already registered".into()));
    }

    let hash = hash_password(&payload.password)?;

    // Concurrent registration can slip past the pre-check; the store's
    // unique-email guard maps to Conflict through RepoError.
    let user = state
        .users
        .create(&payload.name, &payload.email, &hash)
        .await?;

    info!(user_id = user.id, email = %user.email, "user created");
    spawn_notification(
        state.notifier.clone(),
        user.email.clone(),
        "your account was created".into(),
    );

    Ok(Json(CreatedUser {
        id: user.id,
        name: user.name,
    }))
}

#[instrument(skip(state))]
pub async fn delete_user(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    if state.users.delete_by_id(user_id).await? {
        info!(user_id, "user deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::NotFound("User"))
    }
}
