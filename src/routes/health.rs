use axum::{
    extract::{Path, State},
    Json,
};
use serde_json::{json, Value};
use tracing::{instrument, warn};

use crate::{error::ApiError, notify::spawn_notification, state::AppState};

/// PINGs the cache store. Unlike the read path, an outage here is surfaced:
/// this endpoint exists to observe the cache, not to degrade around it.
#[instrument(skip(state))]
pub async fn redis_health(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    state.cache.ping().await.map_err(|e| {
        warn!(error = %e, "redis ping failed");
        ApiError::Unavailable("redis unreachable".into())
    })?;
    Ok(Json(json!({ "status": "ok" })))
}

/// Schedules the notification write for after the response is sent and
/// returns immediately.
#[instrument(skip(state))]
pub async fn send_notification(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> Json<Value> {
    spawn_notification(state.notifier.clone(), email, "some notification".into());
    Json(json!({ "message": "Notification sent in the background" }))
}
