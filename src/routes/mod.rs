use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};

pub mod echo;
pub mod health;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(echo::read_root))
        .route("/items/", get(echo::list_items))
        .route("/items/:item_id", get(echo::read_item))
        .route("/users/:user_id/items/:item_id", get(echo::read_user_item))
        .route("/send-notification/:email", post(health::send_notification))
        .route("/health/redis", get(health::redis_health))
}
