use axum::{
    extract::{Path, Query},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::instrument;

#[instrument]
pub async fn read_root() -> Json<Value> {
    Json(json!({ "Hello": "World" }))
}

#[derive(Debug, Deserialize)]
pub struct ItemQuery {
    pub q: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ItemEcho {
    pub item_id: i64,
    pub q: Option<String>,
}

#[instrument]
pub async fn read_item(Path(item_id): Path<i64>, Query(query): Query<ItemQuery>) -> Json<ItemEcho> {
    Json(ItemEcho {
        item_id,
        q: query.q,
    })
}

#[derive(Debug, Deserialize)]
pub struct ItemsQuery {
    pub q: Option<String>,
    #[serde(default)]
    pub skip: i64,
}

#[instrument]
pub async fn list_items(Query(query): Query<ItemsQuery>) -> Json<Value> {
    Json(json!({ "q": query.q, "skip": query.skip }))
}

#[instrument]
pub async fn read_user_item(Path((user_id, item_id)): Path<(i64, String)>) -> Json<Value> {
    Json(json!({ "user_id": user_id, "item_id": item_id }))
}
