//! In-memory stand-in for the catalog REST API.
//!
//! Items are kept in insertion order, the way the real backend lists them.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, post, put},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tokio::{net::TcpListener, sync::RwLock};
use tracing::debug;
use uuid::Uuid;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Item {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub description: Option<String>,
}

#[derive(Deserialize)]
pub struct ItemInput {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

pub type Db = Arc<RwLock<Vec<Item>>>;

pub fn app() -> Router {
    app_with(Vec::new())
}

/// Router pre-loaded with `items`.
pub fn app_with(items: Vec<Item>) -> Router {
    let db: Db = Arc::new(RwLock::new(items));
    Router::new()
        .route("/api/getall", get(list_items))
        .route("/api/add", post(create_item))
        .route("/api/update/{id}", put(update_item))
        .route("/api/delete/{id}", delete(delete_item))
        .route("/api/{id}", get(get_item))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn list_items(State(db): State<Db>) -> Json<Vec<Item>> {
    Json(db.read().await.clone())
}

async fn create_item(State(db): State<Db>, Json(input): Json<ItemInput>) -> (StatusCode, Json<Item>) {
    let item = Item {
        id: Uuid::new_v4().simple().to_string(),
        name: input.name,
        description: input.description,
    };
    debug!(id = %item.id, "item created");
    db.write().await.push(item.clone());
    (StatusCode::CREATED, Json(item))
}

async fn get_item(State(db): State<Db>, Path(id): Path<String>) -> Result<Json<Item>, StatusCode> {
    let items = db.read().await;
    items
        .iter()
        .find(|item| item.id == id)
        .cloned()
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}

async fn update_item(
    State(db): State<Db>,
    Path(id): Path<String>,
    Json(input): Json<ItemInput>,
) -> Result<Json<Item>, StatusCode> {
    let mut items = db.write().await;
    let item = items
        .iter_mut()
        .find(|item| item.id == id)
        .ok_or(StatusCode::NOT_FOUND)?;
    item.name = input.name;
    item.description = input.description;
    debug!(%id, "item updated");
    Ok(Json(item.clone()))
}

async fn delete_item(State(db): State<Db>, Path(id): Path<String>) -> Result<Json<Value>, StatusCode> {
    let mut items = db.write().await;
    let index = items
        .iter()
        .position(|item| item.id == id)
        .ok_or(StatusCode::NOT_FOUND)?;
    items.remove(index);
    debug!(%id, "item deleted");
    Ok(Json(json!({ "message": "Item deleted" })))
}
