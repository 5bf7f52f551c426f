//! In-memory mock of the remote television store.
//!
//! Reproduces the quirks of the real CRUD store so the client's
//! normalization policy can be exercised over actual HTTP: string `_id`s
//! assigned on create, an empty body on successful PUT (the default), and a
//! delete success status that varies. Both behaviors are configurable
//! through `Quirks`.

use std::{collections::HashMap, sync::Arc};

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};
use uuid::Uuid;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Television {
    #[serde(rename = "_id")]
    pub id: String,
    pub brand: String,
    pub model: String,
    #[serde(rename = "channelCount")]
    pub channel_count: u32,
}

#[derive(Debug, Deserialize)]
pub struct TelevisionInput {
    pub brand: String,
    pub model: String,
    #[serde(rename = "channelCount")]
    pub channel_count: u32,
}

/// How the store answers a successful PUT.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum UpdateReply {
    /// 200 with an empty body, which is what the live store does.
    #[default]
    Empty,
    /// 200 echoing the updated record as JSON.
    Echo,
    /// 200 with a non-JSON plain-text body.
    Garbage,
}

/// Knobs for the store's inconsistent behaviors.
#[derive(Clone, Copy, Debug)]
pub struct Quirks {
    pub update_reply: UpdateReply,
    pub delete_status: u16,
}

impl Default for Quirks {
    fn default() -> Self {
        Self {
            update_reply: UpdateReply::Empty,
            delete_status: 200,
        }
    }
}

#[derive(Clone)]
struct AppState {
    db: Arc<RwLock<HashMap<String, Television>>>,
    quirks: Quirks,
}

pub fn app() -> Router {
    app_with(Quirks::default())
}

pub fn app_with(quirks: Quirks) -> Router {
    let state = AppState {
        db: Arc::new(RwLock::new(HashMap::new())),
        quirks,
    };
    Router::new()
        .route("/televisions", get(list_televisions).post(create_television))
        .route(
            "/televisions/{id}",
            axum::routing::put(update_television).delete(delete_television),
        )
        .with_state(state)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

pub async fn run_with(listener: TcpListener, quirks: Quirks) -> Result<(), std::io::Error> {
    axum::serve(listener, app_with(quirks)).await
}

async fn list_televisions(State(state): State<AppState>) -> Json<Vec<Television>> {
    let db = state.db.read().await;
    Json(db.values().cloned().collect())
}

async fn create_television(
    State(state): State<AppState>,
    Json(input): Json<TelevisionInput>,
) -> (StatusCode, Json<Television>) {
    let tv = Television {
        id: Uuid::new_v4().simple().to_string(),
        brand: input.brand,
        model: input.model,
        channel_count: input.channel_count,
    };
    state.db.write().await.insert(tv.id.clone(), tv.clone());
    (StatusCode::CREATED, Json(tv))
}

async fn update_television(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(input): Json<TelevisionInput>,
) -> Response {
    let mut db = state.db.write().await;
    let Some(tv) = db.get_mut(&id) else {
        return not_found();
    };
    tv.brand = input.brand;
    tv.model = input.model;
    tv.channel_count = input.channel_count;
    match state.quirks.update_reply {
        UpdateReply::Empty => StatusCode::OK.into_response(),
        UpdateReply::Echo => (StatusCode::OK, Json(tv.clone())).into_response(),
        UpdateReply::Garbage => (StatusCode::OK, "updated ok").into_response(),
    }
}

async fn delete_television(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    let mut db = state.db.write().await;
    if db.remove(&id).is_none() {
        return not_found();
    }
    StatusCode::from_u16(state.quirks.delete_status)
        .unwrap_or(StatusCode::OK)
        .into_response()
}

fn not_found() -> Response {
    (StatusCode::NOT_FOUND, "Resource not found").into_response()
}
