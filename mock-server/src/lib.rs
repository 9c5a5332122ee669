use std::{collections::BTreeMap, sync::Arc};

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};
use tracing::info;

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    #[serde(default)]
    pub id: u64,
    pub post_id: u64,
    pub name: String,
    pub email: String,
    pub body: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct User {
    #[serde(default)]
    pub id: u64,
    pub name: String,
    pub username: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<serde_json::Value>,
}

/// Records keyed by id; ids are handed out sequentially from 1.
#[derive(Debug)]
pub struct Store<R> {
    next_id: u64,
    items: BTreeMap<u64, R>,
}

impl<R> Default for Store<R> {
    fn default() -> Self {
        Self {
            next_id: 1,
            items: BTreeMap::new(),
        }
    }
}

#[derive(Debug, Default)]
pub struct Stores {
    pub comments: RwLock<Store<Comment>>,
    pub users: RwLock<Store<User>>,
}

pub type Db = Arc<Stores>;

/// A resource the server stores and serves over `/{collection}`.
pub trait Record: Clone + Serialize + DeserializeOwned + Send + Sync + 'static {
    const NAME: &'static str;

    fn store(db: &Stores) -> &RwLock<Store<Self>>;
    fn set_id(&mut self, id: u64);
}

impl Record for Comment {
    const NAME: &'static str = "comment";

    fn store(db: &Stores) -> &RwLock<Store<Self>> {
        &db.comments
    }

    fn set_id(&mut self, id: u64) {
        self.id = id;
    }
}

impl Record for User {
    const NAME: &'static str = "user";

    fn store(db: &Stores) -> &RwLock<Store<Self>> {
        &db.users
    }

    fn set_id(&mut self, id: u64) {
        self.id = id;
    }
}

pub fn app() -> Router {
    app_with(Db::default())
}

pub fn app_with(db: Db) -> Router {
    Router::new()
        .route("/comments", get(list::<Comment>).post(create::<Comment>))
        .route(
            "/comments/{id}",
            get(fetch::<Comment>).put(replace::<Comment>).delete(remove::<Comment>),
        )
        .route("/users", get(list::<User>).post(create::<User>))
        .route(
            "/users/{id}",
            get(fetch::<User>).put(replace::<User>).delete(remove::<User>),
        )
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn list<R: Record>(State(db): State<Db>) -> Json<Vec<R>> {
    let store = R::store(&db).read().await;
    Json(store.items.values().cloned().collect())
}

async fn create<R: Record>(State(db): State<Db>, Json(mut input): Json<R>) -> (StatusCode, Json<R>) {
    let mut store = R::store(&db).write().await;
    let id = store.next_id;
    store.next_id += 1;
    input.set_id(id);
    store.items.insert(id, input.clone());
    info!(id, "created {}", R::NAME);
    (StatusCode::CREATED, Json(input))
}

async fn fetch<R: Record>(State(db): State<Db>, Path(id): Path<u64>) -> Result<Json<R>, StatusCode> {
    let store = R::store(&db).read().await;
    store.items.get(&id).cloned().map(Json).ok_or(StatusCode::NOT_FOUND)
}

/// PUT replaces the whole record; the id always comes from the path.
async fn replace<R: Record>(
    State(db): State<Db>,
    Path(id): Path<u64>,
    Json(mut input): Json<R>,
) -> Result<Json<R>, StatusCode> {
    let mut store = R::store(&db).write().await;
    let slot = store.items.get_mut(&id).ok_or(StatusCode::NOT_FOUND)?;
    input.set_id(id);
    *slot = input.clone();
    info!(id, "replaced {}", R::NAME);
    Ok(Json(input))
}

async fn remove<R: Record>(
    State(db): State<Db>,
    Path(id): Path<u64>,
) -> Result<Json<serde_json::Value>, StatusCode> {
    let mut store = R::store(&db).write().await;
    store.items.remove(&id).ok_or(StatusCode::NOT_FOUND)?;
    info!(id, "deleted {}", R::NAME);
    Ok(Json(serde_json::json!({})))
}
