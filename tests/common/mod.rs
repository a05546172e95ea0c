#![allow(dead_code)]

use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};

use async_trait::async_trait;
use chrono::NaiveDate;

use axum::{
    body::{to_bytes, Body},
    http::{header, Request, Response},
    Router,
};
use game_vault::{
    auth::JwtService,
    config::Config,
    create_app,
    errors::{AppError, Result},
    handlers::AppState,
    models::{AppRole, Game, GameFilter, NewGame, TrafficLog},
    storage::LocalStorage,
    store::{CatalogStore, MemoryStore},
};
use tempfile::TempDir;
use uuid::Uuid;

pub const SECRET: &str = "test-provider-secret";
pub const BOUNDARY: &str = "----gamevaultboundary";

pub struct TestApp {
    pub app: Router,
    pub store: Arc<MemoryStore>,
    pub storage: Arc<LocalStorage>,
    pub jwt: JwtService,
    _dir: TempDir,
}

fn build_app(store: Arc<dyn CatalogStore>) -> (Router, Arc<LocalStorage>, TempDir) {
    let dir = TempDir::new().expect("Failed to create temp dir");

    let config = Config {
        storage_dir: dir.path().to_string_lossy().to_string(),
        public_base_url: "http://cdn.test".to_string(),
        jwt_secret: SECRET.to_string(),
        ..Config::default()
    };

    let storage = Arc::new(
        LocalStorage::new(dir.path(), &config.public_base_url).expect("Failed to open storage"),
    );
    let state = AppState::new(store, storage.clone(), config).expect("Failed to build state");

    (create_app(state), storage, dir)
}

impl TestApp {
    pub fn new() -> Self {
        let store = Arc::new(MemoryStore::new());
        let (app, storage, dir) = build_app(store.clone());

        Self {
            app,
            store,
            storage,
            jwt: JwtService::new(SECRET),
            _dir: dir,
        }
    }

    pub fn token_for(&self, user_id: Uuid) -> String {
        self.jwt
            .generate_access_token(user_id, Some("admin@example.com"))
            .unwrap()
    }

    pub async fn admin_token(&self) -> String {
        let user_id = Uuid::new_v4();
        self.store.grant_role(user_id, AppRole::Admin).await;
        self.token_for(user_id)
    }
}

/// A `MemoryStore` whose visit and listing calls can be switched to fail
/// like a lost database connection.
#[derive(Default)]
pub struct FlakyStore {
    pub inner: MemoryStore,
    pub fail_visits: AtomicBool,
    pub fail_listing: AtomicBool,
}

fn connection_lost() -> AppError {
    AppError::Database(sqlx::Error::PoolTimedOut)
}

#[async_trait]
impl CatalogStore for FlakyStore {
    async fn list_games(&self, filter: &GameFilter) -> Result<(Vec<Game>, i64)> {
        if self.fail_listing.load(Ordering::SeqCst) {
            return Err(connection_lost());
        }
        self.inner.list_games(filter).await
    }

    async fn get_game(&self, id: Uuid) -> Result<Option<Game>> {
        self.inner.get_game(id).await
    }

    async fn insert_game(&self, game: &NewGame) -> Result<Game> {
        self.inner.insert_game(game).await
    }

    async fn record_visit(&self, date: NaiveDate) -> Result<TrafficLog> {
        if self.fail_visits.load(Ordering::SeqCst) {
            return Err(connection_lost());
        }
        self.inner.record_visit(date).await
    }

    async fn page_views_between(&self, from: NaiveDate, to: NaiveDate) -> Result<i64> {
        self.inner.page_views_between(from, to).await
    }

    async fn has_role(&self, user_id: Uuid, role: AppRole) -> Result<bool> {
        self.inner.has_role(user_id, role).await
    }

    async fn ping(&self) -> Result<()> {
        self.inner.ping().await
    }
}

/// An app backed by a `FlakyStore`.
pub struct FlakyApp {
    pub app: Router,
    pub store: Arc<FlakyStore>,
    _dir: TempDir,
}

impl FlakyApp {
    pub fn new() -> Self {
        let store = Arc::new(FlakyStore::default());
        let (app, _storage, dir) = build_app(store.clone());

        Self {
            app,
            store,
            _dir: dir,
        }
    }
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

pub async fn body_text(response: Response<Body>) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

/// A multipart/form-data body built by hand.
#[derive(Default)]
pub struct MultipartBody {
    body: Vec<u8>,
}

impl MultipartBody {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(mut self, name: &str, value: &str) -> Self {
        self.body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
            )
            .as_bytes(),
        );
        self
    }

    pub fn file(mut self, name: &str, filename: &str, content_type: &str, data: &[u8]) -> Self {
        self.body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"; filename=\"{filename}\"\r\nContent-Type: {content_type}\r\n\r\n"
            )
            .as_bytes(),
        );
        self.body.extend_from_slice(data);
        self.body.extend_from_slice(b"\r\n");
        self
    }

    pub fn into_request(mut self, uri: &str, token: Option<&str>) -> Request<Body> {
        self.body
            .extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());

        let mut builder = Request::builder()
            .method("POST")
            .uri(uri)
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={BOUNDARY}"),
            );
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }
        builder.body(Body::from(self.body)).unwrap()
    }
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

pub fn get_with_token(uri: &str, token: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .header(header::AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap()
}
