//! Shared harness: a full router over a temporary SQLite file and CSV fixtures.
#![allow(dead_code)]

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, HeaderMap, Method, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use recipebox_server::config::Config;
use recipebox_server::db::create_pool;
use recipebox_server::video::{VideoSearch, VideoSearchError};
use recipebox_server::{app, AppContext, AppState};
use serde_json::Value;
use std::collections::HashMap;
use std::fs;
use std::sync::{Arc, Mutex};
use tempfile::TempDir;
use tower::ServiceExt;

pub const IMAGE_BASE: &str = "https://images.example.com/bucket";

pub const FOOD_CSV: &str = "\
recipe_id,Title,Ingredients,Instructions,Image_Name
1,Pasta Carbonara,\"['spaghetti', 'egg', 'pancetta', 'parmesan']\",Cook the pasta.,pasta-carbonara
2,Pancakes,\"['flour', 'egg', 'whole milk', 'butter']\",Whisk and fry.,pancakes
3,Milkshake,\"['milk', 'ice cream']\",Blend.,
4,Pasta,\"['pasta', 'olive oil']\",Boil.,pasta
5,Pepper Medley,\"['pepper', 'peppers', 'peppercorns', 'peppercorn', 'bell-pepper', 'peppermint', 'peppery', 'pepperoni', 'peppered', 'red-pepper', 'black-pepper', 'white-pepper']\",Mix.,pepper-medley
";

pub const ITEM_CSV: &str = "\
ItemName
Milk (whole)
Milk (skim)
Buttermilk
Eggs
";

/// Video search double that records queries and answers from a script.
pub struct StubVideos {
    pub answer: Result<Option<String>, u16>,
    pub queries: Mutex<Vec<String>>,
}

impl StubVideos {
    pub fn returning(video_id: Option<&str>) -> Arc<Self> {
        Arc::new(Self {
            answer: Ok(video_id.map(str::to_string)),
            queries: Mutex::new(Vec::new()),
        })
    }

    pub fn failing(status: u16) -> Arc<Self> {
        Arc::new(Self {
            answer: Err(status),
            queries: Mutex::new(Vec::new()),
        })
    }
}

#[async_trait]
impl VideoSearch for StubVideos {
    async fn first_video_id(&self, query: &str) -> Result<Option<String>, VideoSearchError> {
        self.queries.lock().unwrap().push(query.to_string());
        match &self.answer {
            Ok(id) => Ok(id.clone()),
            Err(status) => Err(VideoSearchError::Api {
                status: *status,
                body: "quota exceeded".to_string(),
            }),
        }
    }
}

pub struct Response {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Value,
}

pub struct TestApp {
    pub router: Router,
    pub state: AppState,
    _dir: TempDir,
}

impl TestApp {
    pub fn new() -> Self {
        Self::with_videos(None)
    }

    pub fn with_videos(videos: Option<Arc<dyn VideoSearch>>) -> Self {
        let dir = tempfile::tempdir().unwrap();
        let food = dir.path().join("Food.csv");
        let items = dir.path().join("Item.csv");
        let database = dir.path().join("test.sqlite3");
        fs::write(&food, FOOD_CSV).unwrap();
        fs::write(&items, ITEM_CSV).unwrap();

        let vars: HashMap<&str, String> = HashMap::from([
            ("DATABASE_URL", database.to_string_lossy().into_owned()),
            ("FOOD_CSV_PATH", food.to_string_lossy().into_owned()),
            ("ITEM_CSV_PATH", items.to_string_lossy().into_owned()),
            ("IMAGE_BASE_URL", IMAGE_BASE.to_string()),
            ("INSECURE_PASSWORD_HASHING", "1".to_string()),
        ]);
        let config = Config::from_lookup(|key| vars.get(key).cloned()).unwrap();

        let pool = create_pool(&config.database_url).unwrap();
        let state: AppState = Arc::new(AppContext::from_config(&config, pool, videos));

        Self {
            router: app(state.clone()),
            state,
            _dir: dir,
        }
    }

    pub async fn request(
        &self,
        method: Method,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> Response {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
        }
        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };
        self.send(request).await
    }

    pub async fn send(&self, request: Request<Body>) -> Response {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let headers = response.headers().clone();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };
        Response {
            status,
            headers,
            body,
        }
    }

    pub async fn get(&self, uri: &str, token: Option<&str>) -> Response {
        self.request(Method::GET, uri, token, None).await
    }

    pub async fn post(&self, uri: &str, token: Option<&str>, body: Value) -> Response {
        self.request(Method::POST, uri, token, Some(body)).await
    }

    pub async fn register(&self, username: &str, email: &str, password: &str) -> Response {
        self.post(
            "/register",
            None,
            serde_json::json!({"username": username, "email": email, "password": password}),
        )
        .await
    }

    pub async fn login(&self, email: &str, password: &str) -> Response {
        self.post(
            "/login",
            None,
            serde_json::json!({"email": email, "password": password}),
        )
        .await
    }

    /// Register and log in a fresh user, returning their session token.
    pub async fn user_token(&self, username: &str) -> String {
        let email = format!("{}@example.com", username);
        let registered = self.register(username, &email, "password").await;
        assert_eq!(registered.status, StatusCode::CREATED);
        let login = self.login(&email, "password").await;
        assert_eq!(login.status, StatusCode::OK);
        login.body["token"].as_str().unwrap().to_string()
    }
}
