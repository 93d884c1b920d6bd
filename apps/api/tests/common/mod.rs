//! Shared harness for the HTTP tests: an in-memory database behind the real
//! router, driven with `tower::ServiceExt::oneshot`.

#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, HeaderMap, Method, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use ridehub_api::{build_router, ApiConfig, AppState};
use ridehub_db::{Database, DbConfig};

pub const ADMIN_EMAIL: &str = "admin@ridehub.local";
pub const ADMIN_PASSWORD: &str = "admin-secret";

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Value,
}

pub struct TestApp {
    pub state: Arc<AppState>,
    router: Router,
}

impl TestApp {
    pub async fn new() -> Self {
        let config = ApiConfig {
            database_url: "sqlite::memory:".to_string(),
            secret_key: "test-secret".to_string(),
            admin_email: ADMIN_EMAIL.to_string(),
            ..ApiConfig::default()
        };
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let state = Arc::new(AppState::new(db, config));

        TestApp {
            router: build_router(state.clone()),
            state,
        }
    }

    pub async fn send(&self, request: Request<Body>) -> TestResponse {
        let response = self.router.clone().oneshot(request).await.unwrap();

        let status = response.status();
        let headers = response.headers().clone();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or_else(|_| {
                Value::String(String::from_utf8_lossy(&bytes).into_owned())
            })
        };

        TestResponse {
            status,
            headers,
            body,
        }
    }

    pub async fn request(
        &self,
        method: Method,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> TestResponse {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
        }

        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        self.send(request).await
    }

    pub async fn get(&self, uri: &str, token: Option<&str>) -> TestResponse {
        self.request(Method::GET, uri, token, None).await
    }

    pub async fn post(&self, uri: &str, token: Option<&str>, body: Value) -> TestResponse {
        self.request(Method::POST, uri, token, Some(body)).await
    }

    pub async fn put(&self, uri: &str, token: Option<&str>, body: Value) -> TestResponse {
        self.request(Method::PUT, uri, token, Some(body)).await
    }

    pub async fn patch(&self, uri: &str, token: Option<&str>, body: Value) -> TestResponse {
        self.request(Method::PATCH, uri, token, Some(body)).await
    }

    pub async fn delete(&self, uri: &str, token: Option<&str>) -> TestResponse {
        self.request(Method::DELETE, uri, token, None).await
    }

    pub async fn register(&self, username: &str, email: &str, password: &str) -> TestResponse {
        self.post(
            "/users/register",
            None,
            json!({ "username": username, "email": email, "password": password }),
        )
        .await
    }

    /// Posts the login form; `username` may also be an email.
    pub async fn login(&self, username: &str, password: &str) -> TestResponse {
        let form = format!("username={}&password={}", encode(username), encode(password));
        let request = Request::builder()
            .method(Method::POST)
            .uri("/users/login")
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(form))
            .unwrap();
        self.send(request).await
    }

    /// Registers a rider and returns `(user_id, token)`.
    pub async fn rider(&self, username: &str) -> (i64, String) {
        let email = format!("{}@example.com", username);
        let registered = self.register(username, &email, "secret").await;
        assert_eq!(registered.status, StatusCode::CREATED, "{:?}", registered.body);

        let login = self.login(&email, "secret").await;
        assert_eq!(login.status, StatusCode::OK, "{:?}", login.body);

        (
            registered.body["id"].as_i64().unwrap(),
            login.body["access_token"].as_str().unwrap().to_string(),
        )
    }

    /// Registers the admin account and returns `(user_id, token)`.
    pub async fn admin(&self) -> (i64, String) {
        let registered = self.register("admin", ADMIN_EMAIL, ADMIN_PASSWORD).await;
        assert_eq!(registered.status, StatusCode::CREATED, "{:?}", registered.body);

        let login = self.login(ADMIN_EMAIL, ADMIN_PASSWORD).await;
        (
            registered.body["id"].as_i64().unwrap(),
            login.body["access_token"].as_str().unwrap().to_string(),
        )
    }

    /// Creates the "City Bike" test vehicle and returns its id.
    pub async fn city_bike(&self, token: &str) -> i64 {
        let created = self
            .post(
                "/vehicles/",
                Some(token),
                json!({ "name": "City Bike", "vehicle_type": "bike", "price_per_hour": 5.0 }),
            )
            .await;
        assert_eq!(created.status, StatusCode::CREATED, "{:?}", created.body);
        created.body["id"].as_i64().unwrap()
    }
}

/// Percent-encodes the characters that matter in the test form bodies.
fn encode(value: &str) -> String {
    value.replace('%', "%25").replace('@', "%40").replace('&', "%26").replace('+', "%2B").replace(' ', "+")
}
