use std::{path::PathBuf, str::FromStr};

use axum::{
    Router,
    body::Body,
    http::{HeaderMap, Method, Request, StatusCode, header},
};
use http_body_util::BodyExt;
use magnus_workflow::Settings;
use serde_json::{Value, json};
use sqlx::{SqlitePool, sqlite::SqliteConnectOptions};
use sqlx_migrator::{Migrate, Plan};
use tower::ServiceExt;

pub async fn setup_test_pool(path: PathBuf) -> anyhow::Result<SqlitePool> {
    let opts = SqliteConnectOptions::from_str(&format!("sqlite:{}", path.to_str().unwrap()))?
        .create_if_missing(true)
        .foreign_keys(true);
    let pool = SqlitePool::connect_with(opts).await?;
    let mut conn = pool.acquire().await?;
    magnus_db::migrator::<sqlx::Sqlite>()?
        .run(&mut conn, &Plan::apply_all())
        .await?;

    Ok(pool)
}

pub struct TestApp {
    pub app: Router,
    pub pool: SqlitePool,
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Value,
}

impl TestApp {
    pub async fn new(path: PathBuf) -> anyhow::Result<Self> {
        Self::with_settings(path, Settings::default()).await
    }

    pub async fn with_settings(path: PathBuf, settings: Settings) -> anyhow::Result<Self> {
        let pool = setup_test_pool(path).await?;
        let app = magnus::create_app(pool.clone(), settings);

        Ok(Self { app, pool })
    }

    pub async fn send(
        &self,
        method: Method,
        uri: &str,
        body: Option<&Value>,
    ) -> anyhow::Result<TestResponse> {
        let mut request = Request::builder().method(method).uri(uri);
        let body = match body {
            Some(value) => {
                request = request.header(header::CONTENT_TYPE, "application/json");
                Body::from(serde_json::to_vec(value)?)
            }
            None => Body::empty(),
        };

        self.raw(request.body(body)?).await
    }

    pub async fn raw(&self, request: Request<Body>) -> anyhow::Result<TestResponse> {
        let response = self.app.clone().oneshot(request).await?;
        let status = response.status();
        let headers = response.headers().clone();
        let bytes = response.into_body().collect().await?.to_bytes();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes)?
        };

        Ok(TestResponse {
            status,
            headers,
            body,
        })
    }

    pub async fn get(&self, uri: &str) -> anyhow::Result<TestResponse> {
        self.send(Method::GET, uri, None).await
    }

    pub async fn post(&self, uri: &str, body: &Value) -> anyhow::Result<TestResponse> {
        self.send(Method::POST, uri, Some(body)).await
    }

    pub async fn put(&self, uri: &str, body: &Value) -> anyhow::Result<TestResponse> {
        self.send(Method::PUT, uri, Some(body)).await
    }

    pub async fn patch(&self, uri: &str, body: &Value) -> anyhow::Result<TestResponse> {
        self.send(Method::PATCH, uri, Some(body)).await
    }

    pub async fn delete(&self, uri: &str) -> anyhow::Result<TestResponse> {
        self.send(Method::DELETE, uri, None).await
    }

    /// Creates an entity and returns its generated id.
    pub async fn create(&self, path: &str, body: Value) -> anyhow::Result<i64> {
        let response = self.post(&format!("/api/{path}"), &body).await?;
        anyhow::ensure!(
            response.status == StatusCode::CREATED,
            "creating {path} returned {}: {}",
            response.status,
            response.body
        );

        response.body["id"]
            .as_i64()
            .ok_or_else(|| anyhow::anyhow!("no id in {}", response.body))
    }

    /// Sales user and client every budget needs.
    pub async fn create_owner(&self) -> anyhow::Result<(i64, i64)> {
        let user = self
            .create(
                "app-users",
                json!({
                    "login": "sales",
                    "email": "sales@magnus.localhost",
                    "role": "SALES",
                    "isActive": true,
                    "createdAt": "2026-05-01T09:00:00Z",
                    "updatedAt": "2026-05-01T09:00:00Z",
                }),
            )
            .await?;

        let client = self
            .create(
                "clients",
                json!({
                    "name": "Marta",
                    "email": "marta@client.localhost",
                    "phone": "+34 600 000 000",
                    "isActive": true,
                    "createdAt": "2026-05-01T09:00:00Z",
                    "updatedAt": "2026-05-01T09:00:00Z",
                }),
            )
            .await?;

        Ok((user, client))
    }
}

pub fn budget(name: &str, (user, client): (i64, i64)) -> Value {
    json!({
        "name": name,
        "clientName": "Marta",
        "eventDate": "2026-06-20",
        "eventLocation": "Hotel Miramar",
        "guestCount": 60,
        "eventGender": "MIXED",
        "totalAmount": 4500.0,
        "mealsAmount": 2500.0,
        "status": "DRAFT",
        "paymentStatus": "UNPAID",
        "isClosed": false,
        "workflowTriggered": false,
        "version": 1,
        "conflictStatus": "NONE",
        "createdAt": "2026-05-01T09:00:00Z",
        "updatedAt": "2026-05-01T09:00:00Z",
        "createdBy": { "id": user },
        "client": { "id": client },
    })
}
