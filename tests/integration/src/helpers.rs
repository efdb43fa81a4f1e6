//! Test helpers for integration tests
//!
//! Provides utilities for building a service context over the in-memory
//! store, spawning test servers and making authenticated HTTP requests.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use social_api::{create_app, AppState};
use social_common::{
    AppConfig, AppSettings, CorsConfig, DatabaseConfig, JwtConfig, JwtService, PaginationConfig,
    RateLimitConfig, ServerConfig,
};
use social_core::Id;
use social_service::{ServiceContext, ServiceContextBuilder};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

use crate::memory::MemoryStore;

pub const TEST_JWT_SECRET: &str = "integration-test-secret-long-enough";

/// Create a test configuration; nothing here touches the environment
pub fn test_config() -> AppConfig {
    AppConfig {
        app: AppSettings::default(),
        api: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
        },
        database: DatabaseConfig {
            url: "postgres://unused".to_string(),
            max_connections: 1,
            min_connections: 0,
        },
        jwt: JwtConfig {
            secret: TEST_JWT_SECRET.to_string(),
            access_token_expiry: 900,
        },
        rate_limit: RateLimitConfig {
            requests_per_second: 1000,
            burst: 1000,
        },
        cors: CorsConfig::default(),
        pagination: PaginationConfig::default(),
    }
}

/// Builder over `store` for every repository
pub fn context_builder(store: Arc<MemoryStore>) -> ServiceContextBuilder {
    ServiceContextBuilder::new()
        .post_repo(store.clone())
        .collection_repo(store.clone())
        .user_repo(store.clone())
        .follow_repo(store)
}

/// Service context over `store` with default policies
pub fn service_context(store: Arc<MemoryStore>) -> ServiceContext {
    context_builder(store)
        .build()
        .expect("every repository is set")
}

/// Test server instance that manages lifecycle
pub struct TestServer {
    pub addr: SocketAddr,
    pub client: Client,
    jwt: JwtService,
    _handle: JoinHandle<()>,
}

impl TestServer {
    /// Start a server over `store`
    pub async fn start(store: Arc<MemoryStore>) -> Result<Self> {
        Self::start_with_context(service_context(store)).await
    }

    /// Start a server over a prepared context
    pub async fn start_with_context(ctx: ServiceContext) -> Result<Self> {
        let config = test_config();
        let jwt = JwtService::new(&config.jwt.secret, config.jwt.access_token_expiry);

        let state = AppState::new(ctx, config, None);
        let app = create_app(state)?;

        // Port 0: let the OS pick a free port
        let listener = TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
        let addr = listener.local_addr()?;

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.ok();
        });

        let client = Client::builder().timeout(Duration::from_secs(10)).build()?;

        Ok(Self {
            addr,
            client,
            jwt,
            _handle: handle,
        })
    }

    /// Get base URL for the server
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Access token for `user`
    pub fn token_for(&self, user: Id) -> String {
        self.jwt
            .issue_access_token(user)
            .expect("HS256 encoding does not fail")
    }

    /// Make a GET request
    pub async fn get(&self, path: &str) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self.client.get(&url).send().await?)
    }

    /// Make a GET request with a bearer token
    pub async fn get_auth(&self, path: &str, token: &str) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self
            .client
            .get(&url)
            .header("Authorization", format!("Bearer {token}"))
            .send()
            .await?)
    }

    /// Make a GET request as `user`
    pub async fn get_as(&self, path: &str, user: Id) -> Result<Response> {
        self.get_auth(path, &self.token_for(user)).await
    }
}

/// Assert response status and parse JSON body
pub async fn assert_json<T: DeserializeOwned>(
    response: Response,
    expected_status: StatusCode,
) -> Result<T> {
    let status = response.status();
    if status != expected_status {
        let body = response.text().await?;
        anyhow::bail!("Expected status {expected_status}, got {status}. Body: {body}");
    }
    Ok(response.json().await?)
}

/// Ids of the `data` items of a page envelope, in order
pub fn data_ids(body: &serde_json::Value) -> Vec<String> {
    body["data"]
        .as_array()
        .map(|items| {
            items
                .iter()
                .filter_map(|item| item["id"].as_str().map(String::from))
                .collect()
        })
        .unwrap_or_default()
}
