//! Test helpers for integration tests
//!
//! Provides utilities for spawning test servers and making HTTP requests
//! with a per-user cookie store.

use std::net::SocketAddr;
use std::time::Duration;

use anyhow::Result;
use chatroom_api::{create_app, create_app_state};
use chatroom_common::AppConfig;
use reqwest::{Client, Response, StatusCode};
use serde::{de::DeserializeOwned, Serialize};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

use crate::fixtures::Account;

/// Test server instance that manages lifecycle
pub struct TestServer {
    pub addr: SocketAddr,
    _handle: JoinHandle<()>,
}

impl TestServer {
    /// Start a new test server
    pub async fn start() -> Result<Self> {
        let config = test_config()?;
        Self::start_with_config(config).await
    }

    /// Start a test server with custom config
    pub async fn start_with_config(config: AppConfig) -> Result<Self> {
        let state = create_app_state(config).await?;
        let app = create_app(state)?;

        // Port 0: let the OS pick a free port
        let listener = TcpListener::bind(("127.0.0.1", 0)).await?;
        let addr = listener.local_addr()?;

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.ok();
        });

        Ok(Self {
            addr,
            _handle: handle,
        })
    }

    /// Get base URL for the server
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// A fresh client with its own cookie jar, i.e. its own browser session
    pub fn session(&self) -> Result<TestClient> {
        let client = Client::builder()
            .cookie_store(true)
            .timeout(Duration::from_secs(10))
            .build()?;

        Ok(TestClient {
            base_url: self.base_url(),
            client,
        })
    }
}

/// HTTP client bound to one test server and one cookie jar
pub struct TestClient {
    base_url: String,
    client: Client,
}

impl TestClient {
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Make a GET request
    pub async fn get(&self, path: &str) -> Result<Response> {
        Ok(self.client.get(self.url(path)).send().await?)
    }

    /// Make a GET request with an explicit bearer token
    pub async fn get_bearer(&self, path: &str, token: &str) -> Result<Response> {
        Ok(self
            .client
            .get(self.url(path))
            .bearer_auth(token)
            .send()
            .await?)
    }

    /// Make a POST request with a URL-encoded form body
    pub async fn post_form<T: Serialize + ?Sized>(&self, path: &str, form: &T) -> Result<Response> {
        Ok(self.client.post(self.url(path)).form(form).send().await?)
    }

    /// Make a POST request with a JSON body
    pub async fn post_json<T: Serialize + ?Sized>(&self, path: &str, body: &T) -> Result<Response> {
        Ok(self.client.post(self.url(path)).json(body).send().await?)
    }

    /// Submit text to the chat box
    pub async fn send(&self, message: &str) -> Result<Response> {
        self.post_form("/send", &[("message", message)]).await
    }

    /// Register an account, failing unless the server accepts it
    pub async fn register(&self, account: &Account) -> Result<()> {
        let response = self.post_form("/register", &account.register_form()).await?;
        assert_status(response, StatusCode::CREATED).await
    }

    /// Log in, storing the session cookie in this client's jar
    pub async fn login(&self, account: &Account) -> Result<serde_json::Value> {
        let response = self.post_form("/login", &account.login_form()).await?;
        assert_json(response, StatusCode::OK).await
    }

    /// Register and log in a fresh account
    pub async fn sign_up(&self) -> Result<Account> {
        let account = Account::unique();
        self.register(&account).await?;
        self.login(&account).await?;
        Ok(account)
    }
}

/// Create a test configuration
pub fn test_config() -> Result<AppConfig> {
    let mut config = AppConfig::from_env().map_err(|e| anyhow::anyhow!("Config error: {e}"))?;

    // Tests fire many requests at once; keep the shared limiter out of the way
    config.rate_limit.requests_per_second = 1;
    config.rate_limit.burst = 10_000;
    // Plain HTTP: a secure cookie would never be sent back
    config.session.cookie_secure = false;

    Ok(config)
}

/// Helper to check if test environment is available
pub fn check_test_env() -> bool {
    if std::env::var("DATABASE_URL").is_err() {
        eprintln!("Skipping test: DATABASE_URL not set");
        return false;
    }

    true
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

/// Assert response status without parsing body
pub async fn assert_status(response: Response, expected_status: StatusCode) -> Result<()> {
    let status = response.status();
    if status != expected_status {
        let body = response.text().await?;
        anyhow::bail!("Expected status {expected_status}, got {status}. Body: {body}");
    }
    Ok(())
}
