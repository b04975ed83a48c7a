//! Shared harness for the HTTP-level tests.

use std::sync::Arc;
use std::time::{Duration, Instant};

use reqwest::{Client, Response, StatusCode};

use vitals::config::{Config, Environment, LoggingConfig, ServerConfig};
use vitals::server::Server;
use vitals::state::AppState;

/// One server under test on an ephemeral port, plus a client for it.
pub struct TestServer {
    base_url: String,
    client: Client,
    pub state: Arc<AppState>,
}

#[allow(dead_code)]
impl TestServer {
    /// Boot a server for `environment` and return a handle to it.
    ///
    /// The readiness gate starts closed; each test opens it the way it
    /// needs to (directly or through the startup task), keeping the
    /// before/after transition deterministic.
    pub async fn spawn(environment: Environment) -> Self {
        let config = Config {
            server: ServerConfig {
                listen_addr: "127.0.0.1:0".parse().unwrap(),
                startup_delay: None,
                version: "0.0.0-test".to_string(),
            },
            environment,
            logging: LoggingConfig {
                filter: "vitals=info".to_string(),
                json: false,
            },
        };
        let state = Arc::new(AppState::from_config(&config));

        let server = Server::bind(config.server.listen_addr, Arc::clone(&state))
            .await
            .expect("bind test server");
        let base_url = format!("http://{}", server.local_addr().expect("local addr"));
        tokio::spawn(server.run());

        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .expect("build http client");

        Self {
            base_url,
            client,
            state,
        }
    }

    pub async fn get(&self, path: &str) -> Response {
        let url = format!("{}{}", self.base_url, path);
        self.client.get(&url).send().await.expect("GET failed")
    }

    /// GET that panics unless the response carries `expected`.
    pub async fn get_expecting(&self, path: &str, expected: StatusCode) -> Response {
        let response = self.get(path).await;
        assert_eq!(
            response.status(),
            expected,
            "GET {} returned {}, wanted {}",
            path,
            response.status(),
            expected
        );
        response
    }

    /// Poll `/ready` until it reports 200 or the deadline passes.
    pub async fn wait_for_ready(&self, timeout: Duration) {
        let deadline = Instant::now() + timeout;
        loop {
            if self.get("/ready").await.status() == StatusCode::OK {
                return;
            }
            assert!(
                Instant::now() < deadline,
                "server not ready within {:?}",
                timeout
            );
            tokio::time::sleep(Duration::from_millis(20)).await;
        }
    }
}

/// Panic unless the body contains `needle`.
pub async fn assert_body_contains(response: Response, needle: &str) {
    let body = response.text().await.expect("read body");
    assert!(
        body.contains(needle),
        "{:?} not found in body: {}",
        needle,
        body
    );
}

/// Decode the body as JSON.
pub async fn json_body(response: Response) -> serde_json::Value {
    response.json().await.expect("JSON body")
}
