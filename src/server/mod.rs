//! HTTP server: accept loop, routing, and probe handlers.

use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use bytes::Bytes;
use http_body_util::Full;
use hyper::body::Incoming as IncomingBody;
use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper::{Request, Response, StatusCode};
use hyper_util::rt::TokioIo;
use tokio::net::TcpListener;
use tracing::{debug, info};

use crate::debug::MemoryBallast;
use crate::health::{evaluate, MemorySample};
use crate::state::AppState;

mod response;

pub use response::{json_response, text_response, ProbeResponse, ServiceInfo};

/// The probe server: one listener, one spawned task per connection.
pub struct Server {
    listener: TcpListener,
    state: Arc<AppState>,
}

impl Server {
    /// Bind the listener.
    ///
    /// Separate from [`run`](Self::run) so callers binding port 0 can read
    /// the assigned address before the accept loop starts.
    pub async fn bind(addr: SocketAddr, state: Arc<AppState>) -> std::io::Result<Self> {
        let listener = TcpListener::bind(addr).await?;
        Ok(Self { listener, state })
    }

    /// Local address the listener ended up on.
    pub fn local_addr(&self) -> std::io::Result<SocketAddr> {
        self.listener.local_addr()
    }

    /// Accept and serve connections until an accept error or cancellation.
    pub async fn run(self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        info!("Listening on http://{}", self.local_addr()?);

        loop {
            let (stream, _) = self.listener.accept().await?;
            let _ = stream.set_nodelay(true);
            let state = Arc::clone(&self.state);

            tokio::spawn(async move {
                let service = service_fn(move |req| {
                    let state = Arc::clone(&state);
                    async move { handle_request(req, state).await }
                });

                let io = TokioIo::new(stream);
                if let Err(e) = http1::Builder::new().serve_connection(io, service).await {
                    debug!("Connection error: {}", e);
                }
            });
        }
    }
}

/// Schedule the one-shot startup task that opens the readiness gate.
///
/// The delay stands in for real dependency checks; `None` opens the gate
/// immediately. The task always runs to completion, so no cancellation
/// handling is needed.
pub fn spawn_startup_task(state: Arc<AppState>, delay: Option<Duration>) {
    tokio::spawn(async move {
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        state.readiness.mark_ready();
        info!("Application initialized and ready");
    });
}

/// Route a request by path.
async fn handle_request(
    req: Request<IncomingBody>,
    state: Arc<AppState>,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let response = match req.uri().path() {
        "/" => handle_root(&state),
        "/health" => handle_health(),
        "/ready" => handle_ready(&state),
        // The ballast only exists outside production; without it the
        // route is simply not there.
        "/debug/memory" => match state.ballast.as_ref() {
            Some(ballast) => handle_debug_memory(req.uri().query(), ballast),
            None => not_found(),
        },
        _ => not_found(),
    };

    Ok(response)
}

fn handle_root(state: &AppState) -> Response<Full<Bytes>> {
    json_response(StatusCode::OK, &ServiceInfo::from_state(state))
}

/// One fresh sample, one evaluation, verdict mapped to 200/503.
fn handle_health() -> Response<Full<Bytes>> {
    let sample = MemorySample::read();
    if sample.is_partial() {
        debug!("Host memory figures unavailable, evaluating process check only");
    }

    let verdict = evaluate(sample);
    let status = if verdict.is_healthy() {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };
    json_response(status, &ProbeResponse::from_verdict(verdict))
}

fn handle_ready(state: &AppState) -> Response<Full<Bytes>> {
    if state.readiness.is_ready() {
        json_response(StatusCode::OK, &ProbeResponse::ready())
    } else {
        json_response(StatusCode::SERVICE_UNAVAILABLE, &ProbeResponse::not_ready())
    }
}

fn handle_debug_memory(query: Option<&str>, ballast: &MemoryBallast) -> Response<Full<Bytes>> {
    let action = query.and_then(action_param);
    text_response(StatusCode::OK, ballast.respond(action))
}

fn not_found() -> Response<Full<Bytes>> {
    text_response(StatusCode::NOT_FOUND, "Not Found")
}

/// Extract the `action` query parameter. Values are plain tokens
/// (allocate, free, status), so no percent-decoding is involved.
fn action_param(query: &str) -> Option<&str> {
    query
        .split('&')
        .find_map(|pair| pair.strip_prefix("action="))
}
