//! # REST API HTTP Server
//!
//! Axum router for the record endpoints, plus the serving loop.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use axum::http::StatusCode;
use axum::middleware::from_fn_with_state;
use axum::routing::get;
use axum::Router;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::store::RecordStore;

use super::auth::{require_token, TokenAuth};
use super::handler::{create_record, delete_record, get_record, list_records, update_record};

/// Default bound on a single request
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// REST API server over a record store
pub struct RecordsServer<S: RecordStore> {
    store: Arc<S>,
    auth_token: Option<String>,
    request_timeout: Duration,
}

impl<S: RecordStore + 'static> RecordsServer<S> {
    pub fn new(store: S) -> Self {
        Self::from_shared(Arc::new(store))
    }

    /// Build from a store the caller keeps a handle to
    pub fn from_shared(store: Arc<S>) -> Self {
        Self {
            store,
            auth_token: None,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }

    /// Require `Authentication: Token <token>` on every request.
    /// `None` or an empty token leaves the API open.
    pub fn with_auth_token(mut self, token: Option<&str>) -> Self {
        self.auth_token = token.filter(|t| !t.is_empty()).map(str::to_string);
        self
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Build the Axum router
    pub fn router(self) -> Router {
        let mut router = Router::new()
            .route("/records/", get(list_records::<S>).post(create_record::<S>))
            .route(
                "/records/:record_id",
                get(get_record::<S>)
                    .put(update_record::<S>)
                    .delete(delete_record::<S>),
            )
            .fallback(unknown_route)
            .with_state(self.store);

        // Layered after the fallback so unknown paths are guarded too.
        if let Some(token) = self.auth_token {
            router = router.layer(from_fn_with_state(TokenAuth::new(&token), require_token));
        }

        router.layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(TimeoutLayer::new(self.request_timeout)),
        )
    }

    /// Serve until SIGINT/SIGTERM, then drain in-flight requests
    pub async fn serve(self, listener: TcpListener) -> std::io::Result<()> {
        self.serve_with_shutdown(listener, shutdown_signal()).await
    }

    /// Serve until `shutdown` resolves
    pub async fn serve_with_shutdown<F>(self, listener: TcpListener, shutdown: F) -> std::io::Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown)
            .await
    }
}

async fn unknown_route() -> StatusCode {
    StatusCode::NOT_FOUND
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "cannot listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};

        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "cannot listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }

    tracing::info!("shutdown signal received, draining in-flight requests");
}
