//! Service startup
//!
//! `run` loads settings, installs logging, opens the database pool and
//! serves the records API until a shutdown signal arrives. Any failure
//! before serving begins is returned and ends the process.

mod errors;

pub use errors::{CliError, CliResult};

use std::sync::Arc;

use clap::error::ErrorKind;
use clap::Parser;
use tokio::net::TcpListener;

use crate::config::Settings;
use crate::observability;
use crate::rest_api::RecordsServer;
use crate::store::SqlRecordStore;

/// Parse settings from the environment and command line, then start
pub async fn run() -> CliResult<()> {
    let settings = match Settings::try_parse() {
        Ok(settings) => settings,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(e) => return Err(e.into()),
    };

    observability::init_logging()?;
    start(settings).await
}

/// Connect to the database and serve until shutdown
pub async fn start(settings: Settings) -> CliResult<()> {
    let descriptor = settings.connection_descriptor();
    let store = Arc::new(SqlRecordStore::connect(&descriptor, settings.pool_settings()).await?);

    let addr = settings.socket_addr();
    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|source| CliError::Bind {
            addr: addr.clone(),
            source,
        })?;

    tracing::info!(
        addr = %addr,
        engine = %store.engine(),
        auth = settings.auth_token().is_some(),
        "serving records API"
    );

    RecordsServer::from_shared(store.clone())
        .with_auth_token(settings.auth_token())
        .with_request_timeout(settings.request_timeout())
        .serve(listener)
        .await?;

    store.close().await;
    tracing::info!("records API stopped");
    Ok(())
}
