#![forbid(unsafe_code)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![warn(clippy::unwrap_used)]
#![warn(clippy::todo)]
#![warn(clippy::panic)]
#![warn(clippy::dbg_macro)]
#![warn(clippy::print_stdout)]
#![warn(clippy::print_stderr)]
#![warn(clippy::clone_on_ref_ptr)]
#![warn(unreachable_pub)]
#![warn(missing_debug_implementations)]
#![warn(unused_qualifications)]
#![deny(unused_must_use)]

use message_board::api::{self, AppState};
use message_board::config::Config;
use message_board::storage::{self, Database};
use message_board::telemetry;
use std::net::SocketAddr;
use tracing::Instrument;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load();
    let telemetry_guard = telemetry::init_telemetry(&config.telemetry)?;

    message_board::setup_panic_hook();

    let boot_span = tracing::info_span!("boot_server");
    let (listener, app_router) = async {
        let db = Database::new(&config.database_url);
        storage::init_schema(&db).await?;

        let app_router = api::app_router(AppState::new(config.clone(), db));

        let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;
        let listener = tokio::net::TcpListener::bind(addr).await?;
        tracing::info!(address = %addr, "listening");

        Ok::<(tokio::net::TcpListener, axum::Router), anyhow::Error>((listener, app_router))
    }
    .instrument(boot_span)
    .await?;

    tracing::info!(environment = %config.environment, "Application started in {} mode", config.environment);

    if let Err(e) = axum::serve(listener, app_router).with_graceful_shutdown(message_board::shutdown_signal()).await {
        tracing::error!(error = %e, "Server error");
    }

    tracing::info!("Application shutting down");
    telemetry_guard.shutdown();
    Ok(())
}
