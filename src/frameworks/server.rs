// Framework bootstrap for the SWAPI façade.

use crate::frameworks::config;
use crate::interface_adapters::clients::SwapiClient;
use crate::interface_adapters::routes;
use crate::interface_adapters::state::AppState;
use std::io::Result;
use std::net::SocketAddr;
use std::sync::Arc;

fn init_runtime() {
    // Load .env locally; safe to ignore when not present.
    let _ = dotenvy::dotenv();

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let json = matches!(std::env::var("LOG_FORMAT").as_deref(), Ok("json"));
    if json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .json()
            .with_current_span(true)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .init();
    }

    std::panic::set_hook(Box::new(|info| {
        let backtrace = std::backtrace::Backtrace::capture();
        tracing::error!(%info, ?backtrace, "panic");
    }));
}

// Serve the API with an already-built state until a shutdown signal.
pub async fn serve(listener: tokio::net::TcpListener, state: AppState) -> Result<()> {
    let address = listener.local_addr()?;
    let app = routes::app(state);

    tracing::info!(%address, "listening");

    // Serve app and report errors rather than panicking
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .inspect_err(|e| {
            tracing::error!(error = %e, "server error");
        })
}

pub async fn run(listener: tokio::net::TcpListener) -> Result<()> {
    let state = build_state()?;
    serve(listener, state).await
}

pub async fn run_with_config() -> Result<()> {
    init_runtime();

    let address = SocketAddr::from(([0, 0, 0, 0], config::http_port()));

    // Bind TCP listener with error handling
    let listener = tokio::net::TcpListener::bind(address)
        .await
        .inspect_err(|e| {
            tracing::error!(%address, error = %e, "failed to bind");
        })?;

    run(listener).await
}

fn build_state() -> Result<AppState> {
    let base_url = config::swapi_base_url().map_err(|e| {
        tracing::error!(error = %e, "invalid configuration");
        std::io::Error::other(e)
    })?;
    let timeout = config::swapi_timeout();

    let client = SwapiClient::new(base_url.as_str(), timeout).map_err(|e| {
        tracing::error!(error = %e, "failed to initialize swapi client");
        std::io::Error::other(format!("failed to initialize swapi client: {e}"))
    })?;
    tracing::debug!(
        swapi_base_url = %client.base_url(),
        swapi_timeout = ?timeout,
        "swapi client configured"
    );

    Ok(AppState::new(Arc::new(client)))
}

// Resolves on ctrl-c, or SIGTERM on unix. A signal that cannot be installed
// never fires.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to install ctrl-c handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let sigterm = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let sigterm = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {}
        () = sigterm => {}
    }
    tracing::info!("shutting down");
}
