use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::net::TcpListener;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use hotel_access::adapters::http::middleware::AuthState;
use hotel_access::adapters::http::{app_router, HotelsAppState};
use hotel_access::adapters::{
    connect_pool, JwtSessionValidator, PostgresEnrollmentReader, PostgresHotelReader,
    PostgresSessionReader, PostgresTicketReader,
};
use hotel_access::config::{AppConfig, ServerConfig};

#[tokio::main]
async fn main() -> Result<()> {
    let config = AppConfig::load().context("Failed to load configuration")?;
    init_logger(&config.server)?;
    config.validate().context("Invalid configuration")?;
    bootstrap(config).await
}

fn init_logger(server: &ServerConfig) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&server.log_level))
        .context("Invalid log filter")?;

    let registry = tracing_subscriber::registry().with(env_filter);

    if server.is_production() {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_target(true))
            .try_init()?;
    } else {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_file(true)
                    .with_line_number(true)
                    .with_target(false),
            )
            .try_init()?;
    }

    Ok(())
}

async fn bootstrap(config: AppConfig) -> Result<()> {
    let pool = connect_pool(&config.database)
        .await
        .context("Failed to connect to database")?;

    let state = HotelsAppState {
        enrollment_reader: Arc::new(PostgresEnrollmentReader::new(pool.clone())),
        ticket_reader: Arc::new(PostgresTicketReader::new(pool.clone())),
        hotel_reader: Arc::new(PostgresHotelReader::new(pool.clone())),
    };
    let auth: AuthState = Arc::new(JwtSessionValidator::new(
        &config.auth.jwt_secret,
        Arc::new(PostgresSessionReader::new(pool.clone())),
    ));

    let app = app_router(state, auth, &config.server);

    let addr = config.server.resolve_socket_addr().await?;
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    tracing::info!("Listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Unexpected error happened in server")
        .inspect_err(|e| {
            tracing::error!(error.cause_chain = ?e, error.message = %e, "Unexpected error")
        })?;

    pool.close().await;
    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
