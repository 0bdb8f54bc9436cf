//! Serve command - Starts the HTTP server.

use tokio::signal;

use crate::api::{create_router, AppState};
use crate::cli::args::ServeArgs;
use crate::config::Config;
use crate::errors::{AppError, AppResult};

/// Execute the serve command
pub async fn execute(args: ServeArgs, config: Config) -> AppResult<()> {
    tracing::info!("Starting server...");

    let config = merge_args(args, config);

    // Each server owns a fresh store; records live until shutdown
    let app_state = AppState::in_memory();

    // Build router
    let app = create_router(app_state);

    // Start server
    let addr = config.server_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind to {}: {}", addr, e)))?;

    tracing::info!("Server running on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Server error: {}", e)))?;

    tracing::info!("Server shutdown complete");

    Ok(())
}

/// Apply command-line overrides on top of the loaded configuration
fn merge_args(args: ServeArgs, config: Config) -> Config {
    Config {
        server_host: args.host.unwrap_or(config.server_host),
        server_port: args.port.unwrap_or(config.server_port),
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, initiating graceful shutdown");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_override_config() {
        let args = ServeArgs {
            host: None,
            port: Some(9999),
        };
        let merged = merge_args(args, Config::default());

        assert_eq!(merged.server_addr(), "0.0.0.0:9999");
    }

    #[test]
    fn test_config_used_when_no_args() {
        let config = Config {
            server_host: "127.0.0.1".to_string(),
            server_port: 8080,
        };
        let merged = merge_args(ServeArgs::default(), config.clone());

        assert_eq!(merged, config);
    }
}
