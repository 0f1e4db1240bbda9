mod cors;
mod graphql;
mod health;
mod state;

use std::net::SocketAddr;

use axum::routing::get;
use axum::Router;
use gateway_config::Config;
use state::ServerState;
use tokio::signal;
use tower_http::cors::CorsLayer;
use track_api::TrackApi;
use track_schema::build_schema;

/// Start parameters for the gateway.
pub struct ServeConfig {
    /// The GraphQL endpoint listen address.
    pub listen_address: SocketAddr,
    /// The gateway configuration.
    pub config: Config,
}

/// Starts the server and listens for incoming requests until a shutdown
/// signal arrives.
pub async fn serve(ServeConfig { listen_address, config }: ServeConfig) -> crate::Result<()> {
    let path = config.graph.path.clone();
    let app = router(config)?.into_make_service();

    let handle = axum_server::Handle::new();
    tokio::spawn(graceful_shutdown(handle.clone()));

    tracing::info!("GraphQL endpoint exposed at http://{listen_address}{path}");

    axum_server::bind(listen_address)
        .handle(handle)
        .serve(app)
        .await
        .map_err(crate::Error::Server)?;

    Ok(())
}

fn router(config: Config) -> crate::Result<Router> {
    let cors = match config.cors {
        Some(cors_config) => cors::generate(cors_config),
        None => CorsLayer::permissive(),
    };

    let track_api = TrackApi::new(&config.upstream).map_err(|e| crate::Error::InternalError(e.to_string()))?;
    let state = ServerState::new(build_schema(track_api));

    Ok(Router::new()
        .route(&config.graph.path, get(graphql::execute).post(graphql::execute))
        .route("/health", get(health::health))
        .layer(cors)
        .with_state(state))
}

async fn graceful_shutdown(handle: axum_server::Handle) {
    let ctrl_c = async {
        signal::ctrl_c().await.expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutting down gracefully...");
    handle.graceful_shutdown(Some(std::time::Duration::from_secs(3)));
}
