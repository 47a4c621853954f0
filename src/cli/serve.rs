use crate::cli::commands::{GlobalArgs, ServeArgs};
use crate::cli::context;
use crate::errors::SmartdoError;
use crate::api;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

pub async fn handle_serve(args: ServeArgs, global: &GlobalArgs) -> Result<(), SmartdoError> {
    let (config, state) = context::open(global).await?;
    let host = args.host.unwrap_or_else(|| config.host());
    let port = args.port.unwrap_or_else(|| config.port());
    info!(host = %host, port, db = %config.db_path(), "Starting API server");

    let app = api::build_router(state).layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(CorsLayer::permissive()),
    );

    let addr = format!("{}:{}", host, port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Listening on {}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| SmartdoError::Internal(format!("Server error: {}", e)))?;

    Ok(())
}
