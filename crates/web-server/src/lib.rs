use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use configuration::Settings;
use database::{DbRepository, TextStore};
use std::future::Future;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

pub mod error;
pub mod handlers;
pub mod view;

/// The shared application state that all handlers can access.
pub struct AppState<S> {
    pub store: S,
}

/// Builds the application router over any `TextStore`.
pub fn app<S: TextStore>(store: S) -> Router {
    let app_state = Arc::new(AppState { store });

    Router::new()
        .route("/", get(handlers::index::<S>))
        .route("/add", post(handlers::add_text::<S>))
        .route("/edit/:id", post(handlers::edit_text::<S>))
        .route("/delete/:id", post(handlers::delete_text::<S>))
        .route("/liveness", get(handlers::liveness))
        .route("/health", get(handlers::health::<S>))
        .with_state(app_state)
        // Logs every incoming request.
        .layer(TraceLayer::new_for_http())
        .layer(DefaultBodyLimit::max(1024 * 1024))
}

/// Prepares the schema, then serves until `shutdown` resolves.
///
/// Schema creation is best effort: a failure is logged and the server still
/// starts, so `/health` can report the store as unhealthy.
pub async fn run_server(
    settings: &Settings,
    shutdown: impl Future<Output = ()> + Send + 'static,
) -> anyhow::Result<()> {
    // Failures are logged inside the database crate.
    let _ = database::ensure_schema(&settings.database).await;

    let db_repo = DbRepository::new(settings.database.clone());
    let app = app(db_repo);

    let addr = settings.server.listen_addr;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Web server started and listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;

    tracing::info!("Web server stopped.");
    Ok(())
}
