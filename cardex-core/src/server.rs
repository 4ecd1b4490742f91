use std::path::{Path, PathBuf};
use std::sync::Arc;

use axum::Router;
use thiserror::Error;
use tower_http::trace::TraceLayer;

use crate::dataset::{Dataset, DatasetError};
use crate::routes;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("dataset error: {0}")]
    Dataset(#[from] DatasetError),
    #[error("server error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shared read-only state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub dataset: Arc<Dataset>,
    pub image_dir: PathBuf,
}

/// Build the axum router with all routes bound to the given state.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/api", axum::routing::get(routes::root::get_index))
        .route("/api/models", axum::routing::get(routes::catalog::list_models))
        .route(
            "/api/models/{id}",
            axum::routing::get(routes::catalog::get_model),
        )
        .route(
            "/api/categories",
            axum::routing::get(routes::catalog::list_categories),
        )
        .route(
            "/api/categories/{id}",
            axum::routing::get(routes::catalog::get_category),
        )
        .route(
            "/api/manufacturers",
            axum::routing::get(routes::catalog::list_manufacturers),
        )
        .route(
            "/api/manufacturers/{id}",
            axum::routing::get(routes::catalog::get_manufacturer),
        )
        .route("/api/images", axum::routing::get(routes::images::get_image))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Load the dataset, bind the listener, and serve until the process is
/// terminated externally.
pub async fn run_server(
    data_path: Option<&Path>,
    image_dir: PathBuf,
    port: u16,
    host: &str,
) -> Result<(), ServerError> {
    let dataset = match data_path {
        Some(path) => Dataset::from_path(path)?,
        None => Dataset::bundled()?,
    };
    tracing::info!(
        "Loaded {} car models, {} categories, {} manufacturers",
        dataset.car_models.len(),
        dataset.categories.len(),
        dataset.manufacturers.len()
    );

    let state = AppState {
        dataset: Arc::new(dataset),
        image_dir,
    };
    let app = build_router(state);
    let addr = format!("{host}:{port}");
    tracing::info!("Starting cardex server on http://{addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
