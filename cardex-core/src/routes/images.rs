use std::path::Path;

use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};

use crate::server::AppState;

/// The one file this route serves. Every model carries its own `image`
/// field, but the route does not consult it (see DESIGN.md).
pub const IMAGE_FILE: &str = "audi_a4.jpg";

pub async fn get_image(State(state): State<AppState>) -> Response {
    let path = state.image_dir.join(IMAGE_FILE);
    match tokio::fs::read(&path).await {
        Ok(bytes) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, content_type_for(&path))],
            bytes,
        )
            .into_response(),
        Err(err) => {
            tracing::warn!("failed to read {}: {}", path.display(), err);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Error occurred while sending the image.",
            )
                .into_response()
        }
    }
}

/// Content type inferred from the file extension.
fn content_type_for(path: &Path) -> &'static str {
    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
    match ext.to_lowercase().as_str() {
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "gif" => "image/gif",
        "svg" => "image/svg+xml",
        "webp" => "image/webp",
        _ => "application/octet-stream",
    }
}
