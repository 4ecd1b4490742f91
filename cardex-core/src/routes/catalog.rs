use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use crate::dataset::find_by_id;
use crate::models::{CarModel, Category, ErrorMessage, Manufacturer};
use crate::server::AppState;

type NotFound = (StatusCode, Json<ErrorMessage>);

fn not_found(message: &str) -> NotFound {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorMessage {
            message: message.to_string(),
        }),
    )
}

pub async fn list_models(State(state): State<AppState>) -> Json<Vec<CarModel>> {
    Json(state.dataset.car_models.clone())
}

pub async fn get_model(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<CarModel>, NotFound> {
    find_by_id(&state.dataset.car_models, &id)
        .cloned()
        .map(Json)
        .ok_or_else(|| not_found("Car model not found"))
}

pub async fn list_categories(State(state): State<AppState>) -> Json<Vec<Category>> {
    Json(state.dataset.categories.clone())
}

pub async fn get_category(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Category>, NotFound> {
    find_by_id(&state.dataset.categories, &id)
        .cloned()
        .map(Json)
        .ok_or_else(|| not_found("Category not found"))
}

pub async fn list_manufacturers(State(state): State<AppState>) -> Json<Vec<Manufacturer>> {
    Json(state.dataset.manufacturers.clone())
}

pub async fn get_manufacturer(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Manufacturer>, NotFound> {
    find_by_id(&state.dataset.manufacturers, &id)
        .cloned()
        .map(Json)
        .ok_or_else(|| not_found("Manufacturer not found"))
}
