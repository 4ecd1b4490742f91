use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Response for GET /api — a static map of route names to paths.
#[derive(Debug, Serialize)]
pub struct ApiIndex {
    pub models: String,
    pub categories: String,
    pub manufacturers: String,
    pub images: String,
}

/// JSON body for not-found responses.
#[derive(Debug, Serialize)]
pub struct ErrorMessage {
    pub message: String,
}

/// A car model. Fields beyond the typed ones are opaque to the service
/// and pass through unchanged, in their stored order.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CarModel {
    pub id: u32,
    pub name: String,
    #[serde(rename = "manufacturerId")]
    pub manufacturer_id: u32,
    #[serde(rename = "categoryId")]
    pub category_id: u32,
    pub image: String,
    #[serde(flatten)]
    pub extra: IndexMap<String, Value>,
}

/// A category (body style).
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Category {
    pub id: u32,
    pub name: String,
}

/// A manufacturer. Country and other metadata pass through unchanged.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Manufacturer {
    pub id: u32,
    pub name: String,
    #[serde(flatten)]
    pub extra: IndexMap<String, Value>,
}
