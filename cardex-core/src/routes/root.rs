use axum::Json;

use crate::models::ApiIndex;

pub async fn get_index() -> Json<ApiIndex> {
    Json(ApiIndex {
        models: "/api/models".to_string(),
        categories: "/api/categories".to_string(),
        manufacturers: "/api/manufacturers".to_string(),
        images: "/api/images".to_string(),
    })
}
