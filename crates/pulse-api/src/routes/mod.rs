//! API 라우트.

pub mod health;
pub mod predict;

use axum::{
    http::{Method, StatusCode, Uri},
    response::IntoResponse,
    Json, Router,
};
use serde_json::json;
use std::sync::Arc;

use crate::state::AppState;

pub use health::health_router;
pub use predict::predict_router;

/// 전체 API 라우터 (상태 미적용).
pub fn create_api_router() -> Router<Arc<AppState>> {
    Router::new()
        .merge(health_router())
        .merge(predict_router())
        .fallback(not_found)
}

/// 등록되지 않은 경로.
async fn not_found(method: Method, uri: Uri) -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(json!({
            "error": "Endpoint not found",
            "path": uri.path(),
            "method": method.as_str(),
        })),
    )
}
