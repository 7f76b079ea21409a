//! 상태 확인 endpoint.
//!
//! - `GET /` - 서비스 상태, 현재 시각, 버전
//! - `GET /health` - liveness probe

use axum::{extract::State, http::StatusCode, response::IntoResponse, routing::get, Json, Router};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::state::AppState;

/// 서비스 상태 메시지.
pub const STATUS_MESSAGE: &str = "PulseAI Backend is running";

/// 루트 상태 응답.
#[derive(Debug, Serialize, Deserialize)]
pub struct StatusResponse {
    /// 상태 메시지
    pub status: String,
    /// 현재 시간 (RFC 3339)
    pub timestamp: String,
    /// API 버전
    pub version: String,
    /// 서버 업타임(초)
    pub uptime_secs: u64,
}

/// 서비스 상태.
///
/// GET /
pub async fn status(State(state): State<Arc<AppState>>) -> Json<StatusResponse> {
    Json(StatusResponse {
        status: STATUS_MESSAGE.to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
        version: state.version.clone(),
        uptime_secs: state.uptime_secs(),
    })
}

/// 간단한 헬스 체크 (liveness probe용).
///
/// GET /health
pub async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}

/// 상태 확인 라우터 생성.
pub fn health_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(status))
        .route("/health", get(health_check))
}
