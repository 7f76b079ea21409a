//! 예측 endpoint.
//!
//! `GET /predict/{stock}` - 심볼을 대문자로 정규화한 뒤 예측 결과를 반환합니다.
//! 응답은 예측 결과 필드에 `currency`, `timestamp`, `stock`을 덧붙인 평면 객체입니다.

use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use pulse_core::{PredictionResult, Symbol};
use serde::Serialize;
use std::sync::Arc;
use tracing::info;

use crate::error::ApiError;
use crate::state::AppState;

/// 예측 응답.
#[derive(Debug, Clone, Serialize)]
pub struct PredictResponse {
    /// 예측 결과 (평면화)
    #[serde(flatten)]
    pub result: PredictionResult,
    /// 표시 통화 (예: "USD ($)")
    pub currency: String,
    /// 응답 생성 시각 (RFC 3339)
    pub timestamp: String,
    /// 정규화된 심볼
    pub stock: String,
}

/// 심볼 예측.
///
/// GET /predict/{stock}
pub async fn predict(
    State(state): State<Arc<AppState>>,
    Path(stock): Path<String>,
) -> Result<Json<PredictResponse>, ApiError> {
    let symbol = Symbol::parse(&stock.to_ascii_uppercase())?;

    let result = tokio::time::timeout(state.predict_timeout, state.predictor.predict_symbol(&symbol))
        .await
        .map_err(|_| ApiError::Timeout {
            stock: symbol.to_string(),
            timeout_secs: state.predict_timeout.as_secs(),
        })??;

    let currency = symbol.currency_label();
    info!(
        stock = %symbol,
        currency = %currency,
        current_price = result.current_price,
        "Prediction served"
    );

    Ok(Json(PredictResponse {
        result,
        currency,
        timestamp: chrono::Utc::now().to_rfc3339(),
        stock: symbol.into(),
    }))
}

/// 예측 라우터 생성.
pub fn predict_router() -> Router<Arc<AppState>> {
    Router::new().route("/predict/{stock}", get(predict))
}
