//! API 에러 응답.
//!
//! 예측 에러를 HTTP 상태 코드와 `{error, stock, details?}` 본문으로 변환합니다.
//!
//! | 에러               | 상태 |
//! |--------------------|------|
//! | `InvalidSymbol`    | 400  |
//! | `NoData`           | 404  |
//! | `InsufficientData` | 422  |
//! | `Fetch`            | 502  |
//! | 처리 시간 초과     | 504  |

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use pulse_core::PredictError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// `details` 필드 최대 길이 (문자 수).
pub const MAX_DETAILS_LEN: usize = 100;

/// 에러 응답 본문.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    /// 사람이 읽을 수 있는 에러 메시지
    pub error: String,
    /// 요청한 심볼 (대문자)
    pub stock: String,
    /// 원인 메시지 (최대 100자)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

/// API 에러.
#[derive(Debug, Error)]
pub enum ApiError {
    /// 예측 파이프라인 에러
    #[error(transparent)]
    Predict(#[from] PredictError),

    /// 처리 시간 초과
    #[error("Prediction for {stock} exceeded {timeout_secs}s")]
    Timeout { stock: String, timeout_secs: u64 },
}

impl ApiError {
    /// HTTP 상태 코드.
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Predict(PredictError::InvalidSymbol { .. }) => StatusCode::BAD_REQUEST,
            ApiError::Predict(PredictError::NoData { .. }) => StatusCode::NOT_FOUND,
            ApiError::Predict(PredictError::InsufficientData { .. }) => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            ApiError::Predict(PredictError::Fetch { .. }) => StatusCode::BAD_GATEWAY,
            ApiError::Timeout { .. } => StatusCode::GATEWAY_TIMEOUT,
        }
    }

    /// 응답 본문.
    pub fn body(&self) -> ApiErrorResponse {
        match self {
            ApiError::Predict(PredictError::NoData { symbol }) => ApiErrorResponse {
                error: format!(
                    "No data found for stock symbol: {}. Please check the symbol and try again.",
                    symbol
                ),
                stock: symbol.clone(),
                details: None,
            },
            ApiError::Predict(PredictError::Fetch { symbol, message }) => ApiErrorResponse {
                error: "Failed to generate prediction. Please try again.".to_string(),
                stock: symbol.clone(),
                details: Some(truncate(message, MAX_DETAILS_LEN)),
            },
            ApiError::Predict(err) => ApiErrorResponse {
                error: err.to_string(),
                stock: err.symbol().to_ascii_uppercase(),
                details: None,
            },
            ApiError::Timeout { stock, .. } => ApiErrorResponse {
                error: "Request timeout. The prediction service took too long to respond."
                    .to_string(),
                stock: stock.clone(),
                details: None,
            },
        }
    }
}

/// 문자 단위로 자릅니다 (UTF-8 경계 보존).
pub fn truncate(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(status = %status, error = %self, "Prediction request failed");
        } else {
            tracing::warn!(status = %status, error = %self, "Prediction request rejected");
        }
        (status, Json(self.body())).into_response()
    }
}
