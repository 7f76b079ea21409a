//! 단일 심볼 예측 명령.
//!
//! 성공하면 stdout용 JSON을, 실패하면 stderr용 에러 JSON을 만듭니다.
//! 출력과 종료 코드는 `main`이 담당합니다.

use pulse_analytics::Predictor;
use pulse_core::DEFAULT_SYMBOL;
use pulse_data::PriceSource;
use serde::Serialize;
use serde_json::json;

/// 심볼 인자가 없을 때 에러 JSON에 쓰는 값.
pub const UNKNOWN_SYMBOL: &str = "UNKNOWN";

/// 예측 명령 옵션.
#[derive(Debug, Clone, Default)]
pub struct PredictOptions {
    /// 명령줄 심볼 인자 (없거나 비어 있으면 기본 심볼)
    pub symbol: Option<String>,
    /// 지표/패턴 포함 출력
    pub explain: bool,
    /// 들여쓰기 출력
    pub pretty: bool,
}

impl PredictOptions {
    /// 실제로 조회할 심볼.
    pub fn effective_symbol(&self) -> &str {
        match self.symbol.as_deref() {
            Some(s) if !s.is_empty() => s,
            _ => DEFAULT_SYMBOL,
        }
    }

    /// 에러 JSON에 기록할 심볼 (인자 원문).
    pub fn reported_symbol(&self) -> &str {
        self.symbol.as_deref().unwrap_or(UNKNOWN_SYMBOL)
    }
}

/// 예측을 실행하고 출력할 JSON 문자열을 반환합니다.
///
/// `Ok`는 stdout, `Err`는 stderr로 보낼 내용입니다.
pub async fn execute<S: PriceSource + ?Sized>(
    predictor: &Predictor<S>,
    options: &PredictOptions,
) -> Result<String, String> {
    let symbol = options.effective_symbol();

    let rendered = if options.explain {
        predictor
            .predict_detailed(symbol)
            .await
            .map(|detailed| to_json(&detailed, options.pretty))
    } else {
        predictor
            .predict(symbol)
            .await
            .map(|result| to_json(&result, options.pretty))
    };

    match rendered {
        Ok(Ok(body)) => Ok(body),
        Ok(Err(e)) => Err(error_json(&e, options.reported_symbol())),
        Err(e) => {
            tracing::debug!(error = ?e, "Prediction failed");
            Err(error_json(&e, options.reported_symbol()))
        }
    }
}

/// `{"error": ..., "symbol": ...}` 형식의 에러 JSON.
pub fn error_json(error: &dyn std::fmt::Display, symbol: &str) -> String {
    json!({
        "error": error.to_string(),
        "symbol": symbol,
    })
    .to_string()
}

fn to_json<T: Serialize>(value: &T, pretty: bool) -> Result<String, serde_json::Error> {
    if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    }
}
