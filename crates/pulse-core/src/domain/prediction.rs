//! 예측 결과 도메인 타입.
//!
//! - `Signal` - 매매 신호 (BUY/SELL/HOLD)
//! - `PredictionResult` - 한 번의 예측 호출 결과

use serde::{Deserialize, Serialize};
use std::fmt;

/// 신뢰도 하한.
pub const MIN_CONFIDENCE: u8 = 50;

/// 신뢰도 상한.
pub const MAX_CONFIDENCE: u8 = 95;

/// 응답에 포함되는 최대 가격 이력 길이.
pub const HISTORY_LEN: usize = 30;

/// 매매 신호.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Signal {
    /// 매수
    Buy,
    /// 매도
    Sell,
    /// 관망
    Hold,
}

impl fmt::Display for Signal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Signal::Buy => write!(f, "BUY"),
            Signal::Sell => write!(f, "SELL"),
            Signal::Hold => write!(f, "HOLD"),
        }
    }
}

/// 예측 결과.
///
/// JSON 키는 외부 계약을 따릅니다:
/// `currentPrice, predictedPrice, signal, confidence, history, patterns_detected`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionResult {
    /// 최신 종가 (소수점 둘째 자리)
    pub current_price: f64,
    /// 다음 가격 추정치 (소수점 둘째 자리)
    pub predicted_price: f64,
    /// 최종 신호
    pub signal: Signal,
    /// 신뢰도 (50 ~ 95)
    pub confidence: u8,
    /// 최근 최대 30개 종가 (오래된 것부터, 소수점 둘째 자리)
    pub history: Vec<f64>,
    /// 감지된 패턴 수 (강세 + 약세)
    #[serde(rename = "patterns_detected")]
    pub patterns_detected: u32,
}
