//! 추세 지표 (Trend Indicators).
//!
//! - SMA (Simple Moving Average): 최신 구간의 단순 평균

use serde::{Deserialize, Serialize};

use super::{ensure_len, mean, IndicatorResult};

/// SMA 파라미터.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SmaParams {
    /// 이동평균 기간.
    pub period: usize,
}

impl Default for SmaParams {
    fn default() -> Self {
        Self { period: 20 }
    }
}

/// 추세 지표 계산기.
#[derive(Debug, Default, Clone, Copy)]
pub struct TrendIndicators;

impl TrendIndicators {
    /// 새로운 추세 지표 계산기 생성.
    pub fn new() -> Self {
        Self
    }

    /// 최신 `period`개 종가의 단순 이동평균.
    ///
    /// 데이터가 `period`개보다 적으면 `InsufficientData`를 반환합니다.
    pub fn sma(&self, prices: &[f64], params: SmaParams) -> IndicatorResult<f64> {
        ensure_len(prices, params.period)?;
        Ok(mean(&prices[prices.len() - params.period..]))
    }
}
