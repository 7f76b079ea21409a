//! 모멘텀 지표.

use super::{ensure_len, IndicatorResult};

/// 모멘텀 계산기.
#[derive(Debug, Default, Clone, Copy)]
pub struct MomentumCalculator;

impl MomentumCalculator {
    /// 새로운 모멘텀 계산기 생성.
    pub fn new() -> Self {
        Self
    }

    /// 변화율 (Rate of Change).
    ///
    /// 최신 종가와 끝에서 `lookback`번째 종가의 상대 변화입니다.
    /// `lookback = 5`이면 `(p[-1] - p[-5]) / p[-5]`.
    pub fn rate_of_change(&self, prices: &[f64], lookback: usize) -> IndicatorResult<f64> {
        ensure_len(prices, lookback.max(1))?;
        let last = prices[prices.len() - 1];
        let base = prices[prices.len() - lookback.max(1)];
        Ok((last - base) / base)
    }
}
