//! 변동성 지표.
//!
//! - 변동계수 (Coefficient of Variation): 모표준편차 / 평균

use super::{ensure_len, mean, IndicatorResult};

/// 변동성 지표 계산기.
#[derive(Debug, Default, Clone, Copy)]
pub struct VolatilityIndicators;

impl VolatilityIndicators {
    /// 새로운 변동성 지표 계산기 생성.
    pub fn new() -> Self {
        Self
    }

    /// 최신 `period`개 종가의 변동계수.
    ///
    /// 표준편차는 N으로 나누는 모표준편차입니다.
    pub fn coefficient_of_variation(&self, prices: &[f64], period: usize) -> IndicatorResult<f64> {
        ensure_len(prices, period.max(1))?;
        let window = &prices[prices.len() - period.max(1)..];
        let avg = mean(window);
        if avg == 0.0 {
            return Ok(0.0);
        }
        Ok(population_std(window, avg) / avg)
    }
}

/// 평균이 주어진 모표준편차.
fn population_std(values: &[f64], avg: f64) -> f64 {
    let variance = values.iter().map(|v| (v - avg).powi(2)).sum::<f64>() / values.len() as f64;
    variance.sqrt()
}
