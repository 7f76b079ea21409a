//! 종가 시계열.

use serde::{Deserialize, Serialize};

/// 일별 종가 시계열 (오래된 것부터, 최신이 마지막).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PriceSeries(Vec<f64>);

impl PriceSeries {
    /// 종가 벡터로 시계열을 생성합니다.
    pub fn new(closes: Vec<f64>) -> Self {
        Self(closes)
    }

    /// 관측치 수.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// 비어 있는지 확인합니다.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// 전체 종가 슬라이스.
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }
}

impl From<Vec<f64>> for PriceSeries {
    fn from(closes: Vec<f64>) -> Self {
        Self(closes)
    }
}

impl AsRef<[f64]> for PriceSeries {
    fn as_ref(&self) -> &[f64] {
        &self.0
    }
}

impl FromIterator<f64> for PriceSeries {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// 소수점 둘째 자리 반올림 (정확히 절반이면 짝수 쪽).
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}
