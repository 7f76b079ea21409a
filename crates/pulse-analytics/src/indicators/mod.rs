//! 기술적 지표 모듈.
//!
//! 시그널 엔진이 사용하는 단순 지표들을 제공합니다.
//! 모든 입력은 오래된 것부터 정렬된 종가 슬라이스입니다.
//!
//! # 지원 지표
//!
//! ## 추세 지표
//! - **SMA**: 최근 N개 종가의 단순 평균
//!
//! ## 모멘텀 지표
//! - **변화율**: N개 전 종가 대비 최신 종가의 변화율
//!
//! ## 변동성 지표
//! - **변동계수**: 최근 N개 종가의 모표준편차 / 평균

pub mod momentum;
pub mod trend;
pub mod volatility;

use pulse_core::{PredictError, Symbol};
use thiserror::Error;

pub use momentum::MomentumCalculator;
pub use trend::TrendIndicators;
pub use volatility::VolatilityIndicators;

/// 지표 계산 오류.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IndicatorError {
    /// 빈 시계열
    #[error("데이터가 없습니다")]
    NoData,

    /// 데이터 부족 오류
    #[error("데이터가 부족합니다: 필요 {required}개, 제공 {provided}개")]
    InsufficientData { required: usize, provided: usize },
}

impl IndicatorError {
    /// 심볼 컨텍스트를 붙여 예측 에러로 변환합니다.
    pub fn for_symbol(self, symbol: &Symbol) -> PredictError {
        match self {
            IndicatorError::NoData => PredictError::NoData {
                symbol: symbol.to_string(),
            },
            IndicatorError::InsufficientData { required, provided } => {
                PredictError::InsufficientData {
                    symbol: symbol.to_string(),
                    required,
                    actual: provided,
                }
            }
        }
    }
}

/// 지표 계산 결과 타입.
pub type IndicatorResult<T> = Result<T, IndicatorError>;

/// 최소 길이를 확인합니다.
pub(crate) fn ensure_len(prices: &[f64], required: usize) -> IndicatorResult<()> {
    if prices.is_empty() {
        return Err(IndicatorError::NoData);
    }
    if prices.len() < required {
        return Err(IndicatorError::InsufficientData {
            required,
            provided: prices.len(),
        });
    }
    Ok(())
}

/// 슬라이스의 산술 평균 (빈 슬라이스는 0).
pub(crate) fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}
